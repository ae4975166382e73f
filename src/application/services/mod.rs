// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{images::ImageDecoder, security::TokenVerifier, time::Clock},
        queries::articles::ArticleQueryService,
    },
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    token_verifier: Arc<dyn TokenVerifier>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        image_decoder: Arc<dyn ImageDecoder>,
        token_verifier: Arc<dyn TokenVerifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&article_read_repo),
            Arc::clone(&image_decoder),
            Arc::clone(&clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&clock),
        ));

        Self {
            article_commands,
            article_queries,
            token_verifier,
        }
    }

    pub fn token_verifier(&self) -> Arc<dyn TokenVerifier> {
        Arc::clone(&self.token_verifier)
    }
}
