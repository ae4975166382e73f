// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::{images::ImageDecoder, time::Clock},
    domain::article::{ArticleReadRepository, ArticleWriteRepository},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) image_decoder: Arc<dyn ImageDecoder>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        image_decoder: Arc<dyn ImageDecoder>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            image_decoder,
            clock,
        }
    }
}
