// tests/support/mod.rs
#![allow(dead_code)]

pub mod builders;
pub mod mocks;

use newsdesk::application::ports::{
    images::ImageDecoder, security::TokenVerifier, time::Clock,
};
use newsdesk::application::services::ApplicationServices;
use newsdesk::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use newsdesk::domain::user::Role;
use newsdesk::infrastructure::{images::Base64ImageDecoder, security::StaticTokenVerifier};
use newsdesk::presentation::http::{routes::build_router, state::HttpState};
use std::sync::Arc;

pub const WRITER_TOKEN: &str = "writer-token";
pub const EDITOR_TOKEN: &str = "editor-token";

pub fn test_verifier() -> StaticTokenVerifier {
    StaticTokenVerifier::new([
        (WRITER_TOKEN.to_owned(), "wilma".to_owned(), Role::Writer),
        (EDITOR_TOKEN.to_owned(), "edna".to_owned(), Role::Editor),
    ])
}

pub fn make_test_router(repo: Arc<mocks::InMemoryArticleRepository>) -> axum::Router {
    let write_repo: Arc<dyn ArticleWriteRepository> = repo.clone();
    let read_repo: Arc<dyn ArticleReadRepository> = repo;
    let image_decoder: Arc<dyn ImageDecoder> = Arc::new(Base64ImageDecoder);
    let token_verifier: Arc<dyn TokenVerifier> = Arc::new(test_verifier());
    let clock: Arc<dyn Clock> = Arc::new(mocks::FixedClock::now());

    let services = Arc::new(ApplicationServices::new(
        write_repo,
        read_repo,
        image_decoder,
        token_verifier,
        clock,
    ));
    build_router(HttpState { services })
}
