// src/application/ports/security.rs
use crate::application::{dto::AuthenticatedUser, error::ApplicationResult};
use async_trait::async_trait;

/// Boundary to the external identity provider: resolves a bearer token to an
/// authenticated user or rejects it.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser>;
}
