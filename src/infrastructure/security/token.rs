// src/infrastructure/security/token.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenVerifier,
};
use crate::domain::user::{Role, UserId};
use async_trait::async_trait;
use std::collections::HashMap;

/// Stand-in for the external identity provider: a fixed directory of bearer
/// tokens configured at startup. Token issuance, sessions and revocation all
/// live outside this service.
pub struct StaticTokenVerifier {
    tokens: HashMap<String, AuthenticatedUser>,
}

impl StaticTokenVerifier {
    /// Entries are `(token, username, role)`. User ids are assigned from the
    /// entry order; they only need to be stable within a process.
    pub fn new(entries: impl IntoIterator<Item = (String, String, Role)>) -> Self {
        let tokens = entries
            .into_iter()
            .enumerate()
            .map(|(index, (token, username, role))| {
                let user = AuthenticatedUser {
                    id: UserId(index as i64 + 1),
                    username,
                    role,
                };
                (token, user)
            })
            .collect();
        Self { tokens }
    }
}

#[async_trait]
impl TokenVerifier for StaticTokenVerifier {
    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.tokens
            .get(token)
            .cloned()
            .ok_or_else(|| ApplicationError::unauthorized("invalid token"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verifier() -> StaticTokenVerifier {
        StaticTokenVerifier::new([
            ("w-token".to_owned(), "wilma".to_owned(), Role::Writer),
            ("e-token".to_owned(), "edna".to_owned(), Role::Editor),
        ])
    }

    #[tokio::test]
    async fn resolves_known_tokens() {
        let user = verifier().authenticate("e-token").await.unwrap();
        assert_eq!(user.username, "edna");
        assert_eq!(user.role, Role::Editor);
    }

    #[tokio::test]
    async fn rejects_unknown_tokens() {
        let err = verifier().authenticate("nope").await.unwrap_err();
        assert!(matches!(err, ApplicationError::Unauthorized(_)));
    }
}
