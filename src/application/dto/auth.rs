use crate::domain::user::{Role, UserId};

/// Identity attached to a verified bearer token. The identity provider is an
/// external collaborator; this is everything the service needs to know.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    pub fn is_editor(&self) -> bool {
        self.role == Role::Editor
    }
}
