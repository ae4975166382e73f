// src/application/commands/articles/authorize.rs
use crate::application::{
    dto::AuthenticatedUser,
    error::{ApplicationError, ApplicationResult},
};

/// Moderation actions are restricted to editors. The 401 wording mirrors what
/// API clients already display verbatim.
pub fn ensure_editor(actor: &AuthenticatedUser) -> ApplicationResult<()> {
    if actor.is_editor() {
        Ok(())
    } else {
        Err(ApplicationError::unauthorized("You are not authorized"))
    }
}
