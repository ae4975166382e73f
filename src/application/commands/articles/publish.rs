// src/application/commands/articles/publish.rs
use super::{ArticleCommandService, ensure_editor};
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, Category, PublishOverrides, PublishUpdate},
    domain::errors::DomainError,
};

pub struct PublishArticleCommand {
    pub id: i64,
    pub premium: Option<bool>,
    pub category: Option<String>,
}

/// Publish failures all surface as 422 with a uniform prefix, whatever the
/// underlying reason (missing article, terminal state, bad override).
fn not_published(reason: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::unprocessable(format!("Article not published: {reason}"))
}

impl ArticleCommandService {
    pub async fn publish_article(
        &self,
        actor: &AuthenticatedUser,
        command: PublishArticleCommand,
    ) -> ApplicationResult<()> {
        ensure_editor(actor)?;

        let id =
            ArticleId::new(command.id).map_err(|_| not_published("article not found"))?;
        let category = command
            .category
            .as_deref()
            .map(str::parse::<Category>)
            .transpose()
            .map_err(not_published)?;

        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_published("article not found"))?;

        let overrides = PublishOverrides {
            category,
            premium: command.premium,
        };
        article
            .publish(overrides, self.clock.now())
            .map_err(|_| not_published("article already published"))?;

        let update = PublishUpdate::from_article(&article)?;
        match self.write_repo.mark_published(update).await {
            Ok(published) => {
                tracing::info!(article_id = %published.id, "article published");
                Ok(())
            }
            // A concurrent publish won the conditional update.
            Err(DomainError::Conflict(_)) => Err(not_published("article already published")),
            Err(other) => Err(other.into()),
        }
    }
}
