use super::ArticleQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, DraftArticleDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetDraftQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// Moderation queue: unpublished articles only.
    pub async fn list_drafts(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<Vec<DraftArticleDto>> {
        crate::application::commands::articles::ensure_editor(actor)?;
        let drafts = self.read_repo.list_drafts().await?;
        Ok(drafts.into_iter().map(Into::into).collect())
    }

    /// Moderation detail view. A published article is a terminal state here,
    /// reported distinctly from a missing one.
    pub async fn get_draft(
        &self,
        actor: &AuthenticatedUser,
        query: GetDraftQuery,
    ) -> ApplicationResult<DraftArticleDto> {
        crate::application::commands::articles::ensure_editor(actor)?;
        let id = ArticleId::new(query.id).map_err(|_| {
            ApplicationError::not_found(format!(
                "Article with id {} could not be found.",
                query.id
            ))
        })?;
        let article = self.read_repo.find_by_id(id).await?.ok_or_else(|| {
            ApplicationError::not_found(format!(
                "Article with id {} could not be found.",
                query.id
            ))
        })?;

        if article.published {
            return Err(ApplicationError::validation(
                "This article was already published",
            ));
        }

        Ok(article.into())
    }
}
