use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
}

fn not_found(id: i64) -> ApplicationError {
    ApplicationError::not_found(format!("Article with id {id} could not be found."))
}

impl ArticleQueryService {
    /// Public single-article lookup. Unpublished articles are reported with
    /// the same message as missing ones so drafts never leak.
    pub async fn get_published_article(
        &self,
        query: GetArticleQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(query.id).map_err(|_| not_found(query.id))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|article| article.published)
            .ok_or_else(|| not_found(query.id))?;
        Ok(article.into())
    }
}
