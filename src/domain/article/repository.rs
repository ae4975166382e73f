use crate::domain::article::entity::{Article, NewArticle, PublishUpdate};
use crate::domain::article::listing::ListingPlan;
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Applies the draft-to-published transition. Must only touch rows that
    /// are still unpublished so concurrent publish attempts lose cleanly.
    async fn mark_published(&self, update: PublishUpdate) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Returns up to `plan.fetch_limit` matching rows starting at
    /// `plan.offset`, ordered by `published_at` descending.
    async fn list_window(&self, plan: &ListingPlan) -> DomainResult<Vec<Article>>;
    /// Drafts for the moderation surface, oldest first.
    async fn list_drafts(&self) -> DomainResult<Vec<Article>>;
}
