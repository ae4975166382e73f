use crate::domain::article::{Article, ListingPage};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Listing entry. Deliberately excludes `created_at`/`updated_at`; summaries
/// only carry what the front page renders.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleSummaryDto {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub published_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub international: bool,
}

impl From<Article> for ArticleSummaryDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            category: article.category.as_str().to_owned(),
            published_at: article.published_at,
            location: article.location,
            international: article.international,
        }
    }
}

/// One page of the public listing. `next_page` serializes as `null` when
/// there is nothing further, which callers rely on as the end-of-feed signal.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ListingPageDto {
    pub page: u32,
    pub next_page: Option<u32>,
    pub articles: Vec<ArticleSummaryDto>,
}

impl From<ListingPage> for ListingPageDto {
    fn from(page: ListingPage) -> Self {
        Self {
            page: page.page,
            next_page: page.next_page,
            articles: page.articles.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category: String,
    pub premium: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub international: bool,
}

impl From<Article> for ArticleDetailDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            body: article.body.into(),
            category: article.category.as_str().to_owned(),
            premium: article.premium,
            published_at: article.published_at,
            location: article.location,
            international: article.international,
        }
    }
}

/// Moderation view of an unpublished article.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DraftArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub category: String,
    pub premium: bool,
    pub location: Option<String>,
    pub international: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Article> for DraftArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            body: article.body.into(),
            category: article.category.as_str().to_owned(),
            premium: article.premium,
            location: article.location,
            international: article.international,
            created_at: article.created_at,
        }
    }
}
