// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle, Category};
use crate::domain::errors::{DomainError, DomainResult};
use bytes::Bytes;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub category: Category,
    pub location: Option<String>,
    pub international: bool,
    pub premium: bool,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// The draft-to-published transition is one-way and happens exactly once;
    /// `category` and `premium` may be overridden at that moment.
    pub fn publish(
        &mut self,
        overrides: PublishOverrides,
        now: DateTime<Utc>,
    ) -> DomainResult<()> {
        if self.published {
            return Err(DomainError::Conflict("article already published".into()));
        }
        if let Some(category) = overrides.category {
            self.category = category;
        }
        if let Some(premium) = overrides.premium {
            self.premium = premium;
        }
        self.published = true;
        self.published_at = Some(now);
        self.updated_at = now;
        Ok(())
    }
}

/// Optional per-publish adjustments; anything left `None` keeps the stored value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PublishOverrides {
    pub category: Option<Category>,
    pub premium: Option<bool>,
}

/// Image payloads are stored alongside the article at create time. Decoding
/// from the transport encoding happens behind the `ImageDecoder` port.
#[derive(Debug, Clone)]
pub struct ImageAttachment {
    pub content_type: String,
    pub bytes: Bytes,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub category: Category,
    pub location: Option<String>,
    pub international: bool,
    pub image: ImageAttachment,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Write-side record of a completed publish transition.
#[derive(Debug, Clone)]
pub struct PublishUpdate {
    pub id: ArticleId,
    pub category: Category,
    pub premium: bool,
    pub published_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PublishUpdate {
    pub fn from_article(article: &Article) -> DomainResult<Self> {
        let published_at = article.published_at.ok_or_else(|| {
            DomainError::Validation("published articles require published_at".into())
        })?;
        Ok(Self {
            id: article.id,
            category: article.category,
            premium: article.premium,
            published_at,
            updated_at: article.updated_at,
        })
    }
}
