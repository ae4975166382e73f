// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

use newsdesk::application::ports::time::Clock;
use newsdesk::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleWriteRepository, ListingPlan, NewArticle,
    PublishUpdate,
};
use newsdesk::domain::errors::{DomainError, DomainResult};

/// Deterministic clock for listing-window assertions.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn now() -> Self {
        Self(Utc::now())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Article store backed by a plain `Vec`, evaluating the same listing plan
/// the Postgres repository translates to SQL.
pub struct InMemoryArticleRepository {
    articles: Mutex<Vec<Article>>,
    next_id: AtomicI64,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self {
            articles: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn seeded(articles: Vec<Article>) -> Self {
        let max_id = articles
            .iter()
            .map(|article| i64::from(article.id))
            .max()
            .unwrap_or(0);
        Self {
            articles: Mutex::new(articles),
            next_id: AtomicI64::new(max_id + 1),
        }
    }

    pub fn push(&self, article: Article) {
        self.articles.lock().unwrap().push(article);
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.articles
            .lock()
            .unwrap()
            .iter()
            .find(|article| i64::from(article.id) == id)
            .cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            body: article.body,
            category: article.category,
            location: article.location,
            international: article.international,
            premium: false,
            published: false,
            published_at: None,
            created_at: article.created_at,
            updated_at: article.updated_at,
        };
        self.articles.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn mark_published(&self, update: PublishUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|article| article.id == update.id && !article.published)
            .ok_or_else(|| DomainError::Conflict("article already published".into()))?;
        article.published = true;
        article.published_at = Some(update.published_at);
        article.category = update.category;
        article.premium = update.premium;
        article.updated_at = update.updated_at;
        Ok(article.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id.into()))
    }

    async fn list_window(&self, plan: &ListingPlan) -> DomainResult<Vec<Article>> {
        let mut matching: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| plan.matches(article))
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.published_at
                .cmp(&a.published_at)
                .then_with(|| i64::from(b.id).cmp(&i64::from(a.id)))
        });
        Ok(matching
            .into_iter()
            .skip(usize::try_from(plan.offset).unwrap_or(usize::MAX))
            .take(plan.fetch_limit as usize)
            .collect())
    }

    async fn list_drafts(&self) -> DomainResult<Vec<Article>> {
        let mut drafts: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|article| !article.published)
            .cloned()
            .collect();
        drafts.sort_by_key(|article| (article.created_at, i64::from(article.id)));
        Ok(drafts)
    }
}
