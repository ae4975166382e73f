// tests/support/builders.rs
use chrono::{DateTime, Utc};

use newsdesk::domain::article::{Article, ArticleBody, ArticleId, ArticleTitle, Category};

pub struct ArticleBuilder {
    id: i64,
    title: String,
    body: String,
    category: Category,
    location: Option<String>,
    international: bool,
    premium: bool,
    published_at: Option<DateTime<Utc>>,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            body: "Test body".into(),
            category: Category::Sport,
            location: None,
            international: false,
            premium: false,
            published_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn international(mut self) -> Self {
        self.international = true;
        self
    }

    pub fn premium(mut self) -> Self {
        self.premium = true;
        self
    }

    pub fn published_at(mut self, at: DateTime<Utc>) -> Self {
        self.published_at = Some(at);
        self
    }

    pub fn build(self) -> Article {
        let now = self.published_at.unwrap_or_else(Utc::now);
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: ArticleTitle::new(self.title).unwrap(),
            body: ArticleBody::new(self.body).unwrap(),
            category: self.category,
            location: self.location,
            international: self.international,
            premium: self.premium,
            published: self.published_at.is_some(),
            published_at: self.published_at,
            created_at: now,
            updated_at: now,
        }
    }
}
