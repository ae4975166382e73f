// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWriteRepository, Category, ListingPlan, NewArticle, PublishUpdate,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, body, category, location, international, premium, \
                               published, published_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    category: String,
    location: Option<String>,
    international: bool,
    premium: bool,
    published: bool,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            category: row.category.parse::<Category>()?,
            location: row.location,
            international: row.international,
            premium: row.premium,
            published: row.published,
            published_at: row.published_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            category,
            location,
            international,
            image,
            created_at,
            updated_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, body, category, location, international, premium, \
             published, published_at, image, image_content_type, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, FALSE, FALSE, NULL, $6, $7, $8, $9)
             RETURNING id, title, body, category, location, international, premium, published, \
             published_at, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(category.as_str())
        .bind(location)
        .bind(international)
        .bind(&image.bytes[..])
        .bind(&image.content_type)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn mark_published(&self, update: PublishUpdate) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "UPDATE articles
             SET published = TRUE, published_at = $2, category = $3, premium = $4, updated_at = $5
             WHERE id = $1 AND published = FALSE
             RETURNING id, title, body, category, location, international, premium, published, \
             published_at, created_at, updated_at",
        )
        .bind(i64::from(update.id))
        .bind(update.published_at)
        .bind(update.category.as_str())
        .bind(update.premium)
        .bind(update.updated_at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        // Zero rows means the article is gone or a concurrent publish won.
        let row = row.ok_or_else(|| DomainError::Conflict("article already published".into()))?;
        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    /// Translates the listing plan into one SQL predicate, mirroring
    /// `ListingPlan::matches`. `IS NOT DISTINCT FROM` gives the same
    /// absent-equals-absent location semantics as the in-memory evaluation.
    async fn list_window(&self, plan: &ListingPlan) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE published = TRUE AND (international = TRUE"
        ));

        if plan.local_scope {
            builder.push(" OR location IS NOT DISTINCT FROM ");
            builder.push_bind(plan.location.as_deref());
        }
        builder.push(")");

        if let Some(category) = plan.category.as_deref() {
            builder.push(" AND category = ");
            builder.push_bind(category);
        }

        if let Some(since) = plan.published_since {
            builder.push(" AND published_at >= ");
            builder.push_bind(since);
        }

        builder.push(" ORDER BY published_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(plan.fetch_limit));
        builder.push(" OFFSET ");
        // Offsets top out at (u32::MAX - 1) * PAGE_SIZE, comfortably inside i64.
        builder.push_bind(i64::try_from(plan.offset).unwrap_or(i64::MAX));

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_drafts(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE published = FALSE ORDER BY created_at, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
