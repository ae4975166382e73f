// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleBody, ArticleId, ArticleTitle, Category, NewArticle},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub category: String,
    /// Base64 image payload, required. Decoding is delegated to the image
    /// service behind the `ImageDecoder` port.
    pub image: Option<String>,
}

pub struct CreatedArticle {
    pub id: ArticleId,
}

impl ArticleCommandService {
    /// Creates an unpublished article. Publication is a separate moderation
    /// step; `location`/`international`/`premium` are editorial attributes
    /// and start at their defaults.
    pub async fn create_article(
        &self,
        _actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<CreatedArticle> {
        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let category: Category = command.category.parse()?;

        let payload = command
            .image
            .as_deref()
            .map(str::trim)
            .filter(|payload| !payload.is_empty())
            .ok_or_else(|| ApplicationError::validation("Image can't be blank"))?;
        let image = self.image_decoder.decode(payload)?;

        let now = self.clock.now();
        let created = self
            .write_repo
            .insert(NewArticle {
                title,
                body,
                category,
                location: None,
                international: false,
                image,
                created_at: now,
                updated_at: now,
            })
            .await?;

        tracing::info!(article_id = %created.id, "article created");
        Ok(CreatedArticle { id: created.id })
    }
}
