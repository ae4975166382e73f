mod authorize;
mod create;
mod publish;
mod service;

pub use authorize::ensure_editor;
pub use create::{CreateArticleCommand, CreatedArticle};
pub use publish::PublishArticleCommand;
pub use service::ArticleCommandService;
