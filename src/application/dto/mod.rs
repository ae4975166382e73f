pub mod articles;
pub mod auth;

pub use articles::{ArticleDetailDto, ArticleSummaryDto, DraftArticleDto, ListingPageDto};
pub use auth::AuthenticatedUser;
