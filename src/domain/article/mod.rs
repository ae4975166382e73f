pub mod entity;
pub mod listing;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ImageAttachment, NewArticle, PublishOverrides, PublishUpdate};
pub use listing::{CategoryFilter, ListingPage, ListingPlan, ListingRequest, PAGE_SIZE};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleId, ArticleTitle, Category};
