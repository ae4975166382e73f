// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::CreateArticleCommand,
    dto::{ArticleDetailDto, ListingPageDto},
    error::ApplicationError,
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct ArticleListParams {
    /// Attribute of the caller's context, supplied by the client.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    /// Kept as a raw string so malformed values coerce to page 1 instead of
    /// failing extraction.
    #[serde(default)]
    pub page: Option<String>,
}

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub category: String,
    /// Base64 payload, optionally a data URI.
    #[serde(default)]
    pub image: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(
        ("category" = Option<String>, Query, description = "Category name or one of the keywords all/local/current."),
        ("page" = Option<String>, Query, description = "1-indexed page number."),
        ("location" = Option<String>, Query, description = "Caller location for local-scope visibility.")
    ),
    responses((status = 200, description = "One page of the public listing.", body = ListingPageDto)),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ArticleListParams>,
) -> HttpResult<Json<ListingPageDto>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            location: params.location,
            category: params.category,
            page: params.page,
        })
        .await
        .into_http()
        .map(Json)
}

/// Non-numeric ids get the same not-found body as unknown ones, keeping the
/// `{error, message}` error shape instead of axum's plain-text path rejection.
pub(super) fn parse_article_id(raw: &str) -> Result<i64, HttpError> {
    raw.trim().parse::<i64>().map_err(|_| {
        HttpError::from_error(ApplicationError::not_found(format!(
            "Article with id {raw} could not be found."
        )))
    })
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    params(("id" = i64, Path, description = "Article id.")),
    responses(
        (status = 200, description = "Full article detail.", body = ArticleDetailDto),
        (status = 404, description = "Unknown or unpublished article.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDetailDto>> {
    let id = parse_article_id(&id)?;
    state
        .services
        .article_queries
        .get_published_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 200, description = "Article created as a draft."),
        (status = 400, description = "Missing field or image.", body = crate::presentation::http::error::ErrorBody),
        (status = 401, description = "Missing or invalid token.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(("bearer" = [])),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Json(payload): Json<CreateArticleRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let created = state
        .services
        .article_commands
        .create_article(
            &user,
            CreateArticleCommand {
                title: payload.title,
                body: payload.body,
                category: payload.category,
                image: payload.image,
            },
        )
        .await
        .into_http()?;

    Ok(Json(json!({
        "id": i64::from(created.id),
        "message": "Article successfully created!",
    })))
}
