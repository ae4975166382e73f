// src/presentation/http/controllers/admin_articles.rs
use crate::application::{
    commands::articles::PublishArticleCommand,
    dto::DraftArticleDto,
    error::ApplicationError,
    queries::articles::GetDraftQuery,
};
use super::articles::parse_article_id;
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;
use serde_json::json;

const ACTIVITY_PUBLISH: &str = "PUBLISH";

#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ModerationRequest {
    #[serde(default)]
    pub activity: String,
    #[serde(default)]
    pub premium: Option<bool>,
    #[serde(default)]
    pub category: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/admin/articles",
    responses(
        (status = 200, description = "Unpublished articles awaiting moderation.", body = [DraftArticleDto]),
        (status = 401, description = "Caller is not an editor.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(("bearer" = [])),
    tag = "Moderation"
)]
pub async fn list_drafts(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
) -> HttpResult<Json<Vec<DraftArticleDto>>> {
    state
        .services
        .article_queries
        .list_drafts(&user)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id.")),
    responses(
        (status = 200, description = "Draft detail.", body = DraftArticleDto),
        (status = 400, description = "Article is already published.", body = crate::presentation::http::error::ErrorBody),
        (status = 404, description = "Unknown article.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(("bearer" = [])),
    tag = "Moderation"
)]
pub async fn get_draft(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
) -> HttpResult<Json<DraftArticleDto>> {
    let id = parse_article_id(&id)?;
    state
        .services
        .article_queries
        .get_draft(&user, GetDraftQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/admin/articles/{id}",
    params(("id" = i64, Path, description = "Article id.")),
    request_body = ModerationRequest,
    responses(
        (status = 200, description = "Article published."),
        (status = 401, description = "Caller is not an editor.", body = crate::presentation::http::error::ErrorBody),
        (status = 422, description = "Publish failed.", body = crate::presentation::http::error::ErrorBody)
    ),
    security(("bearer" = [])),
    tag = "Moderation"
)]
pub async fn moderate_article(
    Extension(state): Extension<HttpState>,
    Authenticated(user): Authenticated,
    Path(id): Path<String>,
    Json(payload): Json<ModerationRequest>,
) -> HttpResult<Json<serde_json::Value>> {
    let id = parse_article_id(&id)?;
    if payload.activity != ACTIVITY_PUBLISH {
        return Err(HttpError::from_error(ApplicationError::unprocessable(
            format!("unsupported activity: {}", payload.activity),
        )));
    }

    state
        .services
        .article_commands
        .publish_article(
            &user,
            PublishArticleCommand {
                id,
                premium: payload.premium,
                category: payload.category,
            },
        )
        .await
        .into_http()?;

    Ok(Json(json!({ "message": "Article successfully published!" })))
}
