// src/presentation/http/openapi.rs
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::routes::health,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::admin_articles::list_drafts,
        crate::presentation::http::controllers::admin_articles::get_draft,
        crate::presentation::http::controllers::admin_articles::moderate_article,
    ),
    components(schemas(
        StatusResponse,
        crate::application::dto::ArticleSummaryDto,
        crate::application::dto::ArticleDetailDto,
        crate::application::dto::DraftArticleDto,
        crate::application::dto::ListingPageDto,
        crate::presentation::http::controllers::articles::CreateArticleRequest,
        crate::presentation::http::controllers::admin_articles::ModerationRequest,
        crate::presentation::http::error::ErrorBody,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Articles", description = "Public listing, detail and submission."),
        (name = "Moderation", description = "Editor-only draft review and publishing."),
        (name = "System", description = "Service plumbing.")
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/docs/swagger").url("/docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/docs/redoc", ApiDoc::openapi()))
}
