// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::posts::create_post,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::application::dto::PostDto,
            crate::domain::post::PostStatus
        )
    ),
    tags(
        (name = "Posts", description = "Post creation with unique slugs"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Pinyin Press API",
        description = "Post backend with transliterated, collision-free slugs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}
