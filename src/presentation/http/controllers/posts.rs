// src/presentation/http/controllers/posts.rs
use crate::application::{commands::posts::CreatePostCommand, dto::PostDto, error::ApplicationError};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::rejection::JsonRejection, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// One of `draft`, `published`, `archived`; defaults to `draft`.
    #[serde(default)]
    pub status: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created with a unique slug.", body = PostDto),
        (status = 400, description = "Missing or invalid fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 500, description = "Storage failure or no unique slug could be claimed.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreatePostRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let Json(payload) = payload.map_err(|rejection| {
        HttpError::from_error(ApplicationError::validation(rejection.body_text()))
    })?;

    let mut builder = CreatePostCommand::builder()
        .author(payload.author)
        .tags(payload.tags)
        .status(payload.status);
    if let Some(title) = payload.title {
        builder = builder.title(title);
    }
    if let Some(content) = payload.content {
        builder = builder.content(content);
    }
    let command = builder
        .build()
        .map_err(|msg| HttpError::from_error(ApplicationError::validation(msg)))?;

    state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()
        .map(|post| (StatusCode::CREATED, Json(post)))
}
