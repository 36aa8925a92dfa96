use crate::domain::post::{Post, PostStatus, PostTag};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            author: post.author.into_inner(),
            tags: post.tags.into_iter().map(PostTag::into_inner).collect(),
            status: post.status,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
