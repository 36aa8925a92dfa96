// src/domain/post/entity.rs
use crate::domain::post::value_objects::{
    PostAuthor, PostContent, PostId, PostSlug, PostStatus, PostTag, PostTitle,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub author: PostAuthor,
    pub tags: Vec<PostTag>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A post ready for insertion. The slug is only a candidate until the
/// storage unique index accepts it.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub author: PostAuthor,
    pub tags: Vec<PostTag>,
    pub status: PostStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    pub fn into_post(self, id: PostId) -> Post {
        Post {
            id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            author: self.author,
            tags: self.tags,
            status: self.status,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
