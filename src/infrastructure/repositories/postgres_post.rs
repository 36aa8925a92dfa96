// src/infrastructure/repositories/postgres_post.rs
use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    NewPost, Post, PostAuthor, PostContent, PostId, PostReadRepository, PostSlug, PostTag,
    PostTitle, PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    slug: String,
    content: String,
    author: String,
    tags: Vec<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Post {
            id: PostId::new(row.id)?,
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            content: PostContent::new(row.content)?,
            author: PostAuthor::new(Some(row.author)),
            tags: PostTag::collect(row.tags),
            status: row.status.parse()?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            title,
            slug,
            content,
            author,
            tags,
            status,
            created_at,
            updated_at,
        } = post;

        let tags: Vec<String> = tags.into_iter().map(PostTag::into_inner).collect();

        let row = sqlx::query_as::<_, PostRow>(
            "INSERT INTO posts (title, slug, content, author, tags, status, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING id, title, slug, content, author, tags, status, created_at, updated_at",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(author.as_str())
        .bind(&tags)
        .bind(status.as_str())
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Post::try_from(row)
    }
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn slug_exists(&self, slug: &PostSlug) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM posts WHERE slug = $1)")
            .bind(slug.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }
}
