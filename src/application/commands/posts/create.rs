// src/application/commands/posts/create.rs
use super::PostCommandService;
use crate::{
    application::{
        dto::PostDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        errors::DomainError,
        post::{NewPost, PostAuthor, PostContent, PostSlug, PostStatus, PostTag, PostTitle},
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub author: Option<String>,
    pub tags: Vec<String>,
    pub status: Option<String>,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author: Option<String>,
    tags: Vec<String>,
    status: Option<String>,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    pub fn tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn status(mut self, status: Option<String>) -> Self {
        self.status = status;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        match (self.title, self.content) {
            (Some(title), Some(content)) if !title.is_empty() && !content.is_empty() => {
                Ok(CreatePostCommand {
                    title,
                    content,
                    author: self.author,
                    tags: self.tags,
                    status: self.status,
                })
            }
            _ => Err("title and content are required fields"),
        }
    }
}

impl PostCommandService {
    /// Validates the post, claims a unique slug and inserts it.
    ///
    /// Losing an insert race to a concurrent creation with the same slug is
    /// recovered by resolving again, up to the configured attempt budget.
    pub async fn create_post(&self, command: CreatePostCommand) -> ApplicationResult<PostDto> {
        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let author = PostAuthor::new(command.author);
        let tags = PostTag::collect(&command.tags);
        let status = command
            .status
            .as_deref()
            .map(str::parse::<PostStatus>)
            .transpose()?
            .unwrap_or_default();

        for attempt in 1..=self.insert_attempts {
            let slug = self.resolve_slug(&title).await?;
            let now = self.clock.now();

            let new_post = NewPost {
                title: title.clone(),
                slug: slug.clone(),
                content: content.clone(),
                author: author.clone(),
                tags: tags.clone(),
                status,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_post).await {
                Ok(created) => {
                    tracing::info!(
                        post_id = i64::from(created.id),
                        slug = %created.slug,
                        "post created"
                    );
                    return Ok(created.into());
                }
                Err(DomainError::DuplicateSlug(_)) => {
                    tracing::warn!(attempt, slug = %slug, "slug claimed concurrently, resolving again");
                }
                Err(err) => return Err(err.into()),
            }
        }

        Err(ApplicationError::infrastructure(format!(
            "could not claim a unique slug after {} attempts",
            self.insert_attempts
        )))
    }

    async fn resolve_slug(&self, title: &PostTitle) -> ApplicationResult<PostSlug> {
        let resolution = self.slug_service.resolve_unique_slug(title);
        match self.resolve_timeout {
            Some(limit) => tokio::time::timeout(limit, resolution)
                .await
                .map_err(|_| ApplicationError::infrastructure("slug resolution timed out"))?
                .map_err(Into::into),
            None => resolution.await.map_err(Into::into),
        }
    }
}
