use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post};
use crate::domain::post::value_objects::PostSlug;
use async_trait::async_trait;

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    /// Inserts atomically. A slug already taken by a committed post must
    /// fail with [`DomainError::DuplicateSlug`](crate::domain::errors::DomainError::DuplicateSlug).
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    /// Point-in-time membership check; a hint only, not a reservation.
    async fn slug_exists(&self, slug: &PostSlug) -> DomainResult<bool>;
}
