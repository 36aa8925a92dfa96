// src/domain/post/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{time::Clock, util::SlugGenerator};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostSlug, PostTitle, SLUG_SEPARATOR};

/// Static base used when a title yields no slug characters at all.
pub const FALLBACK_SLUG_BASE: &str = "untitled-post";

pub const DEFAULT_MAX_SUFFIX_ATTEMPTS: u32 = 1000;

/// Domain service responsible for producing unique slugs for posts.
///
/// Existence checks only steer the choice of candidate: two concurrent
/// resolutions can pick the same slug, and the storage unique index decides
/// which insert wins.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
    clock: Arc<dyn Clock>,
    max_suffix_attempts: u32,
}

impl PostSlugService {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        generator: Arc<dyn SlugGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            generator,
            clock,
            max_suffix_attempts: DEFAULT_MAX_SUFFIX_ATTEMPTS,
        }
    }

    pub fn with_max_suffix_attempts(mut self, attempts: u32) -> Self {
        self.max_suffix_attempts = attempts.max(1);
        self
    }

    /// Derives a slug for `title` that is free at the moment of the last
    /// existence check.
    ///
    /// Titles that normalize to nothing (only punctuation, emoji, ...) get
    /// `untitled-post-<unix millis>` without consulting the store.
    pub async fn resolve_unique_slug(&self, title: &PostTitle) -> DomainResult<PostSlug> {
        let base = self.generator.slugify(title.as_str());
        if base.is_empty() {
            let slug = self.fallback_slug()?;
            tracing::debug!(slug = %slug, "title has no sluggable content, using fallback");
            return Ok(slug);
        }

        self.resolve(PostSlug::new(base)?).await
    }

    async fn resolve(&self, base: PostSlug) -> DomainResult<PostSlug> {
        if !self.read_repo.slug_exists(&base).await? {
            return Ok(base);
        }

        for counter in 1..=self.max_suffix_attempts {
            let candidate = base.with_suffix(counter);
            if !self.read_repo.slug_exists(&candidate).await? {
                tracing::debug!(base = %base, slug = %candidate, "resolved slug collision");
                return Ok(candidate);
            }
        }

        tracing::warn!(
            base = %base,
            attempts = self.max_suffix_attempts,
            "no free slug suffix left"
        );
        Err(DomainError::SlugExhausted {
            base: base.into_inner(),
            attempts: self.max_suffix_attempts,
        })
    }

    fn fallback_slug(&self) -> DomainResult<PostSlug> {
        let millis = self.clock.now().timestamp_millis().max(0);
        PostSlug::new(format!("{FALLBACK_SLUG_BASE}{SLUG_SEPARATOR}{millis}"))
    }
}
