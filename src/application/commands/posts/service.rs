// src/application/commands/posts/service.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::ports::time::Clock,
    domain::post::{PostSlugService, PostWriteRepository},
};

/// How many times a creation re-resolves its slug after losing an insert race.
pub const DEFAULT_INSERT_ATTEMPTS: u32 = 5;

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) insert_attempts: u32,
    pub(super) resolve_timeout: Option<Duration>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            slug_service,
            clock,
            insert_attempts: DEFAULT_INSERT_ATTEMPTS,
            resolve_timeout: None,
        }
    }

    pub fn with_insert_attempts(mut self, attempts: u32) -> Self {
        self.insert_attempts = attempts.max(1);
        self
    }

    /// Bounds each slug resolution; on expiry the pending existence check is
    /// dropped and nothing is inserted.
    pub fn with_resolve_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.resolve_timeout = timeout;
        self
    }
}
