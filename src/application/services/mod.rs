// src/application/services/mod.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::{
        commands::posts::{DEFAULT_INSERT_ATTEMPTS, PostCommandService},
        ports::{ClockPort, SlugGeneratorPort},
    },
    domain::post::{
        PostReadRepository, PostSlugService, PostWriteRepository,
        services::DEFAULT_MAX_SUFFIX_ATTEMPTS,
    },
};

/// Bounds applied to slug resolution and the insert retry loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlugPolicy {
    pub max_suffix_attempts: u32,
    pub insert_attempts: u32,
    pub resolve_timeout: Option<Duration>,
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self {
            max_suffix_attempts: DEFAULT_MAX_SUFFIX_ATTEMPTS,
            insert_attempts: DEFAULT_INSERT_ATTEMPTS,
            resolve_timeout: None,
        }
    }
}

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    slug_service: Arc<PostSlugService>,
}

impl ApplicationServices {
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        clock: Arc<ClockPort>,
        slugger: Arc<SlugGeneratorPort>,
        policy: SlugPolicy,
    ) -> Self {
        let slug_service = Arc::new(
            PostSlugService::new(
                Arc::clone(&post_read_repo),
                Arc::clone(&slugger),
                Arc::clone(&clock),
            )
            .with_max_suffix_attempts(policy.max_suffix_attempts),
        );

        let post_commands = Arc::new(
            PostCommandService::new(
                Arc::clone(&post_write_repo),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )
            .with_insert_attempts(policy.insert_attempts)
            .with_resolve_timeout(policy.resolve_timeout),
        );

        Self {
            post_commands,
            slug_service,
        }
    }

    pub fn slug_service(&self) -> Arc<PostSlugService> {
        Arc::clone(&self.slug_service)
    }
}
