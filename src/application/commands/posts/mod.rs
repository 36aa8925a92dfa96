// src/application/commands/posts/mod.rs
mod create;
mod service;

pub use create::{CreatePostCommand, CreatePostCommandBuilder};
pub use service::{DEFAULT_INSERT_ATTEMPTS, PostCommandService};
