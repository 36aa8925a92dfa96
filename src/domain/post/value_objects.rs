use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 150;
pub const DEFAULT_AUTHOR: &str = "Anonymous Author";

/// Separator used between slug tokens and before disambiguating suffixes.
pub const SLUG_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub i64);

impl PostId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("post id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<PostId> for i64 {
    fn from(value: PostId) -> Self {
        value.0
    }
}

/// A trimmed post title between 3 and 150 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }

        let chars = trimmed.chars().count();
        if chars < TITLE_MIN_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at least {TITLE_MIN_CHARS} characters"
            )));
        }
        if chars > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at most {TITLE_MAX_CHARS} characters"
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A URL-safe identifier restricted to `[a-z0-9]` words joined by single `-`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        if !is_slug_shaped(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must be lowercase ascii words separated by single hyphens"
            )));
        }
        Ok(Self(value))
    }

    /// Appends a numeric disambiguator, e.g. `hello-world` + 2 = `hello-world-2`.
    pub fn with_suffix(&self, counter: u32) -> Self {
        Self(format!("{}{SLUG_SEPARATOR}{counter}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_slug_shaped(value: &str) -> bool {
    value.split(SLUG_SEPARATOR).all(|word| {
        !word.is_empty()
            && word
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PostSlug> for String {
    fn from(value: PostSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostAuthor(String);

impl PostAuthor {
    /// Missing or blank authors fall back to [`DEFAULT_AUTHOR`].
    pub fn new(value: Option<String>) -> Self {
        match value.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => Self(name.to_string()),
            _ => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for PostAuthor {
    fn default() -> Self {
        Self(DEFAULT_AUTHOR.to_string())
    }
}

/// A trimmed, lowercased tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostTag(String);

impl PostTag {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let tag = value.as_ref().trim().to_lowercase();
        if tag.is_empty() {
            return Err(DomainError::Validation("tag cannot be empty".into()));
        }
        Ok(Self(tag))
    }

    /// Builds the tag list for a post, silently dropping blank entries.
    pub fn collect<I, S>(values: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().filter_map(|v| Self::new(v).ok()).collect()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Self::Draft),
            "published" => Ok(Self::Published),
            "archived" => Ok(Self::Archived),
            other => Err(DomainError::Validation(format!(
                "status must be one of draft, published, archived (got `{other}`)"
            ))),
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
