// tests/support/mocks/post_repos.rs
use async_trait::async_trait;
use pinyin_press::domain::errors::{DomainError, DomainResult};
use pinyin_press::domain::post::{
    NewPost, Post, PostId, PostReadRepository, PostSlug, PostWriteRepository,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use tokio::sync::Barrier;

/* -------------------------------- InMemoryPostStore -------------------------------- */

/// 一意制約付きのインメモリ投稿ストア
///
/// `insert` はロック内で重複確認と追加を行うため、スラグの一意性は
/// データベースの一意インデックスと同じく挿入時に保証される。
/// `gated(n)` を使うと最初の n 回の存在確認が全員揃うまで待機し、
/// check-then-act の競合を確実に再現できる。
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicI64,
    exists_calls: AtomicUsize,
    rejected_inserts: AtomicUsize,
    gate: Option<(Barrier, usize)>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gated(writers: usize) -> Self {
        Self {
            gate: Some((Barrier::new(writers), writers)),
            ..Self::default()
        }
    }

    pub fn slugs(&self) -> Vec<String> {
        self.posts
            .lock()
            .unwrap()
            .iter()
            .map(|p| p.slug.as_str().to_string())
            .collect()
    }

    pub fn exists_calls(&self) -> usize {
        self.exists_calls.load(Ordering::SeqCst)
    }

    pub fn rejected_inserts(&self) -> usize {
        self.rejected_inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPostStore {
    async fn slug_exists(&self, slug: &PostSlug) -> DomainResult<bool> {
        let call = self.exists_calls.fetch_add(1, Ordering::SeqCst);
        if let Some((barrier, gated)) = &self.gate {
            if call < *gated {
                barrier.wait().await;
            }
        }

        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.slug == *slug))
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPostStore {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if posts.iter().any(|p| p.slug == post.slug) {
            self.rejected_inserts.fetch_add(1, Ordering::SeqCst);
            return Err(DomainError::DuplicateSlug(format!(
                "slug `{}` already exists",
                post.slug
            )));
        }

        let id = PostId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1)?;
        let created = post.into_post(id);
        posts.push(created.clone());
        Ok(created)
    }
}

/* -------------------------------- 異常系リポジトリ -------------------------------- */

/// 存在確認が常に失敗する読み取りリポジトリ
pub struct FailingPostRead;

#[async_trait]
impl PostReadRepository for FailingPostRead {
    async fn slug_exists(&self, _slug: &PostSlug) -> DomainResult<bool> {
        Err(DomainError::Persistence("connection refused".into()))
    }
}

/// 存在確認が応答しない読み取りリポジトリ
pub struct StalledPostRead;

#[async_trait]
impl PostReadRepository for StalledPostRead {
    async fn slug_exists(&self, _slug: &PostSlug) -> DomainResult<bool> {
        std::future::pending::<()>().await;
        Ok(false)
    }
}
