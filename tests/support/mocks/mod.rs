// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod post_repos;
pub mod time;
pub mod util;

/* -------------------------------- 再エクスポート -------------------------------- */

// 時刻関連
pub use time::{FixedClock, TickingClock, fixed_now};

// 投稿リポジトリ
pub use post_repos::{FailingPostRead, InMemoryPostStore, StalledPostRead};

// ユーティリティ関連
pub use util::IdentitySlug;
