// tests/support/mod.rs
// Shared by several integration test binaries; each binary uses only part of
// it, so unused-item warnings are silenced at the module level.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use helpers::*;
