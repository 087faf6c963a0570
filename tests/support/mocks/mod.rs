// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod content;
pub mod time;

pub use content::{FailingContent, InMemoryContent, article};
pub use time::{FixedClock, fixed_now};
