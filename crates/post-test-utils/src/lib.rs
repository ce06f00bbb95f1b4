//! Shared test utilities for the post-media workspace.
//!
//! This crate provides block builders and fixture loading so crate test
//! suites do not each hand-write block markup. It is a dev-dependency only.
//!
//! # Modules
//!
//! - [`blocks`] — builders for serialized blocks of each kind
//! - [`fixtures`] — loaders for the posts under `test-fixtures/posts`

pub mod blocks;
pub mod fixtures;
