//! Core library for tvfeed
//!
//! This crate implements the **Functional Core** of the tvfeed application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! - **`tvfeed_core`** (this crate): pure transformation functions with zero I/O
//! - **`tvfeed`**: network fetching, the HTTP server, and the CLI (the Imperative Shell)
//!
//! Everything here is deterministic: the same upstream payload and page
//! coordinates always produce the same HTML. That keeps the interesting
//! logic (the pagination window, the document assembly, the page-parameter
//! parsing) testable with plain fixture data and no mocking.
//!
//! # Module Organization
//!
//! - [`feed`]: upstream payload model and page-count arithmetic
//! - [`query`]: inbound `page` query-parameter parsing
//! - [`pagination`]: sliding-window pagination controls
//! - [`page`]: full HTML document assembly

pub mod feed;
pub mod page;
pub mod pagination;
pub mod query;
