// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific knowledge of *where the data lives in the HTML* and *how to
//! pull it out*. A spec takes markup and returns rows; it never fetches,
//! caches, numbers rows, or writes files.
//!
//! ## Conventions
//! - Fixed structural paths (CSS child combinators + `:nth-of-type`), anchored
//!   at the list item with `:scope`.
//! - A missing leaf node yields `""`. A missing *structural* piece fails the
//!   whole page with [`crate::error::Error::Parse`]; there is no per-item skip.
//! - Specs are testable offline against captured fixtures.
//!
//! ## Typical call chain
//! ```text
//! runner → scrape::collect_movies → Fetch::fetch_page
//!                                 → specs::top250::parse_page
//!                                 → data::DatasetBuilder
//! ```
pub mod top250;
