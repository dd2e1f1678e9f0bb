// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific knowledge of the listing site: *where the data lives in the
//! HTML* and *how to pull it out*. Specs are pure parsers over a document
//! string so they can be tested offline against captured fixtures.
//!
//! Fetching, error swallowing and progress reporting live in `scrape`;
//! turning listings into stored records lives in `store::AirdropStore::import`.
pub mod airdrops;
