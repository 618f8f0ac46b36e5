// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications. Each spec focuses on one page and
//! encodes *where the ground truth lives in the HTML* and *how to extract it*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page, via the `core::html` scanner
//!   (selector paths, tag blocks, text extraction).
//! - **Row qualification** (which rows are data, which are headers or
//!   section separators).
//!
//! ## What does **not** live here
//! - **Fetching** – `core::net`.
//! - **Number conversion** – `values` turns the raw strings into numbers.
//! - **Charts** – `gui`.
//!
//! ## Typical call chain
//! ```text
//! runner → core::net::fetch_page → specs::squad::extract
//!                                → values::normalize / drop_missing
//!                                → gui::market_chart::show
//! ```
//!
//! ## Testing notes
//! Specs are testable **offline** against captured or hand-built fixtures.
pub mod squad;
