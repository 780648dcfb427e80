// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific extraction: *where the ground truth lives in the HTML* and
//! *how to read it robustly*.
//!
//! ## What lives here
//! - **Selector choice** for each field (`tag[attr="value"]`, exact match).
//! - **Routing** of each located fragment to its grammar in `fields`.
//! - **Sentinel policy**: a field that is missing or malformed is logged at
//!   debug level and replaced by `""` / `None`; assembly never aborts.
//!
//! ## What does **not** live here
//! - Reading files off disk beyond a single document (`source`).
//! - Writing rows (`sink`) or driving a batch (`runner`).
//!
//! ## Conventions & invariants
//! - Return a **stable column shape**: `AlbumRecord` always carries nine fields
//!   in `AlbumRecord::HEADERS` order.
//! - Specs are testable **offline** against saved pages.
pub mod album;
