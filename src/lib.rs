//! Mimir: offline wiki content extraction from MediaWiki SQL dumps
//!
//! This crate reconstructs a wiki's page contents directly from a raw
//! relational dump -- textual `INSERT INTO` statements for the `page`,
//! `revision`, and `text` tables -- without a database engine available to
//! execute the SQL. The whole dump is read into memory once, then:
//!
//! 1. **Statement pass** -- locate every `INSERT INTO <table> … ;` block for
//!    each of the three tables with an explicit scan
//! 2. **Tuple pass** -- split each parenthesized `VALUES` group into literal
//!    fields with a quote-aware tokenizer
//! 3. **Mapping pass** -- build three independent mappings: page-id to title
//!    (main namespace only), page-id to latest revision id, and text-id to
//!    decoded content
//! 4. **Join pass** -- stitch the mappings together (a revision's text id
//!    equals its revision id by MediaWiki convention) and emit
//!    `{title, content, url}` records for every page with non-empty content
//!
//! Malformed tuples are skipped one at a time; only failing to read the
//! dump file itself aborts a run.
//!
//! # Key Modules
//!
//! - [`statement`] -- `INSERT INTO` statement and `VALUES` tuple location
//! - [`tokenizer`] -- quote-aware splitting of value tuples into fields
//! - [`decode`] -- content-encoding detection (hex, external storage) and
//!   SQL unescaping
//! - [`tables`] -- per-table mapping builders
//! - [`join`] -- three-way join and URL derivation
//! - [`records`] -- JSON persistence of the output record sequence
//! - [`extract`] -- end-to-end orchestration
//! - [`models`] -- core data types ([`models::WikiRecord`])
//! - [`stats`] -- coarse per-phase counters
//! - [`config`] -- constants

pub mod config;
pub mod decode;
pub mod extract;
pub mod join;
pub mod models;
pub mod records;
pub mod statement;
pub mod stats;
pub mod tables;
pub mod tokenizer;
