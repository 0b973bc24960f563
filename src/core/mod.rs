//! Core reconciliation engine.
//!
//! Normalizes remote items and CSV rows into a uniform record shape, then
//! drives idempotent, never-overwrite upserts and per-scope export sheets.

pub mod importer;
pub mod reader;
pub mod record;
pub mod sheet;
pub mod sync;
pub mod upsert;
pub mod visibility;
