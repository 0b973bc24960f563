//! Ghvars - sync GitHub Actions secrets and variables between an
//! organization and CSV sheets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── export        # `fetch`: remote state -> CSV sheets
//! │   ├── import        # `update`: CSV rows -> remote store
//! │   ├── output        # Styled terminal output helpers
//! │   └── completions   # Shell completions
//! ├── core/             # Reconciliation engine
//! │   ├── record        # Uniform record model (one variant per scope)
//! │   ├── visibility    # Visibility normalization and repo resolution
//! │   ├── reader        # Remote state -> records, per-container isolation
//! │   ├── importer      # CSV rows -> records, fail-fast schema checks
//! │   ├── upsert        # Create-if-absent, never-overwrite engine
//! │   ├── sync          # Export/import orchestration
//! │   └── sheet         # Flat sheet tables for export
//! └── remote/           # Remote store boundary
//!     ├── github        # GitHub REST client (blocking)
//!     └── seal          # Sealed-box encryption of secret values
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod remote;
