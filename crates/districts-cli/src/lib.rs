//! districts-cli
//! =============
//!
//! Command-line interface for the `districts-core` lookup-table sync.
//!
//! This crate primarily provides a binary (`districts`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! districts --help
//! districts sync
//! districts --data-dir data sync --offline
//! districts audit
//! ```
//!
//! For programmatic access to the reconciliation routines, use the
//! [`districts-core`] crate directly.

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
