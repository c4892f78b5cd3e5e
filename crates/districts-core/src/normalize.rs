// crates/districts-core/src/normalize.rs

//! Label canonicalization.
//!
//! Upstream labels embed an alternate spelling after an ` I ` (and in some
//! documents ` | `) separator; only the part before the first separator is
//! the display name.

/// Returns the canonical form of a raw upstream label.
///
/// Total and side-effect free: empty input yields empty output.
pub fn normalize_label(raw: &str) -> String {
    let head = raw.split(" I ").next().unwrap_or_default();
    let head = head.split(" | ").next().unwrap_or_default();
    head.trim().to_string()
}
