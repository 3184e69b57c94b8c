//! Probe - Slot image discovery with format fallback
//!
//! Slide decks ship as loose image files without a manifest, and the format
//! varies per slide. Discovery tries each candidate format in a fixed order
//! and takes the first file that exists; a slot with no file in any format
//! is dropped from the deck instead of rendering a hole. The carousel is
//! then built over however many slots survived.
//!
//! # API
//!
//! - `IMAGE_FORMATS` - Candidate extensions, in probe order
//! - `resolve_image` - First existing format for one stem
//! - `probe_slots` - Resolve a list of stems, dropping the missing
//! - `probe_numbered` - Resolve `prefix1..prefixN` stems

use std::path::{Path, PathBuf};

// =============================================================================
// CONSTANTS
// =============================================================================

/// Candidate extensions, tried in order. First hit wins.
pub const IMAGE_FORMATS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

// =============================================================================
// PROBING
// =============================================================================

/// A slot whose image file was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotImage {
    /// File stem the slot was probed under.
    pub stem: String,
    /// Full path of the file that answered the probe.
    pub path: PathBuf,
}

/// Resolve one stem against `dir`, trying each format in order.
pub fn resolve_image(dir: &Path, stem: &str) -> Option<PathBuf> {
    IMAGE_FORMATS
        .iter()
        .map(|ext| dir.join(format!("{stem}.{ext}")))
        .find(|path| path.is_file())
}

/// Resolve a list of stems, keeping input order and dropping stems that
/// resolve to nothing.
pub fn probe_slots<I, S>(dir: &Path, stems: I) -> Vec<SlotImage>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    stems
        .into_iter()
        .filter_map(|stem| {
            let stem = stem.as_ref();
            resolve_image(dir, stem).map(|path| SlotImage {
                stem: stem.to_string(),
                path,
            })
        })
        .collect()
}

/// Resolve the conventional numbered deck `{prefix}1 .. {prefix}count`.
pub fn probe_numbered(dir: &Path, prefix: &str, count: usize) -> Vec<SlotImage> {
    probe_slots(dir, (1..=count).map(|n| format!("{prefix}{n}")))
}

// =============================================================================
// TESTS
// =============================================================================
