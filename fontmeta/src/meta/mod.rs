//! Format specific metadata.
//!
//! Each module defines the owned value types for one kind of metadata and
//! adds the matching accessors to [`Face`](crate::Face).

pub mod bdf;
pub mod cid;
pub mod colr;
pub mod gasp;
pub mod mm;
pub mod palette;
pub mod pfr;
pub mod postscript;
pub mod sfnt;
pub mod winfnt;

/// Converts a possibly NUL terminated engine string to text.
pub(crate) fn lossy_string(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
