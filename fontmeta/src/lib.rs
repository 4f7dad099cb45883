//! Typed access to font format metadata.
//!
//! Fontmeta sits on top of a font engine (anything implementing [`Engine`])
//! and exposes the format specific metadata the engine knows about as plain,
//! owned Rust values: BDF/PCF properties, CID registry information, color
//! palettes and layers, `gasp` flags, multiple master and variation
//! descriptors, PFR metrics, `name` table entries, PostScript dictionaries
//! and Windows FNT headers.
//!
//! Nothing returned by an accessor borrows from the engine. Records that the
//! engine allocates on our behalf are released before the accessor returns.
//!
//! # Example
//! ```no_run
//! # #[cfg(feature = "skrifa")]
//! # fn wrapper() -> Result<(), fontmeta::Error> {
//! use fontmeta::{FaceIndex, Library, SkrifaEngine};
//!
//! let library = Library::new(SkrifaEngine::default())?;
//! let file = std::fs::File::open("Example.ttf").unwrap();
//! let face = library.new_face(file, FaceIndex::default())?;
//! for i in 0..face.sfnt_name_count() {
//!     let name = face.sfnt_name(i as i64)?;
//!     println!("{:?}: {}", name.name_id, String::from_utf8_lossy(&name.text));
//! }
//! # Ok(())
//! # }
//! ```

mod error;
mod face;
mod flags;
mod library;
mod size;

pub mod engine;
pub mod ids;
pub mod meta;
pub mod text;

#[cfg(test)]
mod testing;

pub use engine::Engine;
pub use error::{Error, Result};
pub use face::{Face, FaceIndex};
pub use flags::{FaceFlags, GaspFlags, PaletteFlags, StyleFlags, VarAxisFlags};
pub use library::{Library, Version};
pub use size::Size;

#[cfg(feature = "freetype")]
pub use engine::freetype::FreeTypeEngine;
#[cfg(feature = "skrifa")]
pub use engine::skrifa::SkrifaEngine;

/// Expose the scalar types crate used in our public API.
pub extern crate font_types as types;

/// A 16.16 fixed point value.
pub type Fixed = font_types::Fixed;

/// A 4-byte tag.
pub type Tag = font_types::Tag;
