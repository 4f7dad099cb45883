//! PostScript font dictionaries.

use crate::{engine::Engine, error::Result, ids::PsDictKey, Face, Fixed};

/// The `FontInfo` dictionary of a Type 1 font.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct PsFontInfo {
    pub version: String,
    pub notice: String,
    pub full_name: String,
    pub family_name: String,
    pub weight: String,
    pub italic_angle: i64,
    pub is_fixed_pitch: bool,
    pub underline_position: i16,
    pub underline_thickness: u16,
}

/// The `Private` dictionary of a Type 1 font.
///
/// Arrays have their maximum size; the `num_` fields give the number of
/// values in use.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct PsPrivate {
    pub unique_id: i32,
    pub len_iv: i32,
    pub num_blue_values: u8,
    pub num_other_blues: u8,
    pub num_family_blues: u8,
    pub num_family_other_blues: u8,
    pub blue_values: [i16; 14],
    pub other_blues: [i16; 10],
    pub family_blues: [i16; 14],
    pub family_other_blues: [i16; 10],
    pub blue_scale: Fixed,
    pub blue_shift: i32,
    pub blue_fuzz: i32,
    pub standard_width: [u16; 1],
    pub standard_height: [u16; 1],
    pub num_snap_widths: u8,
    pub num_snap_heights: u8,
    pub force_bold: bool,
    pub round_stem_up: bool,
    pub snap_widths: [i16; 13],
    pub snap_heights: [i16; 13],
    pub expansion_factor: Fixed,
    pub language_group: i64,
    pub password: i64,
    pub min_feature: [i16; 2],
}

fn prefix<T>(values: &[T], len: u8) -> &[T] {
    &values[..(len as usize).min(values.len())]
}

impl PsPrivate {
    pub fn blue_values(&self) -> &[i16] {
        prefix(&self.blue_values, self.num_blue_values)
    }

    pub fn other_blues(&self) -> &[i16] {
        prefix(&self.other_blues, self.num_other_blues)
    }

    pub fn family_blues(&self) -> &[i16] {
        prefix(&self.family_blues, self.num_family_blues)
    }

    pub fn family_other_blues(&self) -> &[i16] {
        prefix(&self.family_other_blues, self.num_family_other_blues)
    }

    pub fn snap_widths(&self) -> &[i16] {
        prefix(&self.snap_widths, self.num_snap_widths)
    }

    pub fn snap_heights(&self) -> &[i16] {
        prefix(&self.snap_heights, self.num_snap_heights)
    }
}

impl<E: Engine> Face<E> {
    /// Returns true if the face has reliable glyph names.
    ///
    /// This holds for Type 1, CFF and TrueType fonts with a version 2 `post`
    /// table. Returns false for a freed face.
    pub fn has_ps_glyph_names(&self) -> bool {
        self.handle()
            .map(|face| self.engine().has_ps_glyph_names(face))
            .unwrap_or_default()
    }

    /// Returns the `FontInfo` dictionary of a Type 1 font.
    pub fn ps_font_info(&self) -> Result<PsFontInfo> {
        let face = self.handle()?;
        self.engine().ps_font_info(face)
    }

    /// Returns the `Private` dictionary of a Type 1 font.
    pub fn ps_private(&self) -> Result<PsPrivate> {
        let face = self.handle()?;
        self.engine().ps_private(face)
    }

    /// Returns the raw value of a dictionary entry.
    ///
    /// `index` selects the element of array valued keys and is ignored
    /// otherwise.
    pub fn ps_font_value(&self, key: PsDictKey, index: u32) -> Result<Vec<u8>> {
        let face = self.handle()?;
        self.engine().ps_font_value(face, key.to_raw(), index)
    }
}
