//! CID-keyed fonts.

use crate::{
    engine::Engine,
    error::Result,
    meta::{lossy_string, pfr::Vector, postscript::{PsFontInfo, PsPrivate}},
    Face, Fixed,
};

/// A 2x2 fixed point transformation matrix.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct Matrix {
    pub xx: Fixed,
    pub xy: Fixed,
    pub yx: Fixed,
    pub yy: Fixed,
}

/// A bounding box in font units.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct BBox {
    pub x_min: i64,
    pub y_min: i64,
    pub x_max: i64,
    pub y_max: i64,
}

/// One font dictionary of a CID-keyed font.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct CidFaceDict {
    pub private_dict: PsPrivate,
    pub len_buildchar: u32,
    pub forcebold_threshold: Fixed,
    pub stroke_width: i64,
    pub expansion_factor: Fixed,
    pub paint_type: u8,
    pub font_type: u8,
    pub font_matrix: Matrix,
    pub font_offset: Vector,
    pub num_subrs: u32,
    pub subrmap_offset: u64,
    pub sd_bytes: i32,
}

/// The top level dictionary of a CID-keyed font.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct CidFaceInfo {
    pub cid_font_name: String,
    pub cid_version: Fixed,
    pub cid_font_type: i32,
    pub registry: String,
    pub ordering: String,
    pub supplement: i32,
    pub font_info: PsFontInfo,
    pub font_bbox: BBox,
    pub uid_base: u64,
    pub num_xuid: i32,
    pub xuid: [u64; 16],
    pub cidmap_offset: u64,
    pub fd_bytes: i32,
    pub gd_bytes: i32,
    pub cid_count: u64,
    pub font_dicts: Vec<CidFaceDict>,
    pub data_offset: u64,
}

impl CidFaceInfo {
    /// Returns the XUID values in use.
    pub fn xuid(&self) -> &[u64] {
        let len = (self.num_xuid.max(0) as usize).min(self.xuid.len());
        &self.xuid[..len]
    }
}

impl<E: Engine> Face<E> {
    /// Returns the `(registry, ordering, supplement)` of a CID-keyed font,
    /// including CID-keyed CFF data in an SFNT container.
    pub fn cid_registry_ordering_supplement(&self) -> Result<(String, String, i32)> {
        let face = self.handle()?;
        let (registry, ordering, supplement) =
            self.engine().cid_registry_ordering_supplement(face)?;
        Ok((lossy_string(&registry), lossy_string(&ordering), supplement))
    }

    /// Returns true if the face is internally CID-keyed.
    ///
    /// Returns false for other faces, for a freed face and if the engine
    /// fails.
    pub fn is_internally_cid_keyed(&self) -> bool {
        let Ok(face) = self.handle() else {
            return false;
        };
        self.engine()
            .cid_is_internally_keyed(face)
            .unwrap_or_default()
    }

    /// Maps a glyph index to its CID.
    pub fn cid_from_glyph_index(&self, glyph_index: u32) -> Result<u32> {
        let face = self.handle()?;
        self.engine().cid_from_glyph_index(face, glyph_index)
    }

    /// Returns the top level CID dictionary, where the engine exposes it.
    pub fn cid_face_info(&self) -> Result<CidFaceInfo> {
        let face = self.handle()?;
        self.engine().cid_face_info(face)
    }
}
