//! The interface to a font engine.
//!
//! An [`Engine`] owns the actual font data and does all the parsing. The
//! handle wrappers and accessors in this crate only validate handles, call
//! through this trait and convert what comes back into owned values.
//!
//! Records that need marshaling (sentinels, byte order, pointer plus count
//! arrays) are passed through the engine neutral types in [`raw`]. Records
//! that are plain data are passed as their public value types.

#[cfg(feature = "freetype")]
pub mod freetype;
#[cfg(feature = "skrifa")]
pub mod skrifa;

use std::{fmt::Debug, path::Path, sync::Arc};

use crate::{
    error::{Error, Result},
    library::Version,
    meta::{
        cid::CidFaceInfo,
        mm::MultiMaster,
        pfr::{PfrMetrics, Vector},
        postscript::{PsFontInfo, PsPrivate},
        winfnt::WinFntHeader,
    },
    Fixed,
};

/// State of an iteration over the color layers of a glyph.
///
/// A fresh iterator is created with [`Default`] for each glyph. After the
/// first call to [`Engine::color_glyph_layer`] it reports the total number of
/// layers.
pub trait LayerIterator: Default {
    /// Returns the total number of layers reported by the engine.
    fn num_layers(&self) -> u32;
}

/// A font engine.
///
/// Handles are small copyable values that identify objects living inside the
/// engine. The engine never sees a handle that was already destroyed: the
/// wrappers in this crate track handle validity and fail with the matching
/// invalid handle error before calling through.
///
/// Methods that query a format specific table fail with
/// [`Error::InvalidArgument`] when the face is of another format.
pub trait Engine: 'static {
    type Library: Copy + Debug + 'static;
    type Face: Copy + Debug + PartialEq + 'static;
    type Size: Copy + Debug + PartialEq + 'static;
    type LayerIterator: LayerIterator;
    /// An engine allocated variation descriptor, released with
    /// [`Engine::done_mm_var`].
    type MmVar;

    fn new_library(&self) -> Result<Self::Library>;
    fn done_library(&self, library: Self::Library) -> Result<()>;
    fn library_version(&self, library: Self::Library) -> Version;

    /// Creates a face from font data held in memory.
    ///
    /// `index` holds the face index in the low 16 bits and the named
    /// instance in the next 15 bits.
    fn new_memory_face(
        &self,
        library: Self::Library,
        data: Arc<[u8]>,
        index: u32,
    ) -> Result<Self::Face>;

    /// Creates a face from a file.
    fn new_face(&self, library: Self::Library, path: &Path, index: u32) -> Result<Self::Face>;

    /// Destroys a face along with every size created for it.
    fn done_face(&self, face: Self::Face) -> Result<()>;

    fn header(&self, face: Self::Face) -> raw::FaceHeader;

    fn new_size(&self, face: Self::Face) -> Result<Self::Size>;
    fn done_size(&self, size: Self::Size) -> Result<()>;
    fn activate_size(&self, size: Self::Size) -> Result<()>;

    // BDF and PCF
    fn bdf_charset_id(&self, face: Self::Face) -> Result<(Vec<u8>, Vec<u8>)>;
    fn bdf_property(&self, face: Self::Face, name: &str) -> Result<raw::BdfPropertyRec>;

    // CID
    fn cid_registry_ordering_supplement(&self, face: Self::Face)
        -> Result<(Vec<u8>, Vec<u8>, i32)>;
    fn cid_is_internally_keyed(&self, face: Self::Face) -> Result<bool>;
    fn cid_from_glyph_index(&self, face: Self::Face, glyph_index: u32) -> Result<u32>;

    /// Returns the top level dictionary of a CID-keyed font.
    ///
    /// FreeType keeps this record private, so the default fails.
    fn cid_face_info(&self, face: Self::Face) -> Result<CidFaceInfo> {
        let _ = face;
        Err(Error::UnimplementedFeature)
    }

    // CPAL
    fn palette_data(&self, face: Self::Face) -> Result<raw::PaletteDataRec>;

    /// Selects a palette and hands the engine's copy of its entries to `f`.
    ///
    /// Changes made by `f` are visible to the engine until the next
    /// selection.
    fn palette_select(
        &self,
        face: Self::Face,
        index: u16,
        f: &mut dyn FnMut(&mut [raw::Color]),
    ) -> Result<()>;

    fn palette_set_foreground_color(&self, face: Self::Face, color: raw::Color) -> Result<()>;

    // COLR

    /// Advances `iter` and returns the next `(glyph index, color index)`
    /// layer of `base_glyph`, or `None` when there are no more.
    fn color_glyph_layer(
        &self,
        face: Self::Face,
        base_glyph: u32,
        iter: &mut Self::LayerIterator,
    ) -> Option<(u32, u32)>;

    /// Returns the `gasp` flags at `ppem`, or [`raw::GASP_NO_TABLE`].
    fn gasp(&self, face: Self::Face, ppem: u32) -> i32;

    // Multiple masters and variations
    fn multi_master(&self, face: Self::Face) -> Result<MultiMaster>;
    fn get_mm_var(&self, face: Self::Face) -> Result<Self::MmVar>;
    fn mm_var_record(&self, mm_var: &Self::MmVar) -> raw::MmVarRec;
    fn var_axis_flags(&self, mm_var: &Self::MmVar, axis_index: u32) -> Result<u32>;
    fn done_mm_var(&self, face: Self::Face, mm_var: Self::MmVar) -> Result<()>;

    /// Sets design coordinates of an Adobe multiple master font.
    ///
    /// For all coordinate setters, an empty slice resets to the default
    /// instance, missing trailing values take their defaults and extra values
    /// are ignored.
    fn set_mm_design_coordinates(&self, face: Self::Face, coords: &[i64]) -> Result<()>;
    fn set_var_design_coordinates(&self, face: Self::Face, coords: &[Fixed]) -> Result<()>;
    fn get_var_design_coordinates(&self, face: Self::Face, coords: &mut [Fixed]) -> Result<()>;
    fn set_mm_blend_coordinates(&self, face: Self::Face, coords: &[Fixed]) -> Result<()>;
    fn get_mm_blend_coordinates(&self, face: Self::Face, coords: &mut [Fixed]) -> Result<()>;
    fn set_mm_weight_vector(&self, face: Self::Face, weights: &[Fixed]) -> Result<()>;

    /// Fills `weights` and returns the number of designs.
    fn get_mm_weight_vector(&self, face: Self::Face, weights: &mut [Fixed]) -> Result<usize>;

    fn set_named_instance(&self, face: Self::Face, instance_index: u32) -> Result<()>;
    fn default_named_instance(&self, face: Self::Face) -> Result<u32>;

    // PFR

    /// Returns the PFR metrics.
    ///
    /// The record is always filled in, with fallback values when the result
    /// is an error.
    fn pfr_metrics(&self, face: Self::Face) -> (PfrMetrics, Result<()>);
    fn pfr_kerning(&self, face: Self::Face, left: u32, right: u32) -> Result<Vector>;
    fn pfr_advance(&self, face: Self::Face, glyph_index: u32) -> Result<i64>;

    // SFNT names
    fn sfnt_name_count(&self, face: Self::Face) -> u32;
    fn sfnt_name(&self, face: Self::Face, index: u32) -> Result<raw::SfntNameRec>;
    fn sfnt_lang_tag(&self, face: Self::Face, language_id: u32) -> Result<Vec<u8>>;

    // Character maps
    fn num_charmaps(&self, face: Self::Face) -> u32;
    fn charmap_info(&self, face: Self::Face, index: u32) -> Option<raw::CharMapRec>;

    /// Returns the `cmap` subtable language, zero for a charmap that is not
    /// backed by an SFNT `cmap` table.
    fn charmap_language(&self, face: Self::Face, index: u32) -> u32;

    /// Returns the `cmap` subtable format, -1 for a charmap that is not
    /// backed by an SFNT `cmap` table.
    fn charmap_format(&self, face: Self::Face, index: u32) -> i64;

    // PostScript
    fn has_ps_glyph_names(&self, face: Self::Face) -> bool;
    fn ps_font_info(&self, face: Self::Face) -> Result<PsFontInfo>;
    fn ps_private(&self, face: Self::Face) -> Result<PsPrivate>;

    /// Returns the raw bytes of a dictionary value.
    fn ps_font_value(&self, face: Self::Face, key: u32, index: u32) -> Result<Vec<u8>>;

    // Windows FNT
    fn winfnt_header(&self, face: Self::Face) -> Result<WinFntHeader>;

    /// Returns the engine's description of an error code, if it has one.
    fn error_string(&self, code: i32) -> Option<String> {
        Error::from_code(code).map(|err| err.to_string())
    }
}

/// Engine neutral records.
///
/// Values here are as the engine reports them: sentinels are not yet mapped,
/// colors are in the engine's byte order.
pub mod raw {
    use crate::{
        flags::{FaceFlags, StyleFlags},
        Fixed,
    };

    /// [`super::Engine::gasp`] result for a face without a `gasp` table.
    pub const GASP_NO_TABLE: i32 = -1;

    /// Marks an absent name identifier.
    pub const NO_NAME_ID: u16 = 0xFFFF;

    /// Marks a layer that uses the foreground color.
    pub const FOREGROUND_COLOR_INDEX: u32 = 0xFFFF;

    /// Marks an undefined count or string id in a variation descriptor.
    pub const UNDEFINED_U32: u32 = 0xFFFF_FFFF;

    pub const BDF_PROPERTY_TYPE_NONE: u32 = 0;
    pub const BDF_PROPERTY_TYPE_ATOM: u32 = 1;
    pub const BDF_PROPERTY_TYPE_INTEGER: u32 = 2;
    pub const BDF_PROPERTY_TYPE_CARDINAL: u32 = 3;

    /// Scalar attributes of a face.
    #[derive(Clone, Default, Debug, PartialEq, Eq)]
    pub struct FaceHeader {
        pub num_faces: i64,
        pub face_index: i64,
        pub face_flags: FaceFlags,
        pub style_flags: StyleFlags,
        pub num_glyphs: i64,
        pub family_name: Vec<u8>,
        pub style_name: Vec<u8>,
    }

    /// A BDF property as reported by the engine.
    ///
    /// Only the field selected by `kind` is meaningful.
    #[derive(Clone, Default, Debug, PartialEq, Eq)]
    pub struct BdfPropertyRec {
        pub kind: u32,
        pub atom: Vec<u8>,
        pub integer: i32,
        pub cardinal: u32,
    }

    /// A palette entry in the engine's byte order.
    #[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
    #[repr(C)]
    pub struct Color {
        pub blue: u8,
        pub green: u8,
        pub red: u8,
        pub alpha: u8,
    }

    /// Palette descriptor.
    ///
    /// Arrays may be shorter than their counts when the engine has no data
    /// for them.
    #[derive(Clone, Default, Debug, PartialEq, Eq)]
    pub struct PaletteDataRec {
        pub num_palettes: u16,
        pub palette_name_ids: Vec<u16>,
        pub palette_flags: Vec<u16>,
        pub num_palette_entries: u16,
        pub palette_entry_name_ids: Vec<u16>,
    }

    #[derive(Clone, Default, Debug, PartialEq, Eq)]
    pub struct VarAxisRec {
        pub name: Vec<u8>,
        pub minimum: Fixed,
        pub def: Fixed,
        pub maximum: Fixed,
        pub tag: u32,
        pub strid: u32,
    }

    #[derive(Clone, Default, Debug, PartialEq, Eq)]
    pub struct VarNamedStyleRec {
        pub coords: Vec<Fixed>,
        pub strid: u32,
        pub psid: u32,
    }

    /// Variation descriptor.
    #[derive(Clone, Default, Debug, PartialEq, Eq)]
    pub struct MmVarRec {
        pub num_axis: u32,
        pub num_designs: u32,
        pub num_namedstyles: u32,
        pub axis: Vec<VarAxisRec>,
        pub namedstyle: Vec<VarNamedStyleRec>,
    }

    /// A `name` table record with its undecoded string.
    #[derive(Clone, Default, Debug, PartialEq, Eq)]
    pub struct SfntNameRec {
        pub platform_id: u16,
        pub encoding_id: u16,
        pub language_id: u16,
        pub name_id: u16,
        pub string: Vec<u8>,
    }

    #[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
    pub struct CharMapRec {
        pub platform_id: u16,
        pub encoding_id: u16,
    }
}
