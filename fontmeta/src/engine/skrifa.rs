//! An engine for SFNT based fonts built on [skrifa] and [read_fonts].
//!
//! This covers TrueType and OpenType fonts and collections. Queries for
//! formats that never live in an SFNT container (BDF, PCF, PFR, Type 1
//! multiple masters, Windows FNT) fail with [`Error::InvalidArgument`].

use std::{cell::RefCell, ops::Range, path::Path, sync::Arc};

use read_fonts::{
    tables::{
        cff::Cff,
        cmap::CmapSubtable,
        cpal::Cpal,
        postscript::{dict, Charset, Index, StringId},
    },
    types::{GlyphId, NameId, Tag, Version16Dot16},
    FileRef, FontRef, ReadError, TableProvider,
};
use skrifa::MetadataProvider;

use super::{raw, Engine, LayerIterator};
use crate::{
    error::{Error, Result},
    flags::{FaceFlags, StyleFlags},
    library::Version,
    meta::{
        cid::{BBox, CidFaceDict, CidFaceInfo, Matrix},
        lossy_string,
        mm::MultiMaster,
        pfr::{PfrMetrics, Vector},
        postscript::{PsFontInfo, PsPrivate},
        winfnt::WinFntHeader,
    },
    Fixed,
};

/// Version of the skrifa release this engine is written against.
const SKRIFA_VERSION: Version = Version::new(0, 37, 0);

impl From<ReadError> for Error {
    fn from(err: ReadError) -> Self {
        match err {
            ReadError::TableIsMissing(_) | ReadError::InvalidCollectionIndex(_) => {
                Error::InvalidArgument
            }
            ReadError::InvalidSfnt(_) | ReadError::InvalidTtc(_) => Error::UnknownFileFormat,
            _ => Error::InvalidTable,
        }
    }
}

impl From<read_fonts::tables::postscript::Error> for Error {
    fn from(err: read_fonts::tables::postscript::Error) -> Self {
        match err {
            read_fonts::tables::postscript::Error::Read(err) => err.into(),
            _ => Error::InvalidTable,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SkrifaLibrary;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SkrifaFace(usize);

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SkrifaSize(usize);

/// Walks the COLRv0 layers of one base glyph.
#[derive(Default, Debug)]
pub struct SkrifaLayers {
    layers: Option<Range<usize>>,
    num_layers: u32,
}

impl LayerIterator for SkrifaLayers {
    fn num_layers(&self) -> u32 {
        self.num_layers
    }
}

/// A snapshot of the `fvar` data of a face.
pub struct SkrifaMmVar {
    rec: raw::MmVarRec,
    axis_flags: Vec<u32>,
}

/// Engine side state of a loaded face.
struct LoadedFace {
    data: Arc<[u8]>,
    index: u32,
    design: Vec<Fixed>,
    variation: bool,
    palette: Vec<raw::Color>,
    foreground: raw::Color,
}

impl LoadedFace {
    fn font(&self) -> Result<FontRef<'_>> {
        Ok(FontRef::from_index(&self.data, self.index & 0xFFFF)?)
    }
}

/// A font engine for SFNT based fonts.
///
/// Faces keep their data alive and are reparsed on each query; parsing an
/// SFNT table directory is cheap.
#[derive(Default)]
pub struct SkrifaEngine {
    faces: RefCell<Vec<Option<LoadedFace>>>,
    // size slot -> face slot
    sizes: RefCell<Vec<Option<usize>>>,
}

impl SkrifaEngine {
    fn with_face<R>(
        &self,
        face: SkrifaFace,
        f: impl FnOnce(&mut LoadedFace) -> Result<R>,
    ) -> Result<R> {
        let mut faces = self.faces.borrow_mut();
        let loaded = faces
            .get_mut(face.0)
            .and_then(Option::as_mut)
            .ok_or(Error::InvalidFaceHandle)?;
        f(loaded)
    }

    fn with_font<R>(&self, face: SkrifaFace, f: impl FnOnce(&FontRef) -> Result<R>) -> Result<R> {
        self.with_face(face, |loaded| f(&loaded.font()?))
    }

    fn open(&self, data: Arc<[u8]>, index: u32) -> Result<SkrifaFace> {
        let file = FileRef::new(&data).map_err(|e| {
            log::debug!("not an SFNT font: {e}");
            Error::UnknownFileFormat
        })?;
        let face_index = index & 0xFFFF;
        let num_faces = match &file {
            FileRef::Font(_) => 1,
            FileRef::Collection(collection) => collection.len(),
        };
        if face_index >= num_faces {
            return Err(Error::InvalidArgument);
        }
        let font = FontRef::from_index(&data, face_index)?;
        let design = fvar_axes(&font)
            .iter()
            .map(|axis| axis.def)
            .collect::<Vec<_>>();
        let foreground = default_foreground(&font);
        let mut loaded = LoadedFace {
            data,
            index,
            design,
            variation: false,
            palette: Vec::new(),
            foreground,
        };
        let instance = index >> 16;
        if instance != 0 {
            apply_named_instance(&mut loaded, instance)?;
        }
        Ok(SkrifaFace(fill_slot(&mut self.faces.borrow_mut(), loaded)))
    }
}

/// Stores `value` in the first free slot, growing `slots` only when full.
fn fill_slot<T>(slots: &mut Vec<Option<T>>, value: T) -> usize {
    match slots.iter().position(Option::is_none) {
        Some(index) => {
            slots[index] = Some(value);
            index
        }
        None => {
            slots.push(Some(value));
            slots.len() - 1
        }
    }
}

fn has_table(font: &FontRef, tag: &[u8; 4]) -> bool {
    font.table_data(Tag::new(tag)).is_some()
}

/// Returns the `fvar` axes as variation descriptor records.
fn fvar_axes(font: &FontRef) -> Vec<raw::VarAxisRec> {
    let Ok(axes) = font.fvar().and_then(|fvar| fvar.axes()) else {
        return Vec::new();
    };
    axes.iter()
        .map(|axis| {
            let tag = axis.axis_tag();
            raw::VarAxisRec {
                name: axis_name(tag),
                minimum: axis.min_value(),
                def: axis.default_value(),
                maximum: axis.max_value(),
                tag: u32::from_be_bytes(tag.to_be_bytes()),
                strid: axis.axis_name_id().to_u16() as u32,
            }
        })
        .collect()
}

fn axis_name(tag: Tag) -> Vec<u8> {
    match &tag.to_be_bytes() {
        b"opsz" => b"OpticalSize".to_vec(),
        b"slnt" => b"Slant".to_vec(),
        b"wdth" => b"Width".to_vec(),
        b"wght" => b"Weight".to_vec(),
        other => other.to_vec(),
    }
}

/// Pads or truncates `coords` to one per axis, filling with defaults.
fn complete_coords(axes: &[raw::VarAxisRec], coords: impl IntoIterator<Item = Fixed>) -> Vec<Fixed> {
    let mut coords = coords.into_iter();
    axes.iter()
        .map(|axis| coords.next().unwrap_or(axis.def))
        .collect()
}

fn apply_named_instance(loaded: &mut LoadedFace, instance: u32) -> Result<()> {
    let font = loaded.font()?;
    let axes = fvar_axes(&font);
    let design = if instance == 0 {
        complete_coords(&axes, [])
    } else {
        let instances = font.fvar()?.instances()?;
        let record = instances
            .iter()
            .nth(instance as usize - 1)
            .ok_or(Error::InvalidArgument)??;
        complete_coords(&axes, record.coordinates.iter().map(|c| c.get()))
    };
    loaded.design = design;
    loaded.variation = false;
    Ok(())
}

/// Palette type flags of a version 1 `CPAL`, empty for version 0.
fn palette_types(cpal: &Cpal) -> Result<Vec<u16>> {
    Ok(cpal
        .palette_types_array()
        .transpose()?
        .unwrap_or_default()
        .iter()
        .map(|types| types.get().bits() as u16)
        .collect())
}

fn default_foreground(font: &FontRef) -> raw::Color {
    let dark = font
        .cpal()
        .ok()
        .and_then(|cpal| Some(cpal.palette_types_array()?.ok()?.first()?.get()))
        .is_some_and(|types| types.bits() & 2 != 0);
    let level = if dark { 0xFF } else { 0 };
    raw::Color {
        blue: level,
        green: level,
        red: level,
        alpha: 0xFF,
    }
}

fn palette_colors(font: &FontRef, index: u16) -> Result<Vec<raw::Color>> {
    let cpal = font.cpal()?;
    if index >= cpal.num_palettes() {
        return Err(Error::InvalidArgument);
    }
    let first = cpal
        .color_record_indices()
        .get(index as usize)
        .ok_or(Error::InvalidTable)?
        .get() as usize;
    let records = cpal.color_records_array().ok_or(Error::InvalidTable)??;
    let entries = records
        .get(first..first + cpal.num_palette_entries() as usize)
        .ok_or(Error::InvalidTable)?;
    Ok(entries
        .iter()
        .map(|rec| raw::Color {
            blue: rec.blue(),
            green: rec.green(),
            red: rec.red(),
            alpha: rec.alpha(),
        })
        .collect())
}

/// The top DICT of the first font in a `CFF ` table, with its table.
fn cff_top_dict<'a>(font: &FontRef<'a>) -> Result<(Cff<'a>, Vec<dict::Entry>)> {
    let cff = font.cff()?;
    let top = cff.top_dicts().get(0)?;
    let entries = dict::entries(top, None)
        .filter_map(|entry| entry.ok())
        .collect();
    Ok((cff, entries))
}

fn cff_string(cff: &Cff, id: StringId) -> Vec<u8> {
    cff.string(id)
        .map(|s| s.chars().map(|c| c as u8).collect())
        .unwrap_or_default()
}

fn is_cid_keyed(entries: &[dict::Entry]) -> bool {
    entries
        .iter()
        .any(|entry| matches!(entry, dict::Entry::Ros { .. }))
}

fn has_glyph_names(font: &FontRef) -> bool {
    if let Ok((_, entries)) = cff_top_dict(font) {
        return !is_cid_keyed(&entries);
    }
    font.post()
        .is_ok_and(|post| post.version() == Version16Dot16::VERSION_2_0)
}

fn localized(font: &FontRef, ids: [NameId; 2]) -> Vec<u8> {
    ids.into_iter()
        .find_map(|id| font.localized_strings(id).english_or_first())
        .map(|s| s.to_string().into_bytes())
        .unwrap_or_default()
}

fn face_flags(font: &FontRef) -> FaceFlags {
    let mut flags = FaceFlags::SFNT;
    let cff = cff_top_dict(font).ok();
    flags.set(
        FaceFlags::SCALABLE,
        has_table(font, b"glyf") || cff.is_some() || has_table(font, b"CFF2"),
    );
    flags.set(
        FaceFlags::FIXED_SIZES,
        has_table(font, b"EBLC") || has_table(font, b"CBLC") || has_table(font, b"sbix"),
    );
    flags.set(
        FaceFlags::FIXED_WIDTH,
        font.post().is_ok_and(|post| post.is_fixed_pitch() != 0),
    );
    flags.set(FaceFlags::HORIZONTAL, has_table(font, b"hhea"));
    flags.set(FaceFlags::VERTICAL, has_table(font, b"vhea"));
    flags.set(FaceFlags::KERNING, has_table(font, b"kern"));
    flags.set(FaceFlags::MULTIPLE_MASTERS, has_table(font, b"fvar"));
    flags.set(FaceFlags::GLYPH_NAMES, has_glyph_names(font));
    flags.set(FaceFlags::HINTER, has_table(font, b"fpgm") || has_table(font, b"prep"));
    flags.set(
        FaceFlags::CID_KEYED,
        cff.is_some_and(|(_, entries)| is_cid_keyed(&entries)),
    );
    flags.set(
        FaceFlags::COLOR,
        (has_table(font, b"COLR") && has_table(font, b"CPAL"))
            || has_table(font, b"CBDT")
            || has_table(font, b"sbix"),
    );
    flags.set(FaceFlags::SVG, has_table(font, b"SVG "));
    flags.set(FaceFlags::SBIX, has_table(font, b"sbix"));
    flags
}

fn style_flags(font: &FontRef) -> StyleFlags {
    let mut flags = StyleFlags::empty();
    if let Ok(os2) = font.os2() {
        let bits = os2.fs_selection().bits();
        flags.set(StyleFlags::ITALIC, bits & 0x0001 != 0);
        flags.set(StyleFlags::BOLD, bits & 0x0020 != 0);
    } else if let Ok(head) = font.head() {
        let bits = head.mac_style().bits();
        flags.set(StyleFlags::BOLD, bits & 0x0001 != 0);
        flags.set(StyleFlags::ITALIC, bits & 0x0002 != 0);
    }
    flags
}

fn cmap_subtable<'a>(font: &FontRef<'a>, index: u32) -> Result<CmapSubtable<'a>> {
    let cmap = font.cmap()?;
    let record = cmap
        .encoding_records()
        .get(index as usize)
        .ok_or(Error::InvalidArgument)?;
    Ok(record.subtable(cmap.offset_data())?)
}

fn units_per_em(font: &FontRef) -> u32 {
    font.head()
        .map(|head| head.units_per_em() as u32)
        .unwrap_or_default()
}

/// Maps a normalized coordinate back to user space without `avar`.
fn denormalize(axis: &raw::VarAxisRec, n: Fixed) -> Fixed {
    let (min, def, max) = (
        axis.minimum.to_f64(),
        axis.def.to_f64(),
        axis.maximum.to_f64(),
    );
    let n = n.to_f64().clamp(-1.0, 1.0);
    let span = if n < 0.0 { def - min } else { max - def };
    Fixed::from_f64(def + n * span)
}

impl Engine for SkrifaEngine {
    type Library = SkrifaLibrary;
    type Face = SkrifaFace;
    type Size = SkrifaSize;
    type LayerIterator = SkrifaLayers;
    type MmVar = SkrifaMmVar;

    fn new_library(&self) -> Result<SkrifaLibrary> {
        Ok(SkrifaLibrary)
    }

    fn done_library(&self, _library: SkrifaLibrary) -> Result<()> {
        self.faces.borrow_mut().clear();
        self.sizes.borrow_mut().clear();
        Ok(())
    }

    fn library_version(&self, _library: SkrifaLibrary) -> Version {
        SKRIFA_VERSION
    }

    fn new_memory_face(
        &self,
        _library: SkrifaLibrary,
        data: Arc<[u8]>,
        index: u32,
    ) -> Result<SkrifaFace> {
        self.open(data, index)
    }

    fn new_face(&self, _library: SkrifaLibrary, path: &Path, index: u32) -> Result<SkrifaFace> {
        let data = std::fs::read(path).map_err(|e| {
            log::debug!("failed to read {}: {e}", path.display());
            Error::CannotOpenResource
        })?;
        self.open(data.into(), index)
    }

    fn done_face(&self, face: SkrifaFace) -> Result<()> {
        self.faces
            .borrow_mut()
            .get_mut(face.0)
            .and_then(Option::take)
            .ok_or(Error::InvalidFaceHandle)?;
        for size in self.sizes.borrow_mut().iter_mut() {
            if *size == Some(face.0) {
                *size = None;
            }
        }
        Ok(())
    }

    fn header(&self, face: SkrifaFace) -> raw::FaceHeader {
        self.with_face(face, |loaded| {
            let font = loaded.font()?;
            let num_faces = match FileRef::new(&loaded.data)? {
                FileRef::Font(_) => 1,
                FileRef::Collection(collection) => collection.len() as i64,
            };
            let mut face_flags = face_flags(&font);
            face_flags.set(FaceFlags::VARIATION, loaded.variation);
            Ok(raw::FaceHeader {
                num_faces,
                face_index: loaded.index as i64,
                face_flags,
                style_flags: style_flags(&font),
                num_glyphs: font
                    .maxp()
                    .map(|maxp| maxp.num_glyphs() as i64)
                    .unwrap_or_default(),
                family_name: localized(&font, [NameId::TYPOGRAPHIC_FAMILY_NAME, NameId::FAMILY_NAME]),
                style_name: localized(
                    &font,
                    [NameId::TYPOGRAPHIC_SUBFAMILY_NAME, NameId::SUBFAMILY_NAME],
                ),
            })
        })
        .unwrap_or_default()
    }

    fn new_size(&self, face: SkrifaFace) -> Result<SkrifaSize> {
        self.with_face(face, |_| Ok(()))?;
        Ok(SkrifaSize(fill_slot(&mut self.sizes.borrow_mut(), face.0)))
    }

    fn done_size(&self, size: SkrifaSize) -> Result<()> {
        self.sizes
            .borrow_mut()
            .get_mut(size.0)
            .and_then(Option::take)
            .map(|_| ())
            .ok_or(Error::InvalidSizeHandle)
    }

    fn activate_size(&self, size: SkrifaSize) -> Result<()> {
        match self.sizes.borrow().get(size.0) {
            Some(Some(_)) => Ok(()),
            _ => Err(Error::InvalidSizeHandle),
        }
    }

    fn bdf_charset_id(&self, _face: SkrifaFace) -> Result<(Vec<u8>, Vec<u8>)> {
        Err(Error::InvalidArgument)
    }

    fn bdf_property(&self, _face: SkrifaFace, _name: &str) -> Result<raw::BdfPropertyRec> {
        Err(Error::InvalidArgument)
    }

    fn cid_registry_ordering_supplement(
        &self,
        face: SkrifaFace,
    ) -> Result<(Vec<u8>, Vec<u8>, i32)> {
        self.with_font(face, |font| {
            let (cff, entries) = cff_top_dict(font)?;
            entries
                .iter()
                .find_map(|entry| match entry {
                    dict::Entry::Ros {
                        registry,
                        ordering,
                        supplement,
                    } => Some((
                        cff_string(&cff, *registry),
                        cff_string(&cff, *ordering),
                        supplement.to_i32(),
                    )),
                    _ => None,
                })
                .ok_or(Error::InvalidArgument)
        })
    }

    fn cid_is_internally_keyed(&self, face: SkrifaFace) -> Result<bool> {
        self.with_font(face, |font| {
            let (_, entries) = cff_top_dict(font)?;
            Ok(is_cid_keyed(&entries))
        })
    }

    fn cid_from_glyph_index(&self, face: SkrifaFace, glyph_index: u32) -> Result<u32> {
        self.with_font(face, |font| {
            let (cff, entries) = cff_top_dict(font)?;
            if !is_cid_keyed(&entries) {
                return Err(Error::InvalidArgument);
            }
            // `Cff::charset` skips CID-keyed fonts, so resolve it here.
            let (mut charset, mut charstrings) = (None, None);
            for entry in &entries {
                match entry {
                    dict::Entry::Charset(offset) => charset = Some(*offset),
                    dict::Entry::CharstringsOffset(offset) => charstrings = Some(*offset),
                    _ => {}
                }
            }
            let table = cff.offset_data();
            let charstrings = charstrings
                .and_then(|offset| table.as_bytes().get(offset..))
                .ok_or(Error::InvalidTable)?;
            let num_glyphs = Index::new(charstrings, false)?.count();
            let charset = Charset::new(table, charset.ok_or(Error::InvalidTable)?, num_glyphs)?;
            if glyph_index >= charset.num_glyphs() {
                return Err(Error::InvalidArgument);
            }
            let cid = charset.string_id(GlyphId::new(glyph_index))?;
            Ok(cid.to_u16() as u32)
        })
    }

    fn palette_data(&self, face: SkrifaFace) -> Result<raw::PaletteDataRec> {
        self.with_font(face, |font| {
            let cpal = match font.cpal() {
                Ok(cpal) => cpal,
                Err(ReadError::TableIsMissing(_)) => return Ok(raw::PaletteDataRec::default()),
                Err(e) => return Err(e.into()),
            };
            let palette_name_ids = cpal
                .palette_labels_array()
                .transpose()?
                .unwrap_or_default()
                .iter()
                .map(|id| id.get())
                .collect();
            let palette_entry_name_ids = cpal
                .palette_entry_labels_array()
                .transpose()?
                .unwrap_or_default()
                .iter()
                .map(|id| id.get().to_u16())
                .collect();
            Ok(raw::PaletteDataRec {
                num_palettes: cpal.num_palettes(),
                palette_name_ids,
                palette_flags: palette_types(&cpal)?,
                num_palette_entries: cpal.num_palette_entries(),
                palette_entry_name_ids,
            })
        })
    }

    fn palette_select(
        &self,
        face: SkrifaFace,
        index: u16,
        f: &mut dyn FnMut(&mut [raw::Color]),
    ) -> Result<()> {
        let mut palette = self.with_font(face, |font| palette_colors(font, index))?;
        f(&mut palette);
        self.with_face(face, |loaded| {
            loaded.palette = palette;
            log::debug!("selected palette {index} with {} entries", loaded.palette.len());
            Ok(())
        })
    }

    fn palette_set_foreground_color(&self, face: SkrifaFace, color: raw::Color) -> Result<()> {
        self.with_face(face, |loaded| {
            loaded.font()?.cpal()?;
            log::trace!("foreground color {:?} -> {color:?}", loaded.foreground);
            loaded.foreground = color;
            Ok(())
        })
    }

    fn color_glyph_layer(
        &self,
        face: SkrifaFace,
        base_glyph: u32,
        iter: &mut SkrifaLayers,
    ) -> Option<(u32, u32)> {
        self.with_font(face, |font| {
            let colr = font.colr()?;
            if iter.layers.is_none() {
                let range = colr
                    .v0_base_glyph(GlyphId::new(base_glyph))?
                    .unwrap_or_default();
                iter.num_layers = range.len() as u32;
                iter.layers = Some(range);
            }
            let Some(index) = iter.layers.as_mut().and_then(Iterator::next) else {
                return Ok(None);
            };
            let (glyph, color) = colr.v0_layer(index)?;
            Ok(Some((glyph.to_u16() as u32, color as u32)))
        })
        .ok()
        .flatten()
    }

    fn gasp(&self, face: SkrifaFace, ppem: u32) -> i32 {
        self.with_font(face, |font| {
            let gasp = font.gasp()?;
            let Some(range) = gasp
                .gasp_ranges()
                .iter()
                .find(|range| ppem <= range.range_max_ppem() as u32)
            else {
                return Ok(raw::GASP_NO_TABLE);
            };
            let mut flags = range.range_gasp_behavior().bits() as i32;
            // Version 0 only defines the first two bits.
            if gasp.version() == 0 {
                flags &= 3;
            }
            Ok(flags)
        })
        .unwrap_or(raw::GASP_NO_TABLE)
    }

    fn multi_master(&self, _face: SkrifaFace) -> Result<MultiMaster> {
        Err(Error::InvalidArgument)
    }

    fn get_mm_var(&self, face: SkrifaFace) -> Result<SkrifaMmVar> {
        self.with_font(face, |font| {
            let fvar = font.fvar()?;
            let axis_records = fvar.axes()?;
            let axis = fvar_axes(font);
            let namedstyle = fvar
                .instances()?
                .iter()
                .map(|instance| -> Result<raw::VarNamedStyleRec> {
                    let instance = instance?;
                    Ok(raw::VarNamedStyleRec {
                        coords: instance.coordinates.iter().map(|c| c.get()).collect(),
                        strid: instance.subfamily_name_id.to_u16() as u32,
                        psid: instance
                            .post_script_name_id
                            .map_or(raw::NO_NAME_ID as u32, |id| id.to_u16() as u32),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(SkrifaMmVar {
                axis_flags: axis_records.iter().map(|a| a.flags() as u32).collect(),
                rec: raw::MmVarRec {
                    num_axis: axis.len() as u32,
                    num_designs: raw::UNDEFINED_U32,
                    num_namedstyles: namedstyle.len() as u32,
                    axis,
                    namedstyle,
                },
            })
        })
    }

    fn mm_var_record(&self, mm_var: &SkrifaMmVar) -> raw::MmVarRec {
        mm_var.rec.clone()
    }

    fn var_axis_flags(&self, mm_var: &SkrifaMmVar, axis_index: u32) -> Result<u32> {
        mm_var
            .axis_flags
            .get(axis_index as usize)
            .copied()
            .ok_or(Error::InvalidArgument)
    }

    fn done_mm_var(&self, _face: SkrifaFace, _mm_var: SkrifaMmVar) -> Result<()> {
        Ok(())
    }

    fn set_mm_design_coordinates(&self, _face: SkrifaFace, _coords: &[i64]) -> Result<()> {
        Err(Error::InvalidArgument)
    }

    fn set_var_design_coordinates(&self, face: SkrifaFace, coords: &[Fixed]) -> Result<()> {
        self.with_face(face, |loaded| {
            let axes = fvar_axes(&loaded.font()?);
            if axes.is_empty() {
                return Err(Error::InvalidArgument);
            }
            let clamped = axes
                .iter()
                .zip(coords)
                .map(|(axis, coord)| (*coord).max(axis.minimum).min(axis.maximum));
            loaded.design = complete_coords(&axes, clamped);
            loaded.variation = !coords.is_empty();
            Ok(())
        })
    }

    fn get_var_design_coordinates(&self, face: SkrifaFace, coords: &mut [Fixed]) -> Result<()> {
        self.with_face(face, |loaded| {
            if loaded.design.is_empty() {
                return Err(Error::InvalidArgument);
            }
            for (slot, coord) in coords.iter_mut().zip(&loaded.design) {
                *slot = *coord;
            }
            Ok(())
        })
    }

    fn set_mm_blend_coordinates(&self, face: SkrifaFace, coords: &[Fixed]) -> Result<()> {
        self.with_face(face, |loaded| {
            let axes = fvar_axes(&loaded.font()?);
            if axes.is_empty() {
                return Err(Error::InvalidArgument);
            }
            let design = axes
                .iter()
                .zip(coords)
                .map(|(axis, n)| denormalize(axis, *n));
            loaded.design = complete_coords(&axes, design);
            loaded.variation = !coords.is_empty();
            Ok(())
        })
    }

    fn get_mm_blend_coordinates(&self, face: SkrifaFace, coords: &mut [Fixed]) -> Result<()> {
        self.with_face(face, |loaded| {
            let font = loaded.font()?;
            let axes = font.axes();
            if axes.len() == 0 {
                return Err(Error::InvalidArgument);
            }
            let settings = axes
                .iter()
                .zip(&loaded.design)
                .map(|(axis, coord)| (axis.tag(), coord.to_f64() as f32));
            let location = axes.location(settings);
            for (slot, coord) in coords.iter_mut().zip(location.coords()) {
                *slot = Fixed::from_f64(coord.to_f32() as f64);
            }
            Ok(())
        })
    }

    fn set_mm_weight_vector(&self, _face: SkrifaFace, _weights: &[Fixed]) -> Result<()> {
        Err(Error::InvalidArgument)
    }

    fn get_mm_weight_vector(&self, _face: SkrifaFace, _weights: &mut [Fixed]) -> Result<usize> {
        Err(Error::InvalidArgument)
    }

    fn set_named_instance(&self, face: SkrifaFace, instance_index: u32) -> Result<()> {
        self.with_face(face, |loaded| {
            loaded.font()?.fvar()?;
            apply_named_instance(loaded, instance_index)
        })
    }

    fn default_named_instance(&self, face: SkrifaFace) -> Result<u32> {
        self.with_font(face, |font| {
            let axes = fvar_axes(font);
            let defaults = complete_coords(&axes, []);
            for (i, instance) in font.fvar()?.instances()?.iter().enumerate() {
                let coords = complete_coords(&axes, instance?.coordinates.iter().map(|c| c.get()));
                if coords == defaults {
                    return Ok(i as u32 + 1);
                }
            }
            Ok(0)
        })
    }

    fn pfr_metrics(&self, face: SkrifaFace) -> (PfrMetrics, Result<()>) {
        let upem = self
            .with_font(face, |font| Ok(units_per_em(font)))
            .unwrap_or_default();
        let metrics = PfrMetrics {
            outline_resolution: upem,
            metrics_resolution: upem,
            metrics_x_scale: Fixed::ONE,
            metrics_y_scale: Fixed::ONE,
        };
        (metrics, Err(Error::UnknownFileFormat))
    }

    fn pfr_kerning(&self, face: SkrifaFace, _left: u32, _right: u32) -> Result<Vector> {
        self.with_face(face, |_| Ok(Vector::default()))
    }

    fn pfr_advance(&self, _face: SkrifaFace, _glyph_index: u32) -> Result<i64> {
        Err(Error::InvalidArgument)
    }

    fn sfnt_name_count(&self, face: SkrifaFace) -> u32 {
        self.with_font(face, |font| Ok(font.name()?.name_record().len() as u32))
            .unwrap_or_default()
    }

    fn sfnt_name(&self, face: SkrifaFace, index: u32) -> Result<raw::SfntNameRec> {
        self.with_font(face, |font| {
            let name = font.name()?;
            let record = name
                .name_record()
                .get(index as usize)
                .ok_or(Error::InvalidArgument)?;
            let start = record.string_offset().to_u32() as usize;
            let string = name
                .string_data()
                .as_bytes()
                .get(start..start + record.length() as usize)
                .ok_or(Error::InvalidTable)?;
            Ok(raw::SfntNameRec {
                platform_id: record.platform_id(),
                encoding_id: record.encoding_id(),
                language_id: record.language_id(),
                name_id: record.name_id().to_u16(),
                string: string.to_vec(),
            })
        })
    }

    fn sfnt_lang_tag(&self, face: SkrifaFace, language_id: u32) -> Result<Vec<u8>> {
        self.with_font(face, |font| {
            let name = font.name()?;
            if name.version() != 1 {
                return Err(Error::InvalidTable);
            }
            if language_id < 0x8000 {
                return Err(Error::InvalidArgument);
            }
            let record = name
                .lang_tag_record()
                .ok_or(Error::InvalidTable)?
                .get((language_id - 0x8000) as usize)
                .ok_or(Error::InvalidArgument)?;
            let start = record.lang_tag_offset().to_u32() as usize;
            name.string_data()
                .as_bytes()
                .get(start..start + record.length() as usize)
                .map(<[u8]>::to_vec)
                .ok_or(Error::InvalidTable)
        })
    }

    fn num_charmaps(&self, face: SkrifaFace) -> u32 {
        self.with_font(face, |font| Ok(font.cmap()?.encoding_records().len() as u32))
            .unwrap_or_default()
    }

    fn charmap_info(&self, face: SkrifaFace, index: u32) -> Option<raw::CharMapRec> {
        self.with_font(face, |font| {
            Ok(font
                .cmap()?
                .encoding_records()
                .get(index as usize)
                .map(|record| raw::CharMapRec {
                    platform_id: record.platform_id() as u16,
                    encoding_id: record.encoding_id(),
                }))
        })
        .ok()
        .flatten()
    }

    fn charmap_language(&self, face: SkrifaFace, index: u32) -> u32 {
        self.with_font(face, |font| {
            let subtable = cmap_subtable(font, index)?;
            // read-fonts reports zero for format 8.
            Ok(match &subtable {
                CmapSubtable::Format8(table) => table.language(),
                _ => subtable.language(),
            })
        })
        .unwrap_or_default()
    }

    fn charmap_format(&self, face: SkrifaFace, index: u32) -> i64 {
        self.with_font(face, |font| {
            Ok(cmap_subtable(font, index)?.format() as i64)
        })
        .unwrap_or(-1)
    }

    fn has_ps_glyph_names(&self, face: SkrifaFace) -> bool {
        self.with_font(face, |font| Ok(has_glyph_names(font)))
            .unwrap_or_default()
    }

    fn ps_font_info(&self, face: SkrifaFace) -> Result<PsFontInfo> {
        self.with_font(face, |font| {
            let (cff, entries) = cff_top_dict(font)?;
            Ok(cff_font_info(&cff, &entries))
        })
    }

    fn ps_private(&self, face: SkrifaFace) -> Result<PsPrivate> {
        self.with_font(face, |font| {
            let (cff, entries) = cff_top_dict(font)?;
            let mut range = None;
            let mut unique_id = 0;
            for entry in &entries {
                match entry {
                    dict::Entry::PrivateDictRange(r) => range = Some(r.clone()),
                    dict::Entry::UniqueId(id) => unique_id = *id,
                    _ => {}
                }
            }
            let range = range.ok_or(Error::InvalidTable)?;
            let mut private = cff_private(cff.offset_data().as_bytes(), range)?;
            private.unique_id = unique_id;
            Ok(private)
        })
    }

    fn cid_face_info(&self, face: SkrifaFace) -> Result<CidFaceInfo> {
        self.with_font(face, |font| {
            let (cff, entries) = cff_top_dict(font)?;
            if !is_cid_keyed(&entries) {
                return Err(Error::InvalidArgument);
            }
            let table = cff.offset_data().as_bytes();
            let string = |id| lossy_string(&cff_string(&cff, id));
            let mut info = CidFaceInfo {
                cid_font_name: cff
                    .name(0)
                    .map(|name| name.chars().collect())
                    .unwrap_or_default(),
                font_info: cff_font_info(&cff, &entries),
                // CFF default when the top dict omits CIDCount.
                cid_count: 8720,
                ..Default::default()
            };
            let mut font_dicts = None;
            for entry in &entries {
                match entry {
                    dict::Entry::Ros {
                        registry,
                        ordering,
                        supplement,
                    } => {
                        info.registry = string(*registry);
                        info.ordering = string(*ordering);
                        info.supplement = supplement.to_i32();
                    }
                    dict::Entry::CidFontVersion(version) => info.cid_version = *version,
                    dict::Entry::CidFontType(kind) => info.cid_font_type = *kind,
                    dict::Entry::CidCount(count) => info.cid_count = *count as u64,
                    dict::Entry::UidBase(base) => info.uid_base = *base as u64,
                    dict::Entry::FontBbox([x_min, y_min, x_max, y_max]) => {
                        info.font_bbox = BBox {
                            x_min: x_min.to_i32() as i64,
                            y_min: y_min.to_i32() as i64,
                            x_max: x_max.to_i32() as i64,
                            y_max: y_max.to_i32() as i64,
                        }
                    }
                    dict::Entry::FdArrayOffset(offset) => {
                        let data = table.get(*offset..).unwrap_or_default();
                        font_dicts = Some(Index::new(data, false)?);
                    }
                    _ => {}
                }
            }
            if let Some(font_dicts) = font_dicts {
                info.font_dicts = (0..font_dicts.count() as usize)
                    .map(|i| cff_font_dict(table, font_dicts.get(i)?))
                    .collect::<Result<_>>()?;
            }
            log::trace!(
                "CID font {} with {} font dicts",
                info.cid_font_name,
                info.font_dicts.len()
            );
            Ok(info)
        })
    }

    fn ps_font_value(&self, _face: SkrifaFace, _key: u32, _index: u32) -> Result<Vec<u8>> {
        Err(Error::InvalidArgument)
    }

    fn winfnt_header(&self, _face: SkrifaFace) -> Result<WinFntHeader> {
        Err(Error::InvalidArgument)
    }
}

/// Collects the `FontInfo` keys of a CFF top dict.
fn cff_font_info(cff: &Cff, entries: &[dict::Entry]) -> PsFontInfo {
    let string = |id| String::from_utf8_lossy(&cff_string(cff, id)).into_owned();
    let mut info = PsFontInfo {
        underline_position: -100,
        underline_thickness: 50,
        ..Default::default()
    };
    for entry in entries {
        match *entry {
            dict::Entry::Version(id) => info.version = string(id),
            dict::Entry::Notice(id) => info.notice = string(id),
            dict::Entry::FullName(id) => info.full_name = string(id),
            dict::Entry::FamilyName(id) => info.family_name = string(id),
            dict::Entry::Weight(id) => info.weight = string(id),
            dict::Entry::ItalicAngle(angle) => info.italic_angle = angle.to_i32() as i64,
            dict::Entry::IsFixedPitch(fixed) => info.is_fixed_pitch = fixed,
            dict::Entry::UnderlinePosition(pos) => info.underline_position = pos.to_i32() as i16,
            dict::Entry::UnderlineThickness(thickness) => {
                info.underline_thickness = thickness.to_i32() as u16
            }
            _ => {}
        }
    }
    info
}

/// Parses the private dict at `range` of the CFF table data.
fn cff_private(table: &[u8], range: Range<usize>) -> Result<PsPrivate> {
    let data = table.get(range).ok_or(Error::InvalidTable)?;
    let mut private = PsPrivate {
        blue_scale: Fixed::from_f64(0.039625),
        blue_shift: 7,
        blue_fuzz: 1,
        expansion_factor: Fixed::from_f64(0.06),
        ..Default::default()
    };
    for entry in dict::entries(data, None) {
        match entry? {
            dict::Entry::BlueValues(blues) => {
                private.num_blue_values =
                    fill_blues(&mut private.blue_values, blues.values())
            }
            dict::Entry::OtherBlues(blues) => {
                private.num_other_blues =
                    fill_blues(&mut private.other_blues, blues.values())
            }
            dict::Entry::FamilyBlues(blues) => {
                private.num_family_blues =
                    fill_blues(&mut private.family_blues, blues.values())
            }
            dict::Entry::FamilyOtherBlues(blues) => {
                private.num_family_other_blues =
                    fill_blues(&mut private.family_other_blues, blues.values())
            }
            dict::Entry::BlueScale(value) => private.blue_scale = value,
            dict::Entry::BlueShift(value) => private.blue_shift = value.to_i32(),
            dict::Entry::BlueFuzz(value) => private.blue_fuzz = value.to_i32(),
            dict::Entry::StdHw(value) => private.standard_width[0] = value.to_i32() as u16,
            dict::Entry::StdVw(value) => private.standard_height[0] = value.to_i32() as u16,
            dict::Entry::StemSnapH(snaps) => {
                private.num_snap_widths = fill(&mut private.snap_widths, snaps.values())
            }
            dict::Entry::StemSnapV(snaps) => {
                private.num_snap_heights = fill(&mut private.snap_heights, snaps.values())
            }
            dict::Entry::ForceBold(value) => private.force_bold = value,
            dict::Entry::LanguageGroup(value) => private.language_group = value as i64,
            dict::Entry::ExpansionFactor(value) => private.expansion_factor = value,
            _ => {}
        }
    }
    Ok(private)
}

/// Reads one FDArray entry of a CID-keyed CFF.
fn cff_font_dict(table: &[u8], data: &[u8]) -> Result<CidFaceDict> {
    let mut font_dict = CidFaceDict {
        expansion_factor: Fixed::from_f64(0.06),
        font_matrix: Matrix {
            xx: Fixed::from_f64(0.001),
            yy: Fixed::from_f64(0.001),
            ..Default::default()
        },
        font_type: 2,
        ..Default::default()
    };
    let mut range = None;
    for entry in dict::entries(data, None) {
        match entry? {
            dict::Entry::PrivateDictRange(r) => range = Some(r),
            dict::Entry::PaintType(kind) => font_dict.paint_type = kind as u8,
            dict::Entry::CharstringType(kind) => font_dict.font_type = kind as u8,
            dict::Entry::StrokeWidth(width) => font_dict.stroke_width = width.to_i32() as i64,
            dict::Entry::FontMatrix(matrix, _) => {
                font_dict.font_matrix = Matrix {
                    xx: matrix[0],
                    yx: matrix[1],
                    xy: matrix[2],
                    yy: matrix[3],
                };
                font_dict.font_offset = Vector {
                    x: matrix[4].to_i32() as i64,
                    y: matrix[5].to_i32() as i64,
                };
            }
            _ => {}
        }
    }
    if let Some(range) = range {
        font_dict.private_dict = cff_private(table, range)?;
        font_dict.expansion_factor = font_dict.private_dict.expansion_factor;
    }
    Ok(font_dict)
}

/// Copies whole values into `out`, returning the number written.
fn fill(out: &mut [i16], values: &[Fixed]) -> u8 {
    let mut count = 0;
    for (slot, value) in out.iter_mut().zip(values) {
        *slot = value.to_i32() as i16;
        count += 1;
    }
    count
}

/// Flattens blue zone pairs into `out`, returning the number of values.
fn fill_blues(out: &mut [i16], pairs: &[(Fixed, Fixed)]) -> u8 {
    let values: Vec<_> = pairs.iter().flat_map(|(a, b)| [*a, *b]).collect();
    fill(out, &values)
}
