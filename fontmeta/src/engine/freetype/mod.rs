//! An engine backed by the FreeType library.
//!
//! FreeType supports every format the accessors know about, so this is the
//! engine to use for BDF, PCF, PFR, Type 1, CID-keyed and Windows FNT fonts.

mod ffi;

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    ffi::{c_char, CStr, CString},
    mem,
    path::Path,
    ptr, slice,
    sync::Arc,
};

use super::{raw, Engine, LayerIterator};
use crate::{
    error::{Error, Result},
    flags::{FaceFlags, StyleFlags},
    ids::WinFntId,
    library::Version,
    meta::{
        lossy_string,
        mm::{MmAxis, MultiMaster},
        pfr::{PfrMetrics, Vector},
        postscript::{PsFontInfo, PsPrivate},
        winfnt::WinFntHeader,
    },
    Fixed,
};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FreeTypeLibrary(ffi::FT_Library);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct FreeTypeFace(ffi::FT_Face);

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FreeTypeSize(ffi::FT_Size);

/// FreeType's `COLR` layer iterator.
#[derive(Debug)]
pub struct FreeTypeLayers(ffi::FT_LayerIterator);

impl Default for FreeTypeLayers {
    fn default() -> Self {
        Self(ffi::FT_LayerIterator {
            num_layers: 0,
            layer: 0,
            p: ptr::null_mut(),
        })
    }
}

impl LayerIterator for FreeTypeLayers {
    fn num_layers(&self) -> u32 {
        self.0.num_layers
    }
}

/// A variation descriptor allocated by FreeType.
#[derive(Debug)]
pub struct FreeTypeMmVar(*mut ffi::FT_MM_Var);

/// A font engine that calls into FreeType.
#[derive(Default)]
pub struct FreeTypeEngine {
    library: Cell<Option<ffi::FT_Library>>,
    // FreeType reads memory faces in place.
    data: RefCell<HashMap<FreeTypeFace, Arc<[u8]>>>,
}

fn check(code: ffi::FT_Error) -> Result<()> {
    Error::check(code)
}

fn fixed(value: ffi::FT_Fixed) -> Fixed {
    Fixed::from_bits(value as i32)
}

fn ft_fixed(value: &Fixed) -> ffi::FT_Fixed {
    value.to_bits() as ffi::FT_Fixed
}

/// Copies a NUL terminated string, empty for a null pointer.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL terminated string.
unsafe fn c_bytes(ptr: *const c_char) -> Vec<u8> {
    if ptr.is_null() {
        Vec::new()
    } else {
        CStr::from_ptr(ptr).to_bytes().to_vec()
    }
}

/// Like [`c_bytes`], decoded lossily.
unsafe fn c_string(ptr: *const c_char) -> String {
    lossy_string(&c_bytes(ptr))
}

/// Views a pointer and count pair as a slice, empty for a null pointer.
///
/// # Safety
///
/// A non-null `ptr` must point to `len` initialized values that outlive
/// the returned slice.
unsafe fn slice_of<'a, T>(ptr: *const T, len: usize) -> &'a [T] {
    if ptr.is_null() || len == 0 {
        &[]
    } else {
        slice::from_raw_parts(ptr, len)
    }
}

impl FreeTypeEngine {
    fn charmap(&self, face: FreeTypeFace, index: u32) -> Option<ffi::FT_CharMap> {
        // SAFETY: face handles are live FreeType faces.
        let rec = unsafe { &*face.0 };
        if index >= rec.num_charmaps.max(0) as u32 || rec.charmaps.is_null() {
            return None;
        }
        // SAFETY: `charmaps` holds `num_charmaps` entries.
        Some(unsafe { *rec.charmaps.add(index as usize) })
    }

    fn palette_data_rec(&self, face: FreeTypeFace) -> Result<ffi::FT_Palette_Data> {
        let mut data = ffi::FT_Palette_Data {
            num_palettes: 0,
            palette_name_ids: ptr::null(),
            palette_flags: ptr::null(),
            num_palette_entries: 0,
            palette_entry_name_ids: ptr::null(),
        };
        check(unsafe { ffi::FT_Palette_Data_Get(face.0, &mut data) })?;
        Ok(data)
    }
}

impl Engine for FreeTypeEngine {
    type Library = FreeTypeLibrary;
    type Face = FreeTypeFace;
    type Size = FreeTypeSize;
    type LayerIterator = FreeTypeLayers;
    type MmVar = FreeTypeMmVar;

    fn new_library(&self) -> Result<FreeTypeLibrary> {
        let mut library = ptr::null_mut();
        check(unsafe { ffi::FT_Init_FreeType(&mut library) })?;
        self.library.set(Some(library));
        Ok(FreeTypeLibrary(library))
    }

    fn done_library(&self, library: FreeTypeLibrary) -> Result<()> {
        self.library.set(None);
        let result = check(unsafe { ffi::FT_Done_FreeType(library.0) });
        self.data.borrow_mut().clear();
        result
    }

    fn library_version(&self, library: FreeTypeLibrary) -> Version {
        let (mut major, mut minor, mut patch) = (0, 0, 0);
        unsafe { ffi::FT_Library_Version(library.0, &mut major, &mut minor, &mut patch) };
        Version::new(major as u32, minor as u32, patch as u32)
    }

    fn new_memory_face(
        &self,
        library: FreeTypeLibrary,
        data: Arc<[u8]>,
        index: u32,
    ) -> Result<FreeTypeFace> {
        let mut face = ptr::null_mut();
        check(unsafe {
            ffi::FT_New_Memory_Face(
                library.0,
                data.as_ptr(),
                data.len() as ffi::FT_Long,
                index as ffi::FT_Long,
                &mut face,
            )
        })?;
        let face = FreeTypeFace(face);
        self.data.borrow_mut().insert(face, data);
        Ok(face)
    }

    fn new_face(&self, library: FreeTypeLibrary, path: &Path, index: u32) -> Result<FreeTypeFace> {
        let path = CString::new(path.as_os_str().as_encoded_bytes()).map_err(|e| {
            log::debug!("font path is not representable: {e}");
            Error::CannotOpenResource
        })?;
        let mut face = ptr::null_mut();
        check(unsafe {
            ffi::FT_New_Face(library.0, path.as_ptr(), index as ffi::FT_Long, &mut face)
        })?;
        Ok(FreeTypeFace(face))
    }

    fn done_face(&self, face: FreeTypeFace) -> Result<()> {
        let result = check(unsafe { ffi::FT_Done_Face(face.0) });
        self.data.borrow_mut().remove(&face);
        result
    }

    fn header(&self, face: FreeTypeFace) -> raw::FaceHeader {
        // SAFETY: face handles are live FreeType faces.
        let rec = unsafe { &*face.0 };
        raw::FaceHeader {
            num_faces: rec.num_faces as i64,
            face_index: rec.face_index as i64,
            face_flags: FaceFlags::from_bits_truncate(rec.face_flags as u32),
            style_flags: StyleFlags::from_bits_truncate(rec.style_flags as u32),
            num_glyphs: rec.num_glyphs as i64,
            family_name: unsafe { c_bytes(rec.family_name) },
            style_name: unsafe { c_bytes(rec.style_name) },
        }
    }

    fn new_size(&self, face: FreeTypeFace) -> Result<FreeTypeSize> {
        let mut size = ptr::null_mut();
        check(unsafe { ffi::FT_New_Size(face.0, &mut size) })?;
        Ok(FreeTypeSize(size))
    }

    fn done_size(&self, size: FreeTypeSize) -> Result<()> {
        check(unsafe { ffi::FT_Done_Size(size.0) })
    }

    fn activate_size(&self, size: FreeTypeSize) -> Result<()> {
        check(unsafe { ffi::FT_Activate_Size(size.0) })
    }

    fn bdf_charset_id(&self, face: FreeTypeFace) -> Result<(Vec<u8>, Vec<u8>)> {
        let (mut encoding, mut registry) = (ptr::null(), ptr::null());
        check(unsafe { ffi::FT_Get_BDF_Charset_ID(face.0, &mut encoding, &mut registry) })?;
        Ok(unsafe { (c_bytes(encoding), c_bytes(registry)) })
    }

    fn bdf_property(&self, face: FreeTypeFace, name: &str) -> Result<raw::BdfPropertyRec> {
        let name = CString::new(name).map_err(|_| Error::InvalidArgument)?;
        let mut prop = ffi::BDF_PropertyRec {
            type_: 0,
            u: ffi::BDF_PropertyValue { cardinal: 0 },
        };
        check(unsafe { ffi::FT_Get_BDF_Property(face.0, name.as_ptr(), &mut prop) })?;
        let mut rec = raw::BdfPropertyRec {
            kind: prop.type_ as u32,
            ..Default::default()
        };
        // SAFETY: the union member read is the one selected by `type_`.
        unsafe {
            match prop.type_ {
                ffi::BDF_PROPERTY_TYPE_ATOM => rec.atom = c_bytes(prop.u.atom),
                ffi::BDF_PROPERTY_TYPE_INTEGER => rec.integer = prop.u.integer,
                ffi::BDF_PROPERTY_TYPE_CARDINAL => rec.cardinal = prop.u.cardinal,
                _ => {}
            }
        }
        Ok(rec)
    }

    fn cid_registry_ordering_supplement(
        &self,
        face: FreeTypeFace,
    ) -> Result<(Vec<u8>, Vec<u8>, i32)> {
        let (mut registry, mut ordering, mut supplement) = (ptr::null(), ptr::null(), 0);
        check(unsafe {
            ffi::FT_Get_CID_Registry_Ordering_Supplement(
                face.0,
                &mut registry,
                &mut ordering,
                &mut supplement,
            )
        })?;
        Ok(unsafe { (c_bytes(registry), c_bytes(ordering), supplement) })
    }

    fn cid_is_internally_keyed(&self, face: FreeTypeFace) -> Result<bool> {
        let mut is_cid = 0;
        check(unsafe { ffi::FT_Get_CID_Is_Internally_CID_Keyed(face.0, &mut is_cid) })?;
        Ok(is_cid != 0)
    }

    fn cid_from_glyph_index(&self, face: FreeTypeFace, glyph_index: u32) -> Result<u32> {
        let mut cid = 0;
        check(unsafe { ffi::FT_Get_CID_From_Glyph_Index(face.0, glyph_index, &mut cid) })?;
        Ok(cid)
    }

    fn palette_data(&self, face: FreeTypeFace) -> Result<raw::PaletteDataRec> {
        let data = self.palette_data_rec(face)?;
        let palettes = data.num_palettes as usize;
        let entries = data.num_palette_entries as usize;
        // SAFETY: FreeType sizes the arrays by the counts next to them.
        unsafe {
            Ok(raw::PaletteDataRec {
                num_palettes: data.num_palettes,
                palette_name_ids: slice_of(data.palette_name_ids, palettes).to_vec(),
                palette_flags: slice_of(data.palette_flags, palettes).to_vec(),
                num_palette_entries: data.num_palette_entries,
                palette_entry_name_ids: slice_of(data.palette_entry_name_ids, entries).to_vec(),
            })
        }
    }

    fn palette_select(
        &self,
        face: FreeTypeFace,
        index: u16,
        f: &mut dyn FnMut(&mut [raw::Color]),
    ) -> Result<()> {
        let entries = self.palette_data_rec(face)?.num_palette_entries as usize;
        let mut colors = ptr::null_mut();
        check(unsafe { ffi::FT_Palette_Select(face.0, index, &mut colors) })?;
        if colors.is_null() || entries == 0 {
            f(&mut []);
        } else {
            // SAFETY: the selected palette has one color per palette entry and
            // lives as long as the face.
            f(unsafe { slice::from_raw_parts_mut(colors, entries) });
        }
        Ok(())
    }

    fn palette_set_foreground_color(&self, face: FreeTypeFace, color: raw::Color) -> Result<()> {
        check(unsafe { ffi::FT_Palette_Set_Foreground_Color(face.0, color) })
    }

    fn color_glyph_layer(
        &self,
        face: FreeTypeFace,
        base_glyph: u32,
        iter: &mut FreeTypeLayers,
    ) -> Option<(u32, u32)> {
        let (mut glyph, mut color) = (0, 0);
        let found = unsafe {
            ffi::FT_Get_Color_Glyph_Layer(face.0, base_glyph, &mut glyph, &mut color, &mut iter.0)
        };
        (found != 0).then_some((glyph, color))
    }

    fn gasp(&self, face: FreeTypeFace, ppem: u32) -> i32 {
        unsafe { ffi::FT_Get_Gasp(face.0, ppem) }
    }

    fn multi_master(&self, face: FreeTypeFace) -> Result<MultiMaster> {
        // SAFETY: an all zero record is valid, with null axis names.
        let mut master: ffi::FT_Multi_Master = unsafe { mem::zeroed() };
        check(unsafe { ffi::FT_Get_Multi_Master(face.0, &mut master) })?;
        let axis = master
            .axis
            .iter()
            .take(master.num_axis as usize)
            .map(|axis| MmAxis {
                name: unsafe { c_string(axis.name) },
                minimum: axis.minimum as i64,
                maximum: axis.maximum as i64,
            })
            .collect();
        Ok(MultiMaster {
            num_axis: master.num_axis,
            num_designs: master.num_designs,
            axis,
        })
    }

    fn get_mm_var(&self, face: FreeTypeFace) -> Result<FreeTypeMmVar> {
        let mut master = ptr::null_mut();
        check(unsafe { ffi::FT_Get_MM_Var(face.0, &mut master) })?;
        if master.is_null() {
            return Err(Error::InvalidArgument);
        }
        Ok(FreeTypeMmVar(master))
    }

    fn mm_var_record(&self, mm_var: &FreeTypeMmVar) -> raw::MmVarRec {
        // SAFETY: descriptors are non-null until released with done_mm_var.
        let master = unsafe { &*mm_var.0 };
        let num_axis = master.num_axis as usize;
        let axis = unsafe { slice_of(master.axis, num_axis) }
            .iter()
            .map(|axis| raw::VarAxisRec {
                name: unsafe { c_bytes(axis.name) },
                minimum: fixed(axis.minimum),
                def: fixed(axis.def),
                maximum: fixed(axis.maximum),
                tag: axis.tag as u32,
                strid: axis.strid,
            })
            .collect();
        let namedstyle = unsafe { slice_of(master.namedstyle, master.num_namedstyles as usize) }
            .iter()
            .map(|style| raw::VarNamedStyleRec {
                coords: unsafe { slice_of(style.coords, num_axis) }
                    .iter()
                    .map(|c| fixed(*c))
                    .collect(),
                strid: style.strid,
                psid: style.psid,
            })
            .collect();
        raw::MmVarRec {
            num_axis: master.num_axis,
            num_designs: master.num_designs,
            num_namedstyles: master.num_namedstyles,
            axis,
            namedstyle,
        }
    }

    fn var_axis_flags(&self, mm_var: &FreeTypeMmVar, axis_index: u32) -> Result<u32> {
        let mut flags = 0;
        check(unsafe { ffi::FT_Get_Var_Axis_Flags(mm_var.0, axis_index, &mut flags) })?;
        Ok(flags)
    }

    fn done_mm_var(&self, _face: FreeTypeFace, mm_var: FreeTypeMmVar) -> Result<()> {
        let library = self.library.get().ok_or(Error::InvalidLibraryHandle)?;
        check(unsafe { ffi::FT_Done_MM_Var(library, mm_var.0) })
    }

    fn set_mm_design_coordinates(&self, face: FreeTypeFace, coords: &[i64]) -> Result<()> {
        let coords: Vec<_> = coords.iter().map(|c| *c as ffi::FT_Long).collect();
        check(unsafe {
            ffi::FT_Set_MM_Design_Coordinates(face.0, coords.len() as u32, coords.as_ptr())
        })
    }

    fn set_var_design_coordinates(&self, face: FreeTypeFace, coords: &[Fixed]) -> Result<()> {
        let coords: Vec<_> = coords.iter().map(ft_fixed).collect();
        check(unsafe {
            ffi::FT_Set_Var_Design_Coordinates(face.0, coords.len() as u32, coords.as_ptr() as _)
        })
    }

    fn get_var_design_coordinates(&self, face: FreeTypeFace, coords: &mut [Fixed]) -> Result<()> {
        let mut values = vec![0; coords.len()];
        check(unsafe {
            ffi::FT_Get_Var_Design_Coordinates(face.0, values.len() as u32, values.as_mut_ptr())
        })?;
        for (coord, value) in coords.iter_mut().zip(values) {
            *coord = fixed(value);
        }
        Ok(())
    }

    fn set_mm_blend_coordinates(&self, face: FreeTypeFace, coords: &[Fixed]) -> Result<()> {
        let coords: Vec<_> = coords.iter().map(ft_fixed).collect();
        check(unsafe {
            ffi::FT_Set_MM_Blend_Coordinates(face.0, coords.len() as u32, coords.as_ptr())
        })
    }

    fn get_mm_blend_coordinates(&self, face: FreeTypeFace, coords: &mut [Fixed]) -> Result<()> {
        let mut values = vec![0; coords.len()];
        check(unsafe {
            ffi::FT_Get_MM_Blend_Coordinates(face.0, values.len() as u32, values.as_mut_ptr())
        })?;
        for (coord, value) in coords.iter_mut().zip(values) {
            *coord = fixed(value);
        }
        Ok(())
    }

    fn set_mm_weight_vector(&self, face: FreeTypeFace, weights: &[Fixed]) -> Result<()> {
        let weights: Vec<_> = weights.iter().map(ft_fixed).collect();
        check(unsafe {
            ffi::FT_Set_MM_WeightVector(face.0, weights.len() as u32, weights.as_ptr())
        })
    }

    fn get_mm_weight_vector(&self, face: FreeTypeFace, weights: &mut [Fixed]) -> Result<usize> {
        let mut values = vec![0; weights.len()];
        let mut len = values.len() as u32;
        check(unsafe { ffi::FT_Get_MM_WeightVector(face.0, &mut len, values.as_mut_ptr()) })?;
        for (weight, value) in weights.iter_mut().zip(values) {
            *weight = fixed(value);
        }
        Ok(len as usize)
    }

    fn set_named_instance(&self, face: FreeTypeFace, instance_index: u32) -> Result<()> {
        check(unsafe { ffi::FT_Set_Named_Instance(face.0, instance_index) })
    }

    fn default_named_instance(&self, face: FreeTypeFace) -> Result<u32> {
        let mut index = 0;
        check(unsafe { ffi::FT_Get_Default_Named_Instance(face.0, &mut index) })?;
        Ok(index)
    }

    fn pfr_metrics(&self, face: FreeTypeFace) -> (PfrMetrics, Result<()>) {
        let (mut outline, mut metrics) = (0, 0);
        let (mut x_scale, mut y_scale) = (0, 0);
        let result = check(unsafe {
            ffi::FT_Get_PFR_Metrics(face.0, &mut outline, &mut metrics, &mut x_scale, &mut y_scale)
        });
        let metrics = PfrMetrics {
            outline_resolution: outline,
            metrics_resolution: metrics,
            metrics_x_scale: fixed(x_scale),
            metrics_y_scale: fixed(y_scale),
        };
        (metrics, result)
    }

    fn pfr_kerning(&self, face: FreeTypeFace, left: u32, right: u32) -> Result<Vector> {
        let mut kerning = ffi::FT_Vector { x: 0, y: 0 };
        check(unsafe { ffi::FT_Get_PFR_Kerning(face.0, left, right, &mut kerning) })?;
        Ok(Vector {
            x: kerning.x as i64,
            y: kerning.y as i64,
        })
    }

    fn pfr_advance(&self, face: FreeTypeFace, glyph_index: u32) -> Result<i64> {
        let mut advance = 0;
        check(unsafe { ffi::FT_Get_PFR_Advance(face.0, glyph_index, &mut advance) })?;
        Ok(advance as i64)
    }

    fn sfnt_name_count(&self, face: FreeTypeFace) -> u32 {
        unsafe { ffi::FT_Get_Sfnt_Name_Count(face.0) }
    }

    fn sfnt_name(&self, face: FreeTypeFace, index: u32) -> Result<raw::SfntNameRec> {
        // SAFETY: an all zero record is valid, with a null string.
        let mut name: ffi::FT_SfntName = unsafe { mem::zeroed() };
        check(unsafe { ffi::FT_Get_Sfnt_Name(face.0, index, &mut name) })?;
        Ok(raw::SfntNameRec {
            platform_id: name.platform_id,
            encoding_id: name.encoding_id,
            language_id: name.language_id,
            name_id: name.name_id,
            // SAFETY: the string is owned by the face.
            string: unsafe { slice_of(name.string, name.string_len as usize) }.to_vec(),
        })
    }

    fn sfnt_lang_tag(&self, face: FreeTypeFace, language_id: u32) -> Result<Vec<u8>> {
        let mut tag = ffi::FT_SfntLangTag {
            string: ptr::null_mut(),
            string_len: 0,
        };
        check(unsafe { ffi::FT_Get_Sfnt_LangTag(face.0, language_id, &mut tag) })?;
        Ok(unsafe { slice_of(tag.string, tag.string_len as usize) }.to_vec())
    }

    fn num_charmaps(&self, face: FreeTypeFace) -> u32 {
        // SAFETY: face handles are live FreeType faces.
        unsafe { (*face.0).num_charmaps.max(0) as u32 }
    }

    fn charmap_info(&self, face: FreeTypeFace, index: u32) -> Option<raw::CharMapRec> {
        let charmap = self.charmap(face, index)?;
        // SAFETY: charmaps of a live face are live.
        let charmap = unsafe { &*charmap };
        Some(raw::CharMapRec {
            platform_id: charmap.platform_id,
            encoding_id: charmap.encoding_id,
        })
    }

    fn charmap_language(&self, face: FreeTypeFace, index: u32) -> u32 {
        self.charmap(face, index)
            .map(|charmap| unsafe { ffi::FT_Get_CMap_Language_ID(charmap) } as u32)
            .unwrap_or_default()
    }

    fn charmap_format(&self, face: FreeTypeFace, index: u32) -> i64 {
        self.charmap(face, index)
            .map(|charmap| unsafe { ffi::FT_Get_CMap_Format(charmap) } as i64)
            .unwrap_or(-1)
    }

    fn has_ps_glyph_names(&self, face: FreeTypeFace) -> bool {
        unsafe { ffi::FT_Has_PS_Glyph_Names(face.0) != 0 }
    }

    fn ps_font_info(&self, face: FreeTypeFace) -> Result<PsFontInfo> {
        // SAFETY: an all zero record is valid, with null strings.
        let mut info: ffi::PS_FontInfoRec = unsafe { mem::zeroed() };
        check(unsafe { ffi::FT_Get_PS_Font_Info(face.0, &mut info) })?;
        unsafe {
            Ok(PsFontInfo {
                version: c_string(info.version),
                notice: c_string(info.notice),
                full_name: c_string(info.full_name),
                family_name: c_string(info.family_name),
                weight: c_string(info.weight),
                italic_angle: info.italic_angle as i64,
                is_fixed_pitch: info.is_fixed_pitch != 0,
                underline_position: info.underline_position,
                underline_thickness: info.underline_thickness,
            })
        }
    }

    fn ps_private(&self, face: FreeTypeFace) -> Result<PsPrivate> {
        // SAFETY: the record is plain data.
        let mut private: ffi::PS_PrivateRec = unsafe { mem::zeroed() };
        check(unsafe { ffi::FT_Get_PS_Font_Private(face.0, &mut private) })?;
        Ok(PsPrivate {
            unique_id: private.unique_id,
            len_iv: private.lenIV,
            num_blue_values: private.num_blue_values,
            num_other_blues: private.num_other_blues,
            num_family_blues: private.num_family_blues,
            num_family_other_blues: private.num_family_other_blues,
            blue_values: private.blue_values,
            other_blues: private.other_blues,
            family_blues: private.family_blues,
            family_other_blues: private.family_other_blues,
            blue_scale: fixed(private.blue_scale),
            blue_shift: private.blue_shift,
            blue_fuzz: private.blue_fuzz,
            standard_width: private.standard_width,
            standard_height: private.standard_height,
            num_snap_widths: private.num_snap_widths,
            num_snap_heights: private.num_snap_heights,
            force_bold: private.force_bold != 0,
            round_stem_up: private.round_stem_up != 0,
            snap_widths: private.snap_widths,
            snap_heights: private.snap_heights,
            expansion_factor: fixed(private.expansion_factor),
            language_group: private.language_group as i64,
            password: private.password as i64,
            min_feature: private.min_feature,
        })
    }

    fn ps_font_value(&self, face: FreeTypeFace, key: u32, index: u32) -> Result<Vec<u8>> {
        // A first call with no buffer reports the size of the value.
        let len = unsafe {
            ffi::FT_Get_PS_Font_Value(face.0, key as i32, index, ptr::null_mut(), 0)
        };
        if len < 0 {
            return Err(Error::InvalidArgument);
        }
        let mut value = vec![0u8; len as usize];
        let written = unsafe {
            ffi::FT_Get_PS_Font_Value(
                face.0,
                key as i32,
                index,
                value.as_mut_ptr().cast(),
                value.len() as ffi::FT_Long,
            )
        };
        if written < 0 {
            return Err(Error::InvalidArgument);
        }
        value.truncate(written as usize);
        Ok(value)
    }

    fn winfnt_header(&self, face: FreeTypeFace) -> Result<WinFntHeader> {
        // SAFETY: the record is plain data.
        let mut header: ffi::FT_WinFNT_HeaderRec = unsafe { mem::zeroed() };
        check(unsafe { ffi::FT_Get_WinFNT_Header(face.0, &mut header) })?;
        Ok(WinFntHeader {
            version: header.version,
            file_size: header.file_size as u32,
            copyright: header.copyright,
            file_type: header.file_type,
            nominal_point_size: header.nominal_point_size,
            vertical_resolution: header.vertical_resolution,
            horizontal_resolution: header.horizontal_resolution,
            ascent: header.ascent,
            internal_leading: header.internal_leading,
            external_leading: header.external_leading,
            italic: header.italic,
            underline: header.underline,
            strike_out: header.strike_out,
            weight: header.weight,
            charset: WinFntId::new(header.charset),
            pixel_width: header.pixel_width,
            pixel_height: header.pixel_height,
            pitch_and_family: header.pitch_and_family,
            avg_width: header.avg_width,
            max_width: header.max_width,
            first_char: header.first_char,
            last_char: header.last_char,
            default_char: header.default_char,
            break_char: header.break_char,
            bytes_per_row: header.bytes_per_row,
            device_offset: header.device_offset as u32,
            face_name_offset: header.face_name_offset as u32,
            bits_pointer: header.bits_pointer as u32,
            bits_offset: header.bits_offset as u32,
            reserved: header.reserved,
            flags: header.flags as u32,
            a_space: header.A_space,
            b_space: header.B_space,
            c_space: header.C_space,
            color_table_offset: header.color_table_offset,
            reserved1: header.reserved1.map(|value| value as u64),
        })
    }

    fn error_string(&self, code: i32) -> Option<String> {
        // Null unless FreeType was built with error strings.
        let text = unsafe { ffi::FT_Error_String(code) };
        if text.is_null() {
            Error::from_code(code).map(|err| err.to_string())
        } else {
            Some(unsafe { c_string(text) })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{meta::bdf::BdfProperty, FaceIndex, Library};
    use pretty_assertions::assert_eq;

    const GOHU_BDF: &str = "\
STARTFONT 2.1
FONT -Gohu-GohuFont-Medium-R-Normal--11-80-100-100-C-60-ISO8859-1
SIZE 11 100 100
FONTBOUNDINGBOX 6 11 0 -2
STARTPROPERTIES 9
FOUNDRY \"Gohu\"
FAMILY_NAME \"GohuFont\"
PIXEL_SIZE 11
RESOLUTION_X 100
RESOLUTION_Y 100
CHARSET_REGISTRY \"ISO8859\"
CHARSET_ENCODING \"1\"
FONT_ASCENT 9
FONT_DESCENT 2
ENDPROPERTIES
CHARS 1
STARTCHAR space
ENCODING 32
SWIDTH 545 0
DWIDTH 6 0
BBX 6 11 0 -2
BITMAP
00
00
00
00
00
00
00
00
00
00
00
ENDCHAR
ENDFONT
";

    #[test]
    fn library_version() {
        let library = Library::new(FreeTypeEngine::default()).unwrap();
        assert_eq!(library.version().major, 2);
        library.done().unwrap();
        assert_eq!(library.version(), Version::default());
    }

    #[test]
    fn load_errors() {
        let library = Library::new(FreeTypeEngine::default()).unwrap();
        let err = library
            .new_memory_face(
                b"definitely not a font".to_vec().into(),
                FaceIndex::default(),
            )
            .unwrap_err();
        assert_eq!(err, Error::UnknownFileFormat);
        let err = library
            .new_face_from_path("no/such/font.ttf", FaceIndex::default())
            .unwrap_err();
        assert_eq!(err, Error::CannotOpenResource);
    }

    #[test]
    fn error_strings() {
        let library = Library::new(FreeTypeEngine::default()).unwrap();
        assert_eq!(library.error_string(0x06), "invalid argument");
        assert_eq!(library.error_string(0x23), "invalid face handle");
    }

    #[test]
    fn bdf_records() {
        let library = Library::new(FreeTypeEngine::default()).unwrap();
        let face = library
            .new_memory_face(GOHU_BDF.as_bytes().into(), FaceIndex::default())
            .unwrap();
        assert_eq!(face.num_glyphs(), 2);
        assert_eq!(
            face.bdf_charset_id().unwrap(),
            ("1".to_string(), "ISO8859".to_string())
        );
        assert_eq!(
            face.bdf_property("FOUNDRY").unwrap(),
            BdfProperty::Atom("Gohu".into())
        );
        assert_eq!(
            face.bdf_property("PIXEL_SIZE").unwrap(),
            BdfProperty::Integer(11)
        );
        assert_eq!(
            face.bdf_property("RESOLUTION_X").unwrap(),
            BdfProperty::Cardinal(100)
        );
        assert_eq!(
            face.bdf_property("WEIGHT_NAME"),
            Err(Error::InvalidArgument)
        );
        // Not an sfnt, so the sfnt accessors reject it.
        assert_eq!(face.sfnt_name_count(), 0);
    }
}
