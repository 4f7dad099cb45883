//! Declarations for the FreeType format specific APIs.
//!
//! Everything `freetype-sys` binds is re-exported from there. The remaining
//! functions and records live in FreeType's optional service headers
//! (`ftbdf.h`, `ftcid.h`, `ftcolor.h`, `ftgasp.h`, `ftmm.h`, `ftpfr.h`,
//! `ftsnames.h`, `t1tables.h`, `ftwinfnt.h`) and are declared here against
//! the same library.

#![allow(non_camel_case_types, non_snake_case)]

use std::ffi::{c_char, c_int, c_void};

pub use ::freetype::freetype_sys::{
    FT_Activate_Size, FT_Bool, FT_Byte, FT_CharMap, FT_Done_Face, FT_Done_FreeType, FT_Done_Size,
    FT_Error, FT_Face, FT_Fixed, FT_Get_CMap_Format, FT_Get_CMap_Language_ID, FT_Get_PS_Font_Info,
    FT_Get_Sfnt_Name, FT_Get_Sfnt_Name_Count, FT_Init_FreeType, FT_Int, FT_Library,
    FT_Library_Version, FT_Long, FT_New_Face, FT_New_Memory_Face, FT_New_Size, FT_Pos,
    FT_Set_Var_Design_Coordinates, FT_SfntName, FT_Short, FT_Size, FT_String, FT_UInt, FT_ULong,
    FT_UShort, FT_Vector, PS_FontInfoRec,
};

use crate::engine::raw::Color as FT_Color;

pub const BDF_PROPERTY_TYPE_ATOM: c_int = 1;
pub const BDF_PROPERTY_TYPE_INTEGER: c_int = 2;
pub const BDF_PROPERTY_TYPE_CARDINAL: c_int = 3;

#[repr(C)]
#[derive(Copy, Clone)]
pub union BDF_PropertyValue {
    pub atom: *const c_char,
    pub integer: i32,
    pub cardinal: u32,
}

#[repr(C)]
#[derive(Copy, Clone)]
pub struct BDF_PropertyRec {
    pub type_: c_int,
    pub u: BDF_PropertyValue,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FT_Palette_Data {
    pub num_palettes: FT_UShort,
    pub palette_name_ids: *const FT_UShort,
    pub palette_flags: *const FT_UShort,
    pub num_palette_entries: FT_UShort,
    pub palette_entry_name_ids: *const FT_UShort,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FT_LayerIterator {
    pub num_layers: FT_UInt,
    pub layer: FT_UInt,
    pub p: *mut FT_Byte,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FT_MM_Axis {
    pub name: *mut FT_String,
    pub minimum: FT_Long,
    pub maximum: FT_Long,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FT_Multi_Master {
    pub num_axis: FT_UInt,
    pub num_designs: FT_UInt,
    pub axis: [FT_MM_Axis; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FT_Var_Axis {
    pub name: *mut FT_String,
    pub minimum: FT_Fixed,
    pub def: FT_Fixed,
    pub maximum: FT_Fixed,
    pub tag: FT_ULong,
    pub strid: FT_UInt,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FT_Var_Named_Style {
    pub coords: *mut FT_Fixed,
    pub strid: FT_UInt,
    pub psid: FT_UInt,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FT_MM_Var {
    pub num_axis: FT_UInt,
    pub num_designs: FT_UInt,
    pub num_namedstyles: FT_UInt,
    pub axis: *mut FT_Var_Axis,
    pub namedstyle: *mut FT_Var_Named_Style,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FT_SfntLangTag {
    pub string: *mut FT_Byte,
    pub string_len: FT_UInt,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PS_PrivateRec {
    pub unique_id: FT_Int,
    pub lenIV: FT_Int,
    pub num_blue_values: FT_Byte,
    pub num_other_blues: FT_Byte,
    pub num_family_blues: FT_Byte,
    pub num_family_other_blues: FT_Byte,
    pub blue_values: [FT_Short; 14],
    pub other_blues: [FT_Short; 10],
    pub family_blues: [FT_Short; 14],
    pub family_other_blues: [FT_Short; 10],
    pub blue_scale: FT_Fixed,
    pub blue_shift: FT_Int,
    pub blue_fuzz: FT_Int,
    pub standard_width: [FT_UShort; 1],
    pub standard_height: [FT_UShort; 1],
    pub num_snap_widths: FT_Byte,
    pub num_snap_heights: FT_Byte,
    pub force_bold: FT_Bool,
    pub round_stem_up: FT_Bool,
    pub snap_widths: [FT_Short; 13],
    pub snap_heights: [FT_Short; 13],
    pub expansion_factor: FT_Fixed,
    pub language_group: FT_Long,
    pub password: FT_Long,
    pub min_feature: [FT_Short; 2],
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct FT_WinFNT_HeaderRec {
    pub version: FT_UShort,
    pub file_size: FT_ULong,
    pub copyright: [FT_Byte; 60],
    pub file_type: FT_UShort,
    pub nominal_point_size: FT_UShort,
    pub vertical_resolution: FT_UShort,
    pub horizontal_resolution: FT_UShort,
    pub ascent: FT_UShort,
    pub internal_leading: FT_UShort,
    pub external_leading: FT_UShort,
    pub italic: FT_Byte,
    pub underline: FT_Byte,
    pub strike_out: FT_Byte,
    pub weight: FT_UShort,
    pub charset: FT_Byte,
    pub pixel_width: FT_UShort,
    pub pixel_height: FT_UShort,
    pub pitch_and_family: FT_Byte,
    pub avg_width: FT_UShort,
    pub max_width: FT_UShort,
    pub first_char: FT_Byte,
    pub last_char: FT_Byte,
    pub default_char: FT_Byte,
    pub break_char: FT_Byte,
    pub bytes_per_row: FT_UShort,
    pub device_offset: FT_ULong,
    pub face_name_offset: FT_ULong,
    pub bits_pointer: FT_ULong,
    pub bits_offset: FT_ULong,
    pub reserved: FT_Byte,
    pub flags: FT_ULong,
    pub A_space: FT_UShort,
    pub B_space: FT_UShort,
    pub C_space: FT_UShort,
    pub color_table_offset: FT_UShort,
    pub reserved1: [FT_ULong; 4],
}

extern "C" {
    pub fn FT_Error_String(error_code: FT_Error) -> *const c_char;

    pub fn FT_Get_BDF_Charset_ID(
        face: FT_Face,
        acharset_encoding: *mut *const c_char,
        acharset_registry: *mut *const c_char,
    ) -> FT_Error;
    pub fn FT_Get_BDF_Property(
        face: FT_Face,
        prop_name: *const c_char,
        aproperty: *mut BDF_PropertyRec,
    ) -> FT_Error;

    pub fn FT_Get_CID_Registry_Ordering_Supplement(
        face: FT_Face,
        registry: *mut *const c_char,
        ordering: *mut *const c_char,
        supplement: *mut FT_Int,
    ) -> FT_Error;
    pub fn FT_Get_CID_Is_Internally_CID_Keyed(face: FT_Face, is_cid: *mut FT_Bool) -> FT_Error;
    pub fn FT_Get_CID_From_Glyph_Index(
        face: FT_Face,
        glyph_index: FT_UInt,
        cid: *mut FT_UInt,
    ) -> FT_Error;

    pub fn FT_Palette_Data_Get(face: FT_Face, apalette: *mut FT_Palette_Data) -> FT_Error;
    pub fn FT_Palette_Select(
        face: FT_Face,
        palette_index: FT_UShort,
        apalette: *mut *mut FT_Color,
    ) -> FT_Error;
    pub fn FT_Palette_Set_Foreground_Color(face: FT_Face, foreground_color: FT_Color)
        -> FT_Error;

    pub fn FT_Get_Color_Glyph_Layer(
        face: FT_Face,
        base_glyph: FT_UInt,
        aglyph_index: *mut FT_UInt,
        acolor_index: *mut FT_UInt,
        iterator: *mut FT_LayerIterator,
    ) -> FT_Bool;

    pub fn FT_Get_Gasp(face: FT_Face, ppem: FT_UInt) -> FT_Int;

    pub fn FT_Get_Multi_Master(face: FT_Face, amaster: *mut FT_Multi_Master) -> FT_Error;
    pub fn FT_Get_MM_Var(face: FT_Face, amaster: *mut *mut FT_MM_Var) -> FT_Error;
    pub fn FT_Done_MM_Var(library: FT_Library, amaster: *mut FT_MM_Var) -> FT_Error;
    pub fn FT_Get_Var_Axis_Flags(
        master: *mut FT_MM_Var,
        axis_index: FT_UInt,
        flags: *mut FT_UInt,
    ) -> FT_Error;
    pub fn FT_Set_MM_Design_Coordinates(
        face: FT_Face,
        num_coords: FT_UInt,
        coords: *const FT_Long,
    ) -> FT_Error;
    pub fn FT_Get_Var_Design_Coordinates(
        face: FT_Face,
        num_coords: FT_UInt,
        coords: *mut FT_Fixed,
    ) -> FT_Error;
    pub fn FT_Set_MM_Blend_Coordinates(
        face: FT_Face,
        num_coords: FT_UInt,
        coords: *const FT_Fixed,
    ) -> FT_Error;
    pub fn FT_Get_MM_Blend_Coordinates(
        face: FT_Face,
        num_coords: FT_UInt,
        coords: *mut FT_Fixed,
    ) -> FT_Error;
    pub fn FT_Set_MM_WeightVector(face: FT_Face, len: FT_UInt, weightvector: *const FT_Fixed)
        -> FT_Error;
    pub fn FT_Get_MM_WeightVector(
        face: FT_Face,
        len: *mut FT_UInt,
        weightvector: *mut FT_Fixed,
    ) -> FT_Error;
    pub fn FT_Set_Named_Instance(face: FT_Face, instance_index: FT_UInt) -> FT_Error;
    pub fn FT_Get_Default_Named_Instance(face: FT_Face, instance_index: *mut FT_UInt)
        -> FT_Error;

    pub fn FT_Get_PFR_Metrics(
        face: FT_Face,
        aoutline_resolution: *mut FT_UInt,
        ametrics_resolution: *mut FT_UInt,
        ametrics_x_scale: *mut FT_Fixed,
        ametrics_y_scale: *mut FT_Fixed,
    ) -> FT_Error;
    pub fn FT_Get_PFR_Kerning(
        face: FT_Face,
        left: FT_UInt,
        right: FT_UInt,
        avector: *mut FT_Vector,
    ) -> FT_Error;
    pub fn FT_Get_PFR_Advance(face: FT_Face, gindex: FT_UInt, aadvance: *mut FT_Pos) -> FT_Error;

    pub fn FT_Get_Sfnt_LangTag(
        face: FT_Face,
        langID: FT_UInt,
        alangTag: *mut FT_SfntLangTag,
    ) -> FT_Error;

    pub fn FT_Has_PS_Glyph_Names(face: FT_Face) -> FT_Int;
    pub fn FT_Get_PS_Font_Private(face: FT_Face, afont_private: *mut PS_PrivateRec)
        -> FT_Error;
    pub fn FT_Get_PS_Font_Value(
        face: FT_Face,
        key: c_int,
        idx: FT_UInt,
        value: *mut c_void,
        value_len: FT_Long,
    ) -> FT_Long;

    pub fn FT_Get_WinFNT_Header(face: FT_Face, aheader: *mut FT_WinFNT_HeaderRec) -> FT_Error;
}
