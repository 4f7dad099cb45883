//! Windows FNT headers.

use crate::{engine::Engine, error::Result, ids::WinFntId, Face};

/// The header of a Windows FNT font, field for field as stored in the file.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WinFntHeader {
    pub version: u16,
    pub file_size: u32,
    pub copyright: [u8; 60],
    pub file_type: u16,
    pub nominal_point_size: u16,
    pub vertical_resolution: u16,
    pub horizontal_resolution: u16,
    pub ascent: u16,
    pub internal_leading: u16,
    pub external_leading: u16,
    pub italic: u8,
    pub underline: u8,
    pub strike_out: u8,
    pub weight: u16,
    pub charset: WinFntId,
    pub pixel_width: u16,
    pub pixel_height: u16,
    pub pitch_and_family: u8,
    pub avg_width: u16,
    pub max_width: u16,
    pub first_char: u8,
    pub last_char: u8,
    pub default_char: u8,
    pub break_char: u8,
    pub bytes_per_row: u16,
    pub device_offset: u32,
    pub face_name_offset: u32,
    pub bits_pointer: u32,
    pub bits_offset: u32,
    pub reserved: u8,
    pub flags: u32,
    pub a_space: u16,
    pub b_space: u16,
    pub c_space: u16,
    pub color_table_offset: u16,
    pub reserved1: [u64; 4],
}

impl Default for WinFntHeader {
    fn default() -> Self {
        Self {
            version: 0,
            file_size: 0,
            copyright: [0; 60],
            file_type: 0,
            nominal_point_size: 0,
            vertical_resolution: 0,
            horizontal_resolution: 0,
            ascent: 0,
            internal_leading: 0,
            external_leading: 0,
            italic: 0,
            underline: 0,
            strike_out: 0,
            weight: 0,
            charset: WinFntId::default(),
            pixel_width: 0,
            pixel_height: 0,
            pitch_and_family: 0,
            avg_width: 0,
            max_width: 0,
            first_char: 0,
            last_char: 0,
            default_char: 0,
            break_char: 0,
            bytes_per_row: 0,
            device_offset: 0,
            face_name_offset: 0,
            bits_pointer: 0,
            bits_offset: 0,
            reserved: 0,
            flags: 0,
            a_space: 0,
            b_space: 0,
            c_space: 0,
            color_table_offset: 0,
            reserved1: [0; 4],
        }
    }
}

impl<E: Engine> Face<E> {
    /// Returns the header of a Windows FNT font.
    pub fn winfnt_header(&self) -> Result<WinFntHeader> {
        let face = self.handle()?;
        self.engine().winfnt_header(face)
    }
}
