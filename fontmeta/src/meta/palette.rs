//! Color palettes from the `CPAL` table.

use crate::{
    engine::{raw, Engine},
    error::Result,
    flags::PaletteFlags,
    ids::NameId,
    Face,
};

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0, 0xFF);
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF, 0xFF);

    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }
}

impl From<raw::Color> for Color {
    fn from(color: raw::Color) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl From<Color> for raw::Color {
    fn from(color: Color) -> Self {
        Self {
            blue: color.blue,
            green: color.green,
            red: color.red,
            alpha: color.alpha,
        }
    }
}

/// Palette slot index that refers to the foreground color.
pub const FOREGROUND_PALETTE_INDEX: u16 = 0xFFFF;

/// Description of the palettes in a font.
///
/// Absent name identifiers are `None`. The per palette arrays are empty when
/// there are no palettes and the entry name array is empty when there are no
/// entries or no entry names.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct PaletteData {
    pub num_palettes: u16,
    pub name_ids: Vec<Option<NameId>>,
    pub flags: Vec<PaletteFlags>,
    pub num_palette_entries: u16,
    pub entry_name_ids: Vec<Option<NameId>>,
}

fn name_id(id: u16) -> Option<NameId> {
    (id != raw::NO_NAME_ID).then(|| NameId::new(id))
}

impl From<raw::PaletteDataRec> for PaletteData {
    fn from(rec: raw::PaletteDataRec) -> Self {
        let num_palettes = rec.num_palettes as usize;
        let num_entries = rec.num_palette_entries as usize;
        Self {
            num_palettes: rec.num_palettes,
            name_ids: rec
                .palette_name_ids
                .iter()
                .take(num_palettes)
                .map(|id| name_id(*id))
                .collect(),
            flags: rec
                .palette_flags
                .iter()
                .take(num_palettes)
                .map(|bits| PaletteFlags::from_bits_truncate(*bits))
                .collect(),
            num_palette_entries: rec.num_palette_entries,
            entry_name_ids: rec
                .palette_entry_name_ids
                .iter()
                .take(num_entries)
                .map(|id| name_id(*id))
                .collect(),
        }
    }
}

impl<E: Engine> Face<E> {
    /// Returns the palette descriptor.
    pub fn palette_data(&self) -> Result<PaletteData> {
        let face = self.handle()?;
        self.engine().palette_data(face).map(PaletteData::from)
    }

    /// Selects the palette at `index` and returns its entries.
    ///
    /// Selecting a palette discards changes made by a previous
    /// [`select_palette_with`](Self::select_palette_with).
    pub fn select_palette(&self, index: u16) -> Result<Vec<Color>> {
        self.select_palette_with(index, |_| {})
    }

    /// Selects the palette at `index`, lets `mutate` change its entries and
    /// returns them.
    ///
    /// The changed entries are copied back to the engine and used for
    /// rendering until the next selection.
    pub fn select_palette_with(
        &self,
        index: u16,
        mutate: impl FnOnce(&mut [Color]),
    ) -> Result<Vec<Color>> {
        let face = self.handle()?;
        let mut mutate = Some(mutate);
        let mut colors = Vec::new();
        self.engine().palette_select(face, index, &mut |entries| {
            colors = entries.iter().copied().map(Color::from).collect();
            if let Some(mutate) = mutate.take() {
                mutate(&mut colors);
            }
            for (entry, color) in entries.iter_mut().zip(&colors) {
                *entry = (*color).into();
            }
        })?;
        Ok(colors)
    }

    /// Sets the color used for layers with the foreground color index.
    ///
    /// Before this is called, the engine uses white if the first palette is
    /// meant for dark backgrounds and black otherwise.
    pub fn set_palette_foreground(&self, color: Color) -> Result<()> {
        let face = self.handle()?;
        self.engine()
            .palette_set_foreground_color(face, color.into())
    }
}
