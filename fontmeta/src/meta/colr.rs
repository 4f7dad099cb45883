//! Color glyph layers from the `COLR` table.

use crate::{
    engine::{raw, Engine, LayerIterator},
    Face,
};

/// One layer of a color glyph.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct ColorLayer {
    pub glyph_index: u32,
    /// Index into the active palette, or [`ColorLayer::FOREGROUND`].
    pub color_index: u32,
}

impl ColorLayer {
    /// Color index of a layer painted with the foreground color.
    pub const FOREGROUND: u32 = raw::FOREGROUND_COLOR_INDEX;

    pub const fn new(glyph_index: u32, color_index: u32) -> Self {
        Self {
            glyph_index,
            color_index,
        }
    }

    /// Returns true if the layer is painted with the foreground color.
    pub const fn uses_foreground(&self) -> bool {
        self.color_index == Self::FOREGROUND
    }
}

impl<E: Engine> Face<E> {
    /// Calls `f` for each layer of `base_glyph`, bottom to top, until it
    /// returns `true`.
    ///
    /// Returns the total number of layers of the glyph as reported by the
    /// engine, however many layers were visited. `f` is never called for a
    /// glyph without layers.
    pub fn for_each_color_glyph_layer(
        &self,
        base_glyph: u32,
        mut f: impl FnMut(ColorLayer) -> bool,
    ) -> u32 {
        let Ok(face) = self.handle() else {
            return 0;
        };
        let mut iter = E::LayerIterator::default();
        while let Some((glyph_index, color_index)) =
            self.engine().color_glyph_layer(face, base_glyph, &mut iter)
        {
            if f(ColorLayer::new(glyph_index, color_index)) {
                break;
            }
        }
        iter.num_layers()
    }

    /// Returns the number of layers of `base_glyph` without visiting them.
    pub fn color_glyph_layer_count(&self, base_glyph: u32) -> u32 {
        let Ok(face) = self.handle() else {
            return 0;
        };
        let mut iter = E::LayerIterator::default();
        self.engine().color_glyph_layer(face, base_glyph, &mut iter);
        iter.num_layers()
    }

    /// Returns every layer of `base_glyph`, bottom to top.
    pub fn color_glyph_layers(&self, base_glyph: u32) -> Vec<ColorLayer> {
        let Ok(face) = self.handle() else {
            return Vec::new();
        };
        let mut iter = E::LayerIterator::default();
        let mut layers = Vec::new();
        while let Some((glyph_index, color_index)) =
            self.engine().color_glyph_layer(face, base_glyph, &mut iter)
        {
            if layers.is_empty() {
                layers.reserve_exact(iter.num_layers() as usize);
            }
            layers.push(ColorLayer::new(glyph_index, color_index));
        }
        layers
    }
}
