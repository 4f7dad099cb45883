//! Bit sets reported by engines and accessors.

use core::fmt;

macro_rules! flags {
    (
        $(#[$outer:meta])*
        pub struct $name:ident($ty:ty) {
            $(
                $(#[$inner:meta])*
                const $flag:ident = $value:expr, $display:literal;
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
        pub struct $name($ty);

        impl $name {
            $(
                $(#[$inner])*
                pub const $flag: Self = Self($value);
            )*

            const MEMBERS: &'static [(Self, &'static str)] = &[$((Self::$flag, $display),)*];

            /// Returns an empty set.
            pub const fn empty() -> Self {
                Self(0)
            }

            /// Returns a set containing every known flag.
            pub const fn all() -> Self {
                Self(0 $(| $value)*)
            }

            /// Returns the raw bits of the set.
            pub const fn bits(self) -> $ty {
                self.0
            }

            /// Creates a set from raw bits, discarding unknown bits.
            pub const fn from_bits_truncate(bits: $ty) -> Self {
                Self(bits & Self::all().0)
            }

            /// Returns true if no flag is set.
            pub const fn is_empty(self) -> bool {
                self.0 == 0
            }

            /// Returns true if every flag in `other` is also set in `self`.
            pub const fn contains(self, other: Self) -> bool {
                self.0 & other.0 == other.0
            }

            /// Returns true if any flag in `other` is also set in `self`.
            pub const fn intersects(self, other: Self) -> bool {
                self.0 & other.0 != 0
            }

            /// Sets the flags in `other`.
            pub fn insert(&mut self, other: Self) {
                self.0 |= other.0;
            }

            /// Clears the flags in `other`.
            pub fn remove(&mut self, other: Self) {
                self.0 &= !other.0;
            }

            /// Sets or clears the flags in `other`.
            pub fn set(&mut self, other: Self, value: bool) {
                if value {
                    self.insert(other);
                } else {
                    self.remove(other);
                }
            }

            /// Returns an iterator over the names of the set flags, in bit order.
            pub fn names(self) -> impl Iterator<Item = &'static str> {
                Self::MEMBERS
                    .iter()
                    .filter(move |(flag, _)| self.contains(*flag))
                    .map(|(_, name)| *name)
            }
        }

        impl core::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl core::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl core::ops::BitAnd for $name {
            type Output = Self;

            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl core::ops::BitAndAssign for $name {
            fn bitand_assign(&mut self, rhs: Self) {
                self.0 &= rhs.0;
            }
        }

        impl core::ops::Not for $name {
            type Output = Self;

            fn not(self) -> Self {
                Self(!self.0 & Self::all().0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                for (i, name) in self.names().enumerate() {
                    if i != 0 {
                        f.write_str("|")?;
                    }
                    f.write_str(name)?;
                }
                Ok(())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}({self})", stringify!($name))
            }
        }
    };
}

flags! {
    /// Properties of a loaded face.
    ///
    /// Bit positions match the engine's face flags.
    pub struct FaceFlags(u32) {
        /// Glyphs have outlines.
        const SCALABLE = 1 << 0, "Scalable";
        /// The face contains bitmap strikes.
        const FIXED_SIZES = 1 << 1, "FixedSizes";
        /// Every glyph has the same advance.
        const FIXED_WIDTH = 1 << 2, "FixedWidth";
        /// The face is stored in an SFNT container.
        const SFNT = 1 << 3, "Sfnt";
        /// The face has horizontal metrics.
        const HORIZONTAL = 1 << 4, "Horizontal";
        /// The face has vertical metrics.
        const VERTICAL = 1 << 5, "Vertical";
        /// The face has kerning data reachable through the engine.
        const KERNING = 1 << 6, "Kerning";
        /// Deprecated, never set.
        const FAST_GLYPHS = 1 << 7, "FastGlyphs";
        /// The face has multiple master or variation data.
        const MULTIPLE_MASTERS = 1 << 8, "MultipleMasters";
        /// The face has glyph names.
        const GLYPH_NAMES = 1 << 9, "GlyphNames";
        /// The face was loaded from an external stream.
        const EXTERNAL_STREAM = 1 << 10, "ExternalStream";
        /// The face has a native hinter.
        const HINTER = 1 << 11, "Hinter";
        /// The face is CID-keyed.
        const CID_KEYED = 1 << 12, "CidKeyed";
        /// The face needs the native hinter to render correctly.
        const TRICKY = 1 << 13, "Tricky";
        /// The face has color glyph tables.
        const COLOR = 1 << 14, "Color";
        /// A non-default instance of a variable face is active.
        const VARIATION = 1 << 15, "Variation";
        /// The face has an `SVG ` table.
        const SVG = 1 << 16, "Svg";
        /// The face has an `sbix` table.
        const SBIX = 1 << 17, "Sbix";
        /// The `sbix` bitmaps are meant to be drawn over the outlines.
        const SBIX_OVERLAY = 1 << 18, "SbixOverlay";
    }
}

flags! {
    /// Style bits of a face.
    pub struct StyleFlags(u32) {
        /// The face is italic or oblique.
        const ITALIC = 1 << 0, "Italic";
        /// The face is bold.
        const BOLD = 1 << 1, "Bold";
    }
}

flags! {
    /// Rasterizer behavior flags from the `gasp` table.
    pub struct GaspFlags(u32) {
        const DO_GRIDFIT = 1 << 0, "DoGridfit";
        const DO_GRAY = 1 << 1, "DoGray";
        const SYMMETRIC_GRIDFIT = 1 << 2, "SymmetricGridfit";
        const SYMMETRIC_SMOOTHING = 1 << 3, "SymmetricSmoothing";
    }
}

flags! {
    /// Usability flags for a color palette.
    pub struct PaletteFlags(u16) {
        /// The palette is suitable for a light background.
        const FOR_LIGHT_BACKGROUND = 1 << 0, "ForLightBackground";
        /// The palette is suitable for a dark background.
        const FOR_DARK_BACKGROUND = 1 << 1, "ForDarkBackground";
    }
}

flags! {
    /// Flags of a variation axis.
    pub struct VarAxisFlags(u32) {
        /// The axis should not be exposed in user interfaces.
        const HIDDEN = 1 << 0, "Hidden";
    }
}
