use core::fmt;

/// Index of a blendable value in the blend tables of a multiple master
/// Type 1 font.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct T1BlendFlag(pub(crate) u32);

registry!(T1BlendFlag, lookup, {
    UNDERLINE_POSITION = 0,
    UNDERLINE_THICKNESS = 1,
    ITALIC_ANGLE = 2,
    BLUE_VALUES = 3,
    OTHER_BLUES = 4,
    STANDARD_WIDTH = 5,
    STANDARD_HEIGHT = 6,
    STEM_SNAP_WIDTHS = 7,
    STEM_SNAP_HEIGHTS = 8,
    BLUE_SCALE = 9,
    BLUE_SHIFT = 10,
    FAMILY_BLUES = 11,
    FAMILY_OTHER_BLUES = 12,
    FORCE_BOLD = 13,
});

scalar_id!(T1BlendFlag, u32);

/// Kind of encoding of a Type 1 font.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct T1EncodingType(pub(crate) u32);

registry!(T1EncodingType, lookup, {
    NONE = 0,
    ARRAY = 1,
    STANDARD = 2,
    ISOLATIN1 = 3,
    EXPERT = 4,
});

scalar_id!(T1EncodingType, u32);

/// Key into a PostScript font dictionary.
///
/// Keys prefixed with `NUM_` return the element count of the array keyed by
/// the following constant.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PsDictKey(pub(crate) u32);

registry!(PsDictKey, lookup, {
    // conventionally in the font dictionary
    FONT_TYPE = 0,
    FONT_MATRIX = 1,
    FONT_BBOX = 2,
    PAINT_TYPE = 3,
    FONT_NAME = 4,
    UNIQUE_ID = 5,
    NUM_CHAR_STRINGS = 6,
    CHAR_STRING_KEY = 7,
    CHAR_STRING = 8,
    ENCODING_TYPE = 9,
    ENCODING_ENTRY = 10,
    // conventionally in the font Private dictionary
    NUM_SUBRS = 11,
    SUBR = 12,
    STD_HW = 13,
    STD_VW = 14,
    NUM_BLUE_VALUES = 15,
    BLUE_VALUE = 16,
    BLUE_FUZZ = 17,
    NUM_OTHER_BLUES = 18,
    OTHER_BLUE = 19,
    NUM_FAMILY_BLUES = 20,
    FAMILY_BLUE = 21,
    NUM_FAMILY_OTHER_BLUES = 22,
    FAMILY_OTHER_BLUE = 23,
    BLUE_SCALE = 24,
    BLUE_SHIFT = 25,
    NUM_STEM_SNAP_H = 26,
    STEM_SNAP_H = 27,
    NUM_STEM_SNAP_V = 28,
    STEM_SNAP_V = 29,
    FORCE_BOLD = 30,
    RND_STEM_UP = 31,
    MIN_FEATURE = 32,
    LEN_IV = 33,
    PASSWORD = 34,
    LANGUAGE_GROUP = 35,
    // conventionally in the font FontInfo dictionary
    VERSION = 36,
    NOTICE = 37,
    FULL_NAME = 38,
    FAMILY_NAME = 39,
    WEIGHT = 40,
    IS_FIXED_PITCH = 41,
    UNDERLINE_POSITION = 42,
    UNDERLINE_THICKNESS = 43,
    FS_TYPE = 44,
    ITALIC_ANGLE = 45,
});

scalar_id!(PsDictKey, u32);

macro_rules! named_debug {
    ($($ty:ident),*) => {
        $(
            impl $ty {
                /// Returns the name of the constant with this value, if any.
                pub fn name(self) -> Option<&'static str> {
                    self.lookup()
                }
            }

            impl fmt::Debug for $ty {
                fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                    match self.name() {
                        Some(name) => f.write_str(name),
                        None => write!(f, "{}({})", stringify!($ty), self.0),
                    }
                }
            }
        )*
    };
}

named_debug!(T1BlendFlag, T1EncodingType, PsDictKey);
