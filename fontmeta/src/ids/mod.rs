//! Identifier registries.
//!
//! Platform, encoding and language identifiers used by the `name` and `cmap`
//! tables, PostScript dictionary keys and Windows FNT character sets. Each
//! registry is a scalar newtype with associated constants and supports
//! looking up the name of a constant from its value.

/// Defines a group of associated constants along with a private lookup
/// function mapping a raw value back to the constant's name.
macro_rules! registry {
    ($ty:ident, $lookup:ident, {
        $($(#[$meta:meta])* $name:ident = $value:literal,)*
    }) => {
        impl $ty {
            $(
                $(#[$meta])*
                pub const $name: Self = Self($value);
            )*

            #[allow(unreachable_patterns)]
            fn $lookup(self) -> Option<&'static str> {
                match self.0 {
                    $($value => Some(stringify!($name)),)*
                    _ => None,
                }
            }
        }
    };
}

/// Common methods of the scalar identifier types.
macro_rules! scalar_id {
    ($ty:ident, $inner:ty) => {
        impl $ty {
            /// Creates an identifier from a raw value.
            pub const fn new(raw: $inner) -> Self {
                Self(raw)
            }

            /// Returns the raw value.
            pub const fn to_raw(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $ty {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl From<$ty> for $inner {
            fn from(value: $ty) -> Self {
                value.0
            }
        }
    };
}

mod encoding;
mod language;
mod platform;
mod postscript;
mod winfnt;

pub use encoding::EncodingId;
pub use font_types::NameId;
pub use language::LanguageId;
pub use platform::PlatformId;
pub use postscript::{PsDictKey, T1BlendFlag, T1EncodingType};
pub use winfnt::WinFntId;
