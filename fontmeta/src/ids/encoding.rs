use core::fmt;

use super::PlatformId;

/// Encoding identifier of a `name` record or character map.
///
/// The meaning of an encoding depends on the platform, so the constants are
/// grouped by a platform prefix.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodingId(pub(crate) u16);

registry!(EncodingId, apple_name, {
    APPLE_DEFAULT = 0,
    APPLE_UNICODE_1_1 = 1,
    /// Deprecated.
    APPLE_ISO_10646 = 2,
    APPLE_UNICODE_2_0 = 3,
    APPLE_UNICODE_32 = 4,
    APPLE_VARIANT_SELECTOR = 5,
    APPLE_FULL_UNICODE = 6,
});

registry!(EncodingId, mac_name, {
    MAC_ROMAN = 0,
    MAC_JAPANESE = 1,
    MAC_TRADITIONAL_CHINESE = 2,
    MAC_KOREAN = 3,
    MAC_ARABIC = 4,
    MAC_HEBREW = 5,
    MAC_GREEK = 6,
    MAC_RUSSIAN = 7,
    MAC_RSYMBOL = 8,
    MAC_DEVANAGARI = 9,
    MAC_GURMUKHI = 10,
    MAC_GUJARATI = 11,
    MAC_ORIYA = 12,
    MAC_BENGALI = 13,
    MAC_TAMIL = 14,
    MAC_TELUGU = 15,
    MAC_KANNADA = 16,
    MAC_MALAYALAM = 17,
    MAC_SINHALESE = 18,
    MAC_BURMESE = 19,
    MAC_KHMER = 20,
    MAC_THAI = 21,
    MAC_LAOTIAN = 22,
    MAC_GEORGIAN = 23,
    MAC_ARMENIAN = 24,
    MAC_SIMPLIFIED_CHINESE = 25,
    MAC_TIBETAN = 26,
    MAC_MONGOLIAN = 27,
    MAC_GEEZ = 28,
    MAC_SLAVIC = 29,
    MAC_VIETNAMESE = 30,
    MAC_SINDHI = 31,
    MAC_UNINTERP = 32,
});

registry!(EncodingId, iso_name, {
    ISO_7BIT_ASCII = 0,
    ISO_10646 = 1,
    ISO_8859_1 = 2,
});

registry!(EncodingId, ms_name, {
    MS_SYMBOL_CS = 0,
    MS_UNICODE_CS = 1,
    MS_SJIS = 2,
    MS_PRC = 3,
    MS_BIG_5 = 4,
    MS_WANSUNG = 5,
    MS_JOHAB = 6,
    MS_UCS_4 = 10,
});

registry!(EncodingId, adobe_name, {
    ADOBE_STANDARD = 0,
    ADOBE_EXPERT = 1,
    ADOBE_CUSTOM = 2,
    ADOBE_LATIN_1 = 3,
});

scalar_id!(EncodingId, u16);

impl EncodingId {
    /// Shares a value with [`Self::MAC_SIMPLIFIED_CHINESE`].
    pub const MAC_MALDIVIAN: Self = Self(25);

    /// Returns the name of the encoding on the given platform, if known.
    pub fn name_for(self, platform: PlatformId) -> Option<&'static str> {
        match platform {
            PlatformId::APPLE_UNICODE => self.apple_name(),
            PlatformId::MACINTOSH => self.mac_name(),
            PlatformId::ISO => self.iso_name(),
            PlatformId::MICROSOFT => self.ms_name(),
            PlatformId::ADOBE => self.adobe_name(),
            _ => None,
        }
    }
}

impl fmt::Debug for EncodingId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "EncodingId({})", self.0)
    }
}

impl fmt::Display for EncodingId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
