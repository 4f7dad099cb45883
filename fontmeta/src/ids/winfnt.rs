use core::fmt;

/// Character set identifier of a Windows FNT font.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WinFntId(pub(crate) u8);

registry!(WinFntId, lookup, {
    /// ANSI encoding, a superset of ISO 8859-1.
    CP1252 = 0,
    /// The system default character set.
    DEFAULT = 1,
    /// Symbol fonts, mapped to the Unicode private use area.
    SYMBOL = 2,
    /// Apple Roman.
    MAC = 77,
    /// Shift JIS.
    CP932 = 128,
    /// Korean (Wansung).
    CP949 = 129,
    /// Korean (Johab).
    CP1361 = 130,
    /// Simplified Chinese (GBK).
    CP936 = 134,
    /// Traditional Chinese (Big 5).
    CP950 = 136,
    /// Greek.
    CP1253 = 161,
    /// Turkish.
    CP1254 = 162,
    /// Vietnamese.
    CP1258 = 163,
    /// Hebrew.
    CP1255 = 177,
    /// Arabic.
    CP1256 = 178,
    /// Baltic.
    CP1257 = 186,
    /// Cyrillic.
    CP1251 = 204,
    /// Thai.
    CP874 = 222,
    /// Central European.
    CP1250 = 238,
    /// An OEM code page, often CP437 or CP850.
    OEM = 255,
});

scalar_id!(WinFntId, u8);

impl WinFntId {
    /// Returns the name of the character set, if known.
    pub fn name(self) -> Option<&'static str> {
        self.lookup()
    }
}

impl fmt::Debug for WinFntId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "WinFntId({})", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(WinFntId::new(0).name(), Some("CP1252"));
        assert_eq!(WinFntId::new(255), WinFntId::OEM);
        assert_eq!(WinFntId::new(3).name(), None);
        assert_eq!(format!("{:?}", WinFntId::CP874), "CP874");
    }
}
