use core::fmt;

/// Platform identifier of a `name` record or character map.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlatformId(pub(crate) u16);

registry!(PlatformId, lookup, {
    /// Unicode, as defined by Apple.
    APPLE_UNICODE = 0,
    /// Macintosh script manager codes.
    MACINTOSH = 1,
    /// Deprecated ISO 10646 platform.
    ISO = 2,
    /// Microsoft Windows.
    MICROSOFT = 3,
    /// Custom encodings.
    CUSTOM = 4,
    /// Adobe encodings, used by FreeType for Type 1 charmaps.
    ADOBE = 7,
});

scalar_id!(PlatformId, u16);

impl PlatformId {
    /// Returns the name of the platform, if known.
    pub fn name(self) -> Option<&'static str> {
        self.lookup()
    }
}

impl fmt::Debug for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl fmt::Display for PlatformId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
