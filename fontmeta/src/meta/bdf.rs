//! BDF and PCF properties.

use crate::{
    engine::{raw, Engine},
    error::Result,
    meta::lossy_string,
    Face,
};

/// The value of a BDF or PCF property.
///
/// PCF stores every integer as signed, so [`BdfProperty::Cardinal`] only
/// occurs for BDF fonts.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub enum BdfProperty {
    #[default]
    None,
    Atom(String),
    Integer(i32),
    Cardinal(u32),
}

impl From<raw::BdfPropertyRec> for BdfProperty {
    fn from(rec: raw::BdfPropertyRec) -> Self {
        match rec.kind {
            raw::BDF_PROPERTY_TYPE_ATOM => Self::Atom(lossy_string(&rec.atom)),
            raw::BDF_PROPERTY_TYPE_INTEGER => Self::Integer(rec.integer),
            raw::BDF_PROPERTY_TYPE_CARDINAL => Self::Cardinal(rec.cardinal),
            _ => Self::None,
        }
    }
}

impl<E: Engine> Face<E> {
    /// Returns the `(encoding, registry)` pair of the character set of a
    /// BDF font.
    ///
    /// Fails with [`Error::InvalidArgument`](crate::Error::InvalidArgument)
    /// for other formats.
    pub fn bdf_charset_id(&self) -> Result<(String, String)> {
        let face = self.handle()?;
        let (encoding, registry) = self.engine().bdf_charset_id(face)?;
        Ok((lossy_string(&encoding), lossy_string(&registry)))
    }

    /// Looks up a property of a BDF or PCF font.
    ///
    /// A missing property fails with
    /// [`Error::InvalidArgument`](crate::Error::InvalidArgument). Callers
    /// that want the `None` variant on failure can use `unwrap_or_default`.
    pub fn bdf_property(&self, name: &str) -> Result<BdfProperty> {
        let face = self.handle()?;
        self.engine()
            .bdf_property(face, name)
            .map(BdfProperty::from)
    }
}
