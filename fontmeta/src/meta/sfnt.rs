//! SFNT `name` table entries and character maps.

use crate::{
    engine::Engine,
    error::{Error, Result},
    ids::{EncodingId, LanguageId, NameId, PlatformId},
    text, Face,
};

/// An entry of the `name` table.
///
/// The text is decoded to UTF-8 for Unicode platform and encoding pairs and
/// left as stored otherwise.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct SfntName {
    pub platform_id: PlatformId,
    pub encoding_id: EncodingId,
    pub language_id: LanguageId,
    pub name_id: NameId,
    pub text: Vec<u8>,
}

impl SfntName {
    /// Returns true if the text was stored as UTF-16BE.
    pub fn is_unicode(&self) -> bool {
        text::is_unicode(self.platform_id, self.encoding_id)
    }
}

/// Description of a character map.
///
/// `format` is -1 and `language_id` is zero for charmaps that are not backed
/// by an SFNT `cmap` subtable.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
pub struct CharMapInfo {
    pub platform_id: PlatformId,
    pub encoding_id: EncodingId,
    pub format: i64,
    pub language_id: i64,
}

impl<E: Engine> Face<E> {
    /// Returns the number of `name` table entries, zero for faces without
    /// one and for a freed face.
    pub fn sfnt_name_count(&self) -> u32 {
        self.handle()
            .map(|face| self.engine().sfnt_name_count(face))
            .unwrap_or_default()
    }

    /// Returns the `name` table entry at `index`.
    ///
    /// Unicode text that fails to decode is returned as stored.
    pub fn sfnt_name(&self, index: i64) -> Result<SfntName> {
        let face = self.handle()?;
        let index = u32::try_from(index).map_err(|_| Error::InvalidArgument)?;
        let rec = self.engine().sfnt_name(face, index)?;
        let platform_id = PlatformId::new(rec.platform_id);
        let encoding_id = EncodingId::new(rec.encoding_id);
        let text = match text::decode_name(platform_id, encoding_id, &rec.string) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("keeping raw bytes of name record {index}: {e}");
                rec.string
            }
        };
        Ok(SfntName {
            platform_id,
            encoding_id,
            language_id: LanguageId::new(rec.language_id),
            name_id: NameId::new(rec.name_id),
            text,
        })
    }

    /// Returns every `name` table entry.
    pub fn sfnt_names(&self) -> Result<Vec<SfntName>> {
        (0..self.sfnt_name_count())
            .map(|i| self.sfnt_name(i as i64))
            .collect()
    }

    /// Returns the language tag for a `language_id` of `0x8000` or above.
    ///
    /// Fails with [`Error::InvalidTable`] for a version 0 `name` table, with
    /// [`Error::InvalidArgument`] for an unknown identifier and with
    /// [`Error::UnableToDecode`] if the tag is not valid UTF-16BE.
    pub fn sfnt_lang_tag(&self, language_id: u32) -> Result<String> {
        let face = self.handle()?;
        let bytes = self.engine().sfnt_lang_tag(face, language_id)?;
        text::decode_utf16be(&bytes)
    }

    /// Describes every character map of the face.
    pub fn charmaps(&self) -> Vec<CharMapInfo> {
        let Ok(face) = self.handle() else {
            return Vec::new();
        };
        let engine = self.engine();
        (0..engine.num_charmaps(face))
            .filter_map(|i| {
                let rec = engine.charmap_info(face, i)?;
                Some(CharMapInfo {
                    platform_id: PlatformId::new(rec.platform_id),
                    encoding_id: EncodingId::new(rec.encoding_id),
                    format: engine.charmap_format(face, i),
                    language_id: engine.charmap_language(face, i) as i64,
                })
            })
            .collect()
    }

    fn charmap_index(&self, index: i64) -> Option<(E::Face, u32)> {
        let face = self.handle().ok()?;
        let index = u32::try_from(index).ok()?;
        (index < self.engine().num_charmaps(face)).then_some((face, index))
    }

    /// Returns the language of the charmap at `index`.
    ///
    /// Zero for charmaps without an SFNT `cmap` subtable, -1 for a freed face
    /// or an invalid index.
    pub fn charmap_language(&self, index: i64) -> i64 {
        match self.charmap_index(index) {
            Some((face, index)) => self.engine().charmap_language(face, index) as i64,
            None => -1,
        }
    }

    /// Returns the `cmap` subtable format of the charmap at `index`.
    ///
    /// -1 for charmaps without an SFNT `cmap` subtable, for a freed face and
    /// for an invalid index.
    pub fn charmap_format(&self, index: i64) -> i64 {
        match self.charmap_index(index) {
            Some((face, index)) => self.engine().charmap_format(face, index),
            None => -1,
        }
    }
}
