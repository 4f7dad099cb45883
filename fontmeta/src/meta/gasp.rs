//! Grid-fitting and scan conversion flags from the `gasp` table.

use crate::{
    engine::{raw, Engine},
    flags::GaspFlags,
    Face,
};

impl<E: Engine> Face<E> {
    /// Returns the `gasp` flags that apply at `ppem` and whether the face has
    /// a `gasp` table at all.
    ///
    /// For variable fonts the result depends on the active instance, so set
    /// the variation coordinates first.
    pub fn gasp_flags(&self, ppem: u32) -> (GaspFlags, bool) {
        let Ok(face) = self.handle() else {
            return (GaspFlags::empty(), false);
        };
        match self.engine().gasp(face, ppem) {
            raw::GASP_NO_TABLE => (GaspFlags::empty(), false),
            bits => (GaspFlags::from_bits_truncate(bits as u32), true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        testing::{Fixture, MockEngine},
        FaceIndex, Library,
    };

    fn gasp_at(fixture: Fixture, ppem: u32) -> (GaspFlags, bool) {
        let library = Library::new(MockEngine::default()).unwrap();
        let face = library
            .new_memory_face(fixture.data(), FaceIndex::default())
            .unwrap();
        face.gasp_flags(ppem)
    }

    #[test]
    fn go_regular() {
        assert_eq!(
            gasp_at(Fixture::GoRegular, 64),
            (
                GaspFlags::DO_GRIDFIT
                    | GaspFlags::DO_GRAY
                    | GaspFlags::SYMMETRIC_GRIDFIT
                    | GaspFlags::SYMMETRIC_SMOOTHING,
                true
            )
        );
        assert_eq!(
            gasp_at(Fixture::GoRegular, 8),
            (GaspFlags::SYMMETRIC_SMOOTHING | GaspFlags::DO_GRAY, true)
        );
    }

    #[test]
    fn twemoji() {
        assert_eq!(gasp_at(Fixture::Twemoji, 64), (GaspFlags::DO_GRAY, true));
    }

    #[test]
    fn no_table() {
        assert_eq!(
            gasp_at(Fixture::BungeeColorWin, 64),
            (GaspFlags::empty(), false)
        );
    }

    #[test]
    fn freed_face() {
        let library = Library::new(MockEngine::default()).unwrap();
        let face = library
            .new_memory_face(Fixture::GoRegular.data(), FaceIndex::default())
            .unwrap();
        face.free().unwrap();
        assert_eq!(face.gasp_flags(64), (GaspFlags::empty(), false));
        assert_eq!(library.engine().calls("gasp"), 0);
    }
}
