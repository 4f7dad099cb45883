//! Size objects.

use std::{cell::Cell, fmt, rc::Rc, rc::Weak};

use crate::{
    engine::Engine,
    error::{Error, Result},
    face::{Face, FaceInner, SizeSlot},
};

/// A size context bound to one face.
///
/// A size becomes invalid when its face is freed. Dropping a valid size
/// releases it in the engine.
pub struct Size<E: Engine> {
    face: Weak<FaceInner<E>>,
    handle: SizeSlot<E>,
}

impl<E: Engine> Size<E> {
    /// Returns true while both the size and its face are alive.
    pub fn is_valid(&self) -> bool {
        self.handle.get().is_some()
    }
}

impl<E: Engine> Face<E> {
    /// Creates a new size for this face.
    pub fn new_size(&self) -> Result<Size<E>> {
        let face = self.handle()?;
        let size = self.engine().new_size(face)?;
        log::trace!("created size {size:?} for face {face:?}");
        let handle = Rc::new(Cell::new(Some(size)));
        self.inner().track_size(&handle);
        Ok(Size {
            face: self.downgrade(),
            handle,
        })
    }

    /// Makes `size` the active size of this face.
    ///
    /// Fails with [`Error::InvalidSizeHandle`] if the size is no longer valid
    /// or was created for another face.
    pub fn activate_size(&self, size: &Size<E>) -> Result<()> {
        self.handle()?;
        if !self.is_same(&size.face) {
            return Err(Error::InvalidSizeHandle);
        }
        let size = size.handle.get().ok_or(Error::InvalidSizeHandle)?;
        self.engine().activate_size(size)
    }
}

impl<E: Engine> Drop for Size<E> {
    fn drop(&mut self) {
        let Some(size) = self.handle.take() else {
            return;
        };
        let Some(face) = self.face.upgrade() else {
            return;
        };
        face.untrack_size(&self.handle);
        if face.is_valid() {
            if let Err(e) = face.engine().done_size(size) {
                log::warn!("failed to release size {size:?}: {e}");
            }
        }
    }
}

impl<E: Engine> fmt::Debug for Size<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Size").field(&self.handle.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        testing::{Fixture, MockEngine},
        Error, FaceIndex, Library,
    };

    #[test]
    fn create_and_activate() {
        let library = Library::new(MockEngine::default()).unwrap();
        let face = library
            .new_memory_face(Fixture::GoRegular.data(), FaceIndex::default())
            .unwrap();
        let size = face.new_size().unwrap();
        assert!(size.is_valid());
        face.activate_size(&size).unwrap();
        assert_eq!(library.engine().calls("activate_size"), 1);
    }

    #[test]
    fn freeing_face_invalidates_sizes() {
        let library = Library::new(MockEngine::default()).unwrap();
        let face = library
            .new_memory_face(Fixture::GoRegular.data(), FaceIndex::default())
            .unwrap();
        let a = face.new_size().unwrap();
        let b = face.new_size().unwrap();
        face.free().unwrap();
        assert!(!a.is_valid());
        assert!(!b.is_valid());
        assert_eq!(face.activate_size(&a), Err(Error::InvalidFaceHandle));
        drop(a);
        drop(b);
        // The engine released them with the face.
        assert_eq!(library.engine().calls("done_size"), 0);
    }

    #[test]
    fn foreign_size_is_rejected() {
        let library = Library::new(MockEngine::default()).unwrap();
        let go = library
            .new_memory_face(Fixture::GoRegular.data(), FaceIndex::default())
            .unwrap();
        let emoji = library
            .new_memory_face(Fixture::Twemoji.data(), FaceIndex::default())
            .unwrap();
        let size = emoji.new_size().unwrap();
        assert_eq!(go.activate_size(&size), Err(Error::InvalidSizeHandle));
        assert_eq!(library.engine().calls("activate_size"), 0);
    }

    #[test]
    fn dropping_size_releases_it() {
        let library = Library::new(MockEngine::default()).unwrap();
        let face = library
            .new_memory_face(Fixture::GoRegular.data(), FaceIndex::default())
            .unwrap();
        let size = face.new_size().unwrap();
        drop(size);
        assert_eq!(library.engine().calls("done_size"), 1);
        assert!(face.is_valid());
    }

    #[test]
    fn dropped_sizes_are_forgotten() {
        let library = Library::new(MockEngine::default()).unwrap();
        let face = library
            .new_memory_face(Fixture::GoRegular.data(), FaceIndex::default())
            .unwrap();
        let kept = face.new_size().unwrap();
        for _ in 0..100 {
            drop(face.new_size().unwrap());
        }
        assert_eq!(face.inner().tracked_sizes(), 1);
        assert_eq!(library.engine().calls("done_size"), 100);
        face.free().unwrap();
        assert!(!kept.is_valid());
        assert_eq!(face.inner().tracked_sizes(), 0);
    }
}
