//! Loaded faces and their lifetime.

use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

use crate::{
    engine::{raw::FaceHeader, Engine},
    error::{Error, Result},
    flags::{FaceFlags, StyleFlags},
    library::LibraryInner,
};

/// Combined face and named instance index used when loading a face.
///
/// The face index within a collection lives in the low 16 bits and the
/// 1-based named instance in the next 15 bits. A named instance of zero
/// loads the default instance.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct FaceIndex(u32);

impl FaceIndex {
    /// Largest named instance index that fits in the combined index.
    pub const MAX_NAMED_INSTANCE: u32 = 0x7FFF;

    /// Creates a combined index.
    ///
    /// Fails with [`Error::InvalidArgument`] if either part is out of range.
    pub fn new(face_index: u32, named_instance: u32) -> Result<Self> {
        if face_index > 0xFFFF || named_instance > Self::MAX_NAMED_INSTANCE {
            return Err(Error::InvalidArgument);
        }
        Ok(Self(named_instance << 16 | face_index))
    }

    /// Returns the index of the face within its collection.
    pub const fn face_index(self) -> u32 {
        self.0 & 0xFFFF
    }

    /// Returns the 1-based named instance, zero for the default instance.
    pub const fn named_instance(self) -> u32 {
        self.0 >> 16
    }

    /// Returns the combined index passed to the engine.
    pub const fn to_bits(self) -> u32 {
        self.0
    }
}

impl From<u16> for FaceIndex {
    fn from(face_index: u16) -> Self {
        Self(face_index as u32)
    }
}

impl fmt::Debug for FaceIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.face_index(), self.named_instance())
    }
}

/// Shared slot of a [`Size`](crate::Size), emptied when the size is released.
pub(crate) type SizeSlot<E> = Rc<Cell<Option<<E as Engine>::Size>>>;

pub(crate) struct FaceInner<E: Engine> {
    library: Rc<LibraryInner<E>>,
    handle: Cell<Option<E::Face>>,
    cleanups: RefCell<Vec<Box<dyn FnOnce()>>>,
    sizes: RefCell<Vec<Weak<Cell<Option<E::Size>>>>>,
}

impl<E: Engine> FaceInner<E> {
    pub(crate) fn new(library: Rc<LibraryInner<E>>, handle: E::Face) -> Self {
        Self {
            library,
            handle: Cell::new(Some(handle)),
            cleanups: Default::default(),
            sizes: Default::default(),
        }
    }

    pub(crate) fn engine(&self) -> &E {
        &self.library.engine
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.handle.get().is_some()
    }

    pub(crate) fn track_size(&self, slot: &SizeSlot<E>) {
        self.sizes.borrow_mut().push(Rc::downgrade(slot));
    }

    pub(crate) fn untrack_size(&self, slot: &SizeSlot<E>) {
        self.sizes
            .borrow_mut()
            .retain(|tracked| !std::ptr::eq(tracked.as_ptr(), Rc::as_ptr(slot)));
    }

    #[cfg(test)]
    pub(crate) fn tracked_sizes(&self) -> usize {
        self.sizes.borrow().len()
    }

    /// Destroys the engine face, then runs the deferred cleanups in reverse
    /// registration order.
    ///
    /// The engine releases sizes along with their face, so live sizes are
    /// emptied rather than released one by one.
    pub(crate) fn free(&self) -> Result<()> {
        let Some(handle) = self.handle.take() else {
            return Ok(());
        };
        log::debug!("freeing face {handle:?}");
        let result = self.library.engine.done_face(handle);
        let sizes = std::mem::take(&mut *self.sizes.borrow_mut());
        for slot in sizes.iter().filter_map(Weak::upgrade) {
            slot.set(None);
        }
        let cleanups = std::mem::take(&mut *self.cleanups.borrow_mut());
        for cleanup in cleanups.into_iter().rev() {
            cleanup();
        }
        result
    }
}

/// A face loaded by a [`Library`](crate::Library).
///
/// Metadata accessors are methods on this type. Every accessor on a freed
/// face fails with [`Error::InvalidFaceHandle`] (or returns the documented
/// neutral value) without calling into the engine.
pub struct Face<E: Engine> {
    inner: Rc<FaceInner<E>>,
}

impl<E: Engine> Face<E> {
    pub(crate) fn from_inner(inner: Rc<FaceInner<E>>) -> Self {
        Self { inner }
    }

    pub(crate) fn downgrade(&self) -> Weak<FaceInner<E>> {
        Rc::downgrade(&self.inner)
    }

    pub(crate) fn is_same(&self, other: &Weak<FaceInner<E>>) -> bool {
        std::ptr::eq(Rc::as_ptr(&self.inner), other.as_ptr())
    }

    pub(crate) fn engine(&self) -> &E {
        self.inner.engine()
    }

    pub(crate) fn inner(&self) -> &FaceInner<E> {
        &self.inner
    }

    /// Returns the engine handle, or fails if the face was freed.
    pub(crate) fn handle(&self) -> Result<E::Face> {
        self.inner.handle.get().ok_or(Error::InvalidFaceHandle)
    }

    /// Registers a closure to run after the engine face is destroyed.
    ///
    /// Closures run in reverse registration order. If the face was already
    /// freed the closure runs immediately.
    pub fn defer(&self, cleanup: impl FnOnce() + 'static) {
        if self.inner.handle.get().is_none() {
            cleanup();
            return;
        }
        self.inner.cleanups.borrow_mut().push(Box::new(cleanup));
    }

    /// Frees the face.
    ///
    /// Sizes created for this face become invalid and deferred cleanups run.
    /// Freeing an already freed face has no effect.
    pub fn free(&self) -> Result<()> {
        self.inner.free()
    }

    /// Returns true until the face is freed.
    pub fn is_valid(&self) -> bool {
        self.inner.is_valid()
    }

    fn header(&self) -> Option<FaceHeader> {
        self.handle()
            .ok()
            .map(|handle| self.engine().header(handle))
    }

    /// Returns the number of faces in the font file, zero for a freed face.
    pub fn num_faces(&self) -> i64 {
        self.header().map(|h| h.num_faces).unwrap_or_default()
    }

    /// Returns the index the face was loaded with.
    ///
    /// The named instance, if any, is in bits 16 to 30.
    pub fn index(&self) -> i64 {
        self.header().map(|h| h.face_index).unwrap_or_default()
    }

    /// Returns the face flags, empty for a freed face.
    pub fn face_flags(&self) -> FaceFlags {
        self.header().map(|h| h.face_flags).unwrap_or_default()
    }

    /// Returns true if every flag in `flags` is set.
    pub fn has_flag(&self, flags: FaceFlags) -> bool {
        self.face_flags().contains(flags)
    }

    /// Returns the style flags, empty for a freed face.
    pub fn style_flags(&self) -> StyleFlags {
        self.header().map(|h| h.style_flags).unwrap_or_default()
    }

    /// Returns the number of glyphs, zero for a freed face.
    pub fn num_glyphs(&self) -> i64 {
        self.header().map(|h| h.num_glyphs).unwrap_or_default()
    }

    /// Returns the family name as stored in the font.
    pub fn family_name(&self) -> Vec<u8> {
        self.header().map(|h| h.family_name).unwrap_or_default()
    }

    /// Returns the style name as stored in the font.
    pub fn style_name(&self) -> Vec<u8> {
        self.header().map(|h| h.style_name).unwrap_or_default()
    }
}

impl<E: Engine> Drop for Face<E> {
    fn drop(&mut self) {
        if let Err(e) = self.free() {
            log::warn!("failed to free face: {e}");
        }
    }
}

impl<E: Engine> fmt::Debug for Face<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Face").field(&self.inner.handle.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        testing::{Fixture, MockEngine},
        Library,
    };
    use std::rc::Rc;

    fn load(library: &Library<MockEngine>, fixture: Fixture) -> Face<MockEngine> {
        library
            .new_memory_face(fixture.data(), FaceIndex::default())
            .unwrap()
    }

    #[test]
    fn combined_index() {
        let index = FaceIndex::new(3, 2).unwrap();
        assert_eq!(index.to_bits(), 0x0002_0003);
        assert_eq!(index.face_index(), 3);
        assert_eq!(index.named_instance(), 2);
        assert_eq!(FaceIndex::from(5).to_bits(), 5);
        assert_eq!(FaceIndex::new(0x10000, 0), Err(Error::InvalidArgument));
        assert_eq!(FaceIndex::new(0, 0x8000), Err(Error::InvalidArgument));
        assert_eq!(
            FaceIndex::new(0xFFFF, 0x7FFF).unwrap().to_bits(),
            0x7FFF_FFFF
        );
    }

    #[test]
    fn header_fields() {
        let library = Library::new(MockEngine::default()).unwrap();
        let face = load(&library, Fixture::GoRegular);
        assert_eq!(face.num_faces(), 1);
        assert_eq!(face.index(), 0);
        assert_eq!(face.num_glyphs(), 653);
        assert_eq!(face.family_name(), b"Go");
        assert_eq!(face.style_name(), b"Regular");
        assert!(face.has_flag(FaceFlags::SFNT | FaceFlags::SCALABLE));
        assert!(!face.has_flag(FaceFlags::COLOR));
        assert_eq!(face.style_flags(), StyleFlags::empty());
    }

    #[test]
    fn freed_face_reports_zero_values() {
        let library = Library::new(MockEngine::default()).unwrap();
        let face = load(&library, Fixture::GoRegular);
        face.free().unwrap();
        let headers = library.engine().calls("header");
        assert!(!face.is_valid());
        assert_eq!(face.num_faces(), 0);
        assert_eq!(face.index(), 0);
        assert_eq!(face.face_flags(), FaceFlags::empty());
        assert_eq!(face.style_flags(), StyleFlags::empty());
        assert!(face.family_name().is_empty());
        assert!(face.style_name().is_empty());
        assert_eq!(library.engine().calls("header"), headers);
        // Freeing twice only destroys the engine face once.
        face.free().unwrap();
        assert_eq!(library.engine().calls("done_face"), 1);
    }

    #[test]
    fn cleanups_run_in_reverse_after_done_face() {
        let library = Library::new(MockEngine::default()).unwrap();
        let face = load(&library, Fixture::GoRegular);
        let order = Rc::new(RefCell::new(Vec::new()));
        for i in 0..3 {
            let order = order.clone();
            let engine_calls = library.engine().counter("done_face");
            face.defer(move || order.borrow_mut().push((i, engine_calls.get())));
        }
        face.free().unwrap();
        assert_eq!(*order.borrow(), [(2, 1), (1, 1), (0, 1)]);
        // Late registrations run immediately.
        let order2 = order.clone();
        face.defer(move || order2.borrow_mut().push((9, 0)));
        assert_eq!(order.borrow().len(), 4);
    }

    #[test]
    fn drop_frees() {
        let library = Library::new(MockEngine::default()).unwrap();
        let data = Fixture::Twemoji.data();
        let face = library
            .new_memory_face(data.clone(), FaceIndex::default())
            .unwrap();
        drop(face);
        assert_eq!(library.engine().calls("done_face"), 1);
        assert_eq!(std::sync::Arc::strong_count(&data), 1);
    }
}
