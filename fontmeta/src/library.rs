//! The root object owning all faces.

use std::{
    cell::{Cell, RefCell},
    fmt,
    io::Read,
    path::Path,
    rc::{Rc, Weak},
    sync::Arc,
};

use crate::{
    engine::Engine,
    error::{Error, Result},
    face::{Face, FaceIndex, FaceInner},
};

/// Version triple of an engine.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

pub(crate) struct LibraryInner<E: Engine> {
    pub(crate) engine: E,
    handle: Cell<Option<E::Library>>,
    faces: RefCell<Vec<Weak<FaceInner<E>>>>,
}

impl<E: Engine> LibraryInner<E> {
    pub(crate) fn handle(&self) -> Result<E::Library> {
        self.handle.get().ok_or(Error::InvalidLibraryHandle)
    }
}

/// An engine library instance.
///
/// Faces are created through a library and are freed when the library is
/// torn down, either with [`Library::done`] or by dropping it. Libraries are
/// not thread safe and can't be sent to another thread.
pub struct Library<E: Engine> {
    inner: Rc<LibraryInner<E>>,
}

impl<E: Engine> Library<E> {
    /// Creates a new library on top of `engine`.
    pub fn new(engine: E) -> Result<Self> {
        let handle = engine.new_library()?;
        log::debug!("created library {handle:?}");
        Ok(Self {
            inner: Rc::new(LibraryInner {
                engine,
                handle: Cell::new(Some(handle)),
                faces: Default::default(),
            }),
        })
    }

    /// Returns the engine backing this library.
    pub fn engine(&self) -> &E {
        &self.inner.engine
    }

    /// Returns true until the library is torn down.
    pub fn is_valid(&self) -> bool {
        self.inner.handle.get().is_some()
    }

    /// Returns the version of the engine, or zeros after teardown.
    pub fn version(&self) -> Version {
        match self.inner.handle() {
            Ok(handle) => self.inner.engine.library_version(handle),
            Err(_) => Version::default(),
        }
    }

    /// Returns a description of an engine error code.
    pub fn error_string(&self, code: i32) -> String {
        self.inner
            .engine
            .error_string(code)
            .unwrap_or_else(|| format!("unknown error (code {code:#04x})"))
    }

    /// Reads an entire font from `reader` and creates a face from it.
    ///
    /// The bytes are owned by the face and released when it is freed.
    pub fn new_face(&self, mut reader: impl Read, index: FaceIndex) -> Result<Face<E>> {
        self.inner.handle()?;
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|_| Error::CannotOpenStream)?;
        if data.is_empty() {
            return Err(Error::UnknownFileFormat);
        }
        self.new_memory_face(data.into(), index)
    }

    /// Creates a face from font data that is already in memory.
    pub fn new_memory_face(&self, data: Arc<[u8]>, index: FaceIndex) -> Result<Face<E>> {
        let library = self.inner.handle()?;
        if data.is_empty() {
            return Err(Error::UnknownFileFormat);
        }
        let handle = self
            .inner
            .engine
            .new_memory_face(library, data.clone(), index.to_bits())?;
        log::debug!(
            "loaded face {handle:?} from {} bytes at index {index:?}",
            data.len()
        );
        let face = self.register(handle);
        // The engine may keep reading the buffer until the face is gone.
        face.defer(move || drop(data));
        Ok(face)
    }

    /// Creates a face from a font file on disk.
    pub fn new_face_from_path(&self, path: impl AsRef<Path>, index: FaceIndex) -> Result<Face<E>> {
        let library = self.inner.handle()?;
        let path = path.as_ref();
        let handle = self
            .inner
            .engine
            .new_face(library, path, index.to_bits())?;
        log::debug!("loaded face {handle:?} from {} at index {index:?}", path.display());
        Ok(self.register(handle))
    }

    fn register(&self, handle: E::Face) -> Face<E> {
        let face = Face::from_inner(Rc::new(FaceInner::new(self.inner.clone(), handle)));
        let mut faces = self.inner.faces.borrow_mut();
        faces.retain(|face| face.strong_count() != 0);
        faces.push(face.downgrade());
        face
    }

    /// Tears down the library.
    ///
    /// Every face created through this library is freed first, including
    /// their deferred cleanups. Calling this more than once has no effect.
    pub fn done(&self) -> Result<()> {
        let Some(handle) = self.inner.handle.take() else {
            return Ok(());
        };
        let faces = std::mem::take(&mut *self.inner.faces.borrow_mut());
        let mut result = Ok(());
        for face in faces.iter().filter_map(Weak::upgrade) {
            let freed = FaceInner::free(&face);
            if result.is_ok() {
                result = freed;
            }
        }
        log::debug!("tearing down library {handle:?}");
        let done = self.inner.engine.done_library(handle);
        result.and(done)
    }
}

impl<E: Engine> Drop for Library<E> {
    fn drop(&mut self) {
        if let Err(e) = self.done() {
            log::warn!("failed to tear down library: {e}");
        }
    }
}

impl<E: Engine> fmt::Debug for Library<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Library")
            .field("handle", &self.inner.handle.get())
            .field("faces", &self.inner.faces.borrow().len())
            .finish()
    }
}
