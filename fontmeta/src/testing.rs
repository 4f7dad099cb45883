//! A scripted engine that stands in for real font files in unit tests.
//!
//! Each [`Fixture`] describes one font with the values the accessors are
//! expected to report for it. Fixture data is a short marker string, so
//! anything else fed to the engine is an unknown format.

use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    path::Path,
    rc::Rc,
    sync::Arc,
};

use crate::{
    engine::{raw, Engine, LayerIterator},
    error::{Error, Result},
    flags::{FaceFlags, StyleFlags},
    ids::{PsDictKey, WinFntId},
    library::Version,
    meta::{
        mm::{MmAxis, MultiMaster},
        pfr::{PfrMetrics, Vector},
        postscript::{PsFontInfo, PsPrivate},
        winfnt::WinFntHeader,
    },
    text, Fixed,
};

const MARKER: &[u8] = b"fixture:";

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Fixture {
    GoRegular,
    GohuBdf,
    GohuPcf,
    Twemoji,
    NotoSansJp,
    BungeeColorWin,
    Bitout,
    PfrSans,
    MinionMm,
    VarSans,
}

impl Fixture {
    const ALL: [Fixture; 10] = [
        Fixture::GoRegular,
        Fixture::GohuBdf,
        Fixture::GohuPcf,
        Fixture::Twemoji,
        Fixture::NotoSansJp,
        Fixture::BungeeColorWin,
        Fixture::Bitout,
        Fixture::PfrSans,
        Fixture::MinionMm,
        Fixture::VarSans,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Fixture::GoRegular => "go.ttf",
            Fixture::GohuBdf => "gohufont-11.bdf",
            Fixture::GohuPcf => "gohufont-11.pcf",
            Fixture::Twemoji => "twemoji.ttf",
            Fixture::NotoSansJp => "NotoSansJP-Regular.otf",
            Fixture::BungeeColorWin => "BungeeColor-Regular_colr_Windows.ttf",
            Fixture::Bitout => "bitout.fon",
            Fixture::PfrSans => "sans.pfr",
            Fixture::MinionMm => "MinionMM.pfb",
            Fixture::VarSans => "varsans.ttf",
        }
    }

    pub fn data(self) -> Arc<[u8]> {
        [MARKER, self.file_name().as_bytes()].concat().into()
    }

    fn from_data(data: &[u8]) -> Option<Self> {
        let name = data.strip_prefix(MARKER)?;
        Self::ALL
            .into_iter()
            .find(|fixture| fixture.file_name().as_bytes() == name)
    }

    fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|fixture| fixture.file_name() == name)
    }

    fn is_sfnt(self) -> bool {
        self.header().face_flags.contains(FaceFlags::SFNT)
    }

    fn header(self) -> raw::FaceHeader {
        let (flags, num_glyphs, family, style) = match self {
            Fixture::GoRegular => (
                FaceFlags::SCALABLE
                    | FaceFlags::SFNT
                    | FaceFlags::HORIZONTAL
                    | FaceFlags::KERNING
                    | FaceFlags::GLYPH_NAMES
                    | FaceFlags::HINTER,
                653,
                "Go",
                "Regular",
            ),
            Fixture::GohuBdf | Fixture::GohuPcf => (
                FaceFlags::FIXED_SIZES | FaceFlags::FIXED_WIDTH | FaceFlags::HORIZONTAL,
                224,
                "Gohu GohuFont",
                "Regular",
            ),
            Fixture::Twemoji => (
                FaceFlags::SCALABLE
                    | FaceFlags::SFNT
                    | FaceFlags::HORIZONTAL
                    | FaceFlags::GLYPH_NAMES
                    | FaceFlags::COLOR,
                3765,
                "Twemoji Mozilla",
                "Regular",
            ),
            Fixture::NotoSansJp => (
                FaceFlags::SCALABLE
                    | FaceFlags::SFNT
                    | FaceFlags::HORIZONTAL
                    | FaceFlags::VERTICAL
                    | FaceFlags::GLYPH_NAMES
                    | FaceFlags::CID_KEYED
                    | FaceFlags::HINTER,
                17802,
                "Noto Sans JP",
                "Regular",
            ),
            Fixture::BungeeColorWin => (
                FaceFlags::SCALABLE
                    | FaceFlags::SFNT
                    | FaceFlags::HORIZONTAL
                    | FaceFlags::GLYPH_NAMES
                    | FaceFlags::COLOR,
                568,
                "Bungee Color",
                "Regular",
            ),
            Fixture::Bitout => (
                FaceFlags::FIXED_SIZES | FaceFlags::HORIZONTAL,
                224,
                "Bitout",
                "Regular",
            ),
            Fixture::PfrSans => (
                FaceFlags::SCALABLE | FaceFlags::HORIZONTAL | FaceFlags::KERNING,
                230,
                "Sans",
                "Regular",
            ),
            Fixture::MinionMm => (
                FaceFlags::SCALABLE
                    | FaceFlags::HORIZONTAL
                    | FaceFlags::MULTIPLE_MASTERS
                    | FaceFlags::GLYPH_NAMES
                    | FaceFlags::HINTER,
                508,
                "Minion MM",
                "Roman",
            ),
            Fixture::VarSans => (
                FaceFlags::SCALABLE
                    | FaceFlags::SFNT
                    | FaceFlags::HORIZONTAL
                    | FaceFlags::MULTIPLE_MASTERS
                    | FaceFlags::GLYPH_NAMES,
                320,
                "Var Sans",
                "Regular",
            ),
        };
        raw::FaceHeader {
            num_faces: 1,
            face_index: 0,
            face_flags: flags,
            style_flags: StyleFlags::empty(),
            num_glyphs,
            family_name: family.as_bytes().to_vec(),
            style_name: style.as_bytes().to_vec(),
        }
    }

    fn units_per_em(self) -> u32 {
        match self {
            Fixture::GoRegular | Fixture::Twemoji | Fixture::PfrSans => 2048,
            Fixture::GohuBdf | Fixture::GohuPcf | Fixture::Bitout => 0,
            _ => 1000,
        }
    }

    fn palettes(self) -> Vec<[raw::Color; 2]> {
        let bgra = |red, green, blue| raw::Color {
            blue,
            green,
            red,
            alpha: 0xFF,
        };
        match self {
            Fixture::BungeeColorWin => vec![
                [bgra(0xC9, 0x00, 0x1E), bgra(0xFF, 0xD0, 0x00)],
                [bgra(0x20, 0x20, 0x20), bgra(0xFF, 0xFF, 0xFF)],
            ],
            _ => Vec::new(),
        }
    }

    fn layers(self, base_glyph: u32) -> Vec<(u32, u32)> {
        match (self, base_glyph) {
            (Fixture::Twemoji, 0x3ae) => vec![
                (0x1d4b, 194),
                (0x1d4c, 723),
                (0x1d4d, 665),
                (0x1d4e, 194),
                (0x1d4f, 724),
                (0x1d54, 58),
                (0x1d51, 476),
                (0x1d55, 2),
            ],
            (Fixture::Twemoji, 0x3af) => vec![(0x1d60, 12), (0x1d61, raw::FOREGROUND_COLOR_INDEX)],
            _ => Vec::new(),
        }
    }

    fn mm_var(self) -> Option<(raw::MmVarRec, Vec<u32>)> {
        let fixed = Fixed::from_i32;
        let axis = |name: &str, tag: &[u8; 4], min, def, max, strid| raw::VarAxisRec {
            name: name.as_bytes().to_vec(),
            minimum: fixed(min),
            def: fixed(def),
            maximum: fixed(max),
            tag: u32::from_be_bytes(*tag),
            strid,
        };
        match self {
            Fixture::MinionMm => Some((
                raw::MmVarRec {
                    num_axis: 2,
                    num_designs: 4,
                    num_namedstyles: 0,
                    axis: vec![
                        axis("Weight", b"wght", 215, 400, 830, raw::UNDEFINED_U32),
                        axis("Width", b"wdth", 300, 500, 700, raw::UNDEFINED_U32),
                    ],
                    namedstyle: Vec::new(),
                },
                vec![0, 0],
            )),
            Fixture::VarSans => Some((
                raw::MmVarRec {
                    num_axis: 2,
                    num_designs: raw::UNDEFINED_U32,
                    num_namedstyles: 2,
                    axis: vec![
                        axis("Weight", b"wght", 100, 400, 900, 256),
                        axis("Width", b"wdth", 50, 100, 200, raw::UNDEFINED_U32),
                    ],
                    namedstyle: vec![
                        raw::VarNamedStyleRec {
                            coords: vec![fixed(400), fixed(100)],
                            strid: 257,
                            psid: 259,
                        },
                        raw::VarNamedStyleRec {
                            coords: vec![fixed(700)],
                            strid: 258,
                            psid: raw::NO_NAME_ID as u32,
                        },
                    ],
                },
                vec![0, 1],
            )),
            _ => None,
        }
    }

    fn names(self) -> Vec<raw::SfntNameRec> {
        let mac = |name_id: u16, text: &str| raw::SfntNameRec {
            platform_id: 1,
            encoding_id: 0,
            language_id: 0,
            name_id,
            string: text.as_bytes().to_vec(),
        };
        let win = |name_id: u16, string: Vec<u8>| raw::SfntNameRec {
            platform_id: 3,
            encoding_id: 1,
            language_id: 0x0409,
            name_id,
            string,
        };
        match self {
            Fixture::BungeeColorWin => {
                const STRINGS: [(u16, &str); 11] = [
                    (0, "Copyright 2008 The Bungee Project Authors"),
                    (1, "Bungee Color"),
                    (2, "Regular"),
                    (3, "2.000;DJR ;BungeeColor-Regular"),
                    (5, "Version 2.000"),
                    (6, "BungeeColor-Regular"),
                    (8, "David Jonathan Ross"),
                    (9, "David Jonathan Ross"),
                    (11, "https://djr.com/"),
                    (12, "https://djr.com/"),
                    (14, "https://scripts.sil.org/OFL"),
                ];
                let mut names: Vec<_> = STRINGS.iter().map(|(id, s)| mac(*id, s)).collect();
                names.extend(
                    STRINGS
                        .iter()
                        .map(|(id, s)| win(*id, text::encode_utf16be(s))),
                );
                names.push(win(4, text::encode_utf16be("Bungee Color Regular")));
                names.push(win(16, vec![0x00, 0x42, 0x00]));
                names
            }
            Fixture::VarSans => [
                (1, "Var Sans"),
                (2, "Regular"),
                (256, "Weight"),
                (257, "Regular"),
                (258, "Bold"),
                (259, "VarSans-Regular"),
            ]
            .iter()
            .map(|(id, s)| win(*id, text::encode_utf16be(s)))
            .collect(),
            _ => Vec::new(),
        }
    }

    fn lang_tags(self) -> Option<Vec<Vec<u8>>> {
        match self {
            Fixture::VarSans => Some(vec![text::encode_utf16be("en-GB"), vec![0xD8, 0x00]]),
            _ => None,
        }
    }

    /// `(platform, encoding, format, language)` per charmap.
    fn charmaps(self) -> Vec<(u16, u16, i64, u32)> {
        match self {
            Fixture::GoRegular => vec![(0, 3, 4, 0), (1, 0, 6, 0), (3, 1, 4, 0)],
            Fixture::Twemoji | Fixture::NotoSansJp => vec![(3, 1, 4, 0), (3, 10, 12, 0)],
            Fixture::BungeeColorWin => vec![(0, 3, 4, 0), (3, 1, 4, 0)],
            Fixture::VarSans => vec![(3, 1, 4, 0)],
            Fixture::MinionMm => vec![(3, 1, -1, 0), (7, 2, -1, 0)],
            _ => vec![(3, 1, -1, 0)],
        }
    }

    fn font_info(self) -> Option<PsFontInfo> {
        match self {
            Fixture::MinionMm => Some(PsFontInfo {
                version: "001.001".into(),
                notice: "Minion is a registered trademark of Adobe Systems Incorporated.".into(),
                full_name: "Minion MM".into(),
                family_name: "Minion MM".into(),
                weight: "All".into(),
                italic_angle: 0,
                is_fixed_pitch: false,
                underline_position: -100,
                underline_thickness: 50,
            }),
            _ => None,
        }
    }
}

/// Engine side state of a loaded face.
struct FaceState {
    fixture: Fixture,
    index: u32,
    flags: FaceFlags,
    palette: Vec<raw::Color>,
    foreground: Option<raw::Color>,
    design: Vec<Fixed>,
    weights: Vec<Fixed>,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MockLibrary;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MockFace(usize);

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct MockSize(usize);

#[derive(Default, Debug)]
pub struct MockLayers {
    layers: Option<Vec<(u32, u32)>>,
    next: usize,
}

impl LayerIterator for MockLayers {
    fn num_layers(&self) -> u32 {
        self.layers.as_ref().map_or(0, |layers| layers.len() as u32)
    }
}

pub struct MockMmVar {
    rec: raw::MmVarRec,
    axis_flags: Vec<u32>,
}

#[derive(Default)]
pub struct MockEngine {
    faces: RefCell<Vec<Option<FaceState>>>,
    // size slot -> face slot
    sizes: RefCell<Vec<Option<usize>>>,
    last_face: Cell<Option<usize>>,
    counters: RefCell<HashMap<String, Rc<Cell<usize>>>>,
    fail_axis_flags: Cell<bool>,
    last_weight_count: Cell<usize>,
}

impl MockEngine {
    /// Shared call counter for an engine method.
    pub fn counter(&self, name: &str) -> Rc<Cell<usize>> {
        self.counters
            .borrow_mut()
            .entry(name.to_string())
            .or_default()
            .clone()
    }

    /// Number of times an engine method was called.
    pub fn calls(&self, name: &str) -> usize {
        self.counters
            .borrow()
            .get(name)
            .map_or(0, |counter| counter.get())
    }

    fn hit(&self, name: &str) {
        let counter = self.counter(name);
        counter.set(counter.get() + 1);
    }

    /// Makes every axis flags query fail.
    pub fn fail_axis_flags(&self, fail: bool) {
        self.fail_axis_flags.set(fail);
    }

    /// Number of weights passed to the last weight vector update.
    pub fn last_weight_count(&self) -> usize {
        self.last_weight_count.get()
    }

    /// Active palette entries of the most recently loaded face.
    pub fn active_palette(&self) -> Vec<raw::Color> {
        self.with_last(|state| state.palette.clone())
            .unwrap_or_default()
    }

    /// Foreground color of the most recently loaded face.
    pub fn foreground(&self) -> Option<raw::Color> {
        self.with_last(|state| state.foreground).flatten()
    }

    /// The undecoded text of a `name` record of Bungee Color.
    pub fn raw_name(&self, index: usize) -> Vec<u8> {
        Fixture::BungeeColorWin.names()[index].string.clone()
    }

    fn with_last<R>(&self, f: impl FnOnce(&FaceState) -> R) -> Option<R> {
        let faces = self.faces.borrow();
        faces[self.last_face.get()?].as_ref().map(f)
    }

    fn with_face<R>(&self, face: MockFace, f: impl FnOnce(&mut FaceState) -> R) -> Result<R> {
        let mut faces = self.faces.borrow_mut();
        let state = faces
            .get_mut(face.0)
            .and_then(Option::as_mut)
            .ok_or(Error::InvalidFaceHandle)?;
        Ok(f(state))
    }

    fn fixture(&self, face: MockFace) -> Fixture {
        self.with_face(face, |state| state.fixture)
            .expect("engine called with a destroyed face")
    }

    fn open(&self, fixture: Fixture, index: u32) -> Result<MockFace> {
        if index & 0xFFFF != 0 {
            return Err(Error::InvalidArgument);
        }
        let instance = index >> 16;
        let mut state = FaceState {
            fixture,
            index,
            flags: fixture.header().face_flags,
            palette: Vec::new(),
            foreground: fixture.palettes().first().map(|_| {
                // Palette 0 is flagged for a light background.
                raw::Color {
                    blue: 0,
                    green: 0,
                    red: 0,
                    alpha: 0xFF,
                }
            }),
            design: defaults(fixture),
            weights: vec![Fixed::from_f64(0.25); 4],
        };
        apply_named_instance(&mut state, instance)?;
        let mut faces = self.faces.borrow_mut();
        faces.push(Some(state));
        self.last_face.set(Some(faces.len() - 1));
        Ok(MockFace(faces.len() - 1))
    }
}

fn defaults(fixture: Fixture) -> Vec<Fixed> {
    fixture
        .mm_var()
        .map(|(rec, _)| rec.axis.iter().map(|axis| axis.def).collect())
        .unwrap_or_default()
}

fn axes(fixture: Fixture) -> Result<Vec<raw::VarAxisRec>> {
    fixture
        .mm_var()
        .map(|(rec, _)| rec.axis)
        .ok_or(Error::InvalidArgument)
}

fn apply_design(state: &mut FaceState, coords: &[Fixed]) {
    let mut design = defaults(state.fixture);
    for (slot, coord) in design.iter_mut().zip(coords) {
        *slot = *coord;
    }
    state.design = design;
    state.flags.set(FaceFlags::VARIATION, !coords.is_empty());
}

fn apply_named_instance(state: &mut FaceState, instance: u32) -> Result<()> {
    if instance == 0 {
        apply_design(state, &[]);
        return Ok(());
    }
    let (rec, _) = state.fixture.mm_var().ok_or(Error::InvalidArgument)?;
    let style = rec
        .namedstyle
        .get(instance as usize - 1)
        .ok_or(Error::InvalidArgument)?;
    apply_design(state, &style.coords);
    state.flags.remove(FaceFlags::VARIATION);
    Ok(())
}

fn normalize(axis: &raw::VarAxisRec, value: Fixed) -> Fixed {
    let (min, def, max) = (axis.minimum, axis.def, axis.maximum);
    let value = value.to_f64();
    let n = if value < def.to_f64() {
        (value - def.to_f64()) / (def.to_f64() - min.to_f64())
    } else if max > def {
        (value - def.to_f64()) / (max.to_f64() - def.to_f64())
    } else {
        0.0
    };
    Fixed::from_f64(n)
}

fn denormalize(axis: &raw::VarAxisRec, n: Fixed) -> Fixed {
    let (min, def, max) = (
        axis.minimum.to_f64(),
        axis.def.to_f64(),
        axis.maximum.to_f64(),
    );
    let n = n.to_f64();
    let span = if n < 0.0 { def - min } else { max - def };
    Fixed::from_f64(def + n * span)
}

impl Engine for MockEngine {
    type Library = MockLibrary;
    type Face = MockFace;
    type Size = MockSize;
    type LayerIterator = MockLayers;
    type MmVar = MockMmVar;

    fn new_library(&self) -> Result<MockLibrary> {
        self.hit("new_library");
        Ok(MockLibrary)
    }

    fn done_library(&self, _library: MockLibrary) -> Result<()> {
        self.hit("done_library");
        Ok(())
    }

    fn library_version(&self, _library: MockLibrary) -> Version {
        Version::new(2, 13, 3)
    }

    fn new_memory_face(&self, _library: MockLibrary, data: Arc<[u8]>, index: u32) -> Result<MockFace> {
        self.hit("new_memory_face");
        // The buffer is only read here; the library keeps it alive.
        let fixture = Fixture::from_data(&data).ok_or(Error::UnknownFileFormat)?;
        self.open(fixture, index)
    }

    fn new_face(&self, _library: MockLibrary, path: &Path, index: u32) -> Result<MockFace> {
        self.hit("new_face");
        let fixture = Fixture::from_path(path).ok_or(Error::CannotOpenResource)?;
        self.open(fixture, index)
    }

    fn done_face(&self, face: MockFace) -> Result<()> {
        self.hit("done_face");
        let state = self
            .faces
            .borrow_mut()
            .get_mut(face.0)
            .and_then(Option::take);
        if state.is_none() {
            return Err(Error::InvalidFaceHandle);
        }
        for size in self.sizes.borrow_mut().iter_mut() {
            if *size == Some(face.0) {
                *size = None;
            }
        }
        Ok(())
    }

    fn header(&self, face: MockFace) -> raw::FaceHeader {
        self.hit("header");
        let (fixture, index, flags) = self
            .with_face(face, |state| (state.fixture, state.index, state.flags))
            .expect("engine called with a destroyed face");
        raw::FaceHeader {
            face_index: index as i64,
            face_flags: flags,
            ..fixture.header()
        }
    }

    fn new_size(&self, face: MockFace) -> Result<MockSize> {
        self.hit("new_size");
        self.with_face(face, |_| ())?;
        let mut sizes = self.sizes.borrow_mut();
        sizes.push(Some(face.0));
        Ok(MockSize(sizes.len() - 1))
    }

    fn done_size(&self, size: MockSize) -> Result<()> {
        self.hit("done_size");
        self.sizes
            .borrow_mut()
            .get_mut(size.0)
            .and_then(Option::take)
            .map(|_| ())
            .ok_or(Error::InvalidSizeHandle)
    }

    fn activate_size(&self, size: MockSize) -> Result<()> {
        self.hit("activate_size");
        match self.sizes.borrow().get(size.0) {
            Some(Some(_)) => Ok(()),
            _ => Err(Error::InvalidSizeHandle),
        }
    }

    fn bdf_charset_id(&self, face: MockFace) -> Result<(Vec<u8>, Vec<u8>)> {
        self.hit("bdf_charset_id");
        match self.fixture(face) {
            Fixture::GohuBdf => Ok((b"1".to_vec(), b"ISO8859".to_vec())),
            Fixture::GohuPcf => Ok((b"1".to_vec(), b"ISO10646".to_vec())),
            _ => Err(Error::InvalidArgument),
        }
    }

    fn bdf_property(&self, face: MockFace, name: &str) -> Result<raw::BdfPropertyRec> {
        self.hit("bdf_property");
        let atom = |value: &str| raw::BdfPropertyRec {
            kind: raw::BDF_PROPERTY_TYPE_ATOM,
            atom: value.as_bytes().to_vec(),
            ..Default::default()
        };
        let integer = |value| raw::BdfPropertyRec {
            kind: raw::BDF_PROPERTY_TYPE_INTEGER,
            integer: value,
            ..Default::default()
        };
        let cardinal = |value| raw::BdfPropertyRec {
            kind: raw::BDF_PROPERTY_TYPE_CARDINAL,
            cardinal: value,
            ..Default::default()
        };
        match (self.fixture(face), name) {
            (Fixture::GohuBdf | Fixture::GohuPcf, "FOUNDRY") => Ok(atom("Gohu")),
            (Fixture::GohuBdf | Fixture::GohuPcf, "FAMILY_NAME") => Ok(atom("GohuFont")),
            (Fixture::GohuBdf | Fixture::GohuPcf, "PIXEL_SIZE") => Ok(integer(11)),
            (Fixture::GohuBdf, "FONT_ASCENT") => Ok(integer(9)),
            (Fixture::GohuBdf, "RESOLUTION_X" | "RESOLUTION_Y") => Ok(cardinal(100)),
            (Fixture::GohuPcf, "RESOLUTION_X" | "RESOLUTION_Y") => Ok(integer(100)),
            _ => Err(Error::InvalidArgument),
        }
    }

    fn cid_registry_ordering_supplement(&self, face: MockFace) -> Result<(Vec<u8>, Vec<u8>, i32)> {
        self.hit("cid_registry_ordering_supplement");
        match self.fixture(face) {
            Fixture::NotoSansJp => Ok((b"Adobe".to_vec(), b"Identity".to_vec(), 0)),
            _ => Err(Error::InvalidArgument),
        }
    }

    fn cid_is_internally_keyed(&self, face: MockFace) -> Result<bool> {
        self.hit("cid_is_internally_keyed");
        match self.fixture(face) {
            Fixture::NotoSansJp => Ok(true),
            _ => Err(Error::InvalidArgument),
        }
    }

    fn cid_from_glyph_index(&self, face: MockFace, glyph_index: u32) -> Result<u32> {
        self.hit("cid_from_glyph_index");
        let fixture = self.fixture(face);
        if fixture != Fixture::NotoSansJp || glyph_index as i64 >= fixture.header().num_glyphs {
            return Err(Error::InvalidArgument);
        }
        // CIDs past the Kana block are offset from their glyph indices.
        Ok(if glyph_index < 1000 {
            glyph_index
        } else {
            glyph_index + 256
        })
    }

    fn palette_data(&self, face: MockFace) -> Result<raw::PaletteDataRec> {
        self.hit("palette_data");
        let fixture = self.fixture(face);
        match fixture {
            Fixture::BungeeColorWin => Ok(raw::PaletteDataRec {
                num_palettes: 2,
                palette_name_ids: vec![256, raw::NO_NAME_ID],
                palette_flags: vec![1, 2],
                num_palette_entries: 2,
                palette_entry_name_ids: Vec::new(),
            }),
            _ if fixture.is_sfnt() => Ok(raw::PaletteDataRec::default()),
            _ => Err(Error::InvalidArgument),
        }
    }

    fn palette_select(
        &self,
        face: MockFace,
        index: u16,
        f: &mut dyn FnMut(&mut [raw::Color]),
    ) -> Result<()> {
        self.hit("palette_select");
        let mut palette = self
            .fixture(face)
            .palettes()
            .get(index as usize)
            .ok_or(Error::InvalidArgument)?
            .to_vec();
        f(&mut palette);
        self.with_face(face, |state| state.palette = palette)
    }

    fn palette_set_foreground_color(&self, face: MockFace, color: raw::Color) -> Result<()> {
        self.hit("palette_set_foreground_color");
        if self.fixture(face).palettes().is_empty() {
            return Err(Error::InvalidArgument);
        }
        self.with_face(face, |state| state.foreground = Some(color))
    }

    fn color_glyph_layer(
        &self,
        face: MockFace,
        base_glyph: u32,
        iter: &mut MockLayers,
    ) -> Option<(u32, u32)> {
        self.hit("color_glyph_layer");
        let fixture = self.fixture(face);
        let layers = iter
            .layers
            .get_or_insert_with(|| fixture.layers(base_glyph));
        let layer = layers.get(iter.next).copied()?;
        iter.next += 1;
        Some(layer)
    }

    fn gasp(&self, face: MockFace, ppem: u32) -> i32 {
        self.hit("gasp");
        match self.fixture(face) {
            Fixture::GoRegular if ppem <= 8 => 0xA,
            Fixture::GoRegular => 0xF,
            Fixture::Twemoji => 0x2,
            _ => raw::GASP_NO_TABLE,
        }
    }

    fn multi_master(&self, face: MockFace) -> Result<MultiMaster> {
        self.hit("multi_master");
        match self.fixture(face) {
            Fixture::MinionMm => Ok(MultiMaster {
                num_axis: 2,
                num_designs: 4,
                axis: vec![
                    MmAxis {
                        name: "Weight".into(),
                        minimum: 215,
                        maximum: 830,
                    },
                    MmAxis {
                        name: "Width".into(),
                        minimum: 300,
                        maximum: 700,
                    },
                ],
            }),
            _ => Err(Error::InvalidArgument),
        }
    }

    fn get_mm_var(&self, face: MockFace) -> Result<MockMmVar> {
        self.hit("get_mm_var");
        let (rec, axis_flags) = self.fixture(face).mm_var().ok_or(Error::InvalidArgument)?;
        Ok(MockMmVar { rec, axis_flags })
    }

    fn mm_var_record(&self, mm_var: &MockMmVar) -> raw::MmVarRec {
        mm_var.rec.clone()
    }

    fn var_axis_flags(&self, mm_var: &MockMmVar, axis_index: u32) -> Result<u32> {
        self.hit("var_axis_flags");
        if self.fail_axis_flags.get() {
            return Err(Error::InvalidArgument);
        }
        mm_var
            .axis_flags
            .get(axis_index as usize)
            .copied()
            .ok_or(Error::InvalidArgument)
    }

    fn done_mm_var(&self, _face: MockFace, _mm_var: MockMmVar) -> Result<()> {
        self.hit("done_mm_var");
        Ok(())
    }

    fn set_mm_design_coordinates(&self, face: MockFace, coords: &[i64]) -> Result<()> {
        self.hit("set_mm_design_coordinates");
        if self.fixture(face) != Fixture::MinionMm {
            return Err(Error::InvalidArgument);
        }
        let coords: Vec<_> = coords.iter().map(|c| Fixed::from_i32(*c as i32)).collect();
        self.with_face(face, |state| apply_design(state, &coords))
    }

    fn set_var_design_coordinates(&self, face: MockFace, coords: &[Fixed]) -> Result<()> {
        self.hit("set_var_design_coordinates");
        axes(self.fixture(face))?;
        self.with_face(face, |state| apply_design(state, coords))
    }

    fn get_var_design_coordinates(&self, face: MockFace, coords: &mut [Fixed]) -> Result<()> {
        self.hit("get_var_design_coordinates");
        axes(self.fixture(face))?;
        self.with_face(face, |state| {
            for (slot, coord) in coords.iter_mut().zip(&state.design) {
                *slot = *coord;
            }
        })
    }

    fn set_mm_blend_coordinates(&self, face: MockFace, coords: &[Fixed]) -> Result<()> {
        self.hit("set_mm_blend_coordinates");
        let axes = axes(self.fixture(face))?;
        let design: Vec<_> = axes
            .iter()
            .zip(coords)
            .map(|(axis, n)| denormalize(axis, *n))
            .collect();
        self.with_face(face, |state| apply_design(state, &design))
    }

    fn get_mm_blend_coordinates(&self, face: MockFace, coords: &mut [Fixed]) -> Result<()> {
        self.hit("get_mm_blend_coordinates");
        let axes = axes(self.fixture(face))?;
        self.with_face(face, |state| {
            for ((slot, axis), coord) in coords.iter_mut().zip(&axes).zip(&state.design) {
                *slot = normalize(axis, *coord);
            }
        })
    }

    fn set_mm_weight_vector(&self, face: MockFace, weights: &[Fixed]) -> Result<()> {
        self.hit("set_mm_weight_vector");
        if self.fixture(face) != Fixture::MinionMm {
            return Err(Error::InvalidArgument);
        }
        self.last_weight_count.set(weights.len());
        self.with_face(face, |state| {
            let mut stored: Vec<_> = weights.iter().copied().take(4).collect();
            stored.resize(4, Fixed::ZERO);
            state.weights = stored;
            state.flags.insert(FaceFlags::VARIATION);
        })
    }

    fn get_mm_weight_vector(&self, face: MockFace, weights: &mut [Fixed]) -> Result<usize> {
        self.hit("get_mm_weight_vector");
        if self.fixture(face) != Fixture::MinionMm {
            return Err(Error::InvalidArgument);
        }
        self.with_face(face, |state| {
            for (slot, weight) in weights.iter_mut().zip(&state.weights) {
                *slot = *weight;
            }
            state.weights.len()
        })
    }

    fn set_named_instance(&self, face: MockFace, instance_index: u32) -> Result<()> {
        self.hit("set_named_instance");
        axes(self.fixture(face))?;
        self.with_face(face, |state| apply_named_instance(state, instance_index))?
    }

    fn default_named_instance(&self, face: MockFace) -> Result<u32> {
        self.hit("default_named_instance");
        let fixture = self.fixture(face);
        let (rec, _) = fixture.mm_var().ok_or(Error::InvalidArgument)?;
        let defaults = defaults(fixture);
        let index = rec.namedstyle.iter().position(|style| {
            let coords: Vec<_> = style
                .coords
                .iter()
                .chain(defaults.iter().skip(style.coords.len()))
                .take(defaults.len())
                .copied()
                .collect();
            coords == defaults
        });
        Ok(index.map_or(0, |i| i as u32 + 1))
    }

    fn pfr_metrics(&self, face: MockFace) -> (PfrMetrics, Result<()>) {
        self.hit("pfr_metrics");
        let fixture = self.fixture(face);
        let upem = fixture.units_per_em();
        let metrics = PfrMetrics {
            outline_resolution: upem,
            metrics_resolution: upem,
            metrics_x_scale: Fixed::ONE,
            metrics_y_scale: Fixed::ONE,
        };
        match fixture {
            Fixture::PfrSans => (metrics, Ok(())),
            _ => (metrics, Err(Error::UnknownFileFormat)),
        }
    }

    fn pfr_kerning(&self, face: MockFace, left: u32, right: u32) -> Result<Vector> {
        self.hit("pfr_kerning");
        match (self.fixture(face), left, right) {
            (Fixture::PfrSans, 36, 86) => Ok(Vector { x: -74, y: 0 }),
            _ => Ok(Vector::default()),
        }
    }

    fn pfr_advance(&self, face: MockFace, glyph_index: u32) -> Result<i64> {
        self.hit("pfr_advance");
        match (self.fixture(face), glyph_index) {
            (Fixture::PfrSans, 36) => Ok(1366),
            (Fixture::PfrSans, g) if g < 230 => Ok(1000),
            _ => Err(Error::InvalidArgument),
        }
    }

    fn sfnt_name_count(&self, face: MockFace) -> u32 {
        self.hit("sfnt_name_count");
        self.fixture(face).names().len() as u32
    }

    fn sfnt_name(&self, face: MockFace, index: u32) -> Result<raw::SfntNameRec> {
        self.hit("sfnt_name");
        self.fixture(face)
            .names()
            .get(index as usize)
            .cloned()
            .ok_or(Error::InvalidArgument)
    }

    fn sfnt_lang_tag(&self, face: MockFace, language_id: u32) -> Result<Vec<u8>> {
        self.hit("sfnt_lang_tag");
        let fixture = self.fixture(face);
        if !fixture.is_sfnt() || language_id < 0x8000 {
            return Err(Error::InvalidArgument);
        }
        fixture
            .lang_tags()
            .ok_or(Error::InvalidTable)?
            .get((language_id - 0x8000) as usize)
            .cloned()
            .ok_or(Error::InvalidArgument)
    }

    fn num_charmaps(&self, face: MockFace) -> u32 {
        self.fixture(face).charmaps().len() as u32
    }

    fn charmap_info(&self, face: MockFace, index: u32) -> Option<raw::CharMapRec> {
        let (platform_id, encoding_id, _, _) =
            *self.fixture(face).charmaps().get(index as usize)?;
        Some(raw::CharMapRec {
            platform_id,
            encoding_id,
        })
    }

    fn charmap_language(&self, face: MockFace, index: u32) -> u32 {
        self.fixture(face)
            .charmaps()
            .get(index as usize)
            .map_or(0, |charmap| charmap.3)
    }

    fn charmap_format(&self, face: MockFace, index: u32) -> i64 {
        self.fixture(face)
            .charmaps()
            .get(index as usize)
            .map_or(-1, |charmap| charmap.2)
    }

    fn has_ps_glyph_names(&self, face: MockFace) -> bool {
        self.with_face(face, |state| state.flags.contains(FaceFlags::GLYPH_NAMES))
            .unwrap_or_default()
    }

    fn ps_font_info(&self, face: MockFace) -> Result<PsFontInfo> {
        self.hit("ps_font_info");
        self.fixture(face).font_info().ok_or(Error::InvalidArgument)
    }

    fn ps_private(&self, face: MockFace) -> Result<PsPrivate> {
        self.hit("ps_private");
        if self.fixture(face) != Fixture::MinionMm {
            return Err(Error::InvalidArgument);
        }
        let mut private = PsPrivate {
            unique_id: 43091,
            len_iv: 4,
            num_blue_values: 4,
            blue_scale: Fixed::from_bits(0x0289),
            blue_shift: 7,
            blue_fuzz: 1,
            standard_width: [80],
            standard_height: [66],
            num_snap_widths: 1,
            expansion_factor: Fixed::from_f64(0.06),
            min_feature: [16, 16],
            password: 5839,
            ..Default::default()
        };
        private.blue_values[..4].copy_from_slice(&[-20, 0, 650, 670]);
        private.snap_widths[0] = 80;
        Ok(private)
    }

    fn ps_font_value(&self, face: MockFace, key: u32, index: u32) -> Result<Vec<u8>> {
        self.hit("ps_font_value");
        let info = self.fixture(face).font_info().ok_or(Error::InvalidArgument)?;
        let blues: [i16; 4] = [-20, 0, 650, 670];
        match PsDictKey::new(key) {
            PsDictKey::VERSION => Ok(info.version.into_bytes()),
            PsDictKey::NOTICE => Ok(info.notice.into_bytes()),
            PsDictKey::FULL_NAME => Ok(info.full_name.into_bytes()),
            PsDictKey::FAMILY_NAME => Ok(info.family_name.into_bytes()),
            PsDictKey::WEIGHT => Ok(info.weight.into_bytes()),
            PsDictKey::NUM_BLUE_VALUES => Ok(vec![blues.len() as u8]),
            PsDictKey::BLUE_VALUE => blues
                .get(index as usize)
                .map(|value| value.to_be_bytes().to_vec())
                .ok_or(Error::InvalidArgument),
            _ => Err(Error::InvalidArgument),
        }
    }

    fn winfnt_header(&self, face: MockFace) -> Result<WinFntHeader> {
        self.hit("winfnt_header");
        if self.fixture(face) != Fixture::Bitout {
            return Err(Error::InvalidArgument);
        }
        let notice = b"1999 Bitout by Sami Kallio";
        let mut copyright = [0; 60];
        copyright[..notice.len()].copy_from_slice(notice);
        Ok(WinFntHeader {
            version: 0x300,
            file_size: 5792,
            copyright,
            nominal_point_size: 10,
            vertical_resolution: 96,
            horizontal_resolution: 96,
            ascent: 14,
            weight: 400,
            charset: WinFntId::CP1252,
            pixel_height: 18,
            avg_width: 7,
            max_width: 7,
            first_char: 0x20,
            last_char: 0xFF,
            default_char: 0x3F - 0x20,
            break_char: 0,
            bytes_per_row: 224,
            face_name_offset: 5786,
            bits_offset: 1198,
            reserved1: [2819521476297798, 3664165449761896, 0, 0],
            ..Default::default()
        })
    }
}

#[test]
fn fixtures_round_trip_through_marker() {
    for fixture in Fixture::ALL {
        assert_eq!(Fixture::from_data(&fixture.data()), Some(fixture));
        assert_eq!(Fixture::from_path(Path::new(fixture.file_name())), Some(fixture));
    }
    assert_eq!(Fixture::from_data(b"not a font"), None);
}
