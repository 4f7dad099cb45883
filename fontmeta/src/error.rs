//! The closed set of errors reported by engines and accessors.

/// Result type returned by fallible operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

// Each row is `Variant = code, "canonical phrase"`. The codes and phrases
// are the ones FreeType reports, so an engine error keeps its identity
// whichever engine produced it.
macro_rules! error_table {
    ($($(#[$meta:meta])* $name:ident = $code:literal, $msg:literal;)*) => {
        /// An error reported by a font engine or by this crate.
        ///
        /// Every engine error code maps to exactly one variant. Codes that
        /// are not part of the table are preserved in [`Error::Unknown`].
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
        #[non_exhaustive]
        pub enum Error {
            $(
                $(#[$meta])*
                #[error($msg)]
                $name,
            )*
            /// Text in a font could not be decoded.
            #[error("unable to decode text")]
            UnableToDecode,
            /// An engine error code without a named counterpart.
            #[error("unknown error (code {0:#04x})")]
            Unknown(i32),
        }

        impl Error {
            /// Returns the error for the given engine code.
            ///
            /// The success code (zero) has no error and returns `None`.
            pub fn from_code(code: i32) -> Option<Self> {
                match code {
                    0 => None,
                    $($code => Some(Self::$name),)*
                    _ => Some(Self::Unknown(code)),
                }
            }

            /// Returns the engine code for this error.
            ///
            /// Errors that originate in this crate rather than in an engine
            /// have no code.
            pub fn code(self) -> Option<i32> {
                match self {
                    $(Self::$name => Some($code),)*
                    Self::UnableToDecode => None,
                    Self::Unknown(code) => Some(code),
                }
            }
        }
    };
}

error_table! {
    // generic errors
    CannotOpenResource = 0x01, "cannot open resource";
    UnknownFileFormat = 0x02, "unknown file format";
    InvalidFileFormat = 0x03, "broken file";
    InvalidVersion = 0x04, "invalid FreeType version";
    LowerModuleVersion = 0x05, "module version is too low";
    InvalidArgument = 0x06, "invalid argument";
    UnimplementedFeature = 0x07, "unimplemented feature";
    InvalidTable = 0x08, "broken table";
    InvalidOffset = 0x09, "broken offset within table";
    ArrayTooLarge = 0x0A, "array allocation size too large";
    MissingModule = 0x0B, "missing module";
    MissingProperty = 0x0C, "missing property";

    // glyph/character errors
    InvalidGlyphIndex = 0x10, "invalid glyph index";
    InvalidCharacterCode = 0x11, "invalid character code";
    InvalidGlyphFormat = 0x12, "unsupported glyph image format";
    CannotRenderGlyph = 0x13, "cannot render this glyph format";
    InvalidOutline = 0x14, "invalid outline";
    InvalidComposite = 0x15, "invalid composite glyph";
    TooManyHints = 0x16, "too many hints";
    InvalidPixelSize = 0x17, "invalid pixel size";
    InvalidSvgDocument = 0x18, "invalid SVG document";

    // handle errors
    InvalidHandle = 0x20, "invalid object handle";
    InvalidLibraryHandle = 0x21, "invalid library handle";
    InvalidDriverHandle = 0x22, "invalid module handle";
    InvalidFaceHandle = 0x23, "invalid face handle";
    InvalidSizeHandle = 0x24, "invalid size handle";
    InvalidSlotHandle = 0x25, "invalid glyph slot handle";
    InvalidCharMapHandle = 0x26, "invalid charmap handle";
    InvalidCacheHandle = 0x27, "invalid cache manager handle";
    InvalidStreamHandle = 0x28, "invalid stream handle";

    // driver errors
    TooManyDrivers = 0x30, "too many modules";
    TooManyExtensions = 0x31, "too many extensions";

    // memory errors
    OutOfMemory = 0x40, "out of memory";
    UnlistedObject = 0x41, "unlisted object";

    // stream errors
    CannotOpenStream = 0x51, "cannot open stream";
    InvalidStreamSeek = 0x52, "invalid stream seek";
    InvalidStreamSkip = 0x53, "invalid stream skip";
    InvalidStreamRead = 0x54, "invalid stream read";
    InvalidStreamOperation = 0x55, "invalid stream operation";
    InvalidFrameOperation = 0x56, "invalid frame operation";
    NestedFrameAccess = 0x57, "nested frame access";
    InvalidFrameRead = 0x58, "invalid frame read";

    // raster errors
    RasterUninitialized = 0x60, "raster uninitialized";
    RasterCorrupted = 0x61, "raster corrupted";
    RasterOverflow = 0x62, "raster overflow";
    RasterNegativeHeight = 0x63, "negative height while rastering";

    // cache errors
    TooManyCaches = 0x70, "too many registered caches";

    // TrueType and SFNT errors
    InvalidOpcode = 0x80, "invalid opcode";
    TooFewArguments = 0x81, "too few arguments";
    StackOverflow = 0x82, "stack overflow";
    CodeOverflow = 0x83, "code overflow";
    BadArgument = 0x84, "bad argument";
    DivideByZero = 0x85, "division by zero";
    InvalidReference = 0x86, "invalid reference";
    DebugOpcode = 0x87, "found debug opcode";
    EndfInExecStream = 0x88, "found ENDF opcode in execution stream";
    NestedDefs = 0x89, "nested DEFS";
    InvalidCodeRange = 0x8A, "invalid code range";
    ExecutionTooLong = 0x8B, "execution context too long";
    TooManyFunctionDefs = 0x8C, "too many function definitions";
    TooManyInstructionDefs = 0x8D, "too many instruction definitions";
    TableMissing = 0x8E, "SFNT font table missing";
    HorizHeaderMissing = 0x8F, "horizontal header (hhea) table missing";
    LocationsMissing = 0x90, "locations (loca) table missing";
    NameTableMissing = 0x91, "name table missing";
    CMapTableMissing = 0x92, "character map (cmap) table missing";
    HmtxTableMissing = 0x93, "horizontal metrics (hmtx) table missing";
    PostTableMissing = 0x94, "PostScript (post) table missing";
    InvalidHorizMetrics = 0x95, "invalid horizontal metrics";
    InvalidCharMapFormat = 0x96, "invalid character map (cmap) format";
    InvalidPpem = 0x97, "invalid ppem value";
    InvalidVertMetrics = 0x98, "invalid vertical metrics";
    CouldNotFindContext = 0x99, "could not find context";
    InvalidPostTableFormat = 0x9A, "invalid PostScript (post) table format";
    InvalidPostTable = 0x9B, "invalid PostScript (post) table";
    DefInGlyfBytecode = 0x9C, "found FDEF or IDEF opcode in glyf bytecode";
    MissingBitmap = 0x9D, "missing bitmap in strike";
    MissingSvgHooks = 0x9E, "SVG hooks have not been set";

    // CFF, CID, and Type 1 errors
    SyntaxError = 0xA0, "opcode syntax error";
    StackUnderflow = 0xA1, "argument stack underflow";
    Ignore = 0xA2, "ignore";
    NoUnicodeGlyphName = 0xA3, "no Unicode glyph name found";
    GlyphTooBig = 0xA4, "glyph too big for hinting";

    // BDF errors
    MissingStartfontField = 0xB0, "`STARTFONT' field missing";
    MissingFontField = 0xB1, "`FONT' field missing";
    MissingSizeField = 0xB2, "`SIZE' field missing";
    MissingFontboundingboxField = 0xB3, "`FONTBOUNDINGBOX' field missing";
    MissingCharsField = 0xB4, "`CHARS' field missing";
    MissingStartcharField = 0xB5, "`STARTCHAR' field missing";
    MissingEncodingField = 0xB6, "`ENCODING' field missing";
    MissingBbxField = 0xB7, "`BBX' field missing";
    BbxTooBig = 0xB8, "`BBX' too big";
    CorruptedFontHeader = 0xB9, "Font header corrupted or missing fields";
    CorruptedFontGlyphs = 0xBA, "Font glyphs corrupted or missing fields";
}

impl Error {
    /// Converts an engine status code into a result.
    pub fn check(code: i32) -> Result<()> {
        match Self::from_code(code) {
            None => Ok(()),
            Some(err) => Err(err),
        }
    }

    /// Returns true if this error reports an invalid handle of any kind.
    pub fn is_invalid_handle(self) -> bool {
        matches!(self.code(), Some(0x20..=0x28))
    }
}
