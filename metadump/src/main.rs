use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    sync::Arc,
};

use fontmeta::{
    ids::{NameId, PsDictKey},
    Engine, Face, FaceFlags, FaceIndex, Library,
};

#[derive(clap::Parser, Debug)]
#[command(about = "Prints the format metadata of font files")]
struct Args {
    /// Index of the face within a collection
    #[arg(long, default_value_t = 0)]
    index: u32,
    /// Named instance to apply when loading (1-based, 0 for none)
    #[arg(long, default_value_t = 0)]
    instance: u32,
    /// Pixels per em used for the gasp lookup
    #[arg(long, default_value_t = 16)]
    ppem: u32,
    /// Glyph whose color layers are printed
    #[arg(long)]
    glyph: Option<u32>,
    /// The engine that parses the files
    #[arg(long, value_enum, default_value_t)]
    engine: EngineKind,
    /// Paths to font files
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

#[derive(clap::ValueEnum, Copy, Clone, Default, Debug)]
enum EngineKind {
    /// The pure Rust engine.
    #[default]
    Skrifa,
    /// The FreeType engine.
    Freetype,
}

#[derive(Debug, thiserror::Error)]
enum DumpError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path}: {source}")]
    Font {
        path: PathBuf,
        source: fontmeta::Error,
    },
    #[cfg_attr(all(feature = "skrifa", feature = "freetype"), allow(dead_code))]
    #[error("the {0:?} engine was not compiled in")]
    MissingEngine(EngineKind),
    #[error(transparent)]
    Engine(#[from] fontmeta::Error),
}

fn main() -> ExitCode {
    env_logger::init();
    let args = <Args as clap::Parser>::parse();
    let result = match args.engine {
        EngineKind::Skrifa => run_skrifa(&args),
        EngineKind::Freetype => run_freetype(&args),
    };
    match result {
        Ok(failures) if failures == 0 => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(feature = "skrifa")]
fn run_skrifa(args: &Args) -> Result<usize, DumpError> {
    run(fontmeta::SkrifaEngine::default(), args)
}

#[cfg(not(feature = "skrifa"))]
fn run_skrifa(_args: &Args) -> Result<usize, DumpError> {
    Err(DumpError::MissingEngine(EngineKind::Skrifa))
}

#[cfg(feature = "freetype")]
fn run_freetype(args: &Args) -> Result<usize, DumpError> {
    run(fontmeta::FreeTypeEngine::default(), args)
}

#[cfg(not(feature = "freetype"))]
fn run_freetype(_args: &Args) -> Result<usize, DumpError> {
    Err(DumpError::MissingEngine(EngineKind::Freetype))
}

/// Dumps every file, returning the number of files that failed to load.
fn run<E: Engine>(engine: E, args: &Args) -> Result<usize, DumpError> {
    let library = Library::new(engine)?;
    log::info!("engine version {}", library.version());
    let index = FaceIndex::new(args.index, args.instance)?;
    let mut failures = 0;
    for path in &args.files {
        match load(&library, path, index) {
            Ok(face) => {
                println!("== {}", path.display());
                dump(&face, args);
                if let Err(e) = face.free() {
                    log::warn!("failed to free {}: {e}", path.display());
                }
            }
            Err(e) => {
                eprintln!("{e}");
                failures += 1;
            }
        }
    }
    library.done()?;
    Ok(failures)
}

fn load<E: Engine>(
    library: &Library<E>,
    path: &Path,
    index: FaceIndex,
) -> Result<Face<E>, DumpError> {
    let io_err = |source| DumpError::Io {
        path: path.to_owned(),
        source,
    };
    // The face owns its bytes, so read them once into the shared buffer.
    let data: Arc<[u8]> = std::fs::read(path).map_err(io_err)?.into();
    library
        .new_memory_face(data, index)
        .map_err(|source| DumpError::Font {
            path: path.to_owned(),
            source,
        })
}

fn dump<E: Engine>(face: &Face<E>, args: &Args) {
    dump_header(face);
    dump_names(face);
    dump_charmaps(face);
    dump_palettes(face);
    if let Some(glyph) = args.glyph {
        dump_layers(face, glyph);
    }
    dump_variations(face);
    let (flags, found) = face.gasp_flags(args.ppem);
    if found {
        println!("gasp @{}ppem: {flags}", args.ppem);
    }
    dump_formats(face);
}

fn dump_header<E: Engine>(face: &Face<E>) {
    println!(
        "face {} of {}: {} {}",
        face.index(),
        face.num_faces(),
        String::from_utf8_lossy(&face.family_name()),
        String::from_utf8_lossy(&face.style_name()),
    );
    println!("glyphs: {}", face.num_glyphs());
    println!("face flags: {}", face.face_flags());
    println!("style flags: {}", face.style_flags());
}

fn dump_names<E: Engine>(face: &Face<E>) {
    let names = match face.sfnt_names() {
        Ok(names) => names,
        Err(e) => {
            log::debug!("no names: {e}");
            return;
        }
    };
    if !names.is_empty() {
        println!("names:");
    }
    for name in names {
        let language = name
            .language_id
            .name_for(name.platform_id)
            .map(str::to_owned)
            .or_else(|| {
                name.language_id
                    .is_lang_tag()
                    .then(|| face.sfnt_lang_tag(name.language_id.to_raw() as u32).ok())
                    .flatten()
            })
            .unwrap_or_else(|| name.language_id.to_string());
        let text = if name.is_unicode() || name.text.is_ascii() {
            String::from_utf8_lossy(&name.text).into_owned()
        } else {
            format!("<{} bytes>", name.text.len())
        };
        println!(
            "  {:?} {} {} {}: {text}",
            name.name_id,
            name.platform_id,
            name.encoding_id
                .name_for(name.platform_id)
                .map(str::to_owned)
                .unwrap_or_else(|| name.encoding_id.to_string()),
            language,
        );
    }
}

fn dump_charmaps<E: Engine>(face: &Face<E>) {
    for (i, info) in face.charmaps().iter().enumerate() {
        println!(
            "charmap {i}: {} {} format {} language {}",
            info.platform_id, info.encoding_id, info.format, info.language_id
        );
    }
}

fn dump_palettes<E: Engine>(face: &Face<E>) {
    let data = match face.palette_data() {
        Ok(data) => data,
        Err(e) => {
            log::debug!("no palettes: {e}");
            return;
        }
    };
    println!(
        "palettes: {} of {} entries",
        data.num_palettes, data.num_palette_entries
    );
    for index in 0..data.num_palettes {
        let label = data
            .name_ids
            .get(index as usize)
            .copied()
            .flatten()
            .map(|id: NameId| format!(" ({id:?})"))
            .unwrap_or_default();
        match face.select_palette(index) {
            Ok(colors) => {
                let colors = colors
                    .iter()
                    .map(|c| format!("#{:02x}{:02x}{:02x}{:02x}", c.red, c.green, c.blue, c.alpha))
                    .collect::<Vec<_>>();
                println!("  {index}{label}: {}", colors.join(" "));
            }
            Err(e) => log::debug!("palette {index}: {e}"),
        }
    }
}

fn dump_layers<E: Engine>(face: &Face<E>, glyph: u32) {
    let layers = face.color_glyph_layers(glyph);
    if layers.is_empty() {
        println!("glyph {glyph}: no color layers");
        return;
    }
    println!("glyph {glyph}: {} layers", layers.len());
    for layer in layers {
        println!("  gid {} color {}", layer.glyph_index, layer.color_index);
    }
}

fn dump_variations<E: Engine>(face: &Face<E>) {
    if let Ok(mm) = face.multi_master() {
        println!("multiple master: {} designs", mm.num_designs);
        for axis in &mm.axis {
            println!("  {} {}..{}", axis.name, axis.minimum, axis.maximum);
        }
    }
    let var = match face.mm_var() {
        Ok(var) => var,
        Err(e) => {
            log::debug!("no variations: {e}");
            return;
        }
    };
    println!("axes:");
    for axis in &var.axis {
        println!(
            "  {} '{}' {}..{}..{} {}",
            axis.tag, axis.name, axis.minimum, axis.default, axis.maximum, axis.flags
        );
    }
    if !var.named_styles.is_empty() {
        println!("instances:");
    }
    for (i, style) in var.named_styles.iter().enumerate() {
        let coords = style
            .coords
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        println!("  {} name {} [{}]", i + 1, style.strid, coords.join(", "));
    }
    if let Ok(coords) = face.var_design_coords() {
        let coords = coords.iter().map(ToString::to_string).collect::<Vec<_>>();
        println!("design coords: [{}]", coords.join(", "));
    }
    if let Ok(default) = face.default_named_instance() {
        println!("default instance: {default}");
    }
}

fn dump_formats<E: Engine>(face: &Face<E>) {
    if face.has_flag(FaceFlags::GLYPH_NAMES) || face.has_ps_glyph_names() {
        println!("has glyph names");
    }
    match face.ps_font_info() {
        Ok(info) => println!(
            "ps font info: {} ({}) weight {}",
            info.full_name, info.version, info.weight
        ),
        Err(e) => log::debug!("no ps font info: {e}"),
    }
    match face.ps_font_value(PsDictKey::FONT_NAME, 0) {
        Ok(value) => println!("ps font name: {}", String::from_utf8_lossy(&value)),
        Err(e) => log::debug!("no ps font name: {e}"),
    }
    match face.cid_registry_ordering_supplement() {
        Ok((registry, ordering, supplement)) => {
            println!("cid: {registry}-{ordering}-{supplement}")
        }
        Err(e) => log::debug!("no cid ros: {e}"),
    }
    match face.bdf_charset_id() {
        Ok((encoding, registry)) => println!("bdf charset: {registry}-{encoding}"),
        Err(e) => log::debug!("no bdf charset: {e}"),
    }
    match face.winfnt_header() {
        Ok(header) => println!(
            "winfnt: version {:#x} charset {:?} {}x{}",
            header.version, header.charset, header.pixel_width, header.pixel_height
        ),
        Err(e) => log::debug!("no winfnt header: {e}"),
    }
    match face.pfr_metrics() {
        Ok(metrics) => println!(
            "pfr: outline {} metrics {}",
            metrics.outline_resolution, metrics.metrics_resolution
        ),
        Err(e) => log::debug!("no pfr metrics: {}", e.error),
    }
}

#[cfg(all(test, feature = "skrifa"))]
mod tests {
    use super::*;
    use fontmeta::SkrifaEngine;

    fn temp_file(name: &str, bytes: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("metadump-{}-{name}", std::process::id()));
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn face_outlives_its_file() {
        // An SFNT table directory without tables.
        let path = temp_file("empty.ttf", &[0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let library = Library::new(SkrifaEngine::default()).unwrap();
        let face = load(&library, &path, FaceIndex::default()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(face.num_faces(), 1);
        assert!(face.has_flag(FaceFlags::SFNT));
    }

    #[test]
    fn load_errors_name_the_file() {
        let library = Library::new(SkrifaEngine::default()).unwrap();
        let missing = std::env::temp_dir().join("metadump-no-such-font.ttf");
        let err = load(&library, &missing, FaceIndex::default()).unwrap_err();
        assert!(matches!(err, DumpError::Io { .. }));
        let path = temp_file("garbage.ttf", b"not a font");
        let err = load(&library, &path, FaceIndex::default()).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            err,
            DumpError::Font {
                source: fontmeta::Error::UnknownFileFormat,
                ..
            }
        ));
        assert!(err.to_string().starts_with(&path.display().to_string()));
    }
}
