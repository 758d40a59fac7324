//! vector-raster CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;
use env_logger::Env;
use log::LevelFilter;

use vector_raster::parsers::parse;
use vector_raster::{CachePolicy, CharSet, GeometryCache, RenderConfig, VectorImage, render_image};

/// Render axis-aligned line listings as character grids.
#[derive(Parser, Debug)]
#[command(
    name = "vector-raster",
    version = env!("VECTOR_RASTER_VERSION"),
    about = "Render axis-aligned line listings as character grids"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<String>,

    /// Render the outline of a WxH rectangle instead of reading input
    #[arg(long = "rectangle", value_name = "WxH", value_parser = parse_dims, conflicts_with = "input")]
    rectangle: Option<(i64, i64)>,

    /// Paint with block characters instead of '*'
    #[arg(short = 'u', long = "unicode")]
    unicode: bool,

    /// Rasterize every line from scratch
    #[arg(long = "no-cache")]
    no_cache: bool,

    /// Use a private cache that overwrites inconsistent entries instead of failing
    #[arg(long = "lenient", conflicts_with = "no_cache")]
    lenient: bool,

    /// Print cache statistics to stderr after rendering
    #[arg(long = "stats")]
    stats: bool,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn parse_dims(s: &str) -> Result<(i64, i64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH, got '{s}'"))?;
    let w: i64 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: i64 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if w < 1 || h < 1 {
        return Err(format!("rectangle must be at least 1x1, got {w}x{h}"));
    }
    Ok((w, h))
}

fn read_image(cli: &Cli) -> Result<VectorImage, String> {
    if let Some((w, h)) = cli.rectangle {
        return Ok(VectorImage::rectangle(w, h));
    }
    let text = if let Some(ref path) = cli.input {
        fs::read_to_string(path).map_err(|e| format!("cannot read '{}': {}", path, e))?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("cannot read stdin: {}", e))?;
        buf
    };
    parse(&text).map_err(|e| e.to_string())
}

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .format_timestamp(None)
        .parse_env(Env::new().filter("VECTOR_RASTER_LOG"))
        .init();

    let cli = Cli::parse();

    let image = match read_image(&cli) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    let config = RenderConfig {
        charset: if cli.unicode { CharSet::Unicode } else { CharSet::Ascii },
        cached: !cli.no_cache,
    };
    let private_cache;
    let cache = if cli.lenient {
        private_cache = GeometryCache::new(CachePolicy::Lenient);
        &private_cache
    } else {
        GeometryCache::global()
    };

    let rendered = match render_image(&image, &config, Some(cache)) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    if cli.stats {
        let stats = cache.stats();
        eprintln!(
            "cache: {} hits, {} misses, {} entries",
            stats.hits, stats.misses, stats.entries
        );
    }

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            eprintln!("error: cannot write '{}': {}", path, e);
            process::exit(1);
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            eprintln!("error: cannot flush stdout: {}", e);
            process::exit(1);
        }
    }
}
