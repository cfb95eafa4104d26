#![deny(unsafe_code)]
//! CLI binary for the canvas-gallery texture synthesizer.
//!
//! Subcommands:
//! - `render <style>`: paint one texture and write a PNG
//! - `catalog`: paint every catalog artwork through the texture cache
//! - `list`: print the available styles
//! - `inspect <style>`: summarize a style's draw calls

mod error;
mod logging;

use canvas_gallery_core::{
    ArtworkDescriptor, RecordingSurface, Rgb, StyleKind, SynthConfig, Texture, Xorshift64,
};
use canvas_gallery_scene::{Catalog, Gallery, OverlayMode, TextureCache};
use canvas_gallery_styles::brush::{BrushProfile, BrushSettings};
use canvas_gallery_styles::snapshot::write_png;
use canvas_gallery_styles::{list_styles, paint, PaintContext};
use clap::{Parser, Subcommand};
use error::CliError;
use logging::{init_logging, LoggingConfig};
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser)]
#[command(name = "canvas-gallery", about = "Procedural painting textures for a virtual gallery")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Synthesis config file (JSON). Missing files fall back to defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter in env_logger syntax; overrides RUST_LOG.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Paint one texture and write a PNG.
    Render {
        /// Style key (e.g. "starry").
        style: String,

        /// Base color as #RRGGBB.
        #[arg(short, long, default_value = "#1a237e")]
        color: String,

        /// Texture width in pixels; defaults to the configured resolution.
        #[arg(short = 'W', long)]
        width: Option<i32>,

        /// Texture height in pixels; defaults to the configured resolution.
        #[arg(short = 'H', long)]
        height: Option<i32>,

        /// Output file path.
        #[arg(short, long, default_value = "output.png")]
        output: PathBuf,

        /// Use the preview resolution and the lighter stroke overlay.
        #[arg(long)]
        preview: bool,
    },
    /// Paint every artwork in the catalog.
    Catalog {
        /// Directory for the PNGs.
        #[arg(short, long, default_value = "gallery")]
        output_dir: PathBuf,

        /// Catalog JSON file; defaults to the bundled seven pieces.
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Override the configured resolution.
        #[arg(short, long)]
        resolution: Option<i32>,

        /// Render preview textures instead of full ones.
        #[arg(long)]
        preview: bool,
    },
    /// List available styles.
    List,
    /// Print draw-call counts for one style.
    Inspect {
        /// Style key (e.g. "iris").
        style: String,

        #[arg(short, long, default_value = "#1a237e")]
        color: String,

        #[arg(short = 'W', long, default_value_t = 512)]
        width: i32,

        #[arg(short = 'H', long, default_value_t = 512)]
        height: i32,
    },
}

fn load_config(path: Option<&Path>) -> Result<SynthConfig, CliError> {
    match path {
        Some(path) => Ok(SynthConfig::load(path)?),
        None => Ok(SynthConfig::default()),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog, CliError> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .map_err(|e| CliError::Io(format!("{}: {e}", path.display())))?;
            Ok(Catalog::from_json(&json)?)
        }
        None => Ok(Catalog::bundled()),
    }
}

fn texture_summary(texture: &Texture, output: &Path) -> serde_json::Value {
    serde_json::json!({
        "style": texture.style(),
        "color": texture.color(),
        "width": texture.width(),
        "height": texture.height(),
        "hash": format!("{:016x}", texture.content_hash()),
        "output": output.display().to_string(),
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::List => {
            let styles = list_styles();
            if cli.json {
                let info = serde_json::json!({ "styles": styles });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Styles:");
                for name in styles {
                    println!("  {name}");
                }
            }
        }
        Command::Render {
            style,
            color,
            width,
            height,
            output,
            preview,
        } => {
            let style = StyleKind::parse(&style)?;
            let color = Rgb::from_hex(&color)?;
            let (profile, default_size) = if preview {
                (BrushProfile::Preview, config.preview_resolution)
            } else {
                (BrushProfile::Full, config.resolution)
            };
            let descriptor = ArtworkDescriptor::new(
                color,
                style,
                width.unwrap_or(default_size),
                height.unwrap_or(default_size),
            );
            descriptor.validate()?;

            let cache = TextureCache::new(
                BrushSettings::from_json(&config.params, profile),
                config.seed_policy,
            );
            let texture = cache.get_or_create(&descriptor);
            write_png(&texture, &output)?;

            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&texture_summary(&texture, &output))?
                );
            } else {
                eprintln!(
                    "rendered {style} {} ({}x{}) -> {}",
                    color.to_hex(),
                    texture.width(),
                    texture.height(),
                    output.display()
                );
            }
        }
        Command::Catalog {
            output_dir,
            catalog,
            resolution,
            preview,
        } => {
            let mut config = config;
            if let Some(resolution) = resolution {
                if preview {
                    config.preview_resolution = resolution;
                } else {
                    config.resolution = resolution;
                }
                config.validate()?;
            }
            let catalog = load_catalog(catalog.as_deref())?;
            std::fs::create_dir_all(&output_dir)
                .map_err(|e| CliError::Io(format!("{}: {e}", output_dir.display())))?;

            let gallery = Gallery::new(catalog, &config, OverlayMode::default());
            if !preview {
                gallery.warm();
            }

            let mut written = Vec::new();
            for artwork in gallery.catalog().iter() {
                let texture = if preview {
                    gallery.preview_texture(artwork.id)
                } else {
                    gallery.texture(artwork.id)
                };
                let Some(texture) = texture else { continue };
                let path = output_dir.join(format!("{:02}-{}.png", artwork.id, texture.style()));
                write_png(&texture, &path)?;
                if !cli.json {
                    eprintln!("{} -> {}", artwork.title, path.display());
                }
                written.push(texture_summary(&texture, &path));
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&written)?);
            } else {
                eprintln!("rendered {} artworks", written.len());
            }
        }
        Command::Inspect {
            style,
            color,
            width,
            height,
        } => {
            let style = StyleKind::parse(&style)?;
            let color = Rgb::from_hex(&color)?;
            let descriptor = ArtworkDescriptor::new(color, style, width, height);
            descriptor.validate()?;

            let brush = BrushSettings::from_json(&config.params, BrushProfile::Full);
            let mut rng = Xorshift64::new(descriptor.seed());
            let mut ctx = PaintContext {
                rng: &mut rng,
                base: color,
                brush: &brush,
            };
            let mut surface = RecordingSurface::new(f64::from(width), f64::from(height));
            paint(&mut surface, style, &mut ctx);
            let counts = surface.counts();

            if cli.json {
                let info = serde_json::json!({
                    "style": style,
                    "total": surface.len(),
                    "counts": counts,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{style} at {width}x{height}: {} draw calls", surface.len());
                for (kind, n) in counts {
                    println!("  {kind:?}: {n}");
                }
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
