//! Blobkit CLI - Command-line interface for procedural blob generation

mod settings;

use anyhow::{Context, Result};
use blobkit_core::prelude::*;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use settings::{Settings, load_settings, save_settings, settings_path};
use std::path::{Component, Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Vertex counts offered by the editor
const EDGE_RANGE: std::ops::RangeInclusive<usize> = 3..=30;

#[derive(Parser)]
#[command(name = "blobkit")]
#[command(about = "Organic blob shapes, smooth outlines and grain textures", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log generation details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a blob outline
    Blob {
        /// Number of vertices (3-30)
        #[arg(short, long)]
        edges: Option<usize>,

        /// 0 = spiky, 1 = round
        #[arg(short, long)]
        smoothness: Option<f64>,

        /// Radius of the ideal circle
        #[arg(short, long)]
        radius: Option<f64>,

        /// Extra per-point jitter after generation
        #[arg(long, default_value = "0")]
        jitter: f64,

        /// Fill type: gradient, solid or outline
        #[arg(long)]
        fill: Option<FillType>,

        /// Preset palette index (0-5)
        #[arg(long, conflicts_with_all = ["color1", "color2"])]
        palette: Option<usize>,

        /// First colour (#RRGGBB)
        #[arg(long)]
        color1: Option<Color>,

        /// Second colour (#RRGGBB), used by gradients
        #[arg(long)]
        color2: Option<Color>,

        /// Gradient angle in degrees
        #[arg(long)]
        angle: Option<f64>,

        /// Random seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the generated points as JSON instead of path data
        #[arg(long)]
        points: bool,

        /// Output SVG file (prints path data to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate a grain noise texture
    Noise {
        /// Texture width in samples
        #[arg(long, default_value = "256")]
        width: u32,

        /// Texture height in samples
        #[arg(long, default_value = "256")]
        height: u32,

        /// Spread around mid-gray (0 = flat)
        #[arg(short, long)]
        intensity: Option<f64>,

        /// Pixelated magnification of each sample
        #[arg(long)]
        size: Option<u32>,

        /// Random seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,

        /// Output PNG file
        #[arg(short, long, default_value = "noise.png")]
        output: PathBuf,
    },

    /// Render a canvas document (JSON) to SVG
    Canvas {
        /// Canvas document
        document: PathBuf,

        /// Output SVG file
        #[arg(short, long, default_value = "canvas.svg")]
        output: PathBuf,

        /// Also write the grain overlay to this PNG and reference it
        #[arg(long)]
        noise: Option<PathBuf>,

        /// Random seed for the grain (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Create an empty canvas document
    NewCanvas {
        /// Output JSON file
        #[arg(short, long, default_value = "canvas.json")]
        output: PathBuf,

        /// Number of random blobs to add
        #[arg(long, default_value = "0")]
        blobs: usize,

        /// Horizontal and vertical stretch applied to every added blob
        #[arg(long, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
        stretch: Option<Vec<f64>>,

        /// Random seed (random if omitted)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show or reset persisted settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the effective settings
    Show,
    /// Write default settings
    Reset,
}

/// Style overrides collected from `blobkit blob`
struct StyleArgs {
    fill: Option<FillType>,
    palette: Option<usize>,
    color1: Option<Color>,
    color2: Option<Color>,
    angle: Option<f64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = load_settings(cli.config.as_deref());

    match cli.command {
        Commands::Blob {
            edges,
            smoothness,
            radius,
            jitter,
            fill,
            palette,
            color1,
            color2,
            angle,
            seed,
            points,
            output,
        } => {
            let config = PolygonConfig::new(
                edges.unwrap_or(settings.edges).clamp(*EDGE_RANGE.start(), *EDGE_RANGE.end()),
                smoothness.unwrap_or(settings.smoothness).clamp(0.0, 1.0),
            )
            .with_radius(radius.unwrap_or(settings.radius));
            let style = resolve_style(
                &settings,
                StyleArgs {
                    fill,
                    palette,
                    color1,
                    color2,
                    angle,
                },
            )?;
            run_blob(&settings, &config, jitter, style, seed, points, output.as_deref())?;
        }
        Commands::Noise {
            width,
            height,
            intensity,
            size,
            seed,
            output,
        } => {
            let config = NoiseTextureConfig::new(width, height)
                .with_intensity(intensity.unwrap_or(settings.noise_intensity));
            let size = size.unwrap_or(settings.noise_size);
            run_noise(&config, size, seed, &settings.resolve_output(&output))?;
        }
        Commands::Canvas {
            document,
            output,
            noise,
            seed,
        } => {
            let noise = noise.map(|p| settings.resolve_output(&p));
            run_canvas(&document, &settings.resolve_output(&output), noise.as_deref(), seed)?;
        }
        Commands::NewCanvas {
            output,
            blobs,
            stretch,
            seed,
        } => {
            let stretch = match stretch.as_deref() {
                Some(&[width, height]) => (width, height),
                _ => (1.0, 1.0),
            };
            run_new_canvas(&settings, &settings.resolve_output(&output), blobs, stretch, seed)?;
        }
        Commands::Settings { action } => match action {
            SettingsAction::Show => {
                let location = cli.config.clone().or_else(settings_path);
                if let Some(path) = location {
                    eprintln!("Settings file: {}", path.display());
                }
                println!("{}", serde_json::to_string_pretty(&settings)?);
            }
            SettingsAction::Reset => {
                let path = save_settings(&Settings::default(), cli.config.as_deref())?;
                println!("Reset settings at {}", path.display());
            }
        },
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    // Log to stderr only - stdout carries path data
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .init();
}

/// Seeded RNG, drawing and logging a seed when none is given
fn seeded_rng(seed: Option<u64>) -> StdRng {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!("Using seed {}", seed);
    StdRng::seed_from_u64(seed)
}

fn resolve_style(settings: &Settings, args: StyleArgs) -> Result<BlobStyle> {
    let mut style = settings.style();
    if let Some(index) = args.palette {
        style = BlobStyle::palette(index)
            .with_context(|| format!("Palette index must be below {}", PALETTES.len()))?
            .with_fill(style.fill)
            .with_gradient_angle(style.gradient_angle);
    }
    if let Some(fill) = args.fill {
        style.fill = fill;
    }
    if let Some(c) = args.color1 {
        style.color1 = c;
    }
    if let Some(c) = args.color2 {
        style.color2 = c;
    }
    if let Some(angle) = args.angle {
        style.gradient_angle = angle;
    }
    Ok(style)
}

fn run_blob(
    settings: &Settings,
    config: &PolygonConfig,
    jitter_amount: f64,
    style: BlobStyle,
    seed: Option<u64>,
    print_points: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mut rng = seeded_rng(seed);

    let mut ring = generate(config, &mut rng);
    if jitter_amount != 0.0 {
        ring = jitter(&ring, jitter_amount, &mut rng);
    }
    let path = ring.to_path();

    if print_points {
        let points: Vec<[f64; 2]> = ring.iter().map(|p| [p.x, p.y]).collect();
        println!("{}", serde_json::to_string(&points)?);
    }

    match output {
        Some(output) => {
            let output = settings.resolve_output(output);
            export_svg(&blob_svg(&path, &style), &output)?;
            println!("Exported to: {}", output.display());
        }
        None if !print_points => println!("{path}"),
        None => {}
    }

    Ok(())
}

fn run_noise(config: &NoiseTextureConfig, size: u32, seed: Option<u64>, output: &Path) -> Result<()> {
    let mut rng = seeded_rng(seed);

    println!(
        "Generating {}x{} noise (intensity {}, size {})...",
        config.width, config.height, config.intensity, size
    );
    let buffer = generate_noise(config, &mut rng);
    export_png(&buffer, size, output)?;
    println!("Exported to: {}", output.display());

    Ok(())
}

fn run_canvas(document: &Path, output: &Path, noise: Option<&Path>, seed: Option<u64>) -> Result<()> {
    let canvas = Canvas::load(document)
        .with_context(|| format!("Failed to load canvas {}", document.display()))?;

    println!(
        "Rendering {} blob(s) on a {}x{} canvas...",
        canvas.len(),
        canvas.width,
        canvas.height
    );

    let svg = match noise {
        Some(noise_path) => {
            let mut rng = seeded_rng(seed);
            let grain = canvas.noise_texture(&mut rng);
            export_png(&grain, canvas.noise.size, noise_path)?;
            println!("Grain overlay: {}", noise_path.display());
            canvas.to_svg_with_noise(&overlay_href(output, noise_path))
        }
        None => canvas.to_svg(),
    };

    export_svg(&svg, output)?;
    println!("Exported to: {}", output.display());

    Ok(())
}

fn run_new_canvas(
    settings: &Settings,
    output: &Path,
    blobs: usize,
    (width, height): (f64, f64),
    seed: Option<u64>,
) -> Result<()> {
    let mut canvas = Canvas::new();
    canvas.noise = NoiseOverlay {
        intensity: settings.noise_intensity,
        opacity: settings.noise_opacity,
        size: settings.noise_size,
    };

    if blobs > 0 {
        let mut rng = seeded_rng(seed);
        for i in 0..blobs {
            let style = BlobStyle::palette(i % PALETTES.len())
                .unwrap_or_default()
                .with_fill(settings.fill);
            let blob = BlobConfig::generate(settings.edges, settings.smoothness, style, &mut rng)
                .with_stretch(width, height);
            canvas.apply(CanvasCommand::Add(blob))?;
        }
    }

    canvas
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Created canvas: {}", output.display());

    Ok(())
}

/// Reference the overlay relative to the directory holding the SVG
///
/// Viewers resolve `href` against the SVG file, not the working directory.
fn overlay_href(svg: &Path, overlay: &Path) -> String {
    let base = lexical_components(svg.parent().unwrap_or(Path::new("")));
    let target = lexical_components(overlay);

    let shared = base.iter().zip(&target).take_while(|(a, b)| a == b).count();
    if shared == 0 {
        // Different roots (e.g. another drive): only an absolute path works
        return target.join("/");
    }

    let mut parts = vec!["..".to_string(); base.len() - shared];
    parts.extend_from_slice(&target[shared..]);
    parts.join("/")
}

/// Absolute path split into components with `.` and `..` folded away
fn lexical_components(path: &Path) -> Vec<String> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut parts = Vec::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop();
            }
            Component::RootDir => parts.push(String::new()),
            Component::Prefix(prefix) => parts.push(prefix.as_os_str().to_string_lossy().into_owned()),
            Component::Normal(name) => parts.push(name.to_string_lossy().into_owned()),
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn blob_flags_parse() {
        let cli = Cli::try_parse_from([
            "blobkit", "blob", "-e", "7", "-s", "0.25", "--fill", "outline", "--color1", "#112233",
            "--seed", "4",
        ])
        .unwrap();
        let Commands::Blob {
            edges,
            smoothness,
            fill,
            color1,
            seed,
            ..
        } = cli.command
        else {
            panic!("expected blob command");
        };
        assert_eq!(edges, Some(7));
        assert_eq!(smoothness, Some(0.25));
        assert_eq!(fill, Some(FillType::Outline));
        assert_eq!(color1, Some(Color::rgb(0x11, 0x22, 0x33)));
        assert_eq!(seed, Some(4));
    }

    #[test]
    fn new_canvas_takes_a_stretch_pair() {
        let cli = Cli::try_parse_from([
            "blobkit", "new-canvas", "--blobs", "2", "--stretch", "1.5", "0.75",
        ])
        .unwrap();
        let Commands::NewCanvas { blobs, stretch, .. } = cli.command else {
            panic!("expected new-canvas command");
        };
        assert_eq!(blobs, 2);
        assert_eq!(stretch, Some(vec![1.5, 0.75]));

        assert!(Cli::try_parse_from(["blobkit", "new-canvas", "--stretch", "2"]).is_err());
    }

    #[test]
    fn new_canvas_writes_stretched_blobs() {
        let path = std::env::temp_dir().join("blobkit_test_new_canvas.json");
        run_new_canvas(&Settings::default(), &path, 3, (1.5, 0.75), Some(8)).unwrap();

        let canvas = Canvas::load(&path).unwrap();
        assert_eq!(canvas.len(), 3);
        for placed in &canvas.blobs {
            assert_eq!((placed.blob.width, placed.blob.height), (1.5, 0.75));
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn bad_color_is_rejected_by_parser() {
        assert!(Cli::try_parse_from(["blobkit", "blob", "--color1", "red"]).is_err());
    }

    #[test]
    fn palette_and_colors_conflict() {
        assert!(
            Cli::try_parse_from(["blobkit", "blob", "--palette", "1", "--color1", "#000000"])
                .is_err()
        );
    }

    #[test]
    fn style_flags_override_settings() {
        let style = resolve_style(
            &Settings::default(),
            StyleArgs {
                fill: Some(FillType::Solid),
                palette: Some(4),
                color1: None,
                color2: None,
                angle: Some(30.0),
            },
        )
        .unwrap();
        assert_eq!(style.fill, FillType::Solid);
        assert_eq!(style.color1.to_string(), "#90EE90");
        assert_eq!(style.gradient_angle, 30.0);
    }

    #[test]
    fn out_of_range_palette_is_an_error() {
        let args = StyleArgs {
            fill: None,
            palette: Some(99),
            color1: None,
            color2: None,
            angle: None,
        };
        assert!(resolve_style(&Settings::default(), args).is_err());
    }

    #[test]
    fn overlay_href_resolves_from_the_svg_directory() {
        assert_eq!(
            overlay_href(Path::new("out/canvas.svg"), Path::new("out/grain.png")),
            "grain.png"
        );
        assert_eq!(
            overlay_href(Path::new("out/canvas.svg"), Path::new("other/grain.png")),
            "../other/grain.png"
        );
        assert_eq!(
            overlay_href(Path::new("canvas.svg"), Path::new("out/grain.png")),
            "out/grain.png"
        );
        assert_eq!(
            overlay_href(Path::new("a/b/canvas.svg"), Path::new("a/./grain.png")),
            "../grain.png"
        );
        assert_eq!(
            overlay_href(Path::new("/srv/x/canvas.svg"), Path::new("/srv/y/grain.png")),
            "../y/grain.png"
        );
    }
}
