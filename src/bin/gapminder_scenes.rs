use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use gapminder_scenes::render::{FrameSurface, SvgRenderer};
use gapminder_scenes::{Dataset, Presentation, PresentationConfig, load_dataset_async, telemetry};

#[derive(Parser)]
#[command(
    name = "gapminder-scenes",
    version,
    about = "Scene-based Gapminder life-expectancy presentation"
)]
struct Cli {
    /// JSON presentation config (viewport, margins, tooltip offset, loader options)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject rows whose numeric columns are not finite numbers
    #[arg(long, global = true)]
    strict: bool,

    /// Font family written into the SVG documents
    #[arg(long, global = true, default_value = "sans-serif")]
    font_family: String,

    /// Log per-scene detail (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every scene to `scene-<n>.svg`
    Export {
        /// Path to the gapminder CSV file
        #[arg()]
        data: PathBuf,

        /// Directory the SVG files are written to
        #[arg(short, long, default_value = "output")]
        out_dir: PathBuf,
    },

    /// Step through the scenes interactively, rewriting one SVG file
    ///
    /// Commands on stdin: `next` (or an empty line), `hover <x> <y>`, `leave`, `quit`.
    Present {
        /// Path to the gapminder CSV file
        #[arg()]
        data: PathBuf,

        /// SVG file rewritten after each command
        #[arg(short, long, default_value = "scene.svg")]
        output: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _ = if cli.verbose {
        telemetry::init_tracing("debug")
    } else {
        telemetry::init_default_tracing()
    };

    let mut config = match &cli.config {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read config {}", path.display()))?;
            PresentationConfig::from_json_str(&raw)?
        }
        None => PresentationConfig::default(),
    };
    if cli.strict {
        config = config.with_validate_numeric_fields(true);
    }

    let renderer = SvgRenderer::new().with_font_family(cli.font_family);
    match cli.command {
        Commands::Export { data, out_dir } => {
            let dataset = load(&data, &config).await?;
            export(dataset, &config, renderer, &out_dir).await
        }
        Commands::Present { data, output } => {
            let dataset = load(&data, &config).await?;
            present(dataset, &config, renderer, &output).await
        }
    }
}

async fn load(path: &Path, config: &PresentationConfig) -> Result<Dataset> {
    match load_dataset_async(path, config.load).await {
        Ok(dataset) => {
            info!(rows = dataset.len(), path = %path.display(), "dataset loaded");
            Ok(dataset)
        }
        Err(err) => {
            error!(error = %err, "dataset load failed; no scene will be rendered");
            Err(err).context("loading dataset")
        }
    }
}

async fn export(
    dataset: Dataset,
    config: &PresentationConfig,
    mut renderer: SvgRenderer,
    out_dir: &Path,
) -> Result<()> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let mut presentation = Presentation::new(dataset, FrameSurface::new(), config)?;
    let scene_count = presentation.registry().len();

    let mut kind = presentation.start()?;
    for step in 0..scene_count {
        if step > 0 {
            kind = presentation.next_scene()?;
        }
        let Some(frame) = presentation.composed_frame() else {
            warn!(scene = ?kind, "scene produced no chart");
            continue;
        };
        let path = out_dir.join(format!("scene-{}.svg", kind.number()));
        let document = renderer.render_to_string(&frame)?;
        tokio::fs::write(&path, document)
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("{}", path.display());
    }
    Ok(())
}

async fn present(
    dataset: Dataset,
    config: &PresentationConfig,
    mut renderer: SvgRenderer,
    output: &Path,
) -> Result<()> {
    let mut presentation = Presentation::new(dataset, FrameSurface::new(), config)?;

    let kind = presentation.start()?;
    write_current(&presentation, &mut renderer, output).await?;
    println!("scene {}: {}", kind.number(), kind.title());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut words = line.split_whitespace();
        match words.next() {
            None | Some("next") => {
                let kind = presentation.next_scene()?;
                println!("scene {}: {}", kind.number(), kind.title());
            }
            Some("hover") => {
                let (Some(x), Some(y)) = (words.next(), words.next()) else {
                    eprintln!("usage: hover <x> <y>");
                    continue;
                };
                let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) else {
                    eprintln!("hover coordinates must be numbers");
                    continue;
                };
                let transition = presentation.pointer_move(x, y);
                println!("{transition:?}");
            }
            Some("leave") => {
                let transition = presentation.pointer_leave();
                println!("{transition:?}");
            }
            Some("quit") | Some("exit") => break,
            Some(other) => {
                eprintln!("unknown command `{other}`");
                continue;
            }
        }
        write_current(&presentation, &mut renderer, output).await?;
    }
    Ok(())
}

async fn write_current(
    presentation: &Presentation<FrameSurface>,
    renderer: &mut SvgRenderer,
    output: &Path,
) -> Result<()> {
    let Some(frame) = presentation.composed_frame() else {
        bail!("no chart on the surface");
    };
    let document = renderer.render_to_string(&frame)?;
    tokio::fs::write(output, document)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;
    Ok(())
}
