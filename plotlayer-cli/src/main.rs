use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use plotlayer_chart::plots::register_builtin_plots;
use plotlayer_chart::registry::{PlotRegistry, Registries};
use plotlayer_common::canvas::CanvasDimensions;
use plotlayer_scenegraph::recorder::{RecordedScene, SceneRecorder};
use serde_json::Value;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a chart config and print the recorded scene as JSON
    Render {
        /// Path to a JSON chart config with a top level "type" key
        file_path: PathBuf,

        /// Write the scene to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value_t = 600.0)]
        width: f32,

        #[arg(long, default_value_t = 400.0)]
        height: f32,

        /// Number of render passes to run before taking the snapshot
        #[arg(short, long, default_value_t = 2)]
        passes: usize,
    },
    /// List the registered chart types
    Types,
}

fn plot_registry() -> anyhow::Result<PlotRegistry> {
    let mut registry = PlotRegistry::new(Arc::new(Registries::with_builtins()));
    register_builtin_plots(&mut registry)?;
    Ok(registry)
}

/// Split the chart type name off a config file's top level object
fn split_plot_type(mut config: Value) -> anyhow::Result<(String, Value)> {
    let Some(plot_type) = config
        .as_object_mut()
        .and_then(|object| object.remove("type"))
    else {
        bail!("config has no \"type\" key");
    };
    match plot_type {
        Value::String(plot_type) => Ok((plot_type, config)),
        other => bail!("\"type\" must be a string, found {other}"),
    }
}

/// Render `passes` passes onto `recorder` and snapshot the result. The layer
/// is destroyed whether or not a pass fails.
fn render_scene(
    registry: &PlotRegistry,
    recorder: &SceneRecorder,
    plot_type: &str,
    config: Value,
    passes: usize,
) -> anyhow::Result<RecordedScene> {
    let mut layer = registry.create(plot_type, Box::new(recorder.clone()), config)?;
    let rendered = (0..passes.max(1)).try_for_each(|pass| {
        layer
            .render()
            .map(|_| ())
            .with_context(|| format!("Render pass {pass} of {plot_type} failed"))
    });
    let scene = rendered.map(|()| recorder.snapshot());
    layer.destroy();
    scene
}

fn render(
    file_path: &Path,
    output: Option<&Path>,
    dimensions: CanvasDimensions,
    passes: usize,
) -> anyhow::Result<()> {
    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let config: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {}", file_path.display()))?;
    let (plot_type, config) = split_plot_type(config)
        .with_context(|| format!("Invalid chart config {}", file_path.display()))?;

    let registry = plot_registry()?;
    let recorder = SceneRecorder::new(dimensions);
    let scene = render_scene(&registry, &recorder, &plot_type, config, passes)?;

    let scene = serde_json::to_string_pretty(&scene)?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory {}", parent.display())
                })?;
            }
            fs::write(path, scene)?;
            info!("Saved scene to {}", path.display());
        }
        None => println!("{scene}"),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Render {
            file_path,
            output,
            width,
            height,
            passes,
        } => render(
            &file_path,
            output.as_deref(),
            CanvasDimensions::new(width, height),
            passes,
        ),
        Commands::Types => plot_registry().map(|registry| {
            for name in registry.plot_types() {
                println!("{name}");
            }
        }),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
