//! Export a vector scene as ROS map files.
//!
//! # Usage
//!
//! ```bash
//! rekha-export scenes/office.yaml --output maps/ --raw
//! ```
//!
//! # Output Files
//!
//! - `<name>.pgm`: occupancy image
//! - `<name>.yaml`: map_server metadata
//! - `<name>_planner.npy`: 0/1 obstacle array
//! - `<name>_raw.npy`: unmodified cell values (with `--raw`)

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;

use rekha::io::DirectorySink;
use rekha::{ExportConfig, MapExport, SceneDocument};

#[derive(Parser)]
#[command(name = "rekha-export")]
#[command(about = "Rasterize a vector scene into PGM, YAML and NPY map files")]
struct Args {
    /// Scene file (YAML or JSON)
    scene: PathBuf,

    /// Output directory (overrides the config file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export config file (default: configs/export.yaml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write <name>_raw.npy
    #[arg(long)]
    raw: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("Export failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => ExportConfig::load(path)?,
        None => ExportConfig::load_default()?,
    };
    if let Some(dir) = &args.output {
        config.output_dir = dir.display().to_string();
    }
    if args.raw {
        config.write_raw_array = true;
    }

    let scene = SceneDocument::load(&args.scene)?;
    let info = &scene.map_info;
    log::info!(
        "Scene '{}': {}x{} m at {} m/cell, {} objects",
        info.name,
        info.width,
        info.height,
        info.resolution,
        scene.objects.len()
    );

    let export = MapExport::build(info, &scene.objects, &config)?;
    let stats = export.stats();
    let counts = export.grid().count_by_state();
    log::info!(
        "Grid {}x{}: {} occupied, {} free ({} objects rasterized, {} excluded, {} skipped)",
        export.grid().width(),
        export.grid().height(),
        counts.occupied,
        counts.free,
        stats.objects_rasterized,
        stats.objects_excluded,
        stats.objects_degenerate
    );

    let mut sink = DirectorySink::create(&config.output_dir)?;
    export.deliver(&mut sink)?;
    log::info!(
        "Exported {} files to {}",
        export.artifacts().len(),
        sink.dir().display()
    );

    Ok(())
}
