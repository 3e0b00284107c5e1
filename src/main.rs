mod config;
mod obj;
mod report;

use std::error::Error;
use std::fs;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Parser;
use cubist_geom::Vec3;
use cubist_mesh_cpu::{MeshOptions, ModelKind, decode_kind};

use crate::config::CubistConfig;
use crate::report::ModelReport;

#[derive(Parser, Debug)]
#[command(name = "cubist", version, about = "Decode a block model into face-culled meshes")]
struct Args {
    /// Model file to decode
    input: PathBuf,

    /// TOML file with a [mesh] table
    #[arg(long)]
    config: Option<PathBuf>,

    /// Model scale; non-uniform values collapse UVs to (0, 0)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"], allow_negative_numbers = true)]
    scale: Option<Vec<f32>>,

    /// Resolve visibility and build meshes in parallel
    #[arg(long)]
    parallel: bool,

    /// Payload kind: model or avatar
    #[arg(long, default_value = "model")]
    kind: ModelKind,

    /// Write all block meshes to a Wavefront OBJ file
    #[arg(long)]
    obj: Option<PathBuf>,
}

impl Args {
    /// File values first, command-line flags on top.
    fn mesh_options(&self, cfg: &CubistConfig) -> MeshOptions {
        let mut opts = cfg.mesh.to_options();
        if let Some([x, y, z]) = self.scale.as_deref().and_then(|s| <[f32; 3]>::try_from(s).ok()) {
            opts.scale = Vec3::new(x, y, z);
        }
        opts.parallel |= self.parallel;
        opts
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let cfg = match &args.config {
        Some(path) => config::load_config_from_path(path)?,
        None => CubistConfig::default(),
    };
    let opts = args.mesh_options(&cfg);
    if !opts.scale.is_uniform() {
        log::warn!(
            "non-uniform scale ({}, {}, {}): texture coordinates collapse to (0, 0)",
            opts.scale.x,
            opts.scale.y,
            opts.scale.z
        );
    }

    let data = fs::read(&args.input)?;
    log::info!("read {} byte(s) from {}", data.len(), args.input.display());
    let meshes = decode_kind(args.kind, &data, &opts)?;

    let report = ModelReport::from_meshes(&meshes);
    report.log();

    if let Some(path) = &args.obj {
        let file = fs::File::create(path)?;
        obj::write_obj(BufWriter::new(file), &meshes)?;
        log::info!("wrote {}", path.display());
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
