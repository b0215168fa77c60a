//! texload CLI - inspect texture containers and their GPU upload plans.
//!
//! This is the main entry point for the texload command-line application.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use texload::ktx2::Ktx2Texture;
use texload::prelude::*;

/// texload - texture container inspection tool
#[derive(Parser)]
#[command(name = "texload")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the header, shape and level index of a texture
    Info {
        /// Input texture (KTX2, PNG, JPEG or BMP)
        #[arg(short, long, env = "TEXLOAD_INPUT")]
        input: PathBuf,
    },

    /// Print the per-level upload layout
    Plan {
        /// Input texture (KTX2, PNG, JPEG or BMP)
        #[arg(short, long, env = "TEXLOAD_INPUT")]
        input: PathBuf,

        /// Upload only this many levels, base first
        #[arg(short, long)]
        mip_count: Option<u32>,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }
        Commands::Plan {
            input,
            mip_count,
            json,
        } => {
            cmd_plan(&input, mip_count, json)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_info(input: &Path) -> Result<()> {
    let data = fs::read(input).context("Failed to read input file")?;

    if !Ktx2Texture::is_ktx2(&data) {
        let source = texload::load(data).context("Failed to decode image")?;
        let extent = source.extent();
        println!("Image:      {}", input.display());
        println!("Format:     {:?}", source.format());
        println!("Size:       {}x{}", extent.width, extent.height);
        println!("Levels:     {}", source.level_count());
        return Ok(());
    }

    let texture = Ktx2Texture::from_vec(data).context("Failed to parse KTX2 container")?;
    let header = texture.header();

    println!("KTX2:       {}", input.display());
    println!("vkFormat:   {} ({:?})", header.vk_format, texture.format());
    println!(
        "Pixels:     {}x{}x{}",
        header.pixel_width, header.pixel_height, header.pixel_depth
    );
    println!(
        "Layers:     {}, faces: {}",
        header.layer_count, header.face_count
    );
    println!(
        "Dimension:  {:?} (view {:?})",
        texture.dimension(),
        texture.view_dimension()
    );
    println!(
        "Block:      {}x{}, {} bytes",
        texture.layout_info().block_width(),
        texture.layout_info().block_height(),
        texture.layout_info().block_footprint
    );
    println!(
        "Levels:     {} (header: {})",
        texture.level_count(),
        header.level_count
    );

    println!("\n{:>4} {:>12} {:>12}", "mip", "offset", "length");
    for (mip, level) in texture.levels().iter().enumerate() {
        println!(
            "{:>4} {:>12} {:>12}",
            mip, level.byte_offset, level.byte_length
        );
    }

    Ok(())
}

fn cmd_plan(input: &Path, mip_count: Option<u32>, as_json: bool) -> Result<()> {
    let source = texload::open(input).context("Failed to load texture")?;

    let options = UploadOptions {
        label: input.file_name().and_then(|name| name.to_str()),
        mip_count,
        usage: TextureUsages::TEXTURE_BINDING,
    };
    let plan = UploadPlan::build(&source, &options).context("Failed to plan upload")?;

    if as_json {
        let levels = plan
            .levels
            .iter()
            .map(|level| {
                let layout = LevelLayout {
                    mip: level.mip,
                    layout: level.layout,
                    extent: level.extent,
                };
                Ok(json!({
                    "level": serde_json::to_value(layout)?,
                    "bytes": level.data.len(),
                }))
            })
            .collect::<Result<Vec<_>, serde_json::Error>>()?;

        let output = json!({
            "format": format!("{:?}", plan.descriptor.format),
            "dimension": serde_json::to_value(plan.descriptor.dimension)?,
            "size": serde_json::to_value(plan.descriptor.size)?,
            "mip_level_count": plan.descriptor.mip_level_count,
            "total_bytes": plan.total_bytes(),
            "levels": levels,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let size = plan.descriptor.size;
    println!(
        "{:?} {:?} {}x{}x{}, {} of {} levels",
        plan.descriptor.format,
        plan.descriptor.dimension,
        size.width,
        size.height,
        size.depth_or_array_layers,
        plan.descriptor.mip_level_count,
        source.level_count()
    );
    println!(
        "\n{:>4} {:>16} {:>10} {:>8} {:>12}",
        "mip", "extent", "row bytes", "rows", "bytes"
    );
    for level in &plan.levels {
        let extent = format!(
            "{}x{}x{}",
            level.extent.width, level.extent.height, level.extent.depth_or_array_layers
        );
        println!(
            "{:>4} {:>16} {:>10} {:>8} {:>12}",
            level.mip,
            extent,
            level.layout.bytes_per_row,
            level.layout.rows_per_image,
            level.data.len()
        );
    }

    info!(total_bytes = plan.total_bytes(), "upload planned");

    Ok(())
}
