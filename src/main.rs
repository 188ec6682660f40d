use anyhow::Result;
use clap::Parser;

use orrery_render::{RenderOptions, SphereOptions};

#[derive(Parser)]
#[command(name = "orrery")]
#[command(about = "Stylized real-time solar system renderer")]
struct Cli {
    /// Window width in pixels
    #[arg(long, default_value = "1280")]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value = "720")]
    height: u32,

    /// Sphere tessellation: horizontal bands
    #[arg(long, default_value = "32")]
    stacks: u32,

    /// Sphere tessellation: vertical wedges
    #[arg(long, default_value = "64")]
    slices: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    orrery_render::run(RenderOptions {
        width: cli.width,
        height: cli.height,
        sphere: SphereOptions {
            stacks: cli.stacks,
            slices: cli.slices,
        },
    })
}
