//! Demo launcher: `tessel-demos <triangle|cube|scene>`.

mod args;
mod common;
mod cube;
mod scene;
mod spin;
mod triangle;

use anyhow::Result;
use clap::Parser;
use tessel_engine::device::GpuInit;
use tessel_engine::logging::{LoggingConfig, init_logging};
use tessel_engine::render::TextureImage;
use tessel_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use args::{Cli, Demo};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    let config = RuntimeConfig {
        title: cli.demo.title().to_string(),
        initial_size: LogicalSize::new(cli.width, cli.height),
    };

    let gpu_init = GpuInit {
        present_mode: if cli.no_vsync {
            wgpu::PresentMode::AutoNoVsync
        } else {
            wgpu::PresentMode::Fifo
        },
        ..GpuInit::default()
    };

    log::info!("starting {:?}", cli.demo);

    match cli.demo {
        Demo::Triangle => Runtime::run(config, gpu_init, triangle::demo()),
        Demo::Cube => Runtime::run(config, gpu_init, cube::demo()),
        Demo::Scene { texture } => {
            let image = match texture {
                Some(path) => TextureImage::from_path(path)?,
                None => TextureImage::uv_grid(512, 8),
            };
            Runtime::run(config, gpu_init, scene::SceneDemo::new(image))
        }
    }
}
