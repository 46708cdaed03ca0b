//! Command line arguments.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Runs one of the tessel demos in a window.
#[derive(Parser, Debug)]
#[command(name = "tessel-demos", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub demo: Demo,

    /// Initial window width in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,

    /// Initial window height in logical pixels.
    #[arg(long, default_value_t = 720.0)]
    pub height: f64,

    /// Log filter (env_logger syntax); overrides RUST_LOG.
    #[arg(long)]
    pub log: Option<String>,

    /// Present without waiting for vertical sync.
    #[arg(long)]
    pub no_vsync: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Demo {
    /// Colored triangle spinning around Y.
    Triangle,
    /// Colored box tumbling around X and Y.
    Cube,
    /// Textured, lit composed scene rotated with W/A/S/D.
    Scene {
        /// Diffuse texture; a procedural UV grid is used when omitted.
        #[arg(long)]
        texture: Option<PathBuf>,
    },
}

impl Demo {
    pub fn title(&self) -> &'static str {
        match self {
            Demo::Triangle => "tessel: triangle",
            Demo::Cube => "tessel: cube",
            Demo::Scene { .. } => "tessel: scene",
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_scene_with_texture_and_flags() {
        let cli = Cli::parse_from([
            "tessel-demos",
            "--width",
            "640",
            "--no-vsync",
            "scene",
            "--texture",
            "crate.png",
        ]);
        assert_eq!(cli.width, 640.0);
        assert_eq!(cli.height, 720.0);
        assert!(cli.no_vsync);
        assert_eq!(
            cli.demo,
            Demo::Scene {
                texture: Some(PathBuf::from("crate.png"))
            }
        );
    }

    #[test]
    fn demo_is_required() {
        assert!(Cli::try_parse_from(["tessel-demos"]).is_err());
    }
}
