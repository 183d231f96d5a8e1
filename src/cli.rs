use clap::{Parser, ValueEnum};
use log::LevelFilter;

use canvastrace::material::SpecularGating;

/// Custom enum for log levels that can be used with clap's ValueEnum
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convert our custom LogLevel enum to log crate's LevelFilter
impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Which exercise to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Solid triangle over a clear color
    Triangle,
    /// Fresh random noise every frame
    Noise,
    /// Phong-lit ray-traced sphere
    Sphere,
}

/// Specular behaviour on surfaces facing away from the light
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Gating {
    Coupled,
    Independent,
}

impl From<Gating> for SpecularGating {
    fn from(gating: Gating) -> Self {
        match gating {
            Gating::Coupled => SpecularGating::Coupled,
            Gating::Independent => SpecularGating::Independent,
        }
    }
}

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "canvastrace")]
#[command(about = "Render small canvas exercises: a triangle, per-frame noise, a ray-traced sphere")]
pub struct Args {
    /// Exercise to render
    #[arg(long, value_enum, default_value = "sphere")]
    pub scene: SceneKind,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub debug_level: LogLevel,

    /// Image width in pixels
    #[arg(long, default_value = "800", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "800", help = "Image height in pixels")]
    pub height: u32,

    /// Number of noise frames to generate
    #[arg(long, default_value = "60", help = "Number of frames for the noise scene")]
    pub frames: u32,

    /// Seed for reproducible noise
    #[arg(long, help = "Seed for reproducible noise (random when omitted)")]
    pub seed: Option<u64>,

    /// Specular gating for back-facing points
    #[arg(long, value_enum, default_value = "coupled")]
    pub gating: Gating,

    /// Send image to TEV for real-time visualization
    #[arg(long, help = "Send image to TEV for real-time visualization")]
    pub tev: bool,

    /// TEV client IP address and port (automatically enables --tev)
    #[arg(long, help = "TEV client IP address and port (automatically enables --tev)")]
    pub tev_address: Option<String>,

    /// Output file path (.png)
    #[arg(short, long, default_value = "output.png", help = "Output file path (.png)")]
    pub output: String,

    /// Write the PNG bottom-up, as a texture upload would display it
    #[arg(long)]
    pub flip: bool,

    /// Hide the render progress bar
    #[arg(long)]
    pub no_progress: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["canvastrace"]).expect("defaults parse");
        assert_eq!(args.scene, SceneKind::Sphere);
        assert_eq!((args.width, args.height), (800, 800));
        assert_eq!(args.frames, 60);
        assert_eq!(args.gating, Gating::Coupled);
        assert_eq!(args.output, "output.png");
        assert!(!args.tev && args.tev_address.is_none() && args.seed.is_none());
    }

    #[test]
    fn scene_and_gating_flags() {
        let args = Args::try_parse_from([
            "canvastrace", "--scene", "noise", "--seed", "3", "--gating", "independent", "--flip",
        ])
        .expect("flags parse");
        assert_eq!(args.scene, SceneKind::Noise);
        assert_eq!(args.seed, Some(3));
        assert_eq!(SpecularGating::from(args.gating), SpecularGating::Independent);
        assert!(args.flip);
    }

    #[test]
    fn unknown_scene_is_rejected() {
        assert!(Args::try_parse_from(["canvastrace", "--scene", "cube"]).is_err());
    }
}
