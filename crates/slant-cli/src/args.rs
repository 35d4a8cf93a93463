use std::path::PathBuf;

use clap::Parser;
use slant_engine::logging::LoggingConfig;
use slant_engine::shape::ConversionOptions;

/// Convert a design tool's linear gradient fill into CSS.
#[derive(Debug, Parser)]
#[command(name = "slant", version, about)]
pub struct Args {
    /// JSON shape document; `-` or nothing reads stdin.
    pub input: Option<PathBuf>,

    /// Fold the shape's width and height into the conversion.
    #[arg(long)]
    pub size: bool,

    /// Add the shape's rotation to the gradient angle.
    #[arg(long)]
    pub rotation: bool,

    /// Multiply every stop's alpha by the shape's opacity.
    #[arg(long)]
    pub opacity: bool,

    /// Print a JSON object instead of the bare CSS value.
    #[arg(long)]
    pub json: bool,

    /// Log filter in env_logger syntax; defaults to RUST_LOG, then "warn".
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

impl Args {
    pub fn options(&self) -> ConversionOptions {
        ConversionOptions::new()
            .with_size(self.size)
            .with_rotation(self.rotation)
            .with_opacity(self.opacity)
    }

    pub fn logging(&self) -> LoggingConfig {
        match &self.log {
            Some(filter) => LoggingConfig::default().with_filter(filter.clone()),
            None => LoggingConfig::default(),
        }
    }

    /// `None` when the document comes from stdin.
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input.as_ref().filter(|p| p.as_os_str() != "-")
    }
}
