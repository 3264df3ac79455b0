//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// emucam - bring up an emulated host camera and show what it advertises.
///
/// Robot Mode: use --robot or --format=json for machine-parseable output.
#[derive(Parser, Debug)]
#[command(name = "emucam", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (text for humans, json for scripts)
    #[arg(
        long,
        short = 'f',
        default_value = "text",
        global = true,
        env = "EMUCAM_FORMAT"
    )]
    pub format: OutputFormat,

    /// Robot mode: equivalent to --format=json
    #[arg(long, global = true)]
    pub robot: bool,

    /// Verbose output (-v debug, -vv trace)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Disable colored output (any non-empty `NO_COLOR` also disables it)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Configuration file (default: <config dir>/emucam/config.toml)
    #[arg(long, short = 'c', global = true, env = "EMUCAM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format selection.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with optional color
    #[default]
    Text,
    /// Pretty JSON
    Json,
    /// Compact JSON (single line)
    JsonCompact,
}

impl Cli {
    /// Returns true if output should be JSON (robot mode or explicit --format=json).
    pub const fn use_json(&self) -> bool {
        self.robot || matches!(self.format, OutputFormat::Json | OutputFormat::JsonCompact)
    }

    /// Returns true if output should be compact JSON.
    pub const fn use_compact_json(&self) -> bool {
        matches!(self.format, OutputFormat::JsonCompact)
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize the camera and print the negotiated parameters
    Negotiate(NegotiateArgs),

    /// Show the orientation derived from a host graph mode (WxH-D)
    Orientation(OrientationArgs),

    /// Show the effective configuration
    Config,

    /// Show version and build information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
pub struct NegotiateArgs {
    /// Logical device name ("front" or "back")
    #[arg(long, short = 'd', env = "EMUCAM_DEVICE")]
    pub device: Option<String>,

    /// Port of the host-side video source
    #[arg(long, short = 'p', env = "EMUCAM_PORT")]
    pub port: Option<u16>,

    /// Address of the emulator host
    #[arg(long, env = "EMUCAM_HOST")]
    pub host: Option<String>,

    /// Host property override (repeatable), e.g. aicVM.vbox_graph_mode=480x640-16
    #[arg(long = "prop", value_name = "KEY=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,

    /// Reject device names other than "front" and "back"
    #[arg(long)]
    pub strict_facing: bool,

    /// Skip the host connection and only derive parameters
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Parser, Debug)]
pub struct OrientationArgs {
    /// Graph mode value, e.g. 1280x800-32
    pub value: String,
}

#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}

fn parse_property(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))?;
    if key.is_empty() {
        return Err(format!("empty property name in '{s}'"));
    }
    Ok((key.to_string(), value.to_string()))
}
