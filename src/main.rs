//! emucam CLI - bring up an emulated camera endpoint and report its
//! negotiated capabilities.
#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Parser;
use console::style;
use serde::Serialize;

use emucam::camera::{CapabilitySnapshot, EmulatedCamera, EndpointState, FacingPolicy};
use emucam::cli::{Cli, Commands, CompletionsArgs, NegotiateArgs, OrientationArgs};
use emucam::config::{EmulatorConfig, default_config_path, load_config};
use emucam::device::{ConnectionInfo, DeviceConnection, HostConnection, OfflineConnection};
use emucam::error::CameraError;
use emucam::logging::init_logging;
use emucam::params::CameraParameters;
use emucam::properties::{
    ChainedProperties, GraphMode, Orientation, StaticProperties, orientation_from_graph_mode,
};

/// Build information embedded at compile time.
mod build_info {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    pub fn git_sha() -> &'static str {
        option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
    }

    pub fn git_dirty() -> &'static str {
        option_env!("VERGEN_GIT_DIRTY").unwrap_or("false")
    }

    pub fn build_timestamp() -> &'static str {
        option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
    }

    pub fn rustc_semver() -> &'static str {
        option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown")
    }

    pub fn target() -> &'static str {
        option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown")
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || !io::stdout().is_terminal() {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    init_logging(cli.use_json(), cli.verbose, cli.quiet);

    if let Err(e) = run(&cli) {
        output_error(&cli, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Negotiate(args) => cmd_negotiate(cli, args),
        Commands::Orientation(args) => cmd_orientation(cli, args),
        Commands::Config => cmd_config(cli),
        Commands::Version => cmd_version(cli),
        Commands::Completions(args) => cmd_completions(args),
    }
}

fn effective_config(cli: &Cli) -> anyhow::Result<EmulatorConfig> {
    load_config(cli.config.as_deref()).context("Failed to load configuration")
}

// === Command Implementations ===

#[derive(Serialize)]
struct NegotiationReport<'a> {
    camera_id: u32,
    device: &'a str,
    port: u16,
    dry_run: bool,
    state: EndpointState,
    negotiated_at: DateTime<Utc>,
    connection: Option<&'a ConnectionInfo>,
    capabilities: Option<&'a CapabilitySnapshot>,
    parameters: &'a CameraParameters,
    flattened: String,
}

fn cmd_negotiate(cli: &Cli, args: &NegotiateArgs) -> anyhow::Result<()> {
    let mut config = effective_config(cli)?;
    if let Some(device) = &args.device {
        config.camera.device.clone_from(device);
    }
    if let Some(port) = args.port {
        config.camera.port = port;
    }
    if let Some(host) = &args.host {
        config.host.address.clone_from(host);
    }
    if args.strict_facing {
        config.camera.facing_policy = FacingPolicy::Strict;
    }

    let overrides: StaticProperties = args.properties.iter().cloned().collect();
    let host_properties = ChainedProperties::new()
        .then(overrides)
        .then(config.host_properties());

    let camera = if args.dry_run {
        EmulatedCamera::new(0, OfflineConnection::new())
    } else {
        EmulatedCamera::new(0, HostConnection::new(config.connection_options()))
    };
    let mut camera = camera
        .with_host_properties(host_properties)
        .with_facing_policy(config.camera.facing_policy);

    camera.initialize(&config.camera.device, config.camera.port)?;

    let report = NegotiationReport {
        camera_id: camera.camera_id(),
        device: &config.camera.device,
        port: config.camera.port,
        dry_run: args.dry_run,
        state: camera.state(),
        negotiated_at: Utc::now(),
        connection: camera.device().info(),
        capabilities: camera.snapshot(),
        parameters: camera.params(),
        flattened: camera.params().flatten(),
    };

    if cli.use_json() {
        output_json(cli, &report)?;
    } else if !cli.quiet {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &NegotiationReport<'_>) {
    println!(
        "{} camera {} ({}) on port {}{}",
        style("Ready").green().bold(),
        report.camera_id,
        report.device,
        report.port,
        if report.dry_run { " [dry run]" } else { "" }
    );
    if let Some(peer) = report.connection.and_then(|c| c.peer) {
        println!("{}: {peer}", style("Host").bold());
    }
    if let Some(caps) = report.capabilities {
        println!("{}: {}", style("Facing").bold(), caps.facing);
        println!("{}: {}", style("Orientation").bold(), caps.orientation);
        println!(
            "{}: {}",
            style("Current size").bold(),
            caps.current_preview_size
        );
    }
    println!();
    println!("{}", style("PARAMETERS").bold().underlined());
    for (key, value) in report.parameters.iter() {
        println!("  {}={value}", style(key).cyan());
    }
}

#[derive(Serialize)]
struct OrientationReport<'a> {
    value: &'a str,
    parsed: bool,
    width: Option<u32>,
    height: Option<u32>,
    depth: Option<u32>,
    orientation: Orientation,
}

fn cmd_orientation(cli: &Cli, args: &OrientationArgs) -> anyhow::Result<()> {
    let mode = GraphMode::parse(&args.value);
    let orientation = orientation_from_graph_mode(Some(&args.value));

    if cli.use_json() {
        output_json(
            cli,
            &OrientationReport {
                value: &args.value,
                parsed: mode.is_some(),
                width: mode.map(|m| m.width),
                height: mode.map(|m| m.height),
                depth: mode.map(|m| m.depth),
                orientation,
            },
        )?;
    } else {
        match mode {
            Some(m) => println!(
                "orientation: {orientation} ({}x{}, depth {})",
                m.width, m.height, m.depth
            ),
            None => println!(
                "orientation: {orientation} ({})",
                style("unrecognized graph mode, using default").yellow()
            ),
        }
    }
    Ok(())
}

fn cmd_config(cli: &Cli) -> anyhow::Result<()> {
    let config = effective_config(cli)?;
    let source = cli
        .config
        .clone()
        .or_else(default_config_path)
        .map(|p| p.display().to_string());

    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({ "source": source, "config": config }),
        )?;
    } else {
        if let Some(source) = source {
            println!("# {source}");
        }
        print!(
            "{}",
            toml::to_string_pretty(&config).context("Failed to render configuration")?
        );
    }
    Ok(())
}

fn cmd_version(cli: &Cli) -> anyhow::Result<()> {
    if cli.use_json() {
        output_json(
            cli,
            &serde_json::json!({
                "version": build_info::VERSION,
                "git_sha": build_info::git_sha(),
                "git_dirty": build_info::git_dirty() == "true",
                "build_timestamp": build_info::build_timestamp(),
                "rustc_version": build_info::rustc_semver(),
                "target": build_info::target(),
            }),
        )?;
    } else {
        println!("emucam {}", build_info::VERSION);
        println!(
            "git: {}{}",
            build_info::git_sha(),
            if build_info::git_dirty() == "true" {
                " (dirty)"
            } else {
                ""
            }
        );
        println!("built: {}", build_info::build_timestamp());
        println!("rustc: {}", build_info::rustc_semver());
        println!("target: {}", build_info::target());
    }
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // Consistent return type with other commands
fn cmd_completions(args: &CompletionsArgs) -> anyhow::Result<()> {
    use clap::CommandFactory;
    clap_complete::generate(args.shell, &mut Cli::command(), "emucam", &mut io::stdout());
    Ok(())
}

// === Utility Functions ===

fn output_json<T: Serialize>(cli: &Cli, data: &T) -> anyhow::Result<()> {
    let json = if cli.use_compact_json() {
        serde_json::to_string(data)?
    } else {
        serde_json::to_string_pretty(data)?
    };
    println!("{json}");
    Ok(())
}

fn output_error(cli: &Cli, error: &anyhow::Error) {
    let camera_error = error.downcast_ref::<CameraError>();
    let suggestion = camera_error.and_then(CameraError::suggestion);

    if cli.use_json() {
        let json = serde_json::json!({
            "error": true,
            "message": format!("{error:#}"),
            "suggestion": suggestion,
            "recoverable": camera_error.is_some_and(CameraError::is_user_recoverable),
        });
        eprintln!("{json:#}");
    } else {
        eprintln!("{}: {error:#}", style("Error").red().bold());
        if let Some(suggestion) = suggestion {
            eprintln!("{}: {}", style("Hint").yellow(), suggestion);
        }
    }
}
