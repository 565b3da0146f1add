//! mosview CLI.
//!
//! Drives a [`Session`] from the command line and renders its outputs as
//! text, JSON or SVG.

mod output;
mod svg;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use mosview::devices::{ChannelLength, ChannelWidth};
use mosview::{Event, Session, SessionConfig};

#[derive(Parser, Debug)]
#[command(name = "mosview")]
#[command(about = "Interactive MOSFET cross-section and I-V model")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one bias point and print the readouts
    Snapshot {
        #[command(flatten)]
        bias: BiasArgs,

        /// Print the whole frame (geometry, charts, readouts) as JSON
        #[arg(long)]
        json: bool,
    },

    /// Apply a script of input events, printing one JSON update per line
    Replay {
        /// Event script: one `vgs|vds <volts>`, `length short|long` or
        /// `width narrow|wide` per line
        script: PathBuf,

        /// JSON session configuration
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the sweep samples of both charts as a tab-separated table
    Curves {
        #[command(flatten)]
        bias: BiasArgs,
    },

    /// Render the cross-section as a standalone SVG document
    Svg {
        #[command(flatten)]
        bias: BiasArgs,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Bias point and selectors, overriding the configuration's initial values.
#[derive(Args, Debug)]
struct BiasArgs {
    /// Gate-source voltage (V)
    #[arg(long)]
    vgs: Option<f64>,

    /// Drain-source voltage (V)
    #[arg(long)]
    vds: Option<f64>,

    /// Channel length: short or long
    #[arg(long)]
    length: Option<ChannelLength>,

    /// Channel width: narrow or wide
    #[arg(long)]
    width: Option<ChannelWidth>,

    /// JSON session configuration
    #[arg(long)]
    config: Option<PathBuf>,
}

impl BiasArgs {
    fn session(&self) -> Result<Session> {
        let mut config = load_config(self.config.as_deref())?;
        let initial = &mut config.initial;
        if let Some(vgs) = self.vgs {
            initial.vgs = vgs;
        }
        if let Some(vds) = self.vds {
            initial.vds = vds;
        }
        if let Some(length) = self.length {
            initial.length = length;
        }
        if let Some(width) = self.width {
            initial.width = width;
        }
        Session::new(config).context("Failed to start session")
    }
}

fn load_config(path: Option<&Path>) -> Result<SessionConfig> {
    match path {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(SessionConfig::default()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Snapshot { bias, json } => cmd_snapshot(&bias, json),
        Commands::Replay { script, config } => cmd_replay(&script, config.as_deref()),
        Commands::Curves { bias } => cmd_curves(&bias),
        Commands::Svg { bias, output } => cmd_svg(&bias, output.as_deref()),
    }
}

fn cmd_snapshot(bias: &BiasArgs, json: bool) -> Result<()> {
    let session = bias.session()?;
    if json {
        let frame = serde_json::to_string_pretty(&session.frame())
            .context("Failed to serialize frame")?;
        println!("{frame}");
    } else {
        output::print_snapshot(&session);
    }
    Ok(())
}

fn cmd_replay(script: &Path, config: Option<&Path>) -> Result<()> {
    let text = std::fs::read_to_string(script)
        .with_context(|| format!("Failed to read event script {}", script.display()))?;
    let events = parse_script(&text)?;

    let mut session = Session::new(load_config(config)?).context("Failed to start session")?;
    log::info!("Replaying {} events from {}", events.len(), script.display());

    for event in events {
        let update = session.handle(event);
        let line = serde_json::to_string(&update).context("Failed to serialize update")?;
        println!("{line}");
    }
    Ok(())
}

/// Parse an event script, skipping blank lines and `#` comments.
fn parse_script(text: &str) -> Result<Vec<Event>> {
    text.lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let line = line.split('#').next().unwrap_or("").trim();
            (!line.is_empty()).then_some((i + 1, line))
        })
        .map(|(lineno, line)| {
            line.parse::<Event>()
                .with_context(|| format!("Line {lineno}"))
        })
        .collect()
}

fn cmd_curves(bias: &BiasArgs) -> Result<()> {
    let session = bias.session()?;
    print!("{}", output::curve_table(session.plots()));
    Ok(())
}

fn cmd_svg(bias: &BiasArgs, output: Option<&Path>) -> Result<()> {
    let session = bias.session()?;
    let document = svg::render(session.geometry(), &session.config().layout, &session.readouts());
    match output {
        Some(path) => std::fs::write(path, document)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{document}"),
    }
    Ok(())
}
