mod scheduler;
mod terminal;
mod trace;

use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use sitefx::config::{SiteConfig, TypewriterConfig};
use sitefx::error::ConfigError;
use sitefx::typewriter::Typewriter;

use crate::scheduler::TokioScheduler;
use crate::terminal::TerminalSurface;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read config {path}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("runtime setup failed: {0}")]
    Runtime(#[source] io::Error),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "sitefx", about = "Preview and trace the site's typewriter and throttle")]
struct Cli {
    /// JSON configuration file (same shape as the page's inline config).
    #[arg(long, env = "SITEFX_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate the typewriter in the terminal.
    Preview(PreviewArgs),
    /// Print typewriter display snapshots on a virtual clock.
    Trace(TraceArgs),
    /// Show which call times a throttle lets through.
    Throttle(ThrottleArgs),
}

#[derive(Args, Debug, Default)]
struct TypewriterOverrides {
    /// Replace the phrase list. Repeat for several phrases.
    #[arg(long = "phrase")]
    phrases: Vec<String>,
    #[arg(long, env = "SITEFX_TYPING_MS")]
    typing_ms: Option<u32>,
    #[arg(long, env = "SITEFX_ERASE_MS")]
    erase_ms: Option<u32>,
    #[arg(long, env = "SITEFX_HOLD_MS")]
    hold_ms: Option<u32>,
    #[arg(long, env = "SITEFX_PAUSE_MS")]
    pause_ms: Option<u32>,
}

impl TypewriterOverrides {
    fn apply(self, mut config: TypewriterConfig) -> TypewriterConfig {
        if !self.phrases.is_empty() {
            config.phrases = self.phrases;
        }
        config.typing_ms = self.typing_ms.unwrap_or(config.typing_ms);
        config.erase_ms = self.erase_ms.unwrap_or(config.erase_ms);
        config.hold_ms = self.hold_ms.unwrap_or(config.hold_ms);
        config.pause_ms = self.pause_ms.unwrap_or(config.pause_ms);
        config
    }
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    overrides: TypewriterOverrides,

    /// Stop after this many milliseconds instead of running until interrupted.
    #[arg(long)]
    for_ms: Option<u64>,
}

#[derive(Args, Debug)]
struct TraceArgs {
    #[command(flatten)]
    overrides: TypewriterOverrides,

    /// Full passes over the phrase list to record.
    #[arg(long, default_value_t = 1)]
    cycles: usize,

    /// Emit one JSON object per snapshot.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct ThrottleArgs {
    #[arg(long, default_value_t = sitefx::consts::SCROLL_THROTTLE_MS)]
    cooldown_ms: u32,

    /// Call times in milliseconds, comma separated.
    #[arg(long, value_delimiter = ',', required = true)]
    at: Vec<u64>,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let cli = Cli::parse();
    let site = load_config(cli.config.as_ref())?;

    match cli.command {
        Command::Preview(args) => preview(args.overrides.apply(site.typewriter), args.for_ms),
        Command::Trace(args) => {
            let config = args.overrides.apply(site.typewriter);
            config.validate()?;
            for snapshot in trace::record_typewriter(&config, args.cycles)? {
                if args.json {
                    println!("{}", serde_json::to_string(&snapshot)?);
                } else {
                    println!("{:>8} ms  {:?}", snapshot.at_ms, snapshot.text);
                }
            }
            Ok(())
        }
        Command::Throttle(args) => {
            for (at, ran) in trace::simulate_throttle(args.cooldown_ms, &args.at)? {
                let verdict = if ran { "run" } else { "dropped" };
                println!("{at:>8} ms  {verdict}");
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<SiteConfig, CliError> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig { path: path.clone(), source })?;
    let config = SiteConfig::from_json_str(&raw)?;
    tracing::info!(path = %path.display(), phrases = config.typewriter.phrases.len(), "loaded config");
    Ok(config)
}

fn preview(config: TypewriterConfig, for_ms: Option<u64>) -> Result<(), CliError> {
    config.validate()?;
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .map_err(CliError::Runtime)?;
    let local = tokio::task::LocalSet::new();

    local.block_on(&runtime, async move {
        let surface = Rc::new(TerminalSurface::new(io::stdout()));
        let typewriter = Typewriter::new(&config, surface, Rc::new(TokioScheduler));
        typewriter.start();
        match for_ms {
            Some(ms) => tokio::time::sleep(Duration::from_millis(ms)).await,
            None => std::future::pending::<()>().await,
        }
    });
    println!();
    Ok(())
}
