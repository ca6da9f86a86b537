//! energy-tips CLI binary
//!
//! Renders the Energy Saving Tips page to a file or stdout, lists the tips,
//! or serves the page over HTTP.
//!
//! ```bash
//! energy-tips render --out energy_saving_tips.html --asset-base assets
//! energy-tips serve --port 8080 --assets-dir client/src/components/assets/images
//! energy-tips cards --json
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use energy_tips_page::render_page;
use energy_tips_page::types::{tip_cards, tip_cards_json};
use energy_tips_server::{CliOptions, PageServer, ServerConfig, load_config, resolve_config};

const DEFAULT_CONFIG: &str = "energy-tips.toml";

/// Energy Saving Tips page: render it, list its tips, or serve it.
#[derive(Parser, Debug)]
#[command(name = "energy-tips")]
#[command(author, version, about)]
struct RootCli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    /// Write the full HTML document to a file or stdout.
    Render(RenderArgs),
    /// Serve the page and its images over HTTP.
    Serve(ServeArgs),
    /// List the tip cards in display order.
    Cards(CardsArgs),
}

#[derive(Args, Debug, Clone)]
struct RenderArgs {
    /// Output file (stdout when omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// URL prefix for the page images
    #[arg(long)]
    asset_base: Option<String>,
    /// Leave the stylesheet out of the document head
    #[arg(long)]
    no_inline_css: bool,
}

#[derive(Args, Debug, Clone)]
struct ServeArgs {
    /// Interface to listen on
    #[arg(long)]
    bind: Option<String>,
    /// Port to listen on (0 picks a free one)
    #[arg(short, long)]
    port: Option<u16>,
    /// Path the page is mounted at
    #[arg(long)]
    route: Option<String>,
    /// Directory holding the page images
    #[arg(long)]
    assets_dir: Option<PathBuf>,
    /// URL prefix the images are served under
    #[arg(long)]
    asset_base: Option<String>,
    /// Leave the stylesheet out of the document head
    #[arg(long)]
    no_inline_css: bool,
}

#[derive(Args, Debug, Clone)]
struct CardsArgs {
    /// Print the full table as JSON
    #[arg(long)]
    json: bool,
}

/// CLI values merged over the config file.
struct Overrides<'a> {
    log_level: Option<String>,
    render: Option<&'a RenderArgs>,
    serve: Option<&'a ServeArgs>,
}

impl CliOptions for Overrides<'_> {
    fn bind(&self) -> Option<String> {
        self.serve.and_then(|s| s.bind.clone())
    }
    fn port(&self) -> Option<u16> {
        self.serve.and_then(|s| s.port)
    }
    fn route(&self) -> Option<String> {
        self.serve.and_then(|s| s.route.clone())
    }
    fn asset_base(&self) -> Option<String> {
        self.serve
            .and_then(|s| s.asset_base.clone())
            .or_else(|| self.render.and_then(|r| r.asset_base.clone()))
    }
    fn assets_dir(&self) -> Option<PathBuf> {
        self.serve.and_then(|s| s.assets_dir.clone())
    }
    fn no_inline_css(&self) -> bool {
        self.serve.is_some_and(|s| s.no_inline_css) || self.render.is_some_and(|r| r.no_inline_css)
    }
    fn log_level(&self) -> Option<String> {
        self.log_level.clone()
    }
}

fn init_logging(level: &str) {
    // Logs go to stderr; stdout carries rendered output.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap_or_default()),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = RootCli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG));
    let file_config = load_config(&config_path)?;
    let config_missing = file_config.is_none();

    let overrides = Overrides {
        log_level: cli.log_level.clone(),
        render: match &cli.command {
            CliCommand::Render(args) => Some(args),
            _ => None,
        },
        serve: match &cli.command {
            CliCommand::Serve(args) => Some(args),
            _ => None,
        },
    };
    let config = resolve_config(&overrides, file_config);

    init_logging(&config.log_level);
    if config_missing && cli.config.is_some() {
        warn!(path = %config_path.display(), "config file not found, using defaults");
    }

    match &cli.command {
        CliCommand::Render(args) => run_render(&config, args),
        CliCommand::Serve(_) => run_serve(config),
        CliCommand::Cards(args) => run_cards(args),
    }
}

fn run_render(config: &ServerConfig, args: &RenderArgs) -> Result<()> {
    let html = render_page(&config.page_assets());

    match &args.out {
        Some(path) => {
            fs::write(path, &html)
                .with_context(|| format!("failed to write page to {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "page written");
        }
        None => println!("{}", html),
    }
    Ok(())
}

fn run_serve(config: ServerConfig) -> Result<()> {
    config.validate()?;

    info!(
        addr = %config.listen_addr(),
        route = %config.route,
        asset_base = %config.asset_base,
        assets_dir = ?config.assets_dir,
        "starting energy-tips v{}",
        env!("CARGO_PKG_VERSION")
    );

    let running = PageServer::new(config).bind()?;
    running
        .join()
        .map_err(|_| anyhow!("server thread panicked"))
}

fn run_cards(args: &CardsArgs) -> Result<()> {
    if args.json {
        let json = tip_cards_json().context("failed to serialize tip table")?;
        println!("{}", json);
        return Ok(());
    }

    for (idx, card) in tip_cards().iter().enumerate() {
        println!("{}. {}", idx + 1, card.title);
    }
    Ok(())
}
