use std::io::{self, BufWriter, Write};

use anyhow::Context;
use browser_platform::{DeviceClassifier, DomainParser, EnvironmentSignals};
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{debug, info, level_filters::LevelFilter};
use tracing_subscriber::{filter::Builder as TracingFilterBuilder, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(version, about = "Domain extraction and browser detection for extension hosts")]
struct Cli {
    /// Print results as JSON lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the registrable domain of each URL.
    Domain {
        /// Print the full hostname instead of the registrable domain
        #[arg(long)]
        host: bool,

        #[arg(required = true)]
        urls: Vec<String>,
    },

    /// Classify the browser from a user-agent and vendor markers.
    Device {
        #[arg(long, env = "BROWSER_USER_AGENT", default_value = "")]
        user_agent: String,

        /// The runtime exposes `window.opr`
        #[arg(long, env = "BROWSER_OPERA_MARKER")]
        opera_marker: bool,

        /// The runtime exposes `window.safari`
        #[arg(long, env = "BROWSER_SAFARI_MARKER")]
        safari_marker: bool,
    },
}

fn main() -> anyhow::Result<()> {
    match dotenvy::dotenv() {
        Err(e) if e.not_found() => {}
        Ok(_) => {}
        Err(e) => {
            return Err(e).context("Failed to load .env file");
        }
    }

    init_log();

    let cli = Cli::parse();
    debug!(?cli, "Parsed arguments");

    let mut out = BufWriter::new(io::stdout().lock());

    match cli.command {
        Command::Domain { host, urls } => {
            for url in &urls {
                let domain = if host {
                    DomainParser::get_host_name(Some(url.as_str()))
                } else {
                    DomainParser::get_domain(Some(url.as_str()))
                };

                let written = if cli.json {
                    writeln!(out, "{}", json!({ "input": url, "domain": domain }))
                } else {
                    writeln!(out, "{}\t{}", url, domain.as_deref().unwrap_or("-"))
                };
                written.context("Failed to write output")?;
            }
            info!(count = urls.len(), "Resolved domains");
        }

        Command::Device {
            user_agent,
            opera_marker,
            safari_marker,
        } => {
            let signals = EnvironmentSignals {
                user_agent,
                has_opera_marker: opera_marker,
                has_safari_marker: safari_marker,
            };
            let device = DeviceClassifier::get_device(&signals);

            let written = if cli.json {
                writeln!(out, "{}", json!({ "device": device, "signals": signals }))
            } else {
                writeln!(out, "{device}")
            };
            written.context("Failed to write output")?;
            info!(%device, "Classified device");
        }
    }

    out.flush().context("Failed to flush output")?;

    Ok(())
}

fn init_log() {
    tracing_subscriber::fmt()
        .with_ansi(true)
        .with_writer(io::stderr)
        .with_env_filter(
            TracingFilterBuilder::default()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .finish()
        .init();
}
