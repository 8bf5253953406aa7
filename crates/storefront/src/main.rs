//! `techstore`: interactive text storefront.
//!
//! Reads one command per line from stdin (or a script file), dispatches it into
//! the session, and prints the page plus any toasts after every state change.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use techstore_cart::{BusNotifier, NoopNotifier, Notification, Notifier};
use techstore_events::{EventBus, InMemoryEventBus};
use techstore_observability::LogFormat;
use techstore_storefront::action::HELP;
use techstore_storefront::{Input, Storefront, StorefrontConfig};

#[derive(Debug, Parser)]
#[command(name = "techstore", about = "TechStore catalog, cart and order history")]
struct Args {
    /// Log output format (`pretty` or `json`); overrides TECHSTORE_LOG_FORMAT.
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Do not show "item added" messages.
    #[arg(long)]
    no_notifications: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = StorefrontConfig::from_env().context("invalid storefront configuration")?;
    if let Some(format) = args.log_format {
        config.log_format = format;
    }
    if args.no_notifications {
        config.notifications = false;
    }

    techstore_observability::init(config.log_format);

    let bus: Arc<InMemoryEventBus<Notification>> = Arc::new(InMemoryEventBus::new());
    let toasts = bus.subscribe();
    let notifier: Box<dyn Notifier> = if config.notifications {
        Box::new(BusNotifier::new(bus.clone()))
    } else {
        Box::new(NoopNotifier)
    };

    let mut store =
        Storefront::new(config, notifier).context("failed to seed storefront session")?;

    let reader: Box<dyn BufRead> = match &args.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("failed to open script {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", store.render())?;

    for line in reader.lines() {
        let line = line.context("failed to read command")?;

        let input = match Input::parse(&line) {
            Ok(input) => input,
            Err(err) => {
                tracing::warn!(%line, error = %err, "rejected command");
                writeln!(out, "! {err} (type `help`)")?;
                continue;
            }
        };

        match input {
            Input::Empty => continue,
            Input::Quit => break,
            Input::Help => writeln!(out, "{HELP}")?,
            Input::Show => write!(out, "{}", store.render())?,
            Input::Snapshot => {
                let json = serde_json::to_string_pretty(&store.cart_snapshot())
                    .context("failed to serialize cart")?;
                writeln!(out, "{json}")?;
            }
            Input::Action(action) => {
                if let Err(err) = store.dispatch(action) {
                    tracing::warn!(%line, error = %err, "action failed");
                    writeln!(out, "! {err}")?;
                    continue;
                }
                for toast in toasts.drain() {
                    writeln!(out, "{toast}")?;
                }
                write!(out, "{}", store.render())?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
