mod commands;
mod config;
mod panel;
mod view;

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use directory_core::{
    ControllerSettings, DirectoryController, FavoriteStore, KeyValueFavorites, RandomUserClient,
    UiEvent, PAGE_SIZE,
};
use storage::{KeyValueStore, MemoryStore, Storage};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, BufReader},
    sync::mpsc,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::{
    commands::Dispatch,
    config::{load_settings, normalize_database_url, Settings},
    panel::Panel,
    view::{SystemClipboard, TerminalView},
};

#[derive(Parser, Debug)]
#[command(name = "directory", about = "Browse a directory of generated user profiles")]
struct Args {
    /// Settings file; defaults to ./directory.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    endpoint: Option<String>,
    /// SQLite database for favorites.
    #[arg(long)]
    database: Option<String>,
    #[arg(long)]
    debounce_ms: Option<u64>,
    /// Keep favorites in memory only.
    #[arg(long)]
    no_persist: bool,
}

impl Args {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(endpoint) = &self.endpoint {
            settings.endpoint = endpoint.clone();
        }
        if let Some(database) = &self.database {
            settings.database_url = database.clone();
        }
        if let Some(debounce_ms) = self.debounce_ms {
            settings.search_debounce_ms = debounce_ms;
        }
        if self.no_persist {
            settings.persist_favorites = false;
        }
        settings
    }
}

async fn open_store(settings: &Settings) -> Arc<dyn KeyValueStore> {
    if !settings.persist_favorites {
        return Arc::new(MemoryStore::new());
    }

    let database_url = normalize_database_url(&settings.database_url);
    match Storage::new(&database_url).await {
        Ok(storage) => {
            info!(database_url = %database_url, "storage: favorites database ready");
            Arc::new(storage)
        }
        Err(err) => {
            warn!(database_url = %database_url, "storage: falling back to in-memory favorites: {err:#}");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Returns after forwarding `quit`; another pending stdin read would keep the
/// runtime from shutting down.
async fn read_commands<R>(input: R, panel: Panel, events: mpsc::Sender<UiEvent>)
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                warn!("input: failed to read stdin: {err}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match commands::parse(&line).and_then(|command| commands::dispatch(command, &panel)) {
            Ok(Dispatch::Event(event)) => {
                let quit = event == UiEvent::Quit;
                if events.send(event).await.is_err() || quit {
                    break;
                }
            }
            Ok(Dispatch::Help) => println!("{}", commands::HELP),
            Err(err) => eprintln!("{err}"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let settings = args.apply(load_settings(args.config.as_deref())?);
    let endpoint = Url::parse(&settings.endpoint)
        .with_context(|| format!("invalid endpoint '{}'", settings.endpoint))?;

    let store = open_store(&settings).await;
    let favorites: Arc<dyn FavoriteStore> = Arc::new(KeyValueFavorites::new(store));

    let panel = Panel::default();
    let view = TerminalView::new(std::io::stdout(), panel.clone(), Box::new(SystemClipboard));
    let mut controller = DirectoryController::new(
        view,
        favorites,
        ControllerSettings {
            page_size: PAGE_SIZE,
            search_debounce: Duration::from_millis(settings.search_debounce_ms),
        },
    )
    .await;

    let source = RandomUserClient::new(endpoint);
    controller
        .load(&source)
        .await
        .context("directory could not be loaded")?;
    println!("Type 'help' for commands.");

    let (tx, rx) = mpsc::channel(64);
    let input = tokio::spawn(read_commands(
        BufReader::new(tokio::io::stdin()),
        panel,
        tx,
    ));
    controller.run(rx).await;
    input.abort();

    Ok(())
}
