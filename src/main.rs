use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing_subscriber::EnvFilter;

use newsdesk::{seed, ui, App, ArticleStore, Config, NewsFilter, StoreSettings};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;
    init_logging(&config)?;

    let store = build_store(&config)?;
    let news = NewsFilter::new(config.news_categories.iter().cloned());
    let mut app = App::new(store, news);

    tracing::info!("Starting newsdesk with {} articles", app.store.len());

    let terminal = ratatui::init();
    let result = run(terminal, &mut app);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!("Exiting with error: {:#}", e);
    }
    result
}

fn init_logging(config: &Config) -> anyhow::Result<()> {
    let log_path = Path::new(&config.log_path);
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    // The terminal belongs to the TUI, so logs go to a file
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn build_store(config: &Config) -> anyhow::Result<ArticleStore> {
    let settings = StoreSettings::from(config);

    let seed = match &config.seed_path {
        Some(path) => {
            let articles = seed::parse_seed_file(Path::new(path), &settings.placeholder_image)
                .with_context(|| format!("Failed to load seed articles from {}", path))?;
            tracing::info!("Loaded {} seed articles from {}", articles.len(), path);
            articles
        }
        None => Vec::new(),
    };

    Ok(ArticleStore::with_articles(settings, seed))
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }

    Ok(())
}
