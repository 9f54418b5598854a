mod action;
mod app;
mod config;
mod dispatcher;
mod error;
mod event;
mod gateway;
mod gh;
mod tui;
mod types;
mod ui;

use std::fs::OpenOptions;
use std::panic;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::action::Action;
use crate::app::App;
use crate::config::Config;
use crate::dispatcher::Dispatcher;
use crate::error::TriageError;
use crate::event::Event;
use crate::gh::GhCli;
use crate::tui::EventHandler;
use crate::ui::Theme;

/// Browse and triage GitHub notifications in the terminal
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());

    init_logging(&config)?;

    let gh = GhCli::new(config.general.gh_binary.clone());
    if let Err(e) = gh.check().await {
        tracing::warn!(error = %e, "startup check failed");
        eprintln!("Error: {}", e);
        match e {
            TriageError::ToolMissing(_) => {
                eprintln!("Please install GitHub CLI: https://cli.github.com/")
            }
            TriageError::NotAuthenticated => eprintln!("Then start gh-triage again."),
            _ => {}
        }
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = tui::restore();
        original_hook(panic_info);
    }));

    let theme = Theme::from_config(&config.theme);
    let result = run(gh, theme).await;

    tui::restore()?;

    result
}

fn init_logging(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);

    match &config.general.log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }
    Ok(())
}

async fn run(gh: GhCli, theme: Theme) -> Result<(), Box<dyn std::error::Error>> {
    let mut terminal = tui::init()?;

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let dispatcher = Dispatcher::new(Arc::new(gh), action_tx.clone());

    let mut app = App::new();
    // Redraw only after a state change
    let mut dirty = true;

    let render_rate = Duration::from_millis(16); // ~60fps
    let mut events = EventHandler::new(render_rate);

    loop {
        tokio::select! {
            Some(event) = events.next() => match event {
                Event::Render => {
                    if dirty {
                        terminal.draw(|frame| ui::render(frame, &app, &theme))?;
                        dirty = false;
                    }
                }
                _ => {
                    let action = app.handle_event(event);
                    if !matches!(action, Action::None) {
                        action_tx.send(action)?;
                    }
                }
            },
            Some(action) = action_rx.recv() => {
                let (next, command) = app.update(action);
                app = next;
                dirty = true;
                if let Some(command) = command {
                    dispatcher.dispatch(command);
                }
            }
        }

        if app.should_quit {
            tracing::debug!("quitting");
            break;
        }
    }

    Ok(())
}
