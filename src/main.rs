//! ILS lookup console.
//!
//! Terminal front end for the ILS proxy: pick an action, fill its form,
//! submit, and watch the response body or faults come back.
//!
//! ```sh
//! ils-console --base-url https://192.168.1.14:3001/api/ils/ --insecure
//! ```

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ils_console::action::Action;
use ils_console::components::{Component, EventKind, LookupConsole, LookupConsoleProps};
use ils_console::dispatch::EffectStore;
use ils_console::effect::Effect;
use ils_console::reducer::reducer;
use ils_console::registry::ActionName;
use ils_console::state::AppState;
use ils_console::transport::{ProxyConfig, ProxyTransport, DEFAULT_PROXY_URL};

const TICK_INTERVAL_MS: u64 = 120;

/// Terminal client for the ILS inventory proxy
#[derive(Parser, Debug)]
#[command(name = "ils-console")]
#[command(about = "Look up part availability through the ILS proxy")]
struct Args {
    /// Base URL of the ILS proxy; the action name is appended per request
    #[arg(long, default_value = DEFAULT_PROXY_URL)]
    base_url: String,

    /// Action to bind on startup
    #[arg(long, default_value_t = ActionName::IsPartAvailable)]
    action: ActionName,

    /// Append logs to this file (RUST_LOG controls the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Accept the proxy's self-signed TLS certificate
    #[arg(long)]
    insecure: bool,
}

fn init_tracing(log_file: &PathBuf) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    // Build the HTTP client before entering TUI mode so a bad config
    // fails with a readable message.
    let config = ProxyConfig {
        base_url: args.base_url.clone(),
        accept_invalid_certs: args.insecure,
    };
    let transport = match ProxyTransport::new(config) {
        Ok(t) => Arc::new(t),
        Err(e) => {
            eprintln!("Error: could not set up the proxy client.");
            eprintln!("Details: {}", e);
            std::process::exit(1);
        }
    };

    // ===== Terminal setup =====
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, args.action, transport).await;

    // ===== Cleanup =====
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

/// Polls crossterm without blocking the runtime; dropped at shutdown
/// along with the channel.
fn spawn_event_poller(event_tx: mpsc::UnboundedSender<EventKind>) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_millis(10)).await;
            while event::poll(Duration::ZERO).unwrap_or(false) {
                let mapped = match event::read() {
                    Ok(Event::Key(key)) => Some(EventKind::Key(key)),
                    Ok(Event::Resize(w, h)) => Some(EventKind::Resize(w, h)),
                    Ok(_) => None,
                    Err(_) => return,
                };
                if let Some(event) = mapped {
                    if event_tx.send(event).is_err() {
                        return;
                    }
                }
            }
        }
    });
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    initial_action: ActionName,
    transport: Arc<ProxyTransport>,
) -> io::Result<()> {
    let mut store = EffectStore::new(AppState::new(initial_action), reducer);
    let mut ui = LookupConsole::new();

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<EventKind>();
    spawn_event_poller(event_tx);

    let mut tick = tokio::time::interval(Duration::from_millis(TICK_INTERVAL_MS));
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|frame| {
                ui.render(
                    frame,
                    frame.area(),
                    LookupConsoleProps {
                        state: store.state(),
                    },
                );
            })?;
            needs_render = false;
        }

        tokio::select! {
            Some(event) = event_rx.recv() => {
                if matches!(event, EventKind::Resize(_, _)) {
                    needs_render = true;
                }
                let actions: Vec<_> = ui
                    .handle_event(&event, LookupConsoleProps { state: store.state() })
                    .into_iter()
                    .collect();
                for action in actions {
                    if matches!(action, Action::Quit) {
                        return Ok(());
                    }
                    if action_tx.send(action).is_err() {
                        return Ok(());
                    }
                }
            }
            Some(action) = action_rx.recv() => {
                if matches!(action, Action::Quit) {
                    return Ok(());
                }
                debug!(action = action.name(), "dispatch");
                let result = store.dispatch(action);
                needs_render |= result.changed;
                for effect in result.effects {
                    handle_effect(effect, &transport, &action_tx);
                }
            }
            _ = tick.tick() => {
                let result = store.dispatch(Action::Tick);
                needs_render |= result.changed;
            }
        }
    }
}

fn handle_effect(
    effect: Effect,
    transport: &Arc<ProxyTransport>,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        Effect::CallProxy {
            action,
            payload,
            generation,
        } => {
            let transport = Arc::clone(transport);
            let action_tx = action_tx.clone();
            tokio::spawn(async move {
                let result = transport.send(action, &payload).await;
                let response = match result {
                    Ok(envelope) => Action::ProxyDidRespond {
                        generation,
                        envelope,
                    },
                    Err(e) => Action::ProxyDidFail {
                        generation,
                        message: e.to_string(),
                    },
                };
                let _ = action_tx.send(response);
            });
        }
    }
}
