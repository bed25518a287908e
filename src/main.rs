use clap::Parser;
use microcosm_overlay::config::{ConfigError, OverlayConfig};
use microcosm_overlay::runtime::{DemoRules, DemoWorld, KeyBindings, Session};
use microcosm_overlay::telemetry::init_tracing;
use microcosm_overlay::terminal::{Terminal, TerminalEvent};
use microcosm_overlay::ui::TextRenderer;
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "overlay-demo")]
#[command(about = "Drive the overlay state machine from the keyboard")]
#[command(version)]
struct Args {
    /// YAML file overriding list and status window sizes
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trace filter, e.g. `debug` or `microcosm_overlay=trace` (defaults to RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}

fn run() -> Result<(), DemoError> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());
    let config = match &args.config {
        Some(path) => OverlayConfig::load(path)?,
        None => OverlayConfig::default(),
    };

    let mut terminal = Terminal::new()?;
    terminal.enter()?;
    let result = event_loop(&mut terminal, config);
    terminal.leave()?;

    result
}

fn event_loop(terminal: &mut Terminal, config: OverlayConfig) -> Result<(), DemoError> {
    let bindings = KeyBindings::new();
    let rules = DemoRules;
    let mut session = Session::new(config, DemoWorld::new());

    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                TerminalEvent::Key(key_event) => {
                    if let Some(command) = bindings.resolve(key_event) {
                        debug!(?command, "key resolved");
                        session.handle(command);
                    }
                    render_requested = true;
                }
                TerminalEvent::Resize { .. } => {
                    render_requested = true;
                }
            }
        }

        if render_requested {
            let renderer = TextRenderer::new(&rules, terminal.size().width as usize)
                .with_night(session.is_night());
            let mut lines = vec![format!(
                "Turn {}{}  [s]tatus [n]ext settlement [u]nit [e]nd turn [esc] back [p]ause [q]uit",
                session.turn(),
                if session.is_night() { " (night)" } else { "" }
            )];
            lines.extend(renderer.render(session.overlay()));
            terminal.draw_lines(&lines)?;
            render_requested = false;
        }

        if session.should_exit() {
            break;
        }
    }

    Ok(())
}
