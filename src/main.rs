//! Terminal calculator binary
//!
//! Wires the controller to a crossterm/ratatui event loop: key presses and
//! keypad clicks become input tokens, flash deadlines drive the poll
//! timeout, and the theme preference is loaded from (and persisted to) a
//! JSON file.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use sumar::prefs::FileStore;
use sumar::surface::{theme, Controller, DisplayFrame, RenderSink, Theme};
use sumar::tui::{ui, InputHandler, KeyAction, Keypad};

/// How long a keypad highlight and the idle poll last
const POLL_INTERVAL: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(name = "sumar", version, about = "Button-driven terminal calculator")]
struct Cli {
    /// Start with this theme instead of the persisted preference
    #[arg(long, value_parser = parse_theme)]
    theme: Option<Theme>,

    /// Path of the preference file
    #[arg(long, default_value = "sumar-prefs.json")]
    prefs: PathBuf,
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    Theme::from_pref(value).ok_or_else(|| format!("unknown theme `{value}` (light|dark)"))
}

/// Render sink that keeps the latest frame for the draw loop
#[derive(Debug, Default)]
struct Screen {
    frame: DisplayFrame,
}

impl RenderSink for Screen {
    fn render(&mut self, frame: &DisplayFrame) {
        self.frame = frame.clone();
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut store = FileStore::open(&cli.prefs);
    if let Some(override_theme) = cli.theme {
        use sumar::surface::PreferenceStore;
        store.set(theme::PREF_KEY, override_theme.as_pref());
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, store);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    store: FileStore,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut controller = Controller::new(Screen::default(), store);
    let mut keypad = Keypad::new();
    let input_handler = InputHandler::new();

    loop {
        terminal.draw(|f| {
            ui::render(f, &controller.sink().frame, &keypad, controller.theme());
        })?;

        let now = Instant::now();
        let timeout = controller
            .next_deadline()
            .map_or(POLL_INTERVAL, |deadline| {
                deadline.saturating_duration_since(now).min(POLL_INTERVAL)
            });

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match input_handler.handle_key(key) {
                        KeyAction::Input(token) => {
                            keypad.press_for_token(token);
                            controller.handle(token, Instant::now());
                        }
                        KeyAction::ToggleTheme => controller.toggle_theme(),
                        KeyAction::Quit => break,
                        KeyAction::None => {}
                    }
                }
                Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                    let area = ui::keypad_area(terminal.get_frame().area());
                    if let Some(action) = keypad.hit_test(area, mouse.column, mouse.row) {
                        keypad.press(action);
                        controller.handle(action.token(), Instant::now());
                    }
                }
                _ => {}
            }
        } else {
            keypad.release_all();
            controller.tick(Instant::now());
        }
    }

    Ok(())
}
