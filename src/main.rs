use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::Local;
use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEvent,
    MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::info;

use cardiorehab::app::{App, StatusLevel};
use cardiorehab::config::{self, Config};
use cardiorehab::core::{Context, Section};
use cardiorehab::{logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "cardiorehab",
    version,
    about = "CardioRehab: cardiac rehabilitation patient dashboard for the terminal"
)]
struct Args {
    /// Section to open first (dashboard, appointments, exercise, vitals, messages, profile)
    #[arg(long)]
    section: Option<String>,

    /// Name used in the dashboard greeting
    #[arg(long)]
    patient: Option<String>,

    /// Config file (overrides CARDIOREHAB_CONFIG and the XDG lookup)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = match config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("warning: {err}; using default settings");
            Config::default()
        }
    };

    // Dropping the guard flushes the background log writer.
    let _log_guard = match logging::init(&config) {
        Ok((path, guard)) => {
            info!(log = %path.display(), "cardiorehab starting");
            Some(guard)
        }
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };

    let patient = args
        .patient
        .clone()
        .unwrap_or_else(|| config.patient_name.clone());
    let ctx = Context::new(patient, Local::now().naive_local());
    let mut app = App::new(ctx, Section::default());
    let initial = args.section.as_deref().unwrap_or(&config.default_section);
    app.router.select_id(initial);
    if initial.parse::<Section>().is_err() {
        app.set_status(
            format!("Unknown section `{initial}`, showing dashboard"),
            StatusLevel::Warn,
        );
    }

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let tick_rate = Duration::from_millis(config.tick_rate_ms.max(10));
    let res = run_app(&mut terminal, app, tick_rate);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    info!("cardiorehab stopped");
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App, tick_rate: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => handle_mouse(terminal, &mut app, mouse)?,
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}

fn handle_mouse<B: Backend>(terminal: &Terminal<B>, app: &mut App, mouse: MouseEvent) -> Result<()> {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        let size = terminal.size()?;
        app.handle_click(size, mouse.column, mouse.row);
    }
    Ok(())
}
