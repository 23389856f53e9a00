//! Market Monitor - terminal dashboard for live market quotes
//!
//! Fetches quotes for the configured instruments on a coarse interval and
//! renders one line chart per instrument plus a scrolling ticker tape.
//! Everything runs on one thread: fetches block the frame they fire in.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use marketpulse::{init_tracing_to_file, ui, App, MonitorConfig};
use marketpulse_monitor::bin_common::{load_config_from_env, ConfigType};

fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config_path = load_config_from_env(ConfigType::Monitor);
    let config = MonitorConfig::load(&config_path)?;

    // Console logging would corrupt the alternate screen display, so it
    // stays off; a log file captures fetch activity when configured
    if let Some(path) = config.log_file.as_deref() {
        init_tracing_to_file(&config.log_level, path)?;
        config.log();
    }

    let tick = Duration::from_millis(config.ui.tick_ms);
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, tick);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick: Duration,
) -> Result<()> {
    loop {
        // Draw UI from cached data
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Clock, tape and fetch gate; the tape scrolls against the strip
        // width inside the borders
        let tape_viewport = terminal.size()?.width.saturating_sub(2);
        app.on_tick(Instant::now(), tape_viewport);

        // Handle input until the next tick
        if event::poll(tick)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (not release)
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('r') => {
                            // Manual refresh (in addition to the gate)
                            app.refresh_now(Instant::now());
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
