//! TUI Renderer for the `view` command
//!
//! Owns the terminal and the event loop. All dashboard state lives in
//! `DashboardComponent`; this module only draws and forwards key presses.

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use folio_engine::Dashboard;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::presentation::views::tui::components::{DashboardAction, DashboardComponent};

pub struct TuiRenderer {
    component: DashboardComponent,
}

impl TuiRenderer {
    pub fn new(dashboard: Dashboard, title: &str) -> Self {
        Self {
            component: DashboardComponent::new(dashboard, title),
        }
    }

    /// Run until the user quits, restoring the terminal on every exit path
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut terminal = restore_on_err(enter_screen(), restore_terminal)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| {
                let area = f.area();
                self.component.render(f, area);
            })?;

            if !event::poll(Duration::from_millis(250))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                // Only key presses; Windows also reports releases
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(DashboardAction::Quit) = self.component.handle_input(key) {
                    return Ok(());
                }
            }
        }
    }
}

fn enter_screen() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort cleanup once raw mode is on but the screen could not be set up
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

fn restore_on_err<T>(result: Result<T>, restore: impl FnOnce()) -> Result<T> {
    if result.is_err() {
        restore();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_restores_terminal() {
        let restored = Cell::new(false);
        let result: Result<()> = restore_on_err(Err(anyhow::anyhow!("no tty")), || {
            restored.set(true)
        });

        assert!(result.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_successful_setup_keeps_terminal() {
        let restored = Cell::new(false);
        let result = restore_on_err(Ok(7), || restored.set(true));

        assert_eq!(result.unwrap(), 7);
        assert!(!restored.get());
    }
}
