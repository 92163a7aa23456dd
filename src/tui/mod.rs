//! Terminal user interface for the interactive code lab.
//!
//! The lab shows a source editor next to an analysis panel, with Run and
//! Analyze triggers in the header and toasts in the footer.
//!
//! # Architecture
//!
//! - [`lab_actions`]: pure key-to-action mapping
//! - [`app::LabApp`]: owns the editor and the [`AnalysisController`] and
//!   executes actions
//! - [`panel`]: view-model shared with the plain-text CLI output
//! - [`renderer`]: ratatui drawing
//!
//! The event loop runs on the calling thread. Engine calls run on the tokio
//! runtime passed to the controller, and their results are drained on each
//! loop iteration, so the request state only changes on the UI thread.
//!
//! [`AnalysisController`]: crate::session::AnalysisController

pub mod animation;
pub mod app;
pub mod editor;
pub mod lab_actions;
pub mod layout;
pub mod panel;
pub mod renderer;
pub mod theme;
pub mod toast;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use app::LabApp;
use renderer::render_lab;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Lab TUI manager
pub struct LabTui {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: LabApp,
}

impl LabTui {
    /// Enter the alternate screen and take over the terminal.
    pub fn new(app: LabApp) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, app })
    }

    /// Run the interactive event loop until the user quits
    pub fn run(&mut self) -> Result<()> {
        while !self.app.should_quit() {
            self.app.tick();
            self.terminal.draw(|f| render_lab(f, &self.app))?;

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    // Windows reports releases too
                    if key.kind == KeyEventKind::Press {
                        self.app.handle_key(key);
                    }
                }
            }
        }

        self.app.shutdown();
        self.cleanup()?;
        Ok(())
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for LabTui {
    fn drop(&mut self) {
        self.app.shutdown();
        let _ = self.cleanup();
    }
}
