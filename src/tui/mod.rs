//! Interactive swipe interface
mod animation;
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use anyhow::Result;
pub use app::App;

use crate::config::Config;
use crate::session::SessionController;
use terminal::TerminalManager;

/// Run the interactive TUI until the user quits
pub fn run_interactive(session: SessionController, config: &Config) -> Result<()> {
    let mut manager = TerminalManager::new()?;
    let mut app = App::new(session, config);

    let res = app.run(manager.terminal_mut());

    manager.restore()?;
    tracing::debug!(committed = app.session().committed(), "interactive session ended");
    res
}
