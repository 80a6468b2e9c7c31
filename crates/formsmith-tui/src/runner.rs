//! Main TUI runner - entry point and event loop

use formsmith_app::config::Settings;
use formsmith_app::Engine;
use formsmith_core::prelude::*;

use crate::{event, render, terminal};

/// Run the form builder until the user quits
pub async fn run(settings: Settings) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = terminal::init()?;
    if let Err(e) = terminal::enable_mouse() {
        // Keyboard reordering still works without mouse capture
        warn!("{}", e);
    }

    let mut engine = Engine::new(settings);
    let result = run_loop(&mut term, &mut engine);

    terminal::disable_mouse();
    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    while !engine.should_quit() {
        // Results of background work (clipboard writes, ack timers, signals)
        engine.drain_pending_messages();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    Ok(())
}
