use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

use crate::accordion::Accordion;
use crate::config::Config;
use crate::ui::{install_panic_hook, TerminalGuard, WizardScreen};

/// Terminal front end for the wizard
pub struct App {
    config: Config,
    screen: WizardScreen,
}

impl App {
    pub fn new(config: Config) -> Self {
        let accordion = Accordion::new(config.proposal.sections.clone());
        Self {
            screen: WizardScreen::new(accordion),
            config,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        install_panic_hook();
        let _guard = TerminalGuard::new()?;

        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let tick_rate = Duration::from_millis(self.config.ui.tick_rate_ms);
        tracing::info!("Terminal wizard started");

        while !self.screen.should_quit() {
            terminal.draw(|f| self.screen.render(f))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.screen.handle_key(key);
                    }
                }
            }
        }

        tracing::info!(
            step = %self.screen.current_step(),
            "Terminal wizard closed"
        );
        Ok(())
    }
}
