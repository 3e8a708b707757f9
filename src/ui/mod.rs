mod breadcrumb_bar;
pub mod dialogs;
pub mod keybindings;
mod terminal_guard;
mod wizard_screen;

pub use breadcrumb_bar::breadcrumb_line;
pub use dialogs::{centered_rect, HelpDialog};
pub use terminal_guard::{install_panic_hook, TerminalGuard};
pub use wizard_screen::WizardScreen;
