//! The wizard screen: breadcrumb bar, current step, and on the Summary step
//! the proposal sections.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use tui_textarea::{CursorMove, TextArea};

use crate::accordion::{Accordion, AccordionSection};
use crate::ui::breadcrumb_bar::breadcrumb_line;
use crate::ui::dialogs::HelpDialog;
use crate::ui::keybindings::{action_for, Action, ShortcutContext};
use crate::wizard::{WizardNavigator, WizardStep};

/// Rows given to the section editor
const EDITOR_HEIGHT: u16 = 6;

/// Editor bound to the section it is editing
struct SectionEditor {
    section_id: String,
    textarea: TextArea<'static>,
}

impl SectionEditor {
    fn new(section_id: &str, draft: &str) -> Self {
        let mut lines: Vec<String> = draft.lines().map(str::to_string).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        let mut textarea = TextArea::new(lines);
        textarea.move_cursor(CursorMove::Bottom);
        textarea.move_cursor(CursorMove::End);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow))
                .title(" Editing · Ctrl+s save · Esc discard "),
        );
        Self {
            section_id: section_id.to_string(),
            textarea,
        }
    }

    fn text(&self) -> String {
        self.textarea.lines().join("\n")
    }
}

pub struct WizardScreen {
    navigator: WizardNavigator,
    accordion: Accordion,
    /// Index of the highlighted proposal section
    selected: usize,
    editor: Option<SectionEditor>,
    help: HelpDialog,
    should_quit: bool,
}

impl WizardScreen {
    pub fn new(accordion: Accordion) -> Self {
        Self {
            navigator: WizardNavigator::new(),
            accordion,
            selected: 0,
            editor: None,
            help: HelpDialog::new(),
            should_quit: false,
        }
    }

    pub fn current_step(&self) -> WizardStep {
        self.navigator.current()
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn help_visible(&self) -> bool {
        self.help.visible
    }

    /// Key context: the editor captures typing while it is open
    pub fn context(&self) -> ShortcutContext {
        if self.editor.is_some() {
            ShortcutContext::Editor
        } else {
            ShortcutContext::Wizard
        }
    }

    fn on_summary(&self) -> bool {
        self.navigator.current() == WizardStep::Summary
    }

    fn selected_id(&self) -> Option<String> {
        if !self.on_summary() {
            return None;
        }
        self.accordion
            .sections()
            .get(self.selected)
            .map(|s| s.id.clone())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let context = self.context();

        match action_for(&key, context) {
            Some(action) => self.apply(action),
            None if context == ShortcutContext::Editor => {
                if let Some(editor) = self.editor.as_mut() {
                    editor.textarea.input(key);
                    let text = editor.text();
                    let id = editor.section_id.clone();
                    self.accordion.edit_content(&id, text);
                }
            }
            None => {}
        }

        self.sync_editor();
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleHelp => self.help.toggle(),
            Action::NextStep => {
                self.navigator.next();
            }
            Action::PreviousStep => {
                self.navigator.previous();
            }
            Action::GoToStep(ordinal) => {
                if let Some(step) = WizardStep::from_ordinal(ordinal) {
                    self.navigator.go_to(step);
                }
            }
            Action::SelectNext => {
                if self.on_summary() && self.selected + 1 < self.accordion.len() {
                    self.selected += 1;
                }
            }
            Action::SelectPrevious => {
                if self.on_summary() {
                    self.selected = self.selected.saturating_sub(1);
                }
            }
            Action::ToggleExpand => {
                if let Some(id) = self.selected_id() {
                    self.accordion.toggle_expand(&id);
                }
            }
            Action::ToggleEdit | Action::CancelEdit => {
                if let Some(id) = self.selected_id() {
                    self.accordion.toggle_edit(&id);
                }
            }
            Action::SaveEdit => {
                if let Some(id) = self.selected_id() {
                    self.accordion.save_content(&id);
                }
            }
        }

        self.sync_editor();
    }

    /// Open the editor when the highlighted section is visible and being
    /// edited; close it otherwise.
    fn sync_editor(&mut self) {
        let target = self
            .selected_id()
            .and_then(|id| self.accordion.get(&id))
            .filter(|s| s.is_editing() && s.is_expanded())
            .map(|s| (s.id.clone(), s.state.draft().unwrap_or_default().to_string()));

        match target {
            Some((id, draft)) => {
                let reuse = self
                    .editor
                    .as_ref()
                    .is_some_and(|e| e.section_id == id);
                if !reuse {
                    self.editor = Some(SectionEditor::new(&id, &draft));
                }
            }
            None => self.editor = None,
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Breadcrumb
                Constraint::Min(5),    // Step body
                Constraint::Length(1), // Footer
            ])
            .split(frame.area());

        let trail = Paragraph::new(breadcrumb_line(&self.navigator.breadcrumbs())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" AI Compute Modeller "),
        );
        frame.render_widget(trail, chunks[0]);

        self.render_step(frame, chunks[1]);
        self.render_footer(frame, chunks[2]);

        self.help.render(frame);
    }

    fn render_step(&self, frame: &mut Frame, area: Rect) {
        let step = self.navigator.current();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                format!(" {} ", step.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Description
                Constraint::Min(0),    // Proposal sections
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(step.description()).wrap(Wrap { trim: true }),
            chunks[0],
        );

        if step == WizardStep::Summary {
            self.render_sections(frame, chunks[1]);
        }
    }

    fn section_height(&self, section: &AccordionSection) -> u16 {
        let body = if !section.is_expanded() {
            0
        } else if section.is_editing() {
            EDITOR_HEIGHT
        } else {
            section.content.lines().count().max(1) as u16
        };
        1 + body
    }

    fn render_sections(&self, frame: &mut Frame, area: Rect) {
        let sections = self.accordion.sections();
        let mut constraints: Vec<Constraint> = sections
            .iter()
            .map(|s| Constraint::Length(self.section_height(s)))
            .collect();
        constraints.push(Constraint::Min(0));

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, section) in sections.iter().enumerate() {
            let row = rows[i];
            if row.height == 0 {
                continue;
            }
            let header_area = Rect { height: 1, ..row };
            let body_area = Rect {
                y: row.y + 1,
                height: row.height.saturating_sub(1),
                ..row
            };

            frame.render_widget(
                Paragraph::new(section_header(section, i == self.selected)),
                header_area,
            );

            if !section.is_expanded() || body_area.height == 0 {
                continue;
            }

            match &self.editor {
                Some(editor) if editor.section_id == section.id => {
                    frame.render_widget(&editor.textarea, body_area);
                }
                _ => {
                    let text = section.state.draft().unwrap_or(&section.content);
                    let body = Paragraph::new(
                        text.lines()
                            .map(|l| Line::from(format!("    {l}")))
                            .collect::<Vec<_>>(),
                    )
                    .style(Style::default().fg(Color::Gray));
                    frame.render_widget(body, body_area);
                }
            }
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let (ordinal, total) = self.navigator.progress();
        let hints = match self.context() {
            ShortcutContext::Editor => "Ctrl+s save · Esc discard",
            ShortcutContext::Wizard if self.on_summary() => {
                "←/→ steps · ↑/↓ select · Enter expand · e edit · ? help · q quit"
            }
            ShortcutContext::Wizard => "←/→ steps · 1-7 jump · ? help · q quit",
        };

        let footer = Line::from(vec![
            Span::styled(
                format!(" Step {ordinal} of {total} "),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(" "),
            Span::styled(hints, Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(footer), area);
    }
}

fn section_header(section: &AccordionSection, selected: bool) -> Line<'static> {
    let marker = if section.is_expanded() { "▾" } else { "▸" };
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if selected {
        style = style.fg(Color::Black).bg(Color::Yellow);
    }

    let mut spans = vec![Span::styled(format!(" {marker} {} ", section.title), style)];
    if section.is_editing() {
        spans.push(Span::styled(
            " ✎ editing",
            Style::default().fg(Color::Yellow),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn screen_on_summary() -> WizardScreen {
        let mut screen = WizardScreen::new(Accordion::default());
        screen.apply(Action::GoToStep(WizardStep::Summary.ordinal()));
        screen
    }

    fn rendered(screen: &WizardScreen) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_arrow_keys_walk_steps() {
        let mut screen = WizardScreen::new(Accordion::default());
        screen.handle_key(press(KeyCode::Right));
        screen.handle_key(press(KeyCode::Right));
        assert_eq!(screen.current_step(), WizardStep::Simulate);

        screen.handle_key(press(KeyCode::Left));
        assert_eq!(screen.current_step(), WizardStep::BuildPipeline);
    }

    #[test]
    fn test_number_keys_jump_without_gating() {
        let mut screen = WizardScreen::new(Accordion::default());
        screen.handle_key(press(KeyCode::Char('7')));
        assert_eq!(screen.current_step(), WizardStep::CalculateRoi);

        screen.handle_key(press(KeyCode::Char('9')));
        assert_eq!(screen.current_step(), WizardStep::CalculateRoi);
    }

    #[test]
    fn test_section_keys_ignored_off_summary() {
        let mut screen = WizardScreen::new(Accordion::default());
        let before = screen.accordion().clone();
        screen.handle_key(press(KeyCode::Enter));
        screen.handle_key(press(KeyCode::Char('e')));
        screen.handle_key(press(KeyCode::Down));
        assert_eq!(screen.accordion(), &before);
        assert_eq!(screen.selected(), 0);
    }

    #[test]
    fn test_select_and_expand_on_summary() {
        let mut screen = screen_on_summary();
        screen.handle_key(press(KeyCode::Down));
        screen.handle_key(press(KeyCode::Enter));

        assert_eq!(screen.selected(), 1);
        assert!(screen.accordion().sections()[1].is_expanded());
        assert!(screen.accordion().sections()[0].is_expanded());

        for _ in 0..20 {
            screen.handle_key(press(KeyCode::Down));
        }
        assert_eq!(screen.selected(), screen.accordion().len() - 1);
    }

    #[test]
    fn test_edit_type_and_save() {
        let mut screen = screen_on_summary();
        let original = screen.accordion().sections()[0].content.clone();

        screen.handle_key(press(KeyCode::Char('e')));
        assert_eq!(screen.context(), ShortcutContext::Editor);

        // 'q' is text while editing, not quit
        screen.handle_key(press(KeyCode::Char('q')));
        assert!(!screen.should_quit());

        screen.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(screen.context(), ShortcutContext::Wizard);

        let section = &screen.accordion().sections()[0];
        assert!(!section.is_editing());
        assert_eq!(section.content, format!("{original}q"));
    }

    #[test]
    fn test_escape_discards_edit() {
        let mut screen = screen_on_summary();
        let original = screen.accordion().sections()[0].content.clone();

        screen.handle_key(press(KeyCode::Char('e')));
        screen.handle_key(press(KeyCode::Char('x')));
        screen.handle_key(press(KeyCode::Esc));

        let section = &screen.accordion().sections()[0];
        assert!(!section.is_editing());
        assert_eq!(section.content, original);
        assert_eq!(screen.context(), ShortcutContext::Wizard);
    }

    #[test]
    fn test_editing_collapsed_section_keeps_wizard_keys() {
        let mut screen = screen_on_summary();
        screen.handle_key(press(KeyCode::Down));
        screen.handle_key(press(KeyCode::Char('e')));

        assert!(screen.accordion().sections()[1].is_editing());
        assert_eq!(screen.context(), ShortcutContext::Wizard);

        // Expanding reveals the editor
        screen.handle_key(press(KeyCode::Enter));
        assert_eq!(screen.context(), ShortcutContext::Editor);
    }

    #[test]
    fn test_quit_and_help() {
        let mut screen = WizardScreen::new(Accordion::default());
        screen.handle_key(press(KeyCode::Char('?')));
        assert!(screen.help_visible());
        screen.handle_key(press(KeyCode::Char('q')));
        assert!(screen.should_quit());
    }

    #[test]
    fn test_render_shows_trail_and_progress() {
        let mut screen = WizardScreen::new(Accordion::default());
        screen.apply(Action::GoToStep(3));
        let text = rendered(&screen);

        assert!(text.contains("Home / Build Pipeline / Simulate"));
        assert!(text.contains("Step 3 of 7"));
        assert!(!text.contains("Executive Summary"));
    }

    #[test]
    fn test_render_summary_sections() {
        let screen = screen_on_summary();
        let text = rendered(&screen);

        assert!(text.contains("▾ Executive Summary"));
        assert!(text.contains("▸ Use Case"));
        assert!(text.contains("Step 6 of 7"));
    }
}
