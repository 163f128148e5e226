//! Theme selection UI for alatheme
//!
//! List of installed themes plus a sample panel showing the 16 ANSI colors.
//! The widget is purely presentational: rendering is a function of the
//! entries and the highlighted index, and config-file writes happen in the
//! session layer, not here.

use crate::catalog::ThemeEntry;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

/// Result of picker interaction
#[derive(Debug, Clone)]
pub enum PickerResult {
    /// User confirmed the highlighted theme
    Selected(ThemeEntry),
    /// User cancelled the picker
    Cancel,
}

/// Theme picker UI component
pub struct ThemePicker {
    /// Available themes
    entries: Vec<ThemeEntry>,

    /// Indices into `entries` that match the current filter
    filtered: Vec<usize>,

    /// Highlight position within `filtered`
    cursor: usize,

    /// Incremental filter query
    filter: String,

    /// Whether typed characters feed the filter
    filtering: bool,

    /// List state for ratatui
    list_state: ListState,
}

impl ThemePicker {
    /// Create a picker over the catalog listing
    pub fn new(entries: Vec<ThemeEntry>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        let filtered = (0..entries.len()).collect();
        Self {
            entries,
            filtered,
            cursor: 0,
            filter: String::new(),
            filtering: false,
            list_state,
        }
    }

    /// Get the highlighted theme
    pub fn selected(&self) -> Option<&ThemeEntry> {
        self.filtered.get(self.cursor).map(|&i| &self.entries[i])
    }

    /// Catalog index of the highlighted theme.
    ///
    /// Stable across filter changes: narrowing the list to a different theme
    /// at the same cursor position yields a different index, so the session's
    /// index-keyed preview still fires.
    pub fn selected_index(&self) -> usize {
        self.filtered.get(self.cursor).copied().unwrap_or(0)
    }

    /// Current filter query
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Whether typed characters feed the filter
    pub fn is_filtering(&self) -> bool {
        self.filtering
    }

    /// Handle key input
    ///
    /// Returns `Some(result)` if the session should end,
    /// `None` if browsing continues. While the filter is active, printable
    /// keys narrow the list and Esc clears the filter instead of cancelling;
    /// navigation keys keep working either way.
    pub fn handle_key(&mut self, key: KeyCode) -> Option<PickerResult> {
        if self.filtering {
            match key {
                KeyCode::Esc => {
                    self.filtering = false;
                    self.filter.clear();
                    self.refilter();
                    return None;
                }
                KeyCode::Backspace => {
                    self.filter.pop();
                    self.refilter();
                    return None;
                }
                KeyCode::Char(c) => {
                    self.filter.push(c);
                    self.refilter();
                    return None;
                }
                // Enter and navigation fall through to the shared handling
                _ => {}
            }
        }

        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_down();
                None
            }
            KeyCode::Char('/') => {
                self.filtering = true;
                None
            }
            KeyCode::Enter => self.selected().cloned().map(PickerResult::Selected),
            KeyCode::Esc | KeyCode::Char('q') => Some(PickerResult::Cancel),
            KeyCode::Home => {
                self.select(0);
                None
            }
            KeyCode::End => {
                if !self.filtered.is_empty() {
                    self.select(self.filtered.len() - 1);
                }
                None
            }
            KeyCode::PageUp => {
                self.select(self.cursor.saturating_sub(10));
                None
            }
            KeyCode::PageDown => {
                if !self.filtered.is_empty() {
                    self.select((self.cursor + 10).min(self.filtered.len() - 1));
                }
                None
            }
            _ => None,
        }
    }

    /// Recompute the visible subset after a filter change.
    ///
    /// Case-insensitive substring match on the theme name; the highlight
    /// resets to the first match.
    fn refilter(&mut self) {
        let query = self.filter.to_lowercase();
        self.filtered = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.name.to_lowercase().contains(&query))
            .map(|(i, _)| i)
            .collect();
        self.cursor = 0;
        self.list_state
            .select(if self.filtered.is_empty() { None } else { Some(0) });
    }

    fn select(&mut self, index: usize) {
        self.cursor = index;
        self.list_state.select(Some(index));
    }

    /// Move highlight up
    fn move_up(&mut self) {
        if self.cursor > 0 {
            self.select(self.cursor - 1);
        }
    }

    /// Move highlight down
    fn move_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.select(self.cursor + 1);
        }
    }

    /// Render the theme list and the color sample panel side by side
    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(40)])
            .split(area);

        self.render_list(f, chunks[0]);
        render_sample(f, chunks[1]);
    }

    fn render_list(&mut self, f: &mut Frame, area: Rect) {
        let title = if self.filtering || !self.filter.is_empty() {
            format!(" Select a Theme  /{} ", self.filter)
        } else {
            " Select a Theme ".to_string()
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        if self.filtered.is_empty() {
            let inner = block.inner(area);
            f.render_widget(block, area);
            let message = if self.entries.is_empty() {
                "No themes found"
            } else {
                "No matching themes"
            };
            let empty_text =
                Paragraph::new(message).style(Style::default().fg(Color::DarkGray));
            f.render_widget(empty_text, inner);
            return;
        }

        let items: Vec<ListItem> = self
            .filtered
            .iter()
            .enumerate()
            .map(|(i, &idx)| {
                let line = Line::from(vec![
                    Span::styled(
                        format!("{:>3}. ", i + 1),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(self.entries[idx].name.as_str()),
                ]);
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }

    /// Get the number of themes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no themes
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Render the ANSI color sample panel.
///
/// The terminal emulator re-reads the config on each preview write, so the
/// named colors below restyle themselves as the highlight moves.
pub fn render_sample(f: &mut Frame, area: Rect) {
    const COLORS: [(&str, Color); 16] = [
        ("black", Color::Black),
        ("red", Color::Red),
        ("green", Color::Green),
        ("yellow", Color::Yellow),
        ("blue", Color::Blue),
        ("magenta", Color::Magenta),
        ("cyan", Color::Cyan),
        ("white", Color::Gray),
        ("br-black", Color::DarkGray),
        ("br-red", Color::LightRed),
        ("br-green", Color::LightGreen),
        ("br-yellow", Color::LightYellow),
        ("br-blue", Color::LightBlue),
        ("br-magenta", Color::LightMagenta),
        ("br-cyan", Color::LightCyan),
        ("br-white", Color::White),
    ];

    let mut lines: Vec<Line> = vec![Line::from("")];
    for pair in COLORS.chunks(2) {
        let mut spans: Vec<Span> = Vec::new();
        for &(name, color) in pair {
            spans.push(Span::styled(
                format!(" {name:<12}"),
                Style::default().fg(color),
            ));
            spans.push(Span::styled("  ██  ", Style::default().fg(color)));
            spans.push(Span::styled("      ", Style::default().bg(color)));
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " The quick brown fox jumps over the lazy dog",
        Style::default(),
    )));
    lines.push(Line::from(Span::styled(
        " The quick brown fox jumps over the lazy dog",
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let sample = Paragraph::new(lines).block(
        Block::default()
            .title(" Sample ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(sample, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entries() -> Vec<ThemeEntry> {
        vec![
            ThemeEntry::new("dracula", "/t/themes/dracula.toml"),
            ThemeEntry::new("gruvbox", "/t/themes/gruvbox.toml"),
            ThemeEntry::new("nord", "/t/themes/nord.toml"),
        ]
    }

    #[test]
    fn test_new_picker() {
        let picker = ThemePicker::new(create_test_entries());

        assert_eq!(picker.len(), 3);
        assert_eq!(picker.selected_index(), 0);
        assert_eq!(picker.selected().unwrap().name, "dracula");
    }

    #[test]
    fn test_navigation() {
        let mut picker = ThemePicker::new(create_test_entries());

        // Move down
        picker.handle_key(KeyCode::Down);
        assert_eq!(picker.selected().unwrap().name, "gruvbox");

        // Move down with j
        picker.handle_key(KeyCode::Char('j'));
        assert_eq!(picker.selected().unwrap().name, "nord");

        // Move down at bottom (should stay)
        picker.handle_key(KeyCode::Down);
        assert_eq!(picker.selected().unwrap().name, "nord");

        // Move up
        picker.handle_key(KeyCode::Up);
        assert_eq!(picker.selected().unwrap().name, "gruvbox");

        // Move up with k
        picker.handle_key(KeyCode::Char('k'));
        assert_eq!(picker.selected().unwrap().name, "dracula");

        // Move up at top (should stay)
        picker.handle_key(KeyCode::Up);
        assert_eq!(picker.selected().unwrap().name, "dracula");
    }

    #[test]
    fn test_selection() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::Down);
        let result = picker.handle_key(KeyCode::Enter);

        match result {
            Some(PickerResult::Selected(entry)) => {
                assert_eq!(entry.name, "gruvbox");
            }
            _ => panic!("Expected Selected result"),
        }
    }

    #[test]
    fn test_cancel() {
        let mut picker = ThemePicker::new(create_test_entries());

        let result = picker.handle_key(KeyCode::Esc);
        assert!(matches!(result, Some(PickerResult::Cancel)));

        let result = picker.handle_key(KeyCode::Char('q'));
        assert!(matches!(result, Some(PickerResult::Cancel)));
    }

    #[test]
    fn test_home_end_keys() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::End);
        assert_eq!(picker.selected().unwrap().name, "nord");

        picker.handle_key(KeyCode::Home);
        assert_eq!(picker.selected().unwrap().name, "dracula");
    }

    #[test]
    fn test_page_keys_clamp() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::PageDown);
        assert_eq!(picker.selected().unwrap().name, "nord");

        picker.handle_key(KeyCode::PageUp);
        assert_eq!(picker.selected().unwrap().name, "dracula");
    }

    #[test]
    fn test_filter_narrows_list() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::Char('/'));
        assert!(picker.is_filtering());

        picker.handle_key(KeyCode::Char('g'));
        picker.handle_key(KeyCode::Char('r'));

        assert_eq!(picker.filter(), "gr");
        assert_eq!(picker.selected().unwrap().name, "gruvbox");

        // Only one match; Down stays put
        picker.handle_key(KeyCode::Down);
        assert_eq!(picker.selected().unwrap().name, "gruvbox");
    }

    #[test]
    fn test_filter_keeps_catalog_index_stable() {
        let mut picker = ThemePicker::new(create_test_entries());
        assert_eq!(picker.selected_index(), 0);

        picker.handle_key(KeyCode::Char('/'));
        picker.handle_key(KeyCode::Char('n'));
        picker.handle_key(KeyCode::Char('o'));

        // "nord" sits at cursor 0 of the filtered view but its catalog
        // index is 2, so an index-keyed preview still detects the change.
        assert_eq!(picker.selected().unwrap().name, "nord");
        assert_eq!(picker.selected_index(), 2);
    }

    #[test]
    fn test_filter_backspace_widens_again() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::Char('/'));
        picker.handle_key(KeyCode::Char('d'));
        assert_eq!(picker.selected().unwrap().name, "dracula");

        picker.handle_key(KeyCode::Backspace);
        assert_eq!(picker.filter(), "");
        picker.handle_key(KeyCode::End);
        assert_eq!(picker.selected().unwrap().name, "nord");
    }

    #[test]
    fn test_filter_esc_clears_instead_of_cancelling() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::Char('/'));
        picker.handle_key(KeyCode::Char('n'));

        let result = picker.handle_key(KeyCode::Esc);
        assert!(result.is_none());
        assert!(!picker.is_filtering());
        assert_eq!(picker.filter(), "");
        picker.handle_key(KeyCode::End);
        assert_eq!(picker.selected().unwrap().name, "nord");

        // Second Esc, filter inactive: cancel as usual
        let result = picker.handle_key(KeyCode::Esc);
        assert!(matches!(result, Some(PickerResult::Cancel)));
    }

    #[test]
    fn test_filter_enter_confirms_filtered_selection() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::Char('/'));
        picker.handle_key(KeyCode::Char('n'));
        let result = picker.handle_key(KeyCode::Enter);

        match result {
            Some(PickerResult::Selected(entry)) => {
                assert_eq!(entry.name, "nord");
            }
            _ => panic!("Expected Selected result"),
        }
    }

    #[test]
    fn test_filter_consumes_letter_keybindings() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::Char('/'));
        // 'q' and 'j' are filter text now, not cancel/navigation
        assert!(picker.handle_key(KeyCode::Char('q')).is_none());
        assert!(picker.handle_key(KeyCode::Char('j')).is_none());

        assert_eq!(picker.filter(), "qj");
    }

    #[test]
    fn test_filter_without_match() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::Char('/'));
        picker.handle_key(KeyCode::Char('z'));

        assert!(picker.selected().is_none());
        assert!(picker.handle_key(KeyCode::Enter).is_none());
        assert!(picker.handle_key(KeyCode::Down).is_none());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let mut picker = ThemePicker::new(create_test_entries());

        picker.handle_key(KeyCode::Char('/'));
        picker.handle_key(KeyCode::Char('N'));

        assert_eq!(picker.selected().unwrap().name, "nord");
    }

    #[test]
    fn test_empty_picker() {
        let mut picker = ThemePicker::new(Vec::new());

        assert!(picker.is_empty());
        assert!(picker.selected().is_none());
        assert!(picker.handle_key(KeyCode::Enter).is_none());
        assert!(picker.handle_key(KeyCode::Down).is_none());
    }
}
