//! Character card rendering
//!
//! Card text is assembled by [`CardContent`], a pure builder that applies the
//! placeholder rule, so the display strings can be tested without a terminal.
//! The grid itself is immediate-mode: every frame rebuilds all visible cards
//! from the current payload, which also gives the clear-before-render
//! semantics for free.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::api::{Character, CharacterPage, CharacterStatus};
use crate::tui::styles::Theme;
use crate::tui::Frame;

/// Shown when a page has zero results
pub const NO_CHARACTERS_NOTICE: &str = "No characters found.";

/// Shown when a fetch fails for any reason
pub const LOAD_FAILED_NOTICE: &str = "Failed to load characters. Try again.";

/// Placeholder for absent or empty field values
pub const PLACEHOLDER: &str = "-";

const CARD_WIDTH: u16 = 36;

/// Height of one card incl. borders; the grid scrolls in whole card rows
pub const CARD_HEIGHT: u16 = 9;

/// Missing and empty values collapse to the placeholder. Deliberately broad:
/// a legitimate empty string is indistinguishable from an absent value.
fn coalesce(value: &str) -> &str {
    if value.is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

/// Display strings for one character card
#[derive(Debug, Clone, PartialEq)]
pub struct CardContent {
    pub name: String,
    pub status: CharacterStatus,
    pub status_line: String,
    pub species: String,
    pub kind: String,
    pub gender: String,
    pub origin: String,
    pub location: String,
    pub image: String,
}

impl CardContent {
    pub fn from_character(character: &Character) -> Self {
        let status = character.status.clone();
        let status_line = format!("{} {}", status.glyph(), coalesce(status.as_str()));

        Self {
            name: coalesce(&character.name).to_string(),
            status,
            status_line,
            species: coalesce(&character.species).to_string(),
            kind: coalesce(&character.kind).to_string(),
            gender: coalesce(&character.gender).to_string(),
            origin: coalesce(
                character.origin.as_ref().map(|o| o.name.as_str()).unwrap_or(""),
            )
            .to_string(),
            location: coalesce(
                character.location.as_ref().map(|l| l.name.as_str()).unwrap_or(""),
            )
            .to_string(),
            image: coalesce(&character.image).to_string(),
        }
    }
}

/// Number of card columns that fit in the given width
pub fn columns_for_width(width: u16) -> u16 {
    (width / CARD_WIDTH).max(1)
}

/// Number of grid rows needed for `count` cards across `columns`
pub fn rows_for(count: usize, columns: u16) -> u16 {
    let columns = columns.max(1) as usize;
    ((count + columns - 1) / columns) as u16
}

/// Render one page of characters as a card grid
///
/// `scroll_row` is the index of the first visible grid row; rows above it are
/// skipped entirely.
pub fn render_page(
    frame: &mut Frame,
    area: Rect,
    page: &CharacterPage,
    scroll_row: u16,
    theme: &Theme,
) {
    if page.results.is_empty() {
        render_notice(frame, area, NO_CHARACTERS_NOTICE, Style::default().fg(theme.text_dim));
        return;
    }

    let columns = columns_for_width(area.width);
    for (index, character) in page.results.iter().enumerate() {
        let row = index as u16 / columns;
        if row < scroll_row {
            continue;
        }

        let y = area.y + (row - scroll_row) * CARD_HEIGHT;
        if y >= area.bottom() {
            break;
        }

        let column = index as u16 % columns;
        let card_area = Rect {
            x: area.x + column * CARD_WIDTH,
            y,
            width: CARD_WIDTH.min(area.width.saturating_sub(column * CARD_WIDTH)),
            height: CARD_HEIGHT.min(area.bottom() - y),
        };

        render_card(frame, card_area, character, theme);
    }
}

/// Render a single user-visible notice centered in the area
pub fn render_notice(frame: &mut Frame, area: Rect, text: &str, style: Style) {
    let notice = Paragraph::new(Line::from(Span::styled(text, style)))
        .alignment(ratatui::layout::Alignment::Center)
        .wrap(Wrap { trim: true });

    let y = area.y + area.height / 2;
    let notice_area = Rect {
        x: area.x,
        y: y.min(area.bottom().saturating_sub(1)),
        width: area.width,
        height: 1,
    };
    frame.render_widget(notice, notice_area);
}

fn render_card(frame: &mut Frame, area: Rect, character: &Character, theme: &Theme) {
    let content = CardContent::from_character(character);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title(Span::styled(
            content.name.clone(),
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        ));

    let label = Style::default().fg(theme.text_dim);
    let value = Style::default().fg(theme.text);

    let lines = vec![
        Line::from(Span::styled(
            content.status_line.clone(),
            Style::default().fg(theme.status_color(&content.status)),
        )),
        Line::from(vec![Span::styled("Species: ", label), Span::styled(content.species, value)]),
        Line::from(vec![Span::styled("Type: ", label), Span::styled(content.kind, value)]),
        Line::from(vec![Span::styled("Gender: ", label), Span::styled(content.gender, value)]),
        Line::from(vec![Span::styled("Origin: ", label), Span::styled(content.origin, value)]),
        Line::from(vec![Span::styled("Location: ", label), Span::styled(content.location, value)]),
        Line::from(Span::styled(content.image, Style::default().fg(theme.text_dim))),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LocationRef;

    fn rick() -> Character {
        Character {
            name: "Rick Sanchez".to_string(),
            status: CharacterStatus::Alive,
            image: "url1".to_string(),
            species: "Human".to_string(),
            kind: "".to_string(),
            gender: "Male".to_string(),
            origin: Some(LocationRef { name: "Earth".to_string() }),
            location: Some(LocationRef { name: "Earth".to_string() }),
        }
    }

    #[test]
    fn test_card_content_for_full_character() {
        let content = CardContent::from_character(&rick());

        assert_eq!(content.name, "Rick Sanchez");
        assert_eq!(content.status_line, "❤️ Alive");
        assert_eq!(content.species, "Human");
        assert_eq!(content.kind, PLACEHOLDER);
        assert_eq!(content.gender, "Male");
        assert_eq!(content.origin, "Earth");
        assert_eq!(content.location, "Earth");
    }

    #[test]
    fn test_empty_fields_collapse_to_placeholder() {
        let character = Character {
            name: "".to_string(),
            status: CharacterStatus::default(),
            image: "".to_string(),
            species: "".to_string(),
            kind: "".to_string(),
            gender: "".to_string(),
            origin: None,
            location: Some(LocationRef { name: "".to_string() }),
        };

        let content = CardContent::from_character(&character);
        assert_eq!(content.name, PLACEHOLDER);
        assert_eq!(content.status_line, "❓ -");
        assert_eq!(content.species, PLACEHOLDER);
        assert_eq!(content.gender, PLACEHOLDER);
        assert_eq!(content.origin, PLACEHOLDER);
        assert_eq!(content.location, PLACEHOLDER);
        assert_eq!(content.image, PLACEHOLDER);
    }

    #[test]
    fn test_dead_status_line() {
        let mut character = rick();
        character.status = CharacterStatus::Dead;

        let content = CardContent::from_character(&character);
        assert_eq!(content.status_line, "☠️ Dead");
    }

    #[test]
    fn test_unknown_status_keeps_api_text() {
        let mut character = rick();
        character.status = CharacterStatus::Other("unknown".to_string());

        let content = CardContent::from_character(&character);
        assert_eq!(content.status_line, "❓ unknown");
    }

    fn buffer_text(backend: &ratatui::backend::TestBackend) -> String {
        let buffer = backend.buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(&buffer.get(x, y).symbol);
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_empty_page_renders_single_notice() {
        let backend = ratatui::backend::TestBackend::new(80, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let page = CharacterPage {
            info: crate::api::PageInfo { pages: 1 },
            results: vec![],
        };
        let theme = Theme::default();

        terminal
            .draw(|frame| render_page(frame, frame.size(), &page, 0, &theme))
            .unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains(NO_CHARACTERS_NOTICE));
        assert!(!text.contains("Species:"));
    }

    #[test]
    fn test_page_renders_card_per_character() {
        let backend = ratatui::backend::TestBackend::new(80, 12);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let page = CharacterPage {
            info: crate::api::PageInfo { pages: 5 },
            results: vec![rick()],
        };
        let theme = Theme::default();

        terminal
            .draw(|frame| render_page(frame, frame.size(), &page, 0, &theme))
            .unwrap();

        let text = buffer_text(terminal.backend());
        assert!(text.contains("Rick Sanchez"));
        assert!(text.contains("Species: Human"));
        assert!(text.contains("Type: -"));
        assert!(!text.contains(NO_CHARACTERS_NOTICE));
    }

    #[test]
    fn test_grid_geometry() {
        assert_eq!(columns_for_width(120), 3);
        assert_eq!(columns_for_width(10), 1);
        assert_eq!(rows_for(20, 3), 7);
        assert_eq!(rows_for(0, 3), 0);
        assert_eq!(rows_for(6, 3), 2);
    }
}
