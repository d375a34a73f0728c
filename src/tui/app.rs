use anyhow::Result;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::api::{CharacterPage, CharacterSource, PageCache};
use crate::tui::cards::{self, LOAD_FAILED_NOTICE};
use crate::tui::events::Event;
use crate::tui::keys::KeyMap;
use crate::tui::pagination::Pagination;
use crate::tui::styles::Theme;
use crate::tui::Frame;

/// What the content area is currently showing
///
/// There is deliberately no loading state: while a fetch is in flight the
/// previous content stays on screen until the completion event arrives.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Nothing rendered yet (before the first fetch resolves)
    Empty,

    /// A page of characters
    Ready(CharacterPage),

    /// The last fetch failed; shows the failure notice
    Failed,
}

/// Main application state and controller
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Key mappings for the application
    key_map: KeyMap,

    /// Current theme for styling
    theme: Theme,

    /// Session cache of fetched pages
    cache: PageCache,

    /// Where character pages come from
    source: Arc<dyn CharacterSource>,

    /// Previous/next navigation state
    pagination: Pagination,

    /// Content currently on screen
    view: ViewState,

    /// First visible grid row of the card grid
    scroll_row: u16,

    /// Show the help footer
    show_help: bool,

    /// Sender used by fetch tasks to report completions
    sender: mpsc::UnboundedSender<Event>,

    /// Content area from the last render, for scroll clamping
    content_area: Rect,
}

impl App {
    pub fn new(
        source: Arc<dyn CharacterSource>,
        sender: mpsc::UnboundedSender<Event>,
        start_page: u32,
    ) -> Self {
        Self {
            should_quit: false,
            key_map: KeyMap::default(),
            theme: Theme::default(),
            cache: PageCache::new(),
            source,
            pagination: Pagination::new(start_page),
            view: ViewState::Empty,
            scroll_row: 0,
            show_help: false,
            sender,
            content_area: Rect::default(),
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    /// Load a page: cache hits apply synchronously, misses fire a background
    /// fetch whose completion arrives as a `PageLoaded`/`PageFailed` event
    pub fn load(&mut self, page: u32) {
        if let Some(data) = self.cache.get(page).cloned() {
            debug!("Serving page {} from cache", page);
            self.apply_page(data);
            return;
        }

        self.spawn_fetch(page);
    }

    /// Re-fetch the current page, bypassing the cache
    pub fn refresh(&mut self) {
        let page = self.pagination.current_page();
        info!("Refreshing page {}", page);
        self.spawn_fetch(page);
    }

    /// Navigate to a page: update pagination, jump back to the top of the
    /// grid, then load
    pub fn go_to(&mut self, page: u32) {
        self.pagination.go_to(page);
        self.scroll_row = 0;
        self.load(page);
    }

    fn spawn_fetch(&self, page: u32) {
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();

        tokio::spawn(async move {
            let event = match source.fetch_page(page).await {
                Ok(data) => Event::PageLoaded(page, data),
                Err(e) => Event::PageFailed(page, e.to_string()),
            };
            // The receiver only drops on shutdown; a send failure is fine then
            let _ = sender.send(event);
        });
    }

    fn apply_page(&mut self, data: CharacterPage) {
        self.pagination.set_total_pages(data.info.pages);
        self.view = ViewState::Ready(data);
    }

    /// Handle incoming events. Returns true when the app should exit.
    pub async fn handle_event(&mut self, event: Event) -> Result<bool> {
        match event {
            Event::Key(key_event) => {
                if self.key_map.should_quit(&key_event) {
                    self.should_quit = true;
                    return Ok(true);
                }

                if self.key_map.help.matches(&key_event) {
                    self.show_help = !self.show_help;
                } else if self.key_map.prev_page.matches(&key_event) {
                    if let Some(page) = self.pagination.prev_page() {
                        self.go_to(page);
                    }
                } else if self.key_map.next_page.matches(&key_event) {
                    if let Some(page) = self.pagination.next_page() {
                        self.go_to(page);
                    }
                } else if self.key_map.first_page.matches(&key_event) {
                    self.go_to(1);
                } else if self.key_map.refresh.matches(&key_event) {
                    self.refresh();
                } else if self.key_map.scroll_up.matches(&key_event) {
                    self.scroll_row = self.scroll_row.saturating_sub(1);
                } else if self.key_map.scroll_down.matches(&key_event) {
                    self.scroll_row = (self.scroll_row + 1).min(self.max_scroll_row());
                }
            }

            Event::Resize(_, _) => {
                self.scroll_row = self.scroll_row.min(self.max_scroll_row());
            }

            Event::Tick => {}

            // Completions are applied in arrival order. A stale completion
            // from a superseded navigation still lands; requests are never
            // de-duplicated or cancelled.
            Event::PageLoaded(page, data) => {
                debug!("Page {} loaded ({} characters)", page, data.results.len());
                self.cache.insert(page, data.clone());
                self.apply_page(data);
            }

            Event::PageFailed(page, message) => {
                error!("Failed to load page {}: {}", page, message);
                self.view = ViewState::Failed;
            }
        }

        Ok(false)
    }

    fn max_scroll_row(&self) -> u16 {
        let ViewState::Ready(page) = &self.view else {
            return 0;
        };

        let columns = cards::columns_for_width(self.content_area.width.max(1));
        let total_rows = cards::rows_for(page.results.len(), columns);
        let visible_rows = (self.content_area.height / cards::CARD_HEIGHT).max(1);
        total_rows.saturating_sub(visible_rows)
    }

    /// Render the whole frame: title, card grid, pagination bar, help footer
    pub fn render(&mut self, frame: &mut Frame) {
        let mut constraints = vec![
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(3),
        ];
        if self.show_help {
            constraints.push(Constraint::Length(1));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(frame.size());

        self.render_title(frame, chunks[0]);

        self.content_area = chunks[1];
        match &self.view {
            ViewState::Empty => {}
            ViewState::Ready(page) => {
                cards::render_page(frame, chunks[1], page, self.scroll_row, &self.theme);
            }
            ViewState::Failed => {
                cards::render_notice(
                    frame,
                    chunks[1],
                    LOAD_FAILED_NOTICE,
                    Style::default().fg(self.theme.error),
                );
            }
        }

        self.render_pagination_bar(frame, chunks[2]);

        if self.show_help {
            self.render_help(frame, chunks[3]);
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            " rickdex — Rick and Morty character browser ",
            Style::default().fg(self.theme.primary),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(title, area);
    }

    fn render_pagination_bar(&self, frame: &mut Frame, area: Rect) {
        let prev_style = if self.pagination.can_prev() {
            self.theme.control_active()
        } else {
            self.theme.control_disabled()
        };
        let next_style = if self.pagination.can_next() {
            self.theme.control_active()
        } else {
            self.theme.control_disabled()
        };

        let bar = Paragraph::new(Line::from(vec![
            Span::styled("◀ Previous", prev_style),
            Span::raw("   "),
            Span::styled(
                self.pagination.label(),
                Style::default().fg(self.theme.text),
            ),
            Span::raw("   "),
            Span::styled("Next ▶", next_style),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border_focused)),
        );

        frame.render_widget(bar, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let entries = self
            .key_map
            .help_entries()
            .into_iter()
            .map(|(key, description)| format!("{} {}", key, description))
            .collect::<Vec<_>>()
            .join("  ·  ");

        let help = Paragraph::new(Line::from(Span::styled(
            entries,
            Style::default().fg(self.theme.text_dim),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(help, area);
    }
}
