// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Provides the interactive TUI shell (ratatui + crossterm): the overview screen with the
//! ASCII map and nearby-mosque cards, and the detail screen with the congregation timetable.

use std::{error::Error, io, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::layout::{layout_map, MarkerSpec};
use crate::model::{catalog, Mosque, MosqueId, PrayerTime, RevealState};
use crate::model::{FeaturedMosque, GeoCoordinate, REVEAL_CEILING};
use crate::ops::{apply_ops, Op};
use crate::query::{self, mosque_search, MosqueSearchMode};
use crate::render::{render_map_unicode, AnnotatedMap, LineSpan, USER_MARKER_GLYPH};

mod location;
mod theme;

use location::LocationWatcher;
use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_BRAND_COLOR: Color = Color::White;
const FOOTER_BRAND: &str = "🅼 🅸 🅽 🅰 🆁 🅴 🆃 ";
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// How the TUI starts up; set from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub start_on_detail: bool,
    pub reveal_all: bool,
}

/// Runs the interactive terminal UI with default options.
pub fn run() -> Result<(), Box<dyn Error>> {
    run_with_options(RunOptions::default())
}

pub fn run_with_options(options: RunOptions) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(options, theme);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        app.poll_location();
    }

    Ok(())
}

struct App {
    state: RevealState,
    featured: FeaturedMosque,
    timetable: Vec<PrayerTime>,
    screen: Screen,
    focus: Focus,
    mosques_state: ListState,
    map_fullscreen: bool,
    search: SearchMode,
    location: LocationWatcher,
    user_fix: Option<GeoCoordinate>,
    toast: Option<String>,
    theme: TuiTheme,
    should_quit: bool,
}

impl App {
    fn new(options: RunOptions, theme: TuiTheme) -> Self {
        let mut state = RevealState::new();
        if options.reveal_all {
            apply_ops(&mut state, &vec![Op::RevealNext; REVEAL_CEILING]);
        }

        let mut mosques_state = ListState::default();
        mosques_state.select(Some(0));

        Self {
            state,
            featured: catalog::featured_mosque(),
            timetable: catalog::prayer_timetable(),
            screen: if options.start_on_detail {
                Screen::Detail
            } else {
                Screen::Overview
            },
            focus: Focus::Mosques,
            mosques_state,
            map_fullscreen: false,
            search: SearchMode::Inactive,
            location: LocationWatcher::new(),
            user_fix: None,
            toast: None,
            theme,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.handle_key_code(key.code) {
            self.should_quit = true;
        }
    }

    fn handle_key_code(&mut self, code: KeyCode) -> bool {
        self.toast = None;

        if let SearchMode::Active { .. } = self.search {
            self.handle_search_key(code);
            return false;
        }

        match self.screen {
            Screen::Detail => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc | KeyCode::Backspace => self.screen = Screen::Overview,
                _ => {}
            },
            Screen::Overview => match code {
                KeyCode::Char('q') => return true,
                KeyCode::Esc => {
                    if self.map_fullscreen {
                        self.map_fullscreen = false;
                    }
                }
                KeyCode::Tab | KeyCode::BackTab => self.focus = self.focus.cycle(),
                KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
                KeyCode::Down | KeyCode::Char('j') => self.select_next(),
                KeyCode::Enter => self.screen = Screen::Detail,
                KeyCode::Char('m') => self.reveal_next_mosque(),
                KeyCode::Char('f') => self.map_fullscreen = !self.map_fullscreen,
                KeyCode::Char('l') => self.request_location(),
                KeyCode::Char('/') => {
                    self.search = SearchMode::Active {
                        input: String::new(),
                    }
                }
                _ => {}
            },
        }

        false
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.search = SearchMode::Inactive,
            KeyCode::Enter => {
                let needle = match &self.search {
                    SearchMode::Active { input } => input.clone(),
                    SearchMode::Inactive => String::new(),
                };
                self.search = SearchMode::Inactive;
                self.jump_to_best_match(&needle);
            }
            KeyCode::Backspace => {
                if let SearchMode::Active { input } = &mut self.search {
                    input.pop();
                }
            }
            KeyCode::Char(ch) => {
                if let SearchMode::Active { input } = &mut self.search {
                    input.push(ch);
                }
            }
            _ => {}
        }
    }

    fn jump_to_best_match(&mut self, needle: &str) {
        if needle.trim().is_empty() {
            return;
        }
        match ranked_mosque_indices(self.state.visible(), needle).first() {
            Some(&idx) => {
                self.focus = Focus::Mosques;
                self.mosques_state.select(Some(idx));
            }
            None => self.set_toast(format!("No match for '{needle}'")),
        }
    }

    fn select_next(&mut self) {
        self.focus = Focus::Mosques;
        let len = self.state.visible_len();
        if len == 0 {
            return;
        }
        let next = match self.mosques_state.selected() {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        };
        self.mosques_state.select(Some(next));
    }

    fn select_prev(&mut self) {
        self.focus = Focus::Mosques;
        if self.state.visible_len() == 0 {
            return;
        }
        let prev = match self.mosques_state.selected() {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        };
        self.mosques_state.select(Some(prev));
    }

    fn reveal_next_mosque(&mut self) {
        let result = apply_ops(&mut self.state, &[Op::RevealNext]);
        if let Some(mosque_id) = result.delta.appended.first() {
            let name = self
                .state
                .visible()
                .iter()
                .find(|mosque| mosque.mosque_id() == mosque_id)
                .map(|mosque| mosque.name().to_owned())
                .unwrap_or_else(|| mosque_id.to_string());
            self.set_toast(format!("Added {name}"));
        }
    }

    fn request_location(&mut self) {
        self.location.request();
        self.set_toast("Locating…");
    }

    fn poll_location(&mut self) {
        if let Some(fix) = self.location.take_update() {
            self.user_fix = Some(fix);
            self.set_toast("Location fix acquired");
        }
    }

    fn selected_mosque_id(&self) -> Option<&MosqueId> {
        let idx = self.mosques_state.selected()?;
        self.state.visible().get(idx).map(Mosque::mosque_id)
    }

    fn map_markers(&self) -> Vec<MarkerSpec> {
        let mut markers = self
            .state
            .visible()
            .iter()
            .map(|mosque| {
                MarkerSpec::mosque(
                    mosque.mosque_id().clone(),
                    mosque.name().to_owned(),
                    mosque.coordinate(),
                )
            })
            .collect::<Vec<_>>();
        if let Some(fix) = self.user_fix {
            markers.push(MarkerSpec::user(fix));
        }
        markers
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(message.into());
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    match app.screen {
        Screen::Detail => draw_detail(frame, app, main_area),
        Screen::Overview if app.map_fullscreen => draw_map_panel(frame, app, main_area),
        Screen::Overview => draw_overview(frame, app, main_area),
    }

    let compact = footer_uses_compact_mode(main_area);
    let toast_suffix = app.toast.clone().unwrap_or_default();
    let footer =
        Paragraph::new(footer_help_line(app, &toast_suffix, compact)).style(app.theme.base_style());
    frame.render_widget(footer, status_area);

    if let SearchMode::Active { .. } = app.search {
        draw_search_overlay(frame, app, main_area);
    }
}

fn draw_overview(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(area);
    let header_area = rows[0];
    let body_area = rows[1];

    let header = Paragraph::new(next_prayer_lines(app)).style(app.theme.base_style());
    frame.render_widget(header, header_area);

    let direction = if stack_main_panes_vertically(body_area) {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let panes = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(body_area);

    draw_map_panel(frame, app, panes[0]);
    draw_mosques_panel(frame, app, panes[1]);
}

fn draw_map_panel(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Map && app.screen == Screen::Overview;
    let tail = if app.map_fullscreen {
        Some("— fullscreen, Esc closes")
    } else {
        None
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(view_title("Location", '1', tail))
        .border_style(app.theme.panel_border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let markers = app.map_markers();
    let text = match layout_map(&markers, inner.width as usize, inner.height as usize) {
        Ok(map_layout) => {
            let rendered = render_map_unicode(&map_layout);
            map_text_with_highlight(&rendered, app.selected_mosque_id(), &app.theme)
        }
        Err(err) => Text::from(Line::from(Span::styled(
            err.to_string(),
            app.theme.muted_style(),
        ))),
    };
    frame.render_widget(Paragraph::new(text).style(app.theme.base_style()), inner);
}

fn draw_mosques_panel(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Mosques;
    let tail = if app.state.can_reveal_more() {
        Some("— m shows more")
    } else {
        None
    };
    let title = view_title("Nearby Mosques", '2', tail);
    let card_width = area.width.saturating_sub(2) as usize;
    let items = app
        .state
        .visible()
        .iter()
        .map(|mosque| ListItem::new(mosque_card_text(mosque, card_width, &app.theme)))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(app.theme.panel_border_style(focused)),
        )
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut app.mosques_state);
}

fn draw_detail(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let featured = app.featured.clone();
    let header = Paragraph::new(Text::from(vec![
        Line::from(Span::styled(
            featured.name().to_owned(),
            app.theme.accent_style(),
        )),
        Line::from(vec![
            Span::styled("⌖ ".to_owned(), app.theme.muted_style()),
            Span::raw(featured.location().to_owned()),
            Span::raw("   "),
            Span::styled(featured.distance_label().to_owned(), app.theme.muted_style()),
        ]),
    ]))
    .block(Block::default().borders(Borders::BOTTOM))
    .style(app.theme.base_style());
    frame.render_widget(header, rows[0]);

    let card_width = rows[1].width.saturating_sub(2) as usize;
    let next_prayer = featured.next_prayer();
    let prayer_card = Paragraph::new(keyed_row(
        next_prayer.name(),
        next_prayer.time_label(),
        card_width,
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(view_title("Next Prayer", '1', None)),
    )
    .style(app.theme.base_style());
    frame.render_widget(prayer_card, rows[1]);

    let congregation_card = Paragraph::new(keyed_row(
        "Jama'ah",
        featured.congregation_label(),
        card_width,
    ))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(view_title("Congregation", '2', None)),
    )
    .style(app.theme.base_style());
    frame.render_widget(congregation_card, rows[2]);

    let items = timetable_items(&app.timetable, card_width, &app.theme);
    let timetable = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(view_title("Daily Times", '3', None)),
    );
    frame.render_widget(timetable, rows[3]);
}

fn draw_search_overlay(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let input = match &app.search {
        SearchMode::Active { input } => input.clone(),
        SearchMode::Inactive => return,
    };
    let matches = ranked_mosque_indices(app.state.visible(), &input).len();
    let overlay = search_overlay_rect(area);
    frame.render_widget(Clear, overlay);

    let title = view_title("Search", '/', Some(&format!("— {matches} visible")));
    let prompt = Paragraph::new(format!("/{input}"))
        .block(Block::default().borders(Borders::ALL).title(title))
        .style(app.theme.base_style());
    frame.render_widget(prompt, overlay);
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

include!("chrome.rs");
