// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Layout, title, footer, card, and map-highlight helpers used by TUI rendering.
fn stack_main_panes_vertically(area: Rect) -> bool {
    area.width < 90
}

fn footer_uses_compact_mode(area: Rect) -> bool {
    stack_main_panes_vertically(area)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Overview,
    Detail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Map,
    Mosques,
}

impl Focus {
    fn cycle(self) -> Self {
        match self {
            Self::Map => Self::Mosques,
            Self::Mosques => Self::Map,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum SearchMode {
    Inactive,
    Active { input: String },
}

fn view_title(label: &str, key: char, tail: Option<&str>) -> String {
    let mut title = format!("─[{key}]─ {label}");
    if let Some(tail) = tail {
        let tail = tail.trim();
        if !tail.is_empty() {
            title.push(' ');
            title.push_str(tail);
        }
    }
    title.push(' ');
    title
}

/// Left- and right-aligned labels on one row, padded to `width` cells when it fits.
fn keyed_row(left: &str, right: &str, width: usize) -> String {
    let left_len = left.chars().count();
    let right_len = right.chars().count();
    if width > left_len + right_len {
        let pad = width - left_len - right_len;
        format!("{left}{}{right}", " ".repeat(pad))
    } else {
        format!("{left} {right}")
    }
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, key: &str) {
    spans.push(Span::styled(
        format!("{label} "),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        format!("{key}  "),
        Style::default().fg(FOOTER_KEY_COLOR),
    ));
}

fn footer_help_line(app: &App, toast_suffix: &str, compact: bool) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    spans.push(Span::styled(
        FOOTER_BRAND,
        Style::default().fg(FOOTER_BRAND_COLOR),
    ));

    if let SearchMode::Active { .. } = app.search {
        push_footer_entry(&mut spans, "JUMP", "Enter");
        push_footer_entry(&mut spans, "CANCEL", "Esc");
    } else {
        match app.screen {
            Screen::Detail => {
                push_footer_entry(&mut spans, "BACK", "Esc");
                push_footer_entry(&mut spans, "QUIT", "q");
            }
            Screen::Overview if compact => {
                if app.state.can_reveal_more() {
                    push_footer_entry(&mut spans, "MORE", "m");
                }
                push_footer_entry(&mut spans, "QUIT", "q");
            }
            Screen::Overview => {
                if app.state.can_reveal_more() {
                    push_footer_entry(&mut spans, "SHOW MORE", "m");
                }
                push_footer_entry(&mut spans, "FOCUS", "Tab");
                push_footer_entry(&mut spans, "OPEN", "Enter");
                push_footer_entry(&mut spans, "MAP", "f");
                push_footer_entry(&mut spans, "LOCATE", "l");
                push_footer_entry(&mut spans, "SEARCH", "/");
                push_footer_entry(&mut spans, "QUIT", "q");
            }
        }
    }

    if !toast_suffix.is_empty() {
        spans.push(Span::styled(
            format!("— {toast_suffix}"),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }

    Line::from(spans)
}

fn next_prayer_lines(app: &App) -> Text<'static> {
    let time_label = match query::next_congregation(&app.state) {
        Ok(mosque) => mosque.congregation_label().to_owned(),
        Err(_) => "—".to_owned(),
    };
    Text::from(vec![
        Line::from(Span::styled(
            "NEXT PRAYER".to_owned(),
            app.theme.muted_style(),
        )),
        Line::from(vec![
            Span::styled(catalog::NEXT_PRAYER_NAME.to_owned(), app.theme.accent_style()),
            Span::raw(" · "),
            Span::styled(time_label, app.theme.base_style()),
        ]),
    ])
}

fn mosque_card_text(mosque: &Mosque, width: usize, theme: &TuiTheme) -> Text<'static> {
    let title = keyed_row(mosque.name(), mosque.distance_label(), width);
    let congregation = keyed_row("Jama'ah", mosque.congregation_label(), width);
    Text::from(vec![
        Line::from(Span::styled(
            title,
            theme.base_style().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("⌖ {}", mosque.location()),
            theme.muted_style(),
        )),
        Line::from(Span::styled(congregation, theme.base_style())),
        Line::from(Span::raw(String::new())),
    ])
}

fn timetable_items(
    timetable: &[PrayerTime],
    width: usize,
    theme: &TuiTheme,
) -> Vec<ListItem<'static>> {
    timetable
        .iter()
        .map(|prayer| {
            ListItem::new(Line::from(Span::styled(
                keyed_row(prayer.name(), prayer.time_label(), width),
                theme.base_style(),
            )))
        })
        .collect()
}

/// Converts rendered map text into styled lines, highlighting the selected mosque's spans and
/// tinting the user marker glyph.
fn map_text_with_highlight(
    map: &AnnotatedMap,
    selected: Option<&MosqueId>,
    theme: &TuiTheme,
) -> Text<'static> {
    let selected_spans: Vec<LineSpan> = selected
        .and_then(|mosque_id| map.marker_index.get(mosque_id))
        .cloned()
        .unwrap_or_default();

    let mut lines = Vec::<Line<'static>>::new();
    for (y, raw) in map.text.split('\n').enumerate() {
        let chars: Vec<char> = raw.chars().collect();
        let mut spans = Vec::<Span<'static>>::new();
        let mut x = 0usize;
        while x < chars.len() {
            if let Some(&(_, x0, x1)) = selected_spans
                .iter()
                .find(|(span_y, span_x0, _)| *span_y == y && *span_x0 == x)
            {
                let segment: String = chars[x0..=x1.min(chars.len() - 1)].iter().collect();
                spans.push(Span::styled(segment, theme.marker_highlight_style()));
                x = x1 + 1;
            } else {
                let next_start = selected_spans
                    .iter()
                    .filter(|(span_y, span_x0, _)| *span_y == y && *span_x0 > x)
                    .map(|(_, span_x0, _)| *span_x0)
                    .min()
                    .unwrap_or(chars.len());
                push_plain_map_segment(&mut spans, &chars[x..next_start], theme);
                x = next_start;
            }
        }
        if spans.is_empty() {
            spans.push(Span::raw(String::new()));
        }
        lines.push(Line::from(spans));
    }
    Text::from(lines)
}

fn push_plain_map_segment(spans: &mut Vec<Span<'static>>, segment: &[char], theme: &TuiTheme) {
    let mut run = String::new();
    for &ch in segment {
        if ch == USER_MARKER_GLYPH {
            if !run.is_empty() {
                spans.push(Span::raw(std::mem::take(&mut run)));
            }
            spans.push(Span::styled(ch.to_string(), theme.user_marker_style()));
        } else {
            run.push(ch);
        }
    }
    if !run.is_empty() {
        spans.push(Span::raw(run));
    }
}

/// Visible mosques matching `needle`, best fuzzy match first.
fn ranked_mosque_indices(mosques: &[Mosque], needle: &str) -> Vec<usize> {
    let hits = mosque_search(mosques, needle, MosqueSearchMode::Substring, true)
        .unwrap_or_default();
    let mut ranked = hits
        .into_iter()
        .filter_map(|hit| {
            mosques
                .iter()
                .position(|mosque| mosque.mosque_id() == hit.mosque_id())
                .map(|idx| {
                    let ratio = rapidfuzz::fuzz::ratio(needle.chars(), hit.name().chars());
                    (idx, ratio)
                })
        })
        .collect::<Vec<_>>();
    ranked.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });
    ranked.into_iter().map(|(idx, _)| idx).collect()
}

fn search_overlay_rect(area: Rect) -> Rect {
    let height = area.height.min(3);
    let inset = if area.width > 8 { 2 } else { 0 };
    Rect {
        x: area.x + inset,
        y: area.y + area.height.saturating_sub(height + 1),
        width: area.width.saturating_sub(inset * 2),
        height,
    }
}
