// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::layout::{MapLayout, MarkerKind};

use super::{
    LineSpan, MarkerIndex, LABEL_GAP, MAP_BLANK_GLYPH, MOSQUE_MARKER_GLYPH, USER_MARKER_GLYPH,
};

/// Render output plus an index suitable for stable, cell-accurate UI highlighting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedMap {
    pub text: String,
    pub marker_index: MarkerIndex,
}

impl AnnotatedMap {
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// Renders a map layout to text lines.
///
/// Marker cells are drawn first and are never overwritten; labels go beside their marker when
/// the cells are free (right side preferred, left as fallback) and are dropped otherwise.
pub fn render_map_unicode(layout: &MapLayout) -> AnnotatedMap {
    let width = layout.width();
    let height = layout.height();
    let mut grid = vec![vec![MAP_BLANK_GLYPH; width]; height];

    for (marker, placement) in layout.placements() {
        let glyph = match marker.kind() {
            MarkerKind::Mosque(_) => MOSQUE_MARKER_GLYPH,
            MarkerKind::User => USER_MARKER_GLYPH,
        };
        grid[placement.y()][placement.x()] = glyph;
    }

    let mut marker_index = MarkerIndex::new();
    for (marker, placement) in layout.placements() {
        let x = placement.x();
        let y = placement.y();
        let label_span = place_label(&mut grid, x, y, marker.label());

        if let MarkerKind::Mosque(mosque_id) = marker.kind() {
            let mut spans: Vec<LineSpan> = vec![(y, x, x)];
            if let Some((x0, x1)) = label_span {
                spans.push((y, x0, x1));
            }
            marker_index.entry(mosque_id.clone()).or_default().extend(spans);
        }
    }

    let text = grid
        .into_iter()
        .map(|row| row.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n");

    AnnotatedMap { text, marker_index }
}

fn place_label(grid: &mut [Vec<char>], x: usize, y: usize, label: &str) -> Option<(usize, usize)> {
    let chars = label.chars().collect::<Vec<_>>();
    if chars.is_empty() {
        return None;
    }
    let width = grid[y].len();

    // Right of the marker.
    let right_start = x + LABEL_GAP;
    if right_start + chars.len() <= width
        && cells_free(&grid[y], right_start, right_start + chars.len())
    {
        write_label(&mut grid[y], right_start, &chars);
        return Some((right_start, right_start + chars.len() - 1));
    }

    // Left of the marker.
    if x >= LABEL_GAP + chars.len() {
        let left_start = x - LABEL_GAP - chars.len();
        if cells_free(&grid[y], left_start, left_start + chars.len()) {
            write_label(&mut grid[y], left_start, &chars);
            return Some((left_start, left_start + chars.len() - 1));
        }
    }

    None
}

fn cells_free(row: &[char], start: usize, end: usize) -> bool {
    row[start..end].iter().all(|cell| *cell == MAP_BLANK_GLYPH)
}

fn write_label(row: &mut [char], start: usize, chars: &[char]) {
    for (offset, ch) in chars.iter().enumerate() {
        row[start + offset] = *ch;
    }
}

#[cfg(test)]
mod tests {
    use super::render_map_unicode;
    use crate::layout::{layout_map, MarkerSpec};
    use crate::model::{GeoCoordinate, MosqueId};

    fn coord(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate::new(latitude, longitude).expect("coordinate")
    }

    fn mosque_marker(id: &str, label: &str, latitude: f64, longitude: f64) -> MarkerSpec {
        MarkerSpec::mosque(MosqueId::new(id).expect("id"), label, coord(latitude, longitude))
    }

    #[test]
    fn renders_one_glyph_per_mosque() {
        let markers = [
            mosque_marker("m:a", "A", 51.50, -0.13),
            mosque_marker("m:b", "B", 51.51, -0.12),
            mosque_marker("m:c", "C", 51.52, -0.11),
        ];
        let layout = layout_map(&markers, 40, 12).expect("layout");
        let rendered = render_map_unicode(&layout);

        let glyphs = rendered.text.chars().filter(|ch| *ch == super::MOSQUE_MARKER_GLYPH).count();
        assert_eq!(glyphs, 3);
        assert_eq!(rendered.marker_index.len(), 3);
    }

    #[test]
    fn user_marker_uses_its_own_glyph_and_stays_out_of_the_index() {
        let markers = [
            mosque_marker("m:a", "A", 51.50, -0.13),
            MarkerSpec::user(coord(51.51, -0.12)),
        ];
        let layout = layout_map(&markers, 30, 10).expect("layout");
        let rendered = render_map_unicode(&layout);

        assert_eq!(rendered.text.chars().filter(|ch| *ch == super::USER_MARKER_GLYPH).count(), 1);
        assert!(rendered.text.contains("You"));
        assert_eq!(rendered.marker_index.len(), 1);
        assert!(rendered.marker_index.keys().all(|id| id.as_str() == "m:a"));
    }

    #[test]
    fn marker_index_spans_point_at_drawn_cells() {
        let markers = [mosque_marker("m:only", "Al-Noor", 51.5074, -0.1278)];
        let layout = layout_map(&markers, 30, 7).expect("layout");
        let rendered = render_map_unicode(&layout);

        let lines = rendered.lines().map(str::to_owned).collect::<Vec<_>>();
        let spans = rendered.marker_index.values().next().expect("spans");
        assert_eq!(spans.len(), 2);

        let (marker_y, marker_x, _) = spans[0];
        let marker_row = lines[marker_y].chars().collect::<Vec<_>>();
        assert_eq!(marker_row[marker_x], super::MOSQUE_MARKER_GLYPH);

        let (label_y, x0, x1) = spans[1];
        let label_row = lines[label_y].chars().collect::<Vec<_>>();
        let label = label_row[x0..=x1].iter().collect::<String>();
        assert_eq!(label, "Al-Noor");
    }

    #[test]
    fn labels_never_overwrite_marker_cells() {
        // Two markers forced onto the same row; the second label must not clobber the first
        // marker's glyph.
        let markers = [
            mosque_marker("m:west", "WestName", 51.50, -0.1300),
            mosque_marker("m:east", "EastName", 51.50, -0.1299),
        ];
        let layout = layout_map(&markers, 24, 5).expect("layout");
        let rendered = render_map_unicode(&layout);

        let glyphs = rendered.text.chars().filter(|ch| *ch == super::MOSQUE_MARKER_GLYPH).count();
        assert_eq!(glyphs, 2);
    }

    #[test]
    fn crowded_rows_drop_labels_instead_of_overlapping() {
        let markers = [
            mosque_marker("m:a", "AAAAAAAAAA", 51.50, -0.1300),
            mosque_marker("m:b", "BBBBBBBBBB", 51.50, -0.1299),
            mosque_marker("m:c", "CCCCCCCCCC", 51.50, -0.1298),
        ];
        let layout = layout_map(&markers, 12, 3).expect("layout");
        let rendered = render_map_unicode(&layout);

        // All markers drawn; the narrow viewport cannot fit every label.
        let glyphs = rendered.text.chars().filter(|ch| *ch == super::MOSQUE_MARKER_GLYPH).count();
        assert_eq!(glyphs, 3);
        for line in rendered.lines() {
            assert!(line.chars().count() <= 12);
        }
    }
}
