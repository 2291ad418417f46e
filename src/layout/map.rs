// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{GeoCoordinate, MosqueId};

/// A marker the map should place: a mosque from the visible window, or the user's fix.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    kind: MarkerKind,
    label: String,
    coordinate: GeoCoordinate,
}

impl MarkerSpec {
    pub fn mosque(mosque_id: MosqueId, label: impl Into<String>, coordinate: GeoCoordinate) -> Self {
        Self {
            kind: MarkerKind::Mosque(mosque_id),
            label: label.into(),
            coordinate,
        }
    }

    pub fn user(coordinate: GeoCoordinate) -> Self {
        Self {
            kind: MarkerKind::User,
            label: "You".to_owned(),
            coordinate,
        }
    }

    pub fn kind(&self) -> &MarkerKind {
        &self.kind
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerKind {
    Mosque(MosqueId),
    User,
}

/// A marker's character cell inside the map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerPlacement {
    x: usize,
    y: usize,
}

impl MarkerPlacement {
    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapLayout {
    width: usize,
    height: usize,
    placements: Vec<(MarkerSpec, MarkerPlacement)>,
}

impl MapLayout {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn placements(&self) -> &[(MarkerSpec, MarkerPlacement)] {
        &self.placements
    }
}

// Spans narrower than this are treated as degenerate and widened around their midpoint, so a
// single marker (or markers on one street) lands in the middle instead of a corner.
const MIN_DEGREE_SPAN: f64 = 1e-4;

/// Projects markers into a `width` x `height` cell grid.
///
/// Longitude grows to the right, latitude grows upward (north is the top row). The bounding
/// box is taken over all markers, so the viewport always contains every marker.
pub fn layout_map(
    markers: &[MarkerSpec],
    width: usize,
    height: usize,
) -> Result<MapLayout, MapLayoutError> {
    if width == 0 || height == 0 {
        return Err(MapLayoutError::EmptyViewport { width, height });
    }
    if markers.is_empty() {
        return Err(MapLayoutError::NoMarkers);
    }

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    for marker in markers {
        let coordinate = marker.coordinate();
        min_lat = min_lat.min(coordinate.latitude());
        max_lat = max_lat.max(coordinate.latitude());
        min_lon = min_lon.min(coordinate.longitude());
        max_lon = max_lon.max(coordinate.longitude());
    }

    let (min_lat, max_lat) = widen_degenerate_axis(min_lat, max_lat);
    let (min_lon, max_lon) = widen_degenerate_axis(min_lon, max_lon);
    let lat_span = max_lat - min_lat;
    let lon_span = max_lon - min_lon;

    let placements = markers
        .iter()
        .map(|marker| {
            let coordinate = marker.coordinate();
            let fx = (coordinate.longitude() - min_lon) / lon_span;
            let fy = (max_lat - coordinate.latitude()) / lat_span;
            let x = scale_to_cell(fx, width);
            let y = scale_to_cell(fy, height);
            (marker.clone(), MarkerPlacement { x, y })
        })
        .collect();

    Ok(MapLayout {
        width,
        height,
        placements,
    })
}

fn widen_degenerate_axis(min: f64, max: f64) -> (f64, f64) {
    if max - min >= MIN_DEGREE_SPAN {
        return (min, max);
    }
    let mid = (min + max) / 2.0;
    (mid - MIN_DEGREE_SPAN / 2.0, mid + MIN_DEGREE_SPAN / 2.0)
}

fn scale_to_cell(fraction: f64, cells: usize) -> usize {
    let scaled = (fraction * (cells - 1) as f64).round();
    (scaled.max(0.0) as usize).min(cells - 1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapLayoutError {
    EmptyViewport { width: usize, height: usize },
    NoMarkers,
}

impl fmt::Display for MapLayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyViewport { width, height } => {
                write!(f, "map viewport must be non-empty (got {width}x{height})")
            }
            Self::NoMarkers => f.write_str("map needs at least one marker"),
        }
    }
}

impl std::error::Error for MapLayoutError {}

#[cfg(test)]
mod tests {
    use super::{layout_map, MapLayoutError, MarkerSpec};
    use crate::model::{GeoCoordinate, MosqueId};

    fn coord(latitude: f64, longitude: f64) -> GeoCoordinate {
        GeoCoordinate::new(latitude, longitude).expect("coordinate")
    }

    fn mosque_marker(id: &str, latitude: f64, longitude: f64) -> MarkerSpec {
        MarkerSpec::mosque(MosqueId::new(id).expect("id"), id.to_owned(), coord(latitude, longitude))
    }

    #[test]
    fn rejects_empty_viewport() {
        let markers = [mosque_marker("m:a", 51.0, 0.0)];
        assert_eq!(
            layout_map(&markers, 0, 10),
            Err(MapLayoutError::EmptyViewport { width: 0, height: 10 })
        );
        assert_eq!(
            layout_map(&markers, 10, 0),
            Err(MapLayoutError::EmptyViewport { width: 10, height: 0 })
        );
    }

    #[test]
    fn rejects_empty_marker_set() {
        assert_eq!(layout_map(&[], 10, 10), Err(MapLayoutError::NoMarkers));
    }

    #[test]
    fn north_west_marker_lands_top_left() {
        let markers = [
            mosque_marker("m:nw", 51.52, -0.14),
            mosque_marker("m:se", 51.50, -0.12),
        ];
        let layout = layout_map(&markers, 40, 12).expect("layout");

        let (_, nw) = &layout.placements()[0];
        let (_, se) = &layout.placements()[1];
        assert_eq!((nw.x(), nw.y()), (0, 0));
        assert_eq!((se.x(), se.y()), (39, 11));
    }

    #[test]
    fn single_marker_centers() {
        let markers = [mosque_marker("m:only", 51.5166, -0.0656)];
        let layout = layout_map(&markers, 41, 11).expect("layout");

        let (_, placement) = &layout.placements()[0];
        assert_eq!((placement.x(), placement.y()), (20, 5));
    }

    #[test]
    fn every_marker_stays_inside_the_viewport() {
        let markers = (0..7)
            .map(|i| mosque_marker("m:x", 51.5074 + 0.001 * i as f64, -0.1278 - 0.001 * i as f64))
            .collect::<Vec<_>>();
        let layout = layout_map(&markers, 30, 9).expect("layout");

        assert_eq!(layout.placements().len(), 7);
        for (_, placement) in layout.placements() {
            assert!(placement.x() < 30);
            assert!(placement.y() < 9);
        }
    }

    #[test]
    fn user_marker_is_laid_out_like_any_other() {
        let markers = [
            mosque_marker("m:a", 51.50, -0.13),
            MarkerSpec::user(coord(51.51, -0.12)),
        ];
        let layout = layout_map(&markers, 20, 10).expect("layout");
        assert_eq!(layout.placements().len(), 2);
        assert_eq!(layout.placements()[1].0.label(), "You");
    }
}
