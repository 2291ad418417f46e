// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::geo::GeoCoordinate;
use super::ids::MosqueId;
use super::prayer::NextPrayer;

/// A nearby mosque as shown on the overview screen and the map.
///
/// The distance and congregation fields are human-formatted labels, not measurements; the
/// catalog carries them verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Mosque {
    mosque_id: MosqueId,
    name: String,
    location: String,
    distance_label: String,
    congregation_label: String,
    coordinate: GeoCoordinate,
}

impl Mosque {
    pub fn new(
        mosque_id: MosqueId,
        name: impl Into<String>,
        location: impl Into<String>,
        distance_label: impl Into<String>,
        congregation_label: impl Into<String>,
        coordinate: GeoCoordinate,
    ) -> Self {
        Self {
            mosque_id,
            name: name.into(),
            location: location.into(),
            distance_label: distance_label.into(),
            congregation_label: congregation_label.into(),
            coordinate,
        }
    }

    pub fn mosque_id(&self) -> &MosqueId {
        &self.mosque_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn distance_label(&self) -> &str {
        &self.distance_label
    }

    pub fn congregation_label(&self) -> &str {
        &self.congregation_label
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    /// Numeric kilometers derived from the distance label.
    ///
    /// Informational only; the visible list is never sorted or filtered by it.
    pub fn distance_km(&self) -> f64 {
        parse_distance_km(&self.distance_label)
    }
}

/// Parses a label like `"0.7 km"` by stripping the trailing unit marker.
///
/// Falls back to `0.0` when the remainder is not a non-negative finite number; a malformed
/// label is display data, not an error.
pub(crate) fn parse_distance_km(label: &str) -> f64 {
    let trimmed = label.trim();
    let numeric = trimmed
        .strip_suffix("km")
        .map(str::trim_end)
        .unwrap_or(trimmed);
    numeric
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
        .unwrap_or(0.0)
}

/// The featured mosque shown on the detail screen header and cards.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedMosque {
    name: String,
    location: String,
    distance_label: String,
    congregation_label: String,
    next_prayer: NextPrayer,
    coordinate: GeoCoordinate,
}

impl FeaturedMosque {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        distance_label: impl Into<String>,
        congregation_label: impl Into<String>,
        next_prayer: NextPrayer,
        coordinate: GeoCoordinate,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            distance_label: distance_label.into(),
            congregation_label: congregation_label.into(),
            next_prayer,
            coordinate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn distance_label(&self) -> &str {
        &self.distance_label
    }

    pub fn congregation_label(&self) -> &str {
        &self.congregation_label
    }

    pub fn next_prayer(&self) -> &NextPrayer {
        &self.next_prayer
    }

    pub fn coordinate(&self) -> GeoCoordinate {
        self.coordinate
    }

    pub fn distance_km(&self) -> f64 {
        parse_distance_km(&self.distance_label)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_distance_km;

    #[test]
    fn distance_parses_km_labels() {
        assert_eq!(parse_distance_km("0.7 km"), 0.7);
        assert_eq!(parse_distance_km("2.4 km"), 2.4);
        assert_eq!(parse_distance_km("0.5 km"), 0.5);
    }

    #[test]
    fn distance_falls_back_to_zero_on_garbage() {
        assert_eq!(parse_distance_km("garbage"), 0.0);
        assert_eq!(parse_distance_km(""), 0.0);
        assert_eq!(parse_distance_km("km"), 0.0);
    }

    #[test]
    fn distance_falls_back_on_trailing_words() {
        // "away" is not a unit marker; the remainder does not parse.
        assert_eq!(parse_distance_km("0.7 km away"), 0.0);
    }

    #[test]
    fn distance_rejects_negative_and_non_finite() {
        assert_eq!(parse_distance_km("-1.0 km"), 0.0);
        assert_eq!(parse_distance_km("inf km"), 0.0);
        assert_eq!(parse_distance_km("NaN km"), 0.0);
    }

    #[test]
    fn distance_accepts_bare_numbers() {
        assert_eq!(parse_distance_km("3"), 3.0);
        assert_eq!(parse_distance_km("  1.2 "), 1.2);
    }
}
