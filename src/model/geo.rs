// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

/// A geographic coordinate in floating-point degrees.
///
/// Latitude and longitude must be finite and inside the usual WGS84 ranges; the map layout
/// relies on both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, GeoCoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoCoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoCoordinateError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoCoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for GeoCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeoCoordinateError {
    NotFinite,
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
}

impl fmt::Display for GeoCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFinite => f.write_str("coordinate components must be finite"),
            Self::LatitudeOutOfRange(value) => {
                write!(f, "latitude out of range [-90, 90]: {value}")
            }
            Self::LongitudeOutOfRange(value) => {
                write!(f, "longitude out of range [-180, 180]: {value}")
            }
        }
    }
}

impl std::error::Error for GeoCoordinateError {}

#[cfg(test)]
mod tests {
    use super::{GeoCoordinate, GeoCoordinateError};

    #[test]
    fn coordinate_accepts_london() {
        let coordinate = GeoCoordinate::new(51.5074, -0.1278).expect("coordinate");
        assert_eq!(coordinate.latitude(), 51.5074);
        assert_eq!(coordinate.longitude(), -0.1278);
    }

    #[test]
    fn coordinate_rejects_out_of_range_latitude() {
        let result = GeoCoordinate::new(91.0, 0.0);
        assert_eq!(result, Err(GeoCoordinateError::LatitudeOutOfRange(91.0)));
    }

    #[test]
    fn coordinate_rejects_out_of_range_longitude() {
        let result = GeoCoordinate::new(0.0, -180.5);
        assert_eq!(result, Err(GeoCoordinateError::LongitudeOutOfRange(-180.5)));
    }

    #[test]
    fn coordinate_rejects_nan() {
        let result = GeoCoordinate::new(f64::NAN, 0.0);
        assert_eq!(result, Err(GeoCoordinateError::NotFinite));
    }

    #[test]
    fn coordinate_displays_four_decimals() {
        let coordinate = GeoCoordinate::new(51.5166, -0.0656).expect("coordinate");
        assert_eq!(coordinate.to_string(), "51.5166,-0.0656");
    }
}
