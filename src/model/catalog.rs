// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The built-in sample catalog.
//!
//! Catalog order is definition order and is what every surface shows; it is not re-sorted by
//! the derived numeric distance.

use super::geo::GeoCoordinate;
use super::ids::{MosqueId, PrayerId};
use super::mosque::{FeaturedMosque, Mosque};
use super::prayer::{NextPrayer, PrayerTime};

fn mid(value: &str) -> MosqueId {
    MosqueId::new(value).expect("mosque id")
}

fn pid(value: &str) -> PrayerId {
    PrayerId::new(value).expect("prayer id")
}

fn coord(latitude: f64, longitude: f64) -> GeoCoordinate {
    GeoCoordinate::new(latitude, longitude).expect("coordinate")
}

/// The master list of nearby mosques, in fixed catalog order.
pub fn nearby_mosques() -> Vec<Mosque> {
    vec![
        Mosque::new(
            mid("m:al-noor"),
            "Masjid Al-Noor",
            "Noor Road",
            "0.5 km",
            "1:00 PM",
            coord(51.5074, -0.1278),
        ),
        Mosque::new(
            mid("m:al-huda"),
            "Masjid Al-Huda",
            "Huda Street",
            "0.8 km",
            "1:15 PM",
            coord(51.5084, -0.1288),
        ),
        Mosque::new(
            mid("m:east-london"),
            "East London Mosque",
            "Whitechapel Road",
            "1.2 km",
            "1:30 PM",
            coord(51.5094, -0.1298),
        ),
        Mosque::new(
            mid("m:al-tawhid"),
            "Masjid Al-Tawhid",
            "Tawhid Street",
            "1.5 km",
            "1:45 PM",
            coord(51.5104, -0.1308),
        ),
        Mosque::new(
            mid("m:al-iman"),
            "Masjid Al-Iman",
            "Iman Avenue",
            "1.8 km",
            "2:00 PM",
            coord(51.5114, -0.1318),
        ),
        Mosque::new(
            mid("m:al-falah"),
            "Masjid Al-Falah",
            "Falah Street",
            "2.1 km",
            "2:15 PM",
            coord(51.5124, -0.1328),
        ),
        Mosque::new(
            mid("m:al-taqwa"),
            "Masjid Al-Taqwa",
            "Taqwa Lane",
            "2.4 km",
            "2:30 PM",
            coord(51.5134, -0.1338),
        ),
    ]
}

/// The five daily congregation times shown on the detail screen.
pub fn prayer_timetable() -> Vec<PrayerTime> {
    vec![
        PrayerTime::new(pid("p:fajr"), "Fajr", "5:30 AM"),
        PrayerTime::new(pid("p:dhuhr"), "Dhuhr", "1:30 PM"),
        PrayerTime::new(pid("p:asr"), "Asr", "5:00 PM"),
        PrayerTime::new(pid("p:maghrib"), "Maghrib", "7:37 PM"),
        PrayerTime::new(pid("p:isha"), "Isha", "9:30 PM"),
    ]
}

/// The featured mosque for the detail screen header and cards.
pub fn featured_mosque() -> FeaturedMosque {
    FeaturedMosque::new(
        "East London Mosque",
        "Whitechapel Rd",
        "0.7 km away",
        "1:30 PM",
        NextPrayer::new("Dhuhr", "1:07 PM"),
        coord(51.5166, -0.0656),
    )
}

/// Name of the upcoming prayer shown in the overview header.
pub const NEXT_PRAYER_NAME: &str = "Dhuhr";
