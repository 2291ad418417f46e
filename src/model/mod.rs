// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! The catalog is compiled-in sample data; `RevealState` exposes a bounded, strictly growing
//! visible window over it.

pub mod catalog;
pub mod geo;
pub mod ids;
pub mod mosque;
pub mod prayer;
pub mod reveal;

pub use geo::{GeoCoordinate, GeoCoordinateError};
pub use ids::{Id, IdError, MosqueId, PrayerId};
pub use mosque::{FeaturedMosque, Mosque};
pub use prayer::{NextPrayer, PrayerTime};
pub use reveal::{RevealState, REVEAL_CEILING, SEEDED_VISIBLE};
