// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::PrayerId;

/// One row of the daily congregation timetable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrayerTime {
    prayer_id: PrayerId,
    name: String,
    time_label: String,
}

impl PrayerTime {
    pub fn new(prayer_id: PrayerId, name: impl Into<String>, time_label: impl Into<String>) -> Self {
        Self {
            prayer_id,
            name: name.into(),
            time_label: time_label.into(),
        }
    }

    pub fn prayer_id(&self) -> &PrayerId {
        &self.prayer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }
}

/// The upcoming prayer shown in the overview header and on the detail card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer {
    name: String,
    time_label: String,
}

impl NextPrayer {
    pub fn new(name: impl Into<String>, time_label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            time_label: time_label.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn time_label(&self) -> &str {
        &self.time_label
    }
}
