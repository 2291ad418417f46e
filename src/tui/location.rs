// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Location collaborator for the "you are here" map annotation.
//!
//! Modeled as a one-shot sensor subscription: each request yields at most one fix, picked up
//! by a later poll of the event loop. Fixes annotate the map only and never reach the reveal
//! model.

use crate::model::GeoCoordinate;

#[derive(Debug, Clone)]
pub(crate) struct LocationWatcher {
    pending: bool,
    sample_fix: GeoCoordinate,
}

impl LocationWatcher {
    pub(crate) fn new() -> Self {
        Self {
            pending: false,
            // Built-in sample fix a short walk from the featured mosque.
            sample_fix: GeoCoordinate::new(51.5136, -0.0696).expect("sample fix"),
        }
    }

    pub(crate) fn request(&mut self) {
        self.pending = true;
    }

    /// Delivers the fix for an outstanding request, once.
    pub(crate) fn take_update(&mut self) -> Option<GeoCoordinate> {
        if self.pending {
            self.pending = false;
            Some(self.sample_fix)
        } else {
            None
        }
    }
}
