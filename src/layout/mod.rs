// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Geometry for the ASCII map.
//!
//! The layout projects marker coordinates into integer character cells; rendering and styling
//! live in `render` and `tui`.

pub mod map;

pub use map::{layout_map, MapLayout, MapLayoutError, MarkerKind, MarkerPlacement, MarkerSpec};
