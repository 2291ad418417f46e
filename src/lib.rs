// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minaret — prayer times and nearby mosques in the terminal.
//!
//! Single-crate layout: a compiled-in catalog model with a bounded reveal window, reveal ops,
//! ASCII map layout/rendering, and the interactive TUI shell.

pub mod layout;
pub mod model;
pub mod ops;
pub mod query;
pub mod render;
pub mod tui;
