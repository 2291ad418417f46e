// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Derived lookups over the catalog and the reveal window.

pub mod mosques;

pub use mosques::{mosque_search, next_congregation, EmptyVisibleList, MosqueSearchMode};
