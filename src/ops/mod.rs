// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mutation operations for the reveal window.
//!
//! Operations produce a minimal delta that the UI can use to refresh derived state. There is
//! no fallible op: reaching the reveal ceiling applies cleanly as a no-op with an empty delta.

use crate::model::{MosqueId, RevealState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    RevealNext,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    /// Ops that changed state; bounded no-ops are not counted.
    pub applied: usize,
    pub delta: Delta,
}

/// Minimal delta describing how the visible window changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub appended: Vec<MosqueId>,
    pub visible_len: usize,
}

pub fn apply_ops(state: &mut RevealState, ops: &[Op]) -> ApplyResult {
    let mut applied = 0;
    let mut appended = Vec::new();

    for op in ops {
        match op {
            Op::RevealNext => {
                let before = state.visible_len();
                let next = state.reveal_next();
                if next.visible_len() > before {
                    appended.extend(
                        next.visible()[before..]
                            .iter()
                            .map(|mosque| mosque.mosque_id().clone()),
                    );
                    applied += 1;
                }
                *state = next;
            }
        }
    }

    let visible_len = state.visible_len();
    ApplyResult {
        applied,
        delta: Delta {
            appended,
            visible_len,
        },
    }
}

#[cfg(test)]
mod tests;
