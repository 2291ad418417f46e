// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Minaret-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Minaret and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use rstest::rstest;

use super::{apply_ops, Op};
use crate::model::{catalog, RevealState};

#[test]
fn reveal_appends_the_next_catalog_entry() {
    let mut state = RevealState::new();
    let result = apply_ops(&mut state, &[Op::RevealNext]);

    assert_eq!(result.applied, 1);
    assert_eq!(result.delta.visible_len, 3);
    assert_eq!(result.delta.appended.len(), 1);
    assert_eq!(result.delta.appended[0].as_str(), "m:east-london");
}

#[rstest]
#[case(0, 2)]
#[case(1, 3)]
#[case(2, 4)]
#[case(3, 5)]
#[case(4, 6)]
#[case(5, 7)]
#[case(6, 7)]
#[case(7, 7)]
fn visible_len_after_k_reveals(#[case] reveals: usize, #[case] expected: usize) {
    let mut state = RevealState::new();
    let ops = vec![Op::RevealNext; reveals];
    let result = apply_ops(&mut state, &ops);

    assert_eq!(state.visible_len(), expected);
    assert_eq!(result.delta.visible_len, expected);
    assert_eq!(result.applied, reveals.min(5));
}

#[test]
fn reveal_at_the_ceiling_is_a_clean_no_op() {
    let mut state = RevealState::new();
    apply_ops(&mut state, &vec![Op::RevealNext; 5]);
    assert_eq!(state.visible_len(), 7);
    assert!(!state.can_reveal_more());

    let before = state.clone();
    let result = apply_ops(&mut state, &[Op::RevealNext, Op::RevealNext]);

    assert_eq!(state, before);
    assert_eq!(result.applied, 0);
    assert!(result.delta.appended.is_empty());
    assert_eq!(result.delta.visible_len, 7);
}

#[test]
fn visible_len_never_decreases() {
    let mut state = RevealState::new();
    let mut last = state.visible_len();
    for _ in 0..10 {
        apply_ops(&mut state, &[Op::RevealNext]);
        let len = state.visible_len();
        assert!(len >= last);
        last = len;
    }
}

#[test]
fn three_reveals_expose_the_first_five_in_catalog_order() {
    let mut state = RevealState::new();
    apply_ops(&mut state, &vec![Op::RevealNext; 3]);

    let catalog = catalog::nearby_mosques();
    assert_eq!(state.visible(), &catalog[..5]);
    assert!(state.can_reveal_more());
}

#[test]
fn five_reveals_expose_the_full_catalog() {
    let mut state = RevealState::new();
    apply_ops(&mut state, &vec![Op::RevealNext; 5]);

    let catalog = catalog::nearby_mosques();
    assert_eq!(state.visible(), catalog.as_slice());
    assert!(!state.can_reveal_more());

    apply_ops(&mut state, &[Op::RevealNext]);
    assert_eq!(state.visible_len(), 7);
}

#[test]
fn batched_reveals_report_every_appended_id() {
    let mut state = RevealState::new();
    let result = apply_ops(&mut state, &vec![Op::RevealNext; 5]);

    let appended = result
        .delta
        .appended
        .iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>();
    assert_eq!(
        appended,
        vec!["m:east-london", "m:al-tawhid", "m:al-iman", "m:al-falah", "m:al-taqwa"]
    );
}

#[test]
fn empty_op_slice_reports_current_window() {
    let mut state = RevealState::new();
    let result = apply_ops(&mut state, &[]);

    assert_eq!(result.applied, 0);
    assert!(result.delta.appended.is_empty());
    assert_eq!(result.delta.visible_len, 2);
}
