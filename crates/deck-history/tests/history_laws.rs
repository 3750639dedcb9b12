// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Linear undo laws checked against a reference model.

use deck_history::{HistoryStack, SaveOutcome};
use deck_scene_codec::Snapshot;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Save(u8),
    Undo,
    Redo,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..6u8).prop_map(Op::Save),
        1 => Just(Op::Undo),
        1 => Just(Op::Redo),
    ]
}

fn snap(n: u8) -> Snapshot {
    Snapshot::from_raw(format!(r#"{{"objects":[{n}]}}"#))
}

proptest! {
    #[test]
    fn stack_matches_reference_model(seed in 0..6u8, ops in prop::collection::vec(op(), 0..64)) {
        let mut stack = HistoryStack::seeded(snap(seed));
        let mut model = vec![seed];
        let mut cursor = 0usize;

        for op in ops {
            match op {
                Op::Save(n) => {
                    let outcome = stack.save(snap(n));
                    if model[cursor] == n {
                        prop_assert_eq!(outcome, SaveOutcome::Unchanged);
                    } else {
                        let truncated = model.len() - cursor - 1;
                        model.truncate(cursor + 1);
                        model.push(n);
                        cursor += 1;
                        prop_assert_eq!(outcome, SaveOutcome::Pushed { truncated });
                    }
                }
                Op::Undo => {
                    let got = stack.undo().cloned();
                    if cursor > 0 {
                        cursor -= 1;
                        prop_assert_eq!(got, Some(snap(model[cursor])));
                    } else {
                        prop_assert!(got.is_none());
                    }
                }
                Op::Redo => {
                    let got = stack.redo().cloned();
                    if cursor + 1 < model.len() {
                        cursor += 1;
                        prop_assert_eq!(got, Some(snap(model[cursor])));
                    } else {
                        prop_assert!(got.is_none());
                    }
                }
            }
            prop_assert_eq!(stack.cursor(), cursor);
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(stack.can_undo(), cursor > 0);
            prop_assert_eq!(stack.can_redo(), cursor + 1 < model.len());
        }
    }

    #[test]
    fn undo_then_redo_is_identity(a in 0..100u8, b in 0..100u8) {
        prop_assume!(a != b);
        let mut stack = HistoryStack::seeded(snap(a));
        stack.save(snap(b));
        prop_assert_eq!(stack.undo().cloned(), Some(snap(a)));
        prop_assert_eq!(stack.redo().cloned(), Some(snap(b)));
        prop_assert!(stack.redo().is_none());
    }
}
