use bingo::{Card, GameEvent, GameSession, SessionConfig, SessionSnapshot};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn snapshot_json_roundtrip(seed in any::<u64>(), calls in 0..40usize) {
        let mut session = GameSession::new(SmallRng::seed_from_u64(seed), SessionConfig::default());
        for _ in 0..calls {
            if session.status().is_over() {
                break;
            }
            session.call_next().unwrap();
        }
        let snap = session.snapshot();
        let text = serde_json::to_string(&snap).unwrap();
        let decoded: SessionSnapshot = serde_json::from_str(&text).unwrap();
        prop_assert_eq!(decoded, snap);
    }
}

#[test]
fn events_serialize_for_remote_renderers() {
    let mut session = GameSession::new(SmallRng::seed_from_u64(1), SessionConfig::default());
    session.call_next().unwrap();
    for event in session.drain_events() {
        let text = serde_json::to_string(&event).unwrap();
        let back: GameEvent = serde_json::from_str(&text).unwrap();
        assert_eq!(back, event);
    }
}

#[test]
fn malformed_card_json_is_rejected() {
    let session = GameSession::new(SmallRng::seed_from_u64(4), SessionConfig::default());
    let good = serde_json::to_value(session.card()).unwrap();
    let back: Card = serde_json::from_value(good.clone()).unwrap();
    assert_eq!(&back, session.card());

    // free square in a corner, same number everywhere else
    let mut cells = vec![serde_json::json!("Free")];
    cells.extend((1..25).map(|_| serde_json::json!({ "Number": 7 })));
    let bad = serde_json::json!({ "cells": cells });
    assert!(serde_json::from_value::<Card>(bad).is_err());

    let mut snap = serde_json::to_value(session.snapshot()).unwrap();
    snap["card"]["cells"][0] = serde_json::json!("Free");
    assert!(serde_json::from_value::<SessionSnapshot>(snap).is_err());
}
