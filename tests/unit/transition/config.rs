use super::*;
use serde_json::json;

#[test]
fn defaults_match_documented_values() {
    let cfg = TransitionConfig::default();
    assert_eq!(cfg.brella_max, 30);
    assert_eq!(cfg.ribs, vec![6, 8]);
    assert_eq!(cfg.retries, RetryBudget::Limited(1_000_000));
    assert_eq!((cfg.attack, cfg.hold), (15, 30));
    assert_eq!(cfg.rotate, 0.01);
    assert_eq!(cfg.hue, ChannelRange::new(0.0, 360.0));
    assert_eq!(cfg.saturation, ChannelRange::new(80.0, 100.0));
    assert_eq!(cfg.lightness, ChannelRange::fixed(50.0));
    cfg.validate().unwrap();
}

#[test]
fn validation_rejects_unrunnable_configs() {
    let bad = [
        TransitionConfig {
            ribs: vec![],
            ..Default::default()
        },
        TransitionConfig {
            ribs: vec![6, 2],
            ..Default::default()
        },
        TransitionConfig {
            attack: 0,
            hold: 0,
            ..Default::default()
        },
        TransitionConfig {
            rotate: f64::NAN,
            ..Default::default()
        },
        TransitionConfig {
            hue: ChannelRange::new(0.0, f64::INFINITY),
            ..Default::default()
        },
    ];
    for cfg in bad {
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("validation error:"), "{err}");
    }
}

#[test]
fn zero_attack_alone_is_valid() {
    let cfg = TransitionConfig {
        attack: 0,
        hold: 10,
        ..Default::default()
    };
    cfg.validate().unwrap();
}

#[test]
fn normalized_sorts_and_clamps_ranges() {
    let cfg = TransitionConfig {
        hue: ChannelRange::new(400.0, -20.0),
        saturation: ChannelRange::new(120.0, 80.0),
        lightness: ChannelRange::new(-5.0, 50.0),
        ..Default::default()
    }
    .normalized();
    assert_eq!(cfg.hue, ChannelRange::new(40.0, 340.0));
    assert_eq!(cfg.saturation, ChannelRange::new(80.0, 100.0));
    assert_eq!(cfg.lightness, ChannelRange::new(0.0, 50.0));
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg: TransitionConfig = serde_json::from_value(json!({
        "brella_max": 4,
        "retries": "unlimited",
        "hue": { "lo": 10.0, "hi": 20.0 },
        "lightness": { "lo": 35.0 }
    }))
    .unwrap();
    assert_eq!(cfg.brella_max, 4);
    assert_eq!(cfg.retries, RetryBudget::Unlimited);
    assert_eq!(cfg.hue, ChannelRange::new(10.0, 20.0));
    assert_eq!(cfg.lightness, ChannelRange::fixed(35.0));
    assert_eq!(cfg.attack, 15);

    let limited: TransitionConfig = serde_json::from_value(json!({ "retries": { "limited": 3 } })).unwrap();
    assert_eq!(limited.retries, RetryBudget::Limited(3));

    assert!(serde_json::from_value::<TransitionConfig>(json!({ "nope": 1 })).is_err());
}

#[test]
fn retry_budget_counts_down() {
    assert_eq!(RetryBudget::from_signed(-1), RetryBudget::Unlimited);
    assert_eq!(RetryBudget::from_signed(2), RetryBudget::Limited(2));

    let mut b = RetryBudget::Limited(2);
    assert!(b.take());
    assert!(b.take());
    assert!(!b.take());
    let mut u = RetryBudget::Unlimited;
    assert!(u.take());
}
