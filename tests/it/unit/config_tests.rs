use mapboard::ManagerOptions;

#[test]
fn test_options_serde_round_trip() {
    let options = ManagerOptions::default();
    let json = serde_json::to_string(&options).unwrap();
    let back: ManagerOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(options, back);
}

#[test]
fn test_options_partial_overrides() {
    let mut options = ManagerOptions::default();
    options.bearing_snap = 12.0;
    options.inertia.pan.max_speed = 500.0;
    let json = serde_json::to_string(&options).unwrap();
    let back: ManagerOptions = serde_json::from_str(&json).unwrap();
    assert_eq!(back.bearing_snap, 12.0);
    assert_eq!(back.inertia.pan.max_speed, 500.0);
    // Untouched settings keep their defaults
    assert_eq!(back.inertia.linearity, ManagerOptions::default().inertia.linearity);
}

#[test]
fn test_default_tunables() {
    let options = ManagerOptions::default();
    assert_eq!(options.bearing_snap, 7.0);
    assert!(options.inertia.linearity > 0.0 && options.inertia.linearity <= 1.0);
    assert!(options.inertia.pan.max_speed > 0.0);
    assert!(options.inertia.pan.deceleration > 0.0);
}
