use super::*;

fn hi_yo() -> TypewriterConfig {
    TypewriterConfig {
        phrases: vec!["Hi".to_owned(), "Yo".to_owned()],
        typing_ms: 10,
        erase_ms: 5,
        hold_ms: 50,
        pause_ms: 20,
    }
}

fn texts(snapshots: &[Snapshot]) -> Vec<&str> {
    snapshots.iter().map(|s| s.text.as_str()).collect()
}

#[test]
fn one_cycle_of_hi_yo() {
    let snapshots = record_typewriter(&hi_yo(), 1).expect("valid config");
    assert_eq!(texts(&snapshots), vec!["H", "Hi", "H", "", "Y", "Yo", "Y", ""]);
    let times: Vec<u64> = snapshots.iter().map(|s| s.at_ms).collect();
    assert_eq!(times, vec![0, 10, 70, 75, 100, 110, 170, 175]);
}

#[test]
fn second_cycle_repeats_from_first_phrase() {
    let snapshots = record_typewriter(&hi_yo(), 2).expect("valid config");
    assert_eq!(snapshots.len(), 16);
    assert_eq!(texts(&snapshots[8..]), texts(&snapshots[..8]));
    assert_eq!(snapshots[8].at_ms, 200);
}

#[test]
fn zero_cycles_records_only_the_first_tick() {
    let snapshots = record_typewriter(&hi_yo(), 0).expect("valid config");
    assert_eq!(texts(&snapshots), vec!["H"]);
}

#[test]
fn invalid_config_is_reported() {
    let config = TypewriterConfig { phrases: Vec::new(), ..hi_yo() };
    assert!(matches!(record_typewriter(&config, 1), Err(ConfigError::NoPhrases)));
}

#[test]
fn throttle_scenario() {
    let decisions = simulate_throttle(100, &[0, 10, 50, 150]).expect("valid cooldown");
    assert_eq!(decisions, vec![(0, true), (10, false), (50, false), (150, true)]);
}

#[test]
fn repeated_call_times_are_judged_individually() {
    let decisions = simulate_throttle(100, &[0, 0, 50, 150]).expect("valid cooldown");
    assert_eq!(decisions, vec![(0, true), (0, false), (50, false), (150, true)]);
}

#[test]
fn throttle_input_order_does_not_matter() {
    let decisions = simulate_throttle(100, &[150, 0, 50]).expect("valid cooldown");
    assert_eq!(decisions, vec![(0, true), (50, false), (150, true)]);
}

#[test]
fn huge_cycle_count_saturates() {
    assert_eq!(target_erasures(usize::MAX, 3), usize::MAX);
    assert_eq!(target_erasures(2, 3), 6);
}

#[test]
fn snapshots_serialize_as_json() {
    let json = serde_json::to_string(&Snapshot { at_ms: 10, text: "Hi".to_owned() }).expect("serializable");
    assert_eq!(json, r#"{"at_ms":10,"text":"Hi"}"#);
}
