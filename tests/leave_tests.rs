use rstest::rstest;
use strikeline::error::StrikelineError;
use strikeline::pins::PinSet;
use strikeline::scoring::{create_pin_leave, describe_leave, is_pocket_hit, is_split, is_washout};

fn pins(p: &[u8]) -> PinSet {
    PinSet::from_slice(p).unwrap()
}

#[rstest]
#[case(&[7, 10], true)]
#[case(&[4, 6], true)]
#[case(&[2, 7], true)]
#[case(&[3, 10], true)]
#[case(&[5, 6], true)]
#[case(&[4, 6, 7, 10], true)]
#[case(&[10, 7], true)]
#[case(&[1, 7, 10], false)]
#[case(&[1, 2], false)]
#[case(&[10], false)]
#[case(&[], false)]
#[case(&[8, 10], false)]
#[case(&[2, 4, 5, 8], false)]
fn test_is_split(#[case] standing: &[u8], #[case] expected: bool) {
    assert_eq!(is_split(pins(standing)), expected);
}

const SPLITS: [&[u8]; 16] = [
    &[7, 10],
    &[4, 6],
    &[5, 7],
    &[5, 10],
    &[4, 7, 10],
    &[6, 7, 10],
    &[4, 6, 7],
    &[4, 6, 10],
    &[4, 7, 9],
    &[5, 6],
    &[2, 7],
    &[3, 10],
    &[4, 6, 7, 9, 10],
    &[4, 6, 7, 10],
    &[4, 7, 9, 10],
    &[6, 7, 9, 10],
];

#[test]
fn test_is_split_matches_table_for_every_leave() {
    let mut splits = 0;
    for mask in 0u16..1024 {
        let standing: Vec<u8> = (1..=10u8).filter(|p| mask & (1 << (p - 1)) != 0).collect();
        let expected = !standing.contains(&1) && SPLITS.contains(&standing.as_slice());
        assert_eq!(is_split(pins(&standing)), expected, "leave {:?}", standing);
        if expected {
            splits += 1;
        }
    }
    assert_eq!(splits, SPLITS.len());
}

#[rstest]
#[case(&[1, 2, 4, 10], true)]
#[case(&[1, 3, 6, 7], true)]
#[case(&[1, 2, 10], true)]
#[case(&[1, 3, 7], true)]
#[case(&[2, 4, 10], false)]
#[case(&[1, 2, 4], false)]
fn test_is_washout(#[case] standing: &[u8], #[case] expected: bool) {
    assert_eq!(is_washout(pins(standing)), expected);
}

#[rstest]
#[case(&[], "Strike")]
#[case(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], "Gutter")]
#[case(&[10], "10-pin")]
#[case(&[7], "7-pin")]
#[case(&[7, 10], "7-10 Split")]
#[case(&[4, 6], "4-6 Split")]
#[case(&[4, 6, 7, 10], "Big Four")]
#[case(&[3, 10], "3-10 Split")]
#[case(&[1, 2, 4, 10], "1-2-4-10 Washout")]
#[case(&[2, 4, 5], "2-4-5")]
#[case(&[6, 10], "6-10")]
fn test_describe_leave(#[case] standing: &[u8], #[case] expected: &str) {
    assert_eq!(describe_leave(pins(standing)), expected);
}

#[rstest]
#[case::pocket_nine(&[10], true)]
#[case::one_two_down(&[3, 4, 5, 6, 7, 8, 9, 10], true)]
#[case::one_three_down(&[2, 4, 5, 6, 7, 8, 9, 10], true)]
#[case::headpin_only(&[2, 3, 4, 5, 6, 7, 8, 9, 10], false)]
#[case::headpin_standing(&[1, 7, 10], false)]
#[case::strike(&[], true)]
fn test_pocket_hit_from_full_rack(#[case] after: &[u8], #[case] expected: bool) {
    assert_eq!(is_pocket_hit(PinSet::ALL, pins(after)), expected);
}

#[test]
fn test_pocket_hit_only_counts_pins_knocked_this_ball() {
    // The 1 and 2 were already down before this ball.
    let before = pins(&[3, 6, 10]);
    assert!(!is_pocket_hit(before, PinSet::EMPTY));
}

#[test]
fn test_create_pin_leave() {
    let leave = create_pin_leave(pins(&[4, 6, 7, 10]), true);
    assert_eq!(leave.count, 4);
    assert!(leave.is_split);
    assert!(!leave.is_washout);
    assert!(leave.is_converted);
    assert_eq!(leave.leave_type, "Big Four");
}

#[rstest]
#[case(0)]
#[case(11)]
fn test_out_of_range_pin_is_rejected(#[case] pin: u8) {
    match PinSet::from_slice(&[3, pin]) {
        Err(StrikelineError::InvalidPin(p)) => assert_eq!(p, pin),
        other => panic!("expected InvalidPin, got {:?}", other),
    }
}

#[test]
fn test_pinset_json_is_a_sorted_list() {
    let set: PinSet = serde_json::from_str("[10, 7]").unwrap();
    assert_eq!(set.key(), "7-10");
    assert_eq!(serde_json::to_string(&set).unwrap(), "[7,10]");
    assert!(serde_json::from_str::<PinSet>("[11]").is_err());
}
