use crate::pins::PinSet;
use serde::{Deserialize, Serialize};

// USBC splits: headpin down, non-adjacent pins. Enumerated, not geometric.
const SPLIT_PATTERNS: [PinSet; 16] = [
    PinSet::literal(&[7, 10]),
    PinSet::literal(&[4, 6]),
    PinSet::literal(&[5, 7]),
    PinSet::literal(&[5, 10]),
    PinSet::literal(&[4, 7, 10]),
    PinSet::literal(&[6, 7, 10]),
    PinSet::literal(&[4, 6, 7]),
    PinSet::literal(&[4, 6, 10]),
    PinSet::literal(&[4, 7, 9]),
    PinSet::literal(&[5, 6]),
    PinSet::literal(&[2, 7]),
    PinSet::literal(&[3, 10]),
    PinSet::literal(&[4, 6, 7, 9, 10]),
    PinSet::literal(&[4, 6, 7, 10]),
    PinSet::literal(&[4, 7, 9, 10]),
    PinSet::literal(&[6, 7, 9, 10]),
];

const WASHOUT_PATTERNS: [PinSet; 4] = [
    PinSet::literal(&[1, 2, 4, 10]),
    PinSet::literal(&[1, 3, 6, 7]),
    PinSet::literal(&[1, 2, 10]),
    PinSet::literal(&[1, 3, 7]),
];

// Checked by exact key before the generic split/washout labels.
const NAMED_LEAVES: [(&str, &str); 3] = [
    ("7-10", "7-10 Split"),
    ("4-6", "4-6 Split"),
    ("4-6-7-10", "Big Four"),
];

/// The pins left standing after the first ball of a frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinLeave {
    pub pins: PinSet,
    pub count: usize,
    pub is_split: bool,
    pub is_washout: bool,
    pub is_converted: bool,
    pub leave_type: String,
}

pub fn is_split(standing: PinSet) -> bool {
    if standing.len() < 2 || standing.contains(1) {
        return false;
    }
    SPLIT_PATTERNS.contains(&standing)
}

pub fn is_washout(standing: PinSet) -> bool {
    WASHOUT_PATTERNS.contains(&standing)
}

pub fn describe_leave(standing: PinSet) -> String {
    match standing.len() {
        0 => return "Strike".to_string(),
        10 => return "Gutter".to_string(),
        1 => return format!("{}-pin", standing.key()),
        _ => {}
    }

    let key = standing.key();
    if let Some((_, name)) = NAMED_LEAVES.iter().find(|(k, _)| *k == key) {
        return name.to_string();
    }

    if is_split(standing) {
        format!("{} Split", key)
    } else if is_washout(standing) {
        format!("{} Washout", key)
    } else {
        key
    }
}

/// Approximate pocket hit: the headpin and at least one of the 2 or 3 went
/// down on this ball. Does not account for handedness.
pub fn is_pocket_hit(before: PinSet, after: PinSet) -> bool {
    let knocked = before.difference(after);
    knocked.contains(1) && (knocked.contains(2) || knocked.contains(3))
}

pub fn create_pin_leave(standing: PinSet, was_converted: bool) -> PinLeave {
    PinLeave {
        pins: standing,
        count: standing.len(),
        is_split: is_split(standing),
        is_washout: is_washout(standing),
        is_converted: was_converted,
        leave_type: describe_leave(standing),
    }
}
