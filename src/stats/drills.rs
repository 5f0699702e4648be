use super::round1;
use crate::pins::PinSet;
use serde::Serialize;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DrillDifficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpareDrill {
    pub id: &'static str,
    pub name: &'static str,
    pub pins: PinSet,
    pub difficulty: DrillDifficulty,
}

const fn drill(
    id: &'static str,
    name: &'static str,
    pins: &[u8],
    difficulty: DrillDifficulty,
) -> SpareDrill {
    SpareDrill {
        id,
        name,
        pins: PinSet::literal(pins),
        difficulty,
    }
}

static CATALOG: [SpareDrill; 9] = [
    drill("10-pin", "10 Pin", &[10], DrillDifficulty::Easy),
    drill("7-pin", "7 Pin", &[7], DrillDifficulty::Easy),
    drill("4-pin", "4 Pin", &[4], DrillDifficulty::Easy),
    drill("6-pin", "6 Pin", &[6], DrillDifficulty::Easy),
    drill("3-6-10", "3-6-10 Washout", &[3, 6, 10], DrillDifficulty::Medium),
    drill("2-7", "2-7 Bucket", &[2, 7], DrillDifficulty::Medium),
    drill("3-10", "3-10 Split", &[3, 10], DrillDifficulty::Hard),
    drill("7-10", "7-10 Split", &[7, 10], DrillDifficulty::Hard),
    drill("4-6-7-10", "Big Four", &[4, 6, 7, 10], DrillDifficulty::Hard),
];

pub fn drill_catalog() -> &'static [SpareDrill] {
    &CATALOG
}

pub fn find_drill(id: &str) -> Option<&'static SpareDrill> {
    CATALOG.iter().find(|d| d.id == id)
}

/// Running tally for repeated attempts at one drill.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrillSession {
    pub drill: SpareDrill,
    pub attempts: u32,
    pub conversions: u32,
}

impl DrillSession {
    pub fn new(drill: SpareDrill) -> Self {
        Self {
            drill,
            attempts: 0,
            conversions: 0,
        }
    }

    /// Returns whether the attempt converted: no target pin still standing.
    /// Pins outside the drill's target are ignored.
    pub fn record_attempt(&mut self, standing_after: PinSet) -> bool {
        let converted = !self.drill.pins.iter().any(|p| standing_after.contains(p));
        self.attempts += 1;
        if converted {
            self.conversions += 1;
        }
        converted
    }

    pub fn conversion_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        round1(self.conversions as f64 / self.attempts as f64 * 100.0)
    }

    pub fn reset(&mut self) {
        self.attempts = 0;
        self.conversions = 0;
    }
}
