//! Which pins a bowler keeps leaving, scaled against the worst offender.

use super::player::LeaveStats;
use crate::pins::PIN_COUNT;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Heat {
    None,
    Cool,
    Warm,
    Hot,
    Blazing,
}

impl Heat {
    pub fn from_intensity(intensity: f64) -> Heat {
        if intensity <= 0.0 {
            Heat::None
        } else if intensity <= 0.25 {
            Heat::Cool
        } else if intensity <= 0.5 {
            Heat::Warm
        } else if intensity <= 0.75 {
            Heat::Hot
        } else {
            Heat::Blazing
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PinHeatmap {
    /// Index 0 is pin 1.
    pub frequencies: [u32; PIN_COUNT as usize],
    pub max: u32,
}

impl PinHeatmap {
    pub fn from_leaves(leaves: &[LeaveStats]) -> Self {
        let mut frequencies = [0u32; PIN_COUNT as usize];
        for leave in leaves {
            for pin in leave.pinset.iter() {
                frequencies[(pin - 1) as usize] += leave.count;
            }
        }
        let max = frequencies.iter().copied().max().unwrap_or(0);
        Self { frequencies, max }
    }

    /// Times `pin` was left standing; 0 outside 1-10.
    pub fn frequency(&self, pin: u8) -> u32 {
        match pin {
            1..=PIN_COUNT => self.frequencies[(pin - 1) as usize],
            _ => 0,
        }
    }

    pub fn intensity(&self, pin: u8) -> f64 {
        if self.max == 0 {
            0.0
        } else {
            self.frequency(pin) as f64 / self.max as f64
        }
    }

    pub fn heat(&self, pin: u8) -> Heat {
        Heat::from_intensity(self.intensity(pin))
    }
}
