use super::round1;
use crate::config::StatsConfig;
use crate::pins::PinSet;
use crate::scoring::{is_pocket_hit, Frame, Game};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// How often one exact leave shape came up and how often it was picked up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveStats {
    pub pinset: PinSet,
    pub count: u32,
    pub conversion_rate: f64,
}

/// Snapshot of a player's form over a window of completed games.
///
/// Percentages, rates and averages are rounded to one decimal place; the
/// gutter and foul counters are exact.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerStats {
    pub player_id: String,
    pub total_games: usize,
    pub average_score: f64,
    pub high_game: u16,
    pub strike_percentage: f64,
    pub spare_percentage: f64,
    pub single_pin_spare_percentage: f64,
    pub multi_pin_spare_percentage: f64,
    pub split_leaves_percentage: f64,
    pub split_conversion_percentage: f64,
    pub open_frames_percentage: f64,
    pub gutter_count: u32,
    pub foul_count: u32,
    pub first_ball_average: f64,
    pub pocket_hit_percentage: f64,
    pub carry_rate: f64,
    pub double_percentage: f64,
    pub triple_percentage: f64,
    pub common_leaves: Vec<LeaveStats>,
}

#[derive(Debug, Default)]
struct FrameTally {
    frames: u32,
    strikes: u32,
    spares: u32,
    opens: u32,
    single_pin_spares: u32,
    multi_pin_spares: u32,
    split_leaves: u32,
    split_conversions: u32,
    gutters: u32,
    fouls: u32,
    first_ball_pins: u32,
    first_balls: u32,
    pocket_hits: u32,
    pocket_strikes: u32,
}

// Leave shapes in first-seen order, so equal counts keep a stable ranking.
#[derive(Debug, Default)]
struct LeaveTable {
    index: HashMap<PinSet, usize>,
    rows: Vec<(PinSet, u32, u32)>,
}

impl LeaveTable {
    fn record(&mut self, pins: PinSet, converted: bool) {
        let idx = *self.index.entry(pins).or_insert_with(|| {
            self.rows.push((pins, 0, 0));
            self.rows.len() - 1
        });
        let row = &mut self.rows[idx];
        row.1 += 1;
        if converted {
            row.2 += 1;
        }
    }

    fn top(mut self, limit: usize) -> Vec<LeaveStats> {
        self.rows.sort_by(|a, b| b.1.cmp(&a.1));
        self.rows
            .into_iter()
            .take(limit)
            .map(|(pinset, count, conversions)| LeaveStats {
                pinset,
                count,
                conversion_rate: round1(percent(conversions, count)),
            })
            .collect()
    }
}

impl FrameTally {
    fn observe(&mut self, frame: &Frame, leaves: &mut LeaveTable) {
        self.frames += 1;

        if frame.is_strike {
            self.strikes += 1;
        } else if frame.is_spare {
            self.spares += 1;
            if let Some(leave) = &frame.leave_after_ball1 {
                if leave.count == 1 {
                    self.single_pin_spares += 1;
                } else {
                    self.multi_pin_spares += 1;
                }
                if leave.is_split {
                    self.split_conversions += 1;
                }
            }
        } else {
            self.opens += 1;
        }

        if let Some(ball1) = frame.balls.first() {
            self.first_ball_pins += ball1.pins_knocked_down as u32;
            self.first_balls += 1;
            self.count_flags(ball1.is_gutter, ball1.is_foul);

            if is_pocket_hit(ball1.pinset_before, ball1.pinset_after) {
                self.pocket_hits += 1;
                if frame.is_strike {
                    self.pocket_strikes += 1;
                }
            }

            if !frame.is_strike {
                if let Some(leave) = &frame.leave_after_ball1 {
                    leaves.record(leave.pins, leave.is_converted);
                    if leave.is_split {
                        self.split_leaves += 1;
                    }
                }
            }
        }

        if let Some(ball2) = frame.balls.get(1) {
            self.count_flags(ball2.is_gutter, ball2.is_foul);
        }
    }

    fn count_flags(&mut self, gutter: bool, foul: bool) {
        if gutter {
            self.gutters += 1;
        }
        if foul {
            self.fouls += 1;
        }
    }
}

fn percent(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Aggregates `games` and their `frames` with the default leave limit.
pub fn calculate_player_stats(games: &[Game], frames: &[Frame]) -> PlayerStats {
    calculate_player_stats_with(games, frames, &StatsConfig::default())
}

pub fn calculate_player_stats_with(
    games: &[Game],
    frames: &[Frame],
    config: &StatsConfig,
) -> PlayerStats {
    if games.is_empty() {
        return PlayerStats::default();
    }

    let total: u32 = games.iter().map(|g| g.total_score as u32).sum();
    let average_score = total as f64 / games.len() as f64;
    let high_game = games.iter().map(|g| g.total_score).max().unwrap_or(0);

    // Frame 10 has a different shape, so rate stats only look at 1-9.
    let regular: Vec<&Frame> = frames.iter().filter(|f| f.frame_number <= 9).collect();

    let mut tally = FrameTally::default();
    let mut leaves = LeaveTable::default();
    for frame in &regular {
        tally.observe(frame, &mut leaves);
    }

    // Overlapping windows: a run of three strikes is one triple and two
    // doubles. Windows run across game boundaries in input order.
    let strikes: Vec<bool> = regular.iter().map(|f| f.is_strike).collect();
    let doubles = strikes.windows(2).filter(|w| w[0] && w[1]).count() as u32;
    let triples = strikes.windows(3).filter(|w| w.iter().all(|&s| s)).count() as u32;

    let first_ball_average = if tally.first_balls > 0 {
        tally.first_ball_pins as f64 / tally.first_balls as f64
    } else {
        0.0
    };

    PlayerStats {
        player_id: games[0].player_id.clone(),
        total_games: games.len(),
        average_score: round1(average_score),
        high_game,
        strike_percentage: round1(percent(tally.strikes, tally.frames)),
        spare_percentage: round1(percent(tally.spares, tally.frames)),
        single_pin_spare_percentage: round1(percent(tally.single_pin_spares, tally.spares)),
        multi_pin_spare_percentage: round1(percent(tally.multi_pin_spares, tally.spares)),
        split_leaves_percentage: round1(percent(tally.split_leaves, tally.frames)),
        split_conversion_percentage: round1(percent(
            tally.split_conversions,
            tally.split_leaves,
        )),
        open_frames_percentage: round1(percent(tally.opens, tally.frames)),
        gutter_count: tally.gutters,
        foul_count: tally.fouls,
        first_ball_average: round1(first_ball_average),
        pocket_hit_percentage: round1(percent(tally.pocket_hits, tally.first_balls)),
        carry_rate: round1(percent(tally.pocket_strikes, tally.pocket_hits)),
        double_percentage: round1(percent(doubles, tally.frames)),
        triple_percentage: round1(percent(triples, tally.frames)),
        common_leaves: leaves.top(config.leave_limit),
    }
}

/// Stats for the games bowled in one session.
pub fn calculate_session_stats(session_id: &str, games: &[Game], frames: &[Frame]) -> PlayerStats {
    let session_games: Vec<Game> = games
        .iter()
        .filter(|g| g.session_id == session_id)
        .cloned()
        .collect();
    let ids: HashSet<&str> = session_games.iter().map(|g| g.id.as_str()).collect();
    let session_frames: Vec<Frame> = frames
        .iter()
        .filter(|f| ids.contains(f.game_id.as_str()))
        .cloned()
        .collect();

    calculate_player_stats(&session_games, &session_frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_table_ranks_by_count_and_keeps_first_seen_order_on_ties() {
        let mut table = LeaveTable::default();
        let ten = PinSet::literal(&[10]);
        let seven = PinSet::literal(&[7]);
        let split = PinSet::literal(&[7, 10]);

        table.record(seven, true);
        table.record(ten, true);
        table.record(split, false);
        table.record(ten, false);
        table.record(seven, true);

        let top = table.top(10);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].pinset, seven);
        assert_eq!(top[0].conversion_rate, 100.0);
        assert_eq!(top[1].pinset, ten);
        assert_eq!(top[1].conversion_rate, 50.0);
        assert_eq!(top[2].pinset, split);
        assert_eq!(top[2].count, 1);
    }

    #[test]
    fn leave_table_truncates() {
        let mut table = LeaveTable::default();
        for pin in 1..=10u8 {
            table.record(PinSet::from_slice(&[pin]).unwrap(), false);
        }
        table.record(PinSet::literal(&[2, 4]), false);
        assert_eq!(table.top(4).len(), 4);
    }

    #[test]
    fn percent_of_nothing_is_zero() {
        assert_eq!(percent(3, 0), 0.0);
        assert_eq!(percent(1, 3), 100.0 / 3.0);
    }
}
