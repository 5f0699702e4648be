use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use itertools::Itertools;
use strikeline::pins::PinSet;
use strikeline::play::{GameState, PlayState};
use strikeline::scoring::{describe_leave, frame_symbols, Frame, FRAMES_PER_GAME};
use strikeline::stats::{Heat, LeaveStats, PinHeatmap, PlayerStats, SpareDrill, TeamStats};

// Deck rows as seen from the approach, back row first.
const DECK_ROWS: [&[u8]; 4] = [&[7, 8, 9, 10], &[4, 5, 6], &[2, 3], &[1]];

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

fn heat_color(heat: Heat) -> Color {
    match heat {
        Heat::None => Color::DarkGrey,
        Heat::Cool => Color::Blue,
        Heat::Warm => Color::Yellow,
        Heat::Hot => Color::Red,
        Heat::Blazing => Color::Magenta,
    }
}

pub fn print_scoresheet(title: &str, frames: &[Frame]) {
    println!("\n{}", title);
    let mut table = new_table();

    let mut header = vec![Cell::new("").add_attribute(Attribute::Bold)];
    header.extend((1..=FRAMES_PER_GAME).map(|n| {
        Cell::new(n)
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Center)
    }));
    table.add_row(header);

    let cell_for = |n: usize, render: &dyn Fn(&Frame) -> String| {
        frames
            .iter()
            .find(|f| f.frame_number as usize == n)
            .map(render)
            .unwrap_or_default()
    };

    let mut balls = vec![Cell::new("Balls")];
    let mut totals = vec![Cell::new("Total").fg(Color::Cyan)];
    for n in 1..=FRAMES_PER_GAME {
        let glyphs = cell_for(n, &|f: &Frame| {
            frame_symbols(f, f.frame_number)
                .iter()
                .map(|s| s.to_string())
                .join(" ")
        });
        let total = cell_for(n, &|f: &Frame| {
            if f.balls.is_empty() {
                String::new()
            } else {
                f.running_total.to_string()
            }
        });
        balls.push(Cell::new(glyphs).set_alignment(CellAlignment::Center));
        totals.push(
            Cell::new(total)
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Right),
        );
    }
    table.add_row(balls);
    table.add_row(totals);

    let bowlers: Vec<&str> = frames.iter().map(|f| f.player_id.as_str()).collect();
    if bowlers.iter().unique().count() > 1 {
        let mut row = vec![Cell::new("Bowler")];
        for n in 1..=FRAMES_PER_GAME {
            row.push(Cell::new(cell_for(n, &|f: &Frame| f.player_id.clone())));
        }
        table.add_row(row);
    }

    println!("{}", table);
}

pub fn print_play_state(state: &GameState) {
    let phase = match state.phase() {
        PlayState::AwaitingBall1(frame) => format!("frame {}, ball 1", frame),
        PlayState::AwaitingBall2(frame) => format!("frame {}, ball 2", frame),
        PlayState::AwaitingBall3 => "frame 10, ball 3".to_string(),
        PlayState::GameComplete => "complete".to_string(),
    };
    let total = state
        .total_score()
        .map(|t| t.to_string())
        .unwrap_or_else(|| "-".to_string());

    let mut table = new_table();
    table.add_row(vec![Cell::new("State").add_attribute(Attribute::Bold), Cell::new(phase)]);
    if !state.is_complete() {
        table.add_row(vec![
            Cell::new("Standing"),
            Cell::new(state.standing().to_string()),
        ]);
        table.add_row(vec![
            Cell::new("Up next"),
            Cell::new(state.thrower(state.current_frame())),
        ]);
    }
    table.add_row(vec![
        Cell::new("Balls"),
        Cell::new(state.balls_recorded()),
    ]);
    table.add_row(vec![
        Cell::new("Score").fg(Color::Cyan),
        Cell::new(total).fg(Color::Cyan),
    ]);
    println!("\n{}", table);
}

pub fn print_player_stats(stats: &PlayerStats) {
    println!(
        "\nPlayer: {} ({} games)",
        stats.player_id, stats.total_games
    );
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Metric").add_attribute(Attribute::Bold),
        Cell::new("Value").add_attribute(Attribute::Bold),
    ]);
    align_right(&mut table, 1..=1);

    let pct = |v: f64| format!("{:.1}%", v);
    let rows: Vec<(&str, String, Option<Color>)> = vec![
        ("Average", format!("{:.1}", stats.average_score), Some(Color::Cyan)),
        ("High game", stats.high_game.to_string(), Some(Color::Cyan)),
        ("Strikes", pct(stats.strike_percentage), Some(Color::Green)),
        ("Spares", pct(stats.spare_percentage), Some(Color::Green)),
        ("Single-pin spares", pct(stats.single_pin_spare_percentage), None),
        ("Multi-pin spares", pct(stats.multi_pin_spare_percentage), None),
        ("Open frames", pct(stats.open_frames_percentage), Some(Color::Red)),
        ("Split leaves", pct(stats.split_leaves_percentage), None),
        ("Splits converted", pct(stats.split_conversion_percentage), None),
        ("First ball avg", format!("{:.1}", stats.first_ball_average), None),
        ("Pocket hits", pct(stats.pocket_hit_percentage), None),
        ("Carry", pct(stats.carry_rate), None),
        ("Doubles", pct(stats.double_percentage), None),
        ("Triples", pct(stats.triple_percentage), None),
        ("Gutters", stats.gutter_count.to_string(), None),
        ("Fouls", stats.foul_count.to_string(), None),
    ];

    for (label, value, color) in rows {
        let value = match color {
            Some(c) => Cell::new(value).fg(c),
            None => Cell::new(value),
        };
        table.add_row(vec![Cell::new(label), value]);
    }
    println!("{}", table);
}

pub fn print_common_leaves(leaves: &[LeaveStats]) {
    if leaves.is_empty() {
        println!("\nNo leaves recorded.");
        return;
    }

    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Leave").add_attribute(Attribute::Bold),
        Cell::new("Type"),
        Cell::new("Count"),
        Cell::new("Converted"),
    ]);
    align_right(&mut table, 2..=3);

    for leave in leaves {
        let rate = leave.conversion_rate;
        let color = if rate >= 75.0 {
            Color::Green
        } else if rate >= 40.0 {
            Color::Yellow
        } else {
            Color::Red
        };
        table.add_row(vec![
            Cell::new(leave.pinset.key()).add_attribute(Attribute::Bold),
            Cell::new(describe_leave(leave.pinset)),
            Cell::new(leave.count),
            Cell::new(format!("{:.1}%", rate)).fg(color),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_heatmap(map: &PinHeatmap) {
    println!("\nLeave heatmap (times left standing)");
    let mut table = new_table();
    for row in DECK_ROWS {
        let cells: Vec<Cell> = row
            .iter()
            .map(|&pin| {
                Cell::new(format!("{}\n{}", pin, map.frequency(pin)))
                    .fg(heat_color(map.heat(pin)))
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);
}

pub fn print_team_report(players: &[PlayerStats], team: &TeamStats) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Games"),
        Cell::new("Avg").fg(Color::Cyan),
        Cell::new("High"),
        Cell::new("Strike%").fg(Color::Green),
        Cell::new("Spare%").fg(Color::Green),
        Cell::new("Open%").fg(Color::Red),
    ]);
    align_right(&mut table, 1..=6);

    for p in players {
        table.add_row(vec![
            Cell::new(&p.player_id).add_attribute(Attribute::Bold),
            Cell::new(p.total_games),
            Cell::new(format!("{:.1}", p.average_score)),
            Cell::new(p.high_game),
            Cell::new(format!("{:.1}", p.strike_percentage)),
            Cell::new(format!("{:.1}", p.spare_percentage)),
            Cell::new(format!("{:.1}", p.open_frames_percentage)),
        ]);
    }

    table.add_row(vec![
        Cell::new("TEAM")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.1}", team.average_score)).add_attribute(Attribute::Bold),
        Cell::new(team.high_game).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", team.strike_percentage)).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", team.spare_percentage)).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    println!("\n{}", table);
}

pub fn print_drill_catalog(drills: &[SpareDrill]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Id").add_attribute(Attribute::Bold),
        Cell::new("Drill"),
        Cell::new("Pins"),
        Cell::new("Difficulty"),
    ]);

    for d in drills {
        table.add_row(vec![
            Cell::new(d.id).add_attribute(Attribute::Bold),
            Cell::new(d.name),
            Cell::new(pins_label(d.pins)),
            Cell::new(d.difficulty.to_string()),
        ]);
    }
    println!("\n{}", table);
}

fn pins_label(pins: PinSet) -> String {
    pins.iter().join(", ")
}
