mod common;

use common::{played, ALL_NINE_SPARES, PERFECT};
use std::io::Write;
use strikeline::error::StrikelineError;
use strikeline::loader::{load_history, History};
use tempfile::NamedTempFile;

fn write_history(history: &History) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", serde_json::to_string(history).unwrap()).unwrap();
    file
}

fn sample() -> History {
    let (g1, f1) = played("g1", "amy", PERFECT, 1);
    let (g2, f2) = played("g2", "bob", ALL_NINE_SPARES, 2);
    History {
        games: vec![g1, g2],
        frames: f1.into_iter().chain(f2).collect(),
    }
}

#[test]
fn test_history_round_trips_through_a_file() {
    let history = sample();
    let file = write_history(&history);
    let loaded = load_history(file.path()).unwrap();
    assert_eq!(loaded, history);
    assert_eq!(loaded.player_ids(), vec!["amy", "bob"]);
}

#[test]
fn test_frames_of_sorts_by_frame_number() {
    let mut history = sample();
    history.frames.reverse();
    let frames = history.frames_of("g2");
    assert_eq!(frames.len(), 10);
    assert!(frames.windows(2).all(|w| w[0].frame_number < w[1].frame_number));
    assert!(history.game("g2").is_some());
    assert!(history.game("g9").is_none());
}

#[test]
fn test_minimal_hand_written_history() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{
            "games": [{{ "id": "g1", "player_id": "amy", "total_score": 9 }}],
            "frames": [{{
                "game_id": "g1",
                "frame_number": 1,
                "balls": [{{
                    "ball_number": 1,
                    "pins_knocked_down": 9,
                    "pinset_before": [1,2,3,4,5,6,7,8,9,10],
                    "pinset_after": [10]
                }}]
            }}]
        }}"#
    )
    .unwrap();

    let history = load_history(file.path()).unwrap();
    assert_eq!(history.games[0].session_id, "");
    assert!(!history.games[0].is_complete);
    let frame = &history.frames[0];
    assert!(frame.score.is_pending());
    assert_eq!(frame.balls[0].pinset_after.key(), "10");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = load_history("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, StrikelineError::Io(_)));
}

#[test]
fn test_malformed_json_is_a_json_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{ not json").unwrap();
    assert!(matches!(
        load_history(file.path()),
        Err(StrikelineError::Json(_))
    ));
}

#[test]
fn test_bad_pin_in_file_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{ "frames": [{{ "frame_number": 1, "balls": [{{ "ball_number": 1,
            "pins_knocked_down": 0, "pinset_before": [11], "pinset_after": [] }}] }}] }}"#
    )
    .unwrap();
    assert!(load_history(file.path()).is_err());
}

#[test]
fn test_duplicate_game_ids_are_rejected() {
    let mut history = sample();
    history.games[1].id = "g1".to_string();
    let file = write_history(&history);
    assert!(matches!(
        load_history(file.path()),
        Err(StrikelineError::Validation(_))
    ));
}

#[test]
fn test_frame_number_out_of_range_is_rejected() {
    let mut history = sample();
    history.frames[0].frame_number = 11;
    let file = write_history(&history);
    assert!(matches!(
        load_history(file.path()),
        Err(StrikelineError::Validation(_))
    ));
}
