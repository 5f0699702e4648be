use super::types::{Frame, FrameScore};

/// Score for the frame at `idx`, resolving strike and spare bonuses from the
/// balls thrown in the following frames.
///
/// Returns `Pending` while a bonus ball is still to be thrown (and for an
/// index past the end of `frames`). Frame 10 never looks ahead.
pub fn frame_score(frames: &[Frame], idx: usize) -> FrameScore {
    let Some(frame) = frames.get(idx) else {
        return FrameScore::Pending;
    };

    if frame.is_last() {
        return FrameScore::Resolved(frame.pin_total());
    }

    if frame.is_strike {
        let Some(next) = frames.get(idx + 1) else {
            return FrameScore::Pending;
        };
        let Some(bonus1) = next.pins(0) else {
            return FrameScore::Pending;
        };

        // Back-to-back strikes: the second bonus ball lives two frames on.
        if next.is_strike && !next.is_last() {
            return frames
                .get(idx + 2)
                .and_then(|f| f.pins(0))
                .map(|bonus2| 10 + bonus1 + bonus2)
                .into();
        }

        return next.pins(1).map(|bonus2| 10 + bonus1 + bonus2).into();
    }

    if frame.is_spare {
        return frames
            .get(idx + 1)
            .and_then(|f| f.pins(0))
            .map(|bonus| 10 + bonus)
            .into();
    }

    let open = frame.pins(0).unwrap_or(0) + frame.pins(1).unwrap_or(0);
    FrameScore::Resolved(open)
}

/// Cumulative totals, one slot per frame.
///
/// A pending frame contributes nothing and its slot is `Pending`; later
/// frames are still scored on their own and accumulate the resolved sum.
pub fn running_totals(frames: &[Frame]) -> Vec<FrameScore> {
    let mut total = 0u16;
    (0..frames.len())
        .map(|idx| match frame_score(frames, idx) {
            FrameScore::Resolved(score) => {
                total += score;
                FrameScore::Resolved(total)
            }
            FrameScore::Pending => FrameScore::Pending,
        })
        .collect()
}

/// The last resolved running total, if any frame has resolved.
pub fn final_score(frames: &[Frame]) -> Option<u16> {
    running_totals(frames)
        .into_iter()
        .rev()
        .find_map(FrameScore::value)
}

/// Stamps `score` and `running_total` onto each frame.
pub fn apply_scores(frames: &mut [Frame]) {
    let scores: Vec<FrameScore> = (0..frames.len()).map(|i| frame_score(frames, i)).collect();
    let totals = running_totals(frames);
    for ((frame, score), total) in frames.iter_mut().zip(scores).zip(totals) {
        frame.score = score;
        frame.running_total = total;
    }
}
