use super::*;

fn five_words() -> ReadingSession {
    ReadingSession::new("a b c d e", 600, 2)
}

#[test]
fn delay_follows_the_timing_contract() {
    let session = ReadingSession::new("word", 10, 1);
    assert_eq!(session.chunk_delay_ms(), 6_000);

    let session = ReadingSession::new("word", 600, 60);
    assert_eq!(session.chunk_delay_ms(), 6_000);

    let session = ReadingSession::new("word", 300, 5);
    assert_eq!(session.chunk_delay_ms(), 1_000);
}

#[test]
fn degenerate_parameters_are_clamped_not_rejected() {
    let mut session = ReadingSession::new("one two three", 0, 0);
    // wpm floors at 10, chunk size at 1.
    assert_eq!(session.chunk_delay_ms(), 6_000);

    session.play(0);
    assert_eq!(session.current_chunk(), "one");
    assert_eq!(session.advance(10), SessionTick::Changed);
    assert_eq!(session.position(), 1);
}

#[test]
fn chunks_advance_in_order_and_clamp_the_tail() {
    let mut session = five_words();
    session.play(0);
    assert_eq!(session.current_chunk(), "a b");

    let delay = session.chunk_delay_ms();
    assert_eq!(session.tick(delay), SessionTick::Changed);
    assert_eq!(session.current_chunk(), "c d");

    assert_eq!(session.tick(2 * delay), SessionTick::Changed);
    assert_eq!(session.current_chunk(), "e");

    assert_eq!(session.tick(3 * delay), SessionTick::Finished);
    assert_eq!(session.phase(), PlaybackPhase::Finished);
    assert_eq!(session.position(), 5);
}

#[test]
fn advancing_visits_every_token_in_ceil_steps() {
    for chunk_size in 1..=8usize {
        let mut session = ReadingSession::new("t1 t2 t3 t4 t5 t6 t7", 600, chunk_size);
        session.play(0);

        let mut seen = Vec::new();
        let mut steps = 0usize;
        loop {
            seen.extend(session.current_chunk().split_whitespace().map(str::to_owned));
            steps += 1;
            if session.advance(0) == SessionTick::Finished {
                break;
            }
        }

        assert_eq!(seen, ["t1", "t2", "t3", "t4", "t5", "t6", "t7"]);
        assert_eq!(steps, 7usize.div_ceil(chunk_size));
    }
}

#[test]
fn oversized_chunk_shows_everything_then_finishes() {
    let mut session = ReadingSession::new("v w x y z", 500, 10);
    session.play(0);
    assert_eq!(session.current_chunk(), "v w x y z");
    assert_eq!(session.words_shown(), 5);

    assert_eq!(session.advance(100), SessionTick::Finished);
    assert_eq!(session.phase(), PlaybackPhase::Finished);
}

#[test]
fn empty_text_finishes_instantly_with_zero_metrics() {
    let mut session = ReadingSession::new("   \n\t ", 500, 3);
    assert_eq!(session.token_count(), 0);
    assert_eq!(session.progress_percent(), 0.0);

    session.play(5_000);
    assert_eq!(session.phase(), PlaybackPhase::Finished);
    let outcome = session.outcome().unwrap();
    assert_eq!(outcome.actual_wpm, 0);
    assert_eq!(outcome.duration_seconds, 0.0);
}

#[test]
fn pause_keeps_position_and_cancels_the_pending_tick() {
    let mut session = five_words();
    session.play(0);
    let delay = session.chunk_delay_ms();
    session.tick(delay);
    assert_eq!(session.position(), 2);

    session.pause();
    assert_eq!(session.phase(), PlaybackPhase::Paused);
    assert_eq!(session.position(), 2);

    // A poll long past the old deadline must not advance anything.
    assert_eq!(session.tick(delay * 10), SessionTick::Unchanged);
    assert_eq!(session.position(), 2);
}

#[test]
fn reset_is_idempotent() {
    let mut session = five_words();
    session.play(0);
    session.tick(session.chunk_delay_ms());

    session.reset();
    assert_eq!(session.phase(), PlaybackPhase::Idle);
    assert_eq!(session.position(), 0);
    assert_eq!(session.live_seconds(), 0);

    session.reset();
    assert_eq!(session.phase(), PlaybackPhase::Idle);
    assert_eq!(session.position(), 0);
    assert!(session.outcome().is_none());
}

#[test]
fn parameter_changes_apply_from_the_next_armed_deadline() {
    let mut session = ReadingSession::new("w1 w2 w3 w4 w5 w6 w7 w8", 600, 1);
    session.play(0);
    // In-flight deadline was armed for t=100 at 600 wpm.
    session.set_wpm(300);
    assert_eq!(session.tick(99), SessionTick::Unchanged);
    assert_eq!(session.tick(100), SessionTick::Changed);
    assert_eq!(session.position(), 1);

    // The next deadline uses the new 200 ms delay.
    assert_eq!(session.tick(299), SessionTick::Unchanged);
    assert_eq!(session.tick(300), SessionTick::Changed);
    assert_eq!(session.position(), 2);
}

#[test]
fn manual_advance_replaces_the_scheduled_tick() {
    let mut session = five_words();
    session.play(0);
    let delay = session.chunk_delay_ms();

    assert_eq!(session.advance(50), SessionTick::Changed);
    assert_eq!(session.position(), 2);

    // The old deadline is gone; the rescheduled one counts from the
    // manual advance.
    assert_eq!(session.tick(delay), SessionTick::Unchanged);
    assert_eq!(session.tick(50 + delay), SessionTick::Changed);
    assert_eq!(session.position(), 4);
}

#[test]
fn manual_advance_while_paused_keeps_the_paused_phase() {
    let mut session = five_words();
    session.play(0);
    session.pause();

    assert_eq!(session.advance(500), SessionTick::Changed);
    assert_eq!(session.phase(), PlaybackPhase::Paused);
    assert_eq!(session.position(), 2);

    // Still no scheduled tick while paused.
    assert_eq!(session.tick(10_000), SessionTick::Unchanged);
}

#[test]
fn live_clock_runs_only_while_playing() {
    // Chunk delay is far beyond the window under test.
    let mut session = ReadingSession::new("a b c d e", 10, 89);
    session.play(0);

    assert_eq!(session.tick(999), SessionTick::Unchanged);
    assert_eq!(session.tick(1_000), SessionTick::Changed);
    assert_eq!(session.live_seconds(), 1);

    session.pause();
    assert_eq!(session.tick(2_500), SessionTick::Unchanged);
    assert_eq!(session.live_seconds(), 1);

    session.play(3_000);
    assert_eq!(session.tick(3_999), SessionTick::Unchanged);
    assert_eq!(session.tick(4_000), SessionTick::Changed);
    assert_eq!(session.live_seconds(), 2);
}

#[test]
fn total_elapsed_spans_wall_clock_including_pauses() {
    // 4s play, 2s pause, 3s play: 9s from first play to finish.
    let mut session = ReadingSession::new("w1 w2 w3 w4 w5 w6 w7 w8 w9", 10, 89);
    session.play(0);
    session.pause();
    session.play(6_000);
    assert_eq!(session.advance(9_000), SessionTick::Finished);

    let outcome = session.outcome().unwrap();
    assert_eq!(outcome.duration_seconds, 9.0);
    // 9 words over 9 wall-clock seconds.
    assert_eq!(outcome.actual_wpm, 60);
}

#[test]
fn resume_does_not_reset_the_start_timestamp() {
    let mut session = five_words();
    session.play(1_000);
    session.pause();
    session.play(41_000);
    session.advance(61_000);
    session.advance(61_000);
    let tick = session.advance(61_000);

    assert_eq!(tick, SessionTick::Finished);
    assert_eq!(session.outcome().unwrap().duration_seconds, 60.0);
}

#[test]
fn finish_falls_back_to_the_live_counter_without_a_start() {
    // Manual advances from idle never record a start timestamp.
    let mut session = ReadingSession::new("x y", 500, 1);
    session.advance(100);
    assert_eq!(session.advance(200), SessionTick::Finished);

    let outcome = session.outcome().unwrap();
    assert_eq!(outcome.duration_seconds, 0.0);
    assert_eq!(outcome.actual_wpm, 0);
}

#[test]
fn progress_and_words_shown_derive_from_position() {
    let mut session = five_words();
    assert_eq!(session.progress_percent(), 0.0);
    assert_eq!(session.words_shown(), 2);

    session.play(0);
    session.advance(0);
    assert_eq!(session.progress_percent(), 40.0);
    assert_eq!(session.words_shown(), 4);
}
