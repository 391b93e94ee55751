use super::*;
use crate::scene::baked::{Action, FrameOverlay};

fn action(name: &str, frames: usize) -> Action {
    Action {
        name: name.to_owned(),
        attributes_map_per_frame: vec![FrameOverlay::new(); frames],
    }
}

// "walk" has endFrame 10, "hop" has endFrame 3.
fn registry() -> ActionRegistry {
    ActionRegistry::new(vec![action("walk", 11), action("hop", 4)])
}

fn running(reg: &ActionRegistry, frame: u64, reversed: bool, oneshot: bool) -> PlaybackState {
    let s = PlaybackState::new("walk");
    let cmd = if reversed {
        Command::Reverse { oneshot }
    } else {
        Command::Play { oneshot }
    };
    let s = apply(&s, Command::Seek(FrameIndex(frame)), reg).state;
    apply(&s, cmd, reg).state
}

fn tick(s: &PlaybackState, reg: &ActionRegistry, elapsed: u64) -> Transition {
    apply(s, Command::Tick(elapsed), reg)
}

#[test]
fn new_state_is_stopped_forward_looping() {
    let s = PlaybackState::new("walk");
    assert_eq!(s.frame(), FrameIndex::ZERO);
    assert_eq!(s.status(), PlaybackStatus::Stopped);
    assert!(!s.is_reversed());
    assert!(!s.is_oneshot());
    assert!(!s.is_running());
}

#[test]
fn forward_landing_on_end_wraps_to_zero() {
    let reg = registry();
    let s = running(&reg, 8, false, false);

    let t = tick(&s, &reg, 1);
    assert_eq!(t.state.frame(), FrameIndex(9));
    assert_eq!(t.clock, None);

    let t = tick(&t.state, &reg, 1);
    assert_eq!(t.state.frame(), FrameIndex::ZERO);
    assert_eq!(t.state.status(), PlaybackStatus::RunningForward);
}

#[test]
fn reverse_landing_on_zero_wraps_to_end() {
    let reg = registry();
    let s = running(&reg, 2, true, false);

    let t = tick(&s, &reg, 1);
    assert_eq!(t.state.frame(), FrameIndex(1));

    let t = tick(&t.state, &reg, 1);
    assert_eq!(t.state.frame(), FrameIndex(10));
    assert_eq!(t.state.status(), PlaybackStatus::RunningReverse);
}

#[test]
fn advance_keeps_strict_bounds() {
    let end = FrameIndex(10);
    assert_eq!(
        advance(FrameIndex(9), 1, end, false, false),
        Advance {
            frame: FrameIndex::ZERO,
            crossed: true,
        }
    );
    assert_eq!(advance(FrameIndex(8), 1, end, false, false).frame, FrameIndex(9));
    assert_eq!(
        advance(FrameIndex(1), 1, end, true, false),
        Advance {
            frame: end,
            crossed: true,
        }
    );
    assert_eq!(advance(FrameIndex(2), 1, end, true, false).frame, FrameIndex(1));
}

#[test]
fn forward_overshoot_wraps_to_zero_not_modulo() {
    let reg = registry();
    let s = running(&reg, 8, false, false);
    assert_eq!(tick(&s, &reg, 5).state.frame(), FrameIndex::ZERO);
}

#[test]
fn oneshot_forward_clamps_and_pauses() {
    let reg = registry();
    let s = running(&reg, 8, false, true);

    let t = tick(&s, &reg, 5);
    assert_eq!(t.state.frame(), FrameIndex(10));
    assert_eq!(t.state.status(), PlaybackStatus::Paused);
    assert_eq!(t.clock, Some(ClockEffect::Stop));
    assert!(t.render.is_some());

    // Late ticks are ignored until play is called again.
    let late = tick(&t.state, &reg, 1);
    assert_eq!(late.state, t.state);
    assert_eq!(late.render, None);
}

#[test]
fn oneshot_reverse_clamps_to_zero_and_pauses() {
    let reg = registry();
    let s = running(&reg, 2, true, true);
    let t = tick(&s, &reg, 3);
    assert_eq!(t.state.frame(), FrameIndex::ZERO);
    assert_eq!(t.state.status(), PlaybackStatus::Paused);
    assert_eq!(t.clock, Some(ClockEffect::Stop));
}

#[test]
fn oneshot_forward_exact_landing_pauses() {
    let reg = registry();
    let s = running(&reg, 9, false, true);
    let t = tick(&s, &reg, 1);
    assert_eq!(t.state.frame(), FrameIndex(10));
    assert_eq!(t.state.status(), PlaybackStatus::Paused);
    assert_eq!(t.clock, Some(ClockEffect::Stop));
    assert_eq!(
        t.render,
        Some(RenderRequest {
            action: "walk".to_owned(),
            frame: FrameIndex(10),
        })
    );
}

#[test]
fn oneshot_reverse_exact_landing_pauses() {
    let reg = registry();
    let s = running(&reg, 1, true, true);
    let t = tick(&s, &reg, 1);
    assert_eq!(t.state.frame(), FrameIndex::ZERO);
    assert_eq!(t.state.status(), PlaybackStatus::Paused);
    assert_eq!(t.clock, Some(ClockEffect::Stop));
    assert!(t.render.is_some());
}

#[test]
fn every_running_tick_requests_exactly_one_render() {
    let reg = registry();
    let mut s = running(&reg, 0, false, false);
    // Frame 10 is the terminal frame, so a looping run lands on 0 instead.
    for expected in [5u64, 0, 5, 0] {
        let t = tick(&s, &reg, 5);
        assert_eq!(
            t.render,
            Some(RenderRequest {
                action: "walk".to_owned(),
                frame: FrameIndex(expected),
            })
        );
        s = t.state;
    }
}

#[test]
fn play_while_running_restarts_the_clock() {
    let reg = registry();
    let s = PlaybackState::new("walk");

    let t = apply(&s, Command::Play { oneshot: false }, &reg);
    assert_eq!(t.clock, Some(ClockEffect::Begin));

    let t = apply(&t.state, Command::Reverse { oneshot: true }, &reg);
    assert_eq!(t.clock, Some(ClockEffect::Restart));
    assert_eq!(t.state.status(), PlaybackStatus::RunningReverse);
    assert!(t.state.is_oneshot());
}

#[test]
fn pause_is_noop_when_not_running() {
    let reg = registry();
    let s = PlaybackState::new("walk");
    let t = apply(&s, Command::Pause, &reg);
    assert_eq!(t, Transition::unchanged(&s));
}

#[test]
fn pause_keeps_frame() {
    let reg = registry();
    let s = running(&reg, 4, false, false);
    let t = apply(&s, Command::Pause, &reg);
    assert_eq!(t.state.frame(), FrameIndex(4));
    assert_eq!(t.state.status(), PlaybackStatus::Paused);
    assert_eq!(t.clock, Some(ClockEffect::Stop));
}

#[test]
fn stop_rewinds_and_renders_frame_zero() {
    let reg = registry();
    let s = running(&reg, 7, false, true);
    let t = apply(&s, Command::Stop, &reg);
    assert_eq!(t.state.frame(), FrameIndex::ZERO);
    assert_eq!(t.state.status(), PlaybackStatus::Stopped);
    assert!(!t.state.is_oneshot());
    assert_eq!(t.clock, Some(ClockEffect::Stop));
    assert_eq!(t.render.unwrap().frame, FrameIndex::ZERO);

    // Stopping again renders but leaves the clock alone.
    let again = apply(&t.state, Command::Stop, &reg);
    assert_eq!(again.clock, None);
    assert!(again.render.is_some());
}

#[test]
fn seek_clamps_and_leaves_stopped() {
    let reg = registry();
    let s = PlaybackState::new("hop");
    let t = apply(&s, Command::Seek(FrameIndex(99)), &reg);
    assert_eq!(t.state.frame(), FrameIndex(3));
    assert_eq!(t.state.status(), PlaybackStatus::Paused);

    let t = apply(&t.state, Command::Seek(FrameIndex::ZERO), &reg);
    assert_eq!(t.state.status(), PlaybackStatus::Paused);
}

#[test]
fn switching_action_clamps_frame() {
    let reg = registry();
    let s = running(&reg, 9, false, false);
    let t = select_action(&s, "hop", &reg).unwrap();
    assert_eq!(t.state.action(), "hop");
    assert_eq!(t.state.frame(), FrameIndex(3));
    assert_eq!(t.state.status(), PlaybackStatus::RunningForward);
    assert_eq!(t.clock, None);
    assert_eq!(
        t.render,
        Some(RenderRequest {
            action: "hop".to_owned(),
            frame: FrameIndex(3),
        })
    );
}

#[test]
fn switching_action_keeps_frame_within_bounds() {
    let reg = registry();
    let s = apply(
        &PlaybackState::new("hop"),
        Command::Seek(FrameIndex(2)),
        &reg,
    )
    .state;
    let t = select_action(&s, "walk", &reg).unwrap();
    assert_eq!(t.state.frame(), FrameIndex(2));
}

#[test]
fn unknown_action_is_rejected() {
    let reg = registry();
    let s = PlaybackState::new("walk");
    let err = select_action(&s, "fly", &reg).unwrap_err();
    assert!(matches!(err, FrameplayError::UnknownAction(ref n) if n == "fly"));
}

#[test]
fn empty_registry_makes_playback_a_noop() {
    let reg = ActionRegistry::new(vec![]);
    let s = PlaybackState::new(reg.default_action());
    let t = apply(&s, Command::Play { oneshot: false }, &reg);
    assert_eq!(t, Transition::unchanged(&s));
    let t = apply(&s, Command::Tick(5), &reg);
    assert_eq!(t.render, None);
}

#[test]
fn initial_state_validates_requested_action() {
    let reg = registry();
    assert_eq!(initial_state(&reg, None).unwrap().action(), "walk");
    assert_eq!(initial_state(&reg, Some("hop")).unwrap().action(), "hop");
    assert!(initial_state(&reg, Some("fly")).is_err());
}

#[test]
fn advance_handles_single_frame_actions() {
    let end = FrameIndex::ZERO;
    let a = advance(FrameIndex::ZERO, 1, end, false, false);
    assert_eq!(a.frame, FrameIndex::ZERO);
    assert!(a.crossed);
    // Frame 0 is terminal in reverse, so even an empty step wraps.
    let a = advance(FrameIndex::ZERO, 0, end, true, false);
    assert_eq!(a.frame, FrameIndex::ZERO);
    assert!(a.crossed);
}

#[test]
fn advance_saturates_on_huge_steps() {
    let a = advance(FrameIndex(5), u64::MAX, FrameIndex(10), false, true);
    assert_eq!(a.frame, FrameIndex(10));
    assert!(a.crossed);
}
