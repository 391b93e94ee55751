//! Playback state as a plain value plus pure transition functions.
//!
//! Transitions never touch a clock or a renderer. They return the next [`PlaybackState`] together
//! with the side effects the caller must perform ([`ClockEffect`] and [`RenderRequest`]), which
//! keeps the state machine testable without a timer or a drawing surface. [`crate::Player`] is the
//! shell that applies those effects.

use crate::animation::registry::ActionRegistry;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FrameplayError, FrameplayResult};

/// Host-visible playback status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackStatus {
    /// At frame 0, not running.
    Stopped,
    /// Holding an arbitrary frame, not running.
    Paused,
    /// Advancing toward `endFrame` on every tick.
    RunningForward,
    /// Advancing toward frame 0 on every tick.
    RunningReverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Stopped,
    Paused,
    Running,
}

/// Everything the playback controller tracks between operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlaybackState {
    action: String,
    frame: FrameIndex,
    reversed: bool,
    oneshot: bool,
    phase: Phase,
}

impl PlaybackState {
    /// Session-start state: `action` at frame 0, forward, looping, stopped.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            frame: FrameIndex::ZERO,
            reversed: false,
            oneshot: false,
            phase: Phase::Stopped,
        }
    }

    /// Name of the active action (`""` when no actions exist).
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Current frame of the active action.
    pub fn frame(&self) -> FrameIndex {
        self.frame
    }

    /// `true` when playing (or last played) in reverse.
    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// `true` when the current run stops at the terminal frame instead of looping.
    pub fn is_oneshot(&self) -> bool {
        self.oneshot
    }

    /// `true` while a clock subscription is active.
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Collapsed status for hosts.
    pub fn status(&self) -> PlaybackStatus {
        match (self.phase, self.reversed) {
            (Phase::Stopped, _) => PlaybackStatus::Stopped,
            (Phase::Paused, _) => PlaybackStatus::Paused,
            (Phase::Running, false) => PlaybackStatus::RunningForward,
            (Phase::Running, true) => PlaybackStatus::RunningReverse,
        }
    }
}

/// A total playback operation. Action switching is separate (see [`select_action`]) because it
/// is the only operation that can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run forward.
    Play {
        /// Stop at `endFrame` instead of looping.
        oneshot: bool,
    },
    /// Run in reverse.
    Reverse {
        /// Stop at frame 0 instead of looping.
        oneshot: bool,
    },
    /// Stop running, keep the current frame.
    Pause,
    /// Stop running and rewind to frame 0.
    Stop,
    /// Jump to a frame (clamped to the active action).
    Seek(FrameIndex),
    /// Clock tick carrying the number of elapsed frames.
    Tick(u64),
}

/// What the shell must do with its clock subscription.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockEffect {
    /// Subscribe (no subscription was active).
    Begin,
    /// Unsubscribe.
    Stop,
    /// Unsubscribe from the active subscription, then subscribe again.
    Restart,
}

/// A frame the shell must pose and hand to the renderer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    /// Action to pose.
    pub action: String,
    /// Frame to pose.
    pub frame: FrameIndex,
}

/// Result of a transition: the next state and the effects to perform, in order clock then render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    /// State after the operation.
    pub state: PlaybackState,
    /// Clock subscription change, if any.
    pub clock: Option<ClockEffect>,
    /// Frame to render, if any.
    pub render: Option<RenderRequest>,
}

impl Transition {
    fn unchanged(state: &PlaybackState) -> Self {
        Self {
            state: state.clone(),
            clock: None,
            render: None,
        }
    }

    fn rendered(state: PlaybackState, clock: Option<ClockEffect>) -> Self {
        let render = Some(RenderRequest {
            action: state.action.clone(),
            frame: state.frame,
        });
        Self {
            state,
            clock,
            render,
        }
    }
}

/// Outcome of moving a frame cursor by a number of elapsed frames.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    /// Frame after the move.
    pub frame: FrameIndex,
    /// The move crossed the terminal frame (wrapped, or clamped in one-shot mode).
    pub crossed: bool,
}

/// Move `frame` by `elapsed` frames within `[0, end]`.
///
/// A forward move continues only while the next frame is strictly below `end`, a reverse move
/// only while it is strictly above `0`. Landing on or past the bound wraps to the opposite end
/// when looping, or clamps to the bound in one-shot mode. A looping run therefore never shows
/// its own terminal frame.
pub fn advance(
    frame: FrameIndex,
    elapsed: u64,
    end: FrameIndex,
    reversed: bool,
    oneshot: bool,
) -> Advance {
    let within = if reversed {
        frame.0.checked_sub(elapsed).filter(|&next| next > 0)
    } else {
        frame.0.checked_add(elapsed).filter(|&next| next < end.0)
    };

    match within {
        Some(next) => Advance {
            frame: FrameIndex(next),
            crossed: false,
        },
        None => {
            let target = match (reversed, oneshot) {
                (false, true) | (true, false) => end,
                (false, false) | (true, true) => FrameIndex::ZERO,
            };
            Advance {
                frame: target,
                crossed: true,
            }
        }
    }
}

/// Apply a total playback command.
pub fn apply(state: &PlaybackState, cmd: Command, registry: &ActionRegistry) -> Transition {
    match cmd {
        Command::Play { oneshot } => run(state, false, oneshot, registry),
        Command::Reverse { oneshot } => run(state, true, oneshot, registry),
        Command::Pause => {
            if state.phase != Phase::Running {
                return Transition::unchanged(state);
            }
            let mut next = state.clone();
            next.phase = Phase::Paused;
            Transition::rendered(next, Some(ClockEffect::Stop))
        }
        Command::Stop => {
            let clock = (state.phase == Phase::Running).then_some(ClockEffect::Stop);
            let mut next = state.clone();
            next.frame = FrameIndex::ZERO;
            next.oneshot = false;
            next.phase = Phase::Stopped;
            Transition::rendered(next, clock)
        }
        Command::Seek(frame) => {
            let mut next = state.clone();
            next.frame = frame.clamp_to(registry.end_frame(&state.action));
            if next.phase == Phase::Stopped && next.frame != FrameIndex::ZERO {
                next.phase = Phase::Paused;
            }
            Transition::rendered(next, None)
        }
        Command::Tick(elapsed) => {
            if state.phase != Phase::Running {
                // Late tick from a clock that was already told to stop.
                return Transition::unchanged(state);
            }
            let end = registry.end_frame(&state.action);
            let step = advance(state.frame, elapsed, end, state.reversed, state.oneshot);
            let mut next = state.clone();
            next.frame = step.frame;

            let mut clock = None;
            if step.crossed && state.oneshot {
                next.phase = Phase::Paused;
                clock = Some(ClockEffect::Stop);
            }
            tracing::trace!(
                action = %state.action,
                from = state.frame.0,
                to = next.frame.0,
                elapsed,
                reversed = state.reversed,
                "tick"
            );
            Transition::rendered(next, clock)
        }
    }
}

fn run(
    state: &PlaybackState,
    reversed: bool,
    oneshot: bool,
    registry: &ActionRegistry,
) -> Transition {
    if registry.is_empty() {
        tracing::debug!("no actions registered; ignoring play request");
        return Transition::unchanged(state);
    }
    let clock = if state.phase == Phase::Running {
        ClockEffect::Restart
    } else {
        ClockEffect::Begin
    };
    let mut next = state.clone();
    next.reversed = reversed;
    next.oneshot = oneshot;
    next.phase = Phase::Running;
    Transition::rendered(next, Some(clock))
}

/// Switch the active action, keeping the time position up to the new action's end frame.
///
/// Fails with [`FrameplayError::UnknownAction`] when `name` is not registered; the state is not
/// touched in that case. Running status is preserved.
pub fn select_action(
    state: &PlaybackState,
    name: &str,
    registry: &ActionRegistry,
) -> FrameplayResult<Transition> {
    let action = registry.resolve(name)?;
    let mut next = state.clone();
    next.action = action.name.clone();
    next.frame = state.frame.clamp_to(action.end_frame());
    Ok(Transition::rendered(next, None))
}

/// Validate an externally supplied initial action name.
pub(crate) fn initial_state(
    registry: &ActionRegistry,
    action: Option<&str>,
) -> FrameplayResult<PlaybackState> {
    match action {
        Some(name) if !registry.contains(name) => Err(FrameplayError::unknown_action(name)),
        Some(name) => Ok(PlaybackState::new(name)),
        None => Ok(PlaybackState::new(registry.default_action())),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/state.rs"]
mod tests;
