use crate::animation::registry::{ActionInfo, ActionRegistry};
use crate::compose::overlay::compose;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{FrameplayError, FrameplayResult};
use crate::playback::clock::TickSource;
use crate::playback::state::{
    ClockEffect, Command, PlaybackState, PlaybackStatus, Transition, apply, initial_state,
    select_action,
};
use crate::render::sink::{PosedFrame, Renderer};
use crate::scene::baked::BakedData;
use crate::scene::node::ElementNode;
use crate::schema::validate::validate_baked;
use crate::schema::version::check_compatible;

/// Options for building a [`Player`].
pub struct PlayerBuilder<C, R> {
    data: BakedData,
    clock: C,
    target: Option<R>,
    initial_action: Option<String>,
}

impl<C: TickSource, R: Renderer> PlayerBuilder<C, R> {
    /// Start building a player for `data`, driven by `clock`.
    pub fn new(data: BakedData, clock: C) -> Self {
        Self {
            data,
            clock,
            target: None,
            initial_action: None,
        }
    }

    /// Attach the render target that receives posed frames. Required.
    pub fn target(mut self, renderer: R) -> Self {
        self.target = Some(renderer);
        self
    }

    /// Start on `name` instead of the first declared action.
    pub fn initial_action(mut self, name: impl Into<String>) -> Self {
        self.initial_action = Some(name.into());
        self
    }

    /// Check and index the data, then render the first frame.
    ///
    /// Fails with [`FrameplayError::IncompatibleVersion`] for data of another major version,
    /// [`FrameplayError::Validation`] for structurally broken data,
    /// [`FrameplayError::MissingHostTarget`] when no target was attached and
    /// [`FrameplayError::UnknownAction`] for a bad initial action. Nothing is rendered on failure.
    #[tracing::instrument(skip_all)]
    pub fn build(self) -> FrameplayResult<Player<C, R>> {
        let Self {
            data,
            mut clock,
            target,
            initial_action,
        } = self;

        check_compatible(&data.version)?;
        validate_baked(&data).map_err(|e| {
            FrameplayError::validation(format!("baked data validation failed: {e}"))
        })?;
        let renderer = target.ok_or_else(|| {
            FrameplayError::MissingHostTarget("no render target attached to the player".to_owned())
        })?;

        let BakedData {
            version,
            app_version,
            actions,
            svg_tree,
        } = data;
        let registry = ActionRegistry::new(actions);
        let state = initial_state(&registry, initial_action.as_deref())?;

        // A clock handed over mid-run must not leak a subscription into the new session.
        if clock.is_running() {
            clock.stop();
        }

        tracing::debug!(
            version = %version,
            app_version = %app_version,
            actions = registry.len(),
            elements = svg_tree.element_count(),
            action = %state.action(),
            "player ready"
        );

        let mut player = Player {
            version,
            app_version,
            base: svg_tree,
            registry,
            state,
            clock,
            renderer,
        };
        player.render_current();
        Ok(player)
    }
}

/// Playback controller bound to one set of baked data, one tick source and one render target.
///
/// All operations run synchronously. At most one clock subscription is live at any time.
pub struct Player<C: TickSource, R: Renderer> {
    version: String,
    app_version: String,
    base: ElementNode,
    registry: ActionRegistry,
    state: PlaybackState,
    clock: C,
    renderer: R,
}

impl<C: TickSource, R: Renderer> Player<C, R> {
    /// Shorthand for [`PlayerBuilder::new`].
    pub fn builder(data: BakedData, clock: C) -> PlayerBuilder<C, R> {
        PlayerBuilder::new(data, clock)
    }

    /// Data format version of the loaded data.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Version of the application that baked the data.
    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Every action with its end frame, in declaration order.
    pub fn action_list(&self) -> Vec<ActionInfo> {
        self.registry.list()
    }

    /// Name of the active action.
    pub fn current_action_name(&self) -> &str {
        self.state.action()
    }

    /// Switch the active action. The frame is clamped to the new action's end frame and
    /// re-rendered; running status is unchanged.
    pub fn set_current_action_name(&mut self, name: &str) -> FrameplayResult<()> {
        let t = select_action(&self.state, name, &self.registry)?;
        tracing::debug!(from = %self.state.action(), to = %name, "switch action");
        self.commit(t);
        Ok(())
    }

    /// Start (or restart) forward playback.
    pub fn play(&mut self, oneshot: bool) {
        self.run(Command::Play { oneshot });
    }

    /// Start (or restart) reverse playback.
    pub fn reverse(&mut self, oneshot: bool) {
        self.run(Command::Reverse { oneshot });
    }

    /// Stop running and hold the current frame.
    pub fn pause(&mut self) {
        self.run(Command::Pause);
    }

    /// Stop running and rewind to frame 0.
    pub fn stop(&mut self) {
        self.run(Command::Stop);
    }

    /// Jump to `frame`, clamped to the active action.
    pub fn seek(&mut self, frame: FrameIndex) {
        self.run(Command::Seek(frame));
    }

    /// Deliver one clock tick. Ignored while not running.
    pub fn tick(&mut self, elapsed_frames: u64) {
        self.run(Command::Tick(elapsed_frames));
    }

    /// Process every tick the clock has pending. Returns the number of ticks processed.
    ///
    /// Stops early when a tick pauses playback (one-shot end); the clock drops the rest.
    pub fn pump(&mut self) -> usize {
        let mut n = 0;
        while self.state.is_running() {
            let Some(tick) = self.clock.poll() else {
                break;
            };
            self.tick(tick.elapsed_frames);
            n += 1;
        }
        n
    }

    /// Current frame of the active action.
    pub fn current_frame(&self) -> FrameIndex {
        self.state.frame()
    }

    /// End frame of the active action.
    pub fn end_frame(&self) -> FrameIndex {
        self.registry.end_frame(self.state.action())
    }

    /// Host-visible playback status.
    pub fn status(&self) -> PlaybackStatus {
        self.state.status()
    }

    /// `true` while a clock subscription is live.
    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// `true` when the last run direction was reverse.
    pub fn is_reversed(&self) -> bool {
        self.state.is_reversed()
    }

    /// `true` when the current run stops at its terminal frame.
    pub fn is_oneshot(&self) -> bool {
        self.state.is_oneshot()
    }

    /// Snapshot of the playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// The action registry.
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// The unposed base tree.
    pub fn base_tree(&self) -> &ElementNode {
        &self.base
    }

    /// Pose `frame` of `action` without touching playback state.
    pub fn pose(&self, action: &str, frame: FrameIndex) -> FrameplayResult<ElementNode> {
        let resolved = self.registry.resolve(action)?;
        let overlay = resolved.overlay(frame).ok_or_else(|| {
            FrameplayError::validation(format!(
                "frame {frame} is out of range for action \"{action}\" (end frame {})",
                resolved.end_frame()
            ))
        })?;
        Ok(compose(overlay, &self.base))
    }

    /// Borrow the tick source.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutably borrow the tick source (e.g. to feed a manual clock).
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Borrow the render target.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutably borrow the render target.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Tear the session down: unsubscribe from the clock and hand back the collaborators.
    pub fn dispose(mut self) -> (C, R) {
        if self.state.is_running() {
            self.clock.stop();
        }
        tracing::debug!(action = %self.state.action(), "player disposed");
        (self.clock, self.renderer)
    }

    fn run(&mut self, cmd: Command) {
        let t = apply(&self.state, cmd, &self.registry);
        if !matches!(cmd, Command::Tick(_)) && t.state != self.state {
            tracing::debug!(?cmd, status = ?t.state.status(), frame = t.state.frame().0, "playback");
        }
        self.commit(t);
    }

    fn commit(&mut self, t: Transition) {
        let Transition {
            state,
            clock,
            render,
        } = t;
        match clock {
            Some(ClockEffect::Begin) => self.clock.begin(),
            Some(ClockEffect::Stop) => self.clock.stop(),
            Some(ClockEffect::Restart) => {
                self.clock.stop();
                self.clock.begin();
            }
            None => {}
        }
        self.state = state;
        if let Some(req) = render {
            self.render(req.action, req.frame);
        }
    }

    fn render_current(&mut self) {
        let action = self.state.action().to_owned();
        let frame = self.state.frame();
        self.render(action, frame);
    }

    fn render(&mut self, action: String, frame: FrameIndex) {
        let tree = compose(self.registry.overlay(&action, frame), &self.base);
        self.renderer.render(&PosedFrame {
            action,
            frame,
            tree,
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/controller.rs"]
mod tests;
