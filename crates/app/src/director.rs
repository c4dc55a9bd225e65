//! Camera director - shot requests, overview fallback, and focus cycling
//!
//! One director exists per play session. All operations run synchronously
//! on the host's frame thread; the only asynchrony is the blend-unlock
//! callback the host fires back through [`CameraDirector::on_blend_finished`].
//!
//! Failure semantics: every operation returns an advisory
//! [`DirectorError`] and logs a warning instead of raising. A failed or
//! rejected request leaves the current view and all director state
//! untouched, so the camera never jumps on a bad request. In particular a
//! lookup failure after the blend slot was already reserved releases the
//! reservation again - the gate can never be left stuck blending by a
//! request that went nowhere.

use std::sync::Arc;

use camdir_domain::{
    ActorRef, BlendGate, BlendParams, DirectorError, FocusTargetList, ShotHistory, ShotId,
    ShotRegistry,
};
use camdir_ports::outbound::{ClockPort, ScenePort, TimerPort, ViewPort};

use crate::config::DirectorConfig;

/// Orchestrates shot selection and view transitions for a combat scene.
pub struct CameraDirector {
    config: DirectorConfig,
    shots: ShotRegistry,
    focus_targets: FocusTargetList,
    gate: BlendGate,
    history: ShotHistory,
    scene: Arc<dyn ScenePort>,
    view: Arc<dyn ViewPort>,
    clock: Arc<dyn ClockPort>,
    timer: Arc<dyn TimerPort>,
}

impl CameraDirector {
    pub fn new(
        config: DirectorConfig,
        scene: Arc<dyn ScenePort>,
        view: Arc<dyn ViewPort>,
        clock: Arc<dyn ClockPort>,
        timer: Arc<dyn TimerPort>,
    ) -> Self {
        Self {
            config,
            shots: ShotRegistry::new(),
            focus_targets: FocusTargetList::new(),
            gate: BlendGate::new(),
            history: ShotHistory::new(),
            scene,
            view,
            clock,
            timer,
        }
    }

    pub fn config(&self) -> &DirectorConfig {
        &self.config
    }

    /// Mutable access for runtime reconfiguration (overview id, focus tags,
    /// debug toggle). Takes effect on the next operation.
    pub fn config_mut(&mut self) -> &mut DirectorConfig {
        &mut self.config
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a camera shot under `id`, typically from the shot rig's own
    /// start-up. Last write wins for duplicate ids.
    pub fn register_shot(&mut self, id: ShotId, actor: &ActorRef) -> Result<(), DirectorError> {
        if id.is_empty() {
            tracing::warn!("RegisterShot: empty shot id rejected");
            return Err(DirectorError::invalid_argument("shot id is empty"));
        }
        self.shots.register(id.clone(), actor);
        if self.config.log_debug {
            tracing::debug!(shot_id = %id, actor = actor.debug_name(), "Registered shot");
        }
        Ok(())
    }

    // =========================================================================
    // Shot requests
    // =========================================================================

    /// Blend the active view to `actor` over `blend_seconds`.
    ///
    /// The actor is resolved back to a registry id on a best-effort basis so
    /// history stays meaningful for externally-supplied actors.
    pub fn request_shot_by_actor(
        &mut self,
        actor: &ActorRef,
        blend_seconds: f64,
    ) -> Result<(), DirectorError> {
        self.acquire_gate(blend_seconds)?;
        self.transition_locked(actor, blend_seconds);
        Ok(())
    }

    /// Blend the active view to the shot registered under `id`.
    pub fn request_shot_by_id(
        &mut self,
        id: &ShotId,
        blend_seconds: f64,
    ) -> Result<(), DirectorError> {
        self.acquire_gate(blend_seconds)?;
        match self.shots.lookup(id) {
            Some(actor) => {
                self.transition_locked(&actor, blend_seconds);
                Ok(())
            }
            None => {
                // The reservation above must not outlive the failed lookup.
                self.gate.finish();
                tracing::warn!(shot_id = %id, "RequestShot(Id): not found");
                Err(DirectorError::not_found(format!("shot '{id}'")))
            }
        }
    }

    /// Blend to the configured overview (wide/establishing) shot.
    pub fn request_overview(&mut self, blend_seconds: f64) -> Result<(), DirectorError> {
        let overview = self.config.overview_shot_id.clone();
        self.request_shot_by_id(&overview, blend_seconds)
    }

    /// Advance to the next registered shot in lexical id order, skipping the
    /// overview shot and wrapping after the last id.
    ///
    /// A current shot that is absent from the registry (or never set) counts
    /// as "before first", so the cycle starts at the lexically first id.
    pub fn cycle_next_shot(&mut self, blend_seconds: f64) -> Result<(), DirectorError> {
        if self.is_blending() {
            tracing::warn!("CycleNextShot: camera is blending");
            return Err(DirectorError::Busy);
        }

        let mut ids = self.shots.sorted_ids();
        ids.retain(|id| *id != self.config.overview_shot_id);
        if ids.is_empty() {
            tracing::warn!("CycleNextShot: no shots registered");
            return Err(DirectorError::Empty("shot registry"));
        }

        let next_index = self
            .history
            .current()
            .and_then(|current| ids.iter().position(|id| id == current))
            .map(|index| (index + 1) % ids.len())
            .unwrap_or(0);
        let next = ids[next_index].clone();
        self.request_shot_by_id(&next, blend_seconds)
    }

    /// Point `shot_id` at the next live, tag-matching focus target and blend
    /// to it.
    ///
    /// Rebuilds the focus list from the scene if it is empty. Falls back to
    /// the overview shot when the shot id cannot be resolved or a full lap
    /// over the focus list finds no usable candidate.
    pub fn cycle_next_shot_with_focus(
        &mut self,
        shot_id: &ShotId,
        blend_seconds: f64,
    ) -> Result<(), DirectorError> {
        if self.is_blending() {
            tracing::warn!("CycleNextShotWithFocus: camera is blending");
            return Err(DirectorError::Busy);
        }

        if self.focus_targets.is_empty() {
            self.build_focus_targets();
        }
        if self.focus_targets.is_empty() {
            tracing::warn!("CycleNextShotWithFocus: no focus targets");
            return self.request_overview(blend_seconds);
        }

        let Some(shot_actor) = self.shots.lookup(shot_id) else {
            tracing::warn!(shot_id = %shot_id, "Focus shot not found, falling back to overview");
            return self.request_overview(blend_seconds);
        };

        let focus = &self.config.focus;
        let candidate = self
            .focus_targets
            .cycle_next_where(|actor| focus.tags().iter().any(|tag| actor.has_tag(tag)));

        match candidate {
            Some(target) => {
                // Inform the shot if it supports tracking; no-op otherwise.
                shot_actor.set_focus_target(target.clone());
                if self.config.log_debug {
                    tracing::debug!(
                        target = target.debug_name(),
                        shot_id = %shot_id,
                        "Cycled focus target"
                    );
                }
                self.request_shot_by_id(shot_id, blend_seconds)
            }
            None => {
                // A full lap found nothing live and tagged; the list is
                // stale, so refresh it for the next attempt and fall back.
                self.build_focus_targets();
                tracing::warn!(shot_id = %shot_id, "No valid focus target, falling back to overview");
                self.request_overview(blend_seconds)
            }
        }
    }

    // =========================================================================
    // Focus target list
    // =========================================================================

    /// Rebuild the focus-target list from the scene, querying each
    /// configured tag in order and deduplicating by actor identity.
    pub fn build_focus_targets(&mut self) {
        let mut found: Vec<ActorRef> = Vec::new();
        for tag in self.config.focus.tags() {
            found.extend(self.scene.actors_with_tag(tag));
        }
        let queried = found.len();
        self.focus_targets.rebuild(found);
        if self.config.log_debug {
            tracing::debug!(
                unique = self.focus_targets.len(),
                queried,
                tags = self.config.focus.tags().len(),
                "Rebuilt focus targets"
            );
        }
    }

    /// Next live candidate under the cursor, rebuilding the list first if it
    /// is empty. Returns `None` when the scene has no candidates at all.
    pub fn cycle_next_focus_target(&mut self) -> Option<ActorRef> {
        if self.focus_targets.is_empty() {
            self.build_focus_targets();
        }
        self.focus_targets.cycle_next()
    }

    /// Drop the focus-target list; the next cycle rebuilds it.
    pub fn clear_focus_targets(&mut self) {
        self.focus_targets.clear();
    }

    // =========================================================================
    // State queries & lifecycle
    // =========================================================================

    /// Whether a view transition is currently in flight.
    pub fn is_blending(&self) -> bool {
        self.gate.is_blending(self.clock.now_seconds())
    }

    /// Host timer callback: the blend duration has elapsed, release the gate.
    pub fn on_blend_finished(&mut self) {
        self.gate.finish();
        if self.config.log_debug {
            tracing::debug!("Blend finished (unlock)");
        }
    }

    pub fn current_shot_id(&self) -> Option<&ShotId> {
        self.history.current()
    }

    pub fn last_shot_id(&self) -> Option<&ShotId> {
        self.history.last()
    }

    pub fn shot_count(&self) -> usize {
        self.shots.len()
    }

    pub fn focus_target_count(&self) -> usize {
        self.focus_targets.len()
    }

    /// Session teardown: drop all registered data. Actor lifetimes are
    /// unaffected; the host keeps owning its world.
    pub fn reset(&mut self) {
        self.shots.clear();
        self.focus_targets.clear();
        self.history.clear();
        self.gate.finish();
        if self.config.log_debug {
            tracing::debug!("Director reset");
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Reserve the blend slot or reject the request as busy.
    fn acquire_gate(&mut self, blend_seconds: f64) -> Result<(), DirectorError> {
        let now = self.clock.now_seconds();
        if !self.gate.try_begin(now, blend_seconds) {
            tracing::warn!("Request rejected: camera is blending");
            return Err(DirectorError::Busy);
        }
        Ok(())
    }

    /// Issue the transition command. Caller holds the gate reservation.
    fn transition_locked(&mut self, actor: &ActorRef, blend_seconds: f64) {
        let resolved = self.shots.reverse_lookup(actor);
        self.history.record(resolved.clone());

        let params = BlendParams {
            duration_seconds: blend_seconds,
            curve: self.config.default_blend.curve,
        };
        self.view.transition_view(actor.clone(), params);
        self.timer.schedule_blend_unlock(blend_seconds);

        if self.config.log_debug {
            tracing::debug!(
                actor = actor.debug_name(),
                shot_id = resolved.as_ref().map(ShotId::as_str).unwrap_or(""),
                blend_seconds,
                "View transition issued"
            );
        }
    }
}
