// SPDX-License-Identifier: MPL-2.0
//! Transition engine.
//!
//! Animates the handoff from an outgoing view to an incoming view. At most
//! one run is alive: a new request cancels the previous run on the spot,
//! detaching its outgoing view and dropping its completion callback.
//!
//! ```text
//! Idle --request--> Transitioning --tick(progress = 1)--> Idle
//!                         |
//!                         +--request--> (cancel) Transitioning
//! ```

pub mod plan;
pub mod stage;

pub use plan::{plan_constructor, AnimationPlan, Easing, PlanConstructor, Track};
pub use stage::{Stage, Surface, ViewId, ViewTransform};

use crate::domain::TransitionSpec;
use std::fmt;
use std::time::{Duration, Instant};

/// Identifier of one transition run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RunId(u64);

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "run#{}", self.0)
    }
}

/// Called once when a run finishes without being cancelled.
pub type CompletionCallback = Box<dyn FnOnce(RunId)>;

/// Result of advancing the engine clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// Nothing in flight.
    Idle,
    /// The active run is at `progress` (linear, `0..1`).
    Running { progress: f32 },
    /// The active run just finished.
    Completed(RunId),
}

struct TransitionRun {
    id: RunId,
    outgoing: ViewId,
    incoming: ViewId,
    plan: AnimationPlan,
    started: Instant,
    duration: Duration,
    on_complete: Option<CompletionCallback>,
}

impl fmt::Debug for TransitionRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionRun")
            .field("id", &self.id)
            .field("outgoing", &self.outgoing)
            .field("incoming", &self.incoming)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

/// Drives transition runs against a [`Surface`].
#[derive(Debug, Default)]
pub struct TransitionEngine {
    active: Option<TransitionRun>,
    next_run: u64,
}

impl TransitionEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a transition from `outgoing` to `incoming`.
    ///
    /// Any active run is cancelled first. Without an attached outgoing view,
    /// or when the kind has no animation, `incoming` replaces everything
    /// immediately and `on_complete` runs before this returns.
    pub fn request_transition(
        &mut self,
        outgoing: Option<ViewId>,
        incoming: ViewId,
        spec: TransitionSpec,
        surface: &mut dyn Surface,
        now: Instant,
        on_complete: Option<CompletionCallback>,
    ) -> RunId {
        self.cancel_for(surface, outgoing, incoming);

        let id = RunId(self.next_run);
        self.next_run += 1;

        if let Some(view) = outgoing {
            surface.set_transform(view, ViewTransform::IDENTITY);
        }
        surface.set_transform(incoming, ViewTransform::IDENTITY);

        let outgoing = outgoing.filter(|view| *view != incoming && surface.is_attached(*view));
        let plan = plan_constructor(spec.kind)(surface.container_width());

        let (Some(outgoing), Some(plan)) = (outgoing, plan) else {
            surface.replace_all(incoming);
            tracing::debug!(%id, kind = %spec.kind, "instant swap");
            if let Some(callback) = on_complete {
                callback(id);
            }
            return id;
        };

        surface.set_transform(outgoing, plan.outgoing.from);
        surface.set_transform(incoming, plan.incoming.from);
        surface.attach(incoming);

        tracing::debug!(%id, kind = %spec.kind, "transition started");
        self.active = Some(TransitionRun {
            id,
            outgoing,
            incoming,
            plan,
            started: now,
            duration: spec.duration,
            on_complete,
        });
        id
    }

    /// Advances the active run to `now`.
    pub fn tick(&mut self, now: Instant, surface: &mut dyn Surface) -> TickOutcome {
        let Some(run) = self.active.as_ref() else {
            return TickOutcome::Idle;
        };

        let progress = if run.duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(run.started).as_secs_f32()
                / run.duration.as_secs_f32())
            .min(1.0)
        };

        if progress < 1.0 {
            let eased = run.plan.easing.apply(progress);
            surface.set_transform(run.outgoing, run.plan.outgoing.at(eased));
            surface.set_transform(run.incoming, run.plan.incoming.at(eased));
            return TickOutcome::Running { progress };
        }

        let Some(mut run) = self.active.take() else {
            return TickOutcome::Idle;
        };
        surface.detach(run.outgoing);
        surface.set_transform(run.outgoing, ViewTransform::IDENTITY);
        surface.set_transform(run.incoming, run.plan.incoming.to);
        tracing::debug!(id = %run.id, "transition finished");
        if let Some(callback) = run.on_complete.take() {
            callback(run.id);
        }
        TickOutcome::Completed(run.id)
    }

    /// Cancels the active run, if any, without invoking its callback.
    pub fn cancel(&mut self, surface: &mut dyn Surface) {
        if let Some(run) = self.active.take() {
            surface.detach(run.outgoing);
            surface.set_transform(run.outgoing, ViewTransform::IDENTITY);
            surface.set_transform(run.incoming, ViewTransform::IDENTITY);
            tracing::debug!(id = %run.id, "transition cancelled");
        }
    }

    /// Cancels the active run ahead of a new `outgoing -> incoming` request.
    ///
    /// The cancelled run's incoming view is detached as well unless the new
    /// request still uses it.
    fn cancel_for(&mut self, surface: &mut dyn Surface, outgoing: Option<ViewId>, incoming: ViewId) {
        let Some(run) = self.active.take() else {
            return;
        };
        surface.detach(run.outgoing);
        surface.set_transform(run.outgoing, ViewTransform::IDENTITY);
        if Some(run.incoming) != outgoing && run.incoming != incoming {
            surface.detach(run.incoming);
        }
        tracing::debug!(id = %run.id, "transition superseded");
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// The run currently in flight.
    #[must_use]
    pub fn active_run(&self) -> Option<RunId> {
        self.active.as_ref().map(|run| run.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ImageAsset, TransitionKind};
    use crate::test_utils::assert_abs_diff_eq;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;

    fn stage_with(names: &[&str]) -> (Stage, Vec<ViewId>) {
        let mut stage = Stage::new();
        stage.set_width(800.0);
        let views = names
            .iter()
            .map(|name| stage.create_view(Arc::new(ImageAsset::new(*name, 10, 10))))
            .collect();
        (stage, views)
    }

    fn recorder() -> (Rc<RefCell<Vec<RunId>>>, impl Fn() -> CompletionCallback) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let make = {
            let log = Rc::clone(&log);
            move || -> CompletionCallback {
                let log = Rc::clone(&log);
                Box::new(move |id| log.borrow_mut().push(id))
            }
        };
        (log, make)
    }

    const HALF: Duration = Duration::from_millis(250);
    const FULL: Duration = Duration::from_millis(500);

    #[test]
    fn first_image_is_shown_directly() {
        let (mut stage, views) = stage_with(&["a.png"]);
        let (log, callback) = recorder();
        let mut engine = TransitionEngine::new();

        let id = engine.request_transition(
            None,
            views[0],
            TransitionSpec::new(TransitionKind::Fade),
            &mut stage,
            Instant::now(),
            Some(callback()),
        );

        assert!(!engine.is_active());
        assert!(stage.is_attached(views[0]));
        assert_eq!(*log.borrow(), vec![id]);
    }

    #[test]
    fn none_kind_swaps_synchronously() {
        let (mut stage, views) = stage_with(&["a.png", "b.png"]);
        stage.attach(views[0]);
        let mut engine = TransitionEngine::new();

        engine.request_transition(
            Some(views[0]),
            views[1],
            TransitionSpec::none(),
            &mut stage,
            Instant::now(),
            None,
        );

        assert!(!engine.is_active());
        assert!(!stage.is_attached(views[0]));
        assert!(stage.is_attached(views[1]));
    }

    #[test]
    fn fade_runs_to_completion_and_fires_callback_once() {
        let (mut stage, views) = stage_with(&["a.png", "b.png"]);
        stage.attach(views[0]);
        let (log, callback) = recorder();
        let mut engine = TransitionEngine::new();
        let start = Instant::now();

        let id = engine.request_transition(
            Some(views[0]),
            views[1],
            TransitionSpec::new(TransitionKind::Fade),
            &mut stage,
            start,
            Some(callback()),
        );
        let incoming = stage.transform(views[1]).expect("incoming");
        assert_abs_diff_eq!(incoming.opacity, 0.0);

        match engine.tick(start + HALF, &mut stage) {
            TickOutcome::Running { progress } => assert_abs_diff_eq!(progress, 0.5),
            other => panic!("unexpected {other:?}"),
        }
        assert_abs_diff_eq!(stage.transform(views[0]).expect("out").opacity, 0.5);
        assert_eq!(stage.attached_count(), 2);

        assert_eq!(engine.tick(start + FULL, &mut stage), TickOutcome::Completed(id));
        assert_eq!(engine.tick(start + FULL * 2, &mut stage), TickOutcome::Idle);

        assert!(!stage.is_attached(views[0]));
        assert_eq!(stage.transform(views[1]), Some(ViewTransform::IDENTITY));
        assert_eq!(*log.borrow(), vec![id]);
    }

    #[test]
    fn slide_resets_outgoing_translation_on_completion() {
        let (mut stage, views) = stage_with(&["a.png", "b.png"]);
        stage.attach(views[0]);
        let mut engine = TransitionEngine::new();
        let start = Instant::now();

        engine.request_transition(
            Some(views[0]),
            views[1],
            TransitionSpec::new(TransitionKind::SlideRight),
            &mut stage,
            start,
            None,
        );
        assert_abs_diff_eq!(stage.transform(views[1]).expect("in").translate_x, 800.0);

        engine.tick(start + FULL, &mut stage);

        assert_abs_diff_eq!(stage.transform(views[0]).expect("out").translate_x, 0.0);
        assert_abs_diff_eq!(stage.transform(views[1]).expect("in").translate_x, 0.0);
    }

    #[test]
    fn superseding_request_cancels_previous_run() {
        let (mut stage, views) = stage_with(&["a.png", "b.png", "c.png"]);
        let (a, b, c) = (views[0], views[1], views[2]);
        stage.attach(a);
        let (log, callback) = recorder();
        let mut engine = TransitionEngine::new();
        let start = Instant::now();

        let first = engine.request_transition(
            Some(a),
            b,
            TransitionSpec::new(TransitionKind::Fade),
            &mut stage,
            start,
            Some(callback()),
        );
        engine.tick(start + Duration::from_millis(100), &mut stage);

        let later = start + Duration::from_millis(200);
        let second = engine.request_transition(
            Some(b),
            c,
            TransitionSpec::new(TransitionKind::SlideLeft),
            &mut stage,
            later,
            Some(callback()),
        );

        assert_eq!(engine.active_run(), Some(second));
        assert!(!stage.is_attached(a));
        assert_eq!(stage.transform(b).expect("b").translate_x, 0.0);
        assert_abs_diff_eq!(stage.transform(b).expect("b").opacity, 1.0);

        engine.tick(later + FULL, &mut stage);

        let attached: Vec<_> = stage.visible().map(|(id, _, _)| id).collect();
        assert_eq!(attached, vec![c]);
        assert_eq!(*log.borrow(), vec![second]);
        assert!(!log.borrow().contains(&first));
    }

    #[test]
    fn cancel_drops_callback() {
        let (mut stage, views) = stage_with(&["a.png", "b.png"]);
        stage.attach(views[0]);
        let (log, callback) = recorder();
        let mut engine = TransitionEngine::new();

        engine.request_transition(
            Some(views[0]),
            views[1],
            TransitionSpec::new(TransitionKind::Fade),
            &mut stage,
            Instant::now(),
            Some(callback()),
        );
        engine.cancel(&mut stage);

        assert!(!engine.is_active());
        assert!(log.borrow().is_empty());
        assert!(stage.is_attached(views[1]));
        assert!(!stage.is_attached(views[0]));
    }
}
