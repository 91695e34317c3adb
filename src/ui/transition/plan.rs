// SPDX-License-Identifier: MPL-2.0
//! Animation plans per transition kind.
//!
//! Each [`TransitionKind`] maps to a pure constructor that, given the
//! container width, returns the start and end transforms of the outgoing
//! and incoming views. The engine never branches on the kind itself.

use super::stage::ViewTransform;
use crate::domain::TransitionKind;

/// Interpolation curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Slow start and slow finish (smoothstep).
    #[default]
    EaseBoth,
}

impl Easing {
    /// Maps linear progress in `[0, 1]` onto the curve.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::EaseBoth => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// Start and end transform of one view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub from: ViewTransform,
    pub to: ViewTransform,
}

impl Track {
    #[must_use]
    pub fn at(&self, eased: f32) -> ViewTransform {
        self.from.lerp(self.to, eased)
    }
}

/// What a transition does to both views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationPlan {
    pub outgoing: Track,
    pub incoming: Track,
    pub easing: Easing,
}

/// Builds the plan for a container width, or `None` for an instant swap.
pub type PlanConstructor = fn(f32) -> Option<AnimationPlan>;

/// Looks up the plan constructor for `kind`.
#[must_use]
pub fn plan_constructor(kind: TransitionKind) -> PlanConstructor {
    match kind {
        TransitionKind::None => instant,
        TransitionKind::Fade => fade,
        TransitionKind::SlideLeft => slide_left,
        TransitionKind::SlideRight => slide_right,
    }
}

fn instant(_width: f32) -> Option<AnimationPlan> {
    None
}

fn fade(_width: f32) -> Option<AnimationPlan> {
    let hidden = ViewTransform {
        opacity: 0.0,
        ..ViewTransform::IDENTITY
    };
    Some(AnimationPlan {
        outgoing: Track {
            from: ViewTransform::IDENTITY,
            to: hidden,
        },
        incoming: Track {
            from: hidden,
            to: ViewTransform::IDENTITY,
        },
        easing: Easing::default(),
    })
}

fn slide_left(width: f32) -> Option<AnimationPlan> {
    Some(slide(width, -1.0))
}

fn slide_right(width: f32) -> Option<AnimationPlan> {
    Some(slide(width, 1.0))
}

/// Incoming enters from `width * direction`, outgoing leaves to the
/// opposite side.
fn slide(width: f32, direction: f32) -> AnimationPlan {
    let shifted = |x: f32| ViewTransform {
        translate_x: x,
        ..ViewTransform::IDENTITY
    };
    AnimationPlan {
        outgoing: Track {
            from: ViewTransform::IDENTITY,
            to: shifted(-width * direction),
        },
        incoming: Track {
            from: shifted(width * direction),
            to: ViewTransform::IDENTITY,
        },
        easing: Easing::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn none_has_no_plan() {
        assert!(plan_constructor(TransitionKind::None)(800.0).is_none());
    }

    #[test]
    fn fade_ramps_opacity_in_opposite_directions() {
        let plan = plan_constructor(TransitionKind::Fade)(800.0).expect("fade plan");
        assert_abs_diff_eq!(plan.outgoing.from.opacity, 1.0);
        assert_abs_diff_eq!(plan.outgoing.to.opacity, 0.0);
        assert_abs_diff_eq!(plan.incoming.from.opacity, 0.0);
        assert_abs_diff_eq!(plan.incoming.to.opacity, 1.0);
    }

    #[test]
    fn slides_enter_from_opposite_edges() {
        let left = plan_constructor(TransitionKind::SlideLeft)(640.0).expect("slide plan");
        assert_abs_diff_eq!(left.incoming.from.translate_x, -640.0);
        assert_abs_diff_eq!(left.outgoing.to.translate_x, 640.0);

        let right = plan_constructor(TransitionKind::SlideRight)(640.0).expect("slide plan");
        assert_abs_diff_eq!(right.incoming.from.translate_x, 640.0);
        assert_abs_diff_eq!(right.outgoing.to.translate_x, -640.0);
        assert_eq!(right.incoming.to, ViewTransform::IDENTITY);
    }

    #[test]
    fn ease_both_is_symmetric_and_bounded() {
        let easing = Easing::EaseBoth;
        assert_abs_diff_eq!(easing.apply(0.0), 0.0);
        assert_abs_diff_eq!(easing.apply(0.5), 0.5);
        assert_abs_diff_eq!(easing.apply(1.0), 1.0);
        assert_abs_diff_eq!(easing.apply(2.0), 1.0);
        assert!(easing.apply(0.1) < 0.1);
        assert!(easing.apply(0.9) > 0.9);
    }
}
