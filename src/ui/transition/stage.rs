// SPDX-License-Identifier: MPL-2.0
//! Display surface for image views.
//!
//! A view is one on-screen instance of an image asset with its own
//! transform. The [`Surface`] trait is what the transition engine drives;
//! [`Stage`] is the in-memory implementation the canvas renders.

use crate::domain::ImageAsset;
use std::collections::HashMap;
use std::sync::Arc;

/// Identifier of a view on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ViewId(u64);

/// Animatable properties of a view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub opacity: f32,
    /// Horizontal offset in logical pixels.
    pub translate_x: f32,
    pub scale: f32,
}

impl ViewTransform {
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        translate_x: 0.0,
        scale: 1.0,
    };

    /// Linear interpolation between two transforms.
    #[must_use]
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self {
            opacity: mix(self.opacity, to.opacity),
            translate_x: mix(self.translate_x, to.translate_x),
            scale: mix(self.scale, to.scale),
        }
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Something views can be attached to and animated on.
pub trait Surface {
    /// Width used for slide offsets.
    fn container_width(&self) -> f32;

    /// Adds `view` on top of the attached views. No-op if already attached.
    fn attach(&mut self, view: ViewId);

    /// Removes `view`. Returns whether it was attached.
    fn detach(&mut self, view: ViewId) -> bool;

    /// Detaches everything and attaches `view` alone.
    fn replace_all(&mut self, view: ViewId);

    fn is_attached(&self, view: ViewId) -> bool;

    fn set_transform(&mut self, view: ViewId, transform: ViewTransform);
}

#[derive(Debug, Clone)]
struct StageView {
    asset: Arc<ImageAsset>,
    transform: ViewTransform,
}

/// The carousel's display list.
#[derive(Debug, Clone, Default)]
pub struct Stage {
    width: f32,
    next_id: u64,
    views: HashMap<ViewId, StageView>,
    /// Attached views, bottom first.
    attached: Vec<ViewId>,
}

impl Stage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a detached view showing `asset`.
    pub fn create_view(&mut self, asset: Arc<ImageAsset>) -> ViewId {
        let id = ViewId(self.next_id);
        self.next_id += 1;
        self.views.insert(
            id,
            StageView {
                asset,
                transform: ViewTransform::IDENTITY,
            },
        );
        id
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// Forgets every view that is no longer attached.
    pub fn prune(&mut self) {
        let attached = &self.attached;
        self.views.retain(|id, _| attached.contains(id));
    }

    /// Detaches and forgets all views.
    pub fn clear(&mut self) {
        self.attached.clear();
        self.views.clear();
    }

    /// Attached views with their assets and transforms, bottom first.
    pub fn visible(&self) -> impl Iterator<Item = (ViewId, &Arc<ImageAsset>, ViewTransform)> {
        self.attached.iter().filter_map(|id| {
            self.views
                .get(id)
                .map(|view| (*id, &view.asset, view.transform))
        })
    }

    #[must_use]
    pub fn attached_count(&self) -> usize {
        self.attached.len()
    }

    /// Number of views known to the stage, attached or not.
    #[must_use]
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn asset(&self, view: ViewId) -> Option<&Arc<ImageAsset>> {
        self.views.get(&view).map(|v| &v.asset)
    }

    #[must_use]
    pub fn transform(&self, view: ViewId) -> Option<ViewTransform> {
        self.views.get(&view).map(|v| v.transform)
    }
}

impl Surface for Stage {
    fn container_width(&self) -> f32 {
        self.width
    }

    fn attach(&mut self, view: ViewId) {
        if self.views.contains_key(&view) && !self.attached.contains(&view) {
            self.attached.push(view);
        }
    }

    fn detach(&mut self, view: ViewId) -> bool {
        let before = self.attached.len();
        self.attached.retain(|id| *id != view);
        self.attached.len() != before
    }

    fn replace_all(&mut self, view: ViewId) {
        self.attached.clear();
        self.attach(view);
    }

    fn is_attached(&self, view: ViewId) -> bool {
        self.attached.contains(&view)
    }

    fn set_transform(&mut self, view: ViewId, transform: ViewTransform) {
        if let Some(entry) = self.views.get_mut(&view) {
            entry.transform = transform;
        }
    }
}
