// SPDX-License-Identifier: MPL-2.0
//! Carousel navigation state.
//!
//! [`NavigationState`] owns the ordered image sequence and the current
//! index. Stepping wraps around both ends. An empty sequence turns every
//! navigation call into a no-op that returns `None`.

use crate::domain::{ImageAsset, RotationSpeed};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Ordered images plus the current position.
///
/// # Invariants
///
/// - `current_index` is `Some(i)` with `i < len()` whenever the sequence is
///   non-empty, and `None` when it is empty.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    images: Vec<Arc<ImageAsset>>,
    current_index: Option<usize>,
    paused: bool,
    rotation_speed: RotationSpeed,
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding `images`, positioned on the first one.
    #[must_use]
    pub fn with_images(images: Vec<ImageAsset>) -> Self {
        let mut state = Self::new();
        state.reload(images);
        state
    }

    /// Advances by one, wrapping to 0 after the last image.
    ///
    /// Returns the new index, or `None` when there are no images.
    pub fn next(&mut self) -> Option<usize> {
        let len = self.images.len();
        let index = self.current_index.map(|i| (i + 1) % len)?;
        self.current_index = Some(index);
        Some(index)
    }

    /// Steps back by one, wrapping to the last image from 0.
    pub fn previous(&mut self) -> Option<usize> {
        let len = self.images.len();
        let index = self.current_index.map(|i| (i + len - 1) % len)?;
        self.current_index = Some(index);
        Some(index)
    }

    /// Jumps directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidIndex`] when `index` is outside the sequence.
    /// The current index is left untouched in that case.
    pub fn select_index(&mut self, index: usize) -> Result<usize> {
        let len = self.images.len();
        if index >= len {
            return Err(Error::InvalidIndex { index, len });
        }
        self.current_index = Some(index);
        Ok(index)
    }

    /// Replaces the sequence and moves to its first image.
    pub fn reload(&mut self, images: Vec<ImageAsset>) {
        self.images = images.into_iter().map(Arc::new).collect();
        self.current_index = if self.images.is_empty() { None } else { Some(0) };
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_rotation_speed(&mut self, speed: RotationSpeed) {
        self.rotation_speed = speed;
    }

    #[must_use]
    pub fn rotation_speed(&self) -> RotationSpeed {
        self.rotation_speed
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    /// The image at the current index.
    #[must_use]
    pub fn current(&self) -> Option<&Arc<ImageAsset>> {
        self.current_index.and_then(|i| self.images.get(i))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Arc<ImageAsset>> {
        self.images.get(index)
    }

    #[must_use]
    pub fn images(&self) -> &[Arc<ImageAsset>] {
        &self.images
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assets(count: usize) -> Vec<ImageAsset> {
        (0..count)
            .map(|i| ImageAsset::new(format!("img{i}.png"), 100, 100))
            .collect()
    }

    #[test]
    fn next_cycles_back_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut nav = NavigationState::with_images(assets(len));
                nav.select_index(start).unwrap();
                for _ in 0..len {
                    nav.next();
                }
                assert_eq!(nav.current_index(), Some(start), "len={len} start={start}");
            }
        }
    }

    #[test]
    fn previous_undoes_next() {
        let mut nav = NavigationState::with_images(assets(4));
        for start in 0..4 {
            nav.select_index(start).unwrap();
            nav.next();
            assert_eq!(nav.previous(), Some(start));
            nav.previous();
            assert_eq!(nav.next(), Some(start));
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let mut nav = NavigationState::with_images(assets(3));
        assert_eq!(nav.previous(), Some(2));
    }

    #[test]
    fn five_images_forward_three_back_four() {
        let mut nav = NavigationState::with_images(assets(5));
        for _ in 0..3 {
            nav.next();
        }
        assert_eq!(nav.current_index(), Some(3));
        for _ in 0..4 {
            nav.previous();
        }
        assert_eq!(nav.current_index(), Some(4));
    }

    #[test]
    fn select_index_out_of_range_is_rejected() {
        let mut nav = NavigationState::with_images(assets(3));
        nav.select_index(1).unwrap();

        assert_eq!(
            nav.select_index(3),
            Err(Error::InvalidIndex { index: 3, len: 3 })
        );
        assert_eq!(nav.current_index(), Some(1));
    }

    #[test]
    fn empty_sequence_navigation_is_a_no_op() {
        let mut nav = NavigationState::new();
        assert_eq!(nav.next(), None);
        assert_eq!(nav.previous(), None);
        assert!(nav.current().is_none());
        assert!(nav.select_index(0).is_err());
    }

    #[test]
    fn reload_resets_to_first_image() {
        let mut nav = NavigationState::with_images(assets(5));
        nav.select_index(4).unwrap();

        nav.reload(assets(2));
        assert_eq!(nav.current_index(), Some(0));
        assert_eq!(nav.len(), 2);

        nav.reload(Vec::new());
        assert_eq!(nav.current_index(), None);
        assert!(nav.is_empty());
    }

    #[test]
    fn reload_keeps_pause_and_speed() {
        let mut nav = NavigationState::with_images(assets(2));
        nav.set_paused(true);
        nav.set_rotation_speed(RotationSpeed::new(8));

        nav.reload(assets(3));

        assert!(nav.is_paused());
        assert_eq!(nav.rotation_speed().value(), 8);
    }
}
