// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time tuning for [`QuadTree`](crate::QuadTree).

/// Default cap on subdivision depth.
///
/// Halving a box 32 times shrinks it by a factor of about 4e9, well past the spacing of
/// points most callers can tell apart.
pub const DEFAULT_MAX_DEPTH: u32 = 32;

/// Tuning parameters for a [`QuadTree`](crate::QuadTree).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct QuadTreeConfig {
    /// Deepest level at which a quad may be created; the root is level 0.
    ///
    /// Two distinct points that still share a slot at this level are stored together in a
    /// bucket instead of splitting further. Splitting also stops, whatever this value, once a
    /// sub-box is too small for its center to move in floating point.
    pub max_depth: u32,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl QuadTreeConfig {
    /// Set the subdivision depth cap.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }
}
