//! Parallel per-particle attribute arrays shared by the animation core and
//! the renderer.
//!
//! Index `i` names the same particle in every array. Lengths are fixed at
//! construction; only `positions` and `colors` change afterwards, and each
//! change raises the matching dirty flag so the renderer knows to re-upload.

use glam::Vec3;

/// Which mutable attribute a writer touched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Position,
    Color,
}

#[derive(Clone, Debug, Default)]
pub struct ParticleBuffer {
    positions: Vec<Vec3>,
    targets: Vec<Vec3>,
    colors: Vec<Vec3>,
    sizes: Vec<f32>,
    phases: Vec<f32>,
    positions_dirty: bool,
    colors_dirty: bool,
}

impl ParticleBuffer {
    /// Build a buffer whose current positions start at their rest `targets`.
    ///
    /// Panics if the attribute slices disagree on length; callers generate
    /// them together so a mismatch is a programming error.
    pub fn from_rest(targets: Vec<Vec3>, colors: Vec<Vec3>, sizes: Vec<f32>, phases: Vec<f32>) -> Self {
        let n = targets.len();
        assert!(
            colors.len() == n && sizes.len() == n && phases.len() == n,
            "particle attribute arrays must share one length"
        );
        Self {
            positions: targets.clone(),
            targets,
            colors,
            sizes,
            phases,
            positions_dirty: true,
            colors_dirty: true,
        }
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Card rest positions; never mutated after generation.
    pub fn targets(&self) -> &[Vec3] {
        &self.targets
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    pub fn phases(&self) -> &[f32] {
        &self.phases
    }

    /// Flat `xyz xyz ...` view of the current positions.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Flat `rgb rgb ...` view of the current colours.
    pub fn colors_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.colors)
    }

    pub fn channel(&self, channel: Channel) -> &[Vec3] {
        match channel {
            Channel::Position => &self.positions,
            Channel::Color => &self.colors,
        }
    }

    #[inline]
    pub fn set(&mut self, channel: Channel, index: usize, value: Vec3) {
        match channel {
            Channel::Position => {
                self.positions[index] = value;
                self.positions_dirty = true;
            }
            Channel::Color => {
                self.colors[index] = value;
                self.colors_dirty = true;
            }
        }
    }

    /// Split borrow used by per-frame writers that read rest positions while
    /// moving current ones. Marks positions dirty.
    pub fn positions_and_targets_mut(&mut self) -> (&mut [Vec3], &[Vec3]) {
        self.positions_dirty = true;
        (&mut self.positions, &self.targets)
    }

    pub fn is_dirty(&self, channel: Channel) -> bool {
        match channel {
            Channel::Position => self.positions_dirty,
            Channel::Color => self.colors_dirty,
        }
    }

    /// Returns whether anything changed since the last call and clears the flags.
    pub fn take_dirty(&mut self) -> bool {
        let dirty = self.positions_dirty || self.colors_dirty;
        self.positions_dirty = false;
        self.colors_dirty = false;
        dirty
    }
}
