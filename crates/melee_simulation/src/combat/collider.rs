//! Line-segment weapon collider.
//!
//! A segment `position → position + direction` stands for a weapon's damaging
//! edge. Each damage type keeps two copies: weapon-relative (authored) and
//! in-world (refreshed whenever the weapon transform changes).
//!
//! Hit test is two-stage:
//! 1. `rough_intersect`: segment's own AABB vs. target AABB, inclusive.
//!    Never rejects a real intersection.
//! 2. `intersect_aabb`: slab clipping of the parametric segment, returns the
//!    entry point.

use bevy::math::bounding::{Aabb3d, IntersectsVolume};
use bevy::math::Vec3A;
use bevy::prelude::*;

/// Below this a direction component is treated as parallel to the slab.
const PARALLEL_EPSILON: f32 = 1e-8;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineSegmentCollider {
    pub position: Vec3,
    pub direction: Vec3,
}

impl LineSegmentCollider {
    pub fn new(position: Vec3, direction: Vec3) -> Self {
        Self { position, direction }
    }

    /// Decodes the authored `[x, y, z, dx, dy, dz]` layout.
    pub fn from_array(values: [f32; 6]) -> Self {
        Self {
            position: Vec3::new(values[0], values[1], values[2]),
            direction: Vec3::new(values[3], values[4], values[5]),
        }
    }

    pub fn from_head_tail(head: Vec3, tail: Vec3) -> Self {
        Self {
            position: head,
            direction: tail - head,
        }
    }

    pub fn to_array(&self) -> [f32; 6] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.direction.x,
            self.direction.y,
            self.direction.z,
        ]
    }

    pub fn head(&self) -> Vec3 {
        self.position
    }

    pub fn tail(&self) -> Vec3 {
        self.position + self.direction
    }

    /// Both endpoints mapped through `transform`.
    pub fn transformed(&self, transform: &Transform) -> Self {
        Self::from_head_tail(
            transform.transform_point(self.head()),
            transform.transform_point(self.tail()),
        )
    }

    /// Tight AABB around the segment.
    pub fn bounding_box(&self) -> Aabb3d {
        let head = self.head();
        let tail = self.tail();
        Aabb3d {
            min: Vec3A::from(head.min(tail)),
            max: Vec3A::from(head.max(tail)),
        }
    }

    /// Cheap conservative pre-test. Bounds are inclusive.
    pub fn rough_intersect(&self, target: &Aabb3d) -> bool {
        self.bounding_box().intersects(target)
    }

    /// First point of the segment inside `target`, if any.
    ///
    /// Clips `t ∈ [0, 1]` against the three slab pairs. A segment starting
    /// inside the box returns its head.
    pub fn intersect_aabb(&self, target: &Aabb3d) -> Option<Vec3> {
        let min = Vec3::from(target.min);
        let max = Vec3::from(target.max);
        let mut t_enter = 0.0_f32;
        let mut t_exit = 1.0_f32;

        for axis in 0..3 {
            let origin = self.position[axis];
            let delta = self.direction[axis];

            if delta.abs() < PARALLEL_EPSILON {
                if origin < min[axis] || origin > max[axis] {
                    return None;
                }
                continue;
            }

            let inverse = 1.0 / delta;
            let mut t_near = (min[axis] - origin) * inverse;
            let mut t_far = (max[axis] - origin) * inverse;
            if t_near > t_far {
                std::mem::swap(&mut t_near, &mut t_far);
            }

            t_enter = t_enter.max(t_near);
            t_exit = t_exit.min(t_far);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(self.position + self.direction * t_enter)
    }
}
