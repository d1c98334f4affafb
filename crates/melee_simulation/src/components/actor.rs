//! Actor state read and mutated by melee resolution:
//! Health, Protection, Motion, KnockbackResistance, CollisionBox.

use bevy::math::bounding::Aabb3d;
use bevy::math::Vec3A;
use bevy::prelude::*;

/// Actor health.
///
/// Invariant: 0.0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(20.0)
    }
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0.0
    }

    pub fn take_damage(&mut self, amount: f32) {
        self.current = (self.current - amount).max(0.0);
    }
}

/// Armor-like protection in front of `Health`.
///
/// Hits below `tier` are absorbed completely; the rest lose `flat_reduction`.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Protection {
    pub tier: i32,
    pub flat_reduction: f32,
}

/// World-space velocity (blocks/tick) owned by the physics collaborator.
///
/// Melee resolution only scales (stagger) and adds to it (knockback).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct Motion {
    pub velocity: Vec3,
}

/// Fraction of knockback ignored (0.0 = full knockback, 1.0 = immovable).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct KnockbackResistance(pub f32);

/// Entity-local axis-aligned hitbox.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct CollisionBox {
    pub local: Aabb3d,
}

impl CollisionBox {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            local: Aabb3d {
                min: Vec3A::from(min),
                max: Vec3A::from(max),
            },
        }
    }

    /// Humanoid-sized box standing on the entity origin.
    pub fn humanoid() -> Self {
        Self::new(Vec3::new(-0.3, 0.0, -0.3), Vec3::new(0.3, 1.8, 0.3))
    }

    /// Box translated to `position` (all six coordinates shifted).
    pub fn in_world(&self, position: Vec3) -> Aabb3d {
        let offset = Vec3A::from(position);
        Aabb3d {
            min: self.local.min + offset,
            max: self.local.max + offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_clamps_at_zero() {
        let mut health = Health::new(10.0);
        health.take_damage(4.0);
        assert_eq!(health.current, 6.0);

        health.take_damage(100.0);
        assert_eq!(health.current, 0.0);
        assert!(!health.is_alive());
    }

    #[test]
    fn test_collision_box_in_world_translates_both_corners() {
        let collision_box = CollisionBox::new(Vec3::new(-0.5, 0.0, -0.5), Vec3::new(0.5, 2.0, 0.5));
        let world = collision_box.in_world(Vec3::new(10.0, 5.0, -3.0));

        assert_eq!(Vec3::from(world.min), Vec3::new(9.5, 5.0, -3.5));
        assert_eq!(Vec3::from(world.max), Vec3::new(10.5, 7.0, -2.5));
    }
}
