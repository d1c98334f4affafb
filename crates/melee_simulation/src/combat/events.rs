//! Melee events.
//!
//! - `MeleeSwing`: combat controller says "this attacker's weapon is swinging
//!   at `progress` of its animation, in `direction`"
//! - `MeleeAttackDamageEvent`: a hit was received (one per target per damage type)

use bevy::prelude::*;

use super::damage_type::MeleeAttackDamageId;
use crate::direction::AttackDirection;

#[derive(Event, Debug, Clone, Copy)]
pub struct MeleeSwing {
    pub attacker: Entity,
    pub direction: AttackDirection,
    /// Fraction of the attack animation elapsed (0.0..=1.0)
    pub progress: f32,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct MeleeAttackDamageEvent {
    pub attacker: Entity,
    pub target: Entity,
    /// World-space hit point
    pub position: Vec3,
    pub direction: AttackDirection,
    pub damage_id: MeleeAttackDamageId,
}
