//! Melee attack resolution.
//!
//! ECS responsibility:
//! - Weapon damage profiles (`MeleeWeapon` → `MeleeAttackDamageType`)
//! - Collider refresh, line-segment vs. hitbox intersection
//! - Authorization, damage, stagger, knockback
//! - Events: `MeleeSwing` in, `MeleeAttackDamageEvent` out
//!
//! Outside this crate:
//! - Animation timing (swing progress arrives with `MeleeSwing`)
//! - Network transport (`MeleeAttackDamagePacket` is only the record + codec)

use bevy::prelude::*;

pub mod collider;
pub mod config;
pub mod damage;
pub mod damage_type;
pub mod events;
pub mod packet;
pub mod systems;
pub mod weapon;


pub use collider::LineSegmentCollider;
pub use config::{AttackAuthority, MeleeCombatConfig};
pub use damage::{DamageKind, DamageReceiver, DamageSourceKind, MeleeAttackDamageSource, ProtectedHealth};
pub use damage_type::{
    knockback_impulse, HitWindow, MeleeAttackDamageId, MeleeAttackDamageType, MeleeAttackDamageTypeStats,
    MeleeAttacker, MeleeTarget, KNOCKBACK_FACTOR,
};
pub use events::{MeleeAttackDamageEvent, MeleeSwing};
pub use packet::MeleeAttackDamagePacket;
pub use weapon::MeleeWeapon;

use crate::direction::DirectionClassification;

/// Combat Plugin
///
/// Registers melee events and systems in FixedUpdate.
///
/// Order:
/// 1. update_weapon_colliders: in-world colliders follow the wielder
/// 2. resolve_melee_swings: MeleeSwing → MeleeAttackDamageEvent
///
/// Both run after direction classification so swings see this tick's direction.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MeleeSwing>()
            .add_event::<MeleeAttackDamageEvent>()
            .init_resource::<MeleeCombatConfig>();

        app.add_systems(
            FixedUpdate,
            (systems::update_weapon_colliders, systems::resolve_melee_swings)
                .chain()
                .after(DirectionClassification),
        );
    }
}
