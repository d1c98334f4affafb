//! Melee damage profiles and attack resolution.
//!
//! # Resolution flow
//!
//! ```text
//! try_attack
//!   ↓ collide: target box → world, rough AABB reject, slab intersection
//!   ↓ attack:  authorization → damage source → receiver
//!   ↓          received? stagger existing motion, then add knockback
//! Some(hit point) only if the hit was received
//! ```

use std::str::FromStr;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::collider::LineSegmentCollider;
use super::config::MeleeCombatConfig;
use super::damage::{DamageKind, DamageReceiver, DamageSourceKind, MeleeAttackDamageSource};
use crate::components::{CollisionBox, Motion, Player, PRIVILEGE_ATTACK_CREATURES, PRIVILEGE_ATTACK_PLAYERS};
use crate::direction::AttackDirection;
use crate::error::CombatConfigError;

/// Knockback scalar → velocity impulse.
pub const KNOCKBACK_FACTOR: f32 = 0.1;

/// Identity of one damage profile: weapon item, attack, sub-hit.
///
/// Client-predicted hits and server confirmations are matched on this triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MeleeAttackDamageId {
    pub item_id: i32,
    pub attack_id: i32,
    pub damage_id: i32,
}

impl MeleeAttackDamageId {
    pub fn new(item_id: i32, attack_id: i32, damage_id: i32) -> Self {
        Self {
            item_id,
            attack_id,
            damage_id,
        }
    }
}

/// Part of the attack animation (fractions of its duration) during which the
/// collider is live.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HitWindow {
    pub start: f32,
    pub end: f32,
}

impl HitWindow {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.start && progress <= self.end
    }
}

/// Stats record as authored in item attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct MeleeAttackDamageTypeStats {
    pub damage: f32,
    pub knockback: f32,
    pub stagger: f32,
    pub tier: i32,
    pub damage_type: String,
    pub hit_window: [f32; 2],
    pub durability_damage: i32,
    pub collider: [f32; 6],
}

impl Default for MeleeAttackDamageTypeStats {
    fn default() -> Self {
        Self {
            damage: 0.0,
            knockback: 0.0,
            stagger: 1.0,
            tier: 0,
            damage_type: "PiercingAttack".to_string(),
            hit_window: [0.0, 0.0],
            durability_damage: 1,
            collider: [0.0; 6],
        }
    }
}

/// Attacking side of one resolution.
#[derive(Debug, Clone, Copy)]
pub struct MeleeAttacker<'a> {
    pub entity: Entity,
    pub position: Vec3,
    /// `Some` for players (privilege checks, source kind, log name)
    pub player: Option<&'a Player>,
}

/// Receiving side of one resolution. Only `motion` and `receiver` are mutated.
pub struct MeleeTarget<'a> {
    pub entity: Entity,
    pub position: Vec3,
    pub collision_box: &'a CollisionBox,
    pub player: Option<&'a Player>,
    pub knockback_resistance: f32,
    pub motion: &'a mut Motion,
    pub receiver: &'a mut dyn DamageReceiver,
}

/// Immutable damage profile of one weapon hit, plus its cached world collider.
#[derive(Debug, Clone, PartialEq)]
pub struct MeleeAttackDamageType {
    pub id: MeleeAttackDamageId,
    pub damage: f32,
    pub knockback: f32,
    pub stagger: f32,
    pub tier: i32,
    pub kind: DamageKind,
    pub hit_window: HitWindow,
    pub durability_damage: i32,
    pub relative_collider: LineSegmentCollider,
    pub in_world_collider: LineSegmentCollider,
}

impl MeleeAttackDamageType {
    pub fn new(
        id: MeleeAttackDamageId,
        damage: f32,
        kind: DamageKind,
        collider: LineSegmentCollider,
        hit_window: HitWindow,
    ) -> Self {
        Self {
            id,
            damage,
            knockback: 0.0,
            stagger: 1.0,
            tier: 0,
            kind,
            hit_window,
            durability_damage: 1,
            relative_collider: collider,
            in_world_collider: collider,
        }
    }

    pub fn with_knockback(mut self, knockback: f32) -> Self {
        self.knockback = knockback;
        self
    }

    pub fn with_stagger(mut self, stagger: f32) -> Self {
        self.stagger = stagger;
        self
    }

    pub fn with_tier(mut self, tier: i32) -> Self {
        self.tier = tier;
        self
    }

    /// Builds a profile from an authored stats record.
    ///
    /// Fails on a `DamageType` that names no known damage kind.
    pub fn from_stats(
        id: MeleeAttackDamageId,
        stats: &MeleeAttackDamageTypeStats,
    ) -> Result<Self, CombatConfigError> {
        let kind = DamageKind::from_str(&stats.damage_type)
            .map_err(|_| CombatConfigError::UnknownDamageType(stats.damage_type.clone()))?;
        let collider = LineSegmentCollider::from_array(stats.collider);

        Ok(Self {
            id,
            damage: stats.damage,
            knockback: stats.knockback,
            stagger: stats.stagger,
            tier: stats.tier,
            kind,
            hit_window: HitWindow::new(stats.hit_window[0], stats.hit_window[1]),
            durability_damage: stats.durability_damage,
            relative_collider: collider,
            in_world_collider: collider,
        })
    }

    /// Recomputes the world collider from the weapon's world transform.
    pub fn update_in_world_collider(&mut self, transform: &Transform) {
        self.in_world_collider = self.relative_collider.transformed(transform);
    }

    /// World-space hit point of the in-world collider against a target box.
    pub fn collide(&self, collision_box: &CollisionBox, target_position: Vec3) -> Option<Vec3> {
        let world_box = collision_box.in_world(target_position);

        if !self.in_world_collider.rough_intersect(&world_box) {
            return None;
        }

        self.in_world_collider.intersect_aabb(&world_box)
    }

    /// Collides, then attacks. `Some(hit point)` only when the hit was received.
    pub fn try_attack(
        &self,
        attacker: &MeleeAttacker,
        target: &mut MeleeTarget,
        direction: AttackDirection,
        config: &MeleeCombatConfig,
    ) -> Option<Vec3> {
        let position = self.collide(target.collision_box, target.position)?;

        let received = self.attack(attacker, target, direction, position, config);

        received.then_some(position)
    }

    /// Applies damage, stagger and knockback for a hit at `position`.
    ///
    /// Returns whether the hit was received. A profile with `damage <= 0`
    /// always counts as received once authorized.
    pub fn attack(
        &self,
        attacker: &MeleeAttacker,
        target: &mut MeleeTarget,
        direction: AttackDirection,
        position: Vec3,
        config: &MeleeCombatConfig,
    ) -> bool {
        let attacker_name = display_name(attacker.entity, attacker.player);
        let target_name = display_name(target.entity, target.player);

        if config.is_server() && !is_authorized(attacker.player, target.player.is_some(), config) {
            crate::logger::log_info(&format!(
                "Melee: '{}' is not allowed to attack '{}' (damage type {:?})",
                attacker_name, target_name, self.id
            ));
            return false;
        }

        let source = MeleeAttackDamageSource {
            source: if attacker.player.is_some() {
                DamageSourceKind::Player
            } else {
                DamageSourceKind::Entity
            },
            cause_entity: attacker.entity,
            kind: self.kind,
            tier: self.tier,
            direction,
            position,
        };

        let damage_applied = target.receiver.receive_damage(&source, self.damage);

        if config.is_server() {
            crate::logger::log(&format!(
                "Melee: '{}' attacks '{}' from direction {:?}. Damage applied: {}",
                attacker_name, target_name, direction, damage_applied
            ));
        }

        let received = damage_applied || self.damage <= 0.0;

        if received {
            let knockback = knockback_impulse(
                attacker.position,
                target.position,
                self.knockback,
                target.knockback_resistance,
            );
            let velocity = &mut target.motion.velocity;
            velocity.x *= self.stagger;
            velocity.z *= self.stagger;
            *velocity += knockback;
        }

        received
    }
}

/// Knockback velocity pushing the target away from the attacker.
///
/// Coincident positions give `Vec3::ZERO`.
pub fn knockback_impulse(
    attacker_position: Vec3,
    target_position: Vec3,
    knockback: f32,
    knockback_resistance: f32,
) -> Vec3 {
    (target_position - attacker_position).normalize_or_zero()
        * knockback
        * KNOCKBACK_FACTOR
        * (1.0 - knockback_resistance)
}

/// Server-side privilege gate. Creatures are never gated.
fn is_authorized(attacker: Option<&Player>, target_is_player: bool, config: &MeleeCombatConfig) -> bool {
    let Some(player) = attacker else {
        return true;
    };

    if target_is_player {
        config.allow_pvp && player.has_privilege(PRIVILEGE_ATTACK_PLAYERS)
    } else {
        player.has_privilege(PRIVILEGE_ATTACK_CREATURES)
    }
}

fn display_name(entity: Entity, player: Option<&Player>) -> String {
    match player {
        Some(player) => player.name.clone(),
        None => format!("{:?}", entity),
    }
}
