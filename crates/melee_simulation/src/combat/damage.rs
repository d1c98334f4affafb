//! Damage reception seam.
//!
//! `MeleeAttackDamageSource` is the record handed to a target; it carries the
//! attack direction and the world-space hit point directly. Whatever owns the
//! target's health implements `DamageReceiver` and reports whether any damage
//! was actually deducted.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::components::{Health, Protection};
use crate::direction::AttackDirection;

/// Damage kinds that authored stats may name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Reflect, Serialize, Deserialize)]
pub enum DamageKind {
    Gravity,
    Fire,
    BluntAttack,
    SlashingAttack,
    PiercingAttack,
    Suffocation,
    Heal,
    Poison,
    Hunger,
    Crushing,
    Frost,
    Electricity,
    Heat,
    Injury,
    Acid,
}

/// Who dealt the damage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect, Serialize, Deserialize)]
pub enum DamageSourceKind {
    Player,
    Entity,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeleeAttackDamageSource {
    pub source: DamageSourceKind,
    pub cause_entity: Entity,
    pub kind: DamageKind,
    pub tier: i32,
    pub direction: AttackDirection,
    pub position: Vec3,
}

pub trait DamageReceiver {
    /// Applies `amount`; returns `true` if any damage was actually deducted.
    fn receive_damage(&mut self, source: &MeleeAttackDamageSource, amount: f32) -> bool;
}

impl DamageReceiver for Health {
    fn receive_damage(&mut self, _source: &MeleeAttackDamageSource, amount: f32) -> bool {
        if amount <= 0.0 || !self.is_alive() {
            return false;
        }
        self.take_damage(amount);
        true
    }
}

/// `Health` behind an optional `Protection`.
pub struct ProtectedHealth<'a> {
    pub health: &'a mut Health,
    pub protection: Option<&'a Protection>,
}

impl DamageReceiver for ProtectedHealth<'_> {
    fn receive_damage(&mut self, source: &MeleeAttackDamageSource, amount: f32) -> bool {
        let Some(protection) = self.protection else {
            return self.health.receive_damage(source, amount);
        };

        if source.tier < protection.tier {
            return false;
        }
        let reduced = (amount - protection.flat_reduction).max(0.0);
        self.health.receive_damage(source, reduced)
    }
}
