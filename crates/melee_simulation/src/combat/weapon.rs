//! Melee weapon component.

use bevy::prelude::*;

use super::damage_type::MeleeAttackDamageType;

/// Damage profiles of the weapon an entity is swinging.
///
/// Colliders are authored relative to the wielder's `Transform`;
/// `update_weapon_colliders` keeps the in-world copies current.
#[derive(Component, Debug, Clone, Default)]
pub struct MeleeWeapon {
    pub damage_types: Vec<MeleeAttackDamageType>,
}

impl MeleeWeapon {
    pub fn new(damage_types: Vec<MeleeAttackDamageType>) -> Self {
        Self { damage_types }
    }

    pub fn update_in_world_colliders(&mut self, transform: &Transform) {
        for damage_type in &mut self.damage_types {
            damage_type.update_in_world_collider(transform);
        }
    }

    /// Damage types whose hit window is open at `progress`.
    pub fn live_damage_types(&self, progress: f32) -> impl Iterator<Item = &MeleeAttackDamageType> {
        self.damage_types
            .iter()
            .filter(move |damage_type| damage_type.hit_window.contains(progress))
    }
}
