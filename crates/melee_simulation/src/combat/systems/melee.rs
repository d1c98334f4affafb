//! Melee systems: collider refresh and swing resolution.

use bevy::prelude::*;

use crate::combat::{
    MeleeAttackDamageEvent, MeleeAttacker, MeleeCombatConfig, MeleeSwing, MeleeTarget, MeleeWeapon,
    ProtectedHealth,
};
use crate::components::{CollisionBox, Health, KnockbackResistance, Motion, Player, Protection};

/// System: refresh in-world colliders of weapons whose wielder moved or that
/// were just equipped (inserted or replaced).
pub fn update_weapon_colliders(
    mut weapons: Query<(&Transform, &mut MeleeWeapon), Or<(Changed<Transform>, Changed<MeleeWeapon>)>>,
) {
    for (transform, mut weapon) in weapons.iter_mut() {
        weapon.update_in_world_colliders(transform);
    }
}

/// System: resolve `MeleeSwing` events against every hittable entity.
///
/// For each live damage type (hit window open at the swing's progress) and
/// each target other than the attacker: collide, attack, and emit a
/// `MeleeAttackDamageEvent` when the hit is received.
pub fn resolve_melee_swings(
    mut swings: EventReader<MeleeSwing>,
    mut hits: EventWriter<MeleeAttackDamageEvent>,
    config: Res<MeleeCombatConfig>,
    attackers: Query<(&Transform, &MeleeWeapon, Option<&Player>)>,
    mut targets: Query<(
        Entity,
        &Transform,
        &CollisionBox,
        &mut Motion,
        &mut Health,
        Option<&Protection>,
        Option<&Player>,
        Option<&KnockbackResistance>,
    )>,
) {
    for swing in swings.read() {
        let Ok((attacker_transform, weapon, attacker_player)) = attackers.get(swing.attacker) else {
            crate::logger::log_warning(&format!(
                "MeleeSwing: attacker {:?} has no Transform/MeleeWeapon",
                swing.attacker
            ));
            continue;
        };

        let attacker = MeleeAttacker {
            entity: swing.attacker,
            position: attacker_transform.translation,
            player: attacker_player,
        };

        for damage_type in weapon.live_damage_types(swing.progress) {
            for (entity, transform, collision_box, mut motion, mut health, protection, player, resistance) in
                targets.iter_mut()
            {
                if entity == swing.attacker {
                    continue;
                }

                let mut receiver = ProtectedHealth {
                    health: &mut *health,
                    protection,
                };
                let mut target = MeleeTarget {
                    entity,
                    position: transform.translation,
                    collision_box,
                    player,
                    knockback_resistance: resistance.map_or(0.0, |resistance| resistance.0),
                    motion: &mut *motion,
                    receiver: &mut receiver,
                };

                let Some(position) = damage_type.try_attack(&attacker, &mut target, swing.direction, &config)
                else {
                    continue;
                };

                hits.write(MeleeAttackDamageEvent {
                    attacker: swing.attacker,
                    target: entity,
                    position,
                    direction: swing.direction,
                    damage_id: damage_type.id,
                });
            }
        }
    }
}
