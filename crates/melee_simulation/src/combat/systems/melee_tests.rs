//! Tests for melee systems.

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::combat::{
        DamageKind, HitWindow, LineSegmentCollider, MeleeAttackDamageEvent, MeleeAttackDamageId,
        MeleeAttackDamageType, MeleeCombatConfig, MeleeSwing, MeleeWeapon,
    };
    use crate::components::{CollisionBox, Health, KnockbackResistance, Motion, Player, Protection};
    use crate::direction::AttackDirection;
    use crate::SimulationPlugin;

    fn create_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(SimulationPlugin);
        app
    }

    fn tick(app: &mut App) {
        app.world_mut().run_schedule(FixedUpdate);
    }

    fn hits(app: &App) -> Vec<MeleeAttackDamageEvent> {
        app.world()
            .resource::<Events<MeleeAttackDamageEvent>>()
            .iter_current_update_events()
            .copied()
            .collect()
    }

    /// Sword edge 1.5 blocks forward (−Z) at chest height, live for 0.3..=0.6.
    fn sword() -> MeleeWeapon {
        MeleeWeapon::new(vec![MeleeAttackDamageType::new(
            MeleeAttackDamageId::new(100, 0, 0),
            4.0,
            DamageKind::SlashingAttack,
            LineSegmentCollider::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, -1.5)),
            HitWindow::new(0.3, 0.6),
        )
        .with_knockback(2.0)])
    }

    /// Attacker is itself hittable: its own box contains the blade's head.
    fn spawn_attacker(app: &mut App, player: Option<Player>) -> Entity {
        let mut entity = app.world_mut().spawn((
            Transform::default(),
            sword(),
            CollisionBox::humanoid(),
            Motion::default(),
            Health::new(20.0),
        ));
        if let Some(player) = player {
            entity.insert(player);
        }
        entity.id()
    }

    fn spawn_dummy(app: &mut App, position: Vec3) -> Entity {
        app.world_mut()
            .spawn((
                Transform::from_translation(position),
                CollisionBox::humanoid(),
                Motion::default(),
                Health::new(20.0),
            ))
            .id()
    }

    fn swing(app: &mut App, attacker: Entity, progress: f32) {
        app.world_mut().send_event(MeleeSwing {
            attacker,
            direction: AttackDirection::TopRight,
            progress,
        });
    }

    #[test]
    fn test_swing_hits_dummy_in_reach() {
        let mut app = create_test_app();
        let attacker = spawn_attacker(&mut app, None);
        let dummy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -1.0));

        swing(&mut app, attacker, 0.5);
        tick(&mut app);

        let events = hits(&app);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].attacker, attacker);
        assert_eq!(events[0].target, dummy);
        assert_eq!(events[0].direction, AttackDirection::TopRight);
        assert_eq!(events[0].damage_id, MeleeAttackDamageId::new(100, 0, 0));
        assert!(events[0].position.abs_diff_eq(Vec3::new(0.0, 1.0, -0.7), 1e-5));

        let health = app.world().get::<Health>(dummy).unwrap();
        assert_eq!(health.current, 16.0);

        // Knockback pushes the dummy away along −Z
        let motion = app.world().get::<Motion>(dummy).unwrap();
        assert!(motion.velocity.abs_diff_eq(Vec3::new(0.0, 0.0, -0.2), 1e-6));
    }

    #[test]
    fn test_attacker_never_hits_itself() {
        let mut app = create_test_app();
        let attacker = spawn_attacker(&mut app, None);

        swing(&mut app, attacker, 0.5);
        tick(&mut app);

        assert!(hits(&app).is_empty());
        assert_eq!(app.world().get::<Health>(attacker).unwrap().current, 20.0);
    }

    #[test]
    fn test_closed_hit_window_is_ignored() {
        let mut app = create_test_app();
        let attacker = spawn_attacker(&mut app, None);
        let dummy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -1.0));

        swing(&mut app, attacker, 0.1);
        swing(&mut app, attacker, 0.9);
        tick(&mut app);

        assert!(hits(&app).is_empty());
        assert_eq!(app.world().get::<Health>(dummy).unwrap().current, 20.0);
    }

    #[test]
    fn test_collider_follows_moved_attacker() {
        let mut app = create_test_app();
        let attacker = spawn_attacker(&mut app, None);
        let dummy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -1.0));
        tick(&mut app);

        // Step back out of reach
        app.world_mut().get_mut::<Transform>(attacker).unwrap().translation = Vec3::new(0.0, 0.0, 5.0);
        swing(&mut app, attacker, 0.5);
        tick(&mut app);

        assert!(hits(&app).is_empty());
        assert_eq!(app.world().get::<Health>(dummy).unwrap().current, 20.0);
    }

    #[test]
    fn test_weapon_equipped_after_moving_uses_wielder_position() {
        let mut app = create_test_app();
        let wielder = app
            .world_mut()
            .spawn(Transform::from_xyz(0.0, 0.0, 20.0))
            .id();
        let dummy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -1.0));
        tick(&mut app);

        // Equipped while standing still, far from the dummy
        app.world_mut().entity_mut(wielder).insert(sword());
        swing(&mut app, wielder, 0.5);
        tick(&mut app);

        assert!(hits(&app).is_empty());
        assert_eq!(app.world().get::<Health>(dummy).unwrap().current, 20.0);

        let weapon = app.world().get::<MeleeWeapon>(wielder).unwrap();
        assert_eq!(weapon.damage_types[0].in_world_collider.head(), Vec3::new(0.0, 1.0, 20.0));
    }

    #[test]
    fn test_replaced_weapon_is_refreshed_without_movement() {
        let mut app = create_test_app();
        let wielder = app
            .world_mut()
            .spawn((Transform::from_xyz(0.0, 0.0, -2.0), sword()))
            .id();
        tick(&mut app);

        app.world_mut().entity_mut(wielder).insert(sword());
        tick(&mut app);

        let weapon = app.world().get::<MeleeWeapon>(wielder).unwrap();
        assert_eq!(weapon.damage_types[0].in_world_collider.head(), Vec3::new(0.0, 1.0, -2.0));
        assert_eq!(weapon.damage_types[0].in_world_collider.tail(), Vec3::new(0.0, 1.0, -3.5));
    }

    #[test]
    fn test_server_denies_unprivileged_player() {
        let mut app = create_test_app();
        let attacker = spawn_attacker(&mut app, Some(Player::new("newcomer")));
        let dummy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -1.0));

        swing(&mut app, attacker, 0.5);
        tick(&mut app);

        assert!(hits(&app).is_empty());
        assert_eq!(app.world().get::<Health>(dummy).unwrap().current, 20.0);
        assert_eq!(app.world().get::<Motion>(dummy).unwrap().velocity, Vec3::ZERO);
    }

    #[test]
    fn test_client_prediction_accepts_unprivileged_player() {
        let mut app = create_test_app();
        app.insert_resource(MeleeCombatConfig::client_prediction());
        let attacker = spawn_attacker(&mut app, Some(Player::new("newcomer")));
        let dummy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -1.0));

        swing(&mut app, attacker, 0.5);
        tick(&mut app);

        let events = hits(&app);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].target, dummy);
    }

    #[test]
    fn test_protection_absorbs_low_tier_hit() {
        let mut app = create_test_app();
        let attacker = spawn_attacker(&mut app, None);
        let dummy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -1.0));
        app.world_mut().entity_mut(dummy).insert(Protection {
            tier: 3,
            flat_reduction: 0.0,
        });

        swing(&mut app, attacker, 0.5);
        tick(&mut app);

        assert!(hits(&app).is_empty());
        assert_eq!(app.world().get::<Health>(dummy).unwrap().current, 20.0);
        assert_eq!(app.world().get::<Motion>(dummy).unwrap().velocity, Vec3::ZERO);
    }

    #[test]
    fn test_knockback_resistance_component_is_applied() {
        let mut app = create_test_app();
        let attacker = spawn_attacker(&mut app, None);
        let dummy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -1.0));
        app.world_mut().entity_mut(dummy).insert(KnockbackResistance(0.5));

        swing(&mut app, attacker, 0.5);
        tick(&mut app);

        let motion = app.world().get::<Motion>(dummy).unwrap();
        assert!(motion.velocity.abs_diff_eq(Vec3::new(0.0, 0.0, -0.1), 1e-6));
    }

    #[test]
    fn test_swing_from_entity_without_weapon_is_skipped() {
        let mut app = create_test_app();
        let bystander = spawn_dummy(&mut app, Vec3::ZERO);
        let dummy = spawn_dummy(&mut app, Vec3::new(0.0, 0.0, -1.0));

        swing(&mut app, bystander, 0.5);
        tick(&mut app);

        assert!(hits(&app).is_empty());
        assert_eq!(app.world().get::<Health>(dummy).unwrap().current, 20.0);
    }
}
