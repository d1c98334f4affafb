//! Headless melee simulation
//!
//! Runs a Bevy App without rendering: one player sweeps their aim to the right
//! with seeded jitter, swings at a training dummy every half second, and every
//! received hit is printed along with its wire packet.

use bevy::prelude::*;
use rand::Rng;

use melee_simulation::{
    create_headless_app, AimInput, AttackDirectionController, CollisionBox, DeterministicRng, DirectionCursor,
    DirectionSettings, Health, MeleeAttackDamageEvent, MeleeAttackDamageId, MeleeAttackDamagePacket,
    MeleeAttackDamageType, MeleeAttackDamageTypeStats, MeleeCombatConfig, MeleeSwing, MeleeWeapon, Motion, Player,
    SimulationPlugin,
};

const TICKS: u32 = 600;
const SWING_INTERVAL: u32 = 30;
const AIM_SPEED: f32 = 0.02;
const AIM_JITTER: f32 = 0.002;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = 42;
    println!("Starting headless melee simulation (seed: {})", seed);

    let mut app = create_headless_app(seed);
    app.add_plugins(SimulationPlugin)
        .insert_resource(MeleeCombatConfig::server(false));

    let sword_stats = MeleeAttackDamageTypeStats {
        damage: 4.0,
        knockback: 2.0,
        stagger: 0.5,
        tier: 1,
        damage_type: "SlashingAttack".to_string(),
        hit_window: [0.3, 0.6],
        durability_damage: 1,
        collider: [0.0, 1.2, 0.0, 0.0, -0.2, -1.6],
    };
    let sword = MeleeAttackDamageType::from_stats(MeleeAttackDamageId::new(1, 0, 0), &sword_stats)?;

    let player = app
        .world_mut()
        .spawn((
            Transform::default(),
            Player::with_attack_privileges("demo"),
            AimInput::default(),
            AttackDirectionController::new(DirectionSettings::default())?,
            DirectionCursor::default(),
            MeleeWeapon::new(vec![sword]),
        ))
        .id();

    let dummy = app
        .world_mut()
        .spawn((
            Transform::from_xyz(0.0, 0.0, -1.2),
            CollisionBox::humanoid(),
            Motion::default(),
            Health::new(40.0),
        ))
        .id();

    let mut hit_cursor = app.world().resource::<Events<MeleeAttackDamageEvent>>().get_cursor();

    for tick in 0..TICKS {
        let (jitter_pitch, jitter_yaw) = {
            let mut rng = app.world_mut().resource_mut::<DeterministicRng>();
            (
                rng.rng.gen_range(-AIM_JITTER..=AIM_JITTER),
                rng.rng.gen_range(-AIM_JITTER..=AIM_JITTER),
            )
        };
        if let Some(mut aim) = app.world_mut().get_mut::<AimInput>(player) {
            aim.pitch = jitter_pitch;
            aim.yaw -= AIM_SPEED + jitter_yaw;
        }

        if tick % SWING_INTERVAL == SWING_INTERVAL - 1 {
            let direction = app
                .world()
                .get::<AttackDirectionController>(player)
                .map(|controller| controller.current_direction())
                .unwrap_or_default();
            app.world_mut().send_event(MeleeSwing {
                attacker: player,
                direction,
                progress: 0.5,
            });
        }

        app.update();

        let events = app.world().resource::<Events<MeleeAttackDamageEvent>>();
        for hit in hit_cursor.read(events) {
            let packet = MeleeAttackDamagePacket::from(hit);
            println!(
                "Tick {}: hit {:?} from {:?} at {:?} ({} packet bytes)",
                tick,
                hit.target,
                hit.direction,
                hit.position,
                packet.to_bytes().len()
            );
        }

        if tick % 100 == 0 {
            if let Some(health) = app.world().get::<Health>(dummy) {
                println!("Tick {}: dummy health {:.1}/{:.1}", tick, health.current, health.max);
            }
        }
    }

    println!("Simulation complete!");
    Ok(())
}
