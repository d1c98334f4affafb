//! Melee Simulation Core
//!
//! Directional melee combat on Bevy 0.16 ECS, headless.
//!
//! - direction: aim motion → discrete `AttackDirection` (per player, per tick)
//! - combat: weapon damage profiles, line-segment hit tests, damage/stagger/knockback
//!
//! Rendering, animation, transport and physics integration live in the host;
//! they talk to this crate through components (`AimInput`, `Motion`,
//! `DirectionCursor`) and events (`MeleeSwing`, `MeleeAttackDamageEvent`).

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod combat;
pub mod components;
pub mod direction;
pub mod error;
pub mod logger;

pub use combat::{
    CombatPlugin, DamageKind, DamageReceiver, HitWindow, LineSegmentCollider, MeleeAttackDamageEvent,
    MeleeAttackDamageId, MeleeAttackDamagePacket, MeleeAttackDamageType, MeleeAttackDamageTypeStats,
    MeleeCombatConfig, MeleeSwing, MeleeWeapon,
};
pub use components::*;
pub use direction::{
    AttackDirection, AttackDirectionController, DirectionClassification, DirectionPlugin, DirectionSettings,
    DirectionsConfiguration,
};
pub use error::{CombatConfigError, PacketError};
pub use logger::{init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter};

/// Simulation tick rate (FixedUpdate).
pub const TICK_RATE_HZ: f64 = 60.0;

/// Main simulation plugin (direction classification + melee combat).
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .add_plugins((DirectionPlugin, CombatPlugin));
    }
}

/// Seeded RNG resource for hosts and drivers that need randomness
/// (simulated aim jitter, test scenarios). The core systems never read it.
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Minimal headless App where every `app.update()` after the first advances
/// time by exactly one fixed tick.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();

    let fixed = Time::<Fixed>::from_hz(TICK_RATE_HZ);
    let timestep = fixed.timestep();

    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(fixed)
        .insert_resource(TimeUpdateStrategy::ManualDuration(timestep));

    app
}

/// Debug-formatted snapshot of every `T`, sorted by entity index.
///
/// Two runs of the same scenario must produce identical snapshots.
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
