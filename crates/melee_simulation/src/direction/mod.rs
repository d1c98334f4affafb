//! Attack direction classification.
//!
//! Input collaborator writes `AimInput` every frame; `classify_attack_directions`
//! runs once per fixed tick and updates each player's
//! `AttackDirectionController` + `DirectionCursor`.
//!
//! ```text
//! AimInput (pitch, yaw)
//!   ↓ FixedUpdate
//! AttackDirectionController::on_tick
//!   ↓
//! DirectionCursor (renderer)   current_direction() (combat)
//! ```

use bevy::prelude::*;

pub mod controller;
pub mod history;
pub mod sectors;
pub mod types;

pub use controller::{AttackDirectionController, DirectionSettings, DEFAULT_DEPTH, SENSITIVITY_FACTOR};
pub use history::DirectionHistory;
pub use sectors::{divide_circle, sector_index, sector_mapping, wrap_degrees};
pub use types::{AttackDirection, DirectionsConfiguration, MouseMovementSample};

use crate::components::{AimInput, DirectionCursor};

/// System set for direction classification (runs before swing resolution).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectionClassification;

pub struct DirectionPlugin;

impl Plugin for DirectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            classify_attack_directions.in_set(DirectionClassification),
        );
    }
}

/// System: feed this tick's aim into every classifier.
pub fn classify_attack_directions(
    mut query: Query<(&AimInput, &mut AttackDirectionController, &mut DirectionCursor)>,
) {
    for (aim, mut controller, mut cursor) in query.iter_mut() {
        controller.on_tick(aim.pitch, aim.yaw, &mut cursor);
    }
}
