//! Aim input and direction cursor state.

use bevy::prelude::*;

/// Current aim angles (radians), written by the input collaborator every frame.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AimInput {
    pub pitch: f32,
    pub yaw: f32,
}

/// What the direction cursor renderer draws.
///
/// Written by `AttackDirectionController::on_tick`, read by the renderer.
/// Nothing flows back.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct DirectionCursor {
    pub show: bool,
    /// `AttackDirection` ordinal
    pub current_direction: usize,
}
