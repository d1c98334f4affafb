//! Direction vocabulary: compass resolutions, canonical attack directions,
//! per-tick aim samples.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How many sectors the aim circle is split into.
///
/// Discriminant = sector count. `None` disables classification entirely
/// (cursor hidden, direction frozen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
#[repr(u8)]
pub enum DirectionsConfiguration {
    None = 1,
    TopBottom = 2,
    Triangle = 3,
    Square = 4,
    Star = 5,
    #[default]
    Eight = 8,
}

impl DirectionsConfiguration {
    /// Number of angular sectors.
    pub fn sectors(self) -> usize {
        self as usize
    }
}

/// Canonical compass directions, clockwise from Top.
///
/// Every resolution maps its sectors onto this vocabulary, so combat code
/// never has to know which resolution the player picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect, Serialize, Deserialize)]
pub enum AttackDirection {
    #[default]
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl AttackDirection {
    pub const ALL: [AttackDirection; 8] = [
        AttackDirection::Top,
        AttackDirection::TopRight,
        AttackDirection::Right,
        AttackDirection::BottomRight,
        AttackDirection::Bottom,
        AttackDirection::BottomLeft,
        AttackDirection::Left,
        AttackDirection::TopLeft,
    ];

    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        Self::ALL.get(ordinal).copied()
    }
}

/// One tick of aim input. Deltas are relative to the previously pushed sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseMovementSample {
    pub pitch: f32,
    pub yaw: f32,
    pub delta_pitch: f32,
    pub delta_yaw: f32,
}

impl MouseMovementSample {
    pub const ZERO: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
        delta_pitch: 0.0,
        delta_yaw: 0.0,
    };

    /// Squared length of this tick's aim motion.
    pub fn motion_squared(&self) -> f32 {
        self.delta_pitch * self.delta_pitch + self.delta_yaw * self.delta_yaw
    }
}
