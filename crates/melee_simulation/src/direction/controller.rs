//! Attack direction classifier.
//!
//! Turns a stream of absolute pitch/yaw samples into a sticky discrete
//! `AttackDirection`.
//!
//! # Smoothing
//!
//! The motion angle is measured against the sample evicted from the history
//! window (`2 × depth` ticks old), not against last tick. Single-tick jitter is
//! damped with a bounded, deterministic lag and no averaging.
//!
//! # Stickiness
//!
//! Direction only changes when the latest tick's motion exceeds
//! `SENSITIVITY_FACTOR / sensitivity`. Below that the previous direction is kept.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::history::DirectionHistory;
use super::sectors::{divide_circle, sector_index, sector_mapping, wrap_degrees};
use super::types::{AttackDirection, DirectionsConfiguration, MouseMovementSample};
use crate::components::DirectionCursor;
use crate::error::CombatConfigError;

/// Base squared-motion threshold at sensitivity 1.0.
pub const SENSITIVITY_FACTOR: f32 = 1e-5;

/// Default history half-length (ticks).
pub const DEFAULT_DEPTH: usize = 5;

/// Classifier settings, as authored in client config.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectionSettings {
    pub configuration: DirectionsConfiguration,
    pub depth: usize,
    pub sensitivity: f32,
}

impl Default for DirectionSettings {
    fn default() -> Self {
        Self {
            configuration: DirectionsConfiguration::Eight,
            depth: DEFAULT_DEPTH,
            sensitivity: 1.0,
        }
    }
}

/// Per-player direction classifier. Call `on_tick` at most once per tick.
#[derive(Component, Debug, Clone)]
pub struct AttackDirectionController {
    configuration: DirectionsConfiguration,
    depth: usize,
    sensitivity: f32,
    history: DirectionHistory,
    current_direction: AttackDirection,
    current_direction_normalized: usize,
}

impl Default for AttackDirectionController {
    fn default() -> Self {
        let settings = DirectionSettings::default();
        Self {
            configuration: settings.configuration,
            depth: settings.depth,
            sensitivity: settings.sensitivity,
            history: DirectionHistory::new(settings.depth),
            current_direction: AttackDirection::Top,
            current_direction_normalized: 0,
        }
    }
}

impl AttackDirectionController {
    pub fn new(settings: DirectionSettings) -> Result<Self, CombatConfigError> {
        validate_configuration(settings.configuration)?;
        if settings.depth == 0 {
            return Err(CombatConfigError::ZeroHistoryDepth);
        }

        Ok(Self {
            configuration: settings.configuration,
            depth: settings.depth,
            sensitivity: settings.sensitivity,
            history: DirectionHistory::new(settings.depth),
            current_direction: AttackDirection::Top,
            current_direction_normalized: 0,
        })
    }

    pub fn configuration(&self) -> DirectionsConfiguration {
        self.configuration
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    pub fn current_direction(&self) -> AttackDirection {
        self.current_direction
    }

    /// Sector index within the active configuration (`0..N`).
    pub fn current_direction_normalized(&self) -> usize {
        self.current_direction_normalized
    }

    pub fn history(&self) -> &DirectionHistory {
        &self.history
    }

    pub fn set_configuration(
        &mut self,
        configuration: DirectionsConfiguration,
    ) -> Result<(), CombatConfigError> {
        validate_configuration(configuration)?;
        self.configuration = configuration;
        Ok(())
    }

    /// Resizes the history window. Accumulated samples are discarded.
    pub fn set_depth(&mut self, depth: usize) -> Result<(), CombatConfigError> {
        if depth == 0 {
            return Err(CombatConfigError::ZeroHistoryDepth);
        }
        self.depth = depth;
        self.history = DirectionHistory::new(depth);
        Ok(())
    }

    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Squared motion a tick must exceed to move the direction.
    ///
    /// `None` when sensitivity is zero, negative or not finite: such a
    /// classifier never updates.
    pub fn motion_threshold(&self) -> Option<f32> {
        if self.sensitivity.is_finite() && self.sensitivity > 0.0 {
            Some(SENSITIVITY_FACTOR / self.sensitivity)
        } else {
            None
        }
    }

    /// Feeds one tick of aim input. Returns `true` if the direction was committed.
    pub fn on_tick(&mut self, pitch: f32, yaw: f32, cursor: &mut DirectionCursor) -> bool {
        if self.configuration == DirectionsConfiguration::None {
            cursor.show = false;
            return false;
        }
        cursor.show = true;

        let last = self.history.latest();
        let sample = MouseMovementSample {
            pitch,
            yaw,
            delta_pitch: pitch - last.pitch,
            delta_yaw: yaw - last.yaw,
        };
        let previous = self.history.push_pop(sample);

        let angle = wrap_degrees((previous.yaw - yaw).atan2(previous.pitch - pitch).to_degrees());

        let sectors = self.configuration.sectors();
        let bounds = divide_circle(sectors, -360.0 / sectors as f32 / 2.0);
        let Some(sector) = sector_index(angle, &bounds) else {
            return false;
        };

        let Some(threshold) = self.motion_threshold() else {
            return false;
        };
        if sample.motion_squared() <= threshold {
            return false;
        }

        let Some(direction) = sector_mapping(self.configuration).and_then(|table| table.get(sector)) else {
            crate::logger::log_error(&format!(
                "AttackDirectionController: no direction for sector {} of {:?}",
                sector, self.configuration
            ));
            return false;
        };

        self.current_direction_normalized = sector;
        self.current_direction = *direction;
        cursor.current_direction = direction.ordinal();
        true
    }
}

fn validate_configuration(configuration: DirectionsConfiguration) -> Result<(), CombatConfigError> {
    if configuration == DirectionsConfiguration::None {
        return Ok(());
    }
    match sector_mapping(configuration) {
        Some(table) if table.len() == configuration.sectors() => Ok(()),
        _ => Err(CombatConfigError::MissingSectorMapping(configuration)),
    }
}
