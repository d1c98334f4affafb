//! World-level melee rules.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Which side is resolving the attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttackAuthority {
    /// Authoritative: privileges and PvP rules are enforced.
    #[default]
    Server,
    /// Client-side prediction: every hit is tentatively received until the
    /// server confirms it.
    ClientPrediction,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MeleeCombatConfig {
    pub authority: AttackAuthority,
    /// World flag: may players damage each other at all.
    pub allow_pvp: bool,
}

impl MeleeCombatConfig {
    pub fn server(allow_pvp: bool) -> Self {
        Self {
            authority: AttackAuthority::Server,
            allow_pvp,
        }
    }

    pub fn client_prediction() -> Self {
        Self {
            authority: AttackAuthority::ClientPrediction,
            allow_pvp: false,
        }
    }

    pub fn is_server(&self) -> bool {
        self.authority == AttackAuthority::Server
    }
}
