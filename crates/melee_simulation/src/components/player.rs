//! Player identity and privileges.

use bevy::prelude::Component;
use std::collections::HashSet;

/// Privilege required to hit other players (server side).
pub const PRIVILEGE_ATTACK_PLAYERS: &str = "attackplayers";

/// Privilege required to hit non-player entities (server side).
pub const PRIVILEGE_ATTACK_CREATURES: &str = "attackcreatures";

/// Marks a player-controlled entity.
///
/// Entities without this component are creatures: they are never gated by
/// privileges when they attack.
#[derive(Component, Debug, Clone, Default)]
pub struct Player {
    pub name: String,
    pub privileges: HashSet<String>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            privileges: HashSet::new(),
        }
    }

    /// Player with both attack privileges.
    pub fn with_attack_privileges(name: impl Into<String>) -> Self {
        Self::new(name)
            .grant(PRIVILEGE_ATTACK_PLAYERS)
            .grant(PRIVILEGE_ATTACK_CREATURES)
    }

    pub fn grant(mut self, privilege: impl Into<String>) -> Self {
        self.privileges.insert(privilege.into());
        self
    }

    pub fn has_privilege(&self, privilege: &str) -> bool {
        self.privileges.contains(privilege)
    }
}
