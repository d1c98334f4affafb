//! Melee damage network packet.
//!
//! Fixed 40-byte little-endian layout:
//!
//! ```text
//! offset  size  field
//!      0     4  item_id             i32
//!      4     4  attack_id           i32
//!      8     4  damage_id           i32
//!     12    12  position            [f32; 3]
//!     24     8  attacker_entity_id  i64
//!     32     8  target_entity_id    i64
//! ```
//!
//! Floats travel as raw bits, so decoding reproduces them exactly.

use serde::{Deserialize, Serialize};

use super::damage_type::MeleeAttackDamageId;
use super::events::MeleeAttackDamageEvent;
use crate::error::PacketError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeleeAttackDamagePacket {
    pub id: MeleeAttackDamageId,
    pub position: [f32; 3],
    pub attacker_entity_id: i64,
    pub target_entity_id: i64,
}

impl MeleeAttackDamagePacket {
    pub const SIZE: usize = 40;

    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.id.item_id.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.id.attack_id.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.id.damage_id.to_le_bytes());
        for (axis, value) in self.position.iter().enumerate() {
            let offset = 12 + axis * 4;
            bytes[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
        }
        bytes[24..32].copy_from_slice(&self.attacker_entity_id.to_le_bytes());
        bytes[32..40].copy_from_slice(&self.target_entity_id.to_le_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PacketError> {
        let bytes: &[u8; Self::SIZE] = bytes.try_into().map_err(|_| PacketError::InvalidLength {
            expected: Self::SIZE,
            actual: bytes.len(),
        })?;

        let word = |offset: usize| [bytes[offset], bytes[offset + 1], bytes[offset + 2], bytes[offset + 3]];
        let long = |offset: usize| {
            let mut out = [0u8; 8];
            out.copy_from_slice(&bytes[offset..offset + 8]);
            out
        };

        Ok(Self {
            id: MeleeAttackDamageId {
                item_id: i32::from_le_bytes(word(0)),
                attack_id: i32::from_le_bytes(word(4)),
                damage_id: i32::from_le_bytes(word(8)),
            },
            position: [
                f32::from_le_bytes(word(12)),
                f32::from_le_bytes(word(16)),
                f32::from_le_bytes(word(20)),
            ],
            attacker_entity_id: i64::from_le_bytes(long(24)),
            target_entity_id: i64::from_le_bytes(long(32)),
        })
    }
}

impl From<&MeleeAttackDamageEvent> for MeleeAttackDamagePacket {
    fn from(event: &MeleeAttackDamageEvent) -> Self {
        Self {
            id: event.damage_id,
            position: event.position.to_array(),
            attacker_entity_id: event.attacker.to_bits() as i64,
            target_entity_id: event.target.to_bits() as i64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::AttackDirection;
    use bevy::prelude::{Entity, Vec3};

    fn sample_packet() -> MeleeAttackDamagePacket {
        MeleeAttackDamagePacket {
            id: MeleeAttackDamageId::new(1701, -3, 2),
            position: [12.5, -0.125, 1.0e-7],
            attacker_entity_id: 42,
            target_entity_id: -9_000_000_000,
        }
    }

    #[test]
    fn test_packet_round_trip() {
        let packet = sample_packet();
        let bytes = packet.to_bytes();

        assert_eq!(bytes.len(), MeleeAttackDamagePacket::SIZE);
        assert_eq!(MeleeAttackDamagePacket::from_bytes(&bytes), Ok(packet));
    }

    #[test]
    fn test_packet_layout_is_little_endian() {
        let bytes = sample_packet().to_bytes();

        assert_eq!(&bytes[0..4], &1701_i32.to_le_bytes());
        assert_eq!(&bytes[12..16], &12.5_f32.to_le_bytes());
        assert_eq!(&bytes[24..32], &42_i64.to_le_bytes());
    }

    #[test]
    fn test_packet_rejects_wrong_length() {
        let bytes = sample_packet().to_bytes();

        assert_eq!(
            MeleeAttackDamagePacket::from_bytes(&bytes[..39]),
            Err(PacketError::InvalidLength { expected: 40, actual: 39 })
        );
    }

    #[test]
    fn test_packet_from_event() {
        let attacker = Entity::from_raw(7);
        let target = Entity::from_raw(9);
        let event = MeleeAttackDamageEvent {
            attacker,
            target,
            position: Vec3::new(1.0, 2.0, 3.0),
            direction: AttackDirection::BottomLeft,
            damage_id: MeleeAttackDamageId::new(10, 0, 1),
        };

        let packet = MeleeAttackDamagePacket::from(&event);

        assert_eq!(packet.id, event.damage_id);
        assert_eq!(packet.position, [1.0, 2.0, 3.0]);
        assert_eq!(packet.attacker_entity_id, attacker.to_bits() as i64);
        assert_eq!(packet.target_entity_id, target.to_bits() as i64);
    }
}
