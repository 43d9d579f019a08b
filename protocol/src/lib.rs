//! Wire protocol between the simulation host and its clients.
//!
//! Messages are plain serde types serialized with bincode. The transport is
//! deliberately unspecified: anything that moves byte slices works. State
//! flows host -> client as periodic `StateDelta` snapshots; clients send
//! control inputs and (for scenario tooling) environment overrides.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub const PROTOCOL_VERSION: u16 = 1;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("failed to encode message: {0}")]
    Encode(#[source] bincode::Error),
    #[error("failed to decode message: {0}")]
    Decode(#[source] bincode::Error),
}

pub fn encode<T: Serialize>(msg: &T) -> Result<Vec<u8>, ProtocolError> {
    bincode::serialize(msg).map_err(ProtocolError::Encode)
}

pub fn decode<'a, T: Deserialize<'a>>(bytes: &'a [u8]) -> Result<T, ProtocolError> {
    bincode::deserialize(bytes).map_err(ProtocolError::Decode)
}

// ----- Shared wire pieces -----

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DriveWire {
    Engine { throttle: f32 },
    Sail { sheet: Option<f32> },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveComponentWire {
    pub amplitude: f32,
    pub frequency: f32,
    pub direction_deg: f32,
    pub phase: f32,
    pub speed: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindWire {
    pub direction_deg: f32,
    pub speed: f32,
    pub vector: [f32; 3],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WavesWire {
    pub active: bool,
    pub amplitude: f32,
    pub frequency: f32,
    pub direction_deg: f32,
    pub speed: f32,
    pub components: Vec<WaveComponentWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentWire {
    pub wind: WindWire,
    pub waves: WavesWire,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselStateWire {
    pub id: Uuid,
    pub name: String,
    pub position: [f32; 3],
    /// Quaternion components in x, y, z, w order.
    pub orientation: [f32; 4],
    pub velocity: [f32; 3],
    pub heading_deg: f32,
    pub speed_kn: f32,
    pub rudder_deg: f32,
    pub drive: DriveWire,
}

// ----- Client to server -----

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientHello {
    pub protocol: u16,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputTick {
    pub tick: u64,
    pub rudder_deg: f32,
    pub drive: DriveWire,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WindOverrideWire {
    pub direction_deg: Option<f32>,
    pub speed: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WavesOverrideWire {
    pub active: Option<bool>,
    pub amplitude: Option<f32>,
    pub frequency: Option<f32>,
    pub direction_deg: Option<f32>,
    pub speed: Option<f32>,
    pub components: Option<Vec<WaveComponentWire>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ClientToServer {
    Hello(ClientHello),
    InputTick(InputTick),
    SetWind(WindOverrideWire),
    SetWaves(WavesOverrideWire),
    Goodbye,
}

// ----- Server to client -----

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JoinAck {
    pub player_id: Uuid,
    pub tick_hz: u32,
    pub protocol: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateDelta {
    pub tick: u64,
    pub server_ms: u64,
    pub environment: EnvironmentWire,
    pub vessels: Vec<VesselStateWire>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ServerToClient {
    JoinAck(JoinAck),
    InputAck { tick: u64 },
    StateDelta(StateDelta),
    PlayerLeft { player_id: Uuid },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_delta_survives_the_wire() {
        let delta = StateDelta {
            tick: 42,
            server_ms: 1400,
            environment: EnvironmentWire {
                wind: WindWire {
                    direction_deg: 310.0,
                    speed: 7.5,
                    vector: [4.8, 0.0, -5.7],
                },
                waves: WavesWire {
                    active: true,
                    amplitude: 0.75,
                    frequency: 0.2,
                    direction_deg: 305.0,
                    speed: 1.0,
                    components: vec![WaveComponentWire {
                        amplitude: 0.6,
                        frequency: 0.25,
                        direction_deg: 300.0,
                        phase: 1.1,
                        speed: 0.9,
                    }],
                },
            },
            vessels: vec![VesselStateWire {
                id: Uuid::new_v4(),
                name: "skipper".into(),
                position: [10.0, 0.3, -4.0],
                orientation: [0.0, 0.38, 0.0, 0.92],
                velocity: [2.0, 0.0, 1.0],
                heading_deg: 312.0,
                speed_kn: 4.3,
                rudder_deg: -5.0,
                drive: DriveWire::Sail { sheet: None },
            }],
        };
        let bytes = encode(&ServerToClient::StateDelta(delta.clone())).expect("encode");
        match decode::<ServerToClient>(&bytes).expect("decode") {
            ServerToClient::StateDelta(back) => assert_eq!(back, delta),
            other => panic!("decoded wrong variant: {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let err = decode::<ServerToClient>(&[0xff; 7]);
        assert!(matches!(err, Err(ProtocolError::Decode(_))));
    }
}
