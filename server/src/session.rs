use std::collections::HashMap;

use glam::Vec3;
use tracing::info;
use uuid::Uuid;

use protocol::{
    DriveWire, EnvironmentWire, StateDelta, VesselStateWire, WaveComponentWire,
    WavesOverrideWire, WavesWire, WindOverrideWire, WindWire,
};
use sim::{
    step_vessel, Drive, Environment, VesselInputs, VesselSpec, VesselState, WaveComponent,
    WavesOverride, WindOverride,
};

use crate::Config;

/// One connected player and their vessel.
pub struct Player {
    pub id: Uuid,
    pub name: String,
    pub spec: VesselSpec,
    pub state: VesselState,
    pub inputs: VesselInputs,
}

/// Authoritative game session: one environment, many vessels.
pub struct Session {
    environment: Environment,
    players: HashMap<Uuid, Player>,
    tick: u64,
    sim_time_ms: f64,
    snapshot_divider: u64,
    spawned: u32,
}

impl Session {
    pub fn new(cfg: &Config) -> Self {
        let mut environment = match cfg.seed {
            Some(seed) => Environment::new(seed),
            None => Environment::from_entropy(),
        };
        environment.set_wind(WindOverride {
            direction_deg: Some(cfg.wind_direction_deg),
            speed: Some(cfg.wind_speed),
        });
        environment.set_waves(WavesOverride {
            active: Some(cfg.waves_active),
            ..Default::default()
        });
        let snapshot_divider = (cfg.tick_hz / cfg.snapshot_hz.max(1)).max(1) as u64;
        Self {
            environment,
            players: HashMap::new(),
            tick: 0,
            sim_time_ms: 0.0,
            snapshot_divider,
            spawned: 0,
        }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn player(&self, id: Uuid) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn join(&mut self, name: impl Into<String>, spec: VesselSpec) -> Uuid {
        let id = Uuid::new_v4();
        let name = name.into();
        // Stagger spawns so hulls never overlap.
        let position = Vec3::new(0.0, 0.0, self.spawned as f32 * 25.0);
        self.spawned += 1;
        info!(%id, name = %name, ?position, "player joined");
        self.players.insert(
            id,
            Player {
                id,
                name,
                spec,
                state: VesselState::new(position, 0.0),
                inputs: VesselInputs::default(),
            },
        );
        id
    }

    pub fn leave(&mut self, id: Uuid) -> bool {
        match self.players.remove(&id) {
            Some(player) => {
                info!(%id, name = %player.name, "player left");
                true
            }
            None => false,
        }
    }

    /// Store the latest control inputs for a vessel. Range violations are
    /// clamped inside the step, never rejected.
    pub fn apply_input(&mut self, id: Uuid, rudder_deg: f32, drive: DriveWire) {
        if let Some(player) = self.players.get_mut(&id) {
            player.inputs = VesselInputs {
                rudder_deg,
                drive: drive_from_wire(drive),
            };
        }
    }

    pub fn apply_wind_override(&mut self, ovr: WindOverrideWire) {
        self.environment.set_wind(WindOverride {
            direction_deg: ovr.direction_deg,
            speed: ovr.speed,
        });
    }

    pub fn apply_waves_override(&mut self, ovr: WavesOverrideWire) {
        self.environment.set_waves(WavesOverride {
            active: ovr.active,
            amplitude: ovr.amplitude,
            frequency: ovr.frequency,
            direction_deg: ovr.direction_deg,
            speed: ovr.speed,
            components: ovr
                .components
                .map(|cs| cs.into_iter().map(component_from_wire).collect()),
        });
    }

    /// Advance the whole session one tick. The environment advances exactly
    /// once, before any vessel, and every vessel in the frame consumes the
    /// same snapshot; anything else skews wave phases between vessels.
    /// Returns a `StateDelta` on broadcast ticks.
    pub fn tick(&mut self, dt: f32) -> Option<StateDelta> {
        let snapshot = self.environment.advance(dt);
        for player in self.players.values_mut() {
            step_vessel(&snapshot, &player.spec, player.inputs, &mut player.state, dt);
        }
        self.tick += 1;
        self.sim_time_ms += dt as f64 * 1000.0;
        (self.tick % self.snapshot_divider == 0).then(|| self.state_delta())
    }

    fn state_delta(&self) -> StateDelta {
        let mut vessels: Vec<VesselStateWire> = self.players.values().map(vessel_to_wire).collect();
        // HashMap order is arbitrary; keep the wire order stable.
        vessels.sort_by_key(|v| v.id);
        StateDelta {
            tick: self.tick,
            server_ms: self.sim_time_ms as u64,
            environment: environment_to_wire(&self.environment),
            vessels,
        }
    }
}

// ----- sim <-> wire conversions -----

fn drive_from_wire(d: DriveWire) -> Drive {
    match d {
        DriveWire::Engine { throttle } => Drive::Engine { throttle },
        DriveWire::Sail { sheet } => Drive::Sail { sheet },
    }
}

fn component_from_wire(c: WaveComponentWire) -> WaveComponent {
    WaveComponent {
        amplitude: c.amplitude,
        frequency: c.frequency,
        direction_deg: c.direction_deg,
        phase: c.phase,
        speed: c.speed,
    }
}

fn component_to_wire(c: &WaveComponent) -> WaveComponentWire {
    WaveComponentWire {
        amplitude: c.amplitude,
        frequency: c.frequency,
        direction_deg: c.direction_deg,
        phase: c.phase,
        speed: c.speed,
    }
}

fn environment_to_wire(env: &Environment) -> EnvironmentWire {
    EnvironmentWire {
        wind: WindWire {
            direction_deg: env.wind.direction_deg,
            speed: env.wind.speed,
            vector: env.wind.vector.to_array(),
        },
        waves: WavesWire {
            active: env.waves.active,
            amplitude: env.waves.amplitude,
            frequency: env.waves.frequency,
            direction_deg: env.waves.direction_deg,
            speed: env.waves.speed,
            components: env.waves.components.iter().map(component_to_wire).collect(),
        },
    }
}

fn vessel_to_wire(p: &Player) -> VesselStateWire {
    let s = &p.state;
    // Sail drives report the live boom angle, not the commanded sheet.
    let drive = match p.inputs.drive {
        Drive::Engine { throttle } => DriveWire::Engine {
            throttle: throttle.clamp(-1.0, 1.0),
        },
        Drive::Sail { .. } => DriveWire::Sail {
            sheet: Some(s.sail_angle_deg),
        },
    };
    VesselStateWire {
        id: p.id,
        name: p.name.clone(),
        position: s.position.to_array(),
        orientation: [
            s.orientation.x,
            s.orientation.y,
            s.orientation.z,
            s.orientation.w,
        ],
        velocity: s.velocity.to_array(),
        heading_deg: s.heading_deg,
        speed_kn: s.speed_kn,
        rudder_deg: p
            .inputs
            .rudder_deg
            .clamp(-p.spec.max_rudder_deg, p.spec.max_rudder_deg),
        drive,
    }
}
