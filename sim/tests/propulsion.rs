use glam::Vec3;
use sim::{
    presets, step_vessel, Drive, EnvironmentSnapshot, VesselInputs, VesselState, Waves, Wind,
};

fn env_with_wind(direction_deg: f32, speed: f32) -> EnvironmentSnapshot {
    let mut env = sim::Environment::new(0);
    env.set_wind(sim::WindOverride {
        direction_deg: Some(direction_deg),
        speed: Some(speed),
    });
    env.set_waves(sim::WavesOverride {
        active: Some(false),
        ..Default::default()
    });
    env.snapshot()
}

fn calm_env() -> EnvironmentSnapshot {
    EnvironmentSnapshot {
        wind: Wind::default(),
        waves: Waves {
            active: false,
            components: Vec::new(),
            ..Waves::default()
        },
    }
}

#[test]
fn full_throttle_from_rest_makes_way_along_the_initial_heading() {
    let env = calm_env();
    let spec = presets::motor_launch_spec();
    let dt = 1.0 / 60.0;
    let heading = 40.0f32;

    let mut state = VesselState::new(Vec3::ZERO, heading);
    let inputs = VesselInputs {
        rudder_deg: 0.0,
        drive: Drive::Engine { throttle: 1.0 },
    };
    for _ in 0..600 {
        // 10 seconds
        step_vessel(&env, &spec, inputs, &mut state, dt);
    }

    let track = sim::compass_to_world(heading);
    let along = state.position.dot(track);
    let across = (state.position - track * along).length();
    assert!(along > 10.0, "made only {along} m of way in 10 s");
    assert!(
        across < along * 0.02,
        "drifted {across} m off a straight track of {along} m"
    );
    assert!(state.speed_kn > 0.0);
}

#[test]
fn auto_trimmed_sail_drives_on_a_beam_reach() {
    // Wind from the north, vessel heading west: apparent wind over the
    // starboard beam.
    let env = env_with_wind(0.0, 10.0);
    let spec = presets::sloop_spec();
    let dt = 1.0 / 60.0;

    let mut state = VesselState::new(Vec3::ZERO, 90.0);
    let inputs = VesselInputs {
        rudder_deg: 0.0,
        drive: Drive::Sail { sheet: None },
    };
    for _ in 0..900 {
        step_vessel(&env, &spec, inputs, &mut state, dt);
    }
    // Heading 90 faces world -X.
    assert!(state.position.x < -5.0, "no way made: {:?}", state.position);
    assert!(state.speed_kn > 1.0);
}

#[test]
fn manual_sheet_overrides_the_auto_trim() {
    let env = env_with_wind(0.0, 10.0);
    let spec = presets::sloop_spec();
    let dt = 1.0 / 60.0;

    let mut state = VesselState::new(Vec3::ZERO, 180.0);
    let pinned = VesselInputs {
        rudder_deg: 0.0,
        drive: Drive::Sail { sheet: Some(10.0) },
    };
    for _ in 0..600 {
        step_vessel(&env, &spec, pinned, &mut state, dt);
    }
    assert!(
        (state.sail_angle_deg - 10.0).abs() < 1.0,
        "sheet settled at {} instead of the pinned 10 degrees",
        state.sail_angle_deg
    );
}

#[test]
fn throttle_outside_unit_range_is_clamped() {
    let env = calm_env();
    let spec = presets::motor_launch_spec();
    let dt = 1.0 / 60.0;

    let mut wild = VesselState::new(Vec3::ZERO, 0.0);
    let mut sane = VesselState::new(Vec3::ZERO, 0.0);
    for _ in 0..120 {
        step_vessel(
            &env,
            &spec,
            VesselInputs {
                rudder_deg: 500.0,
                drive: Drive::Engine { throttle: 9.0 },
            },
            &mut wild,
            dt,
        );
        step_vessel(
            &env,
            &spec,
            VesselInputs {
                rudder_deg: spec.max_rudder_deg,
                drive: Drive::Engine { throttle: 1.0 },
            },
            &mut sane,
            dt,
        );
    }
    assert_eq!(wild, sane);
}
