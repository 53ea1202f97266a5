use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{Booster, PhysicsHandle, PlumeComponent, TiltComponent};
use crate::config::{FlightConfig, SimConfig};
use crate::resources::{ControlSymbol, EpisodeState, InputState, SimTime, WindVector};

/// Compose the net force for one tick from the held symbols and the episode
/// wind.
///
/// Vertical: thrust fully replaces gravity for the tick, it does not
/// supplement it. Horizontal: one fixed maneuver force per held lateral
/// symbol, so opposing symbols cancel; the scaled wind bias is added
/// unconditionally. Damping and terminal velocity belong to the physics
/// body, not this computation.
pub fn net_force(input: &InputState, wind: &WindVector, flight: &FlightConfig) -> Vector3<f64> {
    let mut force = Vector3::zeros();

    if input.is_active(ControlSymbol::Thrust) {
        force.y += flight.thrust_force();
    } else {
        force.y -= flight.gravity_magnitude;
    }

    if input.is_active(ControlSymbol::Left) {
        force.x -= flight.maneuver_force;
    }
    if input.is_active(ControlSymbol::Right) {
        force.x += flight.maneuver_force;
    }
    if input.is_active(ControlSymbol::Forward) {
        force.z -= flight.maneuver_force;
    }
    if input.is_active(ControlSymbol::Back) {
        force.z += flight.maneuver_force;
    }

    force.x += wind.bias.x * flight.wind_force_scale;
    force.z += wind.bias.z * flight.wind_force_scale;

    force
}

/// Per-tick force application and cosmetic state update.
///
/// Forces are applied only while playing; the plume keeps fading in every
/// phase so the flame dies down naturally after a crash or catch. The tilt is
/// display-only state and never feeds back into the force computation.
pub fn flight_control_system(
    config: Res<SimConfig>,
    time: Res<SimTime>,
    input: Res<InputState>,
    wind: Res<WindVector>,
    episode: Res<EpisodeState>,
    mut query: Query<(&mut PhysicsHandle, &mut TiltComponent, &mut PlumeComponent), With<Booster>>,
) {
    let dt = time.delta_seconds();
    let flight = &config.flight;

    for (mut handle, mut tilt, mut plume) in query.iter_mut() {
        let thrusting = episode.is_playing() && input.is_active(ControlSymbol::Thrust);
        if thrusting {
            plume.ignite();
        } else {
            plume.fade(dt, flight.plume_fade_rate);
        }

        if !episode.is_playing() {
            continue;
        }

        let mut target_roll = 0.0;
        if input.is_active(ControlSymbol::Left) {
            target_roll = flight.tilt_angle;
        } else if input.is_active(ControlSymbol::Right) {
            target_roll = -flight.tilt_angle;
        }
        let mut target_pitch = 0.0;
        if input.is_active(ControlSymbol::Forward) {
            target_pitch = -flight.tilt_angle;
        } else if input.is_active(ControlSymbol::Back) {
            target_pitch = flight.tilt_angle;
        }
        tilt.update(dt, flight.tilt_rate, target_pitch, target_roll);

        // No-op until the host attaches the body
        let Some(body) = handle.body_mut() else {
            continue;
        };
        body.apply_force(net_force(&input, &wind, flight));
    }
}
