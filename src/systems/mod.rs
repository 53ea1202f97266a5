mod capture;
mod crash;
mod flight_control;
mod game_state;
mod physics;
mod reset;

pub use capture::capture_zone_system;
pub use crash::{collision_crash_system, fall_out_system};
pub use flight_control::{flight_control_system, net_force};
pub use game_state::apply_transitions_system;
pub use physics::physics_step_system;
pub use reset::settle_system;
