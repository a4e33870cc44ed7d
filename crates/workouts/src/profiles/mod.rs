//! Per-activity coefficients.
//!
//! Each activity kind has its own profile struct holding the constants its
//! formulas need and the label shown in reports. The canonical coefficients
//! are the `Default` of each profile.

mod running;
mod swimming;
mod walking;

pub use running::RunningProfile;
pub use swimming::SwimmingProfile;
pub use walking::WalkingProfile;

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_HOUR: f64 = 60.0;
/// Centimetres in a metre.
pub const CM_IN_M: f64 = 100.0;

/// Coefficients shared by every activity profile.
pub trait ActivityProfile {
    /// Label printed in the report line.
    fn label(&self) -> &'static str;

    /// Distance covered by one action (step or stroke), in metres.
    fn action_length_m(&self) -> f64;
}

/// Distance in kilometres covered by `action_count` actions.
pub fn distance_km(profile: &impl ActivityProfile, action_count: f64) -> f64 {
    action_count * profile.action_length_m() / M_IN_KM
}
