//! Core constants and shared numerical primitives for the propellant budget workspace.

pub mod roots;

/// Physical constants expressed in SI units.
pub mod constants {
    /// Standard gravity used to convert specific impulse into exhaust velocity (m/s²).
    pub const G0: f64 = 9.80665;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::G0;

    /// Effective exhaust velocity (m/s) for a specific impulse in seconds.
    #[inline]
    pub fn exhaust_velocity_m_s(isp_seconds: f64) -> f64 {
        G0 * isp_seconds
    }

    /// Convert kilograms to metric tonnes.
    #[inline]
    pub fn kg_to_tonnes(v: f64) -> f64 {
        v / 1_000.0
    }
}
