//! Launch vehicle injection options.

/// Delivered-mass capability of a launch vehicle to its injection orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchOption {
    pub id: String,
    pub name: String,
    pub vehicle: String,
    /// Payload mass the vehicle delivers to the transfer orbit.
    pub delivered_mass_kg: f64,
    /// Delta-v the spacecraft still has to supply to reach GEO.
    pub dv_remaining_to_geo_mps: f64,
    pub notes: Option<String>,
}

impl LaunchOption {
    /// Delivered mass left over after carrying `initial_mass_kg`; negative when overweight.
    pub fn mass_margin_kg(&self, initial_mass_kg: f64) -> f64 {
        self.delivered_mass_kg - initial_mass_kg
    }
}
