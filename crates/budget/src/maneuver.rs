//! Maneuver line items in mission execution order.

use std::fmt;

use sat_propulsion::Thruster;

/// Maneuver category. Carried through to results; it never changes the math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ManeuverType {
    OrbitTransfer,
    /// North-south station keeping.
    Nssk,
    /// East-west station keeping.
    Ewsk,
    Disposal,
    #[default]
    Custom,
}

impl ManeuverType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManeuverType::OrbitTransfer => "orbit_transfer",
            ManeuverType::Nssk => "nssk",
            ManeuverType::Ewsk => "ewsk",
            ManeuverType::Disposal => "disposal",
            ManeuverType::Custom => "custom",
        }
    }
}

impl fmt::Display for ManeuverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One maneuver with its thruster already resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ManeuverInput {
    pub name: String,
    pub maneuver_type: ManeuverType,
    /// Delta-v per occurrence.
    pub delta_v_mps: f64,
    pub thruster: Thruster,
    pub occurrences: u32,
    /// Scales the thruster's specific impulse; must lie in `(0, 1]`.
    pub thruster_efficiency: f64,
}

impl ManeuverInput {
    /// Delta-v of all occurrences combined.
    ///
    /// Occurrences are flown as a single aggregated burn, so the mass drop between
    /// repeated occurrences of the same line item is not modelled.
    pub fn total_delta_v_mps(&self) -> f64 {
        self.delta_v_mps * f64::from(self.occurrences)
    }

    pub fn effective_isp_s(&self) -> f64 {
        self.thruster.effective_isp_s(self.thruster_efficiency)
    }
}
