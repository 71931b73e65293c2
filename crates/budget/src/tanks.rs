//! Onboard tank bookkeeping.

use std::fmt;

use crate::split::PropellantSplit;

/// Onboard propellant tanks, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tank {
    Hydrazine,
    Oxidizer,
    Xenon,
}

impl Tank {
    pub const ALL: [Tank; 3] = [Tank::Hydrazine, Tank::Oxidizer, Tank::Xenon];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tank::Hydrazine => "hydrazine",
            Tank::Oxidizer => "oxidizer",
            Tank::Xenon => "xenon",
        }
    }
}

impl fmt::Display for Tank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mass figure per tank; used both for loaded totals and for capacities.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TankMasses {
    pub hydrazine_kg: f64,
    pub oxidizer_kg: f64,
    pub xenon_kg: f64,
}

impl TankMasses {
    pub fn get(&self, tank: Tank) -> f64 {
        match tank {
            Tank::Hydrazine => self.hydrazine_kg,
            Tank::Oxidizer => self.oxidizer_kg,
            Tank::Xenon => self.xenon_kg,
        }
    }

    /// Charge one maneuver's split against the tanks it draws from.
    pub fn add(&mut self, split: &PropellantSplit) {
        match *split {
            PropellantSplit::Hydrazine { hydrazine_kg } => self.hydrazine_kg += hydrazine_kg,
            PropellantSplit::Bipropellant { fuel_kg, ox_kg } => {
                self.hydrazine_kg += fuel_kg;
                self.oxidizer_kg += ox_kg;
            }
            PropellantSplit::Xenon { xenon_kg } => self.xenon_kg += xenon_kg,
        }
    }

    /// Sum a sequence of splits into per-tank totals.
    pub fn from_splits<'a, I>(splits: I) -> Self
    where
        I: IntoIterator<Item = &'a PropellantSplit>,
    {
        let mut totals = Self::default();
        for split in splits {
            totals.add(split);
        }
        totals
    }
}
