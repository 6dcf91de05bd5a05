//! Reference properties for pure water at 20 °C.

use mf_core::units::{Density, DynVisc, kgpm3, pas};

/// Density of water at 20 °C [kg/m³].
pub const WATER_20C_DENSITY_KG_M3: f64 = 1000.0;

/// Dynamic viscosity of water at 20 °C [Pa·s].
pub const WATER_20C_VISCOSITY_PA_S: f64 = 0.001002;

pub fn density() -> Density {
    kgpm3(WATER_20C_DENSITY_KG_M3)
}

pub fn dynamic_viscosity() -> DynVisc {
    pas(WATER_20C_VISCOSITY_PA_S)
}
