//! Closed-form channel sizing for a circular cross-section.
//!
//! Substituting `v = Q / (π·D_h²/4)` into `Re = ρ·v·D_h/μ` gives
//! `Re = 4·ρ·Q / (π·μ·D_h)`, which inverts directly for either `D_h` or `Q`.

use crate::dimensionless;
use crate::error::FlowResult;
use mf_core::numeric::{ensure_finite, ensure_positive};
use mf_core::units::{Density, DynVisc, Length, VolumeRate, m, m3ps};
use std::f64::consts::PI;

/// Hydraulic diameter that yields `target_reynolds` at the given flow rate.
///
/// Larger diameters lower the Reynolds number for a fixed flow rate, so this is
/// the smallest diameter that keeps the flow at or below the target.
pub fn hydraulic_diameter_for_reynolds(
    flow_rate: VolumeRate,
    density: Density,
    viscosity: DynVisc,
    target_reynolds: f64,
) -> FlowResult<Length> {
    let q = ensure_positive(flow_rate.value, "flow_rate")?;
    let rho = ensure_positive(density.value, "fluid_density")?;
    let mu = ensure_positive(viscosity.value, "dynamic_viscosity")?;
    let re = ensure_positive(target_reynolds, "target_reynolds")?;

    let d = 4.0 * rho * q / (PI * mu * re);
    Ok(m(ensure_finite(d, "hydraulic_diameter")?))
}

/// Largest volumetric flow rate that keeps the channel at `target_reynolds`.
pub fn max_flow_rate_for_reynolds(
    hydraulic_diameter: Length,
    density: Density,
    viscosity: DynVisc,
    target_reynolds: f64,
) -> FlowResult<VolumeRate> {
    let d = ensure_positive(hydraulic_diameter.value, "hydraulic_diameter")?;
    let rho = ensure_positive(density.value, "fluid_density")?;
    let mu = ensure_positive(viscosity.value, "dynamic_viscosity")?;
    let re = ensure_positive(target_reynolds, "target_reynolds")?;

    // Velocity at the target Re times the cross-section area.
    let v = re * mu / (rho * d);
    let q = v * dimensionless::cross_section_area(d)?;
    Ok(m3ps(ensure_finite(q, "flow_rate")?))
}
