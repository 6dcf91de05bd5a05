//! Pure formulas for channel flow quantities.
//!
//! All inputs and outputs are plain SI values (`f64`). These functions hold no
//! state; `FlowSystem` calls them and caches the results, but callers that
//! want fresh values without touching any cache can use them directly.

use crate::error::{FlowError, FlowResult};
use mf_core::numeric::{ensure_finite, ensure_positive};
use std::f64::consts::PI;

fn positive(value: f64, what: &'static str) -> FlowResult<f64> {
    Ok(ensure_positive(value, what)?)
}

fn finite(value: f64, what: &'static str) -> FlowResult<f64> {
    Ok(ensure_finite(value, what)?)
}

/// Circular cross-section area `π/4 · D_h²` [m²].
pub fn cross_section_area(hydraulic_diameter: f64) -> FlowResult<f64> {
    let d = positive(hydraulic_diameter, "hydraulic_diameter")?;
    Ok(0.25 * PI * d.powi(2))
}

/// Mean velocity `Q / (π/4 · D_h²)` [m/s].
pub fn mean_velocity(flow_rate: f64, hydraulic_diameter: f64) -> FlowResult<f64> {
    let q = finite(flow_rate, "flow_rate")?;
    let area = cross_section_area(hydraulic_diameter)?;
    finite(q / area, "fluid_velocity")
}

/// Channel Reynolds number `ρ·v·D_h / μ`.
pub fn channel_reynolds(
    density: f64,
    velocity: f64,
    hydraulic_diameter: f64,
    viscosity: f64,
) -> FlowResult<f64> {
    let rho = finite(density, "fluid_density")?;
    let v = finite(velocity, "fluid_velocity")?;
    let d = positive(hydraulic_diameter, "hydraulic_diameter")?;
    let mu = positive(viscosity, "dynamic_viscosity")?;
    finite(rho * v * d / mu, "channel_reynolds_number")
}

/// Confinement ratio `d_p / D_h`.
pub fn confinement_ratio(particle_diameter: f64, hydraulic_diameter: f64) -> FlowResult<f64> {
    let dp = positive(particle_diameter, "particle_diameter")?;
    let dh = positive(hydraulic_diameter, "hydraulic_diameter")?;
    Ok(dp / dh)
}

/// Particle Reynolds number `Re · κ` for a precomputed channel Reynolds number.
pub fn particle_reynolds(channel_reynolds: f64, confinement_ratio: f64) -> FlowResult<f64> {
    let re = finite(channel_reynolds, "channel_reynolds_number")?;
    let kappa = finite(confinement_ratio, "confinement_ratio")?;
    if kappa < 0.0 {
        return Err(FlowError::InvalidDomain {
            what: "confinement_ratio",
            reason: "must not be negative",
        });
    }
    Ok(re * kappa)
}

/// Dean's number `Re · sqrt(D_h / (2·R_c))`.
pub fn deans_number(
    channel_reynolds: f64,
    hydraulic_diameter: f64,
    curvature_radius: f64,
) -> FlowResult<f64> {
    let re = finite(channel_reynolds, "channel_reynolds_number")?;
    let dh = positive(hydraulic_diameter, "hydraulic_diameter")?;
    let rc = positive(curvature_radius, "curvature_radius")?;
    Ok(re * (dh / (2.0 * rc)).sqrt())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use mf_core::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn reynolds_is_linear_in_velocity(
            v in 1e-4_f64..10.0,
            d in 1e-5_f64..0.05,
            rho in 500.0_f64..2000.0,
            mu in 1e-4_f64..1e-1,
        ) {
            let re = channel_reynolds(rho, v, d, mu).unwrap();
            let re2 = channel_reynolds(rho, 2.0 * v, d, mu).unwrap();
            prop_assert!(nearly_equal(re2, 2.0 * re, Tolerances::default()));
        }

        #[test]
        fn deans_number_vanishes_for_straight_channels(
            re in 1.0_f64..5000.0,
            d in 1e-5_f64..0.05,
        ) {
            let tight = deans_number(re, d, 10.0 * d).unwrap();
            let loose = deans_number(re, d, 1e6 * d).unwrap();
            prop_assert!(loose < tight);
            prop_assert!(loose < re * 1e-3);
        }

        #[test]
        fn confinement_ratio_is_non_negative(dp in 1e-7_f64..1e-2, dh in 1e-5_f64..0.05) {
            let kappa = confinement_ratio(dp, dh).unwrap();
            prop_assert!(kappa >= 0.0);
            let re_p = particle_reynolds(100.0, kappa).unwrap();
            prop_assert!(nearly_equal(re_p, 100.0 * dp / dh, Tolerances::default()));
        }
    }
}
