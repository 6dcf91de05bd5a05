//! Study document definitions.

use mf_core::units::{kgpm3, m, m3ps, pas};
use mf_flow::{Extras, FlowResult, FlowSystem};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub systems: Vec<SystemDef>,
}

/// One flow configuration, all values in SI.
///
/// Omitted fields stay unset; density and viscosity fall back to water at 20 °C.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemDef {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow_rate_m3_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hydraulic_diameter_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particle_diameter_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluid_density_kg_m3: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_viscosity_pa_s: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub curvature_radius_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Extras::is_empty")]
    pub extras: Extras,
}

impl SystemDef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn to_flow_system(&self) -> FlowResult<FlowSystem> {
        let mut builder = FlowSystem::builder().extras(self.extras.clone());
        if let Some(q) = self.flow_rate_m3_s {
            builder = builder.flow_rate(m3ps(q));
        }
        if let Some(d) = self.hydraulic_diameter_m {
            builder = builder.hydraulic_diameter(m(d));
        }
        if let Some(d) = self.particle_diameter_m {
            builder = builder.particle_diameter(m(d));
        }
        if let Some(rho) = self.fluid_density_kg_m3 {
            builder = builder.fluid_density(kgpm3(rho));
        }
        if let Some(mu) = self.dynamic_viscosity_pa_s {
            builder = builder.dynamic_viscosity(pas(mu));
        }
        if let Some(r) = self.curvature_radius_m {
            builder = builder.curvature_radius(m(r));
        }
        builder.build()
    }
}
