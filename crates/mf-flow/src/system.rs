//! Flow configuration entity with cached dimensionless quantities.

use crate::dimensionless;
use crate::error::{FlowError, FlowResult};
use crate::extras::{ExtraValue, Extras};
use crate::regime::FlowRegime;
use crate::report::FlowReport;
use crate::water;
use mf_core::units::{Density, DynVisc, Length, Velocity, VolumeRate, mps};
use std::fmt;
use tracing::{debug, trace};

/// Last computed values of the derived quantities.
///
/// Slots are written only by the matching accessor on [`FlowSystem`] and are
/// never invalidated by parameter setters, so they may be stale.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DerivedCache {
    pub channel_reynolds_number: Option<f64>,
    pub particle_reynolds_number: Option<f64>,
    pub confinement_ratio: Option<f64>,
    pub deans_number: Option<f64>,
}

/// Physical parameters of one channel/fluid/particle configuration.
///
/// Optional inputs are `None` when not supplied; zero is a value, not "unset".
/// Density and viscosity default to water at 20 °C.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSystem {
    flow_rate: Option<VolumeRate>,
    hydraulic_diameter: Option<Length>,
    particle_diameter: Option<Length>,
    fluid_density: Density,
    dynamic_viscosity: DynVisc,
    curvature_radius: Option<Length>,
    fluid_velocity: Option<Velocity>,
    extras: Extras,
    cache: DerivedCache,
}

/// Builder for [`FlowSystem`].
#[derive(Debug, Clone, Default)]
pub struct FlowSystemBuilder {
    flow_rate: Option<VolumeRate>,
    hydraulic_diameter: Option<Length>,
    particle_diameter: Option<Length>,
    fluid_density: Option<Density>,
    dynamic_viscosity: Option<DynVisc>,
    curvature_radius: Option<Length>,
    extras: Extras,
}

impl FlowSystemBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flow_rate(mut self, flow_rate: VolumeRate) -> Self {
        self.flow_rate = Some(flow_rate);
        self
    }

    pub fn hydraulic_diameter(mut self, diameter: Length) -> Self {
        self.hydraulic_diameter = Some(diameter);
        self
    }

    pub fn particle_diameter(mut self, diameter: Length) -> Self {
        self.particle_diameter = Some(diameter);
        self
    }

    pub fn fluid_density(mut self, density: Density) -> Self {
        self.fluid_density = Some(density);
        self
    }

    pub fn dynamic_viscosity(mut self, viscosity: DynVisc) -> Self {
        self.dynamic_viscosity = Some(viscosity);
        self
    }

    pub fn curvature_radius(mut self, radius: Length) -> Self {
        self.curvature_radius = Some(radius);
        self
    }

    /// Attach a free-form named attribute.
    pub fn extra(mut self, name: impl Into<String>, value: impl Into<ExtraValue>) -> Self {
        self.extras.insert(name, value);
        self
    }

    pub fn extras(mut self, extras: Extras) -> Self {
        for (name, value) in extras.iter() {
            self.extras.insert(name, value.clone());
        }
        self
    }

    /// Freeze the parameters into a [`FlowSystem`].
    ///
    /// When a flow rate is given the mean velocity is derived immediately,
    /// which requires a positive hydraulic diameter.
    pub fn build(self) -> FlowResult<FlowSystem> {
        let fluid_velocity = match self.flow_rate {
            Some(q) => {
                let d = self.hydraulic_diameter.ok_or(FlowError::MissingParameter {
                    what: "hydraulic_diameter",
                })?;
                Some(mps(dimensionless::mean_velocity(q.value, d.value)?))
            }
            None => None,
        };

        let system = FlowSystem {
            flow_rate: self.flow_rate,
            hydraulic_diameter: self.hydraulic_diameter,
            particle_diameter: self.particle_diameter,
            fluid_density: self.fluid_density.unwrap_or_else(water::density),
            dynamic_viscosity: self
                .dynamic_viscosity
                .unwrap_or_else(water::dynamic_viscosity),
            curvature_radius: self.curvature_radius,
            fluid_velocity,
            extras: self.extras,
            cache: DerivedCache::default(),
        };
        debug!(
            system = %system,
            velocity = ?system.fluid_velocity.map(|v| v.value),
            "built flow system"
        );
        Ok(system)
    }
}

impl FlowSystem {
    pub fn builder() -> FlowSystemBuilder {
        FlowSystemBuilder::new()
    }

    // --- base parameters ---

    pub fn flow_rate(&self) -> Option<VolumeRate> {
        self.flow_rate
    }

    pub fn hydraulic_diameter(&self) -> Option<Length> {
        self.hydraulic_diameter
    }

    pub fn particle_diameter(&self) -> Option<Length> {
        self.particle_diameter
    }

    pub fn fluid_density(&self) -> Density {
        self.fluid_density
    }

    pub fn dynamic_viscosity(&self) -> DynVisc {
        self.dynamic_viscosity
    }

    pub fn curvature_radius(&self) -> Option<Length> {
        self.curvature_radius
    }

    /// Mean channel velocity, derived at construction from the flow rate.
    pub fn fluid_velocity(&self) -> Option<Velocity> {
        self.fluid_velocity
    }

    pub fn extras(&self) -> &Extras {
        &self.extras
    }

    pub fn extra(&self, name: &str) -> Option<&ExtraValue> {
        self.extras.get(name)
    }

    pub fn set_extra(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ExtraValue>,
    ) -> Option<ExtraValue> {
        self.extras.insert(name, value)
    }

    // Setters store only. Neither the derived velocity nor the cache is
    // touched; call the accessors again (or `rederive_velocity`) to refresh.

    pub fn set_flow_rate(&mut self, flow_rate: Option<VolumeRate>) {
        self.flow_rate = flow_rate;
    }

    pub fn set_hydraulic_diameter(&mut self, diameter: Option<Length>) {
        self.hydraulic_diameter = diameter;
    }

    pub fn set_particle_diameter(&mut self, diameter: Option<Length>) {
        self.particle_diameter = diameter;
    }

    pub fn set_fluid_density(&mut self, density: Density) {
        self.fluid_density = density;
    }

    pub fn set_dynamic_viscosity(&mut self, viscosity: DynVisc) {
        self.dynamic_viscosity = viscosity;
    }

    pub fn set_curvature_radius(&mut self, radius: Option<Length>) {
        self.curvature_radius = radius;
    }

    pub fn set_fluid_velocity(&mut self, velocity: Option<Velocity>) {
        self.fluid_velocity = velocity;
    }

    /// Recompute the mean velocity from the current flow rate and diameter.
    pub fn rederive_velocity(&mut self) -> FlowResult<Velocity> {
        let q = self.require_flow_rate()?;
        let d = self.require_hydraulic_diameter()?;
        let v = mps(dimensionless::mean_velocity(q.value, d.value)?);
        self.fluid_velocity = Some(v);
        Ok(v)
    }

    // --- derived quantities ---

    /// Values stored by the most recent accessor calls.
    pub fn cached(&self) -> &DerivedCache {
        &self.cache
    }

    pub fn clear_cache(&mut self) {
        self.cache = DerivedCache::default();
    }

    /// Channel Reynolds number `ρ·v·D_h / μ`; recomputed and cached on every call.
    pub fn channel_reynolds_number(&mut self) -> FlowResult<f64> {
        let v = self.fluid_velocity.ok_or(FlowError::MissingParameter {
            what: "fluid_velocity",
        })?;
        let d = self.require_hydraulic_diameter()?;

        let re = dimensionless::channel_reynolds(
            self.fluid_density.value,
            v.value,
            d.value,
            self.dynamic_viscosity.value,
        )?;
        trace!(re, "channel reynolds number");
        self.cache.channel_reynolds_number = Some(re);
        Ok(re)
    }

    /// Particle Reynolds number `Re · d_p / D_h`.
    ///
    /// Meaningful when particles are a non-negligible fraction of the channel
    /// cross-section; otherwise the channel Reynolds number is the better
    /// measure. The channel Reynolds number is always recomputed here. The
    /// confinement ratio is cached together with the result, and neither slot
    /// is written when the call fails.
    pub fn particle_reynolds_number(&mut self) -> FlowResult<f64> {
        let dp = self.particle_diameter.ok_or(FlowError::MissingParameter {
            what: "particle_diameter",
        })?;
        let dh = self.require_hydraulic_diameter()?;

        let kappa = dimensionless::confinement_ratio(dp.value, dh.value)?;
        let re = self.channel_reynolds_number()?;
        let re_p = dimensionless::particle_reynolds(re, kappa)?;
        debug!(re, kappa, re_p, "particle reynolds number");
        self.cache.confinement_ratio = Some(kappa);
        self.cache.particle_reynolds_number = Some(re_p);
        Ok(re_p)
    }

    /// Dean's number `Re · sqrt(D_h / (2·R_c))`.
    ///
    /// Larger values mean stronger curvature-induced secondary vortices.
    pub fn deans_number(&mut self) -> FlowResult<f64> {
        let rc = self.curvature_radius.ok_or(FlowError::MissingParameter {
            what: "curvature_radius",
        })?;
        let dh = self.require_hydraulic_diameter()?;

        let re = self.channel_reynolds_number()?;
        let de = dimensionless::deans_number(re, dh.value, rc.value)?;
        debug!(re, de, "dean's number");
        self.cache.deans_number = Some(de);
        Ok(de)
    }

    /// Laminar margin of the current channel Reynolds number.
    pub fn flow_regime(&mut self) -> FlowResult<FlowRegime> {
        Ok(FlowRegime::classify(self.channel_reynolds_number()?))
    }

    /// Evaluate every quantity whose inputs are available.
    pub fn report(&mut self) -> FlowReport {
        FlowReport::evaluate(self)
    }

    fn require_flow_rate(&self) -> FlowResult<VolumeRate> {
        self.flow_rate
            .ok_or(FlowError::MissingParameter { what: "flow_rate" })
    }

    fn require_hydraulic_diameter(&self) -> FlowResult<Length> {
        self.hydraulic_diameter.ok_or(FlowError::MissingParameter {
            what: "hydraulic_diameter",
        })
    }
}

fn fmt_si(value: Option<f64>) -> String {
    value.map_or_else(|| "None".to_string(), |v| format!("{v:?}"))
}

impl fmt::Display for FlowSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FlowSystem({}, {})",
            fmt_si(self.flow_rate.map(|q| q.value)),
            fmt_si(self.curvature_radius.map(|r| r.value))
        )
    }
}
