//! One-shot evaluation of every quantity a flow system can provide.

use crate::error::FlowError;
use crate::regime::FlowRegime;
use crate::system::FlowSystem;
use std::fmt;
use tracing::debug;

/// Snapshot of the derived quantities of a [`FlowSystem`].
///
/// Quantities whose inputs are missing or out of domain are `None`, and the
/// reason is kept in `skipped`.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowReport {
    pub fluid_velocity_m_s: Option<f64>,
    pub channel_reynolds_number: Option<f64>,
    pub regime: Option<FlowRegime>,
    pub confinement_ratio: Option<f64>,
    pub particle_reynolds_number: Option<f64>,
    pub deans_number: Option<f64>,
    pub skipped: Vec<(&'static str, FlowError)>,
}

impl FlowReport {
    pub(crate) fn evaluate(system: &mut FlowSystem) -> Self {
        let mut skipped = Vec::new();
        let mut keep = |what: &'static str, r: Result<f64, FlowError>| match r {
            Ok(v) => Some(v),
            Err(e) => {
                skipped.push((what, e));
                None
            }
        };

        let channel_reynolds_number =
            keep("channel_reynolds_number", system.channel_reynolds_number());
        let particle_reynolds_number =
            keep("particle_reynolds_number", system.particle_reynolds_number());
        let deans_number = keep("deans_number", system.deans_number());

        let confinement_ratio = particle_reynolds_number.and(system.cached().confinement_ratio);

        let report = Self {
            fluid_velocity_m_s: system.fluid_velocity().map(|v| v.value),
            channel_reynolds_number,
            regime: channel_reynolds_number.map(FlowRegime::classify),
            confinement_ratio,
            particle_reynolds_number,
            deans_number,
            skipped,
        };
        debug!(skipped = report.skipped.len(), "evaluated flow report");
        report
    }

    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

fn row(f: &mut fmt::Formatter<'_>, label: &str, value: Option<f64>) -> fmt::Result {
    match value {
        Some(v) => writeln!(f, "{label:<26}{v:.4}"),
        None => writeln!(f, "{label:<26}-"),
    }
}

impl fmt::Display for FlowReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        row(f, "fluid velocity [m/s]", self.fluid_velocity_m_s)?;
        row(f, "channel Reynolds number", self.channel_reynolds_number)?;
        if let Some(regime) = self.regime {
            writeln!(f, "{:<26}{regime}", "regime")?;
        }
        row(f, "confinement ratio", self.confinement_ratio)?;
        row(f, "particle Reynolds number", self.particle_reynolds_number)?;
        row(f, "Dean's number", self.deans_number)?;
        for (what, err) in &self.skipped {
            writeln!(f, "skipped {what}: {err}")?;
        }
        Ok(())
    }
}
