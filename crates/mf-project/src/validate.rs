//! Study validation logic.

use crate::schema::{Study, SystemDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version == 0 || study.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    let mut system_ids = HashSet::new();
    for system in &study.systems {
        if !system_ids.insert(&system.id) {
            return Err(ValidationError::DuplicateId {
                id: system.id.clone(),
                context: "systems".to_string(),
            });
        }
        validate_system(system)?;
    }

    Ok(())
}

fn validate_system(system: &SystemDef) -> Result<(), ValidationError> {
    if system.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "id".to_string(),
            value: format!("{:?}", system.id),
            reason: "system id must not be empty".to_string(),
        });
    }

    let numeric = [
        ("flow_rate_m3_s", system.flow_rate_m3_s),
        ("hydraulic_diameter_m", system.hydraulic_diameter_m),
        ("particle_diameter_m", system.particle_diameter_m),
        ("fluid_density_kg_m3", system.fluid_density_kg_m3),
        ("dynamic_viscosity_pa_s", system.dynamic_viscosity_pa_s),
        ("curvature_radius_m", system.curvature_radius_m),
    ];
    for (field, value) in numeric {
        if let Some(v) = value.filter(|v| !v.is_finite()) {
            return Err(invalid(system, field, v, "must be finite"));
        }
    }

    // Density and viscosity have no absent state once built.
    let fluid = [
        ("fluid_density_kg_m3", system.fluid_density_kg_m3),
        ("dynamic_viscosity_pa_s", system.dynamic_viscosity_pa_s),
    ];
    for (field, value) in fluid {
        if let Some(v) = value.filter(|v| *v <= 0.0) {
            return Err(invalid(system, field, v, "must be positive"));
        }
    }

    Ok(())
}

fn invalid(system: &SystemDef, field: &str, value: f64, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: format!("{}.{}", system.id, field),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn study(systems: Vec<SystemDef>) -> Study {
        Study {
            version: crate::LATEST_VERSION,
            name: "test".to_string(),
            systems,
        }
    }

    #[test]
    fn empty_study_is_valid() {
        assert!(validate_study(&study(vec![])).is_ok());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let s = study(vec![SystemDef::new("a"), SystemDef::new("a")]);
        assert!(matches!(
            validate_study(&s),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn future_version_rejected() {
        let mut s = study(vec![]);
        s.version = crate::LATEST_VERSION + 1;
        assert_eq!(
            validate_study(&s),
            Err(ValidationError::UnsupportedVersion {
                version: crate::LATEST_VERSION + 1
            })
        );
    }

    #[test]
    fn non_positive_viscosity_rejected() {
        let sys = SystemDef {
            dynamic_viscosity_pa_s: Some(0.0),
            ..SystemDef::new("a")
        };
        let err = validate_study(&study(vec![sys])).unwrap_err();
        assert!(err.to_string().contains("a.dynamic_viscosity_pa_s"));
    }

    #[test]
    fn zero_geometry_is_allowed_until_used() {
        let sys = SystemDef {
            curvature_radius_m: Some(0.0),
            ..SystemDef::new("a")
        };
        assert!(validate_study(&study(vec![sys])).is_ok());
    }

    #[test]
    fn nan_rejected() {
        let sys = SystemDef {
            flow_rate_m3_s: Some(f64::NAN),
            ..SystemDef::new("a")
        };
        assert!(matches!(
            validate_study(&study(vec![sys])),
            Err(ValidationError::InvalidValue { .. })
        ));
    }
}
