//! Error types for flow-system calculations.

use mf_core::MfError;
use thiserror::Error;

/// Errors that can occur while deriving dimensionless quantities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlowError {
    /// A required upstream parameter has not been supplied.
    #[error("Missing parameter: {what}")]
    MissingParameter { what: &'static str },

    /// Division by zero or square root of a negative quantity.
    #[error("Invalid domain for {what}: {reason}")]
    InvalidDomain {
        what: &'static str,
        reason: &'static str,
    },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

pub type FlowResult<T> = Result<T, FlowError>;

impl From<MfError> for FlowError {
    fn from(e: MfError) -> Self {
        match e {
            MfError::NonFinite { what, value } => FlowError::NonFinite { what, value },
            MfError::InvalidArg { what } => FlowError::InvalidDomain {
                what,
                reason: "must be positive",
            },
            MfError::Invariant { what } => FlowError::InvalidDomain {
                what,
                reason: "invariant violated",
            },
        }
    }
}

impl From<FlowError> for MfError {
    fn from(e: FlowError) -> Self {
        match e {
            FlowError::MissingParameter { what } => MfError::InvalidArg { what },
            FlowError::InvalidDomain { what, .. } => MfError::InvalidArg { what },
            FlowError::NonFinite { what, value } => MfError::NonFinite { what, value },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FlowError::MissingParameter {
            what: "hydraulic_diameter",
        };
        assert_eq!(err.to_string(), "Missing parameter: hydraulic_diameter");

        let err = FlowError::InvalidDomain {
            what: "curvature_radius",
            reason: "must be positive",
        };
        assert!(err.to_string().contains("curvature_radius"));
        assert!(err.to_string().contains("must be positive"));
    }

    #[test]
    fn error_conversion() {
        let flow_err = FlowError::MissingParameter { what: "flow_rate" };
        let mf_err: MfError = flow_err.into();
        assert!(matches!(mf_err, MfError::InvalidArg { what: "flow_rate" }));

        let back: FlowError = MfError::InvalidArg { what: "viscosity" }.into();
        assert!(matches!(back, FlowError::InvalidDomain { what: "viscosity", .. }));
    }
}
