//! Laminar-flow design margin for inertial separators.

use std::fmt;

/// Ideal upper bound of the channel Reynolds number for separator design.
pub const LAMINAR_TARGET_RE: f64 = 1800.0;

/// Upper bound beyond which the channel flow is no longer treated as laminar.
pub const LAMINAR_LIMIT_RE: f64 = 2000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowRegime {
    /// `Re < 1800`
    Laminar,
    /// `1800 <= Re < 2000`: still laminar but outside the design target.
    Marginal,
    /// `Re >= 2000`
    NonLaminar,
}

impl FlowRegime {
    pub fn classify(channel_reynolds: f64) -> Self {
        let re = channel_reynolds.abs();
        if re < LAMINAR_TARGET_RE {
            Self::Laminar
        } else if re < LAMINAR_LIMIT_RE {
            Self::Marginal
        } else {
            Self::NonLaminar
        }
    }

    pub fn is_laminar(self) -> bool {
        !matches!(self, Self::NonLaminar)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Laminar => "laminar",
            Self::Marginal => "marginal",
            Self::NonLaminar => "non-laminar",
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(FlowRegime::classify(0.0), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(1799.9), FlowRegime::Laminar);
        assert_eq!(FlowRegime::classify(1800.0), FlowRegime::Marginal);
        assert_eq!(FlowRegime::classify(1999.9), FlowRegime::Marginal);
        assert_eq!(FlowRegime::classify(2000.0), FlowRegime::NonLaminar);
    }

    #[test]
    fn reverse_flow_uses_magnitude() {
        assert_eq!(FlowRegime::classify(-2500.0), FlowRegime::NonLaminar);
        assert!(FlowRegime::classify(-100.0).is_laminar());
        assert!(!FlowRegime::NonLaminar.is_laminar());
        assert_eq!(FlowRegime::Marginal.to_string(), "marginal");
    }
}
