//! mf-flow: dimensionless numbers for curved-microchannel flow.
//!
//! Provides:
//! - `FlowSystem`: one channel/fluid/particle configuration with cached
//!   channel Reynolds, particle Reynolds, confinement ratio and Dean's number
//! - Pure formulas (`dimensionless`) usable without any cache
//! - Laminar design margin (`FlowRegime`) and closed-form channel sizing
//! - Free-form extra attributes attached to a system
//!
//! # Example
//!
//! ```
//! use mf_flow::FlowSystem;
//! use mf_core::units::{m, m3ps};
//!
//! // 1000 mL/min through 1 cm tubing, water at 20 °C
//! let mut system = FlowSystem::builder()
//!     .flow_rate(m3ps(1.667e-5))
//!     .hydraulic_diameter(m(0.01))
//!     .curvature_radius(m(0.05))
//!     .build()
//!     .unwrap();
//!
//! let re = system.channel_reynolds_number().unwrap();
//! let de = system.deans_number().unwrap();
//! assert!(de < re);
//! ```

pub mod dimensionless;
pub mod error;
pub mod extras;
pub mod regime;
pub mod report;
pub mod sizing;
pub mod system;
pub mod water;

// Re-exports
pub use error::{FlowError, FlowResult};
pub use extras::{ExtraValue, Extras};
pub use regime::{FlowRegime, LAMINAR_LIMIT_RE, LAMINAR_TARGET_RE};
pub use report::FlowReport;
pub use sizing::{hydraulic_diameter_for_reynolds, max_flow_rate_for_reynolds};
pub use system::{DerivedCache, FlowSystem, FlowSystemBuilder};
