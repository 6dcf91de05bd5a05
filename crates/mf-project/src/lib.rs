//! mf-project: study documents describing flow systems, and their validation.
//!
//! Documents are parsed from and rendered to in-memory YAML strings.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{ValidationError, validate_study};

use mf_flow::{FlowError, FlowSystem};
use tracing::debug;

pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("System {id}: {source}")]
    Flow {
        id: String,
        #[source]
        source: FlowError,
    },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub fn from_yaml_str(content: &str) -> ProjectResult<Study> {
    let study: Study = serde_yaml::from_str(content)?;
    validate_study(&study)?;
    Ok(study)
}

pub fn to_yaml_string(study: &Study) -> ProjectResult<String> {
    validate_study(study)?;
    Ok(serde_yaml::to_string(study)?)
}

impl Study {
    pub fn system(&self, id: &str) -> Option<&SystemDef> {
        self.systems.iter().find(|s| s.id == id)
    }

    /// Build every system in document order.
    pub fn build_systems(&self) -> ProjectResult<Vec<(String, FlowSystem)>> {
        self.systems
            .iter()
            .map(|def| {
                let system = def.to_flow_system().map_err(|source| ProjectError::Flow {
                    id: def.id.clone(),
                    source,
                })?;
                debug!(id = %def.id, %system, "built system from study");
                Ok((def.id.clone(), system))
            })
            .collect()
    }
}
