pub mod error;
pub mod node;
pub mod registry;
pub mod types;
pub mod validate;

/// Maximum length for scope identifiers.
pub const MAX_SCOPE_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

use crate::{node::NodeError, registry::RegistryError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        err,
        error::ErrorTree,
        node::*,
        registry::{ScalarDescriptor, ScalarRegistry},
        types::Scalar,
    };
    pub use serde::{Deserialize, Serialize};
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    RegistryError(#[from] RegistryError),

    #[error(transparent)]
    NodeError(#[from] NodeError),
}
