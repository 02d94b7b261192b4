use crate::types::Scalar;
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// RegistryError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RegistryError {
    #[error("unknown scalar '{key}'")]
    UnknownScalar { key: String },
}

///
/// ScalarDescriptor
///
/// One row of the closed scalar set: the stable key, the resolved kind, and
/// the display metadata shared by every emitter.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScalarDescriptor {
    pub key: &'static str,
    pub scalar: Scalar,
    pub type_name: &'static str,
    pub description: &'static str,
}

///
/// ScalarRegistry
///
/// Constructed once at startup and read-only afterwards. Passed by reference
/// into descriptor construction; nothing in the toolkit holds registry state
/// in process-wide statics.
///

#[derive(Clone, Debug)]
pub struct ScalarRegistry {
    descriptors: BTreeMap<&'static str, ScalarDescriptor>,
}

impl ScalarRegistry {
    #[must_use]
    pub fn new() -> Self {
        let descriptors = Scalar::ALL
            .into_iter()
            .map(|scalar| {
                (scalar.key(), ScalarDescriptor {
                    key: scalar.key(),
                    scalar,
                    type_name: scalar.type_name(),
                    description: scalar.description(),
                })
            })
            .collect();

        Self { descriptors }
    }

    /// Resolve a scalar key to its descriptor.
    pub fn lookup(&self, key: &str) -> Result<&ScalarDescriptor, RegistryError> {
        self.descriptors
            .get(key)
            .ok_or_else(|| RegistryError::UnknownScalar {
                key: key.to_string(),
            })
    }

    /// Resolve a scalar key to its kind.
    pub fn resolve(&self, key: &str) -> Result<Scalar, RegistryError> {
        self.lookup(key).map(|descriptor| descriptor.scalar)
    }

    /// Descriptors in key order.
    pub fn descriptors(&self) -> impl Iterator<Item = &ScalarDescriptor> {
        self.descriptors.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl Default for ScalarRegistry {
    fn default() -> Self {
        Self::new()
    }
}
