//! ## Crate layout
//! - `core`: runtime validators, projections, the validated reducer, and
//!   artifact emission.
//! - `schema`: descriptor nodes, the scalar registry, and model validation.
//!
//! The `prelude` module mirrors the surface a document-model package uses:
//! descriptor construction, compilation, dispatch, and the narrowing
//! predicates.

pub use vellum_core as core;
pub use vellum_schema as schema;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
///

pub mod prelude {
    pub use vellum_core::prelude::*;
    pub use vellum_schema::{
        node::{
            ActionDescriptor, DocumentModelDescriptor, Field, FieldKind, FieldList, ItemType,
            StateDescriptor,
        },
        registry::{ScalarDescriptor, ScalarRegistry},
        types::Scalar,
    };
}
