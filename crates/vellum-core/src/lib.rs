pub mod document;
pub mod emit;
pub mod factory;
pub mod manifest;
pub mod model;
pub mod predicate;
pub mod project;
pub mod reducer;
pub mod validate;

use crate::{emit::EmitError, model::ModelError, reducer::ReducerError};
use thiserror::Error as ThisError;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        document::{Action, Document, DocumentHeader, Operation, Signer},
        factory::{ActionSchemas, action_schemas},
        model::DocumentModel,
        predicate::{is_action_of_type, is_document_model_of_type, is_document_of_type},
        project::{state_graphql, state_json_schema, state_source, state_validator},
        reducer::{DispatchTraceEvent, DispatchTraceSink, ValidatedReducer},
        validate::{Validator, Violation},
    };
    pub use vellum_schema::prelude::*;
}

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    ModelError(#[from] ModelError),

    #[error(transparent)]
    ReducerError(#[from] ReducerError),

    #[error(transparent)]
    EmitError(#[from] EmitError),
}
