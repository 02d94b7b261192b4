mod action;
mod document_model;
mod field;
mod state;

pub use action::ActionDescriptor;
pub use document_model::DocumentModelDescriptor;
pub use field::{Field, FieldKind, FieldList, ItemType};
pub use state::StateDescriptor;

use thiserror::Error as ThisError;

///
/// NodeError
///
/// Descriptor-construction failures. Raised at startup while a document
/// model is assembled and fatal to that model's registration.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum NodeError {
    #[error("invalid field spec '{field}': unknown scalar '{key}'")]
    InvalidFieldSpec { field: String, key: String },

    #[error("duplicate action type '{literal}' in scope '{scope}'")]
    DuplicateActionType { scope: String, literal: String },
}
