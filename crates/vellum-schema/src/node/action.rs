use crate::{err, error::ErrorTree, node::FieldList};
use convert_case::{Boundary, Case, Casing};
use serde::{Deserialize, Serialize};

// Labels split on explicit separators only; digits stay attached to their
// word ("action1" derives ACTION1, not ACTION_1).
const LABEL_BOUNDARIES: [Boundary; 3] = [Boundary::SPACE, Boundary::UNDERSCORE, Boundary::HYPHEN];

///
/// ActionDescriptor
///
/// A human action label plus the scope it targets and its input field list.
/// Two identifiers derive deterministically from the label: a symbol form
/// for generated type names and a literal form used as the action's wire
/// discriminator.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ActionDescriptor {
    pub scope: String,
    pub label: String,
    pub input_fields: FieldList,
}

impl ActionDescriptor {
    pub fn new(
        scope: impl Into<String>,
        label: impl Into<String>,
        input_fields: impl Into<FieldList>,
    ) -> Self {
        Self {
            scope: scope.into(),
            label: label.into(),
            input_fields: input_fields.into(),
        }
    }

    /// Capitalized-word identifier (`"add name"` derives `AddName`).
    #[must_use]
    pub fn symbol(&self) -> String {
        self.label
            .with_boundaries(&LABEL_BOUNDARIES)
            .to_case(Case::Pascal)
    }

    /// Upper-snake literal used as the wire discriminator (`"add name"`
    /// derives `ADD_NAME`).
    #[must_use]
    pub fn literal(&self) -> String {
        self.label
            .with_boundaries(&LABEL_BOUNDARIES)
            .to_case(Case::UpperSnake)
    }

    /// Node-local invariants: non-empty label and scope, unique input
    /// field names.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.label.trim().is_empty() {
            err!(errs, "action label must not be empty");
        }
        if self.scope.is_empty() {
            err!(errs, "action scope must not be empty");
        }

        let mut seen = std::collections::BTreeSet::new();
        for field in &self.input_fields {
            if !seen.insert(field.name.as_str()) {
                errs.add(
                    format!("input.{}", field.name),
                    format!("duplicate input field '{}'", field.name),
                );
            }
        }

        errs.result()
    }
}
