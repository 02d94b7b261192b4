use crate::{MAX_FIELD_NAME_LEN, MAX_SCOPE_NAME_LEN, err, error::ErrorTree, node::FieldList};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

///
/// StateDescriptor
///
/// The declared shape of one scope's state: an ordered field sequence under
/// a scope identifier.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct StateDescriptor {
    pub scope: String,
    pub fields: FieldList,
}

impl StateDescriptor {
    pub fn new(scope: impl Into<String>, fields: impl Into<FieldList>) -> Self {
        Self {
            scope: scope.into(),
            fields: fields.into(),
        }
    }

    /// Node-local invariants: legal scope identifier, unique field names.
    pub fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if self.scope.is_empty() {
            err!(errs, "scope identifier must not be empty");
        } else if self.scope.len() > MAX_SCOPE_NAME_LEN {
            err!(errs, "scope identifier '{}' exceeds {MAX_SCOPE_NAME_LEN} chars", self.scope);
        }

        let mut seen = BTreeSet::new();
        for field in &self.fields {
            if field.name.is_empty() {
                errs.add("fields", "field name must not be empty");
            } else if field.name.len() > MAX_FIELD_NAME_LEN {
                errs.add(
                    format!("fields.{}", field.name),
                    format!("field name exceeds {MAX_FIELD_NAME_LEN} chars"),
                );
            }

            if !seen.insert(field.name.as_str()) {
                errs.add(
                    format!("fields.{}", field.name),
                    format!("duplicate field name '{}'", field.name),
                );
            }
        }

        errs.result()
    }
}
