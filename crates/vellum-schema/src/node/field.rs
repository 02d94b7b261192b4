use crate::{node::NodeError, registry::ScalarRegistry, types::Scalar};
use serde::{Deserialize, Serialize};

///
/// ItemType
///
/// Element type of an array field. Item nullability is independent of the
/// array container's own nullability.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ItemType {
    pub scalar: Scalar,
    pub nullable: bool,
}

///
/// FieldKind
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldKind {
    Primitive { scalar: Scalar },
    Array { item: ItemType },
}

///
/// Field
///
/// One declared state or action-input field. Construction resolves scalar
/// keys through the registry, so a `Field` value always references a member
/// of the closed scalar set.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: String,

    #[serde(flatten)]
    pub kind: FieldKind,

    pub nullable: bool,
}

impl Field {
    /// Declare a primitive field, resolving `scalar_key` via the registry.
    pub fn primitive(
        registry: &ScalarRegistry,
        name: impl Into<String>,
        scalar_key: &str,
        nullable: bool,
    ) -> Result<Self, NodeError> {
        let name = name.into();
        let scalar = resolve(registry, &name, scalar_key)?;

        Ok(Self {
            name,
            kind: FieldKind::Primitive { scalar },
            nullable,
        })
    }

    /// Declare an array field, resolving the item's `scalar_key` via the
    /// registry.
    pub fn array(
        registry: &ScalarRegistry,
        name: impl Into<String>,
        item_scalar_key: &str,
        item_nullable: bool,
        nullable: bool,
    ) -> Result<Self, NodeError> {
        let name = name.into();
        let scalar = resolve(registry, &name, item_scalar_key)?;

        Ok(Self {
            name,
            kind: FieldKind::Array {
                item: ItemType {
                    scalar,
                    nullable: item_nullable,
                },
            },
            nullable,
        })
    }
}

fn resolve(registry: &ScalarRegistry, field: &str, key: &str) -> Result<Scalar, NodeError> {
    registry
        .resolve(key)
        .map_err(|_| NodeError::InvalidFieldSpec {
            field: field.to_string(),
            key: key.to_string(),
        })
}

///
/// FieldList
///
/// Ordered field sequence. Order is irrelevant to validation but preserved
/// verbatim in every textual projection.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub const fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<Field>> for FieldList {
    fn from(fields: Vec<Field>) -> Self {
        Self::new(fields)
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitive_resolves_through_the_registry() {
        let registry = ScalarRegistry::new();

        let field = Field::primitive(&registry, "something", "string", false).unwrap();
        assert_eq!(field.kind, FieldKind::Primitive {
            scalar: Scalar::String,
        });
        assert!(!field.nullable);
    }

    #[test]
    fn unknown_scalar_key_fails_construction() {
        let registry = ScalarRegistry::new();

        let err = Field::primitive(&registry, "something", "strng", false).unwrap_err();
        assert_eq!(err, NodeError::InvalidFieldSpec {
            field: "something".to_string(),
            key: "strng".to_string(),
        });

        let err = Field::array(&registry, "things", "uuid", false, false).unwrap_err();
        assert_eq!(err, NodeError::InvalidFieldSpec {
            field: "things".to_string(),
            key: "uuid".to_string(),
        });
    }

    #[test]
    fn array_nullability_combinations_are_independent() {
        let registry = ScalarRegistry::new();

        for (item_nullable, nullable) in
            [(false, false), (false, true), (true, false), (true, true)]
        {
            let field =
                Field::array(&registry, "names", "string", item_nullable, nullable).unwrap();

            assert_eq!(field.nullable, nullable);
            assert_eq!(field.kind, FieldKind::Array {
                item: ItemType {
                    scalar: Scalar::String,
                    nullable: item_nullable,
                },
            });
        }
    }

    #[test]
    fn list_lookup_finds_by_name() {
        let registry = ScalarRegistry::new();
        let list = FieldList::new(vec![
            Field::primitive(&registry, "id", "id", false).unwrap(),
            Field::primitive(&registry, "name", "string", true).unwrap(),
        ]);

        assert!(list.get("name").is_some());
        assert!(list.get("missing").is_none());
    }
}
