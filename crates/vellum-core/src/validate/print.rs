//! Printer for the validator-definition source artifact.
//!
//! Renders the combinator expression that reconstructs a validator tree.
//! Output is deterministic: declaration order is preserved and formatting
//! depends only on tree shape.

use crate::validate::Validator;
use std::fmt::Write;

impl Validator {
    /// Render this validator as combinator source text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write(&mut out, 0);
        out.push('\n');

        out
    }

    fn write(&self, out: &mut String, indent: usize) {
        match self {
            Self::Scalar(scalar) => {
                let _ = write!(out, "{}()", scalar.key());
            }
            Self::Literal(value) => {
                let _ = write!(out, "literal(\"{value}\")");
            }
            Self::Optional(inner) => {
                out.push_str("optional(");
                inner.write(out, indent);
                out.push(')');
            }
            Self::Array(item) => {
                out.push_str("array(");
                item.write(out, indent);
                out.push(')');
            }
            Self::Object(fields) => {
                if fields.is_empty() {
                    out.push_str("object({})");
                    return;
                }

                out.push_str("object({\n");
                for (name, validator) in fields {
                    let _ = write!(out, "{}{name}: ", "  ".repeat(indent + 1));
                    validator.write(out, indent + 1);
                    out.push_str(",\n");
                }
                let _ = write!(out, "{}}})", "  ".repeat(indent));
            }
            Self::Opaque => out.push_str("opaque()"),
        }
    }
}
