//! Route-aware error aggregation for staged descriptor validation.

use std::{collections::BTreeMap, fmt};

/// Append a root-level message to an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add_root(format!($($arg)*))
    };
}

///
/// ErrorTree
///
/// Validation issues collected by node route. Routes are dotted paths
/// (`"scopes.other.fields.name"`); the empty route holds model-wide issues.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    issues: BTreeMap<String, Vec<String>>,
}

impl ErrorTree {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            issues: BTreeMap::new(),
        }
    }

    /// Record an issue at the model-wide route.
    pub fn add_root(&mut self, message: impl Into<String>) {
        self.add("", message);
    }

    /// Record an issue at the given route.
    pub fn add(&mut self, route: impl Into<String>, message: impl Into<String>) {
        self.issues.entry(route.into()).or_default().push(message.into());
    }

    /// Fold another tree into this one, prefixing its routes.
    pub fn merge(&mut self, prefix: &str, other: Self) {
        for (route, messages) in other.issues {
            let route = if route.is_empty() {
                prefix.to_string()
            } else if prefix.is_empty() {
                route
            } else {
                format!("{prefix}.{route}")
            };

            self.issues.entry(route).or_default().extend(messages);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.values().map(Vec::len).sum()
    }

    /// Issues keyed by route, in route order.
    #[must_use]
    pub const fn issues(&self) -> &BTreeMap<String, Vec<String>> {
        &self.issues
    }

    /// Resolve into a `Result`, returning the tree when any issue was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (route, messages) in &self.issues {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                first = false;

                if route.is_empty() {
                    write!(f, "{message}")?;
                } else {
                    write!(f, "{route}: {message}")?;
                }
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}
