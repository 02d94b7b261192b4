//! The validated reducer boundary.
//!
//! Wraps a raw transition function so every invocation is checked against
//! the document model's schemas on entry and exit. Validation failures are
//! terminal for the invocation; the caller decides whether to retry with a
//! corrected action.
//!
//! Tracing is optional, injected by the caller, and must not affect
//! dispatch semantics.

use crate::{
    document::{Action, Document},
    model::DocumentModel,
    validate::Violation,
};
use thiserror::Error as ThisError;

///
/// ReducerError
///
/// Schema non-conformance at one of the three checkpoints. Each variant
/// carries the violating paths with expected vs actual shape.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ReducerError {
    #[error("document does not conform to the model schema: {}", summarize(.0))]
    InvalidDocument(Vec<Violation>),

    #[error("action does not conform to any registered action schema: {}", summarize(.0))]
    InvalidAction(Vec<Violation>),

    #[error("transition produced a non-conformant document: {}", summarize(.0))]
    InvalidTransitionResult(Vec<Violation>),
}

impl ReducerError {
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::InvalidDocument(v) | Self::InvalidAction(v) | Self::InvalidTransitionResult(v) => {
                v
            }
        }
    }
}

fn summarize(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

///
/// DispatchStage
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchStage {
    Document,
    Action,
    TransitionResult,
}

///
/// DispatchTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DispatchTraceEvent<'a> {
    Start {
        scope: &'a str,
        action_type: &'a str,
    },
    Rejected {
        stage: DispatchStage,
    },
    Applied {
        scope: &'a str,
        action_type: &'a str,
    },
}

///
/// DispatchTraceSink
///

pub trait DispatchTraceSink {
    fn on_event(&self, event: DispatchTraceEvent<'_>);
}

///
/// ValidatedReducer
///
/// The dispatch entry point external callers (the editor surface) use.
///

pub struct ValidatedReducer<'m> {
    model: &'m DocumentModel,
    transition: Box<dyn Fn(Document, &Action) -> Document>,
    trace: Option<Box<dyn DispatchTraceSink>>,
}

impl<'m> ValidatedReducer<'m> {
    pub(crate) fn new(
        model: &'m DocumentModel,
        transition: Box<dyn Fn(Document, &Action) -> Document>,
    ) -> Self {
        Self {
            model,
            transition,
            trace: None,
        }
    }

    /// Install a dispatch trace sink.
    #[must_use]
    pub fn with_trace(mut self, sink: Box<dyn DispatchTraceSink>) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Apply one action through the validated boundary.
    ///
    /// 1. the document must conform to the whole-document schema;
    /// 2. the action must match a registered `(scope, type)` schema;
    /// 3. the raw transition runs;
    /// 4. the result must conform to the whole-document schema.
    ///
    /// Untouched-scope isolation is a contract on the transition function,
    /// asserted by tests rather than enforced here; auto-copying untouched
    /// scopes would mask transition bugs.
    pub fn apply(&self, document: Document, action: &Action) -> Result<Document, ReducerError> {
        self.emit(DispatchTraceEvent::Start {
            scope: &action.scope,
            action_type: &action.action_type,
        });

        if let Err(violations) = self.model.document_validator().validate(&reflect(&document)) {
            self.emit(DispatchTraceEvent::Rejected {
                stage: DispatchStage::Document,
            });

            return Err(ReducerError::InvalidDocument(violations));
        }

        self.validate_action(action).inspect_err(|_| {
            self.emit(DispatchTraceEvent::Rejected {
                stage: DispatchStage::Action,
            });
        })?;

        let next = (self.transition)(document, action);

        if let Err(violations) = self.model.document_validator().validate(&reflect(&next)) {
            self.emit(DispatchTraceEvent::Rejected {
                stage: DispatchStage::TransitionResult,
            });

            return Err(ReducerError::InvalidTransitionResult(violations));
        }

        self.emit(DispatchTraceEvent::Applied {
            scope: &action.scope,
            action_type: &action.action_type,
        });

        Ok(next)
    }

    fn validate_action(&self, action: &Action) -> Result<(), ReducerError> {
        let Some(schemas) = self
            .model
            .action_schemas(&action.scope, &action.action_type)
        else {
            return Err(ReducerError::InvalidAction(vec![Violation {
                path: "$.type".to_string(),
                expected: format!("registered action type for scope '{}'", action.scope),
                actual: format!("\"{}\"", action.action_type),
            }]));
        };

        let value = serde_json::to_value(action).unwrap_or(serde_json::Value::Null);

        schemas
            .action
            .validate(&value)
            .map_err(ReducerError::InvalidAction)
    }

    fn emit(&self, event: DispatchTraceEvent<'_>) {
        if let Some(sink) = &self.trace {
            sink.on_event(event);
        }
    }
}

// Serialization of in-memory documents cannot fail; a Null projection would
// be reported as a document-shaped violation rather than a panic.
fn reflect(document: &Document) -> serde_json::Value {
    serde_json::to_value(document).unwrap_or(serde_json::Value::Null)
}
