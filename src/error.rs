//! Error types for lowering and for the loader pipeline around it.

use crate::ast::Span;

/// A structural fault found while rewriting the tree.
///
/// The pass trusts the parser's shape guarantees and checks them only at the
/// point of use, so these surface on the first dereference of a malformed
/// child rather than in an up-front validation sweep.
#[derive(Debug, Clone, PartialEq)]
pub enum LowerError {
    /// A position that must hold a Block node held something else.
    ExpectedBlock {
        /// Which structural slot was being dereferenced, e.g. `"loop body"`.
        context: &'static str,
        /// The `"type"` string actually found there.
        found: String,
        span: Span,
    },
    /// A conditional's `alternate` was neither a Block nor a Conditional.
    UnexpectedAlternate { found: String, span: Span },
}

impl std::fmt::Display for LowerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LowerError::ExpectedBlock {
                context,
                found,
                span,
            } => {
                write!(f, "expected a Block as {context}, found {found} at {span}")
            }
            LowerError::UnexpectedAlternate { found, span } => {
                write!(
                    f,
                    "conditional alternate must be a Block or Conditional, found {found} at {span}"
                )
            }
        }
    }
}

impl std::error::Error for LowerError {}

/// Error surfaced by the template loading pipeline: parse, lower, render.
#[derive(Debug)]
pub enum CompileError {
    /// The template compiler rejected the source text.
    Parse(String),
    /// The lowering pass found a malformed tree.
    Lower(LowerError),
    /// The template compiler failed to render the lowered tree.
    Render(String),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Parse(message) => write!(f, "parse error: {message}"),
            CompileError::Lower(inner) => write!(f, "lowering error: {inner}"),
            CompileError::Render(message) => write!(f, "render error: {message}"),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompileError::Lower(inner) => Some(inner),
            _ => None,
        }
    }
}

impl From<LowerError> for CompileError {
    fn from(err: LowerError) -> Self {
        CompileError::Lower(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_block_message_includes_position() {
        let err = LowerError::ExpectedBlock {
            context: "loop body",
            found: "Text".to_string(),
            span: Span {
                line: Some(4),
                column: Some(3),
                filename: Some("list.pug".to_string()),
            },
        };
        assert_eq!(
            err.to_string(),
            "expected a Block as loop body, found Text at list.pug:4:3"
        );
    }

    #[test]
    fn test_message_without_position_stays_readable() {
        let err = LowerError::UnexpectedAlternate {
            found: "Text".to_string(),
            span: Span::default(),
        };
        assert_eq!(
            err.to_string(),
            "conditional alternate must be a Block or Conditional, found Text at unknown position"
        );
    }

    #[test]
    fn test_compile_error_wraps_lower_error() {
        let inner = LowerError::UnexpectedAlternate {
            found: "Tag".to_string(),
            span: Span::default(),
        };
        let err = CompileError::from(inner.clone());
        assert!(err.to_string().contains("lowering error"));
        assert!(std::error::Error::source(&err).is_some());
        match err {
            CompileError::Lower(wrapped) => assert_eq!(wrapped, inner),
            other => panic!("expected Lower, got {other:?}"),
        }
    }
}
