//! Errors raised while traversing the IR.

use thiserror::Error;

use crate::ast::Var;
use crate::codes::*;
use crate::reporter::Diagnostic;

/// An error raised by one of the tree walks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrError {
    /// A child that the node requires is absent.
    #[error("malformed {node} at line {line}: {reason}")]
    MalformedTree {
        /// Kind of node.
        node: &'static str,
        /// What is wrong with it.
        reason: &'static str,
        /// Line of the node.
        line: usize,
    },
    /// Some constant data starts at an index that was already handed out.
    #[error("hole index {found} was already assigned (next free index is {expected})")]
    DuplicateIndex {
        /// Next free index.
        expected: usize,
        /// Index that was received.
        found: usize,
    },
    /// Some constant data does not start right after the previous one.
    #[error("hole indices jump from {expected} to {found}")]
    IndexGap {
        /// Next free index.
        expected: usize,
        /// Index that was received.
        found: usize,
    },
    /// A variable cannot be found in the scope chain.
    #[error("cannot find variable `{name}` in this scope")]
    UnresolvedName {
        /// Name of the variable.
        name: Var,
        /// Line of the statement referencing it.
        line: usize,
    },
}

impl IrError {
    /// Diagnostic code of this error.
    pub fn code(&self) -> &'static str {
        match self {
            IrError::MalformedTree { .. } => MALFORMED_TREE_ERROR,
            IrError::DuplicateIndex { .. } => DUPLICATE_INDEX_ERROR,
            IrError::IndexGap { .. } => INDEX_GAP_ERROR,
            IrError::UnresolvedName { .. } => UNRESOLVED_NAME_ERROR,
        }
    }

    /// Line at which the error occurred, if it relates to a node.
    pub fn line(&self) -> Option<usize> {
        match self {
            IrError::MalformedTree { line, .. } | IrError::UnresolvedName { line, .. } => {
                Some(*line)
            }
            IrError::DuplicateIndex { .. } | IrError::IndexGap { .. } => None,
        }
    }

    /// Turns this error into a user-facing diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diagnostic = Diagnostic::error()
            .with_code(self.code())
            .with_message(self.to_string());
        match self.line() {
            Some(line) => diagnostic.with_notes(vec![format!("at line {line}")]),
            None => diagnostic,
        }
    }
}

/// Shortcut for a [`IrError::MalformedTree`].
pub(crate) fn malformed(node: &'static str, reason: &'static str, line: usize) -> IrError {
    IrError::MalformedTree { node, reason, line }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_and_messages() {
        let err = malformed("for-loop", "missing condition", 4);
        assert_eq!(err.code(), MALFORMED_TREE_ERROR);
        assert_eq!(
            err.to_string(),
            "malformed for-loop at line 4: missing condition"
        );

        let err = IrError::UnresolvedName {
            name: "y".into(),
            line: 2,
        };
        let diagnostic = err.to_diagnostic();
        assert_eq!(diagnostic.code.as_deref(), Some(UNRESOLVED_NAME_ERROR));
        assert_eq!(diagnostic.notes, vec!["at line 2".to_string()]);
    }
}
