////////////////////////////////////////////////////////////////////////////////
// File: src/internal/error.rs
// Description: Compilation errors
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::fmt::{Display, Formatter};

use super::vm::SymbolKind;

////////////////////////////////////////////////////////////////////////////////
// Compile Errors
////////////////////////////////////////////////////////////////////////////////

/// Every error aborts the compilation of the current file.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum CompileError {
  Lex {
    message: String,
  },
  Syntax {
    expected: String,
    found: String,
  },
  UnresolvedName {
    name: String,
  },
  Redeclaration {
    name: String,
    kind: SymbolKind,
  },
  LimitExceeded {
    message: String,
  },
}

impl CompileError {
  pub(crate) fn lex(message: impl Into<String>) -> Self {
    return CompileError::Lex {
      message: message.into(),
    };
  }

  pub(crate) fn limit(message: impl Into<String>) -> Self {
    return CompileError::LimitExceeded {
      message: message.into(),
    };
  }

  pub(crate) fn syntax(
    expected: impl Into<String>,
    found: impl Into<String>,
  ) -> Self {
    return CompileError::Syntax {
      expected: expected.into(),
      found: found.into(),
    };
  }
}

impl Display for CompileError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    return match self {
      CompileError::Lex { message } => write!(f, "(LexError) {}", message),
      CompileError::Syntax { expected, found } => {
        write!(f, "(SyntaxError) Expected {}. Found: {}.", expected, found)
      }
      CompileError::UnresolvedName { name } => {
        write!(f, "(NameError) Unresolved variable `{}`", name)
      }
      CompileError::Redeclaration { name, kind } => write!(
        f,
        "(NameError) `{}` is already declared as a {} variable in this scope",
        name, kind
      ),
      CompileError::LimitExceeded { message } => {
        write!(f, "(LimitError) {}", message)
      }
    };
  }
}

impl std::error::Error for CompileError {}
