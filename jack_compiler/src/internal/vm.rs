////////////////////////////////////////////////////////////////////////////////
// File: src/internal/vm.rs
// Description: VM instruction set
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use core::fmt;
use std::fmt::{Display, Formatter};

use super::tokenize::{Keyword, Operator, UnaryOperator};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

pub(crate) const MEMORY_ALLOC: &str = "Memory.alloc";
pub(crate) const MATH_MULTIPLY: &str = "Math.multiply";
pub(crate) const MATH_DIVIDE: &str = "Math.divide";
pub(crate) const STRING_NEW: &str = "String.new";
pub(crate) const STRING_APPEND_CHAR: &str = "String.appendChar";

////////////////////////////////////////////////////////////////////////////////
// VM Commands
////////////////////////////////////////////////////////////////////////////////

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum VmCommand {
  call(String, u16),
  function(String, u16),
  goto(String),
  if_goto(String),
  label(String),
  pop(VmSegment, u16),
  push(VmSegment, u16),
  r#return,
  add,
  and,
  eq,
  gt,
  lt,
  neg,
  not,
  or,
  sub,
}

impl From<Operator> for VmCommand {
  fn from(op: Operator) -> Self {
    match op {
      Operator::Add => return VmCommand::add,
      Operator::And => return VmCommand::and,
      Operator::Eq => return VmCommand::eq,
      Operator::Gt => return VmCommand::gt,
      Operator::Lt => return VmCommand::lt,
      Operator::Or => return VmCommand::or,
      Operator::Sub => return VmCommand::sub,
      Operator::Mul => return VmCommand::call(String::from(MATH_MULTIPLY), 2),
      Operator::Div => return VmCommand::call(String::from(MATH_DIVIDE), 2),
    }
  }
}

impl From<UnaryOperator> for VmCommand {
  fn from(op: UnaryOperator) -> Self {
    match op {
      UnaryOperator::Neg => return VmCommand::neg,
      UnaryOperator::Not => return VmCommand::not,
    }
  }
}

impl Display for VmCommand {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      VmCommand::call(name, n_args) => {
        return write!(f, "call {} {}", name, n_args)
      }
      VmCommand::function(name, n_locals) => {
        return write!(f, "function {} {}", name, n_locals)
      }
      VmCommand::goto(label) => return write!(f, "goto {}", label),
      VmCommand::if_goto(label) => return write!(f, "if-goto {}", label),
      VmCommand::label(label) => return write!(f, "label {}", label),
      VmCommand::pop(segment, index) => {
        return write!(f, "pop {} {}", segment, index)
      }
      VmCommand::push(segment, index) => {
        return write!(f, "push {} {}", segment, index)
      }
      VmCommand::r#return => return write!(f, "return"),
      VmCommand::add => return write!(f, "add"),
      VmCommand::and => return write!(f, "and"),
      VmCommand::eq => return write!(f, "eq"),
      VmCommand::gt => return write!(f, "gt"),
      VmCommand::lt => return write!(f, "lt"),
      VmCommand::neg => return write!(f, "neg"),
      VmCommand::not => return write!(f, "not"),
      VmCommand::or => return write!(f, "or"),
      VmCommand::sub => return write!(f, "sub"),
    }
  }
}

////////////////////////////////////////////////////////////////////////////////
// Segment Types & Associated Keywords
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SymbolKind {
  Static,
  Field,
  Argument,
  Local,
}

impl SymbolKind {
  /// Fields live in the object `this` points to.
  pub(crate) fn segment(&self) -> VmSegment {
    match self {
      SymbolKind::Static => return VmSegment::Static,
      SymbolKind::Field => return VmSegment::This,
      SymbolKind::Argument => return VmSegment::Argument,
      SymbolKind::Local => return VmSegment::Local,
    }
  }

  pub(crate) fn from_class_keyword(keyword: Keyword) -> Option<Self> {
    match keyword {
      Keyword::Static => return Some(SymbolKind::Static),
      Keyword::Field => return Some(SymbolKind::Field),
      _ => return None,
    }
  }
}

impl Display for SymbolKind {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      SymbolKind::Static => return write!(f, "static"),
      SymbolKind::Field => return write!(f, "field"),
      SymbolKind::Argument => return write!(f, "argument"),
      SymbolKind::Local => return write!(f, "local"),
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum VmSegment {
  Argument,
  Constant,
  Local,
  Pointer,
  Static,
  Temp,
  That,
  This,
}

impl Display for VmSegment {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      VmSegment::Argument => return write!(f, "argument"),
      VmSegment::Constant => return write!(f, "constant"),
      VmSegment::Local => return write!(f, "local"),
      VmSegment::Pointer => return write!(f, "pointer"),
      VmSegment::Static => return write!(f, "static"),
      VmSegment::Temp => return write!(f, "temp"),
      VmSegment::That => return write!(f, "that"),
      VmSegment::This => return write!(f, "this"),
    }
  }
}
