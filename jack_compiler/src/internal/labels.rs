////////////////////////////////////////////////////////////////////////////////
// File: src/internal/labels.rs
// Description: Control flow label generation
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::error::CompileError;

use anyhow::Result;
use shared::util::helpers::U16Manipulation;

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

const LABEL_WHILE: &str = "WHILE";
const LABEL_WHILE_END: &str = "WHILE_END";
const LABEL_IF_FALSE: &str = "IF_FALSE";
const LABEL_IF_END: &str = "IF_END";

////////////////////////////////////////////////////////////////////////////////
// Label Generator
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LabelPair {
  pub(crate) start: String,
  pub(crate) end: String,
}

/// Hands out labels that are unique for the lifetime of the generator. One
/// generator is shared by every class compiled in the same run.
#[derive(Debug, Clone, Default)]
pub(crate) struct LabelGenerator {
  while_counter: u16,
  if_counter: u16,
}

impl LabelGenerator {
  /// `WHILE<n>` / `WHILE_END<n>`
  pub(crate) fn new_while(&mut self) -> Result<LabelPair> {
    let n = self
      .while_counter
      .get_value_and_increment()
      .map_err(|_| return CompileError::limit("Too many while statements"))?;

    return Ok(LabelPair {
      start: format!("{}{}", LABEL_WHILE, n),
      end: format!("{}{}", LABEL_WHILE_END, n),
    });
  }

  /// `IF_FALSE<n>` / `IF_END<n>`
  pub(crate) fn new_if(&mut self) -> Result<LabelPair> {
    let n = self
      .if_counter
      .get_value_and_increment()
      .map_err(|_| return CompileError::limit("Too many if statements"))?;

    return Ok(LabelPair {
      start: format!("{}{}", LABEL_IF_FALSE, n),
      end: format!("{}{}", LABEL_IF_END, n),
    });
  }
}
