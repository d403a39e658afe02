////////////////////////////////////////////////////////////////////////////////
// File: src/internal/symbols.rs
// Description: Symbol tables
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::fmt::{Display, Formatter};

use super::{
  error::CompileError,
  vm::{SymbolKind, VmCommand, VmSegment},
};

use anyhow::Result;
use indexmap::IndexMap;
use shared::util::helpers::{StrManipulation, U16Manipulation};

////////////////////////////////////////////////////////////////////////////////
// Variables
////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Variable {
  pub(crate) r#type: String,
  pub(crate) kind: SymbolKind,
  pub(crate) index: u16,
}

impl Variable {
  pub(crate) fn segment(&self) -> VmSegment {
    return self.kind.segment();
  }

  pub(crate) fn push(&self) -> VmCommand {
    return VmCommand::push(self.segment(), self.index);
  }

  pub(crate) fn pop(&self) -> VmCommand {
    return VmCommand::pop(self.segment(), self.index);
  }
}

////////////////////////////////////////////////////////////////////////////////
// Symbol Table
////////////////////////////////////////////////////////////////////////////////

/// Maps names to variables of one scope. Indices are dense and counted per
/// kind in insertion order; each kind holds at most `u16::MAX` variables.
#[derive(Debug, Clone, Default)]
pub(crate) struct SymbolTable {
  symbols: IndexMap<String, Variable>,
  counts: IndexMap<SymbolKind, u16>,
}

impl SymbolTable {
  pub(crate) fn insert(
    &mut self,
    name: &str,
    r#type: &str,
    kind: SymbolKind,
  ) -> Result<u16> {
    if let Some(existing) = self.symbols.get(name) {
      return Err(
        CompileError::Redeclaration {
          name: name.to_string(),
          kind: existing.kind,
        }
        .into(),
      );
    }

    let index = self
      .counts
      .entry(kind)
      .or_default()
      .get_value_and_increment()
      .map_err(|_| {
        return CompileError::limit(format!(
          "More than {} {} variables in one scope",
          u16::MAX,
          kind
        ));
      })?;

    self.symbols.insert(
      name.to_string(),
      Variable {
        r#type: r#type.to_string(),
        kind,
        index,
      },
    );

    return Ok(index);
  }

  pub(crate) fn count(&self, kind: SymbolKind) -> u16 {
    return self.counts.get(&kind).copied().unwrap_or_default();
  }

  pub(crate) fn lookup(&self, name: &str) -> Option<&Variable> {
    return self.symbols.get(name);
  }
}

////////////////////////////////////////////////////////////////////////////////
// Table Printout
////////////////////////////////////////////////////////////////////////////////

const HEADER_NAME: &str = "name";
const HEADER_TYPE: &str = "type";
const HEADER_KIND: &str = "kind";
const HEADER_INDEX: &str = "#";

impl Display for SymbolTable {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let rows = self
      .symbols
      .iter()
      .map(|(name, v)| {
        return [
          name.clone(),
          v.r#type.clone(),
          v.kind.to_string(),
          v.index.to_string(),
        ];
      })
      .collect::<Vec<_>>();

    let mut widths = [
      HEADER_NAME.len(),
      HEADER_TYPE.len(),
      HEADER_KIND.len(),
      HEADER_INDEX.len(),
    ];

    for row in &rows {
      for (width, cell) in widths.iter_mut().zip(row) {
        *width = (*width).max(cell.chars().count());
      }
    }

    let format_row = |cells: [&str; 4]| {
      return cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| return cell.pad_right(width))
        .collect::<Vec<_>>()
        .join(" │ ")
        .trim_end()
        .to_string();
    };

    writeln!(
      f,
      "{}",
      format_row([HEADER_NAME, HEADER_TYPE, HEADER_KIND, HEADER_INDEX])
    )?;
    write!(
      f,
      "{}",
      widths
        .iter()
        .map(|w| return "─".repeat(*w))
        .collect::<Vec<_>>()
        .join("─┼─")
    )?;

    for [name, r#type, kind, index] in &rows {
      let row = format_row([
        name.as_str(),
        r#type.as_str(),
        kind.as_str(),
        index.as_str(),
      ]);
      write!(f, "\n{}", row)?;
    }

    return Ok(());
  }
}
