////////////////////////////////////////////////////////////////////////////////
// File: src/util/traits.rs
// Description: Shared traits
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

/// Anything that can be written to an output file.
pub trait Serializable {
  type Output;
  fn serialize(&self) -> Self::Output;
}
