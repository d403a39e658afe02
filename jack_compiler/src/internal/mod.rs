////////////////////////////////////////////////////////////////////////////////
// File: src/internal/mod.rs
// Description: Compiler internals
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

pub(crate) mod compile;
pub(crate) mod engine;
pub(crate) mod error;
pub(crate) mod labels;
pub(crate) mod parse;
pub(crate) mod serialize;
pub(crate) mod symbols;
pub(crate) mod tokenize;
pub(crate) mod vm;
pub(crate) mod writer;
pub(crate) mod xml;
