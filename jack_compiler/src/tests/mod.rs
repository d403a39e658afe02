////////////////////////////////////////////////////////////////////////////////
// File: src/tests/mod.rs
// Description: Jack Compiler tests
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

mod programs;
mod symbols;
mod tokenize;
mod util;
