////////////////////////////////////////////////////////////////////////////////
// File: src/tests/mod.rs
// Description: Shared library tests
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

mod cli;
mod helpers;
