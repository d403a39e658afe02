////////////////////////////////////////////////////////////////////////////////
// File: src/lib.rs
// Description: Shared library root
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]
#![allow(clippy::expect_fun_call)]
#![allow(clippy::too_many_arguments)]

pub mod io;
pub mod util;

#[cfg(test)]
mod tests;
