////////////////////////////////////////////////////////////////////////////////
// File: src/io/mod.rs
// Description: Input / output module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

pub mod cli;
pub mod info;
pub mod notify;
pub mod os;
