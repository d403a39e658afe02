////////////////////////////////////////////////////////////////////////////////
// File: src/util/parse.rs
// Description: Batch processing of input files
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::{error_println, io::os::FileInfo, red};

use anyhow::{anyhow, Result};

/// Runs `parse` on every file in order. Every failure is reported; the batch
/// only succeeds if all files do.
pub fn try_parse_programs<'a, F, P>(
  files: &'a [FileInfo],
  mut parse: F,
) -> Result<Vec<P>>
where
  F: FnMut(&'a FileInfo) -> Result<P>,
{
  let mut programs = Vec::with_capacity(files.len());
  let mut failures = 0;

  for file in files {
    match parse(file) {
      Ok(program) => programs.push(program),
      Err(error) => {
        failures += 1;
        error_println!("{:#}", error);
      }
    }
  }

  if failures > 0 {
    return Err(anyhow!(
      "(ParseError) {} of {} file(s) failed. {}!",
      failures,
      files.len(),
      red!("Aborting compilation", true, false)
    ));
  }

  return Ok(programs);
}
