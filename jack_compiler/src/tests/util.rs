////////////////////////////////////////////////////////////////////////////////
// File: src/tests/util.rs
// Description: Jack Compiler tests
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{fs, path::PathBuf, sync::Once};

use crate::internal::{error::CompileError, parse::JackCompiler};

use shared::{
  error_fmt,
  io::os::{generate_output, read_file_list, FileInfo},
  util::traits::Serializable,
};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

pub(super) static INIT: Once = Once::new();
pub(super) const COMPILED_FILES_DIR: &str = "out";
pub(super) const JACK_TEST_PROGRAMS: &str = "src/tests/programs/";
pub(super) const JACK_EXTENSION: &str = "jack";

////////////////////////////////////////////////////////////////////////////////
// Test Suite Initialization
////////////////////////////////////////////////////////////////////////////////

pub(super) fn test_suite_init() {
  INIT.call_once(|| {
    if let Ok(false) = PathBuf::from(COMPILED_FILES_DIR).try_exists() {
      fs::create_dir_all(COMPILED_FILES_DIR).expect(error_fmt!(
        "(IOError) Failed to create directory: `{}`",
        COMPILED_FILES_DIR
      ));
    }
  });
}

/// Runs `generator` over the `.jack` files in `files`, writes the results to
/// the output directory and compares them with the expected files.
pub(super) fn evaluate_test_file<S, F>(
  files: &[String],
  comparison_files: &[String],
  generator: F,
  out_file_ext: &str,
) where
  S: Serializable<Output = String>,
  F: Fn(&[FileInfo]) -> Vec<S>,
{
  assert_eq!(files.len(), comparison_files.len());
  test_suite_init();

  let files = read_file_list(files, JACK_EXTENSION)
    .expect("test sources should be readable");
  let comparison_files = read_file_list(comparison_files, out_file_ext)
    .expect("expected output should be readable");
  let programs = generator(&files);
  let output_dir = PathBuf::from(COMPILED_FILES_DIR);
  let mut output =
    generate_output(&programs, &files, Some(&output_dir), out_file_ext)
      .expect("output should be writable");

  output.sort_by(|(p1, _), (p2, _)| return p1.cmp(p2));

  assert_eq!(output.len(), comparison_files.len());

  output.iter().zip(comparison_files.iter()).for_each(
    |((path, compiler_out), comparison)| {
      assert_eq!(
        compiler_out.trim_end(),
        comparison.content.trim_end(),
        "mismatch in {}",
        comparison.name
      );

      let _ = fs::remove_file(path);
    },
  );
}

////////////////////////////////////////////////////////////////////////////////
// Compilation Helpers
////////////////////////////////////////////////////////////////////////////////

/// Compiles every source with the same compiler, like a single run.
pub(super) fn compile_sources(sources: &[&str]) -> Vec<Vec<String>> {
  let mut compiler = JackCompiler::default();

  return sources
    .iter()
    .map(|source| {
      return compiler
        .compile_source(source)
        .expect("source should compile")
        .writer
        .lines();
    })
    .collect();
}

pub(super) fn compile_lines(source: &str) -> Vec<String> {
  return compile_sources(&[source]).remove(0);
}

pub(super) fn compile_error(source: &str) -> CompileError {
  let error = JackCompiler::default()
    .compile_source(source)
    .expect_err("source should not compile");

  return error
    .downcast_ref::<CompileError>()
    .cloned()
    .expect("error should be a compile error");
}
