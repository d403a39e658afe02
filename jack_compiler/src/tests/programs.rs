////////////////////////////////////////////////////////////////////////////////
// File: src/tests/programs.rs
// Description: Jack Compiler tests
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::internal::{
  compile::{VM_EXTENSION, XML_EXTENSION},
  engine::VmProgram,
  parse::JackCompiler,
  xml::{XmlParseTree, XmlSerializableTokenStream},
};

use super::util::{evaluate_test_file, JACK_TEST_PROGRAMS};

use shared::{io::os::FileInfo, util::parse::try_parse_programs};

////////////////////////////////////////////////////////////////////////////////
// Program Compilation
////////////////////////////////////////////////////////////////////////////////

fn compile_run(files: &[FileInfo]) -> Vec<VmProgram> {
  let mut compiler = JackCompiler::default();

  return try_parse_programs(files, |file| return compiler.compile_file(file))
    .expect("test programs should compile");
}

fn tokenize_files(files: &[FileInfo]) -> Vec<XmlSerializableTokenStream> {
  return try_parse_programs(files, |file| {
    return JackCompiler::tokenize(file).map(XmlSerializableTokenStream::from);
  })
  .expect("test programs should tokenize");
}

fn parse_files(files: &[FileInfo]) -> Vec<XmlParseTree> {
  return try_parse_programs(files, JackCompiler::parse_tree)
    .expect("test programs should parse");
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Compilation
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Test the compiler's generated VM files against checked output files."]
fn seven_compile_test() {
  const REL_PATH: &str = "Seven/";
  evaluate_test_file(
    &[JACK_TEST_PROGRAMS.to_string() + REL_PATH],
    &[JACK_TEST_PROGRAMS.to_string() + REL_PATH],
    compile_run,
    VM_EXTENSION,
  );
}

#[test]
#[doc = "Test a two class program; labels continue from the first file."]
fn counter_compile_test() {
  const REL_PATH: &str = "Counter/";
  evaluate_test_file(
    &[JACK_TEST_PROGRAMS.to_string() + REL_PATH],
    &[JACK_TEST_PROGRAMS.to_string() + REL_PATH],
    compile_run,
    VM_EXTENSION,
  );
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: XML Serialization
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Test the token XML serialization against a checked token file."]
fn seven_token_test() {
  const REL_PATH: &str = "Seven/";
  evaluate_test_file(
    &[JACK_TEST_PROGRAMS.to_string() + REL_PATH + "Main.jack"],
    &[JACK_TEST_PROGRAMS.to_string() + REL_PATH + "MainT.xml"],
    tokenize_files,
    XML_EXTENSION,
  );
}

#[test]
#[doc = "Test the parse tree XML serialization against a checked tree file."]
fn seven_parse_tree_test() {
  const REL_PATH: &str = "Seven/";
  evaluate_test_file(
    &[JACK_TEST_PROGRAMS.to_string() + REL_PATH + "Main.jack"],
    &[JACK_TEST_PROGRAMS.to_string() + REL_PATH + "Main.xml"],
    parse_files,
    XML_EXTENSION,
  );
}
