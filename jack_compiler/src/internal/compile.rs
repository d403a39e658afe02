////////////////////////////////////////////////////////////////////////////////
// File: src/internal/compile.rs
// Description: Compilation module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::path::{Path, PathBuf};

use super::{parse::JackCompiler, xml::XmlSerializableTokenStream};

use anyhow::{anyhow, Result};
use shared::{
  error_panic, error_panic_src, green, info_print,
  io::{
    cli::{CommandLineParser, Token},
    os::{dir_check, generate_output, out_dir_check, read_file_list, FileInfo},
  },
  util::{parse::try_parse_programs, settings::Setting},
};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

pub(crate) const JACK_EXTENSION: &str = "jack";
pub(crate) const VM_EXTENSION: &str = "vm";
pub(crate) const XML_EXTENSION: &str = "xml";

////////////////////////////////////////////////////////////////////////////////
// XML Generation Step
////////////////////////////////////////////////////////////////////////////////

/// Writes a `<stem>T.xml` token file and a `<stem>.xml` parse tree file per
/// source, next to the sources or into `output_path`.
pub(crate) fn generate_xml_files(
  files: &[FileInfo],
  output_path: Option<&Path>,
) -> Result<Vec<(PathBuf, String)>> {
  info_print!("Generating XML Token files");

  let tokens = try_parse_programs(files, |file| {
    return JackCompiler::tokenize(file).map(XmlSerializableTokenStream::from);
  })?;

  let token_files = files
    .iter()
    .cloned()
    .map(|mut f| {
      f.set_file_name(&format!("{}T", f.stem), XML_EXTENSION)?;
      return Ok(f);
    })
    .collect::<Result<Vec<FileInfo>>>()?;

  let output_dir = dir_check(output_path)?;
  let mut written =
    generate_output(&tokens, &token_files, output_dir, XML_EXTENSION)?;

  info_print!("Generating XML parse tree files");

  let trees = try_parse_programs(files, JackCompiler::parse_tree)?;
  written.extend(generate_output(&trees, files, output_dir, XML_EXTENSION)?);

  info_print!("{}", green!("XML generation successful", true, false));

  return Ok(written);
}

////////////////////////////////////////////////////////////////////////////////
// VM Generation Step
////////////////////////////////////////////////////////////////////////////////

/// Compiles every file with one shared compiler instance, so labels stay
/// unique across the whole run. Nothing is written if any file fails.
pub(crate) fn generate_vm_files(
  files: &[FileInfo],
  output_path: Option<&Path>,
) -> Result<Vec<(PathBuf, String)>> {
  info_print!("Generating VM files");

  let mut compiler = JackCompiler::default();
  let programs =
    try_parse_programs(files, |file| return compiler.compile_file(file))?;

  let written = generate_output(&programs, files, output_path, VM_EXTENSION)?;

  info_print!("{}", green!("Compilation successful!", true, false));

  return Ok(written);
}

////////////////////////////////////////////////////////////////////////////////
// Compilation Step
////////////////////////////////////////////////////////////////////////////////

fn run(parameters: &[String]) -> Result<()> {
  let files = read_file_list(parameters, JACK_EXTENSION)?;

  if files.is_empty() {
    return Err(anyhow!(
      "(ArgError) No `.{}` files found in: {}",
      JACK_EXTENSION,
      parameters.join(", ")
    ));
  }

  if let Ok(values) = Setting::Xml.is_set() {
    let xml_dir = values.unwrap_or_default().first().map(PathBuf::from);
    generate_xml_files(&files, xml_dir.as_deref())?;
  }

  generate_vm_files(&files, out_dir_check()?.as_deref())?;

  return Ok(());
}

pub(crate) fn compile(_c: &mut CommandLineParser, t: &mut Token) {
  let parameters = t.parameters.clone().unwrap_or_else(|| {
    error_panic_src!("(ArgError) No input files provided!")
  });

  if let Err(e) = run(&parameters) {
    error_panic!("{:#}", e);
  }
}
