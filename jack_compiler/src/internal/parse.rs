////////////////////////////////////////////////////////////////////////////////
// File: src/internal/parse.rs
// Description: Jack Compiler parsing module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::{
  engine::{CompilationEngine, VmProgram},
  labels::LabelGenerator,
  tokenize::{Token, Tokenizer},
  xml::XmlParseTree,
};

use anyhow::{Context, Result};
use shared::{cyan, info_print, io::os::FileInfo, util::settings::Setting};

////////////////////////////////////////////////////////////////////////////////
// Jack Compiler
////////////////////////////////////////////////////////////////////////////////

/// Compiles one class per call. Label numbering continues across calls, so
/// every class of a run must go through the same instance.
#[derive(Debug, Default)]
pub(crate) struct JackCompiler {
  labels: LabelGenerator,
}

impl JackCompiler {
  pub(crate) fn tokenize(file_info: &FileInfo) -> Result<Vec<Token>> {
    return Tokenizer::tokenize(&file_info.content)
      .with_context(|| return format!("[{}]", file_info.name));
  }

  /// Parse tree of one file. Label numbering of the run is not affected.
  pub(crate) fn parse_tree(file_info: &FileInfo) -> Result<XmlParseTree> {
    let tokens = Self::tokenize(file_info)?;

    return CompilationEngine::parse_tree(&tokens)
      .with_context(|| return format!("[{}]", file_info.name));
  }

  pub(crate) fn compile_source(&mut self, source: &str) -> Result<VmProgram> {
    let tokens = Tokenizer::tokenize(source)?;
    return CompilationEngine::compile(&tokens, &mut self.labels);
  }

  pub(crate) fn compile_file(
    &mut self,
    file_info: &FileInfo,
  ) -> Result<VmProgram> {
    info_print!("Compiling file: `{}`", file_info.name);

    let tokens = Self::tokenize(file_info)?;

    if Setting::PrintTokens.is_enabled() {
      info_print!("Tokens");
      println!("{:#?}", tokens);
    }

    let program = CompilationEngine::compile(&tokens, &mut self.labels)
      .with_context(|| return format!("[{}]", file_info.name))?;

    info_print!(
      "Compiled class `{}`: {} VM commands",
      program.class.name,
      program.commands().len()
    );

    if Setting::PrintSymbols.is_enabled() {
      info_print!("Symbols of class `{}`", program.class.name);
      println!("{}", program.class.symbols);

      for (name, symbols) in &program.subroutines {
        println!("\n{}\n{}", cyan!(name, true, false), symbols);
      }
    }

    return Ok(program);
  }
}
