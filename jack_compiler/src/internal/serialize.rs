////////////////////////////////////////////////////////////////////////////////
// File: src/internal/serialize.rs
// Description: Serialization module
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::{
  engine::VmProgram,
  writer::VmWriter,
  xml::{XmlParseTree, XmlSerializableTokenStream, XmlSerialize},
};

use shared::util::traits::Serializable;

////////////////////////////////////////////////////////////////////////////////
// XML Serialization
////////////////////////////////////////////////////////////////////////////////

impl Serializable for XmlSerializableTokenStream {
  type Output = String;
  fn serialize(&self) -> String {
    return self.tokens.as_slice().to_xml(0);
  }
}

impl Serializable for XmlParseTree {
  type Output = String;
  fn serialize(&self) -> String {
    return self.content.clone();
  }
}

////////////////////////////////////////////////////////////////////////////////
// Program Serialization
////////////////////////////////////////////////////////////////////////////////

impl Serializable for VmWriter {
  type Output = String;
  fn serialize(&self) -> String {
    return self.lines().join("\n");
  }
}

impl Serializable for VmProgram {
  type Output = String;
  fn serialize(&self) -> String {
    return self.writer.serialize();
  }
}
