////////////////////////////////////////////////////////////////////////////////
// File: src/tests/symbols.rs
// Description: Symbol table, label and writer tests
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::internal::{
  error::CompileError,
  labels::{LabelGenerator, LabelPair},
  symbols::{SymbolTable, Variable},
  vm::{SymbolKind, VmCommand, VmSegment},
  writer::VmWriter,
};

use shared::util::traits::Serializable;

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Symbol Table
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Indices are counted per kind in declaration order."]
fn indices_per_kind() {
  let mut table = SymbolTable::default();

  assert_eq!(table.insert("x", "int", SymbolKind::Field).unwrap(), 0);
  assert_eq!(table.insert("count", "int", SymbolKind::Static).unwrap(), 0);
  assert_eq!(table.insert("y", "int", SymbolKind::Field).unwrap(), 1);
  assert_eq!(table.insert("name", "String", SymbolKind::Field).unwrap(), 2);

  assert_eq!(table.count(SymbolKind::Field), 3);
  assert_eq!(table.count(SymbolKind::Static), 1);
  assert_eq!(table.count(SymbolKind::Local), 0);
}

#[test]
#[doc = "Lookups return type, kind and index of a declared name."]
fn lookup_declared_name() {
  let mut table = SymbolTable::default();
  table.insert("a", "Array", SymbolKind::Local).unwrap();
  table.insert("i", "int", SymbolKind::Local).unwrap();

  assert_eq!(
    table.lookup("i"),
    Some(&Variable {
      r#type: String::from("int"),
      kind: SymbolKind::Local,
      index: 1,
    })
  );
  assert_eq!(table.lookup("j"), None);
}

#[test]
#[doc = "Variables map to their segment; fields live in `this`."]
fn variable_commands() {
  let mut table = SymbolTable::default();
  table.insert("x", "int", SymbolKind::Field).unwrap();
  table.insert("n", "int", SymbolKind::Static).unwrap();

  let x = table.lookup("x").unwrap();
  let n = table.lookup("n").unwrap();

  assert_eq!(x.push(), VmCommand::push(VmSegment::This, 0));
  assert_eq!(n.pop(), VmCommand::pop(VmSegment::Static, 0));
}

#[test]
#[doc = "Declaring the same name twice in one table is an error."]
fn redeclaration_is_rejected() {
  let mut table = SymbolTable::default();
  table.insert("x", "int", SymbolKind::Argument).unwrap();

  let error = table
    .insert("x", "boolean", SymbolKind::Local)
    .unwrap_err()
    .downcast::<CompileError>()
    .unwrap();

  assert_eq!(
    error,
    CompileError::Redeclaration {
      name: String::from("x"),
      kind: SymbolKind::Argument,
    }
  );
  assert_eq!(table.count(SymbolKind::Local), 0);
}

#[test]
#[doc = "The table printout lists every symbol in declaration order."]
fn table_printout() {
  let mut table = SymbolTable::default();
  table.insert("x", "int", SymbolKind::Field).unwrap();
  table.insert("origin", "Point", SymbolKind::Static).unwrap();

  assert_eq!(
    table.to_string(),
    "name   │ type  │ kind   │ #
───────┼───────┼────────┼──
x      │ int   │ field  │ 0
origin │ Point │ static │ 0"
  );
}

#[test]
#[doc = "A kind holds at most u16::MAX variables; counts never wrap."]
fn variable_limit() {
  let mut table = SymbolTable::default();

  for i in 0..u16::MAX {
    table.insert(&format!("v{}", i), "int", SymbolKind::Local).unwrap();
  }

  assert_eq!(table.count(SymbolKind::Local), u16::MAX);
  assert_eq!(table.lookup("v65534").unwrap().index, u16::MAX - 1);

  let error = table
    .insert("overflow", "int", SymbolKind::Local)
    .unwrap_err()
    .downcast::<CompileError>()
    .unwrap();

  assert!(matches!(error, CompileError::LimitExceeded { .. }));
  assert_eq!(table.count(SymbolKind::Local), u16::MAX);
  assert_eq!(table.lookup("overflow"), None);
  assert_eq!(table.insert("a", "int", SymbolKind::Argument).unwrap(), 0);
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: Labels
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "While and if labels are numbered independently."]
fn label_counters() {
  let mut labels = LabelGenerator::default();

  assert_eq!(
    labels.new_while().unwrap(),
    LabelPair {
      start: String::from("WHILE0"),
      end: String::from("WHILE_END0"),
    }
  );
  assert_eq!(
    labels.new_if().unwrap(),
    LabelPair {
      start: String::from("IF_FALSE0"),
      end: String::from("IF_END0"),
    }
  );
  assert_eq!(labels.new_while().unwrap().start, "WHILE1");
  assert_eq!(labels.new_if().unwrap().end, "IF_END1");
}

#[test]
#[doc = "Running out of label numbers is an error, not a wrap to zero."]
fn label_limit() {
  let mut labels = LabelGenerator::default();

  for _ in 0..u16::MAX {
    labels.new_if().unwrap();
  }

  let error = labels.new_if().unwrap_err().downcast::<CompileError>().unwrap();

  assert!(matches!(error, CompileError::LimitExceeded { .. }));
  assert_eq!(labels.new_while().unwrap().start, "WHILE0");
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases: VM Writer
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Commands render in the textual VM format, one per line."]
fn writer_serialization() {
  let mut writer = VmWriter::default();
  writer.emit(VmCommand::function(String::from("Main.main"), 2));
  writer.emit_all([
    VmCommand::push(VmSegment::Constant, 7),
    VmCommand::pop(VmSegment::Local, 1),
    VmCommand::label(String::from("WHILE0")),
    VmCommand::if_goto(String::from("WHILE_END0")),
    VmCommand::goto(String::from("WHILE0")),
    VmCommand::call(String::from("Math.multiply"), 2),
    VmCommand::not,
    VmCommand::r#return,
  ]);

  assert_eq!(writer.commands().len(), 9);
  assert_eq!(
    writer.serialize(),
    "function Main.main 2
push constant 7
pop local 1
label WHILE0
if-goto WHILE_END0
goto WHILE0
call Math.multiply 2
not
return"
  );
}
