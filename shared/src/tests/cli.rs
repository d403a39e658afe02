////////////////////////////////////////////////////////////////////////////////
// File: src/tests/cli.rs
// Description: Command line parser tests
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::{
  io::cli::{ArgType, CommandLineParser, ParseRuleType, Token},
  util::settings::Setting,
};

////////////////////////////////////////////////////////////////////////////////
// Helpers
////////////////////////////////////////////////////////////////////////////////

fn noop(_c: &mut CommandLineParser, _t: &mut Token) {}

fn parser() -> CommandLineParser {
  let mut parser = CommandLineParser::default();

  parser
    .create_parse_rule(
      'd',
      "debug",
      "[(all|symbols|tokens)*]",
      "Debug print settings",
      ArgType::Debug,
      0,
      usize::MAX,
      ParseRuleType::Setting,
      noop,
    )
    .create_parse_rule(
      'o',
      "output",
      "<dir>",
      "Output directory",
      ArgType::Output,
      1,
      1,
      ParseRuleType::Setting,
      noop,
    )
    .create_parse_rule(
      'c',
      "compile",
      "[(<dir>|<file>.jack)+]",
      "Compile",
      ArgType::Compile,
      1,
      usize::MAX,
      ParseRuleType::Executable,
      noop,
    );

  return parser;
}

fn args(list: &[&str]) -> Vec<String> {
  return list.iter().map(|s| return s.to_string()).collect();
}

////////////////////////////////////////////////////////////////////////////////
// Test Cases
////////////////////////////////////////////////////////////////////////////////

#[test]
#[doc = "Long and short flags are matched to their rules with their parameters."]
fn parses_flags_with_parameters() {
  let mut parser = parser();
  parser.parse_from(args(&["-c", "Main.jack", "Point.jack", "--output", "out"]));

  assert_eq!(
    parser.tokens,
    vec![
      Token::new(
        ParseRuleType::Executable,
        ArgType::Compile,
        Some(args(&["Main.jack", "Point.jack"]))
      ),
      Token::new(ParseRuleType::Setting, ArgType::Output, Some(args(&["out"]))),
    ]
  );
}

#[test]
#[doc = "A flag never takes more parameters than its rule allows."]
fn stops_at_parameter_maximum() {
  let mut parser = parser();
  parser.parse_from(args(&["-o", "out", "-d"]));

  assert_eq!(parser.tokens.len(), 2);
  assert_eq!(parser.tokens[0].parameters, Some(args(&["out"])));
  assert_eq!(parser.tokens[1].arg_type, ArgType::Debug);
  assert_eq!(parser.tokens[1].parameters, Some(Vec::new()));
}

#[test]
#[should_panic]
#[doc = "Missing required parameters abort argument parsing."]
fn rejects_missing_parameters() {
  parser().parse_from(args(&["--compile"]));
}

#[test]
#[should_panic]
#[doc = "Unknown flags abort argument parsing."]
fn rejects_unknown_flag() {
  parser().parse_from(args(&["--frobnicate"]));
}

#[test]
#[doc = "Debug setting names translate to their flag bits."]
fn debug_settings_from_names() {
  let (flags, store) = Setting::from_vec(
    ArgType::Debug,
    &args(&["symbols", "tokens"]),
    (Setting::PrintAll as u64, false),
  )
  .unwrap();

  assert_eq!(
    flags,
    Setting::PrintSymbols as u64 | Setting::PrintTokens as u64
  );
  assert!(!store);

  let (flags, _) =
    Setting::from_vec(ArgType::Debug, &[], (Setting::PrintAll as u64, false))
      .unwrap();
  assert_eq!(flags, Setting::PrintAll as u64);

  assert!(Setting::from_vec(
    ArgType::Debug,
    &args(&["everything"]),
    (Setting::PrintAll as u64, false)
  )
  .is_err());
}
