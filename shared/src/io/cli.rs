////////////////////////////////////////////////////////////////////////////////
// File: src/io/cli.rs
// Description: CLI parser
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{env, iter::Peekable};

use crate::{error_panic, util::settings::Setting};

////////////////////////////////////////////////////////////////////////////////
// Commandline Parser Definitions
////////////////////////////////////////////////////////////////////////////////

pub trait DefaultArgType {
  /// Flag value used when the argument is given without parameters, and
  /// whether the raw parameters should be stored alongside it.
  fn default(&self) -> (u64, bool);
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum ArgType {
  Compile,
  Version([&'static str; 5]),
  Help([&'static str; 5]),
  Debug,
  Output,
  Xml,
}

impl DefaultArgType for ArgType {
  fn default(&self) -> (u64, bool) {
    return match self {
      ArgType::Debug => (Setting::PrintAll as u64, false),
      ArgType::Output => (Setting::Output as u64, true),
      ArgType::Xml => (Setting::Xml as u64, true),
      _ => (0, false),
    };
  }
}

#[derive(Debug, Copy, Clone, Ord, Eq, PartialOrd, PartialEq)]
pub enum ParseRuleType {
  Setting,
  Executable,
}

pub type Callback = fn(&mut CommandLineParser, &mut Token);

pub struct ParseRule {
  pub flag: char,
  pub long_flag: String,
  pub usage: String,
  pub description: String,
  pub arg_type: ArgType,
  pub parameters_min: usize,
  pub parameters_max: usize,
  pub rule_type: ParseRuleType,
  pub callback: Callback,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
  pub parse_rule_type: ParseRuleType,
  pub arg_type: ArgType,
  pub parameters: Option<Vec<String>>,
}

impl Token {
  pub fn new(
    parse_rule_type: ParseRuleType,
    arg_type: ArgType,
    parameters: Option<Vec<String>>,
  ) -> Self {
    return Self {
      parse_rule_type,
      arg_type,
      parameters,
    };
  }
}

////////////////////////////////////////////////////////////////////////////////
// Commandline Parser Implementation
////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct CommandLineParser {
  pub default_parse_rule: Option<usize>,
  pub tokens: Vec<Token>,
  pub parse_rules: Vec<ParseRule>,
}

impl CommandLineParser {
  const FLAG_PREFIX: char = '-';
  const LONG_FLAG_PREFIX: &'static str = "--";

  pub fn default_parse_rule(
    &mut self,
    flag: char,
    long_flag: &str,
    usage: &str,
    description: &str,
    arg_type: ArgType,
    parameters_min: usize,
    parameters_max: usize,
    callback: Callback,
  ) -> &mut Self {
    self.create_parse_rule(
      flag,
      long_flag,
      usage,
      description,
      arg_type,
      parameters_min,
      parameters_max,
      ParseRuleType::Executable,
      callback,
    );

    self.default_parse_rule = Some(self.parse_rules.len() - 1);

    return self;
  }

  pub fn create_parse_rule(
    &mut self,
    flag: char,
    long_flag: &str,
    usage: &str,
    description: &str,
    arg_type: ArgType,
    parameters_min: usize,
    parameters_max: usize,
    rule_type: ParseRuleType,
    callback: Callback,
  ) -> &mut Self {
    assert!(parameters_min <= parameters_max);

    self.parse_rules.push(ParseRule {
      flag,
      long_flag: long_flag.to_string(),
      usage: usage.to_string(),
      description: description.to_string(),
      arg_type,
      parameters_min,
      parameters_max,
      rule_type,
      callback,
    });

    return self;
  }

  fn find_parse_rules(&self, arg: &str) -> Option<Vec<&ParseRule>> {
    if let Some(long_flag) = arg.strip_prefix(Self::LONG_FLAG_PREFIX) {
      let Some(parse_rule) = self
        .parse_rules
        .iter()
        .find(|rule| return rule.long_flag == long_flag)
      else {
        error_panic!(
          "(ArgError) Invalid flag: `{}`. Use `--help` for more information.",
          long_flag
        );
      };

      return Some(vec![parse_rule]);
    }

    let flags = arg.strip_prefix(Self::FLAG_PREFIX)?;

    let parse_rules = flags
      .chars()
      .map(|c| {
        return self
          .parse_rules
          .iter()
          .find(|rule| return rule.flag == c)
          .unwrap_or_else(|| {
            error_panic!(
              "(ArgError) Invalid flag: `{}`. Use `--help` for more information.",
              c
            )
          });
      })
      .collect::<Vec<_>>();

    return if parse_rules.is_empty() {
      None
    } else {
      Some(parse_rules)
    };
  }

  fn collect_parameters<I>(
    args: &mut Peekable<I>,
    parse_rule: &ParseRule,
    arg: &str,
  ) -> Vec<String>
  where
    I: Iterator<Item = String>,
  {
    let mut parameters: Vec<String> = Vec::new();

    while parameters.len() < parse_rule.parameters_max {
      match args.next_if(|p| return !p.starts_with(Self::FLAG_PREFIX)) {
        Some(parameter) => parameters.push(parameter),
        None => break,
      }
    }

    if parameters.len() < parse_rule.parameters_min {
      error_panic!(
        "(ArgError) Not enough parameters for flag: `{}`. Use `--help` for more information.",
        arg
      );
    }

    return parameters;
  }

  /// Parses the process arguments.
  pub fn parse(&mut self) -> &mut Self {
    return self.parse_from(env::args().skip(1));
  }

  /// Parses an argument list that does not contain the program name.
  pub fn parse_from<I>(&mut self, args: I) -> &mut Self
  where
    I: IntoIterator<Item = String>,
  {
    let mut args = args.into_iter().peekable();
    let mut tokens = Vec::new();

    while let Some(arg) = args.next() {
      let Some(parse_rules) = self.find_parse_rules(&arg) else {
        error_panic!(
          "(ArgError) Unexpected argument: `{}`. Use `--help` for more information.",
          arg
        );
      };

      for parse_rule in parse_rules {
        let parameters = Self::collect_parameters(&mut args, parse_rule, &arg);

        tokens.push(Token::new(
          parse_rule.rule_type,
          parse_rule.arg_type,
          Some(parameters),
        ));
      }
    }

    self.tokens = tokens;

    return self;
  }

  /// Runs the callbacks of all parsed tokens, settings before executables.
  pub fn evaluate(&mut self) {
    if self.tokens.is_empty() {
      if let Some(default_parse_rule) = self.default_parse_rule {
        let rule = &self.parse_rules[default_parse_rule];
        let callback = rule.callback;
        let mut token = Token::new(rule.rule_type, rule.arg_type, None);

        callback(self, &mut token);
      }

      return;
    }

    self.tokens.sort_by_key(|a| return a.parse_rule_type);

    for token in &mut self.tokens.clone() {
      let token_type = token.arg_type;

      if let Some(callback) = self
        .parse_rules
        .iter()
        .find(|rule| return rule.arg_type == token_type)
        .map(|rule| return rule.callback)
      {
        callback(self, token);
      }
    }
  }
}
