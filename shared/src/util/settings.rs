////////////////////////////////////////////////////////////////////////////////
// File: src/settings.rs
// Description: Program settings
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{
  collections::{hash_map::Entry, HashMap},
  sync::RwLock,
};

use crate::{
  error_panic_src,
  io::cli::{ArgType, CommandLineParser, DefaultArgType, Token},
};

use anyhow::{anyhow, Result};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

const DEBUG_ALL: &str = "all";
const DEBUG_SYMBOLS: &str = "symbols";
const DEBUG_TOKENS: &str = "tokens";

////////////////////////////////////////////////////////////////////////////////
// Global Settings
////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Default)]
pub(crate) struct SettingContent {
  flag_val: u64,
  values: Option<Vec<String>>,
}

impl SettingContent {
  pub(crate) fn new(flag_val: u64, values: Option<Vec<String>>) -> Self {
    return Self { flag_val, values };
  }
}

lazy_static::lazy_static! {
  pub(crate) static ref GLOBAL_SETTINGS: RwLock<HashMap<ArgType, SettingContent>> = {
    let mut map = HashMap::new();
    map.insert(ArgType::Debug, SettingContent::default());
    map.insert(ArgType::Output, SettingContent::default());
    map.insert(ArgType::Xml, SettingContent::default());
    return RwLock::new(map);
  };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Setting {
  PrintAll = 1 << 1_i64,
  PrintSymbols = 1 << 2_i64,
  PrintTokens = 1 << 3_i64,
  Output = 1 << 4_i64,
  Xml = 1 << 5_i64,
}

impl Setting {
  fn arg_type(&self) -> ArgType {
    return match self {
      Setting::PrintAll | Setting::PrintSymbols | Setting::PrintTokens => {
        ArgType::Debug
      }
      Setting::Output => ArgType::Output,
      Setting::Xml => ArgType::Xml,
    };
  }

  /// Translates the parameters of a setting flag into its flag value.
  pub fn from_vec(
    arg_type: ArgType,
    v: &[String],
    default: (u64, bool),
  ) -> Result<(u64, bool)> {
    let (default_setting, set_value) = default;

    if arg_type != ArgType::Debug {
      return Ok((default_setting, set_value));
    }

    let mut value = 0;

    for s in v {
      value |= match s.as_str() {
        DEBUG_ALL => Setting::PrintAll as u64,
        DEBUG_SYMBOLS => Setting::PrintSymbols as u64,
        DEBUG_TOKENS => Setting::PrintTokens as u64,
        _ => return Err(anyhow!("(ArgError) Unknown debug setting `{}`", s)),
      };
    }

    if value == 0 {
      value = default_setting;
    }

    return Ok((value, set_value));
  }

  pub fn is_set(&self) -> Result<Option<Vec<String>>> {
    let g = GLOBAL_SETTINGS
      .read()
      .map_err(|_| return anyhow!("(ArgError) Settings are unavailable"))?;
    let content = g.get(&self.arg_type()).cloned().unwrap_or_default();

    if content.flag_val & *self as u64 != 0 {
      return Ok(content.values);
    }

    return Err(anyhow!("(ArgError) Not set"));
  }

  /// Debug settings are also enabled by `all`.
  pub fn is_enabled(&self) -> bool {
    if self.arg_type() == ArgType::Debug && Setting::PrintAll.is_set().is_ok()
    {
      return true;
    }

    return self.is_set().is_ok();
  }
}

pub fn set_global_setting(_c: &mut CommandLineParser, t: &mut Token) {
  let parameters = t.parameters.clone().unwrap_or_default();
  let (flag, set_value) =
    Setting::from_vec(t.arg_type, &parameters, t.arg_type.default())
      .unwrap_or_else(|e| error_panic_src!("{}", e));

  if let Ok(mut g) = GLOBAL_SETTINGS.write() {
    if let Entry::Occupied(mut e) = g.entry(t.arg_type) {
      let values = if set_value { Some(parameters) } else { None };
      e.insert(SettingContent::new(flag, values));
      return;
    }
  }

  error_panic_src!(
    "(ArgError) Could not set global setting key: {:?}",
    t.arg_type
  );
}
