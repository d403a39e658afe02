////////////////////////////////////////////////////////////////////////////////
// File: src/io/notify.rs
// Description: Notification macros
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::{
  env,
  time::{SystemTime, UNIX_EPOCH},
};

use owo_colors::{OwoColorize, Stream::Stdout};

////////////////////////////////////////////////////////////////////////////////
// Constants
////////////////////////////////////////////////////////////////////////////////

pub const LOG_LEVEL_ERROR: &str = "Error";
pub const LOG_LEVEL_INFO: &str = "Info";

pub const COLOR_RED: usize = 0;
pub const COLOR_YELLOW: usize = 1;
pub const COLOR_GREEN: usize = 2;
pub const COLOR_CYAN: usize = 3;

const SECONDS_PER_DAY: u64 = 24 * 3600;

////////////////////////////////////////////////////////////////////////////////
// Color Formatting
////////////////////////////////////////////////////////////////////////////////

#[macro_export]
macro_rules! red {
  ($input:expr, $bold:expr, $underline:expr) => {
    $crate::io::notify::color_fmt(
      $input,
      $crate::io::notify::COLOR_RED,
      $bold,
      $underline,
    )
  };
}

#[macro_export]
macro_rules! yellow {
  ($input:expr, $bold:expr, $underline:expr) => {
    $crate::io::notify::color_fmt(
      $input,
      $crate::io::notify::COLOR_YELLOW,
      $bold,
      $underline,
    )
  };
}

#[macro_export]
macro_rules! green {
  ($input:expr, $bold:expr, $underline:expr) => {
    $crate::io::notify::color_fmt(
      $input,
      $crate::io::notify::COLOR_GREEN,
      $bold,
      $underline,
    )
  };
}

#[macro_export]
macro_rules! cyan {
  ($input:expr, $bold:expr, $underline:expr) => {
    $crate::io::notify::color_fmt(
      $input,
      $crate::io::notify::COLOR_CYAN,
      $bold,
      $underline,
    )
  };
}

////////////////////////////////////////////////////////////////////////////////
// General Message Formatting
////////////////////////////////////////////////////////////////////////////////

#[macro_export]
macro_rules! message_fmt_src {
  ($severity_symbol:expr, $message_type:expr, $message:tt $(,$arg:expr)*) => {
    &format!(
      "[{}] [{}] ({}::{}:{}): [{}]: {}",
      $severity_symbol,
      $crate::io::notify::generate_timestamp(),
      file!(),
      line!(),
      column!(),
      $message_type,
      format_args!($message $(,$arg)*)
    )
  };
}

#[macro_export]
macro_rules! message_fmt {
  ($severity_symbol:expr, $message_type:expr, $message:tt $(,$arg:expr)*) => {
    &format!(
      "[{}] [{}] [{}]: {}",
      $severity_symbol,
      $crate::io::notify::generate_timestamp(),
      $message_type,
      format_args!($message $(,$arg)*)
    )
  };
}

////////////////////////////////////////////////////////////////////////////////
// Error Formatting
////////////////////////////////////////////////////////////////////////////////

#[macro_export]
macro_rules! error_fmt {
  ($message:tt $(,$arg:expr)*) => {
    $crate::message_fmt![
      $crate::red!["!", true, false],
      $crate::red![$crate::io::notify::LOG_LEVEL_ERROR, true, true],
      $message $(,$arg)*
    ]
  };
}

#[macro_export]
macro_rules! error_fmt_src {
  ($message:tt $(,$arg:expr)*) => {
    $crate::message_fmt_src![
      $crate::red!["!", true, false],
      $crate::red![$crate::io::notify::LOG_LEVEL_ERROR, true, true],
      $message $(,$arg)*
    ]
  };
}

#[macro_export]
macro_rules! error_println {
  ($message:tt $(,$arg:expr)*) => {
    eprintln!("{}", $crate::error_fmt!($message $(,$arg)*))
  };
}

#[macro_export]
macro_rules! error_panic {
  ($message:tt $(,$arg:expr)*) => {
    panic!("{}", $crate::error_fmt!($message $(,$arg)*))
  };
}

#[macro_export]
macro_rules! error_panic_src {
  ($message:tt $(,$arg:expr)*) => {
    panic!("{}", $crate::error_fmt_src!($message $(,$arg)*))
  };
}

#[macro_export]
macro_rules! error_unreachable {
  ($message:tt $(,$arg:expr)*) => {
    unreachable!("\n{}", $crate::error_fmt_src!($message $(,$arg)*))
  };
}

////////////////////////////////////////////////////////////////////////////////
// Info Formatting
////////////////////////////////////////////////////////////////////////////////

#[macro_export]
macro_rules! info_fmt {
  ($message:tt $(,$arg:expr)*) => {
    $crate::message_fmt![
      $crate::green!["+", true, false],
      $crate::green![$crate::io::notify::LOG_LEVEL_INFO, true, true],
      $message $(,$arg)*
    ]
  };
}

#[macro_export]
macro_rules! info_print {
  ($message:tt $(,$arg:expr)*) => {
    println!("{}", $crate::info_fmt!($message $(,$arg)*))
  };
}

////////////////////////////////////////////////////////////////////////////////
// Timestamps
////////////////////////////////////////////////////////////////////////////////

/// UTC wall clock time formatted as `hh:mm:ss`.
pub fn generate_timestamp() -> String {
  let seconds = SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| return d.as_secs())
    .unwrap_or(0);

  return format_timestamp(seconds);
}

pub fn format_timestamp(seconds_since_epoch: u64) -> String {
  let seconds_today = seconds_since_epoch % SECONDS_PER_DAY;

  return format!(
    "{:02}:{:02}:{:02}",
    seconds_today / 3600,
    (seconds_today / 60) % 60,
    seconds_today % 60
  );
}

////////////////////////////////////////////////////////////////////////////////
// Color Support
////////////////////////////////////////////////////////////////////////////////

lazy_static::lazy_static! {
  pub(crate) static ref RGB_COLOR_SUPPORT: bool = {
    env::var("COLORTERM")
      .map(|val| return val == "truecolor" || val == "24bit")
      .unwrap_or(false)
  };
}

pub fn color_fmt(
  input: &str,
  color: usize,
  bold: bool,
  underline: bool,
) -> String {
  let colored = input.if_supports_color(Stdout, |t| {
    if *RGB_COLOR_SUPPORT {
      return match color {
        COLOR_RED => t.fg_rgb::<0xFF, 0x65, 0x78>().to_string(),
        COLOR_YELLOW => t.fg_rgb::<0xEA, 0xCB, 0x64>().to_string(),
        COLOR_GREEN => t.fg_rgb::<0x9D, 0xD2, 0x74>().to_string(),
        COLOR_CYAN => t.fg_rgb::<0x6D, 0xC7, 0xE3>().to_string(),
        _ => t.to_string(),
      };
    }

    return match color {
      COLOR_RED => t.bright_red().to_string(),
      COLOR_YELLOW => t.bright_yellow().to_string(),
      COLOR_GREEN => t.bright_green().to_string(),
      COLOR_CYAN => t.bright_cyan().to_string(),
      _ => t.to_string(),
    };
  });
  let fmt = colored.to_string();

  if bold && underline {
    return fmt
      .if_supports_color(Stdout, |t| return t.bold().underline().to_string())
      .to_string();
  } else if bold {
    return fmt
      .if_supports_color(Stdout, |t| return t.bold().to_string())
      .to_string();
  } else if underline {
    return fmt
      .if_supports_color(Stdout, |t| return t.underline().to_string())
      .to_string();
  }

  return fmt;
}
