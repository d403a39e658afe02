////////////////////////////////////////////////////////////////////////////////
// File: src/tests/helpers.rs
// Description: Helper function tests
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use crate::{
  io::notify::format_timestamp,
  util::helpers::{StrManipulation, U16Manipulation},
};

#[test]
#[doc = "Counters hand out their current value and refuse to wrap around."]
fn counter_increment() {
  let mut counter: u16 = 0;

  assert_eq!(counter.get_value_and_increment().unwrap(), 0);
  assert_eq!(counter.get_value_and_increment().unwrap(), 1);
  assert_eq!(counter, 2);

  let mut counter = u16::MAX;
  assert!(counter.get_value_and_increment().is_err());
}

#[test]
#[doc = "XML special characters are replaced by entities."]
fn xml_escape() {
  assert_eq!("a < b".xml_escape(), "a &lt; b");
  assert_eq!("x&y>\"z\"".xml_escape(), "x&amp;y&gt;&quot;z&quot;");
  assert_eq!("plain".xml_escape(), "plain");
}

#[test]
#[doc = "Padding and indentation are applied per character and per line."]
fn padding_and_indent() {
  assert_eq!("ab".pad_right(4), "ab  ");
  assert_eq!("abcdef".pad_right(4), "abcdef");
  assert_eq!("a\nb".indent(1), "  a\n  b");
}

#[test]
#[doc = "Timestamps wrap at midnight."]
fn timestamp_format() {
  assert_eq!(format_timestamp(0), "00:00:00");
  assert_eq!(format_timestamp(3 * 3600 + 25 * 60 + 7), "03:25:07");
  assert_eq!(format_timestamp(86_400 + 61), "00:01:01");
}
