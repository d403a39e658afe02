////////////////////////////////////////////////////////////////////////////////
// File: src/util/helpers.rs
// Description: Helper functions
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 01.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use std::iter::repeat;

use anyhow::{anyhow, Result};

////////////////////////////////////////////////////////////////////////////////
// U16 Manipulation
////////////////////////////////////////////////////////////////////////////////

pub trait U16Manipulation {
  fn get_value_and_increment(&mut self) -> Result<u16>;
}

impl U16Manipulation for u16 {
  fn get_value_and_increment(&mut self) -> Result<u16> {
    let current = *self;
    *self = self
      .checked_add(1)
      .ok_or_else(|| return anyhow!("u16 overflow while incrementing"))?;
    return Ok(current);
  }
}

////////////////////////////////////////////////////////////////////////////////
// String Manipulation
////////////////////////////////////////////////////////////////////////////////

pub trait StrManipulation {
  fn indent(&self, indent: usize) -> String;
  fn pad_right(&self, total_length: usize) -> String;
  fn xml_escape(&self) -> String;
}

impl StrManipulation for str {
  fn indent(&self, indent: usize) -> String {
    return self
      .split('\n')
      .map(|line| {
        let mut indented_line = String::new();
        indented_line.extend(repeat("  ").take(indent));
        indented_line.push_str(line);
        return indented_line;
      })
      .collect::<Vec<String>>()
      .join("\n");
  }

  fn pad_right(&self, total_length: usize) -> String {
    let mut padded_string = self.to_string();
    let length = self.chars().count();

    if total_length > length {
      padded_string.extend(repeat(' ').take(total_length - length));
    }

    return padded_string;
  }

  fn xml_escape(&self) -> String {
    return self.chars().fold(String::new(), |mut acc, c| {
      match c {
        '&' => acc.push_str("&amp;"),
        '<' => acc.push_str("&lt;"),
        '>' => acc.push_str("&gt;"),
        '"' => acc.push_str("&quot;"),
        _ => acc.push(c),
      }
      return acc;
    });
  }
}
