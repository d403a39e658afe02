////////////////////////////////////////////////////////////////////////////////
// File: src/internal/writer.rs
// Description: VM instruction sink
//
// Author: Leon Heidelbach <leon.heidelbach@hhu.de>
// Date: 15.05.2024
//
// License: GPLv3
////////////////////////////////////////////////////////////////////////////////

use super::vm::VmCommand;

////////////////////////////////////////////////////////////////////////////////
// VM Writer
////////////////////////////////////////////////////////////////////////////////

/// Append-only list of emitted commands. Commands are not validated.
#[derive(Debug, Clone, Default)]
pub(crate) struct VmWriter {
  commands: Vec<VmCommand>,
}

impl VmWriter {
  pub(crate) fn emit(&mut self, command: VmCommand) {
    self.commands.push(command);
  }

  pub(crate) fn emit_all(
    &mut self,
    commands: impl IntoIterator<Item = VmCommand>,
  ) {
    self.commands.extend(commands);
  }

  pub(crate) fn commands(&self) -> &[VmCommand] {
    return &self.commands;
  }

  pub(crate) fn lines(&self) -> Vec<String> {
    return self
      .commands
      .iter()
      .map(|command| return command.to_string())
      .collect();
  }
}
