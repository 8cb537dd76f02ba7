use log::debug;

use crate::emitter::error::EmitterError;
use crate::emitter::notes::{has_note, has_unescaped_backtick, split_note};
use crate::emitter::statement::ConditionalStatement;
use crate::kernel::constants::NOTES_MIN_VERSION;
use crate::version::gate::VersionGate;
use crate::version::value::VersionValue;

/// What happens to a key-binding note the target cannot parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoteMode {
    /// Keep it as a `# -N note` comment above the binding
    #[default]
    Comment,
    /// Drop it
    Discard,
}

/// Stable filter from declared statements to emitted lines.
#[derive(Debug, Clone)]
pub struct ConditionalEmitter {
    /// Feature level that introduced `bind -N`
    notes_gate: VersionGate,
    note_mode: NoteMode,
    guard_backticks: bool,
}

impl Default for ConditionalEmitter {
    fn default() -> Self {
        Self::new(NoteMode::default())
    }
}

impl ConditionalEmitter {
    pub fn new(note_mode: NoteMode) -> Self {
        let (major, minor) = NOTES_MIN_VERSION;
        Self {
            notes_gate: VersionGate::at_least(VersionValue::new(major, minor)),
            note_mode,
            guard_backticks: false,
        }
    }

    /// Reject lines with bare back-ticks (needed when scripts are embedded)
    pub fn with_backtick_guard(mut self, guard: bool) -> Self {
        self.guard_backticks = guard;
        self
    }

    pub fn note_mode(&self) -> NoteMode {
        self.note_mode
    }

    pub fn is_included(&self, statement: &ConditionalStatement, current: &VersionValue) -> bool {
        statement
            .gate
            .as_ref()
            .is_none_or(|gate| gate.is_satisfied(current))
    }

    /// Emits the lines of every statement whose gate `current` satisfies,
    /// in declaration order.
    pub fn emit(
        &self,
        statements: &[ConditionalStatement],
        current: &VersionValue,
    ) -> Result<Vec<String>, EmitterError> {
        let mut output = Vec::new();
        for statement in statements {
            if !self.is_included(statement, current) {
                if let Some(gate) = &statement.gate {
                    debug!("Excluding statement requiring {} for tmux {}", gate, current);
                }
                continue;
            }
            output.extend(self.emit_text(&statement.text, current)?);
        }
        Ok(output)
    }

    /// Renders ungated text: one trimmed output line per input line.
    pub fn emit_text(&self, text: &str, current: &VersionValue) -> Result<Vec<String>, EmitterError> {
        let notes_supported = self.notes_gate.is_satisfied(current);
        let mut output = Vec::new();

        for raw in text.split('\n') {
            let line = raw.trim();
            if !notes_supported && has_note(line) {
                match split_note(line) {
                    Some(split) => {
                        if let (Some(note), NoteMode::Comment) = (&split.note, self.note_mode) {
                            self.push(&mut output, format!("# -N {}", note))?;
                        }
                        self.push(&mut output, split.command)?;
                    }
                    None => self.push(&mut output, line.to_string())?,
                }
            } else {
                self.push(&mut output, line.to_string())?;
            }
        }
        Ok(output)
    }

    fn push(&self, output: &mut Vec<String>, line: String) -> Result<(), EmitterError> {
        if self.guard_backticks && has_unescaped_backtick(&line) {
            return Err(EmitterError::UnescapedBacktick(line));
        }
        output.push(line);
        Ok(())
    }
}
