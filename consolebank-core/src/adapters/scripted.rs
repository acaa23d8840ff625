//! Scripted console adapter
//!
//! Feeds pre-recorded lines to the dispatcher and captures everything it
//! shows. Used by tests to drive whole sessions without a terminal.

use std::collections::VecDeque;

use crate::domain::result::{Error, Result};
use crate::ports::{Console, Output};

/// Console backed by a queue of input lines
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    prompts: Vec<String>,
    outputs: Vec<Output>,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Lines not yet consumed
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// Every prompt label asked, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn outputs(&self) -> &[Output] {
        &self.outputs
    }

    pub fn errors(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .filter_map(|o| match o {
                Output::Error(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn successes(&self) -> Vec<&str> {
        self.outputs
            .iter()
            .filter_map(|o| match o {
                Output::Success(msg) => Some(msg.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Whole transcript as plain text
    pub fn transcript(&self) -> String {
        self.outputs
            .iter()
            .map(Output::to_plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, label: &str) -> Result<String> {
        self.prompts.push(label.to_string());
        self.inputs.pop_front().ok_or(Error::InputClosed)
    }

    fn show(&mut self, output: Output) {
        self.outputs.push(output);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompts_consume_lines_in_order() {
        let mut console = ScriptedConsole::new(["1", "alice"]);
        assert_eq!(console.prompt("Choose").unwrap(), "1");
        assert_eq!(console.prompt_secret("Password").unwrap(), "alice");
        assert!(matches!(console.prompt("Choose"), Err(Error::InputClosed)));
        assert_eq!(console.prompts(), &["Choose", "Password", "Choose"]);
    }

    #[test]
    fn test_captures_outputs() {
        let mut console = ScriptedConsole::default();
        console.show(Output::Success("ok".to_string()));
        console.show(Output::Error("bad".to_string()));
        assert_eq!(console.successes(), vec!["ok"]);
        assert_eq!(console.errors(), vec!["bad"]);
        assert_eq!(console.transcript(), "ok\nbad");
    }
}
