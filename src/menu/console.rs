use std::io::{BufRead, Write};
use tracing::warn;

/// The three interaction primitives the menu is built on.
pub trait Console {
    /// Shows `message` and reads one line. `None` means the input was closed.
    fn prompt(&mut self, message: &str) -> Option<String>;

    /// Shows an informational message.
    fn alert(&mut self, message: &str);

    /// Asks a yes/no question; anything but an explicit yes is a no.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Line-oriented console over any reader/writer pair (stdin/stdout in the binary).
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write_out(&mut self, text: &str) {
        if let Err(e) = self.output.write_all(text.as_bytes()).and_then(|_| self.output.flush()) {
            warn!(error = %e, "Failed to write to console");
        }
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.write_out(&format!("{}\n> ", message));
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
            Err(e) => {
                warn!(error = %e, "Failed to read from console");
                None
            }
        }
    }

    fn alert(&mut self, message: &str) {
        self.write_out(&format!("{}\n\n", message));
    }

    fn confirm(&mut self, message: &str) -> bool {
        match self.prompt(&format!("{} [y/N]", message)) {
            Some(answer) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            None => false,
        }
    }
}

/// Console fed from a fixed script; records every alert.
#[cfg(test)]
pub struct ScriptedConsole {
    inputs: std::collections::VecDeque<String>,
    pub alerts: Vec<String>,
    pub prompts: Vec<String>,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            alerts: Vec::new(),
            prompts: Vec::new(),
        }
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn prompt(&mut self, message: &str) -> Option<String> {
        self.prompts.push(message.to_string());
        self.inputs.pop_front()
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.prompt(message).is_some_and(|answer| answer == "y")
    }
}
