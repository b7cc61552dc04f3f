//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing lookup
//! results in various formats (JSON, YAML, human-readable), plus status
//! messages and the progress spinner shown while words are fetched.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use lingualeo_core::{FetchOutcome, WordResult};
use serde::Serialize;
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use tracing::{debug, trace};

/// Trait for formatting output with specialized support for lookup results
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a batch of outcomes, successes and failures alike
    fn format_outcomes(&self, outcomes: &[FetchOutcome], use_color: bool) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // No dedicated human rendering for arbitrary values
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_outcomes(&self, outcomes: &[FetchOutcome], use_color: bool) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(outcomes
                .iter()
                .map(|outcome| format_outcome_human(outcome, use_color))
                .collect::<Vec<_>>()
                .join("\n")),
            _ => self.format(&outcomes),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    show_progress: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self {
            format,
            use_color,
            show_progress: !quiet && std::io::stderr().is_terminal(),
            quiet,
            writer: Box::new(io::stdout()),
        }
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            show_progress: false, // No spinners with custom writers
            quiet,
            writer,
        }
    }

    pub fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        debug!("Output info: {}", message);

        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write the outcomes of a lookup batch
    pub fn outcomes(&mut self, outcomes: &[FetchOutcome]) -> Result<()> {
        trace!(count = outcomes.len(), format = ?self.format, "Writing outcomes");
        let formatted = self.format.format_outcomes(outcomes, self.use_color)?;
        self.writeln(formatted.trim_end())
    }

    /// Create a spinner for indeterminate progress
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        if !self.show_progress {
            return None;
        }

        let pb = ProgressBar::new_spinner();
        pb.set_style(default_spinner_style());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    }
}

/// Helper function to create a spinner style
pub fn default_spinner_style() -> ProgressStyle {
    ProgressStyle::default_spinner()
        .template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Format a successful lookup for human reading
fn format_word_result_human(result: &WordResult, use_color: bool) -> String {
    let mut output = String::new();

    let word = if use_color {
        result.word.bold().to_string()
    } else {
        result.word.clone()
    };
    output.push_str(&word);

    if let Some(transcription) = result.transcription.as_deref().filter(|t| !t.is_empty()) {
        output.push_str(&format!(" [{}]", transcription));
    }
    if result.in_dictionary {
        let marker = "(in dictionary)";
        if use_color {
            output.push_str(&format!(" {}", marker.dimmed()));
        } else {
            output.push_str(&format!(" {}", marker));
        }
    }
    output.push('\n');

    if result.translations.is_empty() {
        output.push_str("  no translations found\n");
    }
    for (i, translation) in result.translations.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, translation));
    }

    if !result.word_forms.is_empty() {
        let forms = result
            .word_forms
            .iter()
            .map(|form| {
                if form.kind.is_empty() {
                    form.word.clone()
                } else {
                    format!("{} ({})", form.word, form.kind)
                }
            })
            .collect::<Vec<_>>()
            .join(", ");
        output.push_str(&format!("  forms: {}\n", forms));
    }

    output
}

fn format_outcome_human(outcome: &FetchOutcome, use_color: bool) -> String {
    match outcome {
        FetchOutcome::Success(result) => format_word_result_human(result, use_color),
        FetchOutcome::Failure { word, error } => {
            let line = format!("{}: {}", word, error);
            if use_color {
                format!("{}\n", line.red())
            } else {
                format!("{}\n", line)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    include!("output/tests.rs");
}
