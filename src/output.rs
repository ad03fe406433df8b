// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes with status-tagged lines.

use console::{Style, style};
use serde::Serialize;
use std::time::Instant;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output with progress messages
    Normal,
    /// Minimal output for CI (noop previews, failures, final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Tag shown in front of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// An external command is about to run.
    Run,
    /// A mutating command was skipped because of `--noop`.
    Noop,
    /// Operator hint.
    Help,
    /// The image for the requested ref is not available.
    Missing,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Run => "run",
            Status::Noop => "noop",
            Status::Help => "help",
            Status::Missing => "missing",
        }
    }

    fn style(&self) -> Style {
        match self {
            Status::Run => Style::new().green().bold(),
            Status::Noop => Style::new().cyan().bold(),
            Status::Help => Style::new().yellow().bold(),
            Status::Missing => Style::new().red().bold(),
        }
    }

    /// Whether the line survives quiet mode.
    fn essential(&self) -> bool {
        matches!(self, Status::Noop | Status::Missing)
    }
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    /// Print a progress message (suppressed in quiet/json mode).
    pub fn progress(&self, message: &str) {
        if self.mode == OutputMode::Normal {
            println!("{message}");
        }
    }

    /// Print a right-aligned, colored status tag followed by a message.
    pub fn status(&self, status: Status, message: &str) {
        match self.mode {
            OutputMode::Normal => println!("{}", format_status(status, message)),
            OutputMode::Quiet if status.essential() => {
                println!("{}", format_status(status, message))
            }
            OutputMode::Quiet => {}
            OutputMode::Json => self.emit_json(status.label(), message, false),
        }
    }

    /// Print a non-fatal warning.
    pub fn warning(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("{} {message}", style("Warning:").yellow().bold());
            }
            OutputMode::Json => self.emit_json("warning", message, true),
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => {
                let elapsed = self.elapsed_secs();
                if elapsed > 0.0 {
                    println!("{message} ({:.1}s)", elapsed);
                } else {
                    println!("{message}");
                }
            }
            OutputMode::Quiet => {
                // Print only the essential result
                println!("{message}");
            }
            OutputMode::Json => self.emit_json("success", message, false),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => {
                eprintln!("{} {message}", style("Error:").red().bold());
            }
            OutputMode::Json => self.emit_json("error", message, true),
        }
    }

    fn emit_json(&self, event: &str, message: &str, to_stderr: bool) {
        let event = JsonEvent {
            event,
            message,
            duration_secs: if self.start_time.is_some() {
                Some(self.elapsed_secs())
            } else {
                None
            },
        };
        if let Ok(json) = serde_json::to_string(&event) {
            if to_stderr {
                eprintln!("{json}");
            } else {
                println!("{json}");
            }
        }
    }
}

/// Render a status line the way the terminal shows it.
pub fn format_status(status: Status, message: &str) -> String {
    let label = format!("{:>12}", status.label());
    format!("{}  {message}", status.style().apply_to(label))
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
}
