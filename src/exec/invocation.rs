// ABOUTME: Structured description of an external command.
// ABOUTME: Keeps the real argv separate from the redacted form used for display.

use crate::types::{REDACTED, SecretValue};
use std::fmt;

/// A single command-line argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Plain(String),
    /// An argument carrying a secret. `template` holds the argument with the
    /// secret replaced by `{}`, so display can substitute the redaction marker.
    Sensitive {
        template: String,
        secret: SecretValue,
    },
}

impl Arg {
    /// The value passed to the process.
    pub fn actual(&self) -> String {
        match self {
            Arg::Plain(s) => s.clone(),
            Arg::Sensitive { template, secret } => template.replacen("{}", secret.expose(), 1),
        }
    }

    /// The value shown to operators and written to logs.
    pub fn display(&self) -> String {
        match self {
            Arg::Plain(s) => s.clone(),
            Arg::Sensitive { template, .. } => template.replacen("{}", REDACTED, 1),
        }
    }
}

/// A program plus its arguments, built without going through a shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: String,
    args: Vec<Arg>,
    inherit_output: bool,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            inherit_output: false,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(Arg::Plain(arg.into()));
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args
            .extend(args.into_iter().map(|a| Arg::Plain(a.into())));
        self
    }

    /// Append an argument whose `{}` placeholder is filled with a secret.
    pub fn sensitive_arg(mut self, template: impl Into<String>, secret: SecretValue) -> Self {
        self.args.push(Arg::Sensitive {
            template: template.into(),
            secret,
        });
        self
    }

    /// Let the command write straight to the terminal instead of capturing.
    pub fn inherit_output(mut self) -> Self {
        self.inherit_output = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Argument values as handed to the child process.
    pub fn actual_args(&self) -> Vec<String> {
        self.args.iter().map(Arg::actual).collect()
    }

    pub fn inherits_output(&self) -> bool {
        self.inherit_output
    }
}

/// Renders the redacted command line.
impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg.display())?;
        }
        Ok(())
    }
}
