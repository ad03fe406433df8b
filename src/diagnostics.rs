// ABOUTME: Diagnostics accumulator for non-fatal observations during a rollout.
// ABOUTME: Collects warnings that shouldn't stop a run but should be shown to operators.

/// Collects non-fatal warnings during rollout operations.
#[derive(Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected during a rollout.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// The migration app is also listed explicitly and will deploy twice.
    pub fn duplicate_migration_app(app: impl std::fmt::Display) -> Self {
        Self {
            kind: WarningKind::DuplicateMigrationApp,
            message: format!(
                "{app} is the migration app and also listed in --apps; it will be deployed twice"
            ),
        }
    }

    /// A patch was requested for zero apps.
    pub fn nothing_to_patch() -> Self {
        Self {
            kind: WarningKind::NothingToPatch,
            message: "no apps selected; nothing was patched".to_string(),
        }
    }
}

/// Categories of warnings that can occur during a rollout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Migration app deployed first and again at its listed position.
    DuplicateMigrationApp,
    /// Patch ran with an empty app list.
    NothingToPatch,
}
