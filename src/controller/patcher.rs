// ABOUTME: Applies key/value runtime configuration to a deployed app.
// ABOUTME: All updates for one app go out in a single controller invocation.

use super::{Controller, ControllerError};
use crate::exec::{CommandRunner, Invocation};
use crate::types::{AppName, ConfigKey, ResourceName, SecretValue, Target};

/// Value assigned to a config key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    /// Safe to show, e.g. an image tag.
    Plain(String),
    /// Entered interactively; redacted everywhere it is displayed.
    Secret(SecretValue),
}

/// One `.<key> = "<value>"` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigUpdate {
    pub key: ConfigKey,
    pub value: ConfigValue,
}

impl ConfigUpdate {
    pub fn plain(key: ConfigKey, value: impl Into<String>) -> Self {
        Self {
            key,
            value: ConfigValue::Plain(value.into()),
        }
    }

    pub fn secret(key: ConfigKey, value: SecretValue) -> Self {
        Self {
            key,
            value: ConfigValue::Secret(value),
        }
    }
}

pub struct ConfigPatcher<'c, 'a, R: CommandRunner> {
    controller: &'c Controller<'a, R>,
}

impl<'c, 'a, R: CommandRunner> ConfigPatcher<'c, 'a, R> {
    pub fn new(controller: &'c Controller<'a, R>) -> Self {
        Self { controller }
    }

    /// Patch `infra-<target>-<app>` with every update in one call.
    pub async fn patch(
        &self,
        target: &Target,
        app: &AppName,
        updates: &[ConfigUpdate],
    ) -> Result<(), ControllerError> {
        let resource = ResourceName::new(target, app);
        let invocation = self.invocation(&resource, updates);

        self.controller
            .execute(invocation)
            .await
            .map_err(|source| ControllerError::Patch { resource, source })
    }

    /// Build `mass app patch <resource> --set=.<key>="<value>" ...`.
    pub fn invocation(&self, resource: &ResourceName, updates: &[ConfigUpdate]) -> Invocation {
        updates
            .iter()
            .fold(self.controller.app_command("patch", resource), |inv, update| {
                let key = &update.key;
                match &update.value {
                    ConfigValue::Plain(value) => {
                        inv.arg(format!("--set=.{key}=\"{}\"", escape(value)))
                    }
                    ConfigValue::Secret(secret) => inv.sensitive_arg(
                        format!("--set=.{key}=\"{{}}\""),
                        SecretValue::new(escape(secret.expose())),
                    ),
                }
            })
    }
}

/// Escape a value for use inside the controller's double-quoted string literal.
fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
