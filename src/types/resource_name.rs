// ABOUTME: Controller resource names derived from target and app.
// ABOUTME: The `infra-<target>-<app>` layout is what the mass controller expects.

use super::name::{AppName, Target};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    pub fn new(target: &Target, app: &AppName) -> Self {
        Self(format!("infra-{target}-{app}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
