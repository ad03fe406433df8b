// ABOUTME: Computes the order apps are deployed in.
// ABOUTME: The migration app always goes first so schema changes land before code.

use crate::types::AppName;
use nonempty::NonEmpty;

/// Build the deploy sequence.
///
/// When a migration app is given it is placed first. It is not removed from
/// its listed position, so an app named in both places deploys twice.
pub fn rollout_order(apps: &NonEmpty<AppName>, migrate_app: Option<&AppName>) -> NonEmpty<AppName> {
    match migrate_app {
        Some(first) => NonEmpty {
            head: first.clone(),
            tail: apps.iter().cloned().collect(),
        },
        None => apps.clone(),
    }
}
