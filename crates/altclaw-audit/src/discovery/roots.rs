//! Candidate root discovery -- expand location templates and test existence.

use std::path::PathBuf;
use tracing::{debug, info};

use crate::catalog::AppSpec;

/// Expand a location template's leading `~` to the user's home directory.
///
/// When no home directory can be determined the `~` is left in place;
/// the resulting path then simply fails the existence check downstream.
#[must_use]
pub fn expand_location(template: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(template).into_owned())
}

/// Enumerate every existing candidate installation root.
///
/// Existence only -- file contents are never touched here, and a
/// permission-denied or dangling path is indistinguishable from an
/// absent one (skipped, never an error). Order is catalog order, then
/// template order within each application.
#[must_use]
pub fn find_candidate_roots(catalog: &[AppSpec]) -> Vec<(&AppSpec, PathBuf)> {
    let mut roots = Vec::new();

    for spec in catalog {
        for template in spec.locations {
            let expanded = expand_location(template);
            if expanded.exists() {
                info!(
                    app = %spec.name,
                    path = %expanded.display(),
                    "found installation candidate"
                );
                roots.push((spec, expanded));
            } else {
                debug!(
                    app = %spec.name,
                    path = %expanded.display(),
                    "candidate path not present"
                );
            }
        }
    }

    roots
}
