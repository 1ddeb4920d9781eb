//! Embedded template tree for generated projects.

use include_dir::{include_dir, Dir};

use crate::config::{Architecture, ProjectConfig};

/// Every template root lives under `src/assets/files/`.
pub static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

pub const CLEAN_ROOT: &str = "files/clean";
pub const MODULAR_ROOT: &str = "files/modular";
pub const DOCKER_ROOT: &str = "files/docker";

/// Base template root for an architecture.
pub fn template_root_for(architecture: Architecture) -> &'static str {
    match architecture {
        Architecture::Clean => CLEAN_ROOT,
        Architecture::Modular => MODULAR_ROOT,
    }
}

/// Ordered list of roots rendered for a configuration. Later roots are
/// rendered on top of earlier ones.
pub fn template_roots_for(config: &ProjectConfig) -> Vec<&'static str> {
    let mut roots = vec![template_root_for(config.architecture)];
    if config.docker {
        roots.push(DOCKER_ROOT);
    }
    roots
}
