//! Project generation orchestration.
//! Prepares the destination directory and renders every template root the
//! configuration selects.

use log::debug;
use std::path::{Path, PathBuf};

use crate::config::ProjectConfig;
use crate::engine::render_fs;
use crate::error::{wrap_permission, Error, Result};
use crate::renderer::TemplateRenderer;
use crate::templates::{template_roots_for, TEMPLATES};

/// Ensures the output directory is safe to write to.
///
/// Generation never merges into an existing project: an existing directory is
/// rejected unless `force` is set.
///
/// # Errors
/// * `Error::OutputDirectoryExistsError` if the directory exists and `force` is false
pub fn ensure_output_dir<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if output_dir.exists() && !force {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    std::fs::create_dir_all(output_dir).map_err(|e| wrap_permission(e, output_dir))?;
    Ok(output_dir.to_path_buf())
}

/// Generates the project described by `config` into `output_root/<name>`.
///
/// # Returns
/// * `Result<PathBuf>` - The generated project directory
pub fn generate_project<P: AsRef<Path>>(
    renderer: &dyn TemplateRenderer,
    config: &ProjectConfig,
    output_root: P,
    force: bool,
) -> Result<PathBuf> {
    config.validate()?;
    let dest = ensure_output_dir(output_root.as_ref().join(&config.name), force)?;
    let context = config.to_context()?;

    for root in template_roots_for(config) {
        debug!("Processing template root '{root}'");
        render_fs(&TEMPLATES, root, renderer, &context, &dest)?;
    }

    Ok(dest)
}
