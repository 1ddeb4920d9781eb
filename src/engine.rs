//! Template tree rendering.
//! Walks a directory of the embedded template tree and materializes it in a
//! destination directory: `.tmpl` files are rendered, everything else is
//! copied verbatim.

use include_dir::{Dir, DirEntry, File};
use log::debug;
use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{wrap_permission, Error, Result};
use crate::renderer::TemplateRenderer;

/// Prefix standing in for a leading dot in template file names.
pub const HIDDEN_FILE_MARKER: &str = "dot.";

/// Suffix of files that go through placeholder substitution.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Maps a template entry name to its generated name: `dot.env` becomes `.env`.
pub fn translate_name(name: &str) -> String {
    match name.strip_prefix(HIDDEN_FILE_MARKER) {
        Some(rest) if !rest.is_empty() => format!(".{rest}"),
        _ => name.to_string(),
    }
}

/// Returns the output name of a template file, or `None` if the file is copied
/// as-is.
pub fn strip_template_suffix(name: &str) -> Option<&str> {
    name.strip_suffix(TEMPLATE_SUFFIX).filter(|stem| !stem.is_empty())
}

/// Renders `template_root` from `tree` into `dest_root`.
///
/// A directory root is recreated inside `dest_root`. For a single-file root
/// `dest_root` is the output file itself: a trailing `.tmpl` is stripped from
/// it and the template is rendered, otherwise the bytes are copied there.
///
/// # Errors
/// * `Error::TemplateRootNotFound` if `template_root` is not in `tree`
/// * `Error::PermissionDenied` if a target cannot be created
/// * `Error::MinijinjaError` if a template fails to render
///
/// The walk stops at the first error.
pub fn render_fs(
    tree: &Dir<'_>,
    template_root: &str,
    renderer: &dyn TemplateRenderer,
    context: &serde_json::Value,
    dest_root: &Path,
) -> Result<()> {
    debug!("Rendering template root '{template_root}' into {}", dest_root.display());

    if template_root.is_empty() || template_root == "." {
        return render_dir(tree, dest_root, renderer, context);
    }

    match tree.get_entry(template_root) {
        Some(DirEntry::Dir(dir)) => render_dir(dir, dest_root, renderer, context),
        Some(DirEntry::File(file)) => render_file(file, dest_root, renderer, context),
        None => Err(Error::TemplateRootNotFound { root: template_root.to_string() }),
    }
}

fn render_dir(
    dir: &Dir<'_>,
    dest_dir: &Path,
    renderer: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<()> {
    create_dir_all(dest_dir)?;

    for entry in dir.entries() {
        let dest_path = dest_dir.join(translate_name(&entry_name(entry.path())?));
        match entry {
            DirEntry::Dir(subdir) => render_dir(subdir, &dest_path, renderer, context)?,
            DirEntry::File(file) => render_file(file, &dest_path, renderer, context)?,
        }
    }

    Ok(())
}

fn render_file(
    file: &File<'_>,
    dest_path: &Path,
    renderer: &dyn TemplateRenderer,
    context: &serde_json::Value,
) -> Result<()> {
    let dest_name = entry_name(dest_path)?;

    let (dest_path, content) = match strip_template_suffix(&dest_name) {
        Some(stem) => {
            let source = file.contents_utf8().ok_or_else(|| {
                Error::TemplateError(format!(
                    "template '{}' is not valid UTF-8",
                    file.path().display()
                ))
            })?;
            let template_name = file.path().display().to_string();
            let rendered = renderer.render(&template_name, source, context)?;
            let dest_path = dest_path.with_file_name(stem);
            debug!("Writing file: {}", dest_path.display());
            (dest_path, rendered.into_bytes())
        }
        None => {
            debug!("Copying file: {}", dest_path.display());
            (dest_path.to_path_buf(), file.contents().to_vec())
        }
    };

    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    write_file(&dest_path, &content)
}

fn write_file(dest_path: &Path, content: &[u8]) -> Result<()> {
    let mut file = fs::File::create(dest_path).map_err(|e| wrap_permission(e, dest_path))?;
    file.write_all(content)?;
    Ok(())
}

fn create_dir_all(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| wrap_permission(e, dir))
}

fn entry_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::TemplateError(format!("invalid entry name: {}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_name() {
        assert_eq!(translate_name("dot.gitignore"), ".gitignore");
        assert_eq!(translate_name("dot.env.tmpl"), ".env.tmpl");
        assert_eq!(translate_name("main.go"), "main.go");
        assert_eq!(translate_name("dotfile"), "dotfile");
        assert_eq!(translate_name("dot."), "dot.");
    }

    #[test]
    fn test_strip_template_suffix() {
        assert_eq!(strip_template_suffix("main.go.tmpl"), Some("main.go"));
        assert_eq!(strip_template_suffix(".env.tmpl"), Some(".env"));
        assert_eq!(strip_template_suffix("main.go"), None);
        assert_eq!(strip_template_suffix("notes.tmpl.md"), None);
        assert_eq!(strip_template_suffix(".tmpl"), None);
    }
}
