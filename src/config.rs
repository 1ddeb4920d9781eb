//! Project configuration handling for apex.
//! Holds the answers that drive generation and loads preloaded answers from
//! JSON or YAML documents.

use crate::error::{Error, Result};
use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;
use std::path::Path;

/// Layout of the generated project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    Clean,
    Modular,
}

impl Architecture {
    pub const ALL: [Architecture; 2] = [Architecture::Clean, Architecture::Modular];

    pub fn as_str(&self) -> &'static str {
        match self {
            Architecture::Clean => "clean",
            Architecture::Modular => "modular",
        }
    }
}

impl fmt::Display for Architecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database the generated project is wired for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Postgres,
    Mysql,
    Sqlite,
    None,
}

impl Database {
    pub const ALL: [Database; 4] =
        [Database::Postgres, Database::Mysql, Database::Sqlite, Database::None];

    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Postgres => "postgres",
            Database::Mysql => "mysql",
            Database::Sqlite => "sqlite",
            Database::None => "none",
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully resolved answers. Serialized as-is into the template context, so the
/// field names are the placeholder names available to templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub name: String,
    pub module: String,
    pub architecture: Architecture,
    pub database: Database,
    pub docker: bool,
    pub use_gorm: bool,
}

impl ProjectConfig {
    /// Checks the answers that end up in paths or in `go mod init`.
    pub fn validate(&self) -> Result<()> {
        validate_name(&self.name)?;
        validate_module(&self.module)
    }

    /// Builds the context handed to the template renderer.
    pub fn to_context(&self) -> Result<serde_json::Value> {
        template_context(self)
    }
}

/// Serializes `value` into a template context.
pub fn template_context<T: Serialize>(value: &T) -> Result<serde_json::Value> {
    serde_json::to_value(value)
        .map_err(|e| Error::ConfigError(format!("Failed to build template context: {e}")))
}

/// Answers known before prompting. Every missing field is asked interactively
/// (or defaulted when prompts are disabled).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Answers {
    pub name: Option<String>,
    pub module: Option<String>,
    pub architecture: Option<Architecture>,
    pub database: Option<Database>,
    pub docker: Option<bool>,
    pub use_gorm: Option<bool>,
}

impl Answers {
    /// Fills every field missing in `self` from `fallback`.
    pub fn or(self, fallback: Answers) -> Answers {
        Answers {
            name: self.name.or(fallback.name),
            module: self.module.or(fallback.module),
            architecture: self.architecture.or(fallback.architecture),
            database: self.database.or(fallback.database),
            docker: self.docker.or(fallback.docker),
            use_gorm: self.use_gorm.or(fallback.use_gorm),
        }
    }
}

/// Parses preloaded answers. JSON is tried first, YAML is the fallback.
/// Empty input yields no answers.
pub fn parse_answers(content: &str) -> Result<Answers> {
    if content.trim().is_empty() {
        return Ok(Answers::default());
    }
    match serde_json::from_str(content) {
        Ok(answers) => Ok(answers),
        Err(json_err) => {
            debug!("Answers are not valid JSON ({json_err}), trying YAML.");
            Ok(serde_yaml::from_str(content)?)
        }
    }
}

/// Reads preloaded answers from a file.
pub fn load_answers_file<P: AsRef<Path>>(path: P) -> Result<Answers> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::ConfigError(format!(
            "Invalid answers file path: {}",
            path.display()
        )));
    }
    debug!("Loading answers from {}", path.display());
    parse_answers(&std::fs::read_to_string(path)?)
}

/// Reads preloaded answers from any reader, typically stdin.
pub fn load_answers_from<R: Read>(mut reader: R) -> Result<Answers> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_answers(&buffer)
}

pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::ValidationError("project name is required".to_string()));
    }
    if trimmed == "." || trimmed == ".." || trimmed.contains(['/', '\\']) {
        return Err(Error::ValidationError(format!(
            "project name '{trimmed}' must be a single directory name"
        )));
    }
    Ok(())
}

pub fn validate_module(module: &str) -> Result<()> {
    if module.trim().is_empty() {
        return Err(Error::ValidationError("module path is required".to_string()));
    }
    if module.chars().any(char::is_whitespace) {
        return Err(Error::ValidationError(format!(
            "module path '{module}' must not contain whitespace"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ProjectConfig {
        ProjectConfig {
            name: "shop".to_string(),
            module: "github.com/acme/shop".to_string(),
            architecture: Architecture::Clean,
            database: Database::Postgres,
            docker: true,
            use_gorm: false,
        }
    }

    #[test]
    fn test_context_uses_lowercase_choices() {
        let context = config().to_context().unwrap();
        assert_eq!(context["architecture"], "clean");
        assert_eq!(context["database"], "postgres");
        assert_eq!(context["use_gorm"], false);
    }

    #[test]
    fn test_context_failure_is_a_config_error() {
        let mut unserializable = std::collections::HashMap::new();
        unserializable.insert((1u8, 2u8), "tuple keys are not JSON object keys");

        match template_context(&unserializable) {
            Err(Error::ConfigError(msg)) => {
                assert!(msg.starts_with("Failed to build template context"))
            }
            other => panic!("Expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_answers_or_prefers_self() {
        let flags = Answers { name: Some("a".into()), ..Default::default() };
        let file = Answers {
            name: Some("b".into()),
            docker: Some(false),
            ..Default::default()
        };
        let merged = flags.or(file);
        assert_eq!(merged.name.as_deref(), Some("a"));
        assert_eq!(merged.docker, Some(false));
        assert_eq!(merged.module, None);
    }

    #[test]
    fn test_validate_rejects_nested_name() {
        let mut cfg = config();
        cfg.name = "a/b".to_string();
        assert!(matches!(cfg.validate(), Err(Error::ValidationError(_))));
    }

    #[test]
    fn test_validate_rejects_module_with_spaces() {
        let mut cfg = config();
        cfg.module = "github.com/acme/my shop".to_string();
        assert!(matches!(cfg.validate(), Err(Error::ValidationError(_))));
    }
}
