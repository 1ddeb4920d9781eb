//! User input and interaction handling.
//! Collects the project configuration, asking only for the answers that were
//! not preloaded from flags, an answers file or stdin.

use crate::config::{validate_module, validate_name, Answers, Architecture, Database, ProjectConfig};
use crate::error::{Error, Result};
use dialoguer::{Confirm, Input, Select};
use log::debug;

/// Default project name offered by the first question.
pub const DEFAULT_NAME: &str = "apex-app";

/// Source of interactive answers.
pub trait Prompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
    /// Returns the index of the selected item.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize>;
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        let value = Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        Ok(value)
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize> {
        let selection = Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?;
        Ok(selection)
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        let value = Confirm::new().with_prompt(prompt).default(default).interact()?;
        Ok(value)
    }
}

/// Accepts every default without touching the terminal.
pub struct DefaultsPrompter;

impl Prompter for DefaultsPrompter {
    fn input(&self, _prompt: &str, default: &str) -> Result<String> {
        Ok(default.to_string())
    }

    fn select(&self, _prompt: &str, _items: &[&str], default: usize) -> Result<usize> {
        Ok(default)
    }

    fn confirm(&self, _prompt: &str, default: bool) -> Result<bool> {
        Ok(default)
    }
}

/// Resolves the full project configuration.
///
/// Questions are asked in a fixed order: name, architecture, module path,
/// database, GORM, Dockerfile. The module path defaults to the project name.
///
/// # Errors
/// * `Error::ValidationError` if the name or module path is rejected
/// * `Error::PromptError` if the terminal interaction fails
pub fn ask_project_config(prompter: &dyn Prompter, preloaded: Answers) -> Result<ProjectConfig> {
    let name = match preloaded.name {
        Some(name) => name,
        None => prompter.input("Project name:", DEFAULT_NAME)?,
    };
    let name = name.trim().to_string();
    validate_name(&name)?;

    let architecture = match preloaded.architecture {
        Some(architecture) => architecture,
        None => {
            let items: Vec<&str> = Architecture::ALL.iter().map(|a| a.as_str()).collect();
            pick(&Architecture::ALL, prompter.select("Architecture:", &items, 0)?)?
        }
    };

    let module = match preloaded.module {
        Some(module) => module,
        None => prompter.input("Module path:", &name)?,
    };
    let module = module.trim().to_string();
    validate_module(&module)?;

    let database = match preloaded.database {
        Some(database) => database,
        None => {
            let items: Vec<&str> = Database::ALL.iter().map(|d| d.as_str()).collect();
            pick(&Database::ALL, prompter.select("Database:", &items, 0)?)?
        }
    };

    let use_gorm = match preloaded.use_gorm {
        Some(use_gorm) => use_gorm,
        None => prompter.confirm("Use GORM?", true)?,
    };

    let docker = match preloaded.docker {
        Some(docker) => docker,
        None => prompter.confirm("Generate Dockerfile?", true)?,
    };

    let config = ProjectConfig { name, module, architecture, database, docker, use_gorm };
    debug!("Resolved project configuration: {config:?}");
    Ok(config)
}

fn pick<T: Copy>(choices: &[T], index: usize) -> Result<T> {
    choices
        .get(index)
        .copied()
        .ok_or_else(|| Error::ValidationError(format!("selection {index} is out of range")))
}
