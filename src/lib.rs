//! apex scaffolds Go projects from embedded templates.
//! It collects a small set of answers, renders the matching template roots
//! into a new directory and bootstraps the Go module.

/// Command-line interface module for the apex application
pub mod cli;

/// Project configuration and preloaded answers (JSON or YAML)
pub mod config;

/// Template tree walker: copies static files, renders `.tmpl` files and
/// translates `dot.` names into dotfiles
pub mod engine;

/// Error types and handling for the apex application
pub mod error;

/// Post-generation `go mod init` / `go mod tidy`
pub mod hooks;

pub mod logger;

/// Destination checks and rendering of every selected template root
pub mod processor;

/// User input and interaction handling
pub mod prompt;

/// Placeholder substitution
pub mod renderer;

/// Embedded template roots
pub mod templates;
