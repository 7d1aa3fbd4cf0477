//! Command implementations.
//!
//! Each command returns the text to print so it can be tested without
//! capturing stdout.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use garnet_cpp::{
    reindent, BackendConfig, CompilationContext, ModuleEnumerator, RuntimeTemplate, TemplateError,
};

/// Error from a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("{path}: {source}")]
    Template {
        path: String,
        #[source]
        source: TemplateError,
    },
}

/// Options for `garnetc modules`.
#[derive(Clone, Debug, Default)]
pub struct ModulesOptions {
    /// Library root; falls back to the environment when unset.
    pub lib_root: Option<PathBuf>,
    pub required: Vec<(String, PathBuf)>,
}

/// Parse a `<name>=<path>` pair.
pub fn parse_required(spec: &str) -> Option<(String, PathBuf)> {
    let (name, path) = spec.split_once('=')?;
    if name.is_empty() || path.is_empty() {
        return None;
    }
    Some((name.to_string(), PathBuf::from(path)))
}

/// Module link order followed by the initializer calls.
pub fn list_modules(options: &ModulesOptions) -> Result<String, CommandError> {
    let config = match &options.lib_root {
        Some(root) => BackendConfig::new(root),
        None => BackendConfig::from_env(),
    };
    let mut context = CompilationContext::new("", "-");
    for (name, path) in &options.required {
        context.required_modules.insert(name.as_str(), path.as_path());
    }

    let modules = ModuleEnumerator::new(config).enumerate(&context);
    let mut out = String::new();
    for name in modules.iter() {
        out.push_str(name);
        out.push('\n');
    }
    out.push('\n');
    for call in modules.init_calls() {
        out.push_str(&call);
        out.push('\n');
    }
    Ok(out)
}

/// Validate a runtime template file.
pub fn check_template(path: &Path) -> Result<String, CommandError> {
    let text = read(path)?;
    RuntimeTemplate::parse(&text).map_err(|source| CommandError::Template {
        path: path.display().to_string(),
        source,
    })?;
    Ok(format!("{}: ok\n", path.display()))
}

/// Re-indent a C++ file.
pub fn reindent_file(path: &Path) -> Result<String, CommandError> {
    let text = read(path)?;
    Ok(reindent(&text))
}

fn read(path: &Path) -> Result<String, CommandError> {
    fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.display().to_string(),
        source,
    })
}
