//! Compilation configuration.
//!
//! [`CompilationContext`] describes one compilation unit and is fixed once the
//! backend starts. [`BackendConfig`] describes where the library modules live.

use std::path::{Path, PathBuf};

/// Environment variable overriding the library root.
pub const LIB_ROOT_ENV: &str = "GARNET_LIB_ROOT";

/// Library root used when [`LIB_ROOT_ENV`] is unset.
const DEFAULT_LIB_ROOT: &str = "src";

/// Extension of library module sources.
const DEFAULT_MODULE_EXTENSION: &str = "rb";

/// Modules the unit requires beyond the standard library, in request order.
///
/// Maps a module name to the path it was resolved to. Names are unique;
/// re-adding a name replaces its path but keeps its original position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequiredModules {
    entries: Vec<(String, PathBuf)>,
}

impl RequiredModules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a required module.
    pub fn insert(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        let name = name.into();
        let path = path.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = path;
        } else {
            self.entries.push((name, path));
        }
    }

    /// Module names in request order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn path(&self, name: &str) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, path)| path.as_path())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Configuration for a single compilation unit.
#[derive(Clone, Debug)]
pub struct CompilationContext {
    /// Runtime template text containing the four section markers.
    pub template: String,
    /// Path of the source file being compiled.
    pub source_path: String,
    /// Prefix for static names, keeping independently compiled units apart.
    pub var_prefix: String,
    /// Library object (linked into another binary) rather than a program.
    pub is_object: bool,
    pub required_modules: RequiredModules,
}

impl CompilationContext {
    /// Context for a top-level program with no prefix and no extra modules.
    pub fn new(template: impl Into<String>, source_path: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            source_path: source_path.into(),
            var_prefix: String::new(),
            is_object: false,
            required_modules: RequiredModules::new(),
        }
    }

    #[must_use]
    pub fn with_var_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.var_prefix = prefix.into();
        self
    }

    /// Mark the unit as a library object.
    #[must_use]
    pub fn as_object(mut self) -> Self {
        self.is_object = true;
        self
    }

    #[must_use]
    pub fn with_required_module(mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        self.required_modules.insert(name, path);
        self
    }

    /// Name of a static variable owned by this unit.
    pub fn static_var_name(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.var_prefix)
    }
}

/// Where library modules are discovered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub lib_root: PathBuf,
    /// File extension of module sources, without the dot.
    pub module_extension: String,
}

impl BackendConfig {
    pub fn new(lib_root: impl Into<PathBuf>) -> Self {
        Self {
            lib_root: lib_root.into(),
            module_extension: DEFAULT_MODULE_EXTENSION.to_string(),
        }
    }

    /// Read the library root from [`LIB_ROOT_ENV`], defaulting to `src`.
    pub fn from_env() -> Self {
        let root = std::env::var_os(LIB_ROOT_ENV)
            .filter(|v| !v.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_LIB_ROOT), PathBuf::from);
        Self::new(root)
    }

    #[must_use]
    pub fn with_module_extension(mut self, extension: impl Into<String>) -> Self {
        self.module_extension = extension.into();
        self
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LIB_ROOT)
    }
}
