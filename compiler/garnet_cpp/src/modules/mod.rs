//! Library module discovery and link order.
//!
//! Every library module compiled into the runtime exposes an
//! `init_<module>(env, self)` entry point. The order those run in is fixed:
//!
//! 1. [`DESIGNATED_MODULE`] first, since it builds the exception hierarchy
//!    the other modules raise into.
//! 2. Discovered modules in lexicographic order.
//! 3. Modules the compilation unit requires, in request order.
//!
//! Modules live under the library root as `<name>.<ext>` or
//! `<group>/<name>.<ext>`, where each segment is `[a-z0-9_]+`. Anything else
//! (deeper nesting, hidden entries, other extensions) is not a module.

use std::fs;
use std::path::Path;

use crate::context::{BackendConfig, CompilationContext};

/// Module whose initializer runs before all others.
pub const DESIGNATED_MODULE: &str = "exception";

/// Ordered, duplicate-free list of module names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleList {
    names: Vec<String>,
}

impl ModuleList {
    /// Build the link order from discovered and required module names.
    ///
    /// `discovered` may be in any order and contain duplicates.
    pub fn from_parts<'a>(
        discovered: impl IntoIterator<Item = String>,
        required: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut sorted: Vec<String> = discovered.into_iter().collect();
        sorted.sort();
        sorted.dedup();

        let mut list = Self {
            names: Vec::with_capacity(sorted.len() + 1),
        };
        list.push(DESIGNATED_MODULE);
        for name in &sorted {
            list.push(name);
        }
        for name in required {
            list.push(name);
        }
        list
    }

    fn push(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_owned());
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Name of a module's initializer function.
    ///
    /// Grouped modules (`net/http`) flatten to `init_net_http`.
    pub fn init_function_name(module: &str) -> String {
        format!("init_{}", module.replace('/', "_"))
    }

    /// Statement invoking a module's initializer from the runtime.
    pub fn init_call(module: &str) -> String {
        format!("{}(env, self);", Self::init_function_name(module))
    }

    /// One initializer call per module, in link order.
    pub fn init_calls(&self) -> Vec<String> {
        self.iter().map(Self::init_call).collect()
    }
}

/// Scans a library root for module sources.
#[derive(Clone, Debug)]
pub struct ModuleEnumerator {
    config: BackendConfig,
}

impl ModuleEnumerator {
    pub fn new(config: BackendConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Produce the module link order for a compilation unit.
    ///
    /// A missing or empty library root is not an error; the list then holds
    /// only the designated module and the required modules.
    #[tracing::instrument(level = "debug", skip_all, fields(root = %self.config.lib_root.display()))]
    pub fn enumerate(&self, context: &CompilationContext) -> ModuleList {
        let discovered = self.discover();
        tracing::debug!(discovered = discovered.len(), "library modules discovered");
        ModuleList::from_parts(discovered, context.required_modules.names())
    }

    /// Logical names of the modules under the library root, unsorted.
    pub fn discover(&self) -> Vec<String> {
        let mut names = Vec::new();
        self.discover_dir(&self.config.lib_root, None, &mut names);
        names
    }

    fn discover_dir(&self, dir: &Path, group: Option<&str>, names: &mut Vec<String>) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };

            if path.is_dir() {
                // Only one level of grouping
                if group.is_none() && is_module_segment(file_name) {
                    self.discover_dir(&path, Some(file_name), names);
                }
            } else if let Some(stem) = self.module_stem(file_name) {
                match group {
                    Some(group) => names.push(format!("{group}/{stem}")),
                    None => names.push(stem.to_owned()),
                }
            }
        }
    }

    /// Strip the module extension, returning the stem if the file is a module.
    fn module_stem<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        let stem = file_name
            .strip_suffix(self.config.module_extension.as_str())?
            .strip_suffix('.')?;
        is_module_segment(stem).then_some(stem)
    }
}

/// A path segment allowed in a module name.
fn is_module_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
