//! Per-compilation mutable state and the translator contract.
//!
//! A [`CompileSession`] is created for exactly one compilation unit and
//! handed to the [`Translator`] by `&mut`. Nothing here is global, so
//! independent compilations never observe each other's symbols or helpers.

use rustc_hash::FxHashMap;

use crate::context::CompilationContext;
use crate::error::TranslateError;
use crate::symbols::SymbolTable;

/// Top-level declarations hoisted out of the translated body.
///
/// Order is preserved in the output since later entries may refer to
/// earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeclarationList {
    entries: Vec<String>,
}

impl DeclarationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, declaration: impl Into<String>) {
        self.entries.push(declaration.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Entries joined one per line.
    pub fn render(&self) -> String {
        self.entries.join("\n")
    }
}

/// Helper functions the translator already emitted, keyed by the shape of
/// the instruction pattern they implement.
///
/// The backend only carries this through; its keys mean nothing here.
#[derive(Clone, Debug, Default)]
pub struct InlineFunctionCache {
    functions: FxHashMap<String, String>,
}

impl InlineFunctionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.functions.get(key).map(String::as_str)
    }

    /// Remember the helper emitted for `key`, returning any previous name.
    pub fn insert(&mut self, key: impl Into<String>, function_name: impl Into<String>) -> Option<String> {
        self.functions.insert(key.into(), function_name.into())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// State shared between the backend and the translator for one unit.
#[derive(Debug)]
pub struct CompileSession<'a> {
    pub context: &'a CompilationContext,
    pub symbols: SymbolTable,
    pub declarations: DeclarationList,
    pub inline_functions: InlineFunctionCache,
}

impl<'a> CompileSession<'a> {
    pub fn new(context: &'a CompilationContext) -> Self {
        Self {
            context,
            symbols: SymbolTable::new(),
            declarations: DeclarationList::new(),
            inline_functions: InlineFunctionCache::new(),
        }
    }

    /// Expression reading an interned symbol's array slot.
    ///
    /// Interns `name` if needed, so translators can use this directly when
    /// they meet a symbol literal.
    pub fn symbol_ref(&mut self, name: &str) -> String {
        let slot = self.symbols.intern(name);
        format!("{}[{slot}]", self.symbols_var_name())
    }

    /// Name of the unit's static symbol array.
    pub fn symbols_var_name(&self) -> String {
        self.context.static_var_name("symbols")
    }
}

/// Renders an instruction stream as C++ statements.
///
/// Called once per compilation unit. The translator owns its instruction
/// stream; it returns the statements for the evaluation body and records
/// everything else (symbol literals, hoisted helpers, cached helper names)
/// in the session.
pub trait Translator {
    fn translate(&mut self, session: &mut CompileSession<'_>) -> Result<String, TranslateError>;
}
