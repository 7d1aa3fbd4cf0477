//! Symbol table for interned symbol literals.
//!
//! Every symbol literal the translator meets gets a slot in one static
//! `SymbolObject *` array. Slots are handed out in first-seen order and never
//! reused, so the array can be sized and filled only after translation ends.

use rustc_hash::FxHashMap;

use crate::literal::cpp_string_literal;

/// Append-only mapping from symbol name to array slot.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    /// Map from symbol name to slot.
    slots: FxHashMap<String, usize>,
    /// Names in slot order.
    names: Vec<String>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a symbol name, returning its slot.
    ///
    /// Returns the existing slot if the name was seen before; otherwise the
    /// name takes the next free slot.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&slot) = self.slots.get(name) {
            return slot;
        }
        let slot = self.names.len();
        self.names.push(name.to_owned());
        self.slots.insert(name.to_owned(), slot);
        tracing::trace!(symbol = name, slot, "interned symbol");
        slot
    }

    /// Look up the slot of an already interned name.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate `(slot, name)` pairs in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }

    /// Static array declaration sized to the current table.
    pub fn array_declaration(&self, array_name: &str) -> String {
        format!("static SymbolObject *{array_name}[{}] = {{}};", self.len())
    }

    /// One statement per slot binding it to its interned symbol.
    ///
    /// The length argument is the name's byte length, which differs from its
    /// character count for non-ASCII symbols.
    pub fn init_statements(&self, array_name: &str) -> Vec<String> {
        self.iter()
            .map(|(slot, name)| {
                format!(
                    "{array_name}[{slot}] = SymbolObject::intern({}, {});",
                    cpp_string_literal(name),
                    name.len()
                )
            })
            .collect()
    }
}
