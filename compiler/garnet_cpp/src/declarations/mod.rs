//! Declaration assembly.
//!
//! Turns the session state left behind by the translator into the text that
//! fills the template's declaration, module-init and bootstrap sections.

use crate::context::CompilationContext;
use crate::literal::cpp_string_literal;
use crate::modules::ModuleList;
use crate::session::CompileSession;

/// Text blocks ready for the template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssembledDeclarations {
    /// Module initializer prototypes, symbol array, hoisted declarations.
    pub declarations: String,
    /// One initializer call per module, in link order.
    pub init_calls: String,
    /// Symbol initialization, then the `$0` binding for programs.
    pub bootstrap: String,
}

/// Builds the declaration and initialization text for one unit.
pub struct DeclarationAssembler<'s, 'a> {
    session: &'s CompileSession<'a>,
    modules: &'s ModuleList,
}

impl<'s, 'a> DeclarationAssembler<'s, 'a> {
    pub fn new(session: &'s CompileSession<'a>, modules: &'s ModuleList) -> Self {
        Self { session, modules }
    }

    /// Assemble all three blocks.
    ///
    /// Must run after translation: the symbol array is sized from the
    /// session's final symbol count.
    #[tracing::instrument(level = "debug", skip_all, fields(
        symbols = self.session.symbols.len(),
        modules = self.modules.len(),
        declarations = self.session.declarations.len(),
    ))]
    pub fn assemble(&self) -> AssembledDeclarations {
        AssembledDeclarations {
            declarations: self.declarations(),
            init_calls: self.init_calls().join("\n"),
            bootstrap: self.bootstrap(),
        }
    }

    /// Module prototypes, symbol array and hoisted declarations, separated
    /// by blank lines.
    pub fn declarations(&self) -> String {
        [
            self.module_declarations().join("\n"),
            self.session
                .symbols
                .array_declaration(&self.session.symbols_var_name()),
            self.session.declarations.render(),
        ]
        .join("\n\n")
    }

    /// `Value init_<module>(Env *env, Value self);` per module.
    pub fn module_declarations(&self) -> Vec<String> {
        self.modules
            .iter()
            .map(|name| {
                format!(
                    "Value {}(Env *env, Value self);",
                    ModuleList::init_function_name(name)
                )
            })
            .collect()
    }

    /// `init_<module>(env, self);` per module, in link order.
    pub fn init_calls(&self) -> Vec<String> {
        self.modules.init_calls()
    }

    /// Symbol initialization followed by the program-name global.
    pub fn bootstrap(&self) -> String {
        let symbols = self
            .session
            .symbols
            .init_statements(&self.session.symbols_var_name())
            .join("\n");
        match program_name_binding(self.session.context) {
            Some(binding) => [symbols, binding].join("\n\n"),
            None => symbols,
        }
    }
}

/// Statement binding `$0` to the source path.
///
/// Library objects are linked into some other program, which owns `$0`.
fn program_name_binding(context: &CompilationContext) -> Option<String> {
    if context.is_object {
        return None;
    }
    Some(format!(
        "env->global_set(\"$0\"_s, new StringObject {{ {} }});",
        cpp_string_literal(&context.source_path)
    ))
}
