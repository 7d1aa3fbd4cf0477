//! Backend pipeline: translate, enumerate, assemble, merge, reindent.

use crate::context::{BackendConfig, CompilationContext};
use crate::declarations::DeclarationAssembler;
use crate::error::BackendError;
use crate::modules::ModuleEnumerator;
use crate::reindent::reindent;
use crate::session::{CompileSession, Translator};
use crate::template::{RuntimeTemplate, TemplateSections};

/// Generates the C++ source for one compilation unit.
pub struct CppBackend {
    context: CompilationContext,
    enumerator: ModuleEnumerator,
}

impl CppBackend {
    pub fn new(context: CompilationContext, config: BackendConfig) -> Self {
        Self {
            context,
            enumerator: ModuleEnumerator::new(config),
        }
    }

    pub fn context(&self) -> &CompilationContext {
        &self.context
    }

    /// Run the translator and assemble the final source file.
    ///
    /// The template is validated before the translator runs, so a broken
    /// template fails fast without doing any translation work.
    #[tracing::instrument(level = "debug", skip_all, fields(source = %self.context.source_path))]
    pub fn generate<T: Translator>(&self, translator: &mut T) -> Result<String, BackendError> {
        let template = RuntimeTemplate::parse(&self.context.template)?;

        let mut session = CompileSession::new(&self.context);
        let body = translator.translate(&mut session)?;
        tracing::debug!(
            symbols = session.symbols.len(),
            declarations = session.declarations.len(),
            inline_functions = session.inline_functions.len(),
            "translation complete"
        );

        let modules = self.enumerator.enumerate(&self.context);
        let assembled = DeclarationAssembler::new(&session, &modules).assemble();

        let merged = template.merge(&TemplateSections {
            declarations: &assembled.declarations,
            object_init: &assembled.init_calls,
            eval_init: &assembled.bootstrap,
            eval_body: &body,
        });
        Ok(reindent(&merged))
    }
}
