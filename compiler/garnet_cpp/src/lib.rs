//! C++ Source Assembly Backend for Garnet
//!
//! The last stage of the compiler. A [`Translator`] renders one compilation
//! unit's instruction stream as C++ statements; this crate owns the state that
//! must stay consistent across the whole program and stitches everything into
//! a single source file built on the runtime template.
//!
//! # Architecture
//!
//! ```text
//! Translator ──(mutates)──► CompileSession { symbols, declarations, inline cache }
//!     │                                │
//!     │ body text                      ▼
//!     │              ModuleEnumerator ──► DeclarationAssembler
//!     │                                │
//!     ▼                                ▼
//!   RuntimeTemplate::merge(declarations, init calls, bootstrap, body)
//!     │
//!     ▼
//!   reindent() ──► C++ source
//! ```
//!
//! Declarations are assembled *after* translation: the translator is what
//! populates the symbol table, so its size is only known once it returns.

mod backend;
mod context;
pub mod declarations;
mod error;
pub mod literal;
pub mod modules;
pub mod reindent;
mod session;
pub mod symbols;
pub mod template;

pub use backend::CppBackend;
pub use context::{BackendConfig, CompilationContext, RequiredModules, LIB_ROOT_ENV};
pub use declarations::{AssembledDeclarations, DeclarationAssembler};
pub use error::{BackendError, TranslateError};
pub use modules::{ModuleEnumerator, ModuleList, DESIGNATED_MODULE};
pub use reindent::{reindent, INDENT_WIDTH};
pub use session::{CompileSession, DeclarationList, InlineFunctionCache, Translator};
pub use symbols::SymbolTable;
pub use template::{Marker, RuntimeTemplate, TemplateError, TemplateSections};
