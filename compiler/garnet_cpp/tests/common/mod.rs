//! Shared fixtures for the backend integration tests.

#![allow(dead_code, reason = "Each test binary uses a different subset")]

use garnet_cpp::{CompileSession, TranslateError, Translator};

/// Runtime template with every marker exactly once.
pub const TEMPLATE: &str = "\
#include \"garnet.hpp\"

using namespace Garnet;

/*GARNET_DECLARATIONS*/

extern \"C\" Value init_obj(Env *env, Value self) {
/*GARNET_OBJ_INIT*/
return NilObject::the();
}

int main(int argc, char *argv[]) {
Env *env = build_top_env();
Value self = GlobalEnv::the()->main_obj();
/*GARNET_EVAL_INIT*/
/*GARNET_EVAL_BODY*/
return 0;
}
";

/// Minimal instruction set for exercising the backend.
#[derive(Clone, Debug)]
pub enum Instruction {
    /// Push a symbol literal.
    PushSymbol(&'static str),
    /// Call a method on the receiver with the top of stack.
    Send(&'static str),
    /// Emit a helper function once per shape and call it.
    InlineHelper(&'static str),
    /// Fail translation.
    Unsupported(&'static str),
}

/// Translator that renders [`Instruction`]s one statement at a time.
#[derive(Default)]
pub struct MockTranslator {
    instructions: Vec<Instruction>,
    pub calls: usize,
}

impl MockTranslator {
    pub fn new(instructions: Vec<Instruction>) -> Self {
        Self {
            instructions,
            calls: 0,
        }
    }
}

impl Translator for MockTranslator {
    fn translate(&mut self, session: &mut CompileSession<'_>) -> Result<String, TranslateError> {
        self.calls += 1;
        let mut body = Vec::new();
        let mut stack = Vec::new();
        for instruction in &self.instructions {
            match instruction {
                Instruction::PushSymbol(name) => stack.push(session.symbol_ref(name)),
                Instruction::Send(method) => {
                    let arg = stack.pop().unwrap_or_else(|| "Value::nil()".to_string());
                    let method = session.symbol_ref(method);
                    body.push(format!("self.send(env, {method}, {{ {arg} }});"));
                }
                Instruction::InlineHelper(shape) => {
                    let name = match session.inline_functions.get(shape) {
                        Some(name) => name.to_string(),
                        None => {
                            let name = format!("helper_{}", session.inline_functions.len() + 1);
                            session.declarations.push(format!(
                                "Value {name}(Env *env, Value self) {{\nreturn self;\n}}"
                            ));
                            session.inline_functions.insert(*shape, name.clone());
                            name
                        }
                    };
                    body.push(format!("{name}(env, self);"));
                }
                Instruction::Unsupported(what) => {
                    return Err(TranslateError::new(format!("unsupported instruction: {what}")));
                }
            }
        }
        body.push("if (true) {".to_string());
        body.push("env->global_get(\"$0\"_s);".to_string());
        body.push("}".to_string());
        Ok(body.join("\n"))
    }
}
