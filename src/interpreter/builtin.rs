use std::{
    rc::Rc,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::parser::ast::Num;

use super::{
    scope::Scope,
    value::{FunctionBody, FunctionValue, Value},
};

fn clock() -> Value {
    let seconds = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        .unwrap_or(0);

    Value::Number(Num::Integer(seconds))
}

/// Bind the native functions into the global scope.
pub fn install(globals: &Scope) {
    globals.declare(
        "clock",
        Value::Function(Rc::new(FunctionValue {
            name: "clock".into(),
            parameters: vec![],
            body: FunctionBody::Native(clock),
            closure: globals.clone(),
        })),
    );
}
