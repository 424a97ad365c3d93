mod builtin;
mod error;
mod scope;
mod value;

pub use self::error::*;
pub use self::scope::*;
pub use self::value::*;

use std::rc::Rc;

use crate::parser::ast::{
    BinaryExpression, Block, Call, Expression, ForLoop, Literal, Num, Prefix, Program, Statement,
};

/// Outcome of executing a statement. `Returned` unwinds blocks and loops up
/// to the enclosing call and carries the return value with it.
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    Normal,
    Returned(Value),
}

pub struct Interpreter {
    globals: Scope,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    pub fn new() -> Self {
        let globals = Scope::default();
        builtin::install(&globals);

        Self { globals }
    }

    /// Execute a whole program against the global scope.
    pub fn run(&self, program: &Program) -> Result<(), RuntimeError> {
        for statement in &program.statements {
            self.execute(statement, &self.globals)?;
        }

        Ok(())
    }

    /// Evaluate a single expression against the global scope.
    pub fn evaluate_expression(&self, expression: &Expression) -> Result<Value, RuntimeError> {
        self.evaluate(expression, &self.globals)
    }

    fn execute(&self, statement: &Statement, scope: &Scope) -> Result<Signal, RuntimeError> {
        match statement {
            Statement::Expression(expression) => {
                self.evaluate(expression, scope)?;
                Ok(Signal::Normal)
            }
            Statement::Print(print) => {
                let value = self.evaluate(&print.expression, scope)?;
                println!("{value}");
                Ok(Signal::Normal)
            }
            Statement::VariableDeclaration(declaration) => {
                let value = match &declaration.initializer {
                    Some(expression) => self.evaluate(expression, scope)?,
                    None => Value::Nil,
                };
                scope.declare(&declaration.name.name, value);
                Ok(Signal::Normal)
            }
            Statement::Block(block) => self.execute_block(block, &scope.child()),
            Statement::If(if_statement) => {
                if self.evaluate(&if_statement.condition, scope)?.is_truthy() {
                    self.execute(&if_statement.then_branch, scope)
                } else if let Some(else_branch) = &if_statement.else_branch {
                    self.execute(else_branch, scope)
                } else {
                    Ok(Signal::Normal)
                }
            }
            Statement::WhileLoop(while_loop) => {
                while self.evaluate(&while_loop.condition, scope)?.is_truthy() {
                    if let Signal::Returned(value) = self.execute(&while_loop.body, scope)? {
                        return Ok(Signal::Returned(value));
                    }
                }
                Ok(Signal::Normal)
            }
            Statement::ForLoop(for_loop) => self.execute_for(for_loop, &scope.child()),
            Statement::Function(function) => {
                // child-of-current so the body sees the function's own name
                // through its parent
                let closure = scope.child();
                let value = Value::Function(Rc::new(FunctionValue {
                    name: function.name.name.clone(),
                    parameters: function
                        .parameters
                        .iter()
                        .map(|parameter| parameter.name.clone())
                        .collect(),
                    body: FunctionBody::Declared(function.body.clone()),
                    closure,
                }));
                scope.declare(&function.name.name, value);
                Ok(Signal::Normal)
            }
            Statement::Return(return_statement) => {
                let value = match &return_statement.value {
                    Some(expression) => self.evaluate(expression, scope)?,
                    None => Value::Nil,
                };
                Ok(Signal::Returned(value))
            }
        }
    }

    fn execute_block(&self, block: &Block, scope: &Scope) -> Result<Signal, RuntimeError> {
        for statement in &block.statements {
            if let Signal::Returned(value) = self.execute(statement, scope)? {
                return Ok(Signal::Returned(value));
            }
        }

        Ok(Signal::Normal)
    }

    fn execute_for(&self, for_loop: &ForLoop, scope: &Scope) -> Result<Signal, RuntimeError> {
        if let Some(init) = &for_loop.init {
            self.execute(init, scope)?;
        }

        loop {
            // an omitted condition counts as nil, so such a loop never runs
            let condition = match &for_loop.condition {
                Some(expression) => self.evaluate(expression, scope)?,
                None => Value::Nil,
            };

            if !condition.is_truthy() {
                return Ok(Signal::Normal);
            }

            if let Signal::Returned(value) = self.execute(&for_loop.body, scope)? {
                return Ok(Signal::Returned(value));
            }

            if let Some(step) = &for_loop.step {
                self.evaluate(step, scope)?;
            }
        }
    }

    fn evaluate(&self, expression: &Expression, scope: &Scope) -> Result<Value, RuntimeError> {
        match expression {
            Expression::Literal(literal) => Ok(match literal {
                Literal::Number(value) => Value::Number(*value),
                Literal::String(value) => Value::String(value.clone()),
                Literal::Bool(value) => Value::Bool(*value),
                Literal::Nil => Value::Nil,
            }),
            Expression::Id(id) => {
                let Some(cell) = scope.find(&id.name) else {
                    return Err(RuntimeError::UndefinedVariable(id.name.clone()));
                };
                let value = cell.borrow().clone();
                Ok(value)
            }
            Expression::Grouping(grouping) => self.evaluate(&grouping.0, scope),
            Expression::Prefix(Prefix::Minus(operand)) => {
                let Value::Number(value) = self.evaluate(operand, scope)? else {
                    return Err(RuntimeError::OperandsMustBeNumbers);
                };
                Ok(Value::Number(value.neg()))
            }
            Expression::Prefix(Prefix::Bang(operand)) => {
                let value = self.evaluate(operand, scope)?;
                Ok(Value::Bool(!value.is_truthy()))
            }
            Expression::Binary(binary) => self.evaluate_binary(binary, scope),
            Expression::Assignment(assignment) => {
                let value = self.evaluate(&assignment.value, scope)?;
                scope.update(&assignment.id.name, value.clone())?;
                Ok(value)
            }
            Expression::Call(call) => self.evaluate_call(call, scope),
        }
    }

    fn evaluate_binary(
        &self,
        binary: &BinaryExpression,
        scope: &Scope,
    ) -> Result<Value, RuntimeError> {
        match binary {
            // `and` collapses a falsy left operand to the boolean false,
            // while `or` passes a truthy left operand through unchanged
            BinaryExpression::And(left, right) => {
                let value = self.evaluate(left, scope)?;
                if !value.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                self.evaluate(right, scope)
            }
            BinaryExpression::Or(left, right) => {
                let value = self.evaluate(left, scope)?;
                if value.is_truthy() {
                    return Ok(value);
                }
                self.evaluate(right, scope)
            }
            BinaryExpression::Addition(left, right) => {
                match (self.evaluate(left, scope)?, self.evaluate(right, scope)?) {
                    (Value::Number(left), Value::Number(right)) => {
                        Ok(Value::Number(left.add(right)))
                    }
                    (Value::String(left), Value::String(right)) => {
                        Ok(Value::String(format!("{left}{right}")))
                    }
                    _ => Err(RuntimeError::OperandsMustMatch),
                }
            }
            BinaryExpression::Subtraction(left, right) => {
                let (left, right) = self.numeric_operands(left, right, scope)?;
                Ok(Value::Number(left.sub(right)))
            }
            BinaryExpression::Multiplication(left, right) => {
                let (left, right) = self.numeric_operands(left, right, scope)?;
                Ok(Value::Number(left.mul(right)))
            }
            BinaryExpression::Division(left, right) => {
                let (left, right) = self.numeric_operands(left, right, scope)?;
                Ok(Value::Number(left.div(right)))
            }
            BinaryExpression::Equal(left, right) => Ok(Value::Bool(
                self.evaluate(left, scope)? == self.evaluate(right, scope)?,
            )),
            BinaryExpression::NotEqual(left, right) => Ok(Value::Bool(
                self.evaluate(left, scope)? != self.evaluate(right, scope)?,
            )),
            BinaryExpression::LessThan(left, right) => {
                let (left, right) = self.numeric_operands(left, right, scope)?;
                Ok(Value::Bool(left.as_f64() < right.as_f64()))
            }
            BinaryExpression::LessOrEqual(left, right) => {
                let (left, right) = self.numeric_operands(left, right, scope)?;
                Ok(Value::Bool(left.as_f64() <= right.as_f64()))
            }
            BinaryExpression::GreaterThan(left, right) => {
                let (left, right) = self.numeric_operands(left, right, scope)?;
                Ok(Value::Bool(left.as_f64() > right.as_f64()))
            }
            BinaryExpression::GreaterOrEqual(left, right) => {
                let (left, right) = self.numeric_operands(left, right, scope)?;
                Ok(Value::Bool(left.as_f64() >= right.as_f64()))
            }
        }
    }

    fn numeric_operands(
        &self,
        left: &Expression,
        right: &Expression,
        scope: &Scope,
    ) -> Result<(Num, Num), RuntimeError> {
        let (Value::Number(left), Value::Number(right)) =
            (self.evaluate(left, scope)?, self.evaluate(right, scope)?)
        else {
            return Err(RuntimeError::OperandsMustBeNumbers);
        };

        Ok((left, right))
    }

    fn evaluate_call(&self, call: &Call, scope: &Scope) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(&call.callee, scope)?;
        let Value::Function(function) = callee else {
            return Err(RuntimeError::NotCallable);
        };

        if call.args.len() != function.parameters.len() {
            return Err(RuntimeError::WrongArity {
                expected: function.parameters.len(),
                got: call.args.len(),
            });
        }

        let mut arguments = Vec::with_capacity(call.args.len());
        for argument in &call.args {
            arguments.push(self.evaluate(argument, scope)?);
        }

        match &function.body {
            FunctionBody::Native(native) => Ok(native()),
            FunctionBody::Declared(body) => {
                let frame = function.closure.snapshot();
                for (parameter, argument) in function.parameters.iter().zip(arguments) {
                    frame.declare(parameter, argument);
                }

                match self.execute_block(body, &frame.child())? {
                    Signal::Returned(value) => Ok(value),
                    Signal::Normal => Ok(Value::Nil),
                }
            }
        }
    }
}
