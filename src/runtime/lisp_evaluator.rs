use std::cell::{Cell, RefCell};
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::parser::{check_balance, parse};
use crate::runtime::stack::ensure_sufficient_stack;
use crate::runtime::{Environment, Value};
use crate::tools::ToolRegistry;

/// Evaluator settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluatorConfig {
    /// Maximum nesting of closure calls and `eval` forms before evaluation fails
    pub max_call_depth: usize,
    /// Reject source with unbalanced parentheses before parsing
    pub check_balance: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        EvaluatorConfig {
            max_call_depth: 256,
            check_balance: true,
        }
    }
}

impl EvaluatorConfig {
    /// Sets the closure call depth limit
    pub fn with_max_call_depth(mut self, max_call_depth: usize) -> Self {
        self.max_call_depth = max_call_depth;
        self
    }

    /// Enables or disables the parenthesis balance check
    pub fn with_balance_check(mut self, check_balance: bool) -> Self {
        self.check_balance = check_balance;
        self
    }
}

/// Reserved keywords recognized in the head position of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialForm {
    /// `(lambda (params...) body)`
    Lambda,
    /// `(defn name (params...) body)`
    Defn,
    /// `(doall e1 e2 ... en)`
    Doall,
    /// `(if pred then else)`
    If,
    /// `(define name expr)`
    Define,
    /// `(quote expr)`
    Quote,
    /// `(eval expr)`
    Eval,
}

impl SpecialForm {
    /// Looks up the special form named by a head symbol
    pub fn from_symbol(name: &str) -> Option<Self> {
        match name {
            "lambda" => Some(SpecialForm::Lambda),
            "defn" => Some(SpecialForm::Defn),
            "doall" => Some(SpecialForm::Doall),
            "if" => Some(SpecialForm::If),
            "define" => Some(SpecialForm::Define),
            "quote" => Some(SpecialForm::Quote),
            "eval" => Some(SpecialForm::Eval),
            _ => None,
        }
    }

    /// The keyword as written in source
    pub fn keyword(&self) -> &'static str {
        match self {
            SpecialForm::Lambda => "lambda",
            SpecialForm::Defn => "defn",
            SpecialForm::Doall => "doall",
            SpecialForm::If => "if",
            SpecialForm::Define => "define",
            SpecialForm::Quote => "quote",
            SpecialForm::Eval => "eval",
        }
    }
}

/// Tree-walking evaluator
///
/// Owns the long-lived global environment used by [`evaluate`](Self::evaluate)
/// and [`load`](Self::load). Special forms:
/// - `(lambda (params...) body)` - Closure over a copy of the environment
/// - `(defn name (params...) body)` - Named closure, bound in the environment
/// - `(doall e1 ... en)` - Sequencing; value of the last expression
/// - `(if pred then else)` - Only the taken branch is evaluated
/// - `(define name expr)` - Binding
/// - `(quote expr)` - `expr` unevaluated
/// - `(eval expr)` - Evaluates `expr`, then evaluates the result again
///
/// Anything else is an application of a closure or built-in.
pub struct LispEvaluator {
    /// Global environment
    pub env: Environment,
    /// Built-ins the global environment was seeded from
    registry: Arc<ToolRegistry>,
    /// Evaluator settings
    config: EvaluatorConfig,
    /// Current nesting of closure calls and `eval` forms
    call_depth: Cell<usize>,
    /// Bindings made by define/defn, in order (name, value)
    execution_trace: RefCell<Vec<(String, Value)>>,
}

impl LispEvaluator {
    /// Creates a new evaluator with the standard built-ins
    pub fn new() -> Self {
        Self::build(ToolRegistry::new(), EvaluatorConfig::default())
    }

    /// Creates a new evaluator with custom settings
    pub fn with_config(config: EvaluatorConfig) -> Self {
        Self::build(ToolRegistry::new(), config)
    }

    /// Creates a new evaluator with custom tool registry
    pub fn with_registry(registry: ToolRegistry) -> Self {
        Self::build(registry, EvaluatorConfig::default())
    }

    fn build(registry: ToolRegistry, config: EvaluatorConfig) -> Self {
        let registry = Arc::new(registry);
        LispEvaluator {
            env: Self::seed(&registry),
            registry,
            config,
            call_depth: Cell::new(0),
            execution_trace: RefCell::new(Vec::new()),
        }
    }

    fn seed(registry: &ToolRegistry) -> Environment {
        let mut env = Environment::new();
        for (name, builtin) in registry.values() {
            env.define(name, builtin);
        }
        env
    }

    /// A fresh environment holding only the built-ins
    pub fn standard_env(&self) -> Environment {
        Self::seed(&self.registry)
    }

    /// Evaluator settings
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Built-ins this evaluator was seeded with
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Names bound in the global environment, sorted, excluding built-ins
    /// that still hold their original value
    pub fn user_bindings(&self) -> Vec<String> {
        self.env
            .names()
            .into_iter()
            .filter(|name| {
                let builtin = matches!(self.env.lookup(name), Some(Value::Builtin(_)));
                !(builtin && self.registry.has(name))
            })
            .collect()
    }

    /// Get the execution trace (bindings made by define/defn)
    pub fn get_execution_trace(&self) -> Vec<(String, Value)> {
        self.execution_trace.borrow().clone()
    }

    /// Clear the execution trace
    pub fn clear_execution_trace(&self) {
        self.execution_trace.borrow_mut().clear();
    }

    /// Parses and evaluates source text against the global environment
    pub fn evaluate(&mut self, source: &str) -> Result<Value> {
        let mut env = std::mem::take(&mut self.env);
        let result = self.evaluate_in(source, &mut env);
        self.env = env;
        result
    }

    /// Parses and evaluates source text against a caller-supplied environment
    pub fn evaluate_in(&self, source: &str, env: &mut Environment) -> Result<Value> {
        if self.config.check_balance {
            check_balance(source)?;
        }
        let tree = parse(source);
        self.evaluate_expression(&tree, env)
    }

    /// Evaluates a whole file's contents as one `(doall ...)` form.
    /// Every top-level form runs in order; the result is the last one's value.
    pub fn load(&mut self, source: &str) -> Result<Value> {
        if source.trim().is_empty() {
            return Ok(Value::Null);
        }
        if self.config.check_balance {
            // Checked before wrapping so reported lines match the file
            check_balance(source)?;
        }
        self.evaluate(&format!("(doall\n{}\n)", source))
    }

    /// Evaluate a parsed expression
    pub fn evaluate_expression(&self, expr: &Value, env: &mut Environment) -> Result<Value> {
        ensure_sufficient_stack(|| match expr.unwrapped() {
            Value::Symbol(sym) => env.get(sym.name()),
            Value::List(items) => self.evaluate_list(items, env),
            atom => Ok(atom.clone()),
        })
    }

    fn evaluate_list(&self, items: &[Value], env: &mut Environment) -> Result<Value> {
        let (head, args) = match items.split_first() {
            Some(split) => split,
            None => return Ok(Value::list(Vec::new())),
        };

        match head.as_symbol().and_then(SpecialForm::from_symbol) {
            Some(form) => {
                tracing::debug!(form = form.keyword(), "special form");
                match form {
                    SpecialForm::Lambda => self.eval_lambda(args, env),
                    SpecialForm::Defn => self.eval_defn(args, env),
                    SpecialForm::Doall => self.eval_doall(args, env),
                    SpecialForm::If => self.eval_if(args, env),
                    SpecialForm::Define => self.eval_define(args, env),
                    SpecialForm::Quote => Ok(args.first().cloned().unwrap_or(Value::Null)),
                    SpecialForm::Eval => self.eval_eval(args, env),
                }
            }
            None => self.eval_application(head, args, env),
        }
    }

    /// (lambda (params...) body) - Anonymous function
    fn eval_lambda(&self, args: &[Value], env: &mut Environment) -> Result<Value> {
        let params_expr = args
            .first()
            .ok_or_else(|| Error::malformed("lambda", "expected a parameter list"))?;
        let params = Self::parse_params("lambda", params_expr)?;

        Ok(Value::Function {
            params,
            body: Arc::new(args.get(1).cloned().unwrap_or(Value::Null)),
            closure: Arc::new(env.snapshot()),
            name: None,
        })
    }

    /// (defn name (params...) body) - Define named function
    fn eval_defn(&self, args: &[Value], env: &mut Environment) -> Result<Value> {
        let name = args
            .first()
            .and_then(Value::as_symbol)
            .ok_or_else(|| Error::malformed("defn", "expected a function name"))?
            .to_string();
        let params_expr = args
            .get(1)
            .ok_or_else(|| Error::malformed("defn", "expected a parameter list"))?;
        let params = Self::parse_params("defn", params_expr)?;

        let func = Value::Function {
            params,
            body: Arc::new(args.get(2).cloned().unwrap_or(Value::Null)),
            closure: Arc::new(env.snapshot()),
            name: Some(name.clone()),
        };

        self.bind(env, name, func.clone());
        Ok(func)
    }

    fn parse_params(form: &str, expr: &Value) -> Result<Vec<String>> {
        let items = match expr {
            Value::List(items) => items,
            other => {
                return Err(Error::malformed(
                    form,
                    format!("parameter list must be a list, got {}", other.type_name()),
                ))
            }
        };

        items
            .iter()
            .map(|param| {
                param.as_symbol().map(str::to_string).ok_or_else(|| {
                    Error::malformed(form, format!("parameter {} is not a symbol", param))
                })
            })
            .collect()
    }

    /// (doall expr1 expr2 ... exprN) - Sequential execution
    fn eval_doall(&self, args: &[Value], env: &mut Environment) -> Result<Value> {
        let mut last_val = Value::Null;
        for arg in args {
            last_val = self.evaluate_expression(arg, env)?;
        }
        Ok(last_val)
    }

    /// (if pred then else) - a missing branch evaluates to nil
    fn eval_if(&self, args: &[Value], env: &mut Environment) -> Result<Value> {
        let pred = args
            .first()
            .ok_or_else(|| Error::malformed("if", "expected a condition"))?;

        let branch = if self.evaluate_expression(pred, env)?.is_truthy() {
            args.get(1)
        } else {
            args.get(2)
        };

        match branch {
            Some(expr) => self.evaluate_expression(expr, env),
            None => Ok(Value::Null),
        }
    }

    /// (define var value) - Define new variable
    fn eval_define(&self, args: &[Value], env: &mut Environment) -> Result<Value> {
        if args.len() != 2 {
            return Err(Error::malformed(
                "define",
                format!("expected a name and a value, got {} arguments", args.len()),
            ));
        }

        let name = args[0]
            .as_symbol()
            .ok_or_else(|| Error::malformed("define", format!("cannot bind {}", args[0])))?
            .to_string();

        let value = self.evaluate_expression(&args[1], env)?;
        self.bind(env, name, value.clone());
        Ok(value)
    }

    /// (eval expr) - Evaluate, then evaluate the result
    fn eval_eval(&self, args: &[Value], env: &mut Environment) -> Result<Value> {
        let expr = args
            .first()
            .ok_or_else(|| Error::malformed("eval", "expected an expression"))?;
        let code = self.evaluate_expression(expr, env)?;
        self.nested(|| self.evaluate_expression(&code, env))
    }

    /// Runs `f` one call level deeper, failing once the configured limit is hit
    fn nested<T>(&self, f: impl FnOnce() -> Result<T>) -> Result<T> {
        let depth = self.call_depth.get();
        if depth >= self.config.max_call_depth {
            return Err(Error::RecursionLimit {
                limit: self.config.max_call_depth,
            });
        }

        self.call_depth.set(depth + 1);
        let result = f();
        self.call_depth.set(depth);
        result
    }

    fn bind(&self, env: &mut Environment, name: String, value: Value) {
        tracing::debug!(%name, value = %value, "bind");
        self.execution_trace
            .borrow_mut()
            .push((name.clone(), value.clone()));
        env.define(name, value);
    }

    fn eval_application(
        &self,
        head: &Value,
        args: &[Value],
        env: &mut Environment,
    ) -> Result<Value> {
        let unrecognized = || Error::UnrecognizedOperator {
            operator: head.source_text(),
        };

        // An unbound name in operator position is reported as the operator
        let operator = match head.unwrapped().as_symbol() {
            Some(name) => env.lookup(name).ok_or_else(unrecognized)?,
            None => self.evaluate_expression(head, env)?,
        };

        if !operator.is_truthy() {
            return Err(unrecognized());
        }
        if !operator.is_callable() {
            return Err(Error::NotCallable {
                type_name: operator.type_name(),
            });
        }

        let values = args
            .iter()
            .map(|arg| self.evaluate_expression(arg, env))
            .collect::<Result<Vec<_>>>()?;

        self.apply(&operator, &values)
    }

    /// Apply a closure or built-in to already-evaluated arguments
    pub fn apply(&self, func: &Value, args: &[Value]) -> Result<Value> {
        match func {
            Value::Builtin(tool) => tool.call(args),
            Value::Function {
                params,
                body,
                closure,
                name,
            } => {
                if params.len() != args.len() {
                    tracing::warn!(
                        function = %func,
                        expected = params.len(),
                        got = args.len(),
                        "argument count differs from parameter count"
                    );
                }

                // Fresh copy of the capture per call; nothing leaks back out
                let mut call_env = Environment::clone(closure);
                if let Some(name) = name {
                    call_env.define(name.clone(), func.clone());
                }
                for (param, arg) in params.iter().zip(args) {
                    call_env.define(param.clone(), arg.clone());
                }

                self.nested(|| self.evaluate_expression(body, &mut call_env))
            }
            other => Err(Error::NotCallable {
                type_name: other.type_name(),
            }),
        }
    }
}

impl Default for LispEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(evaluator: &mut LispEvaluator, source: &str) -> Value {
        evaluator.evaluate(source).unwrap()
    }

    fn ints(ns: &[i64]) -> Value {
        Value::list(ns.iter().map(|n| Value::Int(*n)).collect())
    }

    #[test]
    fn test_special_form_lookup() {
        assert_eq!(SpecialForm::from_symbol("lambda"), Some(SpecialForm::Lambda));
        assert_eq!(SpecialForm::from_symbol("doall"), Some(SpecialForm::Doall));
        assert_eq!(SpecialForm::from_symbol("begin"), None);
        assert_eq!(SpecialForm::Quote.keyword(), "quote");
    }

    #[test]
    fn test_atoms_evaluate_to_themselves() {
        let mut e = LispEvaluator::new();
        assert_eq!(eval(&mut e, "42"), Value::Int(42));
        assert_eq!(eval(&mut e, "2.5"), Value::Float(2.5));
        assert_eq!(eval(&mut e, "\"hi\""), Value::string("hi"));
        assert_eq!(eval(&mut e, "nil"), Value::Null);
        assert_eq!(eval(&mut e, "true"), Value::Bool(true));
    }

    #[test]
    fn test_empty_list_evaluates_to_itself() {
        let mut e = LispEvaluator::new();
        assert_eq!(eval(&mut e, "()"), ints(&[]));
        assert_eq!(eval(&mut e, "(first (quote ()))"), Value::Null);
    }

    #[test]
    fn test_single_element_list_is_unwrapped() {
        let mut e = LispEvaluator::new();
        assert_eq!(eval(&mut e, "(+ (5) 2)"), Value::Int(7));
        // Only one level is unwrapped
        assert!(matches!(
            e.evaluate("(+ ((2)) 1)"),
            Err(Error::NotCallable { .. })
        ));
    }

    #[test]
    fn test_if_only_evaluates_taken_branch() {
        let mut e = LispEvaluator::new();
        assert_eq!(eval(&mut e, "(if true (define a 1) (define b 2))"), Value::Int(1));
        assert!(e.env.exists("a"));
        assert!(!e.env.exists("b"));
    }

    #[test]
    fn test_if_truthiness() {
        let mut e = LispEvaluator::new();
        assert_eq!(eval(&mut e, "(if 0 1 2)"), Value::Int(1));
        assert_eq!(eval(&mut e, "(if nil 1 2)"), Value::Int(2));
        assert_eq!(eval(&mut e, "(if false 1 2)"), Value::Int(2));
        assert_eq!(eval(&mut e, "(if (quote ()) 1 2)"), Value::Int(1));
        assert_eq!(eval(&mut e, "(if false 1)"), Value::Null);
    }

    #[test]
    fn test_doall_returns_last() {
        let mut e = LispEvaluator::new();
        assert_eq!(eval(&mut e, "(doall (define x 2) (define y 3) (* x y))"), Value::Int(6));
    }

    #[test]
    fn test_defn_binds_and_recurses() {
        let mut e = LispEvaluator::new();
        let f = eval(&mut e, "(defn fact (n) (if (<= n 1) 1 (* n (fact (- n 1)))))");
        assert!(f.is_callable());
        assert_eq!(eval(&mut e, "(fact 5)"), Value::Int(120));
    }

    #[test]
    fn test_closure_captures_snapshot() {
        let mut e = LispEvaluator::new();
        eval(&mut e, "(define y 1)");
        eval(&mut e, "(define get-y (lambda () y))");
        eval(&mut e, "(define y 2)");
        // `(get-y)` alone would unwrap to the symbol, so call with an argument
        assert_eq!(eval(&mut e, "(get-y 0)"), Value::Int(1));
    }

    #[test]
    fn test_define_inside_call_does_not_leak() {
        let mut e = LispEvaluator::new();
        eval(&mut e, "(defn f (x) (define inner x))");
        assert_eq!(eval(&mut e, "(f 7)"), Value::Int(7));
        assert!(!e.env.exists("inner"));
    }

    #[test]
    fn test_zip_shortest_arguments() {
        let mut e = LispEvaluator::new();
        assert_eq!(eval(&mut e, "((lambda (x y) x) 1)"), Value::Int(1));
        assert_eq!(eval(&mut e, "((lambda (x) x) 1 2 3)"), Value::Int(1));
        assert!(matches!(
            e.evaluate("((lambda (x y) y) 1)"),
            Err(Error::UnboundSymbol { .. })
        ));
    }

    #[test]
    fn test_unrecognized_operator() {
        let mut e = LispEvaluator::new();
        assert_eq!(
            e.evaluate("(nope 1 2)"),
            Err(Error::UnrecognizedOperator {
                operator: "nope".to_string()
            })
        );
        assert_eq!(
            e.evaluate("(nil 1 2)"),
            Err(Error::UnrecognizedOperator {
                operator: "nil".to_string()
            })
        );
    }

    #[test]
    fn test_unbound_symbol_as_value() {
        let mut e = LispEvaluator::new();
        assert_eq!(
            e.evaluate("(+ 1 missing)"),
            Err(Error::UnboundSymbol {
                name: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_not_callable() {
        let mut e = LispEvaluator::new();
        assert_eq!(
            e.evaluate("(1 2 3)"),
            Err(Error::NotCallable {
                type_name: "int".to_string()
            })
        );
    }

    #[test]
    fn test_malformed_forms() {
        let mut e = LispEvaluator::new();
        assert!(matches!(
            e.evaluate("(define 5 3)"),
            Err(Error::MalformedForm { .. })
        ));
        assert!(matches!(
            e.evaluate("(lambda x x)"),
            Err(Error::MalformedForm { .. })
        ));
        assert!(matches!(
            e.evaluate("(defn f (1) 1)"),
            Err(Error::MalformedForm { .. })
        ));
    }

    #[test]
    fn test_default_limit_on_small_stack() {
        let mut e = LispEvaluator::new();
        eval(&mut e, "(defn down (n) (if (< n 0) 0 (+ 1 (down (- n 1)))))");
        assert_eq!(eval(&mut e, "(down 250)"), Value::Int(251));
        assert_eq!(
            e.evaluate("(down 5000)"),
            Err(Error::RecursionLimit { limit: 256 })
        );
    }

    #[test]
    fn test_deeply_nested_arguments() {
        let depth = 2000;
        let source = format!("{}0{}", "(+ 1 ".repeat(depth), ")".repeat(depth));
        let mut e = LispEvaluator::new();
        assert_eq!(e.evaluate(&source).unwrap(), Value::Int(depth as i64));
    }

    #[test]
    fn test_unrecognized_operator_keeps_source_text() {
        let mut e = LispEvaluator::new();
        assert_eq!(
            e.evaluate("((if false 1 nil) 2)"),
            Err(Error::UnrecognizedOperator {
                operator: "(if false 1 nil)".to_string()
            })
        );
    }

    #[test]
    fn test_builtin_arity_checked_on_apply() {
        let mut e = LispEvaluator::new();
        assert_eq!(
            e.evaluate("(cons 1)"),
            Err(Error::ArityMismatch {
                name: "cons".to_string(),
                expected: "2".to_string(),
                got: 1,
            })
        );
        assert!(matches!(
            e.evaluate("(first (quote (1)) (quote (2)))"),
            Err(Error::ArityMismatch { got: 2, .. })
        ));
    }

    #[test]
    fn test_user_bindings() {
        let mut e = LispEvaluator::new();
        assert!(e.user_bindings().is_empty());
        eval(&mut e, "(define b 1)");
        eval(&mut e, "(define + 2)");
        eval(&mut e, "(defn a (x) x)");
        assert_eq!(e.user_bindings(), vec!["+", "a", "b"]);
        assert_eq!(e.registry().count(), 13);
    }

    #[test]
    fn test_recursion_limit() {
        let mut e = LispEvaluator::with_config(EvaluatorConfig::default().with_max_call_depth(16));
        eval(&mut e, "(defn forever (n) (forever n))");
        assert_eq!(
            e.evaluate("(forever 1)"),
            Err(Error::RecursionLimit { limit: 16 })
        );
        // Depth is restored after the failure
        assert_eq!(eval(&mut e, "((lambda (x) x) 3)"), Value::Int(3));
    }

    #[test]
    fn test_self_evaluating_eval_is_limited() {
        let mut e = LispEvaluator::with_config(EvaluatorConfig::default().with_max_call_depth(16));
        eval(&mut e, "(define loop (quote (eval loop)))");
        assert_eq!(
            e.evaluate("(eval loop)"),
            Err(Error::RecursionLimit { limit: 16 })
        );
    }

    #[test]
    fn test_balance_check_can_be_disabled() {
        let mut strict = LispEvaluator::new();
        assert!(matches!(
            strict.evaluate("(+ 1 (* 2 3)"),
            Err(Error::SyntaxError { .. })
        ));

        let mut lenient =
            LispEvaluator::with_config(EvaluatorConfig::default().with_balance_check(false));
        assert_eq!(lenient.evaluate("(+ 1 (* 2 3)").unwrap(), Value::Int(7));
    }

    #[test]
    fn test_execution_trace() {
        let mut e = LispEvaluator::new();
        eval(&mut e, "(define x 3)");
        eval(&mut e, "(define y (+ x 1))");
        assert_eq!(
            e.get_execution_trace(),
            vec![
                ("x".to_string(), Value::Int(3)),
                ("y".to_string(), Value::Int(4)),
            ]
        );
        e.clear_execution_trace();
        assert!(e.get_execution_trace().is_empty());
    }

    #[test]
    fn test_evaluate_in_separate_environment() {
        let e = LispEvaluator::new();
        let mut env = e.standard_env();
        e.evaluate_in("(define z 9)", &mut env).unwrap();
        assert_eq!(e.evaluate_in("(* z 2)", &mut env).unwrap(), Value::Int(18));
        assert!(!e.env.exists("z"));
    }

    #[test]
    fn test_custom_registry() {
        use crate::tools::Tool;

        struct Square;

        impl Tool for Square {
            fn name(&self) -> &str {
                "square"
            }

            fn description(&self) -> &str {
                "Square of an integer"
            }

            fn execute(&self, args: &[Value]) -> Result<Value> {
                let n = args.first().unwrap_or(&Value::Null).as_int()?;
                Ok(Value::Int(n * n))
            }
        }

        let mut registry = ToolRegistry::new();
        registry.register(Square);
        let mut e = LispEvaluator::with_registry(registry);
        assert_eq!(eval(&mut e, "(+ (square 3) 1)"), Value::Int(10));
        assert!(e.standard_env().exists("square"));
    }

    #[test]
    fn test_load_wraps_in_doall() {
        let mut e = LispEvaluator::new();
        let source = "(define a 2)\n(defn twice (x) (* x a))\n(twice 21)\n";
        assert_eq!(e.load(source).unwrap(), Value::Int(42));
        assert_eq!(e.load("   \n").unwrap(), Value::Null);
    }

    #[test]
    fn test_errors_keep_earlier_bindings() {
        let mut e = LispEvaluator::new();
        assert!(e.evaluate("(doall (define kept 1) (undefined-op 2))").is_err());
        assert_eq!(eval(&mut e, "kept"), Value::Int(1));
    }
}
