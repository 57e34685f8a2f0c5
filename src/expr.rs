//! Expressions in a single variable `x`.
//!
//! Formulas are tokenized, parsed into a syntax tree ([`Expr`]) and evaluated
//! recursively. Syntax and evaluation problems are reported as errors, never
//! as panics or silently returned `NaN` values.
//!
//! ```rust
//! use numeth::Expression;
//!
//! let f = Expression::parse("x^2 - 4").unwrap();
//! assert_eq!(f.eval(3.0), Ok(5.0));
//!
//! let df = f.derivative().unwrap();
//! assert_eq!(df.to_string(), "2 * x");
//! ```
//!
//! Supported syntax: decimal numbers (`3.4e-2`), the constants `pi` and `e`,
//! operators `+ - * / ^` (`**` is a synonym for `^`), implicit multiplication
//! (`2x`, `3(x + 1)`, `2sin(x)`) and the functions `sin`, `cos`, `tan`,
//! `asin`, `acos`, `atan`, `sinh`, `cosh`, `tanh`, `exp`, `ln` (also `log`),
//! `log10`, `log2`, `sqrt` and `abs`.

mod ast;
mod derivative;
mod eval;
mod lexer;
mod parser;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use ast::{BinOp, Expr, Func};

/// Error returned when the expression text cannot be parsed.
///
/// Positions are byte offsets into the source text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Input contains no tokens.
    #[error("expression is empty")]
    Empty,
    /// Input ends where an operand was expected.
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    /// Character that is not part of the syntax.
    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar {
        /// The character.
        ch: char,
        /// Its position.
        pos: usize,
    },
    /// Malformed numeric literal.
    #[error("invalid number '{text}' at {pos}")]
    InvalidNumber {
        /// The literal text.
        text: String,
        /// Its position.
        pos: usize,
    },
    /// Identifier that is neither `x`, a constant nor a function.
    #[error("unknown identifier '{name}' at {pos}")]
    UnknownIdentifier {
        /// The identifier.
        name: String,
        /// Its position.
        pos: usize,
    },
    /// Function name not followed by a parenthesized argument.
    #[error("function '{name}' at {pos} requires an argument in parentheses")]
    MissingArgument {
        /// The function name.
        name: String,
        /// Its position.
        pos: usize,
    },
    /// Opening parenthesis without a closing one.
    #[error("unclosed parenthesis at {pos}")]
    UnclosedParen {
        /// Position of the opening parenthesis.
        pos: usize,
    },
    /// Closing parenthesis without an opening one.
    #[error("unmatched parenthesis at {pos}")]
    UnmatchedParen {
        /// Position of the closing parenthesis.
        pos: usize,
    },
    /// Token in a position where it is not allowed.
    #[error("unexpected '{found}' at {pos}")]
    UnexpectedToken {
        /// The token text.
        found: String,
        /// Its position.
        pos: usize,
    },
    /// Nesting or operator chain exceeds the supported depth.
    #[error("expression is nested too deeply at {pos}")]
    TooDeep {
        /// Position where the limit was reached.
        pos: usize,
    },
}

/// Error returned when an expression cannot be evaluated at a point.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// Division by zero.
    #[error("division by zero at x = {x}")]
    DivisionByZero {
        /// The point of evaluation.
        x: f64,
    },
    /// Argument outside of the domain of a function.
    #[error("{function} is not defined for {argument}")]
    Domain {
        /// Name of the function.
        function: &'static str,
        /// The offending argument.
        argument: f64,
    },
    /// Result overflowed or is otherwise not a finite number.
    #[error("result is not finite at x = {x}")]
    NonFinite {
        /// The point of evaluation.
        x: f64,
    },
    /// The point of evaluation itself is not finite.
    #[error("cannot evaluate at non-finite x = {x}")]
    NonFiniteInput {
        /// The point of evaluation.
        x: f64,
    },
}

/// Error returned when an expression cannot be differentiated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DerivativeError {
    /// The expression contains a construct without a derivative rule.
    #[error("no derivative rule for {construct}")]
    Unsupported {
        /// Display form of the construct.
        construct: String,
    },
}

/// Error returned from [`evaluate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    /// Parsing failed.
    #[error("{0}")]
    Parse(#[from] ParseError),
    /// Evaluation failed.
    #[error("{0}")]
    Eval(#[from] EvalError),
}

/// Parsed expression together with its source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    ast: Expr,
}

impl Expression {
    /// Parses the expression text.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let ast = parser::parse(text)?;

        Ok(Self {
            source: text.trim().to_string(),
            ast,
        })
    }

    /// Wraps a syntax tree. The source text is its display form.
    pub fn from_ast(ast: Expr) -> Self {
        Self {
            source: ast.to_string(),
            ast,
        }
    }

    /// Evaluates the expression at `x`.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.ast.eval(x)
    }

    /// Computes the derivative with respect to `x`.
    pub fn derivative(&self) -> Result<Self, DerivativeError> {
        self.ast.derivative().map(Self::from_ast)
    }

    /// Text the expression was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Syntax tree of the expression.
    pub fn ast(&self) -> &Expr {
        &self.ast
    }
}

impl FromStr for Expression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ast)
    }
}

/// Parses `text` and evaluates it at `x`.
pub fn evaluate(text: &str, x: f64) -> Result<f64, ExprError> {
    let expr = Expression::parse(text)?;
    Ok(expr.eval(x)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;
    use std::f64::consts::{E, PI};

    fn eval(src: &str, x: f64) -> f64 {
        evaluate(src, x).unwrap()
    }

    #[test]
    fn arithmetic() {
        assert_abs_diff_eq!(eval("3+4*2/(1-5)^2^3", 0.0), 3.0001220703125);
        assert_abs_diff_eq!(eval("x^2 - 4", 3.0), 5.0);
        assert_abs_diff_eq!(eval("-2^2", 0.0), -4.0);
        assert_abs_diff_eq!(eval("(-2)^2", 0.0), 4.0);
        assert_abs_diff_eq!(eval("2^-1", 0.0), 0.5);
        assert_abs_diff_eq!(eval("2x + 3(x - 1)", 2.0), 7.0);
        assert_abs_diff_eq!(eval("x**3", 2.0), 8.0);
        assert_abs_diff_eq!(eval("10 - 4 - 3", 0.0), 3.0);
        assert_abs_diff_eq!(eval("12 / 3 / 2", 0.0), 2.0);
    }

    #[test]
    fn functions_and_constants() {
        assert_abs_diff_eq!(eval("sin(pi / 2)", 0.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("ln(e)", 0.0), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("log(e^2)", 0.0), 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("log10(1000)", 0.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("sqrt(x) + abs(-x)", 4.0), 6.0);
        assert_abs_diff_eq!(eval("2cos(x)", PI), -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eval("exp(x)", 1.0), E, epsilon = 1e-12);
    }

    #[test]
    fn evaluation_errors() {
        assert_eq!(
            evaluate("1 / x", 0.0),
            Err(ExprError::Eval(EvalError::DivisionByZero { x: 0.0 }))
        );
        assert_eq!(
            evaluate("ln(x)", -1.0),
            Err(ExprError::Eval(EvalError::Domain {
                function: "ln",
                argument: -1.0
            }))
        );
        assert_eq!(
            evaluate("sqrt(x - 5)", 1.0),
            Err(ExprError::Eval(EvalError::Domain {
                function: "sqrt",
                argument: -4.0
            }))
        );
        assert_eq!(
            evaluate("asin(x)", 2.0),
            Err(ExprError::Eval(EvalError::Domain {
                function: "asin",
                argument: 2.0
            }))
        );
        assert_eq!(
            evaluate("exp(x)", 1000.0),
            Err(ExprError::Eval(EvalError::NonFinite { x: 1000.0 }))
        );
        assert_eq!(
            evaluate("x", f64::NAN).map_err(|err| matches!(
                err,
                ExprError::Eval(EvalError::NonFiniteInput { .. })
            )),
            Err(true)
        );
    }

    #[test]
    fn display_is_reparsable() {
        let cases = [
            "x^2 - 4",
            "(x - 1) * (x + 2)",
            "x - (x - 1)",
            "x / (2 * x)",
            "-(x + 1)^2",
            "2^(x + 1)",
            "(2^3)^x",
            "sin(pi * x) / exp(-x)",
        ];

        for src in cases {
            let expr = Expression::parse(src).unwrap();
            let reparsed = Expression::parse(&expr.to_string()).unwrap();
            assert_eq!(expr.ast(), reparsed.ast(), "{}", src);
        }
    }

    #[test]
    fn keeps_source() {
        let expr: Expression = "  2x^2 ".parse().unwrap();
        assert_eq!(expr.source(), "2x^2");
        assert_eq!(expr.to_string(), "2 * x^2");
    }

    #[test]
    fn derivative_is_expression() {
        let df = Expression::parse("x^3").unwrap().derivative().unwrap();
        assert_eq!(df.source(), "3 * x^2");
        assert_abs_diff_eq!(df.eval(2.0).unwrap(), 12.0);
    }

    #[test]
    fn deep_input() {
        let sum = vec!["x"; 20000].join("+");
        assert!(matches!(
            evaluate(&sum, 1.0),
            Err(ExprError::Parse(ParseError::TooDeep { .. }))
        ));

        let parens = format!("{}x{}", "(".repeat(5000), ")".repeat(5000));
        assert!(matches!(
            Expression::parse(&parens),
            Err(ParseError::TooDeep { .. })
        ));

        // The deepest accepted tree still evaluates and differentiates.
        let f = Expression::parse(&vec!["x"; 256].join("+")).unwrap();
        assert_abs_diff_eq!(f.eval(1.0).unwrap(), 256.0);
        let df = f.derivative().unwrap();
        assert_abs_diff_eq!(df.eval(1.0).unwrap(), 256.0);
    }
}
