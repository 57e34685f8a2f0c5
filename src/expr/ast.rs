use std::f64::consts;
use std::fmt;

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `a + b`
    Add,
    /// `a - b`
    Sub,
    /// `a * b`
    Mul,
    /// `a / b`
    Div,
    /// `a ^ b`
    Pow,
}

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Pow => "^",
        }
    }
}

/// Elementary functions of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Func {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Inverse sine.
    Asin,
    /// Inverse cosine.
    Acos,
    /// Inverse tangent.
    Atan,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Natural exponential.
    Exp,
    /// Natural logarithm (`ln` or `log`).
    Ln,
    /// Decimal logarithm.
    Log10,
    /// Binary logarithm.
    Log2,
    /// Square root.
    Sqrt,
    /// Absolute value.
    Abs,
}

impl Func {
    /// Looks up a function by the name used in expressions.
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "asin" | "arcsin" => Func::Asin,
            "acos" | "arccos" => Func::Acos,
            "atan" | "arctan" => Func::Atan,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "exp" => Func::Exp,
            "ln" | "log" => Func::Ln,
            "log10" => Func::Log10,
            "log2" => Func::Log2,
            "sqrt" => Func::Sqrt,
            "abs" => Func::Abs,
            _ => return None,
        };

        Some(func)
    }

    /// Canonical name of the function.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Asin => "asin",
            Func::Acos => "acos",
            Func::Atan => "atan",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Exp => "exp",
            Func::Ln => "ln",
            Func::Log10 => "log10",
            Func::Log2 => "log2",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Named constants recognized by the parser.
pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e" => Some(consts::E),
        _ => None,
    }
}

/// Syntax tree of an expression in the single variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Numeric constant.
    Const(f64),
    /// The variable `x`.
    Var,
    /// Unary minus.
    Neg(Box<Expr>),
    /// Binary operation.
    Binary(BinOp, Box<Expr>, Box<Expr>),
    /// Function call.
    Call(Func, Box<Expr>),
}

// Binding strength used when printing; higher binds tighter.
const PREC_SUM: u8 = 1;
const PREC_PRODUCT: u8 = 2;
const PREC_UNARY: u8 = 3;
const PREC_POWER: u8 = 4;
const PREC_ATOM: u8 = 5;

impl Expr {
    /// Tests whether the expression depends on `x`.
    pub fn contains_var(&self) -> bool {
        match self {
            Expr::Const(_) => false,
            Expr::Var => true,
            Expr::Neg(e) | Expr::Call(_, e) => e.contains_var(),
            Expr::Binary(_, lhs, rhs) => lhs.contains_var() || rhs.contains_var(),
        }
    }

    /// Returns the value if the expression is a plain constant.
    pub fn as_const(&self) -> Option<f64> {
        match *self {
            Expr::Const(c) => Some(c),
            _ => None,
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Const(c) if c.is_sign_negative() => PREC_UNARY,
            Expr::Const(_) | Expr::Var | Expr::Call(..) => PREC_ATOM,
            Expr::Neg(_) => PREC_UNARY,
            Expr::Binary(BinOp::Add | BinOp::Sub, ..) => PREC_SUM,
            Expr::Binary(BinOp::Mul | BinOp::Div, ..) => PREC_PRODUCT,
            Expr::Binary(BinOp::Pow, ..) => PREC_POWER,
        }
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>, min_prec: u8) -> fmt::Result {
        if self.precedence() < min_prec {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Const(c) if *c == consts::PI => f.write_str("pi"),
            Expr::Const(c) if *c == consts::E => f.write_str("e"),
            Expr::Const(c) => write!(f, "{}", c),
            Expr::Var => f.write_str("x"),
            Expr::Neg(e) => {
                f.write_str("-")?;
                e.fmt_operand(f, PREC_UNARY)
            }
            Expr::Call(func, arg) => write!(f, "{}({})", func, arg),
            Expr::Binary(op, lhs, rhs) => {
                // Left-associative operators need parentheses on the right
                // for the same binding strength, power is right-associative.
                let (left, right) = match op {
                    BinOp::Add => (PREC_SUM, PREC_SUM),
                    BinOp::Sub => (PREC_SUM, PREC_PRODUCT),
                    BinOp::Mul => (PREC_PRODUCT, PREC_PRODUCT),
                    BinOp::Div => (PREC_PRODUCT, PREC_UNARY),
                    BinOp::Pow => (PREC_ATOM, PREC_UNARY),
                };

                lhs.fmt_operand(f, left)?;
                match op {
                    BinOp::Pow => f.write_str("^")?,
                    _ => write!(f, " {} ", op.symbol())?,
                }
                rhs.fmt_operand(f, right)
            }
        }
    }
}
