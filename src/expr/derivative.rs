//! Symbolic differentiation with respect to `x`.
//!
//! The derivative is assembled through simplifying constructors, so results
//! like `2 * x` come out instead of `2 * x^(2 - 1) * 1`.

use super::ast::{BinOp, Expr, Func};
use super::DerivativeError;

impl Expr {
    /// Computes d/dx of the expression.
    ///
    /// Implements the sum, product, quotient, power and chain rules together
    /// with the derivatives of all supported elementary functions except
    /// `abs`, which fails with [`DerivativeError::Unsupported`].
    pub fn derivative(&self) -> Result<Expr, DerivativeError> {
        let d = match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::Var => Expr::Const(1.0),
            Expr::Neg(u) => neg(u.derivative()?),
            Expr::Binary(op, u, v) => {
                let (u, v) = (u.as_ref(), v.as_ref());
                match op {
                    BinOp::Add => add(u.derivative()?, v.derivative()?),
                    BinOp::Sub => sub(u.derivative()?, v.derivative()?),
                    // (uv)' = u'v + uv'
                    BinOp::Mul => add(
                        mul(u.derivative()?, v.clone()),
                        mul(u.clone(), v.derivative()?),
                    ),
                    // (u/v)' = (u'v - uv') / v^2
                    BinOp::Div => div(
                        sub(
                            mul(u.derivative()?, v.clone()),
                            mul(u.clone(), v.derivative()?),
                        ),
                        pow(v.clone(), Expr::Const(2.0)),
                    ),
                    BinOp::Pow => power_rule(u, v)?,
                }
            }
            Expr::Call(func, u) => mul(outer(*func, u)?, u.derivative()?),
        };

        Ok(d)
    }
}

fn power_rule(u: &Expr, v: &Expr) -> Result<Expr, DerivativeError> {
    let d = if !v.contains_var() {
        // (u^c)' = c u^(c - 1) u'
        mul(
            mul(v.clone(), pow(u.clone(), sub(v.clone(), Expr::Const(1.0)))),
            u.derivative()?,
        )
    } else if !u.contains_var() {
        // (a^v)' = a^v ln(a) v'
        mul(
            mul(pow(u.clone(), v.clone()), call(Func::Ln, u.clone())),
            v.derivative()?,
        )
    } else {
        // (u^v)' = u^v (v' ln(u) + v u' / u)
        mul(
            pow(u.clone(), v.clone()),
            add(
                mul(v.derivative()?, call(Func::Ln, u.clone())),
                div(mul(v.clone(), u.derivative()?), u.clone()),
            ),
        )
    };

    Ok(d)
}

/// Derivative of the outer function evaluated at the inner expression `u`.
fn outer(func: Func, u: &Expr) -> Result<Expr, DerivativeError> {
    let u = u.clone();
    let one = || Expr::Const(1.0);
    let square = |e: Expr| pow(e, Expr::Const(2.0));

    let d = match func {
        Func::Sin => call(Func::Cos, u),
        Func::Cos => neg(call(Func::Sin, u)),
        Func::Tan => div(one(), square(call(Func::Cos, u))),
        Func::Asin => div(one(), call(Func::Sqrt, sub(one(), square(u)))),
        Func::Acos => neg(div(one(), call(Func::Sqrt, sub(one(), square(u))))),
        Func::Atan => div(one(), add(one(), square(u))),
        Func::Sinh => call(Func::Cosh, u),
        Func::Cosh => call(Func::Sinh, u),
        Func::Tanh => div(one(), square(call(Func::Cosh, u))),
        Func::Exp => call(Func::Exp, u),
        Func::Ln => div(one(), u),
        Func::Log10 => div(one(), mul(u, call(Func::Ln, Expr::Const(10.0)))),
        Func::Log2 => div(one(), mul(u, call(Func::Ln, Expr::Const(2.0)))),
        Func::Sqrt => div(one(), mul(Expr::Const(2.0), call(Func::Sqrt, u))),
        Func::Abs => {
            return Err(DerivativeError::Unsupported {
                construct: format!("{}({})", func, u),
            })
        }
    };

    Ok(d)
}

fn call(func: Func, arg: Expr) -> Expr {
    Expr::Call(func, Box::new(arg))
}

fn binary(op: BinOp, lhs: Expr, rhs: Expr) -> Expr {
    Expr::Binary(op, Box::new(lhs), Box::new(rhs))
}

fn is_const(e: &Expr, value: f64) -> bool {
    e.as_const() == Some(value)
}

pub(crate) fn neg(e: Expr) -> Expr {
    match e {
        Expr::Const(c) => Expr::Const(-c),
        Expr::Neg(inner) => *inner,
        e => Expr::Neg(Box::new(e)),
    }
}

pub(crate) fn add(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_const(), rhs.as_const()) {
        (Some(a), Some(b)) => Expr::Const(a + b),
        (Some(a), _) if a == 0.0 => rhs,
        (_, Some(b)) if b == 0.0 => lhs,
        // a + (-b) reads better as a - b
        _ => match rhs {
            Expr::Neg(inner) => binary(BinOp::Sub, lhs, *inner),
            rhs => binary(BinOp::Add, lhs, rhs),
        },
    }
}

pub(crate) fn sub(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_const(), rhs.as_const()) {
        (Some(a), Some(b)) => Expr::Const(a - b),
        (_, Some(b)) if b == 0.0 => lhs,
        (Some(a), _) if a == 0.0 => neg(rhs),
        _ if lhs == rhs => Expr::Const(0.0),
        _ => binary(BinOp::Sub, lhs, rhs),
    }
}

pub(crate) fn mul(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_const(), rhs.as_const()) {
        (Some(a), Some(b)) => Expr::Const(a * b),
        (Some(a), _) | (_, Some(a)) if a == 0.0 => Expr::Const(0.0),
        (Some(a), _) if a == 1.0 => rhs,
        (_, Some(b)) if b == 1.0 => lhs,
        (Some(a), _) if a == -1.0 => neg(rhs),
        (_, Some(b)) if b == -1.0 => neg(lhs),
        // Keep constant factors in front.
        (None, Some(_)) => mul(rhs, lhs),
        _ => match (lhs, rhs) {
            (Expr::Neg(l), r) => neg(mul(*l, r)),
            (l, Expr::Neg(r)) => neg(mul(l, *r)),
            // a * (b * y) => (ab) * y
            (Expr::Const(a), Expr::Binary(BinOp::Mul, l, r)) => match *l {
                Expr::Const(b) => mul(Expr::Const(a * b), *r),
                l => binary(BinOp::Mul, Expr::Const(a), binary(BinOp::Mul, l, *r)),
            },
            (l, r) => binary(BinOp::Mul, l, r),
        },
    }
}

pub(crate) fn div(lhs: Expr, rhs: Expr) -> Expr {
    match (lhs.as_const(), rhs.as_const()) {
        (Some(a), Some(b)) if b != 0.0 => Expr::Const(a / b),
        (Some(a), _) if a == 0.0 && !is_const(&rhs, 0.0) => Expr::Const(0.0),
        (_, Some(b)) if b == 1.0 => lhs,
        _ => match lhs {
            Expr::Neg(l) => neg(div(*l, rhs)),
            lhs => binary(BinOp::Div, lhs, rhs),
        },
    }
}

pub(crate) fn pow(base: Expr, exponent: Expr) -> Expr {
    match (base.as_const(), exponent.as_const()) {
        (_, Some(b)) if b == 0.0 => Expr::Const(1.0),
        (_, Some(b)) if b == 1.0 => base,
        (Some(a), Some(b)) if a.powf(b).is_finite() => Expr::Const(a.powf(b)),
        _ => binary(BinOp::Pow, base, exponent),
    }
}
