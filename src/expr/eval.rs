use super::ast::{BinOp, Expr, Func};
use super::EvalError;

impl Expr {
    /// Evaluates the expression at `x`.
    ///
    /// Division by zero, arguments outside the domain of a function and
    /// overflowing intermediate results are reported as errors.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        if !x.is_finite() {
            return Err(EvalError::NonFiniteInput { x });
        }

        self.eval_at(x)
    }

    fn eval_at(&self, x: f64) -> Result<f64, EvalError> {
        let value = match self {
            Expr::Const(c) => *c,
            Expr::Var => x,
            Expr::Neg(e) => -e.eval_at(x)?,
            Expr::Binary(op, lhs, rhs) => {
                let l = lhs.eval_at(x)?;
                let r = rhs.eval_at(x)?;
                binary(*op, l, r, x)?
            }
            Expr::Call(func, arg) => call(*func, arg.eval_at(x)?)?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(EvalError::NonFinite { x })
        }
    }
}

fn binary(op: BinOp, l: f64, r: f64, x: f64) -> Result<f64, EvalError> {
    let value = match op {
        BinOp::Add => l + r,
        BinOp::Sub => l - r,
        BinOp::Mul => l * r,
        BinOp::Div => {
            if r == 0.0 {
                return Err(EvalError::DivisionByZero { x });
            }
            l / r
        }
        BinOp::Pow => pow(l, r, x)?,
    };

    Ok(value)
}

fn pow(base: f64, exponent: f64, x: f64) -> Result<f64, EvalError> {
    let integral = exponent.fract() == 0.0;

    if base == 0.0 && exponent < 0.0 {
        return Err(EvalError::DivisionByZero { x });
    }

    if base < 0.0 && !integral {
        return Err(EvalError::Domain {
            function: "pow",
            argument: base,
        });
    }

    if integral && exponent.abs() <= i32::MAX as f64 {
        Ok(base.powi(exponent as i32))
    } else {
        Ok(base.powf(exponent))
    }
}

fn call(func: Func, arg: f64) -> Result<f64, EvalError> {
    let domain = |ok: bool| {
        if ok {
            Ok(())
        } else {
            Err(EvalError::Domain {
                function: func.name(),
                argument: arg,
            })
        }
    };

    let value = match func {
        Func::Sin => arg.sin(),
        Func::Cos => arg.cos(),
        Func::Tan => arg.tan(),
        Func::Asin => {
            domain((-1.0..=1.0).contains(&arg))?;
            arg.asin()
        }
        Func::Acos => {
            domain((-1.0..=1.0).contains(&arg))?;
            arg.acos()
        }
        Func::Atan => arg.atan(),
        Func::Sinh => arg.sinh(),
        Func::Cosh => arg.cosh(),
        Func::Tanh => arg.tanh(),
        Func::Exp => arg.exp(),
        Func::Ln => {
            domain(arg > 0.0)?;
            arg.ln()
        }
        Func::Log10 => {
            domain(arg > 0.0)?;
            arg.log10()
        }
        Func::Log2 => {
            domain(arg > 0.0)?;
            arg.log2()
        }
        Func::Sqrt => {
            domain(arg >= 0.0)?;
            arg.sqrt()
        }
        Func::Abs => arg.abs(),
    };

    Ok(value)
}
