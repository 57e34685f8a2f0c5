use super::ast::{constant, BinOp, Expr, Func};
use super::lexer::{Spanned, Token, Tokenizer};
use super::ParseError;

/// Parses the source text into a syntax tree.
///
/// Grammar, loosest binding first:
///
/// ```text
/// expr    := term (('+' | '-') term)*
/// term    := unary (('*' | '/') unary | <implicit> unary)*
/// unary   := ('-' | '+') unary | power
/// power   := primary ('^' unary)?
/// primary := number | identifier | identifier '(' expr ')' | '(' expr ')'
/// ```
pub(crate) fn parse(src: &str) -> Result<Expr, ParseError> {
    let tokens = Tokenizer::new(src).tokenize()?;

    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        tokens,
        pos: 0,
        end: src.len(),
        nesting: 0,
    };
    let node = parser.expr()?;

    match parser.peek() {
        None => Ok(node.expr),
        Some(spanned) if spanned.token == Token::CParen => Err(ParseError::UnmatchedParen {
            pos: spanned.pos,
        }),
        Some(spanned) => Err(unexpected(spanned)),
    }
}

/// Limit on both the depth of the syntax tree and the nesting of the input.
///
/// Evaluation, differentiation and display all recurse over the tree.
pub(crate) const MAX_DEPTH: usize = 256;

fn unexpected(spanned: &Spanned) -> ParseError {
    ParseError::UnexpectedToken {
        found: spanned.token.lexeme(),
        pos: spanned.pos,
    }
}

/// Subtree together with its depth.
struct Node {
    expr: Expr,
    depth: usize,
}

impl Node {
    fn leaf(expr: Expr) -> Self {
        Self { expr, depth: 1 }
    }

    fn wrap(expr: Expr, depth: usize, pos: usize) -> Result<Self, ParseError> {
        if depth > MAX_DEPTH {
            return Err(ParseError::TooDeep { pos });
        }

        Ok(Self { expr, depth })
    }

    fn binary(op: BinOp, lhs: Node, rhs: Node, pos: usize) -> Result<Self, ParseError> {
        let depth = lhs.depth.max(rhs.depth) + 1;
        Self::wrap(
            Expr::Binary(op, Box::new(lhs.expr), Box::new(rhs.expr)),
            depth,
            pos,
        )
    }
}

struct Parser {
    tokens: Vec<Spanned>,
    pos: usize,
    end: usize,
    nesting: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&Token> {
        self.peek().map(|s| &s.token)
    }

    fn offset(&self) -> usize {
        self.peek().map_or(self.end, |s| s.pos)
    }

    fn advance(&mut self) -> Option<Spanned> {
        let spanned = self.tokens.get(self.pos).cloned();
        if spanned.is_some() {
            self.pos += 1;
        }
        spanned
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.term()?;

        loop {
            let op = match self.peek_token() {
                Some(Token::Plus) => BinOp::Add,
                Some(Token::Minus) => BinOp::Sub,
                _ => return Ok(lhs),
            };
            let pos = self.offset();
            self.advance();

            let rhs = self.term()?;
            lhs = Node::binary(op, lhs, rhs, pos)?;
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut lhs = self.unary()?;

        loop {
            let pos = self.offset();
            let op = match self.peek_token() {
                Some(Token::Star) => {
                    self.advance();
                    BinOp::Mul
                }
                Some(Token::Slash) => {
                    self.advance();
                    BinOp::Div
                }
                // Implicit multiplication such as `2x` or `3(x + 1)`.
                Some(token) if token.starts_operand() => BinOp::Mul,
                _ => return Ok(lhs),
            };

            let rhs = self.unary()?;
            lhs = Node::binary(op, lhs, rhs, pos)?;
        }
    }

    // Every recursive path of the grammar passes through here.
    fn unary(&mut self) -> Result<Node, ParseError> {
        let pos = self.offset();
        self.nesting += 1;
        if self.nesting > MAX_DEPTH {
            return Err(ParseError::TooDeep { pos });
        }

        let node = self.signed(pos);
        self.nesting -= 1;
        node
    }

    fn signed(&mut self, pos: usize) -> Result<Node, ParseError> {
        match self.peek_token() {
            Some(Token::Minus) => {
                self.advance();
                let inner = self.unary()?;
                Node::wrap(Expr::Neg(Box::new(inner.expr)), inner.depth + 1, pos)
            }
            Some(Token::Plus) => {
                self.advance();
                self.unary()
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Node, ParseError> {
        let base = self.primary()?;

        if let Some(Token::Caret) = self.peek_token() {
            let pos = self.offset();
            self.advance();
            // Right associative, and allows a signed exponent as in `2^-3`.
            let exponent = self.unary()?;
            return Node::binary(BinOp::Pow, base, exponent, pos);
        }

        Ok(base)
    }

    fn primary(&mut self) -> Result<Node, ParseError> {
        let spanned = self.advance().ok_or(ParseError::UnexpectedEnd)?;

        match spanned.token {
            Token::Number(n) => Ok(Node::leaf(Expr::Const(n))),
            Token::OParen => {
                let inner = self.expr()?;
                self.close(spanned.pos)?;
                Ok(inner)
            }
            Token::Ident(ref name) if name == "x" => Ok(Node::leaf(Expr::Var)),
            Token::Ident(ref name) => {
                if let Some(value) = constant(name) {
                    return Ok(Node::leaf(Expr::Const(value)));
                }

                let func = Func::from_name(name).ok_or_else(|| ParseError::UnknownIdentifier {
                    name: name.clone(),
                    pos: spanned.pos,
                })?;

                match self.advance() {
                    Some(Spanned {
                        token: Token::OParen,
                        pos,
                    }) => {
                        let arg = self.expr()?;
                        self.close(pos)?;
                        Node::wrap(
                            Expr::Call(func, Box::new(arg.expr)),
                            arg.depth + 1,
                            spanned.pos,
                        )
                    }
                    _ => Err(ParseError::MissingArgument {
                        name: name.clone(),
                        pos: spanned.pos,
                    }),
                }
            }
            _ => Err(unexpected(&spanned)),
        }
    }

    fn close(&mut self, open: usize) -> Result<(), ParseError> {
        match self.advance() {
            Some(Spanned {
                token: Token::CParen,
                ..
            }) => Ok(()),
            Some(other) => Err(unexpected(&other)),
            None => Err(ParseError::UnclosedParen { pos: open }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> Box<Expr> {
        Box::new(Expr::Const(n))
    }

    fn var() -> Box<Expr> {
        Box::new(Expr::Var)
    }

    #[test]
    fn precedence() {
        assert_eq!(
            parse("x^2 - 4").unwrap(),
            Expr::Binary(
                BinOp::Sub,
                Box::new(Expr::Binary(BinOp::Pow, var(), num(2.0))),
                num(4.0)
            )
        );
        assert_eq!(
            parse("1 + 2 * x").unwrap(),
            Expr::Binary(
                BinOp::Add,
                num(1.0),
                Box::new(Expr::Binary(BinOp::Mul, num(2.0), var()))
            )
        );
    }

    #[test]
    fn unary_minus_and_power() {
        // -2^2 is -(2^2)
        assert_eq!(
            parse("-2^2").unwrap(),
            Expr::Neg(Box::new(Expr::Binary(BinOp::Pow, num(2.0), num(2.0))))
        );
        // 2^-3 is 2^(-3)
        assert_eq!(
            parse("2^-3").unwrap(),
            Expr::Binary(BinOp::Pow, num(2.0), Box::new(Expr::Neg(num(3.0))))
        );
        // 2^3^2 is 2^(3^2)
        assert_eq!(
            parse("2^3^2").unwrap(),
            Expr::Binary(
                BinOp::Pow,
                num(2.0),
                Box::new(Expr::Binary(BinOp::Pow, num(3.0), num(2.0)))
            )
        );
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(parse("2x").unwrap(), Expr::Binary(BinOp::Mul, num(2.0), var()));
        assert_eq!(parse("2x^2").unwrap(), parse("2 * x^2").unwrap());
        assert_eq!(parse("3(x + 1)").unwrap(), parse("3 * (x + 1)").unwrap());
        assert_eq!(parse("2sin(x)").unwrap(), parse("2 * sin(x)").unwrap());
    }

    #[test]
    fn functions_and_constants() {
        assert_eq!(
            parse("sin(pi * x)").unwrap(),
            Expr::Call(
                Func::Sin,
                Box::new(Expr::Binary(
                    BinOp::Mul,
                    num(std::f64::consts::PI),
                    var()
                ))
            )
        );
        assert_eq!(parse("log(x)").unwrap(), parse("ln(x)").unwrap());
    }

    #[test]
    fn errors() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("x +"), Err(ParseError::UnexpectedEnd));
        assert_eq!(parse("(x + 1"), Err(ParseError::UnclosedParen { pos: 0 }));
        assert_eq!(parse("x + 1)"), Err(ParseError::UnmatchedParen { pos: 5 }));
        assert_eq!(
            parse("y + 1"),
            Err(ParseError::UnknownIdentifier {
                name: "y".into(),
                pos: 0
            })
        );
        assert_eq!(
            parse("sin x"),
            Err(ParseError::MissingArgument {
                name: "sin".into(),
                pos: 0
            })
        );
        assert_eq!(
            parse("x * / 2"),
            Err(ParseError::UnexpectedToken {
                found: "/".into(),
                pos: 4
            })
        );
    }

    #[test]
    fn nesting_limit() {
        let parens = format!("{}x{}", "(".repeat(5000), ")".repeat(5000));
        assert_eq!(parse(&parens), Err(ParseError::TooDeep { pos: 256 }));

        let negations = format!("{}x", "-".repeat(5000));
        assert_eq!(parse(&negations), Err(ParseError::TooDeep { pos: 256 }));

        let calls = format!("{}x{}", "sin(".repeat(1000), ")".repeat(1000));
        assert!(matches!(parse(&calls), Err(ParseError::TooDeep { .. })));

        let exponents = vec!["2"; 1000].join("^");
        assert!(matches!(parse(&exponents), Err(ParseError::TooDeep { .. })));

        let shallow = format!("{}x + 1{}", "(".repeat(100), ")".repeat(100));
        assert_eq!(parse(&shallow), parse("x + 1"));
    }

    #[test]
    fn chain_limit() {
        // Left-deep chains are bounded by tree depth, not by nesting.
        let sum = vec!["x"; 20000].join("+");
        assert_eq!(parse(&sum), Err(ParseError::TooDeep { pos: 511 }));

        let product = vec!["x"; 20000].join(" * ");
        assert!(matches!(parse(&product), Err(ParseError::TooDeep { .. })));

        let implicit = "2".to_string() + &" x".repeat(1000);
        assert!(matches!(parse(&implicit), Err(ParseError::TooDeep { .. })));

        let sum = vec!["x"; MAX_DEPTH].join("+");
        assert!(parse(&sum).is_ok());
    }
}
