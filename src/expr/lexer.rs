use std::iter::Peekable;
use std::str::CharIndices;

use super::ParseError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    OParen,
    CParen,
}

impl Token {
    pub(crate) fn lexeme(&self) -> String {
        match self {
            Token::Number(n) => n.to_string(),
            Token::Ident(id) => id.clone(),
            Token::Plus => "+".into(),
            Token::Minus => "-".into(),
            Token::Star => "*".into(),
            Token::Slash => "/".into(),
            Token::Caret => "^".into(),
            Token::OParen => "(".into(),
            Token::CParen => ")".into(),
        }
    }

    /// Tokens that can start an operand, used for implicit multiplication.
    pub(crate) fn starts_operand(&self) -> bool {
        matches!(self, Token::Number(_) | Token::Ident(_) | Token::OParen)
    }
}

/// Token with the byte offset where it starts in the source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Spanned {
    pub token: Token,
    pub pos: usize,
}

pub(crate) struct Tokenizer<'a> {
    src: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.char_indices().peekable(),
        }
    }

    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut tokens = Vec::new();

        while let Some(&(pos, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                self.chars.next();
                continue;
            }

            let token = match ch {
                '+' => self.single(Token::Plus),
                '-' => self.single(Token::Minus),
                '/' => self.single(Token::Slash),
                '^' => self.single(Token::Caret),
                '(' => self.single(Token::OParen),
                ')' => self.single(Token::CParen),
                '*' => {
                    self.chars.next();
                    // `**` is a common spelling of exponentiation.
                    if let Some(&(_, '*')) = self.chars.peek() {
                        self.chars.next();
                        Token::Caret
                    } else {
                        Token::Star
                    }
                }
                c if c.is_ascii_digit() || c == '.' => self.number(pos)?,
                c if c.is_alphabetic() || c == '_' => self.identifier(pos),
                c => return Err(ParseError::UnexpectedChar { ch: c, pos }),
            };

            tokens.push(Spanned { token, pos });
        }

        Ok(tokens)
    }

    fn single(&mut self, token: Token) -> Token {
        self.chars.next();
        token
    }

    fn eat_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(&(_, c)) = self.chars.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            self.chars.next();
            count += 1;
        }
        count
    }

    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.src.len(), |&(i, _)| i)
    }

    fn number(&mut self, start: usize) -> Result<Token, ParseError> {
        let mut digits = self.eat_digits();

        if let Some(&(_, '.')) = self.chars.peek() {
            self.chars.next();
            digits += self.eat_digits();
        }

        if digits == 0 || matches!(self.chars.peek(), Some(&(_, '.'))) {
            while let Some(&(_, c)) = self.chars.peek() {
                if !(c.is_ascii_digit() || c == '.') {
                    break;
                }
                self.chars.next();
            }
            let end = self.offset();
            return Err(ParseError::InvalidNumber {
                text: self.src[start..end].to_string(),
                pos: start,
            });
        }

        // An exponent is only consumed when digits follow, so `2e` and
        // `2exp(x)` are read as implicit products with `e` and `exp`.
        if let Some(&(epos, 'e' | 'E')) = self.chars.peek() {
            let rest = &self.src[epos + 1..];
            let rest = rest
                .strip_prefix(|c: char| c == '+' || c == '-')
                .unwrap_or(rest);
            if rest.starts_with(|c: char| c.is_ascii_digit()) {
                self.chars.next();
                if let Some(&(_, '+' | '-')) = self.chars.peek() {
                    self.chars.next();
                }
                self.eat_digits();
            }
        }

        let end = self.offset();
        let text = &self.src[start..end];
        match text.parse::<f64>() {
            // Literals such as `1e400` overflow to infinity.
            Ok(value) if value.is_finite() => Ok(Token::Number(value)),
            _ => Err(ParseError::InvalidNumber {
                text: text.to_string(),
                pos: start,
            }),
        }
    }

    fn identifier(&mut self, start: usize) -> Token {
        while let Some(&(_, c)) = self.chars.peek() {
            if !(c.is_alphanumeric() || c == '_') {
                break;
            }
            self.chars.next();
        }

        let end = self.offset();
        Token::Ident(self.src[start..end].to_string())
    }
}
