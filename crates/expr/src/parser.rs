//! Recursive-descent parser over the token stream.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! sum     := product (('+' | '-') product)*
//! product := unary (('*' | '/') unary)*
//! unary   := ('+' | '-') unary | power
//! power   := primary ('**' unary)?
//! primary := number | name | name '(' sum ')' | '(' sum ')'
//! ```
//!
//! `power` takes a `unary` on its right, which makes `**` right-associative
//! and lets `2**-1` parse, while `-x**2` still means `-(x**2)`.

use crate::{
    error::{ParseError, ParseErrorKind},
    expr::{BinaryOp, Builtin, Constant, Expr, Node},
    token::{Spanned, Token},
};

/// Module-style prefixes accepted in front of function and constant names.
const PREFIXES: [&str; 3] = ["np.", "numpy.", "math."];

/// Deepest nesting, and tallest syntax tree, a parsed expression may have.
///
/// Parsing and evaluation both recurse over the tree, so this bounds their
/// stack use.
const MAX_DEPTH: usize = 256;

/// A parsed subtree and its height.
struct Parsed {
    node: Node,
    height: usize,
}

impl Parsed {
    fn leaf(node: Node) -> Self {
        Self { node, height: 1 }
    }
}

pub(crate) struct Parser<'a> {
    tokens: &'a [Spanned],
    pos: usize,
    end: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Creates a parser; `end` is the source length, used for end-of-input errors.
    pub(crate) fn new(tokens: &'a [Spanned], end: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            end,
            depth: 0,
        }
    }

    /// Parses the whole token stream as one expression.
    pub(crate) fn parse(mut self) -> Result<Expr, ParseError> {
        let root = self.sum()?;
        match self.peek() {
            None => Ok(Expr::new(root.node)),
            Some(spanned) => Err(unexpected(spanned)),
        }
    }

    fn sum(&mut self) -> Result<Parsed, ParseError> {
        let mut lhs = self.product()?;
        while let Some(spanned) = self.peek() {
            let op = match spanned.token {
                Token::Plus => BinaryOp::Add,
                Token::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.product()?;
            lhs = binary(op, lhs, rhs, spanned.offset)?;
        }
        Ok(lhs)
    }

    fn product(&mut self) -> Result<Parsed, ParseError> {
        let mut lhs = self.unary()?;
        while let Some(spanned) = self.peek() {
            let op = match spanned.token {
                Token::Star => BinaryOp::Mul,
                Token::Slash => BinaryOp::Div,
                _ => break,
            };
            self.pos += 1;
            let rhs = self.unary()?;
            lhs = binary(op, lhs, rhs, spanned.offset)?;
        }
        Ok(lhs)
    }

    fn unary(&mut self) -> Result<Parsed, ParseError> {
        let Some(spanned) = self.peek() else {
            return self.power();
        };
        match spanned.token {
            Token::Minus => {
                self.pos += 1;
                let inner = self.nested(spanned.offset, Self::unary)?;
                Ok(Parsed {
                    height: grow(inner.height, spanned.offset)?,
                    node: Node::Neg(Box::new(inner.node)),
                })
            }
            Token::Plus => {
                self.pos += 1;
                self.nested(spanned.offset, Self::unary)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Parsed, ParseError> {
        let base = self.primary()?;
        match self.peek() {
            Some(spanned) if spanned.token == Token::Power => {
                self.pos += 1;
                let exponent = self.nested(spanned.offset, Self::unary)?;
                binary(BinaryOp::Pow, base, exponent, spanned.offset)
            }
            _ => Ok(base),
        }
    }

    fn primary(&mut self) -> Result<Parsed, ParseError> {
        let spanned = self.next()?;
        match &spanned.token {
            Token::Number(value) => Ok(Parsed::leaf(Node::Number(*value))),
            Token::LParen => {
                let inner = self.nested(spanned.offset, Self::sum)?;
                self.expect_rparen()?;
                Ok(inner)
            }
            Token::Ident(name) => self.named(name, spanned.offset),
            _ => Err(unexpected(spanned)),
        }
    }

    /// Resolves a name: the variable, a constant, or a function call.
    fn named(&mut self, name: &str, offset: usize) -> Result<Parsed, ParseError> {
        let is_call = matches!(self.peek_token(), Some(Token::LParen));
        let bare = strip_prefix(name);

        if is_call {
            let func = Builtin::from_name(bare).ok_or_else(|| {
                ParseError::new(ParseErrorKind::UnknownFunction(name.to_string()), offset)
            })?;
            self.pos += 1;
            let arg = self.nested(offset, Self::sum)?;
            self.expect_rparen()?;
            return Ok(Parsed {
                height: grow(arg.height, offset)?,
                node: Node::Call {
                    func,
                    arg: Box::new(arg.node),
                },
            });
        }

        if name == "x" {
            return Ok(Parsed::leaf(Node::Var));
        }
        if let Some(constant) = Constant::from_name(bare) {
            return Ok(Parsed::leaf(Node::Constant(constant)));
        }
        if Builtin::from_name(bare).is_some() {
            // A function name used without an argument list.
            return match self.peek() {
                Some(spanned) => Err(unexpected(spanned)),
                None => Err(ParseError::new(ParseErrorKind::UnexpectedEnd, self.end)),
            };
        }
        Err(ParseError::new(
            ParseErrorKind::UnknownIdentifier(name.to_string()),
            offset,
        ))
    }

    /// Runs `rule` one nesting level deeper, failing past [`MAX_DEPTH`].
    fn nested(
        &mut self,
        offset: usize,
        rule: fn(&mut Self) -> Result<Parsed, ParseError>,
    ) -> Result<Parsed, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(too_deep(offset));
        }
        self.depth += 1;
        let parsed = rule(self);
        self.depth -= 1;
        parsed
    }

    fn expect_rparen(&mut self) -> Result<(), ParseError> {
        let spanned = self.next()?;
        if spanned.token == Token::RParen {
            Ok(())
        } else {
            Err(unexpected(spanned))
        }
    }

    fn peek(&self) -> Option<&'a Spanned> {
        self.tokens.get(self.pos)
    }

    fn peek_token(&self) -> Option<&'a Token> {
        self.peek().map(|spanned| &spanned.token)
    }

    fn next(&mut self) -> Result<&'a Spanned, ParseError> {
        let spanned = self
            .peek()
            .ok_or_else(|| ParseError::new(ParseErrorKind::UnexpectedEnd, self.end))?;
        self.pos += 1;
        Ok(spanned)
    }
}

fn binary(op: BinaryOp, lhs: Parsed, rhs: Parsed, offset: usize) -> Result<Parsed, ParseError> {
    Ok(Parsed {
        height: grow(lhs.height.max(rhs.height), offset)?,
        node: Node::Binary {
            op,
            lhs: Box::new(lhs.node),
            rhs: Box::new(rhs.node),
        },
    })
}

/// Height of a node whose tallest child has `child_height`.
fn grow(child_height: usize, offset: usize) -> Result<usize, ParseError> {
    let height = child_height + 1;
    if height > MAX_DEPTH {
        Err(too_deep(offset))
    } else {
        Ok(height)
    }
}

fn too_deep(offset: usize) -> ParseError {
    ParseError::new(ParseErrorKind::TooDeep { limit: MAX_DEPTH }, offset)
}

fn unexpected(spanned: &Spanned) -> ParseError {
    ParseError::new(
        ParseErrorKind::UnexpectedToken(spanned.token.to_string()),
        spanned.offset,
    )
}

fn strip_prefix(name: &str) -> &str {
    PREFIXES
        .iter()
        .find_map(|prefix| name.strip_prefix(prefix))
        .unwrap_or(name)
}
