//! Safe parsing and evaluation of single-variable arithmetic expressions.
//!
//! Expressions are tokenized, parsed into a syntax tree, and evaluated by
//! walking that tree. Nothing is ever executed as code, so untrusted input
//! can only ever produce a number or a [`ParseError`].
//!
//! ```
//! use rootline_core::Function;
//!
//! let f = rootline_expr::parse("x**2 - 4").unwrap();
//! assert_eq!(f.eval(3.0), 5.0);
//! ```
//!
//! # Syntax
//!
//! - numbers: `2`, `0.5`, `.5`, `5.`, `1e-6`
//! - the variable `x` and the constants `pi` and `e`
//! - `+`, `-`, `*`, `/`, and power as `**` or `^`
//! - unary `+` and `-`; power binds tighter, so `-x**2` is `-(x**2)`
//! - parentheses and single-argument calls: `sin`, `cos`, `tan`, `asin`,
//!   `acos`, `atan`, `sinh`, `cosh`, `tanh`, `exp`, `ln`, `log` (natural),
//!   `log10`, `log2`, `sqrt`, `cbrt`, `abs`
//!
//! Function and constant names may carry a `np.`, `numpy.` or `math.`
//! prefix, so `np.sin(x)` and `math.pi` are accepted.
//!
//! Nesting (parentheses, calls, unary signs, powers) and the height of the
//! syntax tree are capped at 256 levels. Deeper input is rejected with
//! [`ParseErrorKind::TooDeep`] instead of exhausting the stack.

mod error;
mod expr;
mod parser;
mod token;

pub use error::{ParseError, ParseErrorKind};
pub use expr::{Builtin, Expr};

/// Parses an expression in the variable `x`.
///
/// # Errors
///
/// Returns a [`ParseError`] pointing at the byte offset where the input
/// stopped making sense.
pub fn parse(source: &str) -> Result<Expr, ParseError> {
    let tokens = token::tokenize(source)?;
    parser::Parser::new(&tokens, source.len()).parse()
}
