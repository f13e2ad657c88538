use std::{fmt, str::FromStr};

use rootline_core::Function;

use crate::error::ParseError;

/// A parsed expression in the variable `x`.
///
/// `Expr` is immutable once parsed, so one instance can be evaluated from
/// many threads at once.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    root: Node,
}

impl Expr {
    pub(crate) fn new(root: Node) -> Self {
        Self { root }
    }
}

impl Function for Expr {
    fn eval(&self, x: f64) -> f64 {
        self.root.eval(x)
    }
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

/// Prints the expression fully parenthesized, in a form [`crate::parse`] accepts.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Number(f64),
    Constant(Constant),
    Var,
    Neg(Box<Node>),
    Binary {
        op: BinaryOp,
        lhs: Box<Node>,
        rhs: Box<Node>,
    },
    Call {
        func: Builtin,
        arg: Box<Node>,
    },
}

impl Node {
    fn eval(&self, x: f64) -> f64 {
        match self {
            Node::Number(value) => *value,
            Node::Constant(constant) => constant.value(),
            Node::Var => x,
            Node::Neg(inner) => -inner.eval(x),
            Node::Binary { op, lhs, rhs } => op.apply(lhs.eval(x), rhs.eval(x)),
            Node::Call { func, arg } => func.apply(arg.eval(x)),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Number(value) => write!(f, "{value}"),
            Node::Constant(constant) => f.write_str(constant.name()),
            Node::Var => f.write_str("x"),
            Node::Neg(inner) => write!(f, "(-{inner})"),
            Node::Binary { op, lhs, rhs } => write!(f, "({lhs} {} {rhs})", op.symbol()),
            Node::Call { func, arg } => write!(f, "{}({arg})", func.name()),
        }
    }
}

/// Named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Constant {
    Pi,
    E,
}

impl Constant {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    fn value(self) -> f64 {
        match self {
            Constant::Pi => std::f64::consts::PI,
            Constant::E => std::f64::consts::E,
        }
    }
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "**",
        }
    }
}

/// Built-in single-argument functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    /// Natural logarithm, spelled `ln` or `log`.
    Ln,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
}

impl Builtin {
    /// Looks up a function by name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let func = match name {
            "sin" => Builtin::Sin,
            "cos" => Builtin::Cos,
            "tan" => Builtin::Tan,
            "asin" | "arcsin" => Builtin::Asin,
            "acos" | "arccos" => Builtin::Acos,
            "atan" | "arctan" => Builtin::Atan,
            "sinh" => Builtin::Sinh,
            "cosh" => Builtin::Cosh,
            "tanh" => Builtin::Tanh,
            "exp" => Builtin::Exp,
            "ln" | "log" => Builtin::Ln,
            "log10" => Builtin::Log10,
            "log2" => Builtin::Log2,
            "sqrt" => Builtin::Sqrt,
            "cbrt" => Builtin::Cbrt,
            "abs" | "fabs" => Builtin::Abs,
            _ => return None,
        };
        Some(func)
    }

    /// Returns the canonical name used when printing.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::Asin => "asin",
            Builtin::Acos => "acos",
            Builtin::Atan => "atan",
            Builtin::Sinh => "sinh",
            Builtin::Cosh => "cosh",
            Builtin::Tanh => "tanh",
            Builtin::Exp => "exp",
            Builtin::Ln => "ln",
            Builtin::Log10 => "log10",
            Builtin::Log2 => "log2",
            Builtin::Sqrt => "sqrt",
            Builtin::Cbrt => "cbrt",
            Builtin::Abs => "abs",
        }
    }

    /// Applies the function to `value`.
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Builtin::Sin => value.sin(),
            Builtin::Cos => value.cos(),
            Builtin::Tan => value.tan(),
            Builtin::Asin => value.asin(),
            Builtin::Acos => value.acos(),
            Builtin::Atan => value.atan(),
            Builtin::Sinh => value.sinh(),
            Builtin::Cosh => value.cosh(),
            Builtin::Tanh => value.tanh(),
            Builtin::Exp => value.exp(),
            Builtin::Ln => value.ln(),
            Builtin::Log10 => value.log10(),
            Builtin::Log2 => value.log2(),
            Builtin::Sqrt => value.sqrt(),
            Builtin::Cbrt => value.cbrt(),
            Builtin::Abs => value.abs(),
        }
    }
}
