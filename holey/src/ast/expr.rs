//! Defining expressions, and the extraction of their constants.

use std::fmt;

use itertools::Itertools;
use num_bigint::BigInt;

use super::Var;
use crate::consts::{ConstData, Literal};
use crate::utils::boxed;

/// An expression in the AST.
///
/// Rule: all variants end with a capital `E`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    IntegerE(BigInt),
    /// A bit literal.
    BoolE(bool),
    /// A character literal.
    CharE(char),
    /// A synthesis hole, standing for the constant of that index.
    HoleE(usize),
    /// A variable.
    VarE(Var),
    /// A field in a structure.
    FieldE(Box<Expr>, String),
    /// An index in an array.
    IndexE(Box<Expr>, Box<Expr>),
    /// Array creation.
    ArrayE(Vec<Expr>),
    /// A function call.
    ///
    /// Unary and binary operators are calls too.
    CallE {
        /// Name/identifier of the function.
        name: String,
        /// Arguments to that function.
        args: Vec<Expr>,
    },
    /// A conditional expression `c ? t : f`.
    CondE(Box<Expr>, Box<Expr>, Box<Expr>),
}

use Expr::*;

impl Expr {
    /// Is this expression a literal constant.
    pub fn is_const(&self) -> bool {
        matches!(self, IntegerE(_) | BoolE(_) | CharE(_))
    }

    /// Replaces every literal constant with a hole, numbering holes from
    /// `index` onward.
    ///
    /// Returns the new expression, and the extracted constants.
    pub fn replace_const(self, index: usize) -> (Expr, ConstData) {
        let mut consts = ConstData::new(index);
        let expr = self.extract(&mut consts, 0);
        (expr, consts)
    }

    /// Replaces constants with holes, recording them in `consts`.
    ///
    /// Depth-first, left to right. `line` is the line of the enclosing
    /// statement.
    pub(crate) fn extract(self, consts: &mut ConstData, line: usize) -> Expr {
        match self {
            IntegerE(value) => HoleE(consts.push(Literal::Int(value), line)),
            BoolE(value) => HoleE(consts.push(Literal::Bool(value), line)),
            CharE(value) => HoleE(consts.push(Literal::Char(value), line)),
            HoleE(_) | VarE(_) => self,
            FieldE(strukt, field) => FieldE(boxed((*strukt).extract(consts, line)), field),
            IndexE(array, ix) => {
                let array = (*array).extract(consts, line);
                let ix = (*ix).extract(consts, line);
                IndexE(boxed(array), boxed(ix))
            }
            ArrayE(items) => ArrayE(
                items
                    .into_iter()
                    .map(|item| item.extract(consts, line))
                    .collect(),
            ),
            CallE { name, args } => CallE {
                name,
                args: args
                    .into_iter()
                    .map(|arg| arg.extract(consts, line))
                    .collect(),
            },
            CondE(cond, iftrue, iffalse) => {
                let cond = (*cond).extract(consts, line);
                let iftrue = (*iftrue).extract(consts, line);
                let iffalse = (*iffalse).extract(consts, line);
                CondE(boxed(cond), boxed(iftrue), boxed(iffalse))
            }
        }
    }

    /// Variables referenced by this expression, in reading order.
    pub fn vars(&self) -> Vec<&Var> {
        let mut vars = vec![];
        self.collect_vars(&mut vars);
        vars
    }

    /// Pushes the variables referenced by this expression onto `vars`.
    pub(crate) fn collect_vars<'a>(&'a self, vars: &mut Vec<&'a Var>) {
        match self {
            IntegerE(_) | BoolE(_) | CharE(_) | HoleE(_) => (),
            VarE(var) => vars.push(var),
            FieldE(strukt, _) => strukt.collect_vars(vars),
            IndexE(array, ix) => {
                array.collect_vars(vars);
                ix.collect_vars(vars);
            }
            ArrayE(items) | CallE { args: items, .. } => {
                for item in items {
                    item.collect_vars(vars);
                }
            }
            CondE(cond, iftrue, iffalse) => {
                cond.collect_vars(vars);
                iftrue.collect_vars(vars);
                iffalse.collect_vars(vars);
            }
        }
    }
}

/// Shortcut to create an `Expr` which is just a variable, based on its name.
pub fn var(v: impl ToString) -> Expr {
    VarE(v.to_string().into())
}

/// Shortcut to create a constant integer `Expr` based on some integer value.
pub fn int(value: impl Into<BigInt>) -> Expr {
    IntegerE(value.into())
}

/// Shortcut to create a constant bit `Expr`.
pub fn bit(value: bool) -> Expr {
    BoolE(value)
}

/// Shortcut to create a constant character `Expr`.
pub fn chr(value: char) -> Expr {
    CharE(value)
}

/// Shortcut to create a hole `Expr`.
pub fn hole(index: usize) -> Expr {
    HoleE(index)
}

/// Shortcut to create a call `Expr`.
pub fn call(name: impl ToString, args: impl IntoIterator<Item = Expr>) -> Expr {
    CallE {
        name: name.to_string(),
        args: args.into_iter().collect(),
    }
}

/// Shortcut to create a binary operation `Expr`.
pub fn binop(lhs: Expr, op: impl ToString, rhs: Expr) -> Expr {
    call(op, vec![lhs, rhs])
}

/// Shortcut to create a unary operation `Expr`.
pub fn unop(op: impl ToString, e: Expr) -> Expr {
    call(op, vec![e])
}

/// Shortcut to create a `s.field` expression.
pub fn field(e: Expr, member: impl ToString) -> Expr {
    FieldE(boxed(e), member.to_string())
}

/// Shortcut to create a `x[y]` expression.
pub fn index(e1: Expr, ix: Expr) -> Expr {
    IndexE(boxed(e1), boxed(ix))
}

/// Shortcut to create a `{el1, el2, ..}` expression.
pub fn array(items: impl IntoIterator<Item = Expr>) -> Expr {
    ArrayE(items.into_iter().collect())
}

/// Shortcut to create a `c ? t : f` expression.
pub fn cond(c: Expr, iftrue: Expr, iffalse: Expr) -> Expr {
    CondE(boxed(c), boxed(iftrue), boxed(iffalse))
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        IntegerE(BigInt::from(value))
    }
}

impl From<Var> for Expr {
    fn from(v: Var) -> Self {
        VarE(v)
    }
}

/// Is `name` written as an infix operator.
fn is_operator(name: &str) -> bool {
    !name.is_empty() && !name.starts_with(|c: char| c.is_alphanumeric() || c == '_')
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegerE(value) => write!(f, "{value}"),
            BoolE(value) => write!(f, "{value}"),
            CharE(value) => write!(f, "{value:?}"),
            HoleE(index) => write!(f, "??{index}"),
            VarE(var) => write!(f, "{var}"),
            FieldE(strukt, field) => write!(f, "{strukt}.{field}"),
            IndexE(array, ix) => write!(f, "{array}[{ix}]"),
            ArrayE(items) => write!(f, "{{{}}}", items.iter().join(", ")),
            CallE { name, args } if is_operator(name) => match &args[..] {
                [e] => write!(f, "{name}{e}"),
                [lhs, rhs] => write!(f, "({lhs} {name} {rhs})"),
                _ => write!(f, "({name} {})", args.iter().join(" ")),
            },
            CallE { name, args } => write!(f, "{name}({})", args.iter().join(", ")),
            CondE(c, iftrue, iffalse) => write!(f, "({c} ? {iftrue} : {iffalse})"),
        }
    }
}
