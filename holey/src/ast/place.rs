//! Defining places, i.e. the left-hand side of assignments.

use std::fmt;

use super::{Expr, Var};
use crate::consts::ConstData;
use crate::utils::boxed;

/// A place in the AST: something we can assign to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Place {
    /// A variable.
    VarP(Var),
    /// An index in an array.
    IndexP(Box<Expr>, Box<Expr>),
    /// A field in a structure.
    FieldP(Box<Expr>, String),
}

use Place::*;

impl Place {
    /// Variable at the root of that place.
    pub fn root(&self) -> Option<&Var> {
        match self {
            VarP(var) => Some(var),
            IndexP(array, _) => root_var(array),
            FieldP(strukt, _) => root_var(strukt),
        }
    }

    /// Replaces constants in index expressions with holes.
    pub(crate) fn extract(self, consts: &mut ConstData, line: usize) -> Place {
        match self {
            VarP(_) => self,
            IndexP(array, ix) => {
                let array = (*array).extract(consts, line);
                let ix = (*ix).extract(consts, line);
                IndexP(boxed(array), boxed(ix))
            }
            FieldP(strukt, field) => FieldP(boxed((*strukt).extract(consts, line)), field),
        }
    }

    /// Pushes the variables referenced by this place onto `vars`.
    pub(crate) fn collect_vars<'a>(&'a self, vars: &mut Vec<&'a Var>) {
        match self {
            VarP(var) => vars.push(var),
            IndexP(array, ix) => {
                array.collect_vars(vars);
                ix.collect_vars(vars);
            }
            FieldP(strukt, _) => strukt.collect_vars(vars),
        }
    }
}

/// Innermost variable of a chain of fields and indices.
fn root_var(e: &Expr) -> Option<&Var> {
    match e {
        Expr::VarE(var) => Some(var),
        Expr::IndexE(e, _) | Expr::FieldE(e, _) => root_var(e),
        _ => None,
    }
}

/// Shortcut to create a variable place.
pub fn var_place(v: impl ToString) -> Place {
    VarP(v.to_string().into())
}

/// Shortcut to create a `x[y]` place.
pub fn idx_place(array: Expr, ix: Expr) -> Place {
    IndexP(boxed(array), boxed(ix))
}

/// Shortcut to create a `s.field` place.
pub fn field_place(strukt: Expr, member: impl ToString) -> Place {
    FieldP(boxed(strukt), member.to_string())
}

impl From<&str> for Place {
    fn from(name: &str) -> Self {
        VarP(name.into())
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarP(var) => write!(f, "{var}"),
            IndexP(array, ix) => write!(f, "{array}[{ix}]"),
            FieldP(strukt, field) => write!(f, "{strukt}.{field}"),
        }
    }
}
