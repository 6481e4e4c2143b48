//! Abstract Syntax Tree of the sketch language.
//!
//! Each node in the tree = one file.
//!
//! Trees are built by a front-end, or by hand with the shortcut functions of
//! each module.

pub mod block;
pub mod expr;
pub mod fun;
pub mod place;
pub mod program;
pub mod stmt;
pub mod ty;
pub mod var;

pub use block::Block;
pub use expr::Expr;
pub use fun::Fun;
use indexmap::IndexMap;
pub use place::Place;
pub use program::Program;
pub use stmt::{Stmt, StmtKind};
pub use ty::Ty;
pub use var::{Var, VarDef};

/// Declared variables and their types, in declaration order.
pub type VarMap = IndexMap<Var, Ty>;
