//! Defining statements, and their traversals.
//!
//! Every statement implements the same four walks:
//! * [`Stmt::size`]: how many statements expanding it costs.
//! * [`Stmt::replace_const`]: replaces literal constants with holes.
//! * [`Stmt::build_context`]: the scope visible after it.
//! * [`Stmt::add_record_stmt`]: records the variables it declares.

use super::{Block, Expr, Place, VarDef, VarMap};
use crate::consts::ConstData;
use crate::error::{malformed, IrError};
use crate::scope::{ScopeId, Scopes};
use crate::utils::boxed;

/// A statement, and the line it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    /// What the statement is.
    pub kind: StmtKind,
    /// Source line, for diagnostics only.
    pub line: usize,
}

/// The different kinds of statements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StmtKind {
    /// A nested block.
    BlockS(Block),
    /// A declaration, with an optional initial value.
    DeclareS(VarDef, Option<Expr>),
    /// An assignment.
    AssignS(Place, Expr),
    /// An expression, whose final value is discarded.
    ExprS(Expr),
    /// An if statement.
    IfS {
        /// Condition.
        cond: Expr,
        /// Statement if the condition holds.
        then: Box<Stmt>,
        /// Optional else branch.
        otherwise: Option<Box<Stmt>>,
    },
    /// A while loop.
    WhileS {
        /// Condition.
        cond: Expr,
        /// Loop body, if any.
        body: Option<Box<Stmt>>,
    },
    /// A do-while loop.
    DoWhileS {
        /// Loop body, if any.
        body: Option<Box<Stmt>>,
        /// Condition, checked after each iteration.
        cond: Expr,
    },
    /// A C-style for loop.
    ForS {
        /// Initialization statement.
        init: Option<Box<Stmt>>,
        /// Condition. Required, even though the parser may produce a loop
        /// without one.
        cond: Option<Expr>,
        /// Statement run after each iteration.
        update: Option<Box<Stmt>>,
        /// Loop body, if any.
        body: Option<Box<Stmt>>,
    },
    /// A return statement.
    ReturnS(Option<Expr>),
    /// An assertion.
    AssertS(Expr),
    /// A break statement.
    BreakS,
    /// A continue statement.
    ContinueS,
    /// An empty statement.
    EmptyS,
}

use StmtKind::*;

impl Stmt {
    /// Sets the line of this statement.
    pub fn at(self, line: usize) -> Self {
        Self { line, ..self }
    }

    /// Is this a statement allowed in the header of a for loop.
    fn is_simple(&self) -> bool {
        matches!(self.kind, DeclareS(..) | AssignS(..) | ExprS(_) | EmptyS)
    }

    /// Checks that all the children this statement requires are there.
    ///
    /// # Errors
    /// Returns [`IrError::MalformedTree`] otherwise.
    pub(crate) fn check_structure(&self) -> Result<(), IrError> {
        if let ForS {
            init, cond, update, ..
        } = &self.kind
        {
            if cond.is_none() {
                return Err(malformed("for-loop", "missing condition", self.line));
            }
            if init.as_ref().is_some_and(|s| !s.is_simple()) {
                return Err(malformed(
                    "for-loop",
                    "initializer is not a simple statement",
                    self.line,
                ));
            }
            if update.as_ref().is_some_and(|s| !s.is_simple()) {
                return Err(malformed(
                    "for-loop",
                    "update is not a simple statement",
                    self.line,
                ));
            }
        }
        Ok(())
    }

    /// Checks the structure of this statement and of all its children.
    ///
    /// # Errors
    /// Returns the first [`IrError::MalformedTree`] met, in traversal order.
    pub fn validate(&self) -> Result<(), IrError> {
        self.check_structure()?;
        match &self.kind {
            BlockS(block) => block.validate(),
            IfS {
                then, otherwise, ..
            } => {
                then.validate()?;
                validate_opt(otherwise)
            }
            WhileS { body, .. } | DoWhileS { body, .. } => validate_opt(body),
            ForS {
                init, update, body, ..
            } => {
                validate_opt(init)?;
                validate_opt(update)?;
                validate_opt(body)
            }
            DeclareS(..) | AssignS(..) | ExprS(_) | ReturnS(_) | AssertS(_) | BreakS
            | ContinueS | EmptyS => Ok(()),
        }
    }

    /// Number of statements this one expands into.
    ///
    /// Loops count their body once, and missing children count 0.
    pub fn size(&self) -> usize {
        match &self.kind {
            BlockS(block) => block.size(),
            DeclareS(..) | AssignS(..) | ExprS(_) | ReturnS(_) | AssertS(_) | BreakS
            | ContinueS => 1,
            EmptyS => 0,
            IfS {
                then, otherwise, ..
            } => then.size() + opt_size(otherwise),
            WhileS { body, .. } | DoWhileS { body, .. } | ForS { body, .. } => opt_size(body),
        }
    }

    /// Replaces every literal constant in this statement with a hole.
    ///
    /// Holes are numbered from `index` onward, in the traversal order. Returns
    /// the new statement and the extracted constants. The next extraction
    /// should start at [`ConstData::next_index`].
    ///
    /// # Errors
    /// Fails on a malformed statement. The whole subtree is checked before any
    /// constant is extracted.
    pub fn replace_const(self, index: usize) -> Result<(Stmt, ConstData), IrError> {
        self.validate()?;
        let mut consts = ConstData::new(index);
        let stmt = self.extract(&mut consts)?;
        Ok((stmt, consts))
    }

    /// Replaces constants with holes, recording them in `consts`.
    pub(crate) fn extract(self, consts: &mut ConstData) -> Result<Stmt, IrError> {
        self.check_structure()?;
        let line = self.line;
        let kind = match self.kind {
            BlockS(block) => BlockS(block.extract(consts)?),
            DeclareS(vardef, init) => DeclareS(vardef, init.map(|e| e.extract(consts, line))),
            AssignS(place, rhs) => {
                let place = place.extract(consts, line);
                AssignS(place, rhs.extract(consts, line))
            }
            ExprS(e) => ExprS(e.extract(consts, line)),
            IfS {
                cond,
                then,
                otherwise,
            } => {
                let cond = cond.extract(consts, line);
                let then = boxed((*then).extract(consts)?);
                let otherwise = extract_opt(otherwise, consts)?;
                IfS {
                    cond,
                    then,
                    otherwise,
                }
            }
            WhileS { cond, body } => {
                let cond = cond.extract(consts, line);
                let body = extract_opt(body, consts)?;
                WhileS { cond, body }
            }
            // Body first, as it runs before the condition is evaluated.
            DoWhileS { body, cond } => {
                let body = extract_opt(body, consts)?;
                let cond = cond.extract(consts, line);
                DoWhileS { body, cond }
            }
            ForS {
                init,
                cond,
                update,
                body,
            } => {
                let init = extract_opt(init, consts)?;
                let cond = cond.map(|e| e.extract(consts, line));
                let update = extract_opt(update, consts)?;
                let body = extract_opt(body, consts)?;
                ForS {
                    init,
                    cond,
                    update,
                    body,
                }
            }
            ReturnS(e) => ReturnS(e.map(|e| e.extract(consts, line))),
            AssertS(e) => AssertS(e.extract(consts, line)),
            kind @ (BreakS | ContinueS | EmptyS) => kind,
        };
        Ok(Stmt { kind, line })
    }

    /// Returns the scope visible after this statement, given the scope `ctx`
    /// visible before it.
    ///
    /// Only declarations extend the scope. Blocks, branches and loop bodies
    /// keep their declarations to themselves, so every other statement
    /// returns `ctx`.
    ///
    /// # Errors
    /// Fails if this statement, or any statement nested in it, is malformed.
    pub fn build_context(&self, scopes: &mut Scopes, ctx: ScopeId) -> Result<ScopeId, IrError> {
        self.validate()?;
        match &self.kind {
            DeclareS(vardef, _) => Ok(scopes.declare(ctx, vardef)),
            BlockS(..) | AssignS(..) | ExprS(_) | IfS { .. } | WhileS { .. } | DoWhileS { .. }
            | ForS { .. } | ReturnS(_) | AssertS(_) | BreakS | ContinueS | EmptyS => Ok(ctx),
        }
    }

    /// Records the variables declared by this statement into `m`.
    ///
    /// `parent` is the block this statement is in, at position `index`. Only
    /// declarations record anything: the declarations of a nested block
    /// belong to that block, see [`Block::declared_vars`].
    pub fn add_record_stmt(&self, parent: &Block, index: usize, mut m: VarMap) -> VarMap {
        match &self.kind {
            DeclareS(vardef, _) => {
                debug_assert!(
                    index < parent.stmts.len(),
                    "statement {index} out of a block of {} statements",
                    parent.stmts.len()
                );
                m.insert(vardef.name.clone(), vardef.ty.clone());
                m
            }
            BlockS(..) | AssignS(..) | ExprS(_) | IfS { .. } | WhileS { .. } | DoWhileS { .. }
            | ForS { .. } | ReturnS(_) | AssertS(_) | BreakS | ContinueS | EmptyS => m,
        }
    }

    /// Sees this statement as a declaration.
    ///
    /// Returns: `(vardef, init)`.
    ///
    /// # Errors
    /// Returns `None` if the statement is not a declaration.
    pub fn as_declare(&self) -> Option<(&VarDef, Option<&Expr>)> {
        if let DeclareS(vardef, init) = &self.kind {
            Some((vardef, init.as_ref()))
        } else {
            None
        }
    }

    /// Sees this statement as an assignment.
    ///
    /// Returns: `(lhs, rhs)`.
    ///
    /// # Errors
    /// Returns `None` if the statement is not an assignment.
    pub fn as_assign(&self) -> Option<(&Place, &Expr)> {
        if let AssignS(lhs, rhs) = &self.kind {
            Some((lhs, rhs))
        } else {
            None
        }
    }

    /// Sees this statement as a block.
    ///
    /// # Errors
    /// Returns `None` if the statement is not a block.
    pub fn as_block(&self) -> Option<&Block> {
        if let BlockS(block) = &self.kind {
            Some(block)
        } else {
            None
        }
    }

    /// Sees this statement as a do-while loop.
    ///
    /// Returns: `(body, cond)`.
    ///
    /// # Errors
    /// Returns `None` if the statement is not a do-while loop.
    pub fn as_do_while(&self) -> Option<(Option<&Stmt>, &Expr)> {
        if let DoWhileS { body, cond } = &self.kind {
            Some((body.as_deref(), cond))
        } else {
            None
        }
    }
}

/// Size of an optional child.
fn opt_size(stmt: &Option<Box<Stmt>>) -> usize {
    stmt.as_ref().map_or(0, |stmt| stmt.size())
}

/// Validates an optional child.
fn validate_opt(stmt: &Option<Box<Stmt>>) -> Result<(), IrError> {
    stmt.as_ref().map_or(Ok(()), |stmt| stmt.validate())
}

/// Extracts the constants of an optional child.
fn extract_opt(
    stmt: Option<Box<Stmt>>,
    consts: &mut ConstData,
) -> Result<Option<Box<Stmt>>, IrError> {
    stmt.map(|stmt| (*stmt).extract(consts).map(boxed))
        .transpose()
}

impl From<StmtKind> for Stmt {
    fn from(kind: StmtKind) -> Self {
        Stmt { kind, line: 0 }
    }
}

/// Shortcut for a block statement.
pub fn block_stmt(b: impl Into<Block>) -> Stmt {
    BlockS(b.into()).into()
}

/// Shortcut for a declaration with an initial value.
pub fn declare(vardef: VarDef, init: Expr) -> Stmt {
    DeclareS(vardef, Some(init)).into()
}

/// Shortcut for a declaration without initial value.
pub fn declare_uninit(vardef: VarDef) -> Stmt {
    DeclareS(vardef, None).into()
}

/// Shortcut for an assignment.
pub fn assign(place: impl Into<Place>, rhs: Expr) -> Stmt {
    AssignS(place.into(), rhs).into()
}

/// Shortcut for an expression statement.
pub fn expr_stmt(e: Expr) -> Stmt {
    ExprS(e).into()
}

/// Shortcut to make a call statement.
pub fn call_stmt(name: impl ToString, args: impl IntoIterator<Item = Expr>) -> Stmt {
    ExprS(super::expr::call(name, args)).into()
}

/// Shortcut for an if statement.
pub fn if_s(cond: Expr, then: Stmt, otherwise: Option<Stmt>) -> Stmt {
    IfS {
        cond,
        then: boxed(then),
        otherwise: otherwise.map(boxed),
    }
    .into()
}

/// Shortcut for a while loop.
pub fn while_loop(cond: Expr, body: Option<Stmt>) -> Stmt {
    WhileS {
        cond,
        body: body.map(boxed),
    }
    .into()
}

/// Shortcut for a do-while loop.
pub fn do_while(body: Option<Stmt>, cond: Expr) -> Stmt {
    DoWhileS {
        body: body.map(boxed),
        cond,
    }
    .into()
}

/// Shortcut for a for loop.
pub fn for_loop(
    init: Option<Stmt>,
    cond: Option<Expr>,
    update: Option<Stmt>,
    body: Option<Stmt>,
) -> Stmt {
    ForS {
        init: init.map(boxed),
        cond,
        update: update.map(boxed),
        body: body.map(boxed),
    }
    .into()
}

/// Shortcut for a return statement.
pub fn ret(e: Expr) -> Stmt {
    ReturnS(Some(e)).into()
}

/// Shortcut for a return statement without value.
pub fn ret_void() -> Stmt {
    ReturnS(None).into()
}

/// Shortcut for an assertion.
pub fn assert_s(e: Expr) -> Stmt {
    AssertS(e).into()
}
