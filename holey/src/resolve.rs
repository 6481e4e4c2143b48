//! Name resolution.
//!
//! Walks a program with the scopes built by [`Stmt::build_context`], and
//! checks that every variable is used after its declaration, and inside the
//! block that declares it.

use ordinal::Ordinal;

use crate::ast::{Block, Expr, Fun, Place, Program, Stmt, StmtKind, Var, VarDef};
use crate::codes::SHADOWING_WARNING;
use crate::error::IrError;
use crate::reporter::Diagnostic;
use crate::scope::{ScopeId, Scopes};
use crate::Context;

/// Position of the statement being checked, for diagnostics.
#[derive(Debug, Clone, Copy)]
struct Position {
    /// Index of the statement in its block.
    index: usize,
    /// Line of the block.
    block_line: usize,
}

impl Position {
    /// Note locating a statement in its block.
    fn note(&self) -> String {
        format!(
            "in the {} statement of the block at line {}",
            Ordinal(self.index + 1),
            self.block_line
        )
    }
}

/// A resolver that checks the scoping of a program by visiting it.
pub(crate) struct Resolver<'t, 'ctx> {
    /// Pipeline context.
    ctx: &'t mut Context<'ctx>,
    /// Scope frames.
    scopes: Scopes,
    /// Position of the statement being checked.
    position: Option<Position>,
}

impl<'t, 'ctx> Resolver<'t, 'ctx> {
    /// Creates a new resolver.
    pub fn new(ctx: &'t mut Context<'ctx>) -> Self {
        Self {
            ctx,
            scopes: Scopes::new(),
            position: None,
        }
    }

    /// Checks a program.
    pub fn check(&mut self, p: &Program) {
        for f in &p.funs {
            self.visit_fun(f);
        }
    }

    /// Reports an error.
    fn report(&self, err: &IrError) {
        let mut diagnostic = err.to_diagnostic();
        if let Some(position) = self.position {
            diagnostic.notes.push(position.note());
        }
        self.ctx.emit(diagnostic);
    }

    /// Checks a function.
    fn visit_fun(&mut self, f: &Fun) {
        let mark = self.scopes.mark();
        let root = self.scopes.root();
        let params = f.params_context(&mut self.scopes, root);
        self.visit_block_in(&f.body, params);
        self.scopes.rewind(mark);
    }

    /// Checks a block, nested in scope `scope`.
    fn visit_block(&mut self, block: &Block, scope: ScopeId) {
        let mark = self.scopes.mark();
        let inner = self.scopes.child(scope);
        self.visit_block_in(block, inner);
        self.scopes.rewind(mark);
    }

    /// Checks the statements of a block, directly in scope `scope`.
    fn visit_block_in(&mut self, block: &Block, mut scope: ScopeId) {
        let outer_position = self.position;
        for (index, stmt) in block.stmts.iter().enumerate() {
            self.position = Some(Position {
                index,
                block_line: block.line,
            });
            self.visit_stmt(stmt, scope);
            // Only declarations extend the scope, and they cannot be malformed.
            if stmt.as_declare().is_some() {
                scope = stmt
                    .build_context(&mut self.scopes, scope)
                    .unwrap_or(scope);
            }
        }
        self.position = outer_position;
    }

    /// Checks an optional statement.
    fn visit_opt(&mut self, stmt: &Option<Box<Stmt>>, scope: ScopeId) {
        if let Some(stmt) = stmt {
            self.visit_stmt(stmt, scope);
        }
    }

    /// Checks a statement, in scope `scope`.
    fn visit_stmt(&mut self, stmt: &Stmt, scope: ScopeId) {
        let line = stmt.line;
        match &stmt.kind {
            StmtKind::BlockS(block) => self.visit_block(block, scope),
            StmtKind::DeclareS(vardef, init) => {
                if let Some(init) = init {
                    self.visit_expr(init, scope, line);
                }
                self.check_shadowing(vardef, scope, line);
            }
            StmtKind::AssignS(place, rhs) => {
                self.visit_place(place, scope, line);
                self.visit_expr(rhs, scope, line);
            }
            StmtKind::ExprS(e) | StmtKind::AssertS(e) | StmtKind::ReturnS(Some(e)) => {
                self.visit_expr(e, scope, line)
            }
            StmtKind::IfS {
                cond,
                then,
                otherwise,
            } => {
                self.visit_expr(cond, scope, line);
                self.visit_stmt(then, scope);
                self.visit_opt(otherwise, scope);
            }
            StmtKind::WhileS { cond, body } => {
                self.visit_expr(cond, scope, line);
                self.visit_opt(body, scope);
            }
            StmtKind::DoWhileS { body, cond } => {
                self.visit_opt(body, scope);
                self.visit_expr(cond, scope, line);
            }
            StmtKind::ForS {
                init,
                cond,
                update,
                body,
            } => {
                // Only this loop: nested statements are reported as they are
                // visited.
                if let Err(err) = stmt.check_structure() {
                    self.report(&err);
                    return;
                }
                let mark = self.scopes.mark();
                let mut header = self.scopes.child(scope);
                if let Some(init) = init {
                    self.visit_stmt(init, header);
                    if init.as_declare().is_some() {
                        header = init
                            .build_context(&mut self.scopes, header)
                            .unwrap_or(header);
                    }
                }
                if let Some(cond) = cond {
                    self.visit_expr(cond, header, line);
                }
                self.visit_opt(update, header);
                self.visit_opt(body, header);
                self.scopes.rewind(mark);
            }
            StmtKind::ReturnS(None) | StmtKind::BreakS | StmtKind::ContinueS | StmtKind::EmptyS => {}
        }
    }

    /// Checks that all the variables of an expression are visible.
    fn visit_expr(&mut self, e: &Expr, scope: ScopeId, line: usize) {
        let mut vars = vec![];
        e.collect_vars(&mut vars);
        self.resolve_all(vars, scope, line);
    }

    /// Checks that all the variables of a place are visible.
    fn visit_place(&mut self, place: &Place, scope: ScopeId, line: usize) {
        let mut vars = vec![];
        place.collect_vars(&mut vars);
        self.resolve_all(vars, scope, line);
    }

    /// Resolves variables, reporting the ones that are not visible.
    fn resolve_all(&mut self, vars: Vec<&Var>, scope: ScopeId, line: usize) {
        for var in vars {
            if let Err(err) = self.scopes.resolve(scope, var, line) {
                self.report(&err);
            }
        }
    }

    /// Warns if `vardef` hides a variable that is already visible.
    fn check_shadowing(&mut self, vardef: &VarDef, scope: ScopeId, line: usize) {
        if !self.ctx.config.report_shadowing {
            return;
        }
        if let Some(ty) = self.scopes.get(scope, &vardef.name) {
            let mut notes = vec![format!("at line {line}")];
            notes.extend(self.position.map(|position| position.note()));
            notes.push(format!("the hidden variable has type {ty}"));
            self.ctx.emit(
                Diagnostic::warning()
                    .with_code(SHADOWING_WARNING)
                    .with_message(format!(
                        "declaration of `{}` shadows a visible variable",
                        vardef.name
                    ))
                    .with_notes(notes),
            );
        }
    }
}
