//! Statement IR of a program-synthesis front-end.
//!
//! Statements know how big they are, how to swap their literal constants for
//! synthesis holes, which scope they leave behind them, and which variables
//! they declare.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::time::Instant;

// Defined first so that the macros can be used in the other modules.
#[macro_use]
pub mod context;

pub mod ast;
pub mod codes;
pub mod config;
pub mod consts;
pub mod error;
pub mod reporter;
mod resolve;
pub mod samples;
pub mod scope;
pub mod utils;

#[macro_use]
extern crate lazy_static;

#[macro_use]
extern crate anyhow;

use anyhow::Result;
pub use ast::{Program, VarMap};
pub use config::Config;
pub use consts::HoleTable;
pub use context::Context;
pub use error::IrError;
use indexmap::IndexMap;
pub use reporter::Diagnostics;
pub use steps::{check, declared_vars, extract};

/// Checks `p`, then replaces all its literal constants with holes.
///
/// Returns the program with holes, and the table of the extracted constants.
pub fn process(ctx: &mut Context<'_>, p: Program) -> Result<(Program, HoleTable)> {
    if let Err(diagnostics) = check(ctx, &p)? {
        let count = diagnostics.len();
        // Put them back, for the caller to display.
        for diagnostic in diagnostics {
            ctx.emit(diagnostic);
        }
        bail!("found {count} scoping errors");
    }
    extract(ctx, p)
}

mod steps {
    //! Defining the function for all the steps of the pipeline.

    use crate::resolve::Resolver;

    use super::*;

    /// Checks the scoping of a given program.
    ///
    /// Returns the diagnostics if any error was found. Warnings stay in the
    /// reporter of `ctx`.
    ///
    /// Under the hood, this function is in charge of allocating a new
    /// `Resolver` and launching it on your program.
    pub fn check<'ctx>(
        ctx: &mut Context<'ctx>,
        p: &Program,
    ) -> Result<Result<(), Diagnostics<'ctx>>> {
        verbose_print!(ctx, "Resolving names...");
        let start = Instant::now();

        Resolver::new(ctx).check(p);
        let res = if ctx.has_errors() {
            Err(ctx.reporter.flush())
        } else {
            Ok(())
        };
        verbose_println!(ctx, "\rResolved names [{:?}]", start.elapsed());
        Ok(res)
    }

    /// Replaces the literal constants of a given program with holes, numbered
    /// from the `first_hole` of the configuration.
    ///
    /// A malformed program is reported to `ctx`, and fails the step.
    pub fn extract(ctx: &mut Context<'_>, p: Program) -> Result<(Program, HoleTable)> {
        verbose_print!(ctx, "Extracting holes...");
        let start = Instant::now();

        let first_hole = ctx.config.first_hole;
        let res = match p.replace_const(first_hole) {
            Ok(res) => res,
            Err(err) => {
                ctx.emit(err.to_diagnostic());
                return Err(anyhow::Error::from(err).context("could not extract holes"));
            }
        };
        verbose_println!(
            ctx,
            "\rExtracted {} holes [{:?}]",
            res.1.len(),
            start.elapsed()
        );
        Ok(res)
    }

    /// Variables declared in each function of `p`, by function name.
    pub fn declared_vars(p: &Program) -> IndexMap<String, VarMap> {
        p.funs
            .iter()
            .map(|f| (f.name.clone(), f.declared_vars()))
            .collect()
    }
}
