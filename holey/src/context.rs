//! Defining the pipeline context.

use codespan_reporting::files::SimpleFile;

use crate::config::Config;
use crate::reporter::{Diagnostic, Reporter};

/// Prints a progress message when in verbose mode.
#[macro_export]
macro_rules! verbose_print {
    ($ctx:expr, $($arg:tt)*) => {
        if $ctx.config.verbose {
            eprint!($($arg)*);
        }
    };
}

/// Prints a progress line when in verbose mode.
#[macro_export]
macro_rules! verbose_println {
    ($ctx:expr, $($arg:tt)*) => {
        if $ctx.config.verbose {
            eprintln!($($arg)*);
        }
    };
}

/// Pipeline context, shared by all the passes over a program.
pub struct Context<'ctx> {
    /// Configuration.
    pub config: Config<'ctx>,
    /// Error reporter.
    pub reporter: Reporter<'ctx>,
}

impl<'ctx> Context<'ctx> {
    /// Creates a new context.
    pub fn new(config: Config<'ctx>) -> Self {
        let files = SimpleFile::new(config.filename.unwrap_or("unknown file"), "");
        Self {
            reporter: Reporter::new(files),
            config,
        }
    }

    /// Emits a new diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.reporter.emit(diagnostic);
    }

    /// Was there any errors so far?
    pub fn has_errors(&self) -> bool {
        self.reporter.has_errors()
    }
}
