//! Defining the config options.

/// Pipeline configuration.
#[derive(Debug, Clone, Default)]
pub struct Config<'ctx> {
    /// Name of the program, for diagnostics.
    pub filename: Option<&'ctx str>,
    /// Index of the first hole of the program.
    pub first_hole: usize,
    /// Do we report declarations shadowing an enclosing variable.
    pub report_shadowing: bool,
    /// Verbose mode.
    pub verbose: bool,
}
