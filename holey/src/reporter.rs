//! User-facing error reporting facility.

use std::fmt;
use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use codespan_reporting::diagnostic::Severity;
use codespan_reporting::files::SimpleFile;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use crossbeam_queue::SegQueue;

/// A diagnostic.
pub type Diagnostic = codespan_reporting::diagnostic::Diagnostic<()>;

lazy_static! {
    /// Terminal configuration.
    static ref TERM_CONFIG: term::Config = term::Config::default();
    /// Standard stream handle.
    static ref STD_STREAM: StandardStream = StandardStream::stderr(ColorChoice::Auto);
    /// Dummy file descriptor for internal errors.
    static ref DUMMY_FILE_FOR_INTERNAL_ERRORS: SimpleFile<&'static str, &'static str> =
        SimpleFile::new("internal error", "");
}

/// Collection of diagnostics, ready to be displayed.
pub struct Diagnostics<'ctx> {
    /// Stream to which we will display the diagnostics.
    writer: &'ctx StandardStream,
    /// Terminal configuration.
    ///
    /// Needed to display the diagnostics to the stdout.
    config: &'ctx term::Config,
    /// Name of the program the diagnostics are about.
    files: SimpleFile<&'ctx str, &'ctx str>,
    /// The actual list of diagnostics.
    diagnostics: SegQueue<Diagnostic>,
    /// True iff `self.diagnostics` contains at least one error diagnostic.
    is_error: AtomicBool,
    /// Number of error diagnostics pushed so far.
    errors: AtomicUsize,
}

impl<'ctx> Diagnostics<'ctx> {
    /// Creates an empty list of diagnostics about `files`.
    fn empty(files: SimpleFile<&'ctx str, &'ctx str>) -> Self {
        Self {
            config: &TERM_CONFIG,
            writer: &STD_STREAM,
            files,
            diagnostics: SegQueue::new(),
            is_error: AtomicBool::new(false),
            errors: AtomicUsize::new(0),
        }
    }
}

impl<'ctx> From<anyhow::Error> for Diagnostics<'ctx> {
    fn from(err: anyhow::Error) -> Self {
        let diagnostics = Diagnostics::empty(DUMMY_FILE_FOR_INTERNAL_ERRORS.clone());
        let mut chain = err.chain().rev();
        if let Some(final_error) = chain.next() {
            let caused_by: Vec<_> = chain.map(|x| format!("Caused by: {x}")).collect();
            diagnostics.push(
                Diagnostic::error()
                    .with_message(final_error.to_string())
                    .with_notes(caused_by),
            );
        } else {
            diagnostics.push(Diagnostic::error().with_message("internal error"));
        }
        diagnostics
    }
}

impl<'ctx> From<std::io::Error> for Diagnostics<'ctx> {
    fn from(err: std::io::Error) -> Self {
        let diagnostics = Diagnostics::empty(DUMMY_FILE_FOR_INTERNAL_ERRORS.clone());
        diagnostics.push(
            Diagnostic::error()
                .with_message("I/O error")
                .with_notes(vec![err.to_string()]),
        );
        diagnostics
    }
}

impl<'ctx> Diagnostics<'ctx> {
    /// Displays all the diagnostics with nice colors and formatting to the
    /// standard error.
    ///
    /// # Warning
    /// WILL FLUSH/TRASH the diagnostics that are displayed.
    pub fn display(&self) -> anyhow::Result<()> {
        let mut writer = self.writer.lock();
        write!(&mut writer, "\r")?; // Flush anything on our line, in particular progress messages
        while let Some(diagnostic) = self.diagnostics.pop() {
            term::emit(&mut writer, self.config, &self.files, &diagnostic)?;
        }
        Ok(())
    }

    /// Pushes a new diagnostic to the list.
    pub fn push(&self, diagnostic: Diagnostic) {
        let is_error = matches!(diagnostic.severity, Severity::Error | Severity::Bug);
        self.is_error.fetch_or(is_error, Ordering::Relaxed);
        if is_error {
            self.errors.fetch_add(1, Ordering::Relaxed);
        }
        self.diagnostics.push(diagnostic);
    }

    /// Number of diagnostics, of any severity.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Is there no diagnostic at all?
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Flushes all diagnostics and returns them, leaving self's own diagnostic
    /// list empty and ready to receive messages.
    fn flush(&mut self) -> Diagnostics<'ctx> {
        Diagnostics {
            writer: self.writer,
            config: self.config,
            files: self.files.clone(),
            diagnostics: std::mem::take(&mut self.diagnostics),
            // Revert error flags and get them back
            is_error: AtomicBool::new(self.is_error.swap(false, Ordering::SeqCst)),
            errors: AtomicUsize::new(self.errors.swap(0, Ordering::SeqCst)),
        }
    }
}

impl<'ctx> IntoIterator for Diagnostics<'ctx> {
    type IntoIter = ::std::vec::IntoIter<Diagnostic>;
    type Item = Diagnostic;

    fn into_iter(self) -> Self::IntoIter {
        let mut res = vec![];
        while let Some(diagnostic) = self.diagnostics.pop() {
            res.push(diagnostic);
        }
        res.into_iter()
    }
}

impl fmt::Debug for Diagnostics<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} diagnostics ({} errors) for {}",
            self.len(),
            self.errors.load(Ordering::SeqCst),
            self.files.name()
        )
    }
}

/// Diagnostics reporter.
///
/// Collects and reports any diagnostics emitted by the passes.
pub struct Reporter<'ctx> {
    /// The actual diagnostics.
    diagnostics: Diagnostics<'ctx>,
}

impl<'ctx> Reporter<'ctx> {
    /// Create a new `Reporter`.
    pub fn new(files: SimpleFile<&'ctx str, &'ctx str>) -> Self {
        Self {
            diagnostics: Diagnostics::empty(files),
        }
    }

    /// Emits a new diagnostic.
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Flushes all diagnostics and returns them.
    pub fn flush(&mut self) -> Diagnostics<'ctx> {
        self.diagnostics.flush()
    }

    /// Displays all the diagnostics to the `stderr` output.
    pub fn display(&self) -> anyhow::Result<()> {
        self.diagnostics.display()
    }

    /// Was there any errors so far?
    pub fn has_errors(&self) -> bool {
        self.diagnostics.is_error.load(Ordering::SeqCst)
    }

    /// Number of errors so far.
    pub fn error_count(&self) -> usize {
        self.diagnostics.errors.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warnings_are_not_errors() {
        let mut reporter = Reporter::new(SimpleFile::new("test", ""));
        reporter.emit(Diagnostic::warning().with_message("careful"));
        assert!(!reporter.has_errors());
        reporter.emit(Diagnostic::error().with_code("E0001").with_message("bad"));
        assert!(reporter.has_errors());
        assert_eq!(reporter.error_count(), 1);

        let flushed = reporter.flush();
        assert!(!reporter.has_errors());
        assert_eq!(flushed.len(), 2);
        let codes: Vec<_> = flushed.into_iter().filter_map(|d| d.code).collect();
        assert_eq!(codes, vec!["E0001".to_string()]);
    }

    #[test]
    fn from_anyhow_chain() {
        let err = anyhow::anyhow!("root cause").context("while extracting");
        let diagnostics = Diagnostics::from(err);
        let diagnostic = diagnostics.into_iter().next().unwrap();
        assert_eq!(diagnostic.message, "root cause");
        assert_eq!(diagnostic.notes, vec!["Caused by: while extracting".to_string()]);
    }
}
