//! Provide methods and data structures for diagnostic reporting.
//!
//! Every diagnostic raised while a document is parsed ends up in a
//! [`DiagnosticReporter`]. The reporter writes a severity-prefixed message to its
//! output (the standard error stream by default), counts warnings and errors,
//! and remembers whether a fatal error has been reported during the current
//! session.
//!
//! The reporter never stops the parse by itself. Callers check
//! [`DiagnosticReporter::is_fatal`] and decide what to do.

use std::{
    fmt,
    io::{self, Stderr, Write},
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
};

use const_format::concatcp;

const LABEL_SUFFIX: &str = "!: ";
/// Prefix written before every warning message.
pub const WARNING_LABEL: &str = concatcp!("Warning", LABEL_SUFFIX);
/// Prefix written before every error message.
pub const ERROR_LABEL: &str = concatcp!("Error", LABEL_SUFFIX);
/// Prefix written before every fatal error message.
pub const FATAL_ERROR_LABEL: &str = concatcp!("Fatal Error", LABEL_SUFFIX);

/// The severity of a diagnostic.
///
/// Variants are ordered by increasing severity.
#[doc(alias = "xmlErrorLevel")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// A recoverable irregularity. Parsing continues.
    Warning,
    /// A defect was found, but the parser can attempt to continue.
    Error,
    /// An unrecoverable condition. The current parse must stop.
    FatalError,
}

impl Severity {
    /// The exact prefix written before a message of this severity.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Warning => WARNING_LABEL,
            Severity::Error => ERROR_LABEL,
            Severity::FatalError => FATAL_ERROR_LABEL,
        }
    }
}

/// Severity-classified diagnostic sink for one parsing session.
///
/// The output stream is guarded by a mutex and the counters are atomics, so a
/// reporter can be shared between parsers running on several threads. The
/// output of a single [`report`](DiagnosticReporter::report) call is never
/// interleaved with another call's output.
pub struct DiagnosticReporter<W: Write = Stderr> {
    out: Mutex<W>,
    warnings: AtomicUsize,
    errors: AtomicUsize,
    fatal: AtomicBool,
}

impl DiagnosticReporter {
    /// Create a reporter writing to the standard error stream.
    pub fn new() -> Self {
        Self::with_output(io::stderr())
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> DiagnosticReporter<W> {
    /// Create a reporter writing to `out`.
    pub fn with_output(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            warnings: AtomicUsize::new(0),
            errors: AtomicUsize::new(0),
            fatal: AtomicBool::new(false),
        }
    }

    /// Write `msg` prefixed with the label of `severity`, then update the
    /// session state.
    ///
    /// No newline is appended; the message controls line termination.
    /// The context is opaque to the reporter. It may be `None` and is never read.
    ///
    /// Write failures and formatting failures of the arguments are ignored.
    pub fn report<C: ?Sized>(
        &self,
        _ctx: Option<&C>,
        severity: Severity,
        msg: fmt::Arguments<'_>,
    ) {
        let mut buf = String::from(severity.label());
        fmt::Write::write_fmt(&mut buf, msg).ok();

        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        out.write_all(buf.as_bytes()).ok();
        out.flush().ok();
        match severity {
            Severity::Warning => {
                self.warnings.fetch_add(1, Ordering::Relaxed);
            }
            Severity::Error => {
                self.errors.fetch_add(1, Ordering::Relaxed);
            }
            Severity::FatalError => self.fatal.store(true, Ordering::Release),
        }
    }

    /// Check if a fatal error has been reported in the current session.
    pub fn is_fatal(&self) -> bool {
        self.fatal.load(Ordering::Acquire)
    }

    /// Returns `(warnings, errors)` reported since the session started.
    ///
    /// Fatal errors are not counted here.
    pub fn counts(&self) -> (usize, usize) {
        (
            self.warnings.load(Ordering::Relaxed),
            self.errors.load(Ordering::Relaxed),
        )
    }

    /// Check if more than `max_errors` errors have been reported.
    pub fn exceeds(&self, max_errors: usize) -> bool {
        self.errors.load(Ordering::Relaxed) > max_errors
    }

    /// Start a new session: both counters go back to zero and the fatal flag
    /// is cleared.
    pub fn reset(&self) {
        let _out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        self.warnings.store(0, Ordering::Relaxed);
        self.errors.store(0, Ordering::Relaxed);
        self.fatal.store(false, Ordering::Release);
    }

    /// Consume the reporter and return its output.
    pub fn into_output(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Report a warning.
///
/// ```
/// use xmlparse::{error::DiagnosticReporter, sax_warning};
///
/// let reporter = DiagnosticReporter::with_output(vec![]);
/// sax_warning!(reporter, "unexpected {} at line {}", "attribute", 12);
/// assert_eq!(reporter.into_output(), b"Warning!: unexpected attribute at line 12");
/// ```
#[macro_export]
macro_rules! sax_warning {
    ($reporter:expr, $fmt:literal $(, $args:expr )* $(,)?) => {
        $reporter.report(None::<&()>, $crate::error::Severity::Warning, format_args!($fmt $(, $args )*))
    };
    ($reporter:expr, $ctx:expr, $fmt:literal $(, $args:expr )* $(,)?) => {
        $reporter.report($ctx, $crate::error::Severity::Warning, format_args!($fmt $(, $args )*))
    };
}

/// Report a non fatal error.
#[macro_export]
macro_rules! sax_error {
    ($reporter:expr, $fmt:literal $(, $args:expr )* $(,)?) => {
        $reporter.report(None::<&()>, $crate::error::Severity::Error, format_args!($fmt $(, $args )*))
    };
    ($reporter:expr, $ctx:expr, $fmt:literal $(, $args:expr )* $(,)?) => {
        $reporter.report($ctx, $crate::error::Severity::Error, format_args!($fmt $(, $args )*))
    };
}

/// Report a fatal error.
#[macro_export]
macro_rules! sax_fatal_error {
    ($reporter:expr, $fmt:literal $(, $args:expr )* $(,)?) => {
        $reporter.report(None::<&()>, $crate::error::Severity::FatalError, format_args!($fmt $(, $args )*))
    };
    ($reporter:expr, $ctx:expr, $fmt:literal $(, $args:expr )* $(,)?) => {
        $reporter.report($ctx, $crate::error::Severity::FatalError, format_args!($fmt $(, $args )*))
    };
}
