use std::fmt;

use super::{XmlParserCtxt, XmlParserOption};

/// Implement `XmlParserErrors` with its numeric codes.
macro_rules! impl_xml_parser_errors {
    ( $( $variant:ident = $code:literal ),* $(,)? ) => {
        /// This is an error that the XML parser can generate.
        ///
        /// The numbering follows libxml2's `xmlParserErrors`.
        #[doc(alias = "xmlParserErrors")]
        #[repr(C)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum XmlParserErrors {
            $(
                $variant = $code
            ),*
        }

        impl Default for XmlParserErrors {
            fn default() -> Self {
                Self::XmlErrOK
            }
        }
    };
}
impl_xml_parser_errors!(
    XmlErrOK = 0,
    XmlErrDocumentEmpty = 4,
    XmlErrDocumentEnd = 5,
    XmlErrInvalidHexCharRef = 6,
    XmlErrInvalidDecCharRef = 7,
    XmlErrInvalidChar = 9,
    XmlErrEntityRefNoName = 22,
    XmlErrEntityRefSemicolMissing = 23,
    XmlErrUndeclaredEntity = 26,
    XmlErrUnsupportedEncoding = 32,
    XmlErrStringNotStarted = 33,
    XmlErrStringNotClosed = 34,
    XmlErrLtInAttribute = 38,
    XmlErrAttributeNotStarted = 39,
    XmlErrAttributeNotFinished = 40,
    XmlErrAttributeWithoutValue = 41,
    XmlErrAttributeRedefined = 42,
    XmlErrCommentNotFinished = 45,
    XmlErrPINotStarted = 46,
    XmlErrPINotFinished = 47,
    XmlErrXMLDeclNotFinished = 57,
    XmlErrDoctypeNotFinished = 61,
    XmlErrMisplacedCDATAEnd = 62,
    XmlErrCDATANotFinished = 63,
    XmlErrReservedXmlName = 64,
    XmlErrSpaceRequired = 65,
    XmlErrNameRequired = 68,
    XmlErrGtRequired = 73,
    XmlErrLtSlashRequired = 74,
    XmlErrTagNameMismatch = 76,
    XmlErrTagNotFinished = 77,
    XmlErrStandaloneValue = 78,
    XmlErrHyphenInComment = 80,
    XmlErrInvalidEncoding = 81,
    XmlErrNoDTD = 94,
    XmlErrVersionMissing = 96,
    XmlWarUnknownVersion = 97,
);

impl<D> XmlParserCtxt<'_, D> {
    /// Handle a warning.
    #[doc(alias = "xmlWarningMsg")]
    pub(crate) fn warning_msg(&mut self, _error: XmlParserErrors, msg: fmt::Arguments<'_>) {
        if self.disable_sax || self.has_option(XmlParserOption::XmlParseNoWarning) {
            return;
        }
        let line = self.input.line;
        if let Some(warning) = self.sax.warning {
            warning(self.user_data, format_args!("line {line}: {msg}"));
        }
    }

    /// Handle a non fatal parser error.
    #[doc(alias = "xmlErrMsgStr")]
    pub(crate) fn err_msg(&mut self, error: XmlParserErrors, msg: fmt::Arguments<'_>) {
        if self.disable_sax {
            return;
        }
        self.err_no = error;
        let line = self.input.line;
        if let Some(err) = self.sax.error {
            err(self.user_data, format_args!("line {line}: {msg}"));
        }
    }

    /// Handle a fatal parser error, i.e. violating Well-Formedness constraints.
    ///
    /// Unless recovering, no SAX event is delivered afterwards.
    #[doc(alias = "xmlFatalErrMsg")]
    pub(crate) fn fatal_err_msg(&mut self, error: XmlParserErrors, msg: fmt::Arguments<'_>) {
        if self.disable_sax {
            return;
        }
        self.err_no = error;
        let line = self.input.line;
        if let Some(fatal_error) = self.sax.fatal_error {
            fatal_error(self.user_data, format_args!("line {line}: {msg}"));
        }
        self.well_formed = false;
        if !self.has_option(XmlParserOption::XmlParseRecover) {
            self.disable_sax = true;
        }
    }
}

/// Handle a warning.
macro_rules! xml_warning_msg {
    ($ctxt:expr, $error:expr, $fmt:literal $(, $args:expr )* $(,)?) => {
        $ctxt.warning_msg($error, format_args!($fmt $(, $args )*))
    };
}
pub(crate) use xml_warning_msg;

/// Handle a non fatal parser error.
macro_rules! xml_err_msg {
    ($ctxt:expr, $error:expr, $fmt:literal $(, $args:expr )* $(,)?) => {
        $ctxt.err_msg($error, format_args!($fmt $(, $args )*))
    };
}
pub(crate) use xml_err_msg;

/// Handle a fatal parser error.
macro_rules! xml_fatal_err_msg {
    ($ctxt:expr, $error:expr, $fmt:literal $(, $args:expr )* $(,)?) => {
        $ctxt.fatal_err_msg($error, format_args!($fmt $(, $args )*))
    };
}
pub(crate) use xml_fatal_err_msg;


#[cfg(test)]
impl XmlParserErrors {
    /// Test-only helper: whether this is `XmlErrOK`.
    pub(crate) fn is_ok(&self) -> bool {
        *self == Self::XmlErrOK
    }
}
