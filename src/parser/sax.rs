//! SAX callback table.
//!
//! A parser never interprets the document itself. It pushes structural events
//! and diagnostics into an [`XmlSAXHandler`], handing every callback the user
//! data it was started with.

use std::fmt;

/// Called when the document start being processed.
#[doc(alias = "startDocumentSAXFunc")]
pub type StartDocumentSAXFunc<D> = fn(&mut D);

/// Called when the document end has been detected.
#[doc(alias = "endDocumentSAXFunc")]
pub type EndDocumentSAXFunc<D> = fn(&mut D);

/// Called when an opening tag has been processed.
///
/// The elements of `atts` are `(attribute_name, attribute_value)` in document order.
#[doc(alias = "startElementSAXFunc")]
pub type StartElementSAXFunc<D> = fn(&mut D, &str, &[(String, String)]);

/// Called when the end of an element has been detected.
#[doc(alias = "endElementSAXFunc")]
pub type EndElementSAXFunc<D> = fn(&mut D, &str);

/// Receiving some chars from the parser.
#[doc(alias = "charactersSAXFunc")]
pub type CharactersSAXFunc<D> = fn(&mut D, &str);

/// Called when a CDATA section has been parsed.
#[doc(alias = "cdataBlockSAXFunc")]
pub type CDATABlockSAXFunc<D> = fn(&mut D, &str);

/// A processing instruction has been parsed.
#[doc(alias = "processingInstructionSAXFunc")]
pub type ProcessingInstructionSAXFunc<D> = fn(&mut D, &str, Option<&str>);

/// A comment has been parsed.
#[doc(alias = "commentSAXFunc")]
pub type CommentSAXFunc<D> = fn(&mut D, &str);

/// Display and format a warning messages, callback.
#[doc(alias = "warningSAXFunc")]
pub type WarningSAXFunc<D> = fn(&mut D, fmt::Arguments<'_>);

/// Display and format an error messages, callback.
#[doc(alias = "errorSAXFunc")]
pub type ErrorSAXFunc<D> = fn(&mut D, fmt::Arguments<'_>);

/// Display and format fatal error messages, callback.
#[doc(alias = "fatalErrorSAXFunc")]
pub type FatalErrorSAXFunc<D> = fn(&mut D, fmt::Arguments<'_>);

/// A SAX handler is bunch of callbacks called by the parser when processing
/// of the input generate data or structure information.
///
/// Unset callbacks are skipped. If `cdata_block` is unset, the content of CDATA
/// sections is delivered through `characters`.
#[doc(alias = "xmlSAXHandler")]
pub struct XmlSAXHandler<D> {
    pub start_document: Option<StartDocumentSAXFunc<D>>,
    pub end_document: Option<EndDocumentSAXFunc<D>>,
    pub start_element: Option<StartElementSAXFunc<D>>,
    pub end_element: Option<EndElementSAXFunc<D>>,
    pub characters: Option<CharactersSAXFunc<D>>,
    pub cdata_block: Option<CDATABlockSAXFunc<D>>,
    pub processing_instruction: Option<ProcessingInstructionSAXFunc<D>>,
    pub comment: Option<CommentSAXFunc<D>>,
    pub warning: Option<WarningSAXFunc<D>>,
    pub error: Option<ErrorSAXFunc<D>>,
    pub fatal_error: Option<FatalErrorSAXFunc<D>>,
}

// Derives would put a bound on `D`, but only function pointers are stored.
impl<D> Default for XmlSAXHandler<D> {
    fn default() -> Self {
        Self {
            start_document: None,
            end_document: None,
            start_element: None,
            end_element: None,
            characters: None,
            cdata_block: None,
            processing_instruction: None,
            comment: None,
            warning: None,
            error: None,
            fatal_error: None,
        }
    }
}

impl<D> Clone for XmlSAXHandler<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for XmlSAXHandler<D> {}

impl<D> fmt::Debug for XmlSAXHandler<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlSAXHandler")
            .field("start_document", &self.start_document.is_some())
            .field("end_document", &self.end_document.is_some())
            .field("start_element", &self.start_element.is_some())
            .field("end_element", &self.end_element.is_some())
            .field("characters", &self.characters.is_some())
            .field("cdata_block", &self.cdata_block.is_some())
            .field(
                "processing_instruction",
                &self.processing_instruction.is_some(),
            )
            .field("comment", &self.comment.is_some())
            .field("warning", &self.warning.is_some())
            .field("error", &self.error.is_some())
            .field("fatal_error", &self.fatal_error.is_some())
            .finish()
    }
}
