//! Provide methods and data structures for parsing XML documents.
//!
//! The parser here is a small non-validating scanner. It only understands the
//! constructs that produce SAX events: tags, attributes, character data and
//! references, comments, processing instructions, CDATA sections and the XML
//! declaration. Document type declarations are skipped.
//!
//! Everything the parser finds is pushed into an [`XmlSAXHandler`]. On a fatal
//! error the parser stops delivering events unless
//! [`XmlParserOption::XmlParseRecover`] is set.

mod error;
mod input;
mod parse;
mod sax;

use std::{fs, path::Path};

use anyhow::Context;

pub use error::XmlParserErrors;
pub(crate) use error::*;
pub use input::XmlParserInput;
pub use sax::*;

/// Parser options, combined as bit flags.
#[doc(alias = "xmlParserOption")]
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlParserOption {
    /// Keep delivering events after a fatal error.
    XmlParseRecover = 1 << 0,
    /// Suppress warning reports.
    XmlParseNoWarning = 1 << 6,
}

/// The outcome of a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseStatus {
    /// `false` once a fatal error has been detected.
    pub well_formed: bool,
    /// The last error code recorded by the parser.
    pub err_no: XmlParserErrors,
}

/// The parser context.
#[doc(alias = "xmlParserCtxt")]
pub struct XmlParserCtxt<'a, D> {
    pub(crate) sax: &'a XmlSAXHandler<D>,
    pub(crate) user_data: &'a mut D,
    pub(crate) input: XmlParserInput,
    pub(crate) options: i32,
    pub(crate) well_formed: bool,
    pub(crate) disable_sax: bool,
    pub(crate) err_no: XmlParserErrors,
    // Open elements with the line of their start tag.
    pub(crate) name_tab: Vec<(String, usize)>,
    // Character data not yet delivered to `characters`.
    pub(crate) text: String,
}

impl<'a, D> XmlParserCtxt<'a, D> {
    /// Create a new parser context delivering events to `sax`.
    #[doc(alias = "xmlNewSAXParserCtxt")]
    pub fn new(sax: &'a XmlSAXHandler<D>, user_data: &'a mut D, options: i32) -> Self {
        Self {
            sax,
            user_data,
            input: XmlParserInput::default(),
            options,
            well_formed: true,
            disable_sax: false,
            err_no: XmlParserErrors::XmlErrOK,
            name_tab: vec![],
            text: String::new(),
        }
    }

    /// Parse a whole document held in `buffer`.
    pub fn parse_memory(&mut self, buffer: &[u8]) -> ParseStatus {
        self.push_input(buffer);
        self.parse_document();
        self.status()
    }

    pub fn status(&self) -> ParseStatus {
        ParseStatus {
            well_formed: self.well_formed,
            err_no: self.err_no,
        }
    }

    pub(crate) fn has_option(&self, option: XmlParserOption) -> bool {
        self.options & option as i32 != 0
    }

    /// Check if the parse must not go further.
    pub(crate) fn halted(&self) -> bool {
        self.disable_sax
    }

    pub(crate) fn flush_text(&mut self) {
        if self.text.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.text);
        if self.halted() {
            return;
        }
        if let Some(characters) = self.sax.characters {
            characters(self.user_data, &text);
        }
    }

    pub(crate) fn sax_start_document(&mut self) {
        if let Some(start_document) = self.sax.start_document.filter(|_| !self.disable_sax) {
            start_document(self.user_data);
        }
    }

    pub(crate) fn sax_end_document(&mut self) {
        if let Some(end_document) = self.sax.end_document.filter(|_| !self.disable_sax) {
            end_document(self.user_data);
        }
    }

    pub(crate) fn sax_start_element(&mut self, name: &str, atts: &[(String, String)]) {
        if let Some(start_element) = self.sax.start_element.filter(|_| !self.disable_sax) {
            start_element(self.user_data, name, atts);
        }
    }

    pub(crate) fn sax_end_element(&mut self, name: &str) {
        if let Some(end_element) = self.sax.end_element.filter(|_| !self.disable_sax) {
            end_element(self.user_data, name);
        }
    }

    pub(crate) fn sax_cdata_block(&mut self, value: &str) {
        if let Some(cdata_block) = self.sax.cdata_block.filter(|_| !self.disable_sax) {
            cdata_block(self.user_data, value);
        }
    }

    pub(crate) fn sax_processing_instruction(&mut self, target: &str, data: Option<&str>) {
        if let Some(pi) = self
            .sax
            .processing_instruction
            .filter(|_| !self.disable_sax)
        {
            pi(self.user_data, target, data);
        }
    }

    pub(crate) fn sax_comment(&mut self, value: &str) {
        if let Some(comment) = self.sax.comment.filter(|_| !self.disable_sax) {
            comment(self.user_data, value);
        }
    }
}

/// Parse an XML document held in memory, delivering its events to `sax`.
///
/// `options` is a combination of [`XmlParserOption`]s.
#[doc(alias = "xmlSAXUserParseMemory")]
pub fn xml_sax_user_parse_memory<D>(
    sax: &XmlSAXHandler<D>,
    user_data: &mut D,
    buffer: &[u8],
    options: i32,
) -> ParseStatus {
    XmlParserCtxt::new(sax, user_data, options).parse_memory(buffer)
}

/// Parse an XML file, delivering its events to `sax`.
///
/// Failing to read the file is an `Err`; problems in the document are
/// reported through the handler's diagnostic callbacks.
#[doc(alias = "xmlSAXUserParseFile")]
pub fn xml_sax_user_parse_file<D>(
    sax: &XmlSAXHandler<D>,
    user_data: &mut D,
    filename: impl AsRef<Path>,
    options: i32,
) -> anyhow::Result<ParseStatus> {
    let filename = filename.as_ref();
    let buffer =
        fs::read(filename).with_context(|| format!("failed to load \"{}\"", filename.display()))?;
    Ok(xml_sax_user_parse_memory(sax, user_data, &buffer, options))
}

/// Check whether the character is allowed by the production
/// ```text
/// [2] Char ::= #x9 | #xA | #xD | [#x20-#xD7FF] | [#xE000-#xFFFD] | [#x10000-#x10FFFF]
/// ```
pub(crate) fn xml_is_char(c: u32) -> bool {
    matches!(c, 0x9 | 0xA | 0xD | 0x20..=0xD7FF | 0xE000..=0xFFFD | 0x10000..=0x10FFFF)
}

/// ```text
/// [3] S ::= (#x20 | #x9 | #xD | #xA)+
/// ```
pub(crate) fn xml_is_blank_char(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub(crate) trait XmlParserCharValid {
    // The productions [4] and [4a] of the Update 5 of XML-1.0.
    fn is_name_char(&self) -> bool;
    fn is_name_start_char(&self) -> bool;
}

impl XmlParserCharValid for char {
    fn is_name_char(&self) -> bool {
        let c = *self as u32;
        self.is_name_start_char()
            || self.is_ascii_digit()
            || *self == '-'
            || *self == '.'
            || c == 0xB7
            || (0x300..=0x36F).contains(&c)
            || (0x203F..=0x2040).contains(&c)
    }

    fn is_name_start_char(&self) -> bool {
        let c = *self as u32;
        self.is_ascii_alphabetic()
            || *self == '_'
            || *self == ':'
            || (0xC0..=0xD6).contains(&c)
            || (0xD8..=0xF6).contains(&c)
            || (0xF8..=0x2FF).contains(&c)
            || (0x370..=0x37D).contains(&c)
            || (0x37F..=0x1FFF).contains(&c)
            || (0x200C..=0x200D).contains(&c)
            || (0x2070..=0x218F).contains(&c)
            || (0x2C00..=0x2FEF).contains(&c)
            || (0x3001..=0xD7FF).contains(&c)
            || (0xF900..=0xFDCF).contains(&c)
            || (0xFDF0..=0xFFFD).contains(&c)
            || (0x10000..=0xEFFFF).contains(&c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_char_test() {
        for c in ['a', 'Z', '_', ':', 'é', 'あ'] {
            assert!(c.is_name_start_char(), "{c}");
            assert!(c.is_name_char(), "{c}");
        }
        for c in ['0', '-', '.', '\u{B7}'] {
            assert!(!c.is_name_start_char(), "{c}");
            assert!(c.is_name_char(), "{c}");
        }
        for c in [' ', '>', '/', '=', '"', '<', '&'] {
            assert!(!c.is_name_start_char(), "{c}");
            assert!(!c.is_name_char(), "{c}");
        }
    }

    #[test]
    fn xml_char_test() {
        assert!(xml_is_char('\t' as u32));
        assert!(xml_is_char(0x10FFFF));
        assert!(!xml_is_char(0));
        assert!(!xml_is_char(0x1F));
        assert!(!xml_is_char(0xD800));
        assert!(!xml_is_char(0xFFFE));
    }

    #[test]
    fn parse_missing_file_test() {
        let sax = XmlSAXHandler::<()>::default();
        let res = xml_sax_user_parse_file(&sax, &mut (), "does/not/exist.xml", 0);
        assert!(res.is_err());
    }
}
