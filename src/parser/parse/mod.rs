//! Scanning routines, one module per production family.
//!
//! Each routine consumes at least one character whenever it is entered, so the
//! loops driving them always make progress, even while recovering.

mod attribute;
mod cdata;
mod comment;
mod dtd;
mod element;
mod names;
mod pi;
mod reference;
mod xmldecl;

use crate::parser::{XmlParserCtxt, XmlParserErrors, xml_fatal_err_msg, xml_is_blank_char};

impl<D> XmlParserCtxt<'_, D> {
    /// Parse an XML document.
    ///
    /// ```text
    /// [1] document ::= prolog element Misc*
    /// [22] prolog ::= XMLDecl? Misc* (doctypedecl Misc*)?
    /// ```
    #[doc(alias = "xmlParseDocument")]
    pub(crate) fn parse_document(&mut self) {
        self.sax_start_document();
        if self.input.is_eof() {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrDocumentEmpty,
                "Document is empty\n"
            );
            return;
        }

        if self.input.starts_with("<?xml") && self.input.nth_char(5).is_some_and(xml_is_blank_char)
        {
            self.parse_xmldecl();
            if self.halted() {
                return;
            }
        }

        self.parse_misc(true);
        if self.halted() {
            return;
        }
        if !self.input.starts_with("<") {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrDocumentEmpty,
                "Start tag expected, '<' not found\n"
            );
            return;
        }
        self.parse_element();

        self.parse_misc(false);
        if !self.input.is_eof() {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrDocumentEnd,
                "Extra content at the end of the document\n"
            );
        }
        self.sax_end_document();
    }

    /// Parse an XML Misc* optional field.
    ///
    /// ```text
    /// [27] Misc ::= Comment | PI |  S
    /// ```
    ///
    /// If `doctype` is `true`, one document type declaration is accepted too.
    #[doc(alias = "xmlParseMisc")]
    pub(crate) fn parse_misc(&mut self, mut doctype: bool) {
        while !self.halted() {
            self.input.skip_blanks();
            if self.input.starts_with("<?") {
                self.parse_pi();
            } else if self.input.starts_with("<!--") {
                self.parse_comment();
            } else if doctype && self.input.starts_with("<!DOCTYPE") {
                self.parse_doctype();
                doctype = false;
            } else {
                break;
            }
        }
    }

    /// Parse an element and all of its content.
    ///
    /// ```text
    /// [39] element ::= EmptyElemTag | STag content ETag
    /// [43] content ::= (element | CharData | Reference | CDSect | PI | Comment)*
    /// ```
    ///
    /// Nested elements are handled iteratively through `name_tab`.
    #[doc(alias = "xmlParseElement")]
    pub(crate) fn parse_element(&mut self) {
        let depth = self.name_tab.len();
        self.parse_start_tag();
        while self.name_tab.len() > depth && !self.halted() {
            if self.input.is_eof() {
                self.flush_text();
                if let Some((name, line)) = self.name_tab.last().cloned() {
                    xml_fatal_err_msg!(
                        self,
                        XmlParserErrors::XmlErrTagNotFinished,
                        "Premature end of data in tag {} line {}\n",
                        name,
                        line
                    );
                }
                while self.name_tab.len() > depth {
                    if let Some((name, _)) = self.name_tab.pop() {
                        self.sax_end_element(&name);
                    }
                }
                return;
            }

            if self.input.starts_with("</") {
                self.flush_text();
                self.parse_end_tag();
            } else if self.input.starts_with("<?") {
                self.flush_text();
                self.parse_pi();
            } else if self.input.starts_with("<!--") {
                self.flush_text();
                self.parse_comment();
            } else if self.input.starts_with("<![CDATA[") {
                self.parse_cdata();
            } else if self.input.starts_with("<") {
                self.flush_text();
                self.parse_start_tag();
            } else if self.input.starts_with("&") {
                if let Some(value) = self.parse_reference() {
                    self.text.push_str(&value);
                }
            } else {
                self.parse_char_data();
            }
        }
    }

    /// Parse character data up to the next markup or reference.
    ///
    /// ```text
    /// [14] CharData ::= [^<&]* - ([^<&]* ']]>' [^<&]*)
    /// ```
    #[doc(alias = "xmlParseCharData")]
    pub(crate) fn parse_char_data(&mut self) {
        let data = self.input.consume_while(|c| c != '<' && c != '&');
        if data.contains("]]>") {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrMisplacedCDATAEnd,
                "Sequence ']]>' not allowed in content\n"
            );
        }
        self.text.push_str(&data);
    }
}
