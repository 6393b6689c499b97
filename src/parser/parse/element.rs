use crate::parser::{XmlParserCtxt, XmlParserErrors, xml_fatal_err_msg};

impl<D> XmlParserCtxt<'_, D> {
    /// Parse a start tag. The element is pushed on `name_tab` unless it is an
    /// empty-element tag.
    ///
    /// ```text
    /// [40] STag ::= '<' Name (S Attribute)* S? '>'
    /// [44] EmptyElemTag ::= '<' Name (S Attribute)* S? '/>'
    /// ```
    #[doc(alias = "xmlParseStartTag")]
    pub(crate) fn parse_start_tag(&mut self) {
        let line = self.input.line;
        self.input.advance(1);
        let Some(name) = self.parse_name() else {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrNameRequired,
                "StartTag: invalid element name\n"
            );
            self.text.push('<');
            return;
        };

        let mut atts: Vec<(String, String)> = vec![];
        loop {
            let blanks = self.input.skip_blanks();
            if self.input.starts_with("/>") {
                self.input.advance(2);
                self.sax_start_element(&name, &atts);
                self.sax_end_element(&name);
                return;
            }
            if self.input.starts_with(">") {
                self.input.advance(1);
                self.sax_start_element(&name, &atts);
                self.name_tab.push((name, line));
                return;
            }
            if self.input.is_eof() {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrGtRequired,
                    "Couldn't find end of Start Tag {} line {}\n",
                    name,
                    line
                );
                self.sax_start_element(&name, &atts);
                self.name_tab.push((name, line));
                return;
            }
            if blanks == 0 {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrSpaceRequired,
                    "attributes construct error\n"
                );
                if self.halted() {
                    return;
                }
            }

            let Some((att_name, value)) = self.parse_attribute() else {
                if self.halted() {
                    return;
                }
                self.input.next_char();
                continue;
            };
            if atts.iter().any(|(n, _)| *n == att_name) {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrAttributeRedefined,
                    "Attribute {} redefined\n",
                    att_name
                );
                if self.halted() {
                    return;
                }
                continue;
            }
            atts.push((att_name, value));
        }
    }

    /// Parse an end tag and close the current element.
    ///
    /// ```text
    /// [42] ETag ::= '</' Name S? '>'
    /// ```
    #[doc(alias = "xmlParseEndTag")]
    pub(crate) fn parse_end_tag(&mut self) {
        self.input.advance(2);
        let name = self.parse_name();
        self.input.skip_blanks();
        if !self.input.starts_with(">") {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrGtRequired,
                "expected '>'\n"
            );
        } else {
            self.input.advance(1);
        }

        let Some((open, line)) = self.name_tab.pop() else {
            return;
        };
        match name {
            Some(name) if name == open => {}
            Some(name) => {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrTagNameMismatch,
                    "Opening and ending tag mismatch: {} line {} and {}\n",
                    open,
                    line,
                    name
                );
            }
            None => {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrLtSlashRequired,
                    "EndTag: '</' not found\n"
                );
            }
        }
        self.sax_end_element(&open);
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        parser::{XmlParserErrors, XmlParserOption},
        test_util::parse_events,
    };

    #[test]
    fn start_tag_test() {
        let (events, _) = parse_events("<root a='1'  b=\"2\"><e/><f x='y' /></root >", 0);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(root, a='1', b='2')",
                "SAX.startElement(e)",
                "SAX.endElement(e)",
                "SAX.startElement(f, x='y')",
                "SAX.endElement(f)",
                "SAX.endElement(root)",
                "SAX.endDocument()",
            ]
        );
    }

    #[test]
    fn tag_mismatch_test() {
        let (events, status) = parse_events("<a>\n<b>\n</a>\n</b>", 0);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(a)",
                "SAX.characters(\n)",
                "SAX.startElement(b)",
                "SAX.characters(\n)",
                "SAX.fatalError: line 3: Opening and ending tag mismatch: b line 2 and a",
            ]
        );
        assert!(!status.well_formed);
        assert_eq!(status.err_no, XmlParserErrors::XmlErrTagNameMismatch);
    }

    #[test]
    fn tag_mismatch_recover_test() {
        let (events, status) =
            parse_events("<a><b></a></b>", XmlParserOption::XmlParseRecover as i32);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(a)",
                "SAX.startElement(b)",
                "SAX.fatalError: line 1: Opening and ending tag mismatch: b line 1 and a",
                "SAX.endElement(b)",
                "SAX.fatalError: line 1: Opening and ending tag mismatch: a line 1 and b",
                "SAX.endElement(a)",
                "SAX.endDocument()",
            ]
        );
        assert!(!status.well_formed);
    }

    #[test]
    fn invalid_element_name_test() {
        let (events, _) = parse_events("<a><1/></a>", 0);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(a)",
                "SAX.fatalError: line 1: StartTag: invalid element name",
            ]
        );
    }

    #[test]
    fn unfinished_start_tag_test() {
        let (events, status) = parse_events("<a b='c'", 0);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.fatalError: line 1: Couldn't find end of Start Tag a line 1",
            ]
        );
        assert_eq!(status.err_no, XmlParserErrors::XmlErrGtRequired);
    }
}
