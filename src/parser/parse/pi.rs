use crate::parser::{XmlParserCtxt, XmlParserErrors, xml_fatal_err_msg, xml_warning_msg};

impl<D> XmlParserCtxt<'_, D> {
    /// Parse an XML Processing Instruction.
    ///
    /// ```text
    /// [16] PI ::= '<?' PITarget (S (Char* - (Char* '?>' Char*)))? '?>'
    /// ```
    ///
    /// If the PI has no data, the callback receives `None`.
    #[doc(alias = "xmlParsePI")]
    pub(crate) fn parse_pi(&mut self) {
        self.input.advance(2);
        let Some(target) = self.parse_pi_target() else {
            return;
        };

        if self.input.starts_with("?>") {
            self.input.advance(2);
            self.sax_processing_instruction(&target, None);
            return;
        }
        if self.input.skip_blanks() == 0 {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrSpaceRequired,
                "ParsePI: PI {} space expected\n",
                target
            );
            if self.halted() {
                return;
            }
        }
        let Some(end) = self.input.find("?>") else {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrPINotFinished,
                "PI {} never end ...\n",
                target
            );
            self.input.advance_to_end();
            return;
        };
        let data = self.input.remaining()[..end].to_owned();
        self.input.advance(end + 2);
        self.sax_processing_instruction(&target, Some(&data));
    }

    /// Parse the name of a PI.
    ///
    /// ```text
    /// [17] PITarget ::= Name - (('X' | 'x') ('M' | 'm') ('L' | 'l'))
    /// ```
    #[doc(alias = "xmlParsePITarget")]
    fn parse_pi_target(&mut self) -> Option<String> {
        let Some(target) = self.parse_name() else {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrPINotStarted,
                "xmlParsePI : no target name\n"
            );
            return None;
        };

        if target.eq_ignore_ascii_case("xml") {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrReservedXmlName,
                "XML declaration allowed only at the start of the document\n"
            );
            if self.halted() {
                return None;
            }
        } else if target
            .get(..3)
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case("xml"))
            && target != "xml-stylesheet"
            && target != "xml-model"
        {
            xml_warning_msg!(
                self,
                XmlParserErrors::XmlErrReservedXmlName,
                "xmlParsePITarget: invalid name prefix 'xml'\n"
            );
        }
        Some(target)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        parser::{XmlParserErrors, XmlParserOption},
        test_util::parse_events,
    };

    #[test]
    fn processing_instruction_test() {
        let (events, status) = parse_events(
            "<?xml-stylesheet href=\"a.xsl\"?>\n<a><?php echo 1; ?><?empty?></a>",
            0,
        );
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.processingInstruction(xml-stylesheet, href=\"a.xsl\")",
                "SAX.startElement(a)",
                "SAX.processingInstruction(php, echo 1; )",
                "SAX.processingInstruction(empty, NULL)",
                "SAX.endElement(a)",
                "SAX.endDocument()",
            ]
        );
        assert!(status.well_formed);
    }

    #[test]
    fn reserved_target_test() {
        let (events, status) = parse_events("<a><?xmlfoo data?></a>", 0);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(a)",
                "SAX.warning: line 1: xmlParsePITarget: invalid name prefix 'xml'",
                "SAX.processingInstruction(xmlfoo, data)",
                "SAX.endElement(a)",
                "SAX.endDocument()",
            ]
        );
        assert!(status.well_formed);

        let (events, _) = parse_events(
            "<a><?xmlfoo data?></a>",
            XmlParserOption::XmlParseNoWarning as i32,
        );
        assert!(!events.iter().any(|e| e.starts_with("SAX.warning")));

        let (events, status) = parse_events("<a/>\n<?XML version=\"1.0\"?>", 0);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(a)",
                "SAX.endElement(a)",
                "SAX.fatalError: line 2: XML declaration allowed only at the start of the document",
            ]
        );
        assert_eq!(status.err_no, XmlParserErrors::XmlErrReservedXmlName);
    }

    #[test]
    fn malformed_pi_test() {
        let (events, _) = parse_events("<a><? x?></a>", 0);
        assert_eq!(events[2], "SAX.fatalError: line 1: xmlParsePI : no target name");

        let (events, _) = parse_events("<a><?pi\"x\"?></a>", 0);
        assert_eq!(events[2], "SAX.fatalError: line 1: ParsePI: PI pi space expected");

        let (events, status) = parse_events("<a><?pi data</a>", 0);
        assert_eq!(events[2], "SAX.fatalError: line 1: PI pi never end ...");
        assert_eq!(status.err_no, XmlParserErrors::XmlErrPINotFinished);
    }
}
