use crate::parser::{XmlParserCtxt, XmlParserErrors, xml_err_msg, xml_fatal_err_msg, xml_is_char};

impl<D> XmlParserCtxt<'_, D> {
    /// Parse a reference and return its replacement text.
    ///
    /// ```text
    /// [67] Reference ::= EntityRef | CharRef
    /// [68] EntityRef ::= '&' Name ';'
    /// ```
    ///
    /// Only the predefined entities are known. Any other entity reference is
    /// an error and is kept verbatim.
    #[doc(alias = "xmlParseReference")]
    pub(crate) fn parse_reference(&mut self) -> Option<String> {
        if self.input.starts_with("&#") {
            return self.parse_char_ref().map(String::from);
        }

        self.input.advance(1);
        let Some(name) = self.parse_name() else {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrEntityRefNoName,
                "xmlParseEntityRef: no name\n"
            );
            return None;
        };
        if !self.input.starts_with(";") {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrEntityRefSemicolMissing,
                "EntityRef: expecting ';'\n"
            );
            return None;
        }
        self.input.advance(1);

        let value = match name.as_str() {
            "lt" => "<",
            "gt" => ">",
            "amp" => "&",
            "apos" => "'",
            "quot" => "\"",
            _ => {
                xml_err_msg!(
                    self,
                    XmlParserErrors::XmlErrUndeclaredEntity,
                    "Entity '{}' not defined\n",
                    name
                );
                return Some(format!("&{name};"));
            }
        };
        Some(value.to_owned())
    }

    /// Parse a character reference.
    ///
    /// ```text
    /// [66] CharRef ::= '&#' [0-9]+ ';' | '&#x' [0-9a-fA-F]+ ';'
    /// ```
    ///
    /// The referenced character must match the Char production.
    #[doc(alias = "xmlParseCharRef")]
    pub(crate) fn parse_char_ref(&mut self) -> Option<char> {
        self.input.advance(2);
        let hex = self.input.starts_with("x");
        let digits = if hex {
            self.input.advance(1);
            self.input.consume_while(|c| c.is_ascii_hexdigit())
        } else {
            self.input.consume_while(|c| c.is_ascii_digit())
        };

        if digits.is_empty() || !self.input.starts_with(";") {
            if hex {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrInvalidHexCharRef,
                    "xmlParseCharRef: invalid hexadecimal value\n"
                );
            } else {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrInvalidDecCharRef,
                    "xmlParseCharRef: invalid decimal value\n"
                );
            }
            return None;
        }
        self.input.advance(1);

        let value = u32::from_str_radix(&digits, if hex { 16 } else { 10 }).ok();
        if let Some(c) = value
            .filter(|&value| xml_is_char(value))
            .and_then(char::from_u32)
        {
            return Some(c);
        }
        let shown = value.map_or(digits, |value| value.to_string());
        xml_fatal_err_msg!(
            self,
            XmlParserErrors::XmlErrInvalidChar,
            "xmlParseCharRef: invalid xmlChar value {}\n",
            shown
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        parser::{XmlParserErrors, XmlParserOption},
        test_util::parse_events,
    };

    #[test]
    fn references_are_merged_into_text_test() {
        let (events, _) = parse_events("<a>1 &lt; 2 &amp;&amp; &#x3042;&#12354;&quot;&gt;</a>", 0);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(a)",
                "SAX.characters(1 < 2 && ああ\">)",
                "SAX.endElement(a)",
                "SAX.endDocument()",
            ]
        );
    }

    #[test]
    fn undefined_entity_test() {
        let (events, status) = parse_events("<a>&nbsp;x</a>", 0);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(a)",
                "SAX.error: line 1: Entity 'nbsp' not defined",
                "SAX.characters(&nbsp;x)",
                "SAX.endElement(a)",
                "SAX.endDocument()",
            ]
        );
        assert!(status.well_formed);
        assert_eq!(status.err_no, XmlParserErrors::XmlErrUndeclaredEntity);
    }

    #[test]
    fn invalid_char_ref_test() {
        let (events, status) = parse_events("<a>&#0;</a>", 0);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(a)",
                "SAX.fatalError: line 1: xmlParseCharRef: invalid xmlChar value 0",
            ]
        );
        assert_eq!(status.err_no, XmlParserErrors::XmlErrInvalidChar);

        let (events, _) = parse_events("<a>&#xZZ;</a>", 0);
        assert_eq!(
            events[2],
            "SAX.fatalError: line 1: xmlParseCharRef: invalid hexadecimal value"
        );

        let (events, _) = parse_events("<a>&#99999999999;</a>", 0);
        assert_eq!(
            events[2],
            "SAX.fatalError: line 1: xmlParseCharRef: invalid xmlChar value 99999999999"
        );
    }

    #[test]
    fn malformed_entity_ref_test() {
        let (events, _) = parse_events("<a>AT&T</a>", XmlParserOption::XmlParseRecover as i32);
        assert_eq!(
            events,
            [
                "SAX.startDocument()",
                "SAX.startElement(a)",
                "SAX.fatalError: line 1: EntityRef: expecting ';'",
                "SAX.characters(AT)",
                "SAX.endElement(a)",
                "SAX.endDocument()",
            ]
        );

        let (events, _) = parse_events("<a>& b</a>", 0);
        assert_eq!(events[2], "SAX.fatalError: line 1: xmlParseEntityRef: no name");
    }
}
