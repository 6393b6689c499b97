use crate::parser::{XmlParserCtxt, XmlParserErrors, xml_fatal_err_msg, xml_warning_msg};

impl<D> XmlParserCtxt<'_, D> {
    /// Parse an XML declaration header.
    ///
    /// ```text
    /// [23] XMLDecl ::= '<?xml' VersionInfo EncodingDecl? SDDecl? S? '?>'
    /// ```
    ///
    /// The encoding has already been applied by the time the declaration is
    /// read, so `encoding` is only checked for syntax.
    #[doc(alias = "xmlParseXMLDecl")]
    pub(crate) fn parse_xmldecl(&mut self) {
        self.input.advance(5);
        let mut version = None;
        loop {
            let blanks = self.input.skip_blanks();
            if self.input.starts_with("?>") {
                self.input.advance(2);
                break;
            }
            let name = self
                .parse_name()
                .filter(|name| matches!(name.as_str(), "version" | "encoding" | "standalone"));
            let Some(name) = name else {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrXMLDeclNotFinished,
                    "parsing XML declaration: '?>' expected\n"
                );
                self.skip_xmldecl();
                return;
            };
            if blanks == 0 {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrSpaceRequired,
                    "Blank needed here\n"
                );
                if self.halted() {
                    return;
                }
            }
            let Some(value) = self.parse_pseudo_att_value() else {
                self.skip_xmldecl();
                return;
            };

            match name.as_str() {
                "version" => version = Some(value),
                "standalone" if value != "yes" && value != "no" => {
                    xml_fatal_err_msg!(
                        self,
                        XmlParserErrors::XmlErrStandaloneValue,
                        "standalone accepts only 'yes' or 'no'\n"
                    );
                    if self.halted() {
                        return;
                    }
                }
                _ => {}
            }
        }

        match version {
            None => {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrVersionMissing,
                    "Malformed declaration expecting version\n"
                );
            }
            Some(version) if version != "1.0" => {
                xml_warning_msg!(
                    self,
                    XmlParserErrors::XmlWarUnknownVersion,
                    "Unsupported version '{}'\n",
                    version
                );
            }
            Some(_) => {}
        }
    }

    /// Parse `Eq` and the quoted value of a pseudo-attribute.
    fn parse_pseudo_att_value(&mut self) -> Option<String> {
        self.input.skip_blanks();
        let quote = if self.input.starts_with("=") {
            self.input.advance(1);
            self.input.skip_blanks();
            self.input.current_char().filter(|&c| c == '"' || c == '\'')
        } else {
            None
        };
        let Some(quote) = quote else {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrStringNotStarted,
                "String not started expecting ' or \"\n"
            );
            return None;
        };
        self.input.advance(1);

        let value = self.input.consume_while(|c| c != quote && c != '?' && c != '>');
        if self.input.current_char() != Some(quote) {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrStringNotClosed,
                "String not closed expecting \" or '\n"
            );
            return None;
        }
        self.input.advance(1);
        Some(value)
    }

    /// Skip the rest of a broken declaration.
    fn skip_xmldecl(&mut self) {
        match self.input.find("?>") {
            Some(end) => self.input.advance(end + 2),
            None => self.input.advance_to_end(),
        }
    }
}
