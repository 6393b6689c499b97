use crate::parser::{XmlParserCtxt, XmlParserErrors, xml_fatal_err_msg};

impl<D> XmlParserCtxt<'_, D> {
    /// Parse an attribute.
    ///
    /// ```text
    /// [41] Attribute ::= Name Eq AttValue
    /// [25] Eq ::= S? '=' S?
    /// ```
    ///
    /// While recovering, an attribute without value gets an empty one.
    #[doc(alias = "xmlParseAttribute")]
    pub(crate) fn parse_attribute(&mut self) -> Option<(String, String)> {
        let Some(name) = self.parse_name() else {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrNameRequired,
                "error parsing attribute name\n"
            );
            return None;
        };

        self.input.skip_blanks();
        if !self.input.starts_with("=") {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrAttributeWithoutValue,
                "Specification mandates value for attribute {}\n",
                name
            );
            return (!self.halted()).then(|| (name, String::new()));
        }
        self.input.advance(1);
        self.input.skip_blanks();
        let value = self.parse_att_value()?;
        Some((name, value))
    }

    /// Parse a value for an attribute, with references replaced and white
    /// spaces normalized.
    ///
    /// ```text
    /// [10] AttValue ::= '"' ([^<&"] | Reference)* '"' | "'" ([^<&'] | Reference)* "'"
    /// ```
    #[doc(alias = "xmlParseAttValue")]
    pub(crate) fn parse_att_value(&mut self) -> Option<String> {
        let quote = match self.input.current_char() {
            Some(quote @ ('"' | '\'')) => quote,
            _ => {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrAttributeNotStarted,
                    "AttValue: \" or ' expected\n"
                );
                return None;
            }
        };
        self.input.advance(1);

        let mut value = String::new();
        loop {
            match self.input.current_char() {
                None => {
                    xml_fatal_err_msg!(
                        self,
                        XmlParserErrors::XmlErrAttributeNotFinished,
                        "AttValue: ' expected\n"
                    );
                    return (!self.halted()).then_some(value);
                }
                Some(c) if c == quote => {
                    self.input.advance(1);
                    return Some(value);
                }
                Some('<') => {
                    xml_fatal_err_msg!(
                        self,
                        XmlParserErrors::XmlErrLtInAttribute,
                        "Unescaped '<' not allowed in attributes values\n"
                    );
                    if self.halted() {
                        return None;
                    }
                    value.push('<');
                    self.input.advance(1);
                }
                Some('&') => {
                    if let Some(rep) = self.parse_reference() {
                        value.push_str(&rep);
                    } else if self.halted() {
                        return None;
                    }
                }
                Some(c) => {
                    value.push(if matches!(c, '\t' | '\n') { ' ' } else { c });
                    self.input.advance(c.len_utf8());
                }
            }
        }
    }
}
