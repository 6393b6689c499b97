use crate::parser::{XmlParserCtxt, XmlParserErrors, xml_fatal_err_msg};

impl<D> XmlParserCtxt<'_, D> {
    /// Parse an XML (SGML) comment.
    ///
    /// ```text
    /// [15] Comment ::= '<!--' ((Char - '-') | ('-' (Char - '-')))* '-->'
    /// ```
    #[doc(alias = "xmlParseComment")]
    pub(crate) fn parse_comment(&mut self) {
        self.input.advance(4);
        let mut from = 0;
        loop {
            let Some(at) = self.input.remaining()[from..].find("--") else {
                xml_fatal_err_msg!(
                    self,
                    XmlParserErrors::XmlErrCommentNotFinished,
                    "Comment not terminated\n"
                );
                self.input.advance_to_end();
                return;
            };
            let at = from + at;
            if self.input.remaining()[at + 2..].starts_with('>') {
                let value = self.input.remaining()[..at].to_owned();
                self.input.advance(at + 3);
                self.sax_comment(&value);
                return;
            }
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrHyphenInComment,
                "Double hyphen within comment\n"
            );
            if self.halted() {
                return;
            }
            from = at + 1;
        }
    }
}
