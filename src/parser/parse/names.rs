use crate::parser::{XmlParserCharValid, XmlParserCtxt};

impl<D> XmlParserCtxt<'_, D> {
    /// Parse an XML name.
    ///
    /// ```text
    /// [5] Name ::= NameStartChar (NameChar)*
    /// ```
    ///
    /// Returns `None` without consuming anything if no name starts here.
    #[doc(alias = "xmlParseName")]
    pub(crate) fn parse_name(&mut self) -> Option<String> {
        if !self.input.current_char()?.is_name_start_char() {
            return None;
        }
        Some(self.input.consume_while(|c| c.is_name_char()))
    }
}
