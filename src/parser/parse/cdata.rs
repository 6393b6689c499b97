use crate::parser::{XmlParserCtxt, XmlParserErrors, xml_fatal_err_msg};

impl<D> XmlParserCtxt<'_, D> {
    /// Parse escaped pure raw content.
    ///
    /// ```text
    /// [18] CDSect ::= CDStart CData CDEnd
    /// [19] CDStart ::= '<![CDATA['
    /// [20] Data ::= (Char* - (Char* ']]>' Char*))
    /// [21] CDEnd ::= ']]>'
    /// ```
    ///
    /// Without a `cdata_block` callback the content joins the surrounding
    /// character data.
    #[doc(alias = "xmlParseCDSect")]
    pub(crate) fn parse_cdata(&mut self) {
        self.input.advance(9);
        let Some(end) = self.input.find("]]>") else {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrCDATANotFinished,
                "CData section not finished\n"
            );
            self.input.advance_to_end();
            return;
        };
        let value = self.input.remaining()[..end].to_owned();
        self.input.advance(end + 3);
        if self.sax.cdata_block.is_some() {
            self.flush_text();
            self.sax_cdata_block(&value);
        } else {
            self.text.push_str(&value);
        }
    }
}
