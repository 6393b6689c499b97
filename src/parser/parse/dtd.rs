use crate::parser::{XmlParserCtxt, XmlParserErrors, xml_fatal_err_msg, xml_warning_msg};

impl<D> XmlParserCtxt<'_, D> {
    /// Skip a document type declaration.
    ///
    /// ```text
    /// [28] doctypedecl ::= '<!DOCTYPE' S Name (S ExternalID)? S? ('[' intSubset ']' S?)? '>'
    /// ```
    ///
    /// Neither the internal nor the external subset is processed.
    #[doc(alias = "xmlParseDocTypeDecl")]
    pub(crate) fn parse_doctype(&mut self) {
        let Some(end) = find_doctype_end(self.input.remaining()) else {
            xml_fatal_err_msg!(
                self,
                XmlParserErrors::XmlErrDoctypeNotFinished,
                "DOCTYPE improperly terminated\n"
            );
            self.input.advance_to_end();
            return;
        };
        xml_warning_msg!(
            self,
            XmlParserErrors::XmlErrNoDTD,
            "DOCTYPE declaration skipped, DTDs are not processed\n"
        );
        self.input.advance(end);
    }
}

/// Find the end of the declaration at the head of `rest`, returning the
/// length up to and including its closing `>`.
///
/// Quoted literals and comments may contain `>`, and so may the
/// declarations inside the internal subset.
fn find_doctype_end(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let mut depth = 0usize;
    let mut quote = None;
    let mut i = "<!DOCTYPE".len();
    while i < bytes.len() {
        let b = bytes[i];
        if let Some(q) = quote {
            if b == q {
                quote = None;
            }
            i += 1;
            continue;
        }
        match b {
            b'"' | b'\'' => quote = Some(b),
            b'<' if bytes[i..].starts_with(b"<!--") => {
                let close = rest[i + 4..].find("-->")?;
                i += 4 + close + 3;
                continue;
            }
            b'[' => depth += 1,
            b']' => depth = depth.saturating_sub(1),
            b'>' if depth == 0 => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}
