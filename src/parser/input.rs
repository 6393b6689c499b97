use std::borrow::Cow;

use encoding_rs::{Encoding, REPLACEMENT, UTF_8, UTF_16BE, UTF_16LE};

use super::{XmlParserCtxt, XmlParserErrors, xml_err_msg, xml_is_blank_char};

/// An input flow for the XML processor.
///
/// The whole document is decoded to UTF-8 up front, with line ends normalized
/// to `\n`.
#[doc(alias = "xmlParserInput")]
#[derive(Debug, Clone)]
pub struct XmlParserInput {
    content: String,
    cur: usize,
    /// Current line, starting at 1.
    pub line: usize,
    /// Current column, starting at 1.
    pub col: usize,
}

impl Default for XmlParserInput {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl XmlParserInput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            cur: 0,
            line: 1,
            col: 1,
        }
    }

    /// The part of the input not consumed yet.
    pub fn remaining(&self) -> &str {
        &self.content[self.cur..]
    }

    pub fn is_eof(&self) -> bool {
        self.cur >= self.content.len()
    }

    pub fn current_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub(crate) fn nth_char(&self, n: usize) -> Option<char> {
        self.remaining().chars().nth(n)
    }

    pub(crate) fn starts_with(&self, pat: &str) -> bool {
        self.remaining().starts_with(pat)
    }

    /// Byte offset of `pat` from the current position.
    pub(crate) fn find(&self, pat: &str) -> Option<usize> {
        self.remaining().find(pat)
    }

    /// Consume `len` bytes. `len` is clamped to the remaining input and must
    /// fall on a character boundary.
    pub(crate) fn advance(&mut self, len: usize) {
        let end = (self.cur + len).min(self.content.len());
        for c in self.content[self.cur..end].chars() {
            if c == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.cur = end;
    }

    pub(crate) fn advance_to_end(&mut self) {
        self.advance(self.content.len() - self.cur);
    }

    pub(crate) fn next_char(&mut self) -> Option<char> {
        let c = self.current_char()?;
        self.advance(c.len_utf8());
        Some(c)
    }

    pub(crate) fn consume_while(&mut self, mut f: impl FnMut(char) -> bool) -> String {
        let len = self
            .remaining()
            .char_indices()
            .find(|&(_, c)| !f(c))
            .map_or(self.content.len() - self.cur, |(i, _)| i);
        let res = self.remaining()[..len].to_owned();
        self.advance(len);
        res
    }

    /// Skip blank chars and return how many were skipped.
    pub(crate) fn skip_blanks(&mut self) -> usize {
        self.consume_while(xml_is_blank_char).len()
    }
}

pub(crate) struct DecodedInput {
    pub(crate) content: String,
    pub(crate) encoding: &'static Encoding,
    pub(crate) unsupported: Option<String>,
    pub(crate) malformed: bool,
}

/// Guess the encoding of `buffer` and decode it.
///
/// A byte order mark wins over the encoding declaration. Without either, the
/// document is read as UTF-8.
pub(crate) fn decode_input(buffer: &[u8]) -> DecodedInput {
    let mut unsupported = None;
    let encoding = if let Some((encoding, _)) = Encoding::for_bom(buffer) {
        encoding
    } else if let Some(label) = sniff_declared_encoding(buffer) {
        match Encoding::for_label(label.as_bytes()) {
            // The declaration was readable as ASCII, so the document is not UTF-16.
            Some(encoding) if encoding == UTF_16LE || encoding == UTF_16BE => UTF_8,
            Some(encoding) if encoding != REPLACEMENT => encoding,
            _ => {
                unsupported = Some(label.to_owned());
                UTF_8
            }
        }
    } else {
        UTF_8
    };

    let (text, encoding, malformed) = encoding.decode(buffer);
    let content = match text {
        Cow::Borrowed(text) if !text.contains('\r') => text.to_owned(),
        Cow::Owned(text) if !text.contains('\r') => text,
        text => text.replace("\r\n", "\n").replace('\r', "\n"),
    };
    DecodedInput {
        content,
        encoding,
        unsupported,
        malformed,
    }
}

/// Find the value of the `encoding` pseudo-attribute of a leading XML declaration.
fn sniff_declared_encoding(buffer: &[u8]) -> Option<&str> {
    let decl = buffer.strip_prefix(b"<?xml")?;
    let end = decl.windows(2).position(|w| w == b"?>")?;
    let decl = &decl[..end];
    let pos = decl.windows(8).position(|w| w == b"encoding")?;
    let rest = decl[pos + 8..].trim_ascii_start();
    let rest = rest.strip_prefix(b"=")?.trim_ascii_start();
    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let end = rest.iter().position(|&b| b == quote)?;
    std::str::from_utf8(&rest[..end]).ok()
}

impl<D> XmlParserCtxt<'_, D> {
    /// Decode `buffer` and make it the current input.
    pub(crate) fn push_input(&mut self, buffer: &[u8]) {
        let decoded = decode_input(buffer);
        self.input = XmlParserInput::new(decoded.content);
        if let Some(label) = decoded.unsupported {
            xml_err_msg!(
                self,
                XmlParserErrors::XmlErrUnsupportedEncoding,
                "Unsupported encoding {}\n",
                label
            );
        }
        if decoded.malformed {
            let name = decoded.encoding.name();
            xml_err_msg!(
                self,
                XmlParserErrors::XmlErrInvalidEncoding,
                "Input is not proper {}, indicate encoding !\n",
                name
            );
        }
    }
}
