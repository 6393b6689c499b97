//! The user data of the SAX callbacks, printing the line oriented projection
//! of a document.
//!
//! Every line starts with the path of the current element, `/` joined names of
//! the open elements:
//!
//! ```text
//! /catalog@[lang="en"]
//! /catalog/book/title="Dune"
//! /catalog/book/pi?[data]
//! /catalog/book/![a comment]
//! /catalog/empty
//! ```
//!
//! An element producing no line of its own is printed bare, once, before its
//! first child or at its end.

use std::{
    borrow::Cow,
    fmt,
    io::{self, Stderr, Write},
};

use crate::{
    config::ProgramOpts,
    error::{DiagnosticReporter, Severity},
    parser::XmlSAXHandler,
};

/// An open element.
#[derive(Debug, Clone, Default)]
pub struct XmlTag {
    name: String,
    printed: bool,
}

impl XmlTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            printed: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if a line for this element has already been printed.
    pub fn printed(&self) -> bool {
        self.printed
    }
}

impl fmt::Display for XmlTag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Printer state of one document.
///
/// Diagnostics from the parser are forwarded to `reporter`. Output goes to
/// `out`; the first write failure stops the output and is returned by
/// [`ParserData::finish`].
pub struct ParserData<'a, W: Write, R: Write = Stderr> {
    tags: Vec<XmlTag>,
    out: W,
    opts: &'a ProgramOpts,
    reporter: &'a DiagnosticReporter<R>,
    io_error: Option<io::Error>,
}

impl<'a, W: Write, R: Write> ParserData<'a, W, R> {
    pub fn new(out: W, opts: &'a ProgramOpts, reporter: &'a DiagnosticReporter<R>) -> Self {
        Self::with_capacity(0, out, opts, reporter)
    }

    /// Create a printer with room for `depth` nested elements.
    pub fn with_capacity(
        depth: usize,
        out: W,
        opts: &'a ProgramOpts,
        reporter: &'a DiagnosticReporter<R>,
    ) -> Self {
        Self {
            tags: Vec::with_capacity(depth),
            out,
            opts,
            reporter,
            io_error: None,
        }
    }

    /// The callbacks printing the projection.
    pub fn sax_handler() -> XmlSAXHandler<Self> {
        XmlSAXHandler {
            start_element: Some(start_element),
            end_element: Some(end_element),
            characters: Some(characters),
            processing_instruction: Some(processing_instruction),
            comment: Some(comment),
            warning: Some(warning),
            error: Some(error),
            fatal_error: Some(fatal_error),
            ..Default::default()
        }
    }

    /// The path of the current element, or an empty string outside the root.
    pub fn path(&self) -> String {
        self.tags.iter().fold(String::new(), |mut path, tag| {
            path.push('/');
            path.push_str(tag.name());
            path
        })
    }

    pub fn last_tag(&self) -> Option<&XmlTag> {
        self.tags.last()
    }

    /// Flush the output and give it back.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.io_error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if self.io_error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.out, "{line}") {
            self.io_error = Some(err);
        }
    }

    fn set_last_printed(&mut self) {
        if let Some(last) = self.tags.last_mut() {
            last.printed = true;
        }
    }

    /// Print the bare path of the current element unless a line was printed
    /// for it already.
    fn print_last_tag(&mut self) {
        if self.last_tag().is_none_or(|last| last.printed) {
            return;
        }
        let path = self.path();
        self.emit(format_args!("{path}"));
        self.set_last_printed();
    }

    /// Compress then map the whitespace of `text` as configured.
    fn translate<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let opts = self.opts;
        let mut text = Cow::Borrowed(text);
        if opts.compress_whitespace && opts.compress_level > 0 {
            let run = " ".repeat(opts.compress_level);
            if text.contains(&run) {
                text = Cow::Owned(text.replace(&run, "\t"));
            }
        }
        if opts.map_whitespace && text.contains([' ', '\t', '\n']) {
            text = Cow::Owned(
                text.chars()
                    .map(|c| match c {
                        ' ' => opts.space_map,
                        '\t' => opts.tab_map,
                        '\n' => opts.newline_map,
                        c => c,
                    })
                    .collect(),
            );
        }
        text
    }

    /// Check if translated `text` holds nothing but whitespace.
    fn is_only_whitespace(&self, text: &str) -> bool {
        text.trim().is_empty()
            || (self.opts.map_whitespace && text.chars().all(|c| self.opts.is_map_char(c)))
    }
}

fn start_element<W: Write, R: Write>(
    data: &mut ParserData<'_, W, R>,
    name: &str,
    atts: &[(String, String)],
) {
    data.print_last_tag();
    data.tags.push(XmlTag::new(name));
    if atts.is_empty() {
        return;
    }

    let atts = atts
        .iter()
        .map(|(key, value)| format!("{key}=\"{}\"", data.translate(value)))
        .collect::<Vec<_>>()
        .join(",");
    let path = data.path();
    data.emit(format_args!("{path}@[{atts}]"));
    data.set_last_printed();
}

fn end_element<W: Write, R: Write>(data: &mut ParserData<'_, W, R>, name: &str) {
    if data.last_tag().is_none_or(|last| last.name() != name) {
        return;
    }
    data.print_last_tag();
    data.tags.pop();
}

fn characters<W: Write, R: Write>(data: &mut ParserData<'_, W, R>, ch: &str) {
    let text = data.translate(ch);
    if data.is_only_whitespace(&text) {
        return;
    }
    let path = data.path();
    data.emit(format_args!("{path}=\"{text}\""));
    data.set_last_printed();
}

fn processing_instruction<W: Write, R: Write>(
    data: &mut ParserData<'_, W, R>,
    target: &str,
    value: Option<&str>,
) {
    let path = data.path();
    let value = value.unwrap_or_default();
    data.emit(format_args!("{path}/{target}?[{value}]"));
}

fn comment<W: Write, R: Write>(data: &mut ParserData<'_, W, R>, value: &str) {
    let path = data.path();
    data.emit(format_args!("{path}/![{value}]"));
}

fn warning<W: Write, R: Write>(data: &mut ParserData<'_, W, R>, msg: fmt::Arguments<'_>) {
    data.reporter.report(Some(&*data), Severity::Warning, msg);
}

fn error<W: Write, R: Write>(data: &mut ParserData<'_, W, R>, msg: fmt::Arguments<'_>) {
    data.reporter.report(Some(&*data), Severity::Error, msg);
}

fn fatal_error<W: Write, R: Write>(data: &mut ParserData<'_, W, R>, msg: fmt::Arguments<'_>) {
    data.reporter.report(Some(&*data), Severity::FatalError, msg);
}
