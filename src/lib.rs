//! An extensible xml processing tool that converts xml data to a line oriented
//! format similar to that of xpath.
//!
//! Documents are parsed by a SAX parser ([`parser`]) whose events are printed
//! by [`parser_data::ParserData`]. Diagnostics raised while parsing are
//! written to a [`DiagnosticReporter`].
#![warn(unused_mut)]
#![warn(unused_imports)]
#![warn(unused_variables)]

pub mod config;
pub mod error;
pub mod parser;
pub mod parser_data;
#[cfg(test)]
pub(crate) mod test_util;

use std::{
    fmt,
    io::{self, Write},
    path::Path,
};

use anyhow::Context;

pub use config::ProgramOpts;
pub use error::{DiagnosticReporter, Severity};
use parser::{ParseStatus, xml_sax_user_parse_file, xml_sax_user_parse_memory};
use parser_data::ParserData;

/// The projection could not be written to its output.
#[derive(Debug)]
pub struct OutputError(io::Error);

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "failed to write output")
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// Print the line oriented projection of the XML file `file` to `out`.
///
/// Diagnostics go to `reporter`. Failing to read the file or to write the
/// output is an `Err`; a write failure downcasts to [`OutputError`].
pub fn print_nodes<W: Write, R: Write>(
    file: impl AsRef<Path>,
    opts: &ProgramOpts,
    out: W,
    reporter: &DiagnosticReporter<R>,
) -> anyhow::Result<ParseStatus> {
    let sax = ParserData::sax_handler();
    let mut data = ParserData::with_capacity(10, out, opts, reporter);
    let status = xml_sax_user_parse_file(&sax, &mut data, file, opts.parser_options())?;
    data.finish().map_err(OutputError)?;
    Ok(status)
}

/// Print the line oriented projection of the XML document held in `buffer`.
pub fn print_nodes_from_memory<W: Write, R: Write>(
    buffer: &[u8],
    opts: &ProgramOpts,
    out: W,
    reporter: &DiagnosticReporter<R>,
) -> anyhow::Result<ParseStatus> {
    let sax = ParserData::sax_handler();
    let mut data = ParserData::with_capacity(10, out, opts, reporter);
    let status = xml_sax_user_parse_memory(&sax, &mut data, buffer, opts.parser_options());
    data.finish().map_err(OutputError)?;
    Ok(status)
}

/// Print the characters used to visualize whitespace in the order
/// `<SPACE><TAB><LF>`.
pub fn print_mappings(opts: &ProgramOpts, mut out: impl Write) -> anyhow::Result<()> {
    writeln!(out, "{}", opts.mappings()).context("failed to write output")?;
    out.flush().context("failed to write output")
}
