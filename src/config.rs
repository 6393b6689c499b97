//! Options controlling how documents are parsed and printed.

use crate::parser::XmlParserOption;

/// Options of one `xmlparse` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramOpts {
    /// Transliterate whitespace to printable characters.
    pub map_whitespace: bool,
    pub tab_map: char,
    pub space_map: char,
    pub newline_map: char,

    /// Turn runs of `compress_level` spaces into a single tab.
    pub compress_whitespace: bool,
    pub compress_level: usize,

    /// Keep parsing after a fatal error.
    pub recover: bool,
    /// Suppress warnings.
    pub nowarning: bool,
    /// A file reporting more errors than this fails.
    pub max_errors: Option<usize>,
}

impl Default for ProgramOpts {
    fn default() -> Self {
        Self {
            map_whitespace: false,
            tab_map: '»',
            space_map: '·',
            newline_map: '↵',

            compress_whitespace: false,
            compress_level: 4,

            recover: false,
            nowarning: false,
            max_errors: None,
        }
    }
}

impl ProgramOpts {
    /// The parser options matching these settings, as a combination of
    /// [`XmlParserOption`]s.
    pub fn parser_options(&self) -> i32 {
        let mut options = 0;
        if self.recover {
            options |= XmlParserOption::XmlParseRecover as i32;
        }
        if self.nowarning {
            options |= XmlParserOption::XmlParseNoWarning as i32;
        }
        options
    }

    /// The map characters in the order `<SPACE><TAB><LF>`.
    pub fn mappings(&self) -> String {
        [self.space_map, self.tab_map, self.newline_map]
            .into_iter()
            .collect()
    }

    /// Check if `c` is one of the map characters.
    pub(crate) fn is_map_char(&self, c: char) -> bool {
        c == self.space_map || c == self.tab_map || c == self.newline_map
    }
}
