//! Command line front end of `xmlparse`.

use std::{
    io::{BufWriter, Write, stdout},
    process::exit,
};

use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use const_format::concatcp;
use xmlparse::{DiagnosticReporter, OutputError, ProgramOpts, print_mappings, print_nodes};

// Exit codes. 2 is left to clap for usage errors.
const RETURN_OK: i32 = 0; // No error
const ERR_IO: i32 = 1; // A file could not be read or the output could not be written
const ERR_PARSE: i32 = 3; // A fatal error was reported or too many errors

const SED_EXAMPLE: &str = r#"sed "y/$MAPS/ \t\n/""#;
const AFTER_HELP: &str = concatcp!(
    "EXAMPLES:\n",
    "\tIf you want to keep visual whitespace while text processing; You can use sed to\n",
    "\tremove the visualizations as the last step of text processing.\n",
    "\n",
    "\t$ MAPS=\"$(xmlparse --print-mappings)\"\n",
    "\t$ xmlparse -m foo.xml | <Your text processing here> | ",
    SED_EXAMPLE
);

#[derive(clap::Parser, Debug)]
#[command(version, about, name = "xmlparse", after_help = AFTER_HELP)]
struct CmdArgs {
    /// XML files to read
    #[arg(required_unless_present_any = ["print_mappings", "completions"])]
    files: Vec<String>,
    /// Print the characters used to visualize whitespace characters in the
    /// following order <SPACE><TAB><LF> and exits.
    #[arg(short, long)]
    print_mappings: bool,
    /// Transliterates whitespace characters to printable characters.
    #[arg(short, long)]
    map_whitespace: bool,
    /// Compresses consecutive `space` characters to a `tab` character
    /// according to the compression level.
    #[arg(short, long)]
    compress_whitespace: bool,
    /// Specifies the number consecutive spaces compressed to a single character.
    #[arg(
        short = 'l',
        long,
        value_name = "LEVEL",
        default_value_t = 4,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    compress_level: u32,
    /// Keep printing after a fatal error.
    #[arg(long)]
    recover: bool,
    /// Do not emit warnings.
    #[arg(long)]
    nowarning: bool,
    /// Fail when a file reports more than N errors.
    #[arg(long, value_name = "N")]
    max_errors: Option<usize>,
    /// Print the completion script for SHELL and exit.
    #[arg(long, value_name = "SHELL", hide = true)]
    completions: Option<Shell>,
}

impl CmdArgs {
    fn program_opts(&self) -> ProgramOpts {
        ProgramOpts {
            map_whitespace: self.map_whitespace,
            compress_whitespace: self.compress_whitespace,
            compress_level: self.compress_level as usize,
            recover: self.recover,
            nowarning: self.nowarning,
            max_errors: self.max_errors,
            ..Default::default()
        }
    }
}

fn main() {
    let exit_code = real_main();
    exit(exit_code);
}

fn real_main() -> i32 {
    let args = CmdArgs::parse();
    let opts = args.program_opts();

    if let Some(shell) = args.completions {
        let mut out = stdout().lock();
        generate(shell, &mut CmdArgs::command(), "xmlparse", &mut out);
        return match out.flush() {
            Ok(()) => RETURN_OK,
            Err(err) => {
                eprintln!("error: failed to write output: {err}");
                ERR_IO
            }
        };
    }

    if args.print_mappings {
        return match print_mappings(&opts, stdout().lock()) {
            Ok(()) => RETURN_OK,
            Err(err) => {
                eprintln!("error: {err:#}");
                ERR_IO
            }
        };
    }

    let reporter = DiagnosticReporter::new();
    let mut out = BufWriter::new(stdout().lock());
    let mut ret = RETURN_OK;
    // The output stays broken once a write failed; report that once.
    let mut output_failed = false;
    for file in &args.files {
        reporter.reset();
        match print_nodes(file, &opts, &mut out, &reporter) {
            Ok(status) => {
                if !status.well_formed || reporter.is_fatal() {
                    ret = ret.max(ERR_PARSE);
                }
                if let Some(max_errors) = opts.max_errors.filter(|&m| reporter.exceeds(m)) {
                    let (_, errors) = reporter.counts();
                    eprintln!("{file}: {errors} errors reported, the limit is {max_errors}");
                    ret = ret.max(ERR_PARSE);
                }
            }
            Err(err) => {
                if !(output_failed && err.is::<OutputError>()) {
                    eprintln!("error: {err:#}");
                }
                output_failed |= err.is::<OutputError>();
                ret = ret.max(ERR_IO);
            }
        }
    }
    if let Err(err) = out.flush() {
        if !output_failed {
            eprintln!("error: failed to write output: {err}");
        }
        ret = ret.max(ERR_IO);
    }
    ret
}
