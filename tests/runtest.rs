//! Regression tests comparing the output of `xmlparse` on `tests/files/` with
//! the expected results under `tests/result/`.
//!
//! For every input `foo.xml`, `foo.xml.out` holds the expected projection and
//! `foo.xml.err` the expected diagnostics. A missing `.err` file means no
//! diagnostic is expected.
//!
//! Set `XMLPARSE_UPDATE_RESULTS=1` to rewrite the expected results.

use std::{
    fs::{read, write},
    path::Path,
};

use xmlparse::{DiagnosticReporter, ProgramOpts, print_nodes};

type Functest = fn(filename: &Path, result: &Path, err: &Path, opts: &ProgramOpts) -> i32;

struct TestDesc<'a> {
    desc: &'a str,     /* description of the test */
    func: Functest,    /* function implementing the test */
    input: &'a str,    /* glob to path for input files */
    out: &'a str,      /* output directory */
    opts: ProgramOpts, /* options for the test */
}

fn update_results() -> bool {
    std::env::var_os("XMLPARSE_UPDATE_RESULTS").is_some_and(|v| v == "1")
}

fn base_filename(filename: &Path) -> String {
    filename
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Compare `content` with the file `result`. A missing file compares equal to
/// empty content.
fn compare_result(content: &[u8], result: &Path) -> bool {
    if update_results() {
        if content.is_empty() && !result.exists() {
            return true;
        }
        return write(result, content).is_ok();
    }
    let expected = read(result).unwrap_or_default();
    if expected != content {
        eprintln!(
            "Result for {} differs:\n--- expected\n{}\n--- actual\n{}",
            result.display(),
            String::from_utf8_lossy(&expected),
            String::from_utf8_lossy(content),
        );
        return false;
    }
    true
}

/// Parse a file and check its projection and diagnostics.
fn projection_test(filename: &Path, result: &Path, err: &Path, opts: &ProgramOpts) -> i32 {
    let reporter = DiagnosticReporter::with_output(vec![]);
    let mut out = vec![];
    if let Err(e) = print_nodes(filename, opts, &mut out, &reporter) {
        eprintln!("Failed to parse {}: {e:#}", filename.display());
        return -1;
    }
    let diagnostics = reporter.into_output();

    let mut ret = 0;
    if !compare_result(&out, result) {
        ret = 1;
    }
    if !compare_result(&diagnostics, err) {
        ret = 1;
    }
    ret
}

fn test_descs() -> Vec<TestDesc<'static>> {
    vec![
        TestDesc {
            desc: "Line projection regression tests",
            func: projection_test,
            input: "tests/files/*.xml",
            out: "tests/result/",
            opts: ProgramOpts::default(),
        },
        TestDesc {
            desc: "Whitespace mapping regression tests",
            func: projection_test,
            input: "tests/files/whitespace/*.xml",
            out: "tests/result/whitespace/",
            opts: ProgramOpts {
                map_whitespace: true,
                compress_whitespace: true,
                ..Default::default()
            },
        },
    ]
}

fn launch_tests(tst: &TestDesc) -> (i32, i32) {
    let mut nb_tests = 0;
    let mut err = 0;
    for entry in glob::glob(tst.input).expect("Failed to read glob pattern") {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                println!("{e:?}");
                continue;
            }
        };
        let base = base_filename(&path);
        let result = Path::new(tst.out).join(format!("{base}.out"));
        let error = Path::new(tst.out).join(format!("{base}.err"));
        nb_tests += 1;
        if (tst.func)(&path, &result, &error, &tst.opts) != 0 {
            eprintln!("File {} generated an error", path.display());
            err += 1;
        }
    }
    (nb_tests, err)
}

#[test]
fn main_test() {
    let mut nb_tests = 0;
    let mut nb_errors = 0;
    for tst in test_descs() {
        println!("## {}", tst.desc);
        let (tests, errors) = launch_tests(&tst);
        assert!(tests > 0, "no input matches {}", tst.input);
        nb_tests += tests;
        nb_errors += errors;
    }
    println!("Total {nb_tests} tests, {nb_errors} errors");
    assert_eq!(nb_errors, 0);
}
