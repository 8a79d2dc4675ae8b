//! Golden tests for the simple and verbose help forms.

mod common;

use cmdapp::{App, ArgSpec, Error, OptionSet, Session};
use common::{argv, captured_runner};

struct RepeatsApp;

impl App for RepeatsApp {
    fn options(set: &mut OptionSet<Self>) -> Result<(), Error> {
        set.variadic(
            "repeats",
            "arg",
            "Argument to this option can repeat.",
            |_, _, _| Ok(()),
        )?;
        Ok(())
    }
}

#[test]
fn simple_help_lists_sorted_alias_groups() {
    let (runner, _capture) = captured_runner(RepeatsApp, "CLAHelpTest");
    let expected = "\
CLAHelpTest [<options>] args [args...]

    -h
    --help
    -q, --quiet
    --repeats=arg[,arg...]
    -v
    --verbose=level
";
    assert_eq!(runner.simple_help_string(), expected);
}

struct DocumentedApp;

impl App for DocumentedApp {
    fn arguments() -> ArgSpec {
        ArgSpec::fixed_with_variadic(&["arg1"], "args")
    }

    fn description() -> &'static str {
        "This is a test program to verify the help works as expected."
    }

    fn arguments_description() -> &'static str {
        "arg1 - First argument.\n\nargs - Remaining arguments."
    }

    fn examples_description() -> &'static str {
        "Describe a few examples here."
    }
}

#[test]
fn verbose_help_renders_all_blocks() {
    let (runner, _capture) = captured_runner(DocumentedApp, "CLAHelpTest");
    let expected = "\
This is a test program to verify the help works as expected.


SYNTAX:

  CLAHelpTest [<options>] arg1 args [args...]

    -h
    --help
    -q, --quiet
    -v
    --verbose=level


ARGUMENTS:

    arg1 - First argument.

    args - Remaining arguments.


OPTIONS:

    -h
        Displays abbreviated help message.

    --help
        Displays verbose help message.

    -q, --quiet
        Turn on quiet mode.

    -v
        Increment the verbose level.

        Higher levels are more verbose. The default is 1.

    --verbose=level
        Set the verbose level.

EXAMPLES:

Describe a few examples here.
";
    let actual = runner.verbose_help_string();
    for (line_num, (actual_line, expected_line)) in
        actual.lines().zip(expected.lines()).enumerate()
    {
        assert_eq!(
            actual_line, expected_line,
            "line {line_num} does not match"
        );
    }
    assert_eq!(actual, expected);
}

struct BareApp;

impl App for BareApp {
    fn arguments() -> ArgSpec {
        ArgSpec::none()
    }
}

#[test]
fn verbose_help_without_metadata_starts_at_syntax() {
    let (runner, _capture) = captured_runner(BareApp, "bare");
    let text = runner.verbose_help_string();
    assert!(text.starts_with("SYNTAX:\n\n  bare [<options>]\n"));
    assert!(!text.contains("ARGUMENTS:"));
    assert!(!text.contains("EXAMPLES:"));
    assert!(text.contains("OPTIONS:"));
}

#[test]
fn short_help_prints_the_simple_form() {
    let (mut runner, capture) = captured_runner(RepeatsApp, "CLAHelpTest");
    let expected = runner.simple_help_string();
    assert_eq!(runner.exec(&argv("-h")), 0);
    assert_eq!(capture.out.contents(), expected);
}

#[test]
fn long_help_prints_the_verbose_form() {
    let (mut runner, capture) = captured_runner(DocumentedApp, "CLAHelpTest");
    let expected = runner.verbose_help_string();
    assert_eq!(runner.exec(&argv("--help arg1")), 0);
    assert_eq!(capture.out.contents(), expected);
}

#[test]
fn usage_error_header_includes_name_and_version() {
    let (runner, capture) = captured_runner(RepeatsApp, "CLAHelpTest");
    let mut runner = runner.with_version("0.3");
    assert_eq!(runner.exec(&argv("--bogus")), 1);
    let err = capture.err.contents();
    assert!(err.starts_with("CLAHelpTest version 0.3\n\nERROR: option --bogus not recognized\n"));
    assert!(err.contains("    --repeats=arg[,arg...]\n"));
    assert!(err.trim_end().ends_with("For more details, use --help."));
}

#[derive(Default)]
struct AliasedApp;

impl App for AliasedApp {
    fn options(set: &mut OptionSet<Self>) -> Result<(), Error> {
        set.value("separator", "char", None, "Separator between inputs.", |_, _, _| Ok(()))?;
        set.alias("s", "separator")?;
        Ok(())
    }

    fn main(&mut self, _session: &mut Session, _args: &[String]) -> Result<i32, Error> {
        Ok(0)
    }
}

#[test]
fn aliased_switches_share_one_help_line() {
    let (runner, _capture) = captured_runner(AliasedApp, "aliased");
    let text = runner.simple_help_string();
    assert!(text.contains("    -s char, --separator=char\n"));
    // one line for the pair, not two
    assert_eq!(text.matches("separator").count(), 1);
}
