//! Simple and verbose help rendering derived from the option table and the
//! entry point's declared parameters.

use std::collections::BTreeMap;

use crate::app::ArgSpec;
use crate::descriptor::OptionDescriptor;
use crate::registry::OptionSet;

/// Total column width help text is wrapped to, indent included.
pub(crate) const WRAP_WIDTH: usize = 70;

/// Which of the two help forms was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpKind {
    /// The `-h` form: invocation syntax plus one line per alias group.
    Simple,
    /// The `--help` form: syntax, arguments, per-option text, examples.
    Verbose,
}

/// Application metadata the renderer needs alongside the option table.
pub(crate) struct HelpContext<'a> {
    pub(crate) app_name: &'a str,
    pub(crate) version: Option<&'a str>,
    pub(crate) arguments: &'a ArgSpec,
    pub(crate) description: &'a str,
    pub(crate) arguments_description: &'a str,
    pub(crate) examples_description: &'a str,
}

/// Invocation syntax plus one line per alias group, sorted.
pub(crate) fn simple_help<A>(set: &OptionSet<A>, ctx: &HelpContext<'_>) -> String {
    let mut out = String::new();
    out.push_str(&invocation_line(ctx));
    out.push_str("\n\n");
    for group in alias_groups(set) {
        out.push_str(&format!("    {}\n", group_line(&group)));
    }
    out
}

/// The full man-page-shaped help: description, SYNTAX, ARGUMENTS, OPTIONS,
/// and EXAMPLES blocks.
pub(crate) fn verbose_help<A>(set: &OptionSet<A>, ctx: &HelpContext<'_>) -> String {
    let mut out = String::new();
    if !ctx.description.is_empty() {
        out.push_str(&wrap_block(ctx.description, 0));
        out.push_str("\n\n\n");
    }
    out.push_str("SYNTAX:\n\n");
    out.push_str(&format!("  {}\n\n", invocation_line(ctx)));
    for group in alias_groups(set) {
        out.push_str(&format!("    {}\n", group_line(&group)));
    }
    out.push_str("\n\n");
    if !ctx.arguments_description.is_empty() {
        out.push_str("ARGUMENTS:\n\n");
        out.push_str(&wrap_block(ctx.arguments_description, 4));
        out.push_str("\n\n\n");
    }
    out.push_str("OPTIONS:\n\n");
    let groups = alias_groups(set);
    for (index, group) in groups.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&format!("    {}\n", group_line(group)));
        let help_text = group[0].help_text();
        if !help_text.is_empty() {
            out.push_str(&wrap_block(help_text, 8));
            out.push('\n');
        }
    }
    if !ctx.examples_description.is_empty() {
        out.push_str("\nEXAMPLES:\n\n");
        out.push_str(ctx.examples_description.trim());
        out.push('\n');
    }
    out
}

/// Help shown when the tokenizer or the arity check rejects the command
/// line: name and version, the error banner, and the simple form.
pub(crate) fn usage_error_help<A>(
    set: &OptionSet<A>,
    ctx: &HelpContext<'_>,
    message: &str,
) -> String {
    let mut out = String::new();
    match ctx.version {
        Some(version) => out.push_str(&format!("{} version {version}\n\n", ctx.app_name)),
        None => out.push_str(&format!("{}\n\n", ctx.app_name)),
    }
    out.push_str(&format!("ERROR: {message}\n\n"));
    out.push_str(&simple_help(set, ctx));
    out.push_str("\nFor more details, use --help.\n");
    out
}

fn invocation_line(ctx: &HelpContext<'_>) -> String {
    let syntax = ctx.arguments.syntax();
    if syntax.is_empty() {
        format!("{} [<options>]", ctx.app_name)
    } else {
        format!("{} [<options>] {syntax}", ctx.app_name)
    }
}

/// Descriptors grouped by shared handler, groups and members both sorted by
/// option name, so output is deterministic regardless of registration order.
fn alias_groups<A>(set: &OptionSet<A>) -> Vec<Vec<&OptionDescriptor>> {
    let mut by_handler: BTreeMap<usize, Vec<&OptionDescriptor>> = BTreeMap::new();
    for desc in set.descriptors() {
        by_handler.entry(desc.handler().0).or_default().push(desc);
    }
    let mut groups: Vec<Vec<&OptionDescriptor>> = by_handler.into_values().collect();
    groups.sort_by(|a, b| a[0].option_name().cmp(b[0].option_name()));
    groups
}

fn group_line(group: &[&OptionDescriptor]) -> String {
    let texts: Vec<String> = group.iter().map(|d| switch_text(d)).collect();
    texts.join(", ")
}

fn switch_text(desc: &OptionDescriptor) -> String {
    match desc.arg_name() {
        None => desc.switch().to_string(),
        Some(arg_name) => {
            let value = if desc.is_variable() {
                format!("{arg_name}[,{arg_name}...]")
            } else {
                arg_name.to_string()
            };
            if desc.is_long() {
                format!("{}={value}", desc.switch())
            } else {
                format!("{} {value}", desc.switch())
            }
        }
    }
}

/// De-indent `text`, re-wrap each blank-line-separated paragraph to
/// [`WRAP_WIDTH`] columns at the given indent, and join the paragraphs with
/// blank lines. No trailing newline.
fn wrap_block(text: &str, indent: usize) -> String {
    let indent_str = " ".repeat(indent);
    let wrapped: Vec<String> = paragraphs(text)
        .iter()
        .map(|para| {
            textwrap::fill(
                para,
                textwrap::Options::new(WRAP_WIDTH)
                    .initial_indent(&indent_str)
                    .subsequent_indent(&indent_str),
            )
        })
        .collect();
    wrapped.join("\n\n")
}

fn paragraphs(text: &str) -> Vec<String> {
    let mut paras = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paras.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paras.push(current.join(" "));
    }
    paras
}
