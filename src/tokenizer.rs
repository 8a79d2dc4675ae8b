//! Getopt-style command line tokenizer.
//!
//! Matches the classic POSIX behavior: `--long value` and `--long=value`,
//! `-x value` and attached `-xVALUE`, short-flag clustering, `--` as the
//! option terminator, and the first bare argument ending option processing.
//! No abbreviation matching is performed.

use thiserror::Error;

/// A malformed or unrecognized switch. The message is user-facing.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct TokenizeError(String);

/// Tokenizer output for one run: the parsed `(switch, value)` pairs in
/// encounter order, and the leftover positional arguments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedInvocation {
    /// `(switch, value-or-empty)` pairs; switches keep their typed spelling
    /// and leading dashes.
    pub options: Vec<(String, String)>,
    /// Arguments left after option processing, in order.
    pub positionals: Vec<String>,
}

/// Tokenize `args` against the short-option spec string and long-option
/// spec list.
pub fn tokenize(
    args: &[String],
    short_spec: &str,
    long_spec: &[String],
) -> Result<ParsedInvocation, TokenizeError> {
    let mut parsed = ParsedInvocation::default();
    let mut idx = 0;
    while idx < args.len() {
        let arg = &args[idx];
        if arg == "--" {
            idx += 1;
            break;
        }
        if let Some(body) = arg.strip_prefix("--") {
            idx = parse_long(body, args, idx, long_spec, &mut parsed)?;
        } else if arg.len() > 1 && arg.starts_with('-') {
            idx = parse_short_cluster(&arg[1..], args, idx, short_spec, &mut parsed)?;
        } else {
            break;
        }
        idx += 1;
    }
    parsed.positionals.extend(args[idx..].iter().cloned());
    Ok(parsed)
}

fn parse_long(
    body: &str,
    args: &[String],
    mut idx: usize,
    long_spec: &[String],
    parsed: &mut ParsedInvocation,
) -> Result<usize, TokenizeError> {
    let (name, attached) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    let takes_value = long_takes_value(long_spec, name)
        .ok_or_else(|| TokenizeError(format!("option --{name} not recognized")))?;
    let value = if takes_value {
        match attached {
            Some(value) => value.to_string(),
            None => {
                idx += 1;
                args.get(idx)
                    .cloned()
                    .ok_or_else(|| TokenizeError(format!("option --{name} requires an argument")))?
            }
        }
    } else {
        if attached.is_some() {
            return Err(TokenizeError(format!(
                "option --{name} must not have an argument"
            )));
        }
        String::new()
    };
    parsed.options.push((format!("--{name}"), value));
    Ok(idx)
}

fn parse_short_cluster(
    body: &str,
    args: &[String],
    mut idx: usize,
    short_spec: &str,
    parsed: &mut ParsedInvocation,
) -> Result<usize, TokenizeError> {
    let mut chars = body.char_indices();
    while let Some((pos, ch)) = chars.next() {
        let takes_value = short_takes_value(short_spec, ch)
            .ok_or_else(|| TokenizeError(format!("option -{ch} not recognized")))?;
        if takes_value {
            let rest = &body[pos + ch.len_utf8()..];
            let value = if rest.is_empty() {
                idx += 1;
                args.get(idx)
                    .cloned()
                    .ok_or_else(|| TokenizeError(format!("option -{ch} requires an argument")))?
            } else {
                rest.to_string()
            };
            parsed.options.push((format!("-{ch}"), value));
            break;
        }
        parsed.options.push((format!("-{ch}"), String::new()));
    }
    Ok(idx)
}

fn long_takes_value(spec: &[String], name: &str) -> Option<bool> {
    for entry in spec {
        if let Some(stripped) = entry.strip_suffix('=') {
            if stripped == name {
                return Some(true);
            }
        } else if entry == name {
            return Some(false);
        }
    }
    None
}

fn short_takes_value(spec: &str, opt: char) -> Option<bool> {
    let mut chars = spec.chars().peekable();
    while let Some(ch) = chars.next() {
        let takes_value = matches!(chars.peek(), Some(':'));
        if takes_value {
            chars.next();
        }
        if ch == opt {
            return Some(takes_value);
        }
    }
    None
}
