//! Positional substitution for failure message templates
//!
//! Catalog descriptions may embed `%s` and `%d` placeholders, consumed
//! strictly left-to-right by caller-supplied arguments. A template that
//! does not match its arguments is a programming error: rendering fails
//! with a typed [`TemplateError`] that propagates to the caller of the
//! wrapping function instead of being downgraded into a failure reply.

use thiserror::Error;

/// A message-template substitution failure
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template expects {expected} arguments, {supplied} supplied")]
    ArityMismatch { expected: usize, supplied: usize },

    #[error("argument {index} ({value:?}) is not valid for %d")]
    NotAnInteger { index: usize, value: String },

    #[error("unknown conversion '%{0}' in template")]
    UnknownConversion(char),

    #[error("template ends with a dangling '%'")]
    DanglingPercent,
}

/// Fill `template`'s placeholders with `args`, left to right.
///
/// `%s` accepts any argument, `%d` requires one that parses as an integer,
/// `%%` renders a literal percent sign. An empty `args` returns the
/// template verbatim, placeholders and all; a non-empty `args` must match
/// the placeholder count exactly.
pub fn render(template: &str, args: &[&str]) -> Result<String, TemplateError> {
    if args.is_empty() {
        return Ok(template.to_string());
    }

    let expected = placeholder_count(template)?;
    if expected != args.len() {
        return Err(TemplateError::ArityMismatch {
            expected,
            supplied: args.len(),
        });
    }

    let arg_len: usize = args.iter().map(|a| a.len()).sum();
    let mut out = String::with_capacity(template.len() + arg_len);
    let mut next = 0usize;
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('%') => out.push('%'),
            Some('s') => {
                out.push_str(args[next]);
                next += 1;
            }
            Some('d') => {
                let arg = args[next];
                match arg.parse::<i64>() {
                    Ok(n) => out.push_str(&n.to_string()),
                    Err(_) => {
                        return Err(TemplateError::NotAnInteger {
                            index: next,
                            value: arg.to_string(),
                        })
                    }
                }
                next += 1;
            }
            Some(other) => return Err(TemplateError::UnknownConversion(other)),
            None => return Err(TemplateError::DanglingPercent),
        }
    }

    Ok(out)
}

/// Count the consuming placeholders in `template` (`%%` consumes nothing)
fn placeholder_count(template: &str) -> Result<usize, TemplateError> {
    let mut count = 0;
    let mut chars = template.chars();
    while let Some(c) = chars.next() {
        if c != '%' {
            continue;
        }
        match chars.next() {
            Some('%') => {}
            Some('s') | Some('d') => count += 1,
            Some(other) => return Err(TemplateError::UnknownConversion(other)),
            None => return Err(TemplateError::DanglingPercent),
        }
    }
    Ok(count)
}
