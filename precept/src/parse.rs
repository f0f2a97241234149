//! Precept string parsing.
//!
//! Grammar (keywords case-insensitive):
//!
//! ```text
//! precept  := field "=" call
//! call     := funcname "(" [args] ")"
//! funcname := "NOW" | "SERIAL"
//! args     := unit            ; only for NOW; omitted means SEC
//! unit     := "SEC" | "MSEC" | "USEC" | "NSEC"
//! ```

use crate::error::{ParseError, ParseResult};
use crate::precept::{FunctionKind, Precept, TimeUnit};

impl Precept {
    /// Parse a precept string of the shape `field=FUNCTION(args)`.
    ///
    /// Both sides of the `=` are trimmed; argument tokens are comma-separated
    /// and trimmed. Invalid syntax is a parse error here, never a runtime
    /// error later.
    pub fn parse(input: &str) -> ParseResult<Precept> {
        let trimmed = input.trim();

        let (field, call) = trimmed
            .split_once('=')
            .ok_or_else(|| ParseError::malformed(input, "missing '='"))?;

        let field = field.trim();
        if field.is_empty() {
            return Err(ParseError::malformed(input, "empty field name"));
        }
        if field.contains('(') || field.contains(')') {
            return Err(ParseError::malformed(input, "parenthesis in field name"));
        }

        let (name, args) = split_call(input, call.trim())?;

        let function = match name.to_uppercase().as_str() {
            "NOW" => FunctionKind::Now(now_unit(&args)?),
            "SERIAL" => {
                if !args.is_empty() {
                    return Err(ParseError::invalid_argument("SERIAL", args.join(",")));
                }
                FunctionKind::Serial
            }
            _ => return Err(ParseError::unknown_function(name)),
        };

        Ok(Precept {
            field: field.to_string(),
            function,
        })
    }
}

/// Split `FUNCTION(args)` into the function name and its argument tokens.
fn split_call<'a>(input: &str, call: &'a str) -> ParseResult<(&'a str, Vec<&'a str>)> {
    let open = call
        .find('(')
        .ok_or_else(|| ParseError::malformed(input, "missing '(' after function name"))?;
    if !call.ends_with(')') {
        return Err(ParseError::malformed(input, "missing closing ')'"));
    }

    let name = call[..open].trim();
    if name.is_empty() {
        return Err(ParseError::malformed(input, "empty function name"));
    }

    let inner = &call[open + 1..call.len() - 1];
    if inner.contains('(') || inner.contains(')') {
        return Err(ParseError::malformed(input, "unbalanced parentheses"));
    }

    let args = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(str::trim).collect()
    };
    Ok((name, args))
}

/// Resolve NOW's argument list to a time unit; no argument means seconds.
fn now_unit(args: &[&str]) -> ParseResult<TimeUnit> {
    match args {
        [] => Ok(TimeUnit::Sec),
        [unit] => {
            TimeUnit::parse(unit).ok_or_else(|| ParseError::invalid_argument("NOW", *unit))
        }
        _ => Err(ParseError::invalid_argument("NOW", args.join(","))),
    }
}
