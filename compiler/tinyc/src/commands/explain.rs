//! The `explain` command: display documentation for error codes.

use std::io::{self, Write};

use tiny_diagnostic::{ErrorCode, ErrorDocs};

use super::Verdict;

/// Print the documentation for `code_str` on `out`.
pub fn explain_code<W: Write, E: Write>(code_str: &str, mut out: W, mut err: E) -> io::Result<Verdict> {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        writeln!(err, "Unknown error code: {code_str}")?;
        writeln!(err)?;
        writeln!(
            err,
            "Codes have the format EXXXX (errors) or WXXXX (warnings) where X is a digit."
        )?;
        writeln!(err, "Known codes:")?;
        writeln!(err, "  lexer errors:  {}", codes_where(ErrorCode::is_lexer_error))?;
        writeln!(err, "  parser errors: {}", codes_where(ErrorCode::is_parser_error))?;
        writeln!(err, "  warnings:      {}", codes_where(ErrorCode::is_warning))?;
        return Ok(Verdict::Rejected);
    };

    match ErrorDocs::get(code) {
        Some(doc) => {
            writeln!(out, "{doc}")?;
            Ok(Verdict::Accepted)
        }
        None => {
            writeln!(err, "No documentation available for {code}")?;
            Ok(Verdict::Rejected)
        }
    }
}

fn codes_where(phase: fn(&ErrorCode) -> bool) -> String {
    let codes: Vec<&str> = ErrorDocs::all_codes()
        .filter(|code| phase(code))
        .map(|code| code.as_str())
        .collect();
    codes.join(", ")
}
