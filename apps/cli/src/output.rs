//! Argument parsing and result rendering.

use serde::Serialize;
use serde_json::Value;
use warmup_core::{ErrorKind, ProblemError};

use crate::config::OutputFormat;
use crate::error::CliError;

/// Reads a command-line argument as JSON, or as a plain string when it is not
/// valid JSON (`#FFF`, `8-800-555-35-35`).
pub fn parse_argument(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Renders a successful result.
pub fn render_value(value: &Value, format: OutputFormat) -> Result<String, CliError> {
    match (format, value) {
        (OutputFormat::Plain, Value::String(s)) => Ok(s.clone()),
        (OutputFormat::Plain, other) => Ok(serde_json::to_string(other)?),
        (OutputFormat::Json, other) => Ok(serde_json::to_string(&OkEnvelope { ok: other })?),
    }
}

#[derive(Debug, Serialize)]
struct OkEnvelope<'a> {
    ok: &'a Value,
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    kind: ErrorKind,
    message: &'a str,
}

/// JSON envelope for a problem error.
pub fn render_problem_error(err: &ProblemError) -> Result<String, CliError> {
    let message = err.to_string();
    let envelope = ErrorEnvelope {
        error: ErrorBody {
            kind: err.kind(),
            message: &message,
        },
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Writes an error where the caller expects it: problem errors go to stdout
/// as JSON in JSON mode, everything else to stderr.
pub fn report(err: &CliError, format: OutputFormat) {
    if let (CliError::Problem(problem), OutputFormat::Json) = (err, format) {
        match render_problem_error(problem) {
            Ok(rendered) => {
                println!("{rendered}");
                return;
            }
            Err(encode) => eprintln!("error: {encode}"),
        }
    }

    match err {
        CliError::Problem(problem) => eprintln!("error ({}): {problem}", problem.kind()),
        other => eprintln!("error: {other}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use warmup_core::hex_to_rgb;

    #[test]
    fn test_parse_argument() {
        assert_eq!(parse_argument("42"), json!(42));
        assert_eq!(parse_argument("-1"), json!(-1));
        assert_eq!(parse_argument("2.5"), json!(2.5));
        assert_eq!(parse_argument("[[1,2],[3,4]]"), json!([[1, 2], [3, 4]]));
        assert_eq!(parse_argument("\"x\""), json!("x"));
        assert_eq!(parse_argument("#FFF"), json!("#FFF"));
        assert_eq!(parse_argument("8-800-555-35-35"), json!("8-800-555-35-35"));
        assert_eq!(parse_argument(":-) :-)"), json!(":-) :-)"));
    }

    #[test]
    fn test_render_plain() {
        assert_eq!(render_value(&json!("ff"), OutputFormat::Plain).unwrap(), "ff");
        assert_eq!(render_value(&json!(55), OutputFormat::Plain).unwrap(), "55");
        assert_eq!(
            render_value(&json!([[1, 3], [2, 4]]), OutputFormat::Plain).unwrap(),
            "[[1,3],[2,4]]"
        );
    }

    #[test]
    fn test_render_json() {
        assert_eq!(
            render_value(&json!(true), OutputFormat::Json).unwrap(),
            r#"{"ok":true}"#
        );
    }

    #[test]
    fn test_render_problem_error() {
        let err = hex_to_rgb("bad").unwrap_err();
        let rendered: Value = serde_json::from_str(&render_problem_error(&err).unwrap()).unwrap();
        assert_eq!(rendered["error"]["kind"], json!("range"));
        assert_eq!(
            rendered["error"]["message"],
            json!("hex color has invalid format: expected '#' followed by 3 or 6 hex digits")
        );
    }
}
