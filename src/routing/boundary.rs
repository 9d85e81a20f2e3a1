//! Routing entry points for untyped input.
//!
//! Paths arriving from outside the type system (JSON messages, scripting
//! hosts, config values) are checked here before any matching starts. A
//! non-string argument fails with [`RoutingError::InvalidArgument`] naming the
//! parameter and the JSON type received.

use serde_json::Value;

use crate::routing::matcher::{extract_parameter, has_continuation_after_first_slash, recursive_match};
use crate::routing::router::{resolve, ResolvedRoute, Route};
use crate::routing::types::{MatchResult, ParameterMap, RoutingError, RoutingResult};

/// JSON type name of a value, as reported in `InvalidArgument`.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn expect_str<'a>(parameter: &'static str, value: &'a Value) -> RoutingResult<&'a str> {
    value.as_str().ok_or(RoutingError::InvalidArgument {
        parameter,
        actual: type_name(value),
    })
}

/// A missing `path` is treated as the empty string.
pub fn has_continuation_after_first_slash_value(path: Option<&Value>) -> RoutingResult<bool> {
    let path = match path {
        Some(value) => expect_str("path", value)?,
        None => "",
    };
    Ok(has_continuation_after_first_slash(path))
}

pub fn extract_parameter_value(concrete: &Value, pattern: &Value) -> RoutingResult<ParameterMap> {
    let concrete = expect_str("concrete path", concrete)?;
    let pattern = expect_str("pattern", pattern)?;
    Ok(extract_parameter(concrete, pattern))
}

pub fn recursive_match_value(concrete: &Value, pattern: &Value) -> RoutingResult<MatchResult> {
    let concrete = expect_str("concrete path", concrete)?;
    let pattern = expect_str("pattern", pattern)?;
    Ok(recursive_match(concrete, pattern))
}

pub fn resolve_value(path: &Value, routes: &[Route]) -> RoutingResult<Option<ResolvedRoute>> {
    let path = expect_str("path", path)?;
    Ok(resolve(path, routes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_strings_pass_through() {
        assert!(has_continuation_after_first_slash_value(Some(&json!("/user/Ikrom"))).unwrap());
        assert!(!has_continuation_after_first_slash_value(None).unwrap());

        let params = extract_parameter_value(&json!("/user/Ikrom"), &json!("/user/:name")).unwrap();
        assert_eq!(params.get("name").unwrap(), "Ikrom");

        let result = recursive_match_value(&json!("/a/1"), &json!("/a/:id")).unwrap();
        assert!(result.matched);
    }

    #[test]
    fn test_non_string_path_rejected() {
        let err = has_continuation_after_first_slash_value(Some(&json!(42))).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidArgument {
                parameter: "path",
                actual: "number"
            }
        );
        assert_eq!(err.to_string(), "The path should only be a string, not a number");
    }

    #[test]
    fn test_each_argument_checked() {
        let err = extract_parameter_value(&json!(null), &json!("/user/:name")).unwrap_err();
        assert!(err.to_string().contains("concrete path"));
        assert!(err.to_string().contains("null"));

        let err = recursive_match_value(&json!("/user/Ikrom"), &json!(["/user/:name"])).unwrap_err();
        assert_eq!(err.to_string(), "The pattern should only be a string, not a array");
    }

    #[test]
    fn test_resolve_rejects_before_matching() {
        let err = resolve_value(&json!({"path": "/"}), &[]).unwrap_err();
        assert_eq!(
            err,
            RoutingError::InvalidArgument {
                parameter: "path",
                actual: "object"
            }
        );
        assert!(resolve_value(&json!("/"), &[]).unwrap().is_none());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(type_name(&json!(true)), "boolean");
        assert_eq!(type_name(&json!("x")), "string");
        assert_eq!(type_name(&json!(1.5)), "number");
    }
}
