//! The `json` serialization helper available to every template.
//!
//! ```text
//! <script>
//!   const challenges = {{ json(value=challenges) | safe }};
//!   const skills = {{ skills | json(pretty=true) | safe }};
//! </script>
//! ```
//!
//! Output is JSON with `</` written as `<\/`, so a string value containing
//! `</script>` cannot close the surrounding element.

use std::collections::HashMap;

use tera::{Tera, Value};

/// Name of the helper, as a function and as a filter.
pub const JSON_HELPER: &str = "json";

/// Install the helper on a Tera instance.
pub fn register(tera: &mut Tera) {
    tera.register_function(JSON_HELPER, json_function);
    tera.register_filter(JSON_HELPER, json_filter);
}

/// Serialize `value` for embedding inside a `<script>` element.
pub fn to_script_json(value: &Value, pretty: bool) -> Result<String, serde_json::Error> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(text.replace("</", "<\\/"))
}

fn json_function(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let value = args
        .get("value")
        .ok_or_else(|| tera::Error::msg("function `json` requires a `value` argument"))?;
    encode(value, args)
}

fn json_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    encode(value, args)
}

fn encode(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let pretty = match args.get("pretty") {
        None => false,
        Some(flag) => flag
            .as_bool()
            .ok_or_else(|| tera::Error::msg("`json` argument `pretty` must be a boolean"))?,
    };
    to_script_json(value, pretty)
        .map(Value::String)
        .map_err(|e| tera::Error::msg(format!("`json` could not serialize value: {e}")))
}
