/// Context loader: turns a JSON document into a [`ConfigContext`].
///
/// The document is the same variable map a template would receive, so
/// keys other than the four config fields are ignored and `null` counts
/// as absent. Only the shape is checked; key and language-code formats
/// are passed through untouched.
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::context::ConfigContext;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("context must be a JSON object")]
    NotAnObject,
    #[error("'{0}' must be a string")]
    KeyNotString(&'static str),
    #[error("'{0}' must be an array of strings")]
    LangsNotArray(&'static str),
    #[error("'{field}[{index}]' must be a string")]
    LangNotString { field: &'static str, index: usize },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load a context from JSON text.
pub fn from_json_str(json: &str) -> Result<ConfigContext, LoadError> {
    let value: Value = serde_json::from_str(json)?;
    from_value(&value)
}

/// Load a context from a JSON file.
pub fn from_path(path: &Path) -> Result<ConfigContext, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "loaded context file");
    from_json_str(&json)
}

/// Load a context from an already-parsed JSON value.
pub fn from_value(value: &Value) -> Result<ConfigContext, LoadError> {
    let obj = value.as_object().ok_or(LoadError::NotAnObject)?;

    Ok(ConfigContext {
        apertium_api_key: load_key(obj, "apertium_api_key")?,
        apertium_langs: load_langs(obj, "apertium_langs")?,
        microsoft_api_key: load_key(obj, "microsoft_api_key")?,
        microsoft_langs: load_langs(obj, "microsoft_langs")?,
    })
}

fn load_key(obj: &Map<String, Value>, field: &'static str) -> Result<Option<String>, LoadError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(LoadError::KeyNotString(field)),
    }
}

fn load_langs(
    obj: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<Vec<String>>, LoadError> {
    let arr = match obj.get(field) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::Array(arr)) => arr,
        Some(_) => return Err(LoadError::LangsNotArray(field)),
    };

    arr.iter()
        .enumerate()
        .map(|(index, v)| {
            v.as_str()
                .map(str::to_owned)
                .ok_or(LoadError::LangNotString { field, index })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
