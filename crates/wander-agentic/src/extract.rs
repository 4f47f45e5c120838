//! Response Extraction
//!
//! Pulls the JSON payload out of a freeform model reply. Models wrap their
//! answers in prose, markdown fences, apologies - anything. The extractor
//! scans for the first balanced `{...}` or `[...]` region and parses it.
//!
//! Extraction failure is a typed outcome, never a panic: the orchestrator
//! inspects it and falls back to deterministic synthesis.

use serde_json::Value;
use thiserror::Error;

/// Expected shape of the embedded payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonShape {
    Object,
    Array,
}

impl JsonShape {
    fn delimiters(self) -> (char, char) {
        match self {
            JsonShape::Object => ('{', '}'),
            JsonShape::Array => ('[', ']'),
        }
    }

    fn label(self) -> &'static str {
        match self {
            JsonShape::Object => "object",
            JsonShape::Array => "array",
        }
    }
}

/// Why no payload could be extracted
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no JSON {0} found in model response")]
    Missing(&'static str),

    #[error("JSON region never closes")]
    Unbalanced,

    #[error("JSON region does not parse: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("JSON region is structurally empty")]
    Empty,
}

/// Extract the first balanced JSON region of the expected shape
///
/// The scan starts at the first opening delimiter and tracks bracket depth
/// with string/escape awareness until the region closes. The first complete
/// region wins: if the model prepends an example object before its real
/// answer, the example is what gets extracted. A single attempt either
/// succeeds or the whole extraction is treated as failed - there is no
/// progressive re-matching on narrower regions.
pub fn extract_json(raw: &str, shape: JsonShape) -> Result<Value, ExtractionError> {
    let (open, close) = shape.delimiters();
    let start = raw.find(open).ok_or(ExtractionError::Missing(shape.label()))?;
    let candidate = &raw[start..];

    let end = balanced_end(candidate, open, close).ok_or(ExtractionError::Unbalanced)?;
    let value: Value = serde_json::from_str(&candidate[..=end])?;

    let empty = match &value {
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if empty {
        return Err(ExtractionError::Empty);
    }

    Ok(value)
}

/// Byte offset of the delimiter closing the region that opens at byte 0
fn balanced_end(text: &str, open: char, close: char) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            c if c == open => depth += 1,
            c if c == close => {
                depth -= 1;
                if depth == 0 {
                    return Some(offset);
                }
            }
            _ => {}
        }
    }
    None
}
