//! Normalized search results and the download document built from them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, ser::PrettyFormatter};

use crate::Error;

/// One normalized search hit.
///
/// Fields the provider omits deserialize to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

impl ResultRecord {
    pub fn new(title: impl Into<String>, link: impl Into<String>, snippet: impl Into<String>) -> Self {
        Self { title: title.into(), link: link.into(), snippet: snippet.into() }
    }
}

/// Ordered results of a single search, in provider order.
pub type ResultSet = Vec<ResultRecord>;

/// Key used for the record at `index` (0-based) in the download document.
pub fn position_key(index: usize) -> String {
    format!("result{}", index + 1)
}

/// Re-key an ordered result set by 1-based position (`result1`, `result2`, ...).
///
/// The returned map keeps insertion order, so iteration matches the input.
pub fn keyed_by_position(results: &[ResultRecord]) -> Result<Map<String, Value>, Error> {
    let mut keyed = Map::with_capacity(results.len());
    for (idx, record) in results.iter().enumerate() {
        keyed.insert(position_key(idx), serde_json::to_value(record)?);
    }
    Ok(keyed)
}

/// Render the downloadable JSON document with four-space indentation.
pub fn download_document(results: &[ResultRecord]) -> Result<String, Error> {
    let keyed = keyed_by_position(results)?;

    let mut buf = Vec::with_capacity(results.len() * 128);
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    keyed.serialize(&mut ser)?;

    Ok(String::from_utf8(buf)?)
}
