//! @ai:module:intent Product row parsed from the curated spreadsheet
//! @ai:module:layer domain
//! @ai:module:public_api ProductRow, Action, column names
//! @ai:module:stateless true

use crate::error::{Error, Result};
use std::collections::HashMap;

pub const ACTION: &str = "action";
pub const LISTING_ID: &str = "listing_id";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const PRICE: &str = "price";
pub const QUANTITY: &str = "quantity";
pub const TAXONOMY_ID: &str = "taxonomy_id";
pub const TAGS: &str = "tags";
pub const MATERIALS: &str = "materials";

/// Header row expected in the input file.
pub const HEADER: [&str; 9] = [
    ACTION,
    LISTING_ID,
    TITLE,
    DESCRIPTION,
    PRICE,
    QUANTITY,
    TAXONOMY_ID,
    TAGS,
    MATERIALS,
];

/// @ai:intent What the operator asked for on a row
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    /// Anything else, normalized (trimmed and lower-cased)
    Other(String),
}

impl Action {
    /// @ai:intent Classify a raw action cell, ignoring case and surrounding whitespace
    /// @ai:effects pure
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();

        match normalized.as_str() {
            "create" => Action::Create,
            "update" => Action::Update,
            _ => Action::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Other(s) => s,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// @ai:intent One record of the input file, keyed by header name
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    /// 1-based position among data rows
    pub number: usize,
    fields: HashMap<String, String>,
}

impl ProductRow {
    /// @ai:intent Build a row from header/value pairs
    /// @ai:effects pure
    pub fn new<I, K, V>(number: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            number,
            fields: fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// @ai:intent Look up a column that may be absent
    /// @ai:effects pure
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// @ai:intent Look up a column that must be present
    /// @ai:post Err(MissingField) when the column is absent; empty cells are present
    /// @ai:effects pure
    pub fn require(&self, field: &'static str) -> Result<&str> {
        self.get(field).ok_or(Error::MissingField {
            row: self.number,
            field,
        })
    }

    /// @ai:intent Parse a required column as an integer
    /// @ai:post surrounding whitespace is ignored; Err(ValueFormat) otherwise
    /// @ai:effects pure
    pub fn require_int(&self, field: &'static str) -> Result<i64> {
        let raw = self.require(field)?;

        parse_int(raw).ok_or_else(|| Error::ValueFormat {
            row: self.number,
            field,
            value: raw.to_string(),
        })
    }

    /// @ai:intent Split a required pipe-delimited column, keeping empty segments
    /// @ai:effects pure
    pub fn require_list(&self, field: &'static str) -> Result<Vec<String>> {
        Ok(self.require(field)?.split('|').map(str::to_string).collect())
    }

    /// @ai:intent Classify the row's action column
    /// @ai:effects pure
    pub fn action(&self) -> Result<Action> {
        Ok(Action::parse(self.require(ACTION)?))
    }
}

/// @ai:intent Parse a decimal integer cell
/// @ai:post accepts an optional sign and single underscores between digits ("1_000")
/// @ai:effects pure
fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return None;
    }

    trimmed.replace('_', "").parse::<i64>().ok()
}
