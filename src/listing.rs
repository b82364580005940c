//! @ai:module:intent Map product rows onto Etsy listing payloads
//! @ai:module:layer domain
//! @ai:module:public_api CreateListingPayload, UpdateListingPayload, RowPlan, SkipReason, plan_row
//! @ai:module:stateless true

use crate::catalog::row::{
    Action, ProductRow, DESCRIPTION, LISTING_ID, MATERIALS, PRICE, QUANTITY, TAGS, TAXONOMY_ID,
    TITLE,
};
use crate::error::Result;
use serde::Serialize;

/// @ai:intent Body of POST /shops/{shop_id}/listings
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateListingPayload {
    pub title: String,
    pub description: String,
    pub who_made: &'static str,
    pub when_made: &'static str,
    pub is_supply: bool,
    pub taxonomy_id: i64,
    /// Sent exactly as written in the spreadsheet
    pub price: String,
    pub quantity: i64,
    pub tags: Vec<String>,
    pub materials: Vec<String>,
    pub state: &'static str,
}

/// @ai:intent Body of PATCH /listings/{listing_id}
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateListingPayload {
    pub title: String,
    pub description: String,
    pub price: String,
    pub quantity: i64,
    pub tags: Vec<String>,
    pub materials: Vec<String>,
}

/// @ai:intent Why a row produced no API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    UnknownAction(String),
    MissingListingId,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::UnknownAction(action) => {
                write!(f, "Skipping row with unknown action: {}", action)
            }
            SkipReason::MissingListingId => write!(f, "Skipping update row without listing_id"),
        }
    }
}

/// @ai:intent The single API call (or skip) a row resolves to
#[derive(Debug, Clone, PartialEq)]
pub enum RowPlan {
    Create(CreateListingPayload),
    Update {
        listing_id: String,
        payload: UpdateListingPayload,
    },
    Skip(SkipReason),
}

impl CreateListingPayload {
    /// @ai:intent Build a draft-listing payload from a create row
    /// @ai:post who_made/when_made/is_supply/state hold their fixed draft values
    /// @ai:effects pure
    pub fn from_row(row: &ProductRow) -> Result<Self> {
        Ok(Self {
            title: row.require(TITLE)?.to_string(),
            description: row.require(DESCRIPTION)?.to_string(),
            who_made: "i_did",
            when_made: "made_to_order",
            is_supply: false,
            taxonomy_id: row.require_int(TAXONOMY_ID)?,
            price: row.require(PRICE)?.to_string(),
            quantity: row.require_int(QUANTITY)?,
            tags: row.require_list(TAGS)?,
            materials: row.require_list(MATERIALS)?,
            state: "draft",
        })
    }
}

impl UpdateListingPayload {
    /// @ai:intent Build a patch payload from an update row
    /// @ai:effects pure
    pub fn from_row(row: &ProductRow) -> Result<Self> {
        Ok(Self {
            title: row.require(TITLE)?.to_string(),
            description: row.require(DESCRIPTION)?.to_string(),
            price: row.require(PRICE)?.to_string(),
            quantity: row.require_int(QUANTITY)?,
            tags: row.require_list(TAGS)?,
            materials: row.require_list(MATERIALS)?,
        })
    }
}

/// @ai:intent Classify a row and build the payload for its API call
/// @ai:pre row has an action column
/// @ai:post Skip for unknown actions and for updates without a listing_id
/// @ai:effects pure
pub fn plan_row(row: &ProductRow) -> Result<RowPlan> {
    match row.action()? {
        Action::Create => Ok(RowPlan::Create(CreateListingPayload::from_row(row)?)),
        Action::Update => match row.get(LISTING_ID).filter(|id| !id.is_empty()) {
            Some(listing_id) => Ok(RowPlan::Update {
                listing_id: listing_id.to_string(),
                payload: UpdateListingPayload::from_row(row)?,
            }),
            None => Ok(RowPlan::Skip(SkipReason::MissingListingId)),
        },
        Action::Other(action) => Ok(RowPlan::Skip(SkipReason::UnknownAction(action))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn create_row() -> ProductRow {
        ProductRow::new(
            1,
            [
                ("action", "create"),
                ("listing_id", ""),
                ("title", "Mug"),
                ("description", "Blue mug"),
                ("price", "12.50"),
                ("quantity", "5"),
                ("taxonomy_id", "100"),
                ("tags", "mug|blue"),
                ("materials", "ceramic"),
            ],
        )
    }

    fn update_row(listing_id: &str) -> ProductRow {
        ProductRow::new(
            2,
            [
                ("action", "update"),
                ("listing_id", listing_id),
                ("title", "Mug v2"),
                ("description", ".."),
                ("price", "14.00"),
                ("quantity", "3"),
                ("taxonomy_id", ""),
                ("tags", "mug"),
                ("materials", "ceramic"),
            ],
        )
    }

    #[test]
    fn test_create_payload_serializes_exactly() {
        let payload = match plan_row(&create_row()).unwrap() {
            RowPlan::Create(payload) => payload,
            other => panic!("expected create plan, got {other:?}"),
        };

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "title": "Mug",
                "description": "Blue mug",
                "price": "12.50",
                "quantity": 5,
                "taxonomy_id": 100,
                "tags": ["mug", "blue"],
                "materials": ["ceramic"],
                "who_made": "i_did",
                "when_made": "made_to_order",
                "is_supply": false,
                "state": "draft",
            })
        );
    }

    #[test]
    fn test_create_keeps_trailing_empty_tag() {
        let row = ProductRow::new(
            1,
            [
                ("action", "Create"),
                ("listing_id", "ignored"),
                ("title", "t"),
                ("description", "d"),
                ("price", "1"),
                ("quantity", "1"),
                ("taxonomy_id", "1"),
                ("tags", "a|"),
                ("materials", "|"),
            ],
        );
        let plan = plan_row(&row).unwrap();

        match plan {
            RowPlan::Create(payload) => {
                assert_eq!(payload.tags, vec!["a", ""]);
                assert_eq!(payload.materials, vec!["", ""]);
                assert_eq!(payload.state, "draft");
            }
            other => panic!("expected create plan, got {other:?}"),
        }
    }

    #[test]
    fn test_update_payload_omits_create_only_fields() {
        let (listing_id, payload) = match plan_row(&update_row("555")).unwrap() {
            RowPlan::Update { listing_id, payload } => (listing_id, payload),
            other => panic!("expected update plan, got {other:?}"),
        };

        assert_eq!(listing_id, "555");

        let value = serde_json::to_value(&payload).unwrap();
        let object = value.as_object().unwrap();

        for forbidden in ["taxonomy_id", "who_made", "when_made", "state", "is_supply"] {
            assert!(!object.contains_key(forbidden), "{forbidden} leaked into update");
        }

        assert_eq!(
            value,
            json!({
                "title": "Mug v2",
                "description": "..",
                "price": "14.00",
                "quantity": 3,
                "tags": ["mug"],
                "materials": ["ceramic"],
            })
        );
    }

    #[test]
    fn test_update_ignores_bad_taxonomy() {
        let row = ProductRow::new(
            2,
            [
                ("action", " UPDATE "),
                ("listing_id", "555"),
                ("title", "t"),
                ("description", "d"),
                ("price", "1"),
                ("quantity", "1"),
                ("taxonomy_id", "not-a-number"),
                ("tags", "x"),
                ("materials", "y"),
            ],
        );

        assert!(matches!(plan_row(&row), Ok(RowPlan::Update { .. })));
    }

    #[test]
    fn test_update_without_listing_id_is_skipped() {
        assert_eq!(
            plan_row(&update_row("")).unwrap(),
            RowPlan::Skip(SkipReason::MissingListingId)
        );

        let no_column = ProductRow::new(3, [("action", "update"), ("title", "t")]);
        assert_eq!(
            plan_row(&no_column).unwrap(),
            RowPlan::Skip(SkipReason::MissingListingId)
        );
    }

    #[test]
    fn test_skipped_update_does_not_validate_fields() {
        let row = ProductRow::new(3, [("action", "update"), ("listing_id", ""), ("quantity", "x")]);
        assert!(matches!(plan_row(&row), Ok(RowPlan::Skip(_))));
    }

    #[test]
    fn test_unknown_action_is_skipped() {
        let row = ProductRow::new(4, [("action", " Delete ")]);
        let plan = plan_row(&row).unwrap();

        assert_eq!(plan, RowPlan::Skip(SkipReason::UnknownAction("delete".to_string())));
        if let RowPlan::Skip(reason) = plan {
            assert_eq!(reason.to_string(), "Skipping row with unknown action: delete");
        }
    }

    #[test]
    fn test_non_numeric_quantity_fails() {
        let mut fields: Vec<(&str, &str)> = vec![
            ("action", "create"),
            ("title", "t"),
            ("description", "d"),
            ("price", "1"),
            ("quantity", "three"),
            ("taxonomy_id", "1"),
            ("tags", "a"),
            ("materials", "b"),
        ];
        let err = plan_row(&ProductRow::new(9, fields.clone())).unwrap_err();
        assert!(matches!(err, Error::ValueFormat { row: 9, field: "quantity", .. }));

        fields[4] = ("quantity", "3");
        fields[5] = ("taxonomy_id", "ceramics");
        let err = plan_row(&ProductRow::new(9, fields)).unwrap_err();
        assert!(matches!(err, Error::ValueFormat { field: "taxonomy_id", .. }));
    }

    #[test]
    fn test_missing_columns_fail() {
        let err = plan_row(&ProductRow::new(1, [("title", "Mug")])).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "action", .. }));

        let err = plan_row(&ProductRow::new(1, [("action", "create"), ("title", "Mug")])).unwrap_err();
        assert!(matches!(err, Error::MissingField { field: "description", .. }));
    }
}
