use serde::{Deserialize, Serialize};

/// A single purchased line item.
///
/// `price` is kept as the submitted decimal string; it is only parsed when
/// points are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Receipt as submitted to `/receipts/process`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24 hour clock
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_camel_case() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" }
            ],
            "total": "6.49"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();

        assert_eq!(receipt.retailer, "Target");
        assert_eq!(receipt.purchase_date, "2022-01-01");
        assert_eq!(receipt.purchase_time, "13:01");
        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.items[0].short_description, "Mountain Dew 12PK");
        assert_eq!(receipt.items[0].price, "6.49");
        assert_eq!(receipt.total, "6.49");
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "items": [],
            "total": "1.00"
        }"#;

        let err = serde_json::from_str::<Receipt>(json).unwrap_err();

        assert!(err.to_string().contains("purchaseTime"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [],
            "total": "9.00",
            "cashier": "Sam"
        }"#;

        let receipt: Receipt = serde_json::from_str(json).unwrap();

        assert_eq!(receipt.retailer, "M&M Corner Market");
    }
}
