//! Transaction record model

use serde::{de, Deserialize, Deserializer};

/// One transaction submitted through the prediction form.
///
/// Built fresh per request and dropped once the response is rendered.
/// None of the fields are range-checked; the form layer only coerces types.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TransactionRecord {
    /// Hour of day (expected 0-23)
    pub trans_hour: i64,
    /// Day of month (expected 1-31)
    pub trans_day: i64,
    /// Month (expected 1-12)
    pub trans_month: i64,
    /// Four-digit year
    pub trans_year: i64,
    pub trans_amount: f64,
    /// Opaque UPI identifier
    #[serde(deserialize_with = "non_empty")]
    pub upi_number: String,
}

/// An empty text field counts as missing
fn non_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() {
        return Err(de::Error::custom("field must not be empty"));
    }
    Ok(value)
}

/// Named column of a transaction record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    TransHour,
    TransDay,
    TransMonth,
    TransYear,
    TransAmount,
    UpiNumber,
}

/// Cell value of a single record column
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl RecordField {
    pub const ALL: [RecordField; 6] = [
        RecordField::TransHour,
        RecordField::TransDay,
        RecordField::TransMonth,
        RecordField::TransYear,
        RecordField::TransAmount,
        RecordField::UpiNumber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            RecordField::TransHour => "trans_hour",
            RecordField::TransDay => "trans_day",
            RecordField::TransMonth => "trans_month",
            RecordField::TransYear => "trans_year",
            RecordField::TransAmount => "trans_amount",
            RecordField::UpiNumber => "upi_number",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn is_text(self) -> bool {
        matches!(self, RecordField::UpiNumber)
    }
}

impl TransactionRecord {
    pub fn get(&self, field: RecordField) -> FieldValue<'_> {
        match field {
            RecordField::TransHour => FieldValue::Number(self.trans_hour as f64),
            RecordField::TransDay => FieldValue::Number(self.trans_day as f64),
            RecordField::TransMonth => FieldValue::Number(self.trans_month as f64),
            RecordField::TransYear => FieldValue::Number(self.trans_year as f64),
            RecordField::TransAmount => FieldValue::Number(self.trans_amount),
            RecordField::UpiNumber => FieldValue::Text(&self.upi_number),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in RecordField::ALL {
            assert_eq!(RecordField::from_name(field.name()), Some(field));
        }
        assert_eq!(RecordField::from_name("amount"), None);
    }

    #[test]
    fn test_empty_upi_number_is_rejected() {
        let json = serde_json::json!({
            "trans_hour": 10, "trans_day": 5, "trans_month": 3,
            "trans_year": 2024, "trans_amount": 500.0, "upi_number": ""
        });
        assert!(serde_json::from_value::<TransactionRecord>(json).is_err());
    }

    #[test]
    fn test_get_values() {
        let record = TransactionRecord {
            trans_hour: 10,
            trans_day: 5,
            trans_month: 3,
            trans_year: 2024,
            trans_amount: 500.0,
            upi_number: "user@upi".to_string(),
        };

        assert_eq!(record.get(RecordField::TransYear), FieldValue::Number(2024.0));
        assert_eq!(record.get(RecordField::TransAmount), FieldValue::Number(500.0));
        assert_eq!(record.get(RecordField::UpiNumber), FieldValue::Text("user@upi"));
    }
}
