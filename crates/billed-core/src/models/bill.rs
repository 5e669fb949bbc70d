use serde::{Deserialize, Serialize};

use super::form::{parse_leading_int, FormFields};
use super::upload::StagedArtifact;
use crate::constants::DEFAULT_VAT_PERCENT;

/// Review status of a bill. New bills always start as `Pending`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    #[default]
    Pending,
    Accepted,
    Refused,
}

/// An expense record as sent to (and returned by) the bill store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExpenseRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    /// `None` when the form value holds no number; serialized as `null`.
    pub amount: Option<i64>,
    pub date: String,
    /// Kept as typed in the form.
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    pub file_url: String,
    pub file_name: String,
    pub status: BillStatus,
}

impl ExpenseRecord {
    /// Assemble a pending bill from a form snapshot and the staged receipt.
    pub fn from_form(fields: &FormFields, staged: &StagedArtifact, email: Option<String>) -> Self {
        Self {
            email,
            expense_type: fields.expense_type.clone(),
            name: fields.expense_name.clone(),
            amount: parse_leading_int(&fields.amount),
            date: fields.date.clone(),
            vat: fields.vat.clone(),
            pct: parse_leading_int(&fields.pct)
                .filter(|pct| *pct != 0)
                .unwrap_or(DEFAULT_VAT_PERCENT),
            commentary: fields.commentary.clone(),
            file_url: staged.file_url().to_string(),
            file_name: staged.file_name.clone(),
            status: BillStatus::Pending,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RemoteArtifactRef;
    use serde_json::json;

    fn staged() -> StagedArtifact {
        StagedArtifact {
            artifact: RemoteArtifactRef {
                file_url: "http://localhost/image.png".to_string(),
                key: "1234".to_string(),
            },
            file_name: "image.png".to_string(),
        }
    }

    fn fields() -> FormFields {
        FormFields {
            expense_type: "Transports".to_string(),
            expense_name: "Vol Paris Londres".to_string(),
            amount: "50".to_string(),
            date: "2026-10-19".to_string(),
            vat: "20".to_string(),
            pct: "10".to_string(),
            commentary: "séminaire".to_string(),
        }
    }

    #[test]
    fn numbers_are_parsed_but_vat_is_not() {
        let record = ExpenseRecord::from_form(&fields(), &staged(), None);
        assert_eq!(record.amount, Some(50));
        assert_eq!(record.pct, 10);
        assert_eq!(record.vat, "20");
        assert_eq!(record.status, BillStatus::Pending);
    }

    #[test]
    fn pct_defaults_to_twenty() {
        let mut fields = fields();
        fields.pct = String::new();
        let record = ExpenseRecord::from_form(&fields, &staged(), None);
        assert_eq!(record.pct, 20);
    }

    #[test]
    fn zero_pct_falls_back_to_default() {
        let mut fields = fields();
        fields.pct = "0".to_string();
        let record = ExpenseRecord::from_form(&fields, &staged(), None);
        assert_eq!(record.pct, 20);
    }

    #[test]
    fn serializes_with_wire_names() {
        let record = ExpenseRecord::from_form(
            &fields(),
            &staged(),
            Some("employee@test.tld".to_string()),
        );
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(
            value,
            json!({
                "email": "employee@test.tld",
                "type": "Transports",
                "name": "Vol Paris Londres",
                "amount": 50,
                "date": "2026-10-19",
                "vat": "20",
                "pct": 10,
                "commentary": "séminaire",
                "fileUrl": "http://localhost/image.png",
                "fileName": "image.png",
                "status": "pending"
            })
        );
    }

    #[test]
    fn invalid_amount_serializes_as_null() {
        let mut fields = fields();
        fields.amount = "abc".to_string();
        let value = serde_json::to_value(ExpenseRecord::from_form(&fields, &staged(), None)).unwrap();
        assert!(value["amount"].is_null());
        assert!(value.get("email").is_none());
    }

    #[test]
    fn deserializes_store_response_with_extra_fields() {
        let record: ExpenseRecord = serde_json::from_value(json!({
            "id": "47qAXb6fIm2zOKkLzMro",
            "type": "Hôtel et logement",
            "name": "encore",
            "amount": 400,
            "vat": "80",
            "pct": 20,
            "status": "accepted"
        }))
        .unwrap();

        assert_eq!(record.status, BillStatus::Accepted);
        assert_eq!(record.amount, Some(400));
        assert_eq!(record.file_url, "");
    }
}
