use serde::{Deserialize, Serialize};

/// Stable identifiers of the new-bill form fields, as exposed by the form host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    ExpenseType,
    ExpenseName,
    Amount,
    Date,
    Vat,
    Pct,
    Commentary,
}

impl FieldId {
    pub const ALL: [FieldId; 7] = [
        FieldId::ExpenseType,
        FieldId::ExpenseName,
        FieldId::Amount,
        FieldId::Date,
        FieldId::Vat,
        FieldId::Pct,
        FieldId::Commentary,
    ];

    /// Identifier used by the form host (the `data-testid` of the input).
    pub fn test_id(&self) -> &'static str {
        match self {
            FieldId::ExpenseType => "expense-type",
            FieldId::ExpenseName => "expense-name",
            FieldId::Amount => "amount",
            FieldId::Date => "datepicker",
            FieldId::Vat => "vat",
            FieldId::Pct => "pct",
            FieldId::Commentary => "commentary",
        }
    }
}

/// Raw string values of the new-bill form, read at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub expense_type: String,
    pub expense_name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl FormFields {
    /// Build a snapshot by asking the host for every field.
    pub fn from_lookup<F>(mut lookup: F) -> Self
    where
        F: FnMut(FieldId) -> Option<String>,
    {
        let mut fields = FormFields::default();
        for id in FieldId::ALL {
            if let Some(value) = lookup(id) {
                *fields.get_mut(id) = value;
            }
        }
        fields
    }

    pub fn get(&self, id: FieldId) -> &str {
        match id {
            FieldId::ExpenseType => &self.expense_type,
            FieldId::ExpenseName => &self.expense_name,
            FieldId::Amount => &self.amount,
            FieldId::Date => &self.date,
            FieldId::Vat => &self.vat,
            FieldId::Pct => &self.pct,
            FieldId::Commentary => &self.commentary,
        }
    }

    fn get_mut(&mut self, id: FieldId) -> &mut String {
        match id {
            FieldId::ExpenseType => &mut self.expense_type,
            FieldId::ExpenseName => &mut self.expense_name,
            FieldId::Amount => &mut self.amount,
            FieldId::Date => &mut self.date,
            FieldId::Vat => &mut self.vat,
            FieldId::Pct => &mut self.pct,
            FieldId::Commentary => &mut self.commentary,
        }
    }
}

/// Parse the leading integer of a form value.
///
/// Leading whitespace and a sign are accepted and parsing stops at the first
/// non-digit, so `"12.5"` gives 12 and `"50€"` gives 50. Returns `None` when no
/// digit comes first.
pub fn parse_leading_int(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
