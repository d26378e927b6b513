use serde::{Deserialize, Serialize};

/// The seven spending categories offered by the expense table.
pub const EXPENSE_CATEGORIES: [&str; 7] = [
    "Housing",
    "Utilities",
    "Insurance",
    "Groceries",
    "Transportation",
    "Entertainment",
    "Miscellaneous",
];

/// One editable line of the expense table. Fields hold raw input text;
/// numeric coercion happens only when the payload is built.
#[derive(Clone, Debug, PartialEq)]
pub struct ExpenseRow {
    pub kind: String,
    pub amount: String,
    pub category: String,
}

impl ExpenseRow {
    pub fn new() -> Self {
        ExpenseRow {
            kind: "".to_string(),
            amount: "".to_string(),
            category: EXPENSE_CATEGORIES[0].to_string(),
        }
    }

    fn to_entry(&self) -> ExpenseEntry {
        ExpenseEntry {
            kind: self.kind.clone(),
            amount: parse_amount(&self.amount),
            category: self.category.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub amount: f64,
    pub category: String,
}

/// Everything the backend needs to build the report and charts. Assembled
/// fresh from component state on every submit, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPayload {
    pub age: u32,
    pub salary: f64,
    pub additional_income: f64,
    pub investments: f64,
    pub bonuses: f64,
    pub gov_benefits: f64,
    pub expenses: Vec<ExpenseEntry>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReportResponse {
    pub report: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ChartsResponse {
    pub chart1: String,
    pub chart2: String,
    #[serde(default)]
    pub think: Option<String>,
}

impl ChartsResponse {
    /// Chain-of-thought text, only when the backend sent a non-empty one.
    pub fn reasoning(&self) -> Option<&str> {
        self.think.as_deref().filter(|t| !t.is_empty())
    }
}

/// Age is a whole number of years; anything unparseable (including
/// negatives) counts as 0.
pub fn parse_age(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

/// Money fields fall back to 0 when blank or unparseable.
pub fn parse_amount(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

pub fn png_data_url(b64: &str) -> String {
    format!("data:image/png;base64,{b64}")
}

pub fn build_payload(
    age: &str,
    salary: &str,
    additional_income: &str,
    investments: &str,
    bonuses: &str,
    gov_benefits: &str,
    rows: &[ExpenseRow],
) -> BudgetPayload {
    BudgetPayload {
        age: parse_age(age),
        salary: parse_amount(salary),
        additional_income: parse_amount(additional_income),
        investments: parse_amount(investments),
        bonuses: parse_amount(bonuses),
        gov_benefits: parse_amount(gov_benefits),
        expenses: rows.iter().map(ExpenseRow::to_entry).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_coerce_to_zero() {
        assert_eq!(parse_age(""), 0);
        assert_eq!(parse_age("  "), 0);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("  "), 0.0);
    }

    #[test]
    fn age_is_a_nonnegative_integer() {
        assert_eq!(parse_age("42"), 42);
        assert_eq!(parse_age(" 42 "), 42);
        assert_eq!(parse_age("forty"), 0);
        assert_eq!(parse_age("-3"), 0);
        assert_eq!(parse_age("42.5"), 0);
    }

    #[test]
    fn deleting_a_row_keeps_the_others_in_order() {
        let mut rows: Vec<ExpenseRow> = (0..4)
            .map(|i| ExpenseRow {
                kind: format!("item-{i}"),
                amount: format!("{i}00"),
                category: EXPENSE_CATEGORIES[i].to_string(),
            })
            .collect();

        rows.remove(1);

        assert_eq!(rows.len(), 3);
        let kinds: Vec<&str> = rows.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, ["item-0", "item-2", "item-3"]);
        assert_eq!(rows[1].amount, "200");
        assert_eq!(rows[1].category, "Insurance");
    }

    #[test]
    fn new_rows_preselect_the_first_category() {
        let row = ExpenseRow::new();
        assert_eq!(row.category, "Housing");
        assert!(row.kind.is_empty());
        assert!(row.amount.is_empty());
    }

    #[test]
    fn empty_form_serializes_with_camel_case_keys_and_no_expenses() {
        let payload = build_payload("", "", "", "", "", "", &[]);
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["age"], 0);
        assert_eq!(value["salary"], 0.0);
        assert!(value.get("additionalIncome").is_some());
        assert!(value.get("govBenefits").is_some());
        assert_eq!(value["expenses"], serde_json::json!([]));
    }

    #[test]
    fn unparseable_amount_falls_back_to_zero_in_payload() {
        let rows = vec![ExpenseRow {
            kind: "Rent".to_string(),
            amount: "abc".to_string(),
            category: "Housing".to_string(),
        }];
        let payload = build_payload("30", "5000", "", "", "", "", &rows);

        assert_eq!(payload.age, 30);
        assert_eq!(payload.salary, 5000.0);
        assert_eq!(payload.expenses.len(), 1);
        assert_eq!(payload.expenses[0].amount, 0.0);

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["expenses"][0]["type"], "Rent");
        assert_eq!(value["expenses"][0]["category"], "Housing");
    }

    #[test]
    fn payload_keeps_expense_rows_in_document_order() {
        let rows = vec![
            ExpenseRow {
                kind: "Rent".to_string(),
                amount: "1200".to_string(),
                category: "Housing".to_string(),
            },
            ExpenseRow {
                kind: "Power".to_string(),
                amount: "80.5".to_string(),
                category: "Utilities".to_string(),
            },
        ];
        let payload = build_payload("0", "0", "0", "0", "0", "0", &rows);

        assert_eq!(payload.expenses[0].kind, "Rent");
        assert_eq!(payload.expenses[0].amount, 1200.0);
        assert_eq!(payload.expenses[1].kind, "Power");
        assert_eq!(payload.expenses[1].amount, 80.5);
    }

    #[test]
    fn charts_reasoning_requires_a_nonempty_think() {
        let with: ChartsResponse =
            serde_json::from_str(r#"{"chart1":"aa","chart2":"bb","think":"line one\nline two"}"#)
                .unwrap();
        assert_eq!(with.reasoning(), Some("line one\nline two"));

        let without: ChartsResponse =
            serde_json::from_str(r#"{"chart1":"aa","chart2":"bb"}"#).unwrap();
        assert_eq!(without.reasoning(), None);

        let empty: ChartsResponse =
            serde_json::from_str(r#"{"chart1":"aa","chart2":"bb","think":""}"#).unwrap();
        assert_eq!(empty.reasoning(), None);
    }

    #[test]
    fn data_url_wraps_base64_png_bytes() {
        assert_eq!(png_data_url("iVBOR"), "data:image/png;base64,iVBOR");
    }
}
