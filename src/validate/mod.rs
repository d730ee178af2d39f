//! Validation: derive field-level errors from the schema
//!
//! The validator is a pure function from form state to an error map. It is
//! recomputed whole on every change, never incrementally patched, and it
//! never fails: the worst outcome is a non-empty map.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::record::{FieldValue, FormRecord, RowRecord};
use crate::schema::{DocumentSchema, FieldDescriptor, FieldKind, SectionBody, TableSpec};

/// Field key (dotted path for table cells, e.g. `items.2.quantity`) to
/// human-readable message. Every key corresponds to a descriptor reachable
/// from the schema; table-level findings sit at the table's own key.
pub type ValidationErrorMap = BTreeMap<String, String>;

/// Message for a required field left empty or whitespace-only
pub const REQUIRED_MESSAGE: &str = "Required";

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
    })
}

/// Validate a record against its schema
pub fn validate(schema: &DocumentSchema, record: &FormRecord) -> ValidationErrorMap {
    let mut errors = ValidationErrorMap::new();
    for section in &schema.sections {
        match &section.body {
            SectionBody::Fields { fields } => {
                for field in fields {
                    let raw = record
                        .value(&field.key)
                        .map(FieldValue::as_text)
                        .unwrap_or_default();
                    check_value(field, &raw, &field.key, &mut errors);
                }
            }
            SectionBody::Table { table } => validate_table(table, record, &mut errors),
        }
    }
    errors
}

fn validate_table(table: &TableSpec, record: &FormRecord, errors: &mut ValidationErrorMap) {
    let empty = crate::record::RowSet::new();
    let rows = record.rows(&table.key).unwrap_or(&empty);

    if rows.len() < table.min_rows {
        errors.insert(
            table.key.clone(),
            format!("At least {} row(s) required", table.min_rows),
        );
    }

    for (index, row) in rows.iter().enumerate() {
        validate_row(table, row, index, errors);
    }
}

fn validate_row(
    table: &TableSpec,
    row: &RowRecord,
    index: usize,
    errors: &mut ValidationErrorMap,
) {
    for column in &table.columns {
        let path = format!("{}.{}.{}", table.key, index, column.key);
        check_value(column, row.cell(&column.key), &path, errors);
    }
    // dynamic cells have no descriptor and therefore no rules
}

fn check_value(field: &FieldDescriptor, raw: &str, path: &str, errors: &mut ValidationErrorMap) {
    let value = raw.trim();
    if value.is_empty() {
        if field.required {
            errors.insert(path.to_string(), REQUIRED_MESSAGE.to_string());
        }
        return;
    }

    let message = match &field.kind {
        FieldKind::Number => value
            .parse::<f64>()
            .is_err()
            .then(|| "Must be a number".to_string()),
        FieldKind::Email => (!email_regex().is_match(value))
            .then(|| "Must be a valid email address".to_string()),
        FieldKind::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
            .is_err()
            .then(|| "Must be a date (YYYY-MM-DD)".to_string()),
        FieldKind::Time => NaiveTime::parse_from_str(value, TIME_FORMAT)
            .is_err()
            .then(|| "Must be a time (HH:MM)".to_string()),
        FieldKind::DateTime => NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
            .is_err()
            .then(|| "Must be a date and time (YYYY-MM-DDTHH:MM)".to_string()),
        FieldKind::Select {
            options,
            allow_other,
        } => (!*allow_other && !options.iter().any(|o| o.value == value))
            .then(|| "Not one of the allowed options".to_string()),
        FieldKind::Text | FieldKind::TextArea => None,
    };

    if let Some(message) = message {
        errors.insert(path.to_string(), message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FormRecord;
    use crate::schema::{DocumentSchema, FieldDescriptor, SelectOption, TableSpec};

    fn schema() -> DocumentSchema {
        DocumentSchema::builder("test.doc", "Test Document")
            .section(
                "Details",
                vec![
                    FieldDescriptor::text("name", "Name").required(),
                    FieldDescriptor::email("contact", "Contact Email"),
                    FieldDescriptor::number("headcount", "Headcount"),
                    FieldDescriptor::date("visitDate", "Visit Date"),
                    FieldDescriptor::time("startTime", "Start Time"),
                    FieldDescriptor::datetime("followUpAt", "Follow-up At"),
                    FieldDescriptor::select(
                        "status",
                        "Status",
                        vec![
                            SelectOption::new("OPEN", "Open"),
                            SelectOption::new("CLOSED", "Closed"),
                        ],
                    ),
                    FieldDescriptor::select_with_other(
                        "region",
                        "Region",
                        vec![
                            SelectOption::new("EMEA", "EMEA"),
                            SelectOption::new("APAC", "APAC"),
                        ],
                    ),
                ],
            )
            .table_section(
                "Items",
                TableSpec::new(
                    "items",
                    vec![
                        FieldDescriptor::text("code", "Code").required(),
                        FieldDescriptor::number("qty", "Quantity"),
                    ],
                )
                .min_rows(1),
            )
            .build()
            .expect("schema should build")
    }

    #[test]
    fn required_field_blank_or_whitespace_yields_required() {
        let schema = schema();
        let mut record = FormRecord::new(&schema);

        let errors = validate(&schema, &record);
        assert_eq!(errors.get("name").map(String::as_str), Some(REQUIRED_MESSAGE));

        record.set_scalar("name", "   ".into()).expect("set");
        let errors = validate(&schema, &record);
        assert_eq!(errors.get("name").map(String::as_str), Some(REQUIRED_MESSAGE));

        record.set_scalar("name", "Acme".into()).expect("set");
        let errors = validate(&schema, &record);
        assert!(!errors.contains_key("name"));
    }

    #[test]
    fn optional_blank_fields_are_clean() {
        let schema = schema();
        let mut record = FormRecord::new(&schema);
        record.set_scalar("name", "Acme".into()).expect("set");
        seed_row(&schema, &mut record, "A1", "1");

        assert!(validate(&schema, &record).is_empty());
    }

    #[test]
    fn format_rules_fire_only_on_filled_values() {
        let schema = schema();
        let mut record = FormRecord::new(&schema);
        record.set_scalar("contact", "not-an-email".into()).expect("set");
        record.set_scalar("headcount", "twelve".into()).expect("set");
        record.set_scalar("visitDate", "31/12/2025".into()).expect("set");
        record.set_scalar("startTime", "9am".into()).expect("set");
        record.set_scalar("status", "PENDING".into()).expect("set");

        let errors = validate(&schema, &record);
        assert_eq!(
            errors.get("contact").map(String::as_str),
            Some("Must be a valid email address")
        );
        assert_eq!(errors.get("headcount").map(String::as_str), Some("Must be a number"));
        assert!(errors.contains_key("visitDate"));
        assert!(errors.contains_key("startTime"));
        assert_eq!(
            errors.get("status").map(String::as_str),
            Some("Not one of the allowed options")
        );

        record.set_scalar("contact", "a@b.com".into()).expect("set");
        record.set_scalar("headcount", "12".into()).expect("set");
        record.set_scalar("visitDate", "2025-12-31".into()).expect("set");
        record.set_scalar("startTime", "09:30".into()).expect("set");
        record.set_scalar("status", "OPEN".into()).expect("set");

        let errors = validate(&schema, &record);
        assert!(!errors.contains_key("contact"));
        assert!(!errors.contains_key("headcount"));
        assert!(!errors.contains_key("visitDate"));
        assert!(!errors.contains_key("startTime"));
        assert!(!errors.contains_key("status"));
    }

    #[test]
    fn datetime_values_must_parse_as_date_and_time() {
        let schema = schema();
        let mut record = FormRecord::new(&schema);

        record
            .set_scalar("followUpAt", "2025-12-31".into())
            .expect("set");
        let errors = validate(&schema, &record);
        assert_eq!(
            errors.get("followUpAt").map(String::as_str),
            Some("Must be a date and time (YYYY-MM-DDTHH:MM)")
        );

        record
            .set_scalar("followUpAt", "2025-12-31T14:30".into())
            .expect("set");
        let errors = validate(&schema, &record);
        assert!(!errors.contains_key("followUpAt"));
    }

    #[test]
    fn select_with_other_sentinel_accepts_off_list_text() {
        let schema = schema();
        let mut record = FormRecord::new(&schema);

        // the strict select rejects off-list values; the Other-enabled
        // select takes free text as well as its own options
        record.set_scalar("status", "LATAM".into()).expect("set");
        record.set_scalar("region", "LATAM".into()).expect("set");
        let errors = validate(&schema, &record);
        assert_eq!(
            errors.get("status").map(String::as_str),
            Some("Not one of the allowed options")
        );
        assert!(!errors.contains_key("region"));

        record.set_scalar("region", "EMEA".into()).expect("set");
        let errors = validate(&schema, &record);
        assert!(!errors.contains_key("region"));
    }

    #[test]
    fn table_rules_use_dotted_paths_and_min_rows() {
        let schema = schema();
        let mut record = FormRecord::new(&schema);
        record.set_scalar("name", "Acme".into()).expect("set");

        let errors = validate(&schema, &record);
        assert_eq!(
            errors.get("items").map(String::as_str),
            Some("At least 1 row(s) required")
        );

        seed_row(&schema, &mut record, "", "many");
        let errors = validate(&schema, &record);
        assert!(!errors.contains_key("items"));
        assert_eq!(errors.get("items.0.code").map(String::as_str), Some(REQUIRED_MESSAGE));
        assert_eq!(
            errors.get("items.0.qty").map(String::as_str),
            Some("Must be a number")
        );
    }

    fn seed_row(schema: &DocumentSchema, record: &mut FormRecord, code: &str, qty: &str) {
        let table = schema.table("items").expect("table exists");
        let mut row =
            crate::record::RowRecord::from_template(&table.columns, &table.row_template);
        row.set_cell("code", code);
        row.set_cell("qty", qty);
        record.rows_mut("items").expect("table").push(row);
    }
}
