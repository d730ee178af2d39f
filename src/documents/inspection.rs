//! Site Inspection Checklist
//!
//! Print-first document: back-office review catches gaps, so submission is
//! allowed while validation errors remain.

use crate::schema::{DocumentSchema, FieldDescriptor, SelectOption, TableSpec};

pub fn site_inspection_checklist() -> DocumentSchema {
    DocumentSchema::builder("site.inspection.checklist", "Site Inspection Checklist")
        .section(
            "Visit",
            vec![
                FieldDescriptor::text("site", "Site").required(),
                FieldDescriptor::date("visitDate", "Visit Date").required(),
                FieldDescriptor::text("inspector", "Inspector").required(),
                FieldDescriptor::time("arrivalTime", "Arrival Time"),
                FieldDescriptor::time("departureTime", "Departure Time"),
            ],
        )
        .table_section(
            "Checklist",
            TableSpec::new(
                "checklist",
                vec![
                    FieldDescriptor::text("item", "Checklist Item").required(),
                    FieldDescriptor::select(
                        "status",
                        "Status",
                        vec![
                            SelectOption::new("PASS", "Pass"),
                            SelectOption::new("FAIL", "Fail"),
                            SelectOption::new("NA", "Not Applicable"),
                        ],
                    )
                    .required(),
                    FieldDescriptor::textarea("notes", "Notes"),
                ],
            )
            .min_rows(1),
        )
        .allow_submit_with_errors(true)
        .purge_dynamic_values_on_column_remove(true)
        .build()
        .expect("builtin document schema is well-formed")
}
