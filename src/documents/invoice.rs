//! Invoice Intake

use crate::schema::{DocumentSchema, FieldDescriptor, TableSpec};

pub fn invoice_intake() -> DocumentSchema {
    DocumentSchema::builder("invoice.intake", "Invoice Intake")
        .section(
            "Supplier",
            vec![
                FieldDescriptor::text("supplierName", "Supplier Name").required(),
                FieldDescriptor::email("supplierEmail", "Supplier Email"),
                FieldDescriptor::text("invoiceNumber", "Invoice Number").required(),
                FieldDescriptor::date("invoiceDate", "Invoice Date").required(),
                FieldDescriptor::number("totalAmount", "Total Amount").required(),
            ],
        )
        .table_section(
            "Line Items",
            TableSpec::new(
                "items",
                vec![
                    FieldDescriptor::text("itemCode", "Item Code").required(),
                    FieldDescriptor::text("description", "Description"),
                    FieldDescriptor::number("quantity", "Quantity").required(),
                    FieldDescriptor::number("unitPrice", "Unit Price"),
                ],
            )
            .min_rows(1)
            .template_value("quantity", "1"),
        )
        .build()
        .expect("builtin document schema is well-formed")
}
