//! KYC Client Pack

use crate::schema::{DocumentSchema, FieldDescriptor, SelectOption, TableSpec};

pub fn kyc_client_pack() -> DocumentSchema {
    DocumentSchema::builder("kyc.client.pack", "KYC Client Pack")
        .section(
            "Client",
            vec![
                FieldDescriptor::text("legalName", "Legal Name").required(),
                FieldDescriptor::select(
                    "clientType",
                    "Client Type",
                    vec![
                        SelectOption::new("COMPANY", "Company"),
                        SelectOption::new("INDIVIDUAL", "Individual"),
                        SelectOption::new("TRUST", "Trust"),
                        SelectOption::new("PARTNERSHIP", "Partnership"),
                    ],
                )
                .required(),
                FieldDescriptor::text("jurisdiction", "Jurisdiction").required(),
                FieldDescriptor::email("contactEmail", "Contact Email").required(),
                FieldDescriptor::date("reviewDate", "Review Date"),
            ],
        )
        .table_section(
            "Beneficial Owners",
            TableSpec::new(
                "beneficialOwners",
                vec![
                    FieldDescriptor::text("name", "Name").required(),
                    FieldDescriptor::number("ownershipPercent", "Ownership %").required(),
                    FieldDescriptor::text("nationality", "Nationality"),
                ],
            )
            .min_rows(1),
        )
        .build()
        .expect("builtin document schema is well-formed")
}
