//! Schema-derived validation over whole documents

use anyhow::Result;

use formbook::registry::DocumentRegistry;
use formbook::validate::REQUIRED_MESSAGE;
use formbook::FormSession;

fn kyc_session() -> Result<FormSession> {
    let registry = DocumentRegistry::new();
    Ok(registry.open("kyc.client.pack")?)
}

#[test]
fn required_entry_appears_and_clears_with_the_value() -> Result<()> {
    let mut session = kyc_session()?;

    let errors = session.validate();
    assert_eq!(errors.get("legalName").map(String::as_str), Some(REQUIRED_MESSAGE));

    session.set_value("legalName", "   ")?;
    let errors = session.validate();
    assert_eq!(errors.get("legalName").map(String::as_str), Some(REQUIRED_MESSAGE));

    session.set_value("legalName", "Apex Capital Partners")?;
    let errors = session.validate();
    assert!(!errors.contains_key("legalName"));
    Ok(())
}

#[test]
fn email_shape_is_checked_only_when_filled() -> Result<()> {
    let mut session = kyc_session()?;

    session.set_value("contactEmail", "not-an-email")?;
    let errors = session.validate();
    assert_eq!(
        errors.get("contactEmail").map(String::as_str),
        Some("Must be a valid email address")
    );

    session.set_value("contactEmail", "a@b.com")?;
    let errors = session.validate();
    assert!(!errors.contains_key("contactEmail"));
    Ok(())
}

#[test]
fn min_row_error_clears_at_exactly_the_minimum() -> Result<()> {
    let mut session = kyc_session()?;

    // zero rows, minimum one
    let errors = session.validate();
    assert_eq!(
        errors.get("beneficialOwners").map(String::as_str),
        Some("At least 1 row(s) required")
    );

    session.add_row("beneficialOwners")?;
    session.set_value("beneficialOwners.0.name", "J. Doe")?;
    session.set_value("beneficialOwners.0.ownershipPercent", "51")?;

    let errors = session.validate();
    assert!(!errors.contains_key("beneficialOwners"));
    Ok(())
}

#[test]
fn row_errors_use_positional_dotted_paths() -> Result<()> {
    let mut session = kyc_session()?;
    session.add_row("beneficialOwners")?;
    session.add_row("beneficialOwners")?;
    session.set_value("beneficialOwners.0.name", "J. Doe")?;
    session.set_value("beneficialOwners.0.ownershipPercent", "51")?;
    session.set_value("beneficialOwners.1.ownershipPercent", "forty-nine")?;

    let errors = session.validate();
    assert_eq!(
        errors.get("beneficialOwners.1.name").map(String::as_str),
        Some(REQUIRED_MESSAGE)
    );
    assert_eq!(
        errors
            .get("beneficialOwners.1.ownershipPercent")
            .map(String::as_str),
        Some("Must be a number")
    );

    // removing the first row shifts the survivor's error paths down
    session.remove_row_at("beneficialOwners", 0)?;
    let errors = session.validate();
    assert!(errors.contains_key("beneficialOwners.0.name"));
    assert!(!errors.contains_key("beneficialOwners.1.name"));
    Ok(())
}

#[test]
fn every_error_key_maps_to_a_schema_descriptor() -> Result<()> {
    let mut session = kyc_session()?;
    session.add_row("beneficialOwners")?;
    session.set_value("contactEmail", "broken")?;

    let schema = session.schema().clone();
    for key in session.validate().keys() {
        let reachable = schema.field(key).is_some()
            || schema.table(key).is_some()
            || key.split('.').count() == 3 && {
                let mut parts = key.split('.');
                let table = parts.next().expect("table segment");
                let _index = parts.next();
                let column = parts.next().expect("column segment");
                schema
                    .table(table)
                    .and_then(|t| t.column(column))
                    .is_some()
            };
        assert!(reachable, "error key '{key}' is not reachable from the schema");
    }
    Ok(())
}

#[test]
fn validation_never_fails_on_a_pristine_record() -> Result<()> {
    let registry = DocumentRegistry::new();
    for schema in registry.list() {
        let session = registry.open(&schema.doc_type)?;
        // a fresh record yields findings, not failures
        let errors = session.validate();
        assert!(!errors.is_empty(), "builtins all have required fields");
    }
    Ok(())
}
