use intake_ai::workflows::leadsheet::{LeadsheetImportError, LeadsheetImporter};
use intake_ai::workflows::valuation::{CaseDomain, DomainRegistry};

fn domain(slug: &str) -> CaseDomain {
    let registry = DomainRegistry::standard().expect("valid catalog");
    registry.get(slug).expect("authored domain").clone()
}

#[test]
fn importer_scores_a_marketing_export() {
    let csv = "lead_ref,injury_severity,medical_costs,campaign\n\
L-100,serious,10000,march-radio\n\
L-101,Minor , ,march-radio\n\
L-102,severe,25000,march-tv\n";

    let report = LeadsheetImporter::from_reader(csv.as_bytes(), &domain("rideshare"))
        .expect("import succeeds");

    assert_eq!(report.domain, "rideshare");
    assert_eq!(report.row_count(), 3);
    assert!(report.skipped.is_empty());

    let first = &report.scored[0];
    assert_eq!(first.lead_ref, "L-100");
    assert_eq!(first.estimate.low, 135_000.0);
    assert_eq!(first.estimate.high, 395_000.0);

    // Ragged marketing cells normalize to the authored option slugs.
    let second = &report.scored[1];
    assert_eq!(second.estimate.low, 50_000.0);
    assert_eq!(second.estimate.high, 150_000.0);

    let third = &report.scored[2];
    assert_eq!(third.estimate.low, 225_000.0);
    assert_eq!(third.estimate.high, 650_000.0);
}

#[test]
fn mixed_quality_rows_are_reported_not_fatal() {
    let csv = "lead_ref,injury_severity,medical_costs\n\
L-200,serious,10000\n\
,minor,\n\
L-200,severe,\n\
L-201,minor,unknown\n";

    let report = LeadsheetImporter::from_reader(csv.as_bytes(), &domain("rideshare"))
        .expect("import succeeds");

    assert_eq!(report.scored.len(), 1);
    assert_eq!(report.scored[0].lead_ref, "L-200");
    assert_eq!(report.row_count(), 4);

    let lines: Vec<u64> = report.skipped.iter().map(|skip| skip.line).collect();
    assert_eq!(lines, vec![3, 4, 5]);
    assert!(report.skipped[0].reason.contains("no lead_ref"));
    assert!(report.skipped[1].reason.contains("duplicate"));
    assert!(report.skipped[2].reason.contains("medical_costs"));
}

#[test]
fn numeric_band_columns_parse_as_amounts() {
    let csv = "lead_ref,diagnosis_type,exposure_years\nL-300,pleural,18\n";

    let report = LeadsheetImporter::from_reader(csv.as_bytes(), &domain("asbestos"))
        .expect("import succeeds");

    assert_eq!(report.scored.len(), 1);
    let estimate = &report.scored[0].estimate;
    assert_eq!(estimate.low, 960_000.0);
    assert_eq!(estimate.high, 2_400_000.0);
    assert!(estimate
        .factors
        .iter()
        .any(|factor| factor.field == "exposure_years"));
}

#[test]
fn missing_lead_column_aborts_the_import() {
    let csv = "reference,injury_severity\nL-400,minor\n";

    let error = LeadsheetImporter::from_reader(csv.as_bytes(), &domain("rideshare"))
        .expect_err("expected missing column error");

    match error {
        LeadsheetImportError::MissingLeadColumn => {}
        other => panic!("expected missing column error, got {other:?}"),
    }
}
