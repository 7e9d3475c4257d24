use super::common::*;

use chrono::{Local, NaiveDate};

use crate::workflows::valuation::domains::{DomainConfigError, DomainRegistry};
use crate::workflows::valuation::intake::CaseSubmission;
use crate::workflows::valuation::policy::Confidence;
use crate::workflows::valuation::profile::FieldValue;
use crate::workflows::valuation::service::ValuationServiceError;

#[test]
fn standard_catalog_lists_domains_in_slug_order() {
    let service = standard_service();

    let catalog = service.domains();

    let slugs: Vec<&str> = catalog.iter().map(|view| view.slug).collect();
    assert_eq!(
        slugs,
        vec![
            "asbestos",
            "clergy-abuse",
            "medical-malpractice",
            "rideshare",
            "talc"
        ]
    );
    assert!(catalog.iter().all(|view| view.steps > 0 && view.fields > 1));
}

#[test]
fn estimate_stamps_the_submission_date() {
    let service = standard_service();
    let submission = CaseSubmission {
        answers: answers(&[("injury_severity", FieldValue::choice("minor"))]),
        submitted_on: NaiveDate::from_ymd_opt(2025, 6, 1),
    };

    let view = service
        .estimate("rideshare", submission)
        .expect("estimate succeeds");

    assert_eq!(view.domain, "rideshare");
    assert_eq!(
        view.estimated_on,
        NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid date")
    );
    assert_eq!(view.low, 50_000.0);
    assert_eq!(view.high, 150_000.0);
}

#[test]
fn estimate_defaults_the_stamp_to_today() {
    let service = standard_service();
    let submission = CaseSubmission {
        answers: answers(&[]),
        submitted_on: None,
    };

    let before = Local::now().date_naive();
    let view = service
        .estimate("rideshare", submission)
        .expect("estimate succeeds");
    let after = Local::now().date_naive();

    assert!(view.estimated_on == before || view.estimated_on == after);
}

#[test]
fn unknown_domains_are_rejected() {
    let service = standard_service();
    let submission = CaseSubmission {
        answers: answers(&[]),
        submitted_on: None,
    };

    let error = service
        .estimate("maritime", submission)
        .expect_err("unknown domain");

    match error {
        ValuationServiceError::UnknownDomain(slug) => assert_eq!(slug, "maritime"),
    }
}

#[test]
fn non_economic_caps_bind_in_the_malpractice_domain() {
    let service = standard_service();
    let submission = CaseSubmission {
        answers: answers(&[
            ("error_type", FieldValue::choice("birth-injury")),
            ("injury_severity", FieldValue::choice("catastrophic")),
            ("future_medical", FieldValue::amount(200_000.0)),
        ]),
        submitted_on: None,
    };

    let view = service
        .estimate("medical-malpractice", submission)
        .expect("estimate succeeds");

    // General damages clamp to the 430k statutory cap on both bounds; the
    // projected medical costs ride on top uncapped.
    assert_eq!(view.low, 730_000.0);
    assert_eq!(view.high, 1_030_000.0);
}

#[test]
fn confidence_tracks_evidence_strength() {
    let service = standard_service();
    let estimate = |entries: &[(&str, FieldValue)]| {
        service
            .estimate(
                "clergy-abuse",
                CaseSubmission {
                    answers: answers(entries),
                    submitted_on: None,
                },
            )
            .expect("estimate succeeds")
    };

    let weak = estimate(&[("evidence_strength", FieldValue::choice("weak"))]);
    assert_eq!(weak.confidence, Some(Confidence::Low));

    let witnessed = estimate(&[(
        "evidence_strength",
        FieldValue::choice("witness-testimony"),
    )]);
    assert_eq!(witnessed.confidence, Some(Confidence::Medium));
    assert_eq!(witnessed.confidence_label, Some("medium"));

    let corroborated = estimate(&[
        (
            "evidence_strength",
            FieldValue::choice("strong-corroboration"),
        ),
        ("cover_up_evidence", FieldValue::choice("yes")),
    ]);
    assert_eq!(corroborated.confidence, Some(Confidence::High));
}

#[test]
fn domains_without_confidence_policies_omit_the_bucket() {
    let service = standard_service();
    let submission = CaseSubmission {
        answers: answers(&[("injury_severity", FieldValue::choice("serious"))]),
        submitted_on: None,
    };

    let view = service
        .estimate("rideshare", submission)
        .expect("estimate succeeds");

    assert!(view.confidence.is_none());
    assert!(view.confidence_label.is_none());
}

#[test]
fn registry_rejects_duplicate_slugs() {
    let registry = DomainRegistry::standard().expect("valid catalog");
    let talc = registry.get("talc").expect("talc domain").clone();
    let duplicate = talc.clone();

    match DomainRegistry::from_domains(vec![talc, duplicate]) {
        Err(DomainConfigError::DuplicateSlug { slug: "talc" }) => {}
        other => panic!("expected duplicate slug error, got {other:?}"),
    }
}
