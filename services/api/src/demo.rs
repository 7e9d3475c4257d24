use chrono::{Local, NaiveDate};
use clap::Args;
use intake_ai::error::AppError;
use intake_ai::workflows::leadsheet::{LeadsheetImporter, LeadsheetReport};
use intake_ai::workflows::valuation::{
    CaseSubmission, Confidence, DomainRegistry, EstimateView, FieldValue, IntakeWizard,
    ValuationService,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EstimateArgs {
    /// Domain slug to estimate against (run `domains` for the catalog)
    #[arg(long)]
    pub(crate) domain: String,
    /// JSON file holding a case submission's answer map
    #[arg(long, required_unless_present = "leadsheet", conflicts_with = "leadsheet")]
    pub(crate) answers: Option<PathBuf>,
    /// Lead sheet CSV scored row by row against the domain
    #[arg(long)]
    pub(crate) leadsheet: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Domain slug for the intake walkthrough. Defaults to rideshare.
    #[arg(long)]
    pub(crate) domain: Option<String>,
    /// Stamp estimates with this date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) estimated_on: Option<NaiveDate>,
    /// Skip the catalog listing portion of the demo output.
    #[arg(long)]
    pub(crate) skip_catalog: bool,
}

/// The CLI always works over the full catalog; `INTAKE_DOMAINS` only filters
/// what the HTTP server exposes.
fn full_catalog() -> Result<ValuationService, AppError> {
    Ok(ValuationService::new(DomainRegistry::standard()?))
}

pub(crate) fn run_domains() -> Result<(), AppError> {
    let service = full_catalog()?;

    println!("Available case domains");
    for summary in service.domains() {
        println!(
            "- {} ({}): {} intake steps, {} scored fields",
            summary.slug, summary.label, summary.steps, summary.fields
        );
    }

    Ok(())
}

pub(crate) fn run_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let EstimateArgs {
        domain,
        answers,
        leadsheet,
    } = args;

    let service = full_catalog()?;

    if let Some(path) = leadsheet {
        let target = service.domain(&domain)?;
        let report = LeadsheetImporter::from_path(path, target)?;
        render_leadsheet_report(&report);
        return Ok(());
    }

    let Some(path) = answers else {
        println!("Provide --answers <case.json> or --leadsheet <leads.csv> to estimate.");
        return Ok(());
    };

    let raw = std::fs::read_to_string(path)?;
    let submission: CaseSubmission = serde_json::from_str(&raw)?;
    let view = service.estimate(&domain, submission)?;
    println!("{}", serde_json::to_string_pretty(&view)?);

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        domain,
        estimated_on,
        skip_catalog,
    } = args;

    let service = full_catalog()?;
    let estimated_on = estimated_on.unwrap_or_else(|| Local::now().date_naive());
    let slug = domain.unwrap_or_else(|| "rideshare".to_string());

    println!("Case intake valuation demo");

    if !skip_catalog {
        println!("\nAvailable case domains");
        for summary in service.domains() {
            println!(
                "- {} ({}): {} intake steps, {} scored fields",
                summary.slug, summary.label, summary.steps, summary.fields
            );
        }
    }

    let target = service.domain(&slug)?;
    let answers = canned_answers(target.slug);

    println!("\nIntake walkthrough: {}", target.label);
    let mut wizard = IntakeWizard::new(&target.intake);
    while let Some(step) = wizard.current_step() {
        println!("- Step: {}", step.title);
        for field in &step.fields {
            let Some((_, value)) = answers.iter().find(|(name, _)| name == field) else {
                continue;
            };
            match value {
                FieldValue::Amount(amount) => println!("    {field} = {amount}"),
                FieldValue::Choice(choice) => println!("    {field} = {choice}"),
            }
            wizard.record(*field, value.clone());
        }
        if let Err(err) = wizard.advance() {
            println!("  Intake incomplete: {err}");
            return Ok(());
        }
    }

    let profile = match wizard.finalize() {
        Ok(profile) => profile,
        Err(err) => {
            println!("  Intake incomplete: {err}");
            return Ok(());
        }
    };

    let result = target.engine.estimate(&profile);
    let view = EstimateView::from_result(target, result, estimated_on);

    println!("\nEstimated range: ${:.0} - ${:.0}", view.low, view.high);
    if let Some(label) = view.confidence_label {
        println!("Confidence: {label}");
    }
    println!("Factors");
    for factor in &view.factors {
        println!("- {}: {}", factor.field, factor.note);
    }
    println!("\n{}", view.disclaimer);

    println!("\nOne-line estimates across the catalog");
    for summary in service.domains() {
        let submission = CaseSubmission {
            answers: canned_answers(summary.slug)
                .into_iter()
                .map(|(field, value)| (field.to_string(), value))
                .collect(),
            submitted_on: Some(estimated_on),
        };
        let estimate = service.estimate(summary.slug, submission)?;
        println!(
            "- {}: ${:.0} - ${:.0}",
            summary.slug, estimate.low, estimate.high
        );
    }

    Ok(())
}

fn render_leadsheet_report(report: &LeadsheetReport) {
    println!(
        "Scored {} of {} lead rows against '{}'",
        report.scored.len(),
        report.row_count(),
        report.domain
    );
    for lead in &report.scored {
        let confidence = lead
            .estimate
            .confidence
            .map(Confidence::label)
            .unwrap_or("n/a");
        println!(
            "- {}: ${:.0} - ${:.0} (confidence {})",
            lead.lead_ref, lead.estimate.low, lead.estimate.high, confidence
        );
    }

    if !report.skipped.is_empty() {
        println!("Skipped rows");
        for skip in &report.skipped {
            println!("- line {}: {}", skip.line, skip.reason);
        }
    }
}

fn canned_answers(slug: &str) -> Vec<(&'static str, FieldValue)> {
    match slug {
        "rideshare" => vec![
            ("ride_service", FieldValue::choice("uber")),
            ("driver_status", FieldValue::choice("passenger-onboard")),
            ("victim_role", FieldValue::choice("passenger-rideshare")),
            ("accident_type", FieldValue::choice("side-impact")),
            ("injury_severity", FieldValue::choice("serious")),
            ("injury_type", FieldValue::choice("fractures")),
            ("medical_costs", FieldValue::amount(18_500.0)),
            ("driver_background", FieldValue::choice("passed")),
            ("permanent_disability", FieldValue::choice("partial-temporary")),
            ("comparative_fault", FieldValue::choice("0")),
            ("age", FieldValue::choice("18-40")),
        ],
        "talc" => vec![
            ("cancer_type", FieldValue::choice("ovarian-cancer")),
            ("cancer_stage", FieldValue::choice("stage-3")),
            ("exposure_duration", FieldValue::choice("11-20-years")),
            ("usage_frequency", FieldValue::choice("daily")),
            ("product_type", FieldValue::choice("baby-powder")),
            ("age", FieldValue::choice("40-50")),
            ("pathology_evidence", FieldValue::choice("yes")),
            ("medical_costs", FieldValue::amount(85_000.0)),
            ("future_care_costs", FieldValue::amount(40_000.0)),
            ("lost_wages", FieldValue::amount(25_000.0)),
        ],
        "asbestos" => vec![
            ("diagnosis_type", FieldValue::choice("pleural")),
            ("cancer_stage", FieldValue::choice("stage-2")),
            ("exposure_type", FieldValue::choice("occupational")),
            ("exposure_years", FieldValue::amount(18.0)),
            ("age", FieldValue::amount(58.0)),
            ("employment_status", FieldValue::choice("retired")),
            ("medical_costs", FieldValue::amount(150_000.0)),
            ("lost_wages", FieldValue::amount(90_000.0)),
        ],
        "medical-malpractice" => vec![
            ("error_type", FieldValue::choice("surgical-error")),
            ("injury_severity", FieldValue::choice("severe")),
            ("permanent_impact", FieldValue::choice("significant")),
            ("age", FieldValue::choice("under-40")),
            ("life_expectancy", FieldValue::choice("reduced-5-10")),
            ("medical_costs", FieldValue::amount(120_000.0)),
            ("future_medical", FieldValue::amount(200_000.0)),
            ("lost_wages", FieldValue::amount(80_000.0)),
        ],
        "clergy-abuse" => vec![
            ("abuse_period", FieldValue::choice("childhood")),
            ("duration_years", FieldValue::amount(4.0)),
            ("institution", FieldValue::choice("catholic-diocese")),
            ("cover_up_evidence", FieldValue::choice("yes")),
            ("evidence_strength", FieldValue::choice("witness-testimony")),
            ("therapy_costs", FieldValue::amount(15_000.0)),
            ("medical_costs", FieldValue::amount(5_000.0)),
            ("lost_wages", FieldValue::amount(0.0)),
        ],
        _ => Vec::new(),
    }
}
