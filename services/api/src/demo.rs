use crate::infra::open_output;
use chrono::{Duration, Local, NaiveDate};
use clap::{Args, ValueEnum};
use foreclosure_leads::config::AppConfig;
use foreclosure_leads::error::AppError;
use foreclosure_leads::workflows::court_import::CourtCsvSource;
use foreclosure_leads::workflows::leads::report::views::{grade_breakdown, ranked_leads};
use foreclosure_leads::workflows::leads::{
    write_csv, Clock, FixedClock, InMemorySource, LeadDocument, LeadScoringService,
    PipelineConfig, RawCase, RawDocketRow, SystemClock,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Case listing CSV (Case Number, Commenced, Plaintiff, Defendant, Judgment, Status, Address)
    #[arg(long)]
    pub(crate) cases: PathBuf,
    /// Docket CSV (Case Number, Date, Description)
    #[arg(long)]
    pub(crate) dockets: Option<PathBuf>,
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Output format for the scored collection
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub(crate) format: OutputFormat,
    /// Write to this path instead of stdout
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Evaluation date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Number of ranked leads to list
    #[arg(long, default_value_t = 10)]
    pub(crate) limit: usize,
    /// Print the full lead document as JSON after the summary
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        cases,
        dockets,
        today,
        format,
        output,
    } = args;

    let config = AppConfig::load()?;
    let source = CourtCsvSource::from_paths(&cases, dockets.as_ref())?;
    let service = LeadScoringService::new(config.pipeline);
    let clock: Box<dyn Clock> = match today {
        Some(today) => Box::new(FixedClock::on(today)),
        None => Box::new(SystemClock),
    };
    let document = service.score_from(source.cases(), &source, clock.as_ref())?;

    let mut writer = open_output(output.as_deref())?;
    match format {
        OutputFormat::Json => {
            document.write_json(&mut writer)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => write_csv(&mut writer, &document.cases)?,
    }
    writer.flush()?;
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, limit, json } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let document = score_sample(today)?;
    render_summary(&document, today, limit);

    if json {
        println!("\n{}", document.to_json_pretty()?);
    }
    Ok(())
}

fn score_sample(today: NaiveDate) -> Result<LeadDocument, AppError> {
    let (cases, source) = sample_portfolio(today);
    let service = LeadScoringService::new(PipelineConfig::default());
    Ok(service.score_from(&cases, &source, &FixedClock::on(today))?)
}

fn render_summary(document: &LeadDocument, today: NaiveDate, limit: usize) {
    let stats = &document.statistics;

    println!("Foreclosure lead demo ({today})");
    println!(
        "- {} input records | {} ranked | {} filtered out",
        stats.filtered.input_records,
        stats.total_cases,
        stats.filtered.removed()
    );
    println!(
        "  ({} closed, {} judgment entered, {} outside age window, {} invalid)",
        stats.filtered.not_open,
        stats.filtered.judgment_entered,
        stats.filtered.outside_age_window,
        stats.filtered.invalid_records
    );
    println!(
        "- {} with address | {} in target county | {} with docket | {} docket unavailable",
        stats.with_address, stats.in_target_county, stats.with_docket, stats.missing_docket
    );
    if let Some(average) = stats.average_score {
        println!("- average score {average:.1}");
    }

    println!("Grade mix:");
    for entry in grade_breakdown(stats) {
        println!("  - {}: {}", entry.grade_label, entry.count);
    }

    println!("\nRanked leads:");
    for lead in ranked_leads(&document.cases, limit) {
        let city = if lead.city.is_empty() {
            "unknown city"
        } else {
            lead.city.as_str()
        };
        println!(
            "{:>2}. [{}] {:>3} {} - {} ({}, {} days open)",
            lead.rank,
            lead.grade_label,
            lead.score,
            lead.case_number,
            lead.defendant,
            city,
            lead.days_open
        );
        if let Some(factor) = lead.strongest_factor {
            println!("      strongest factor: {factor}");
        }
    }
}

struct SampleCase {
    case_number: &'static str,
    days_open: i64,
    defendant: &'static str,
    status: &'static str,
    judged: bool,
    address: Option<&'static str>,
    /// `(days before today, description)`; empty leaves the docket unavailable.
    docket: &'static [(i64, &'static str)],
}

const SAMPLE_CASES: &[SampleCase] = &[
    SampleCase {
        case_number: "2024-CV-1101",
        days_open: 262,
        defendant: "MARGARET HOLLOWAY",
        status: "OPEN",
        judged: false,
        address: Some("114 LINDEN AVE\nNORRISTOWN, PA 19401"),
        docket: &[
            (262, "COMPLAINT IN MORTGAGE FORECLOSURE"),
            (230, "AFFIDAVIT OF SERVICE - NOT FOUND"),
            (214, "MOTION FOR ALTERNATIVE SERVICE"),
            (190, "CONCILIATION CONFERENCE SCHEDULED"),
            (176, "CONTINUANCE GRANTED"),
            (160, "CONTINUANCE GRANTED"),
            (141, "ORDER - CONTINUANCE GRANTED"),
            (128, "PRAECIPE TO WITHDRAW AS COUNSEL FOR DEFENDANT"),
            (104, "NOTICE OF INTENTION TO TAKE DEFAULT JUDGMENT"),
        ],
    },
    SampleCase {
        case_number: "2025-CV-0233",
        days_open: 150,
        defendant: "ROBERT KESSLER",
        status: "OPEN",
        judged: false,
        address: Some("2207 BUTLER PIKE PLYMOUTH MEETING PA 19462"),
        docket: &[
            (150, "COMPLAINT IN MORTGAGE FORECLOSURE"),
            (121, "ANSWER WITH NEW MATTER"),
            (97, "PRELIMINARY OBJECTIONS FILED BY DEFENDANT"),
            (66, "REPLY TO NEW MATTER"),
            (9, "MOTION FOR SUMMARY JUDGMENT FILED BY DEFENDANT"),
        ],
    },
    SampleCase {
        case_number: "2025-CV-0410",
        days_open: 205,
        defendant: "NORTHSIDE HOLDINGS LLC",
        status: "OPEN",
        judged: false,
        address: Some("88 CHURCH RD\nLANSDALE, PA 19446"),
        docket: &[
            (205, "COMPLAINT IN MORTGAGE FORECLOSURE"),
            (160, "ANSWER TO COMPLAINT"),
            (40, "SUGGESTION OF BANKRUPTCY"),
        ],
    },
    SampleCase {
        case_number: "2025-CV-0502",
        days_open: 96,
        defendant: "DENISE PARKER",
        status: "OPEN",
        judged: false,
        address: Some("UNKNOWN"),
        docket: &[
            (96, "COMPLAINT IN MORTGAGE FORECLOSURE"),
            (70, "CONCILIATION CONFERENCE - DEFENDANT NO SHOW"),
            (31, "STIPULATION OF SETTLEMENT"),
        ],
    },
    SampleCase {
        case_number: "2025-CV-0610",
        days_open: 74,
        defendant: "THOMAS REILLY",
        status: "OPEN",
        judged: false,
        address: Some("45 MAPLE ST AMBLER PA 19002"),
        docket: &[],
    },
    SampleCase {
        case_number: "2025-CV-0077",
        days_open: 180,
        defendant: "CARLA MENDES",
        status: "OPEN",
        judged: true,
        address: Some("9 RIVER RD\nNORTH WALES, PA 19454"),
        docket: &[(180, "COMPLAINT IN MORTGAGE FORECLOSURE")],
    },
    SampleCase {
        case_number: "2023-CV-9001",
        days_open: 610,
        defendant: "PETER NOLAN",
        status: "CLOSED",
        judged: false,
        address: None,
        docket: &[],
    },
];

fn court_date(today: NaiveDate, days_before: i64) -> String {
    (today - Duration::days(days_before))
        .format("%m/%d/%Y")
        .to_string()
}

fn sample_portfolio(today: NaiveDate) -> (Vec<RawCase>, InMemorySource) {
    let mut source = InMemorySource::new();
    let cases = SAMPLE_CASES
        .iter()
        .map(|sample| {
            if !sample.docket.is_empty() {
                let rows = sample
                    .docket
                    .iter()
                    .map(|(days_before, description)| {
                        RawDocketRow::new(court_date(today, *days_before), *description)
                    })
                    .collect();
                source.insert_docket(sample.case_number, rows);
            }

            RawCase {
                case_number: sample.case_number.to_string(),
                commenced: court_date(today, sample.days_open),
                plaintiff: "FIRST KEYSTONE MORTGAGE".to_string(),
                defendant: sample.defendant.to_string(),
                has_judgement: sample.judged,
                status: sample.status.to_string(),
                address: sample.address.map(str::to_string),
            }
        })
        .collect();

    (cases, source)
}
