//! Plan Projection CLI
//!
//! Loads a plan setup blob (JSON, or CSV with one plan per row), runs the
//! requested scenarios and prints the assembled report.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use plan_projection::engagement::format_dollars;
use plan_projection::plan::{load_plan_json, load_plans_csv};
use plan_projection::{
    FeatureConfig, PlanParameters, PlanReport, ProjectionConfig, ReportAssembler, ScenarioId,
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "plan-projection")]
#[command(about = "Retirement plan balance projections and engagement report")]
struct Args {
    /// Plan setup file (.json blob or .csv with one plan per row)
    #[arg(long)]
    plan: PathBuf,

    /// Feature configuration for the Enhanced scenario (.json)
    #[arg(long)]
    features: Option<PathBuf>,

    /// Scenario to project; repeat for several (default: all)
    #[arg(long = "scenario")]
    scenarios: Vec<ScenarioId>,

    /// Projection horizon in years
    #[arg(long, default_value_t = 25)]
    years: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Write to a file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

/// JSON output envelope
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReportDocument<'a> {
    generated_at: DateTime<Utc>,
    reports: &'a [PlanReport],
}

/// One annual record in the CSV export
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AnnualCsvRow {
    plan: usize,
    scenario: &'static str,
    year: u32,
    starting_balance: f64,
    contributions: f64,
    investment_growth: f64,
    fees: f64,
    ending_balance: f64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let plans = load_plans(&args.plan)?;
    info!("loaded {} plan(s) from {}", plans.len(), args.plan.display());

    let assembler = match &args.features {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading feature configuration {}", path.display()))?;
            let features = FeatureConfig::from_json_str(&json)
                .with_context(|| format!("parsing feature configuration {}", path.display()))?;
            ReportAssembler::with_features(features)
        }
        None => ReportAssembler::new(),
    }
    .with_config(ProjectionConfig {
        horizon_years: args.years,
        ..ProjectionConfig::default()
    });

    let scenarios: Vec<ScenarioId> = if args.scenarios.is_empty() {
        ScenarioId::ALL.to_vec()
    } else {
        args.scenarios.clone()
    };

    let reports = plans
        .iter()
        .enumerate()
        .map(|(i, plan)| {
            assembler
                .assemble(plan, &scenarios)
                .with_context(|| format!("assembling report for plan {}", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        OutputFormat::Table => {
            for (i, report) in reports.iter().enumerate() {
                if reports.len() > 1 {
                    writeln!(out, "Plan {}", i + 1)?;
                    writeln!(out, "{}", "=".repeat(40))?;
                }
                write_table(&mut out, report)?;
            }
        }
        OutputFormat::Json => {
            let document = ReportDocument {
                generated_at: Utc::now(),
                reports: &reports,
            };
            serde_json::to_writer_pretty(&mut out, &document)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => write_csv(&mut out, &reports)?,
    }

    out.flush()?;
    if let Some(path) = &args.output {
        println!("Results written to: {}", path.display());
    }
    Ok(())
}

fn load_plans(path: &Path) -> Result<Vec<PlanParameters>> {
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if is_csv {
        load_plans_csv(path).with_context(|| format!("loading plans from {}", path.display()))
    } else {
        let plan = load_plan_json(path).with_context(|| format!("loading plan from {}", path.display()))?;
        Ok(vec![plan])
    }
}

fn write_csv(out: &mut dyn Write, reports: &[PlanReport]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);

    for (i, report) in reports.iter().enumerate() {
        for projection in &report.projections {
            for r in &projection.result.annual {
                writer.serialize(AnnualCsvRow {
                    plan: i + 1,
                    scenario: projection.scenario.key(),
                    year: r.year,
                    starting_balance: r.starting_balance,
                    contributions: r.contributions,
                    investment_growth: r.investment_growth,
                    fees: r.fees,
                    ending_balance: r.ending_balance,
                })?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

fn write_table(out: &mut dyn Write, report: &PlanReport) -> Result<()> {
    let cards = &report.summary_cards;
    writeln!(out, "Balance Projections ({} years)", cards.horizon_years)?;
    writeln!(out, "  Starting Balance: ${}", format_dollars(cards.starting_balance))?;
    for b in &cards.final_balances {
        writeln!(out, "  {:<28} ${:>14}", b.scenario.label(), format_dollars(b.balance))?;
    }
    if let Some(best) = &cards.best_case {
        writeln!(
            out,
            "  Best case: {} (+${})",
            best.scenario.label(),
            format_dollars(best.balance)
        )?;
    }
    writeln!(out, "  Estimated total fees: {:.2}% of assets", report.estimated_total_fee_pct)?;
    writeln!(out)?;

    // Five-year comparison table
    write!(out, "{:>5}", "Year")?;
    for p in &report.projections {
        write!(out, " {:>16}", p.scenario.key())?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(5 + 17 * report.projections.len()))?;
    for row in &report.comparison_table {
        write!(out, "{:>5}", row.year)?;
        for cell in &row.cells {
            write!(out, " {:>16}", format_dollars(cell.balance))?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    let e = &report.engagement;
    writeln!(out, "Engagement")?;
    writeln!(
        out,
        "  {:<14} {:>14} {:>14} {:>14} {:>10}",
        "", "Participation", "Contribution", "Match Util.", "Readiness"
    )?;
    for (label, s) in [("Current", &e.current), ("Auto-Enroll", &e.auto_enroll), ("Enhanced", &e.enhanced)] {
        writeln!(
            out,
            "  {:<14} {:>13.1}% {:>13.1}% {:>13.1}% {:>10}",
            label, s.participation_pct, s.avg_contribution_pct, s.match_utilization_pct, s.readiness_score
        )?;
    }
    writeln!(out)?;

    let card = &report.report_card;
    writeln!(out, "Report Card: {}/100 ({})", card.overall_grade, card.rating_label)?;
    writeln!(out, "  {}", card.rating_description)?;
    for gap in &report.gaps {
        writeln!(
            out,
            "  {:<24} {:>7.1} vs {:>5.1}  {:>+7.1}  {}",
            gap.metric.label(),
            gap.current,
            gap.target,
            gap.gap,
            gap.severity.label()
        )?;
    }
    writeln!(out)?;

    if !report.priority_improvements.is_empty() {
        writeln!(out, "Priority Improvements")?;
        for p in &report.priority_improvements {
            writeln!(out, "  [{}] {}: {}", p.urgency.label(), p.metric.label(), p.impact)?;
            writeln!(out, "    {}", p.action_plan)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "Recommendations")?;
    for r in &report.recommendations {
        writeln!(out, "  {}. {} ({} impact)", r.priority, r.title, r.impact.label())?;
        writeln!(out, "     {}", r.description)?;
    }

    if !report.plan_assets.insights.is_empty() {
        writeln!(out)?;
        writeln!(out, "Plan Asset Insights")?;
        for insight in &report.plan_assets.insights {
            writeln!(out, "  {}", insight.title)?;
            writeln!(out, "     {}", insight.description)?;
        }
    }
    writeln!(out)?;

    Ok(())
}
