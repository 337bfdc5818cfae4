//! Subcommand execution
//!
//! Commands run against an open [`Dashboard`] and write to any `Write`
//! sink, so they can be driven from tests as well as from `main`.

use crate::config::RosterConfig;
use crate::render::{BreakdownLines, RecordsTable, StackedChart, SummaryCards, ViewPage};
use anyhow::Context as _;
use roster_core::{
    chart, coerce_count, editor, largest_need, stacked_bars, RecordDraft, RosterError, ViewKind,
};
use roster_report::{GeminiClient, ReportRequester};
use roster_store::{Confirm, Confirmation, Dashboard, StorageSlot};
use serde_json::json;
use std::io::Write;

/// A parsed subcommand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Category table
    List,
    /// Headline statistics
    Summary,
    /// Staff-mix buckets
    Breakdown,
    /// Stacked bars, optionally only the first `top`
    Chart {
        /// Bar limit
        top: Option<usize>,
    },
    /// Render one dashboard page
    View(ViewKind),
    /// Add a category from raw form values
    Add {
        /// Category name
        name: String,
        /// Raw occupied count
        occupied: Option<String>,
        /// Raw vacant count
        vacant: Option<String>,
        /// Display color
        color: Option<String>,
    },
    /// Edit a category; unspecified fields keep their current values
    Update {
        /// Name of the record to replace
        original: String,
        /// New name
        name: Option<String>,
        /// Raw occupied count
        occupied: Option<String>,
        /// Raw vacant count
        vacant: Option<String>,
        /// Display color
        color: Option<String>,
    },
    /// Delete a category
    Remove {
        /// Category name
        name: String,
    },
    /// Restore the default roster
    Reset,
    /// Request the AI strategic report
    Report,
}

/// Per-invocation settings
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Loaded configuration
    pub config: RosterConfig,
    /// Emit JSON instead of text
    pub json: bool,
}

/// Run one command
///
/// # Errors
/// Edit failures (`RosterError`), output failures, or a client that
/// cannot be constructed
pub async fn execute<S, W>(
    dashboard: &mut Dashboard<S>,
    command: Command,
    ctx: &Context,
    confirm: &dyn Confirm,
    out: &mut W,
) -> anyhow::Result<()>
where
    S: StorageSlot,
    W: Write,
{
    tracing::debug!(?command, "executing");

    match command {
        Command::List => {
            if ctx.json {
                writeln!(out, "{}", serde_json::to_string_pretty(dashboard.records())?)?;
            } else {
                write!(out, "{}", RecordsTable(dashboard.records()))?;
            }
        }
        Command::Summary => {
            let summary = dashboard.summary();
            let largest = largest_need(dashboard.records());
            if ctx.json {
                let value = json!({ "summary": summary, "largestNeed": largest });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                write!(out, "{}", SummaryCards { summary, largest_need: largest })?;
            }
        }
        Command::Breakdown => {
            let breakdown = dashboard.breakdown();
            if ctx.json {
                let value = json!({ "breakdown": breakdown, "slices": breakdown.slices() });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                write!(out, "{}", BreakdownLines(breakdown))?;
            }
        }
        Command::Chart { top } => {
            let bars = match top {
                Some(limit) => chart::top_bars(dashboard.records(), limit),
                None => stacked_bars(dashboard.records()),
            };
            if ctx.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&bars)?)?;
            } else {
                write!(out, "{}", StackedChart(&bars))?;
            }
        }
        Command::View(view) => {
            dashboard.set_view(view);
            if ctx.json {
                let value = json!({
                    "view": view,
                    "title": view.title(),
                    "records": dashboard.records(),
                    "summary": dashboard.summary(),
                    "breakdown": dashboard.breakdown(),
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                let page = ViewPage {
                    view,
                    records: dashboard.records(),
                    summary: dashboard.summary(),
                    breakdown: dashboard.breakdown(),
                    metadata: &ctx.config.metadata,
                };
                write!(out, "{page}")?;
            }
        }
        Command::Add {
            name,
            occupied,
            vacant,
            color,
        } => {
            let mut draft = RecordDraft::from_form(name.clone(), occupied.as_deref(), vacant.as_deref());
            draft.color = color;
            dashboard.add(draft)?;
            report_edit(out, &format!("added {name}"), dashboard)?;
        }
        Command::Update {
            original,
            name,
            occupied,
            vacant,
            color,
        } => {
            let current = editor::find(dashboard.records(), &original)
                .ok_or_else(|| RosterError::NotFound(original.clone()))?;
            let mut draft = RecordDraft::from(current);
            if let Some(name) = name {
                draft.name = name;
            }
            if let Some(raw) = occupied {
                draft.occupied = coerce_count(&raw);
            }
            if let Some(raw) = vacant {
                draft.vacant = coerce_count(&raw);
            }
            if color.is_some() {
                draft.color = color;
            }
            dashboard.update(&original, draft)?;
            report_edit(out, &format!("updated {original}"), dashboard)?;
        }
        Command::Remove { name } => match dashboard.remove(&name, confirm)? {
            Confirmation::Applied => report_edit(out, &format!("removed {name}"), dashboard)?,
            Confirmation::Declined => writeln!(out, "cancelled")?,
        },
        Command::Reset => match dashboard.reset(confirm)? {
            Confirmation::Applied => report_edit(out, "restored default roster", dashboard)?,
            Confirmation::Declined => writeln!(out, "cancelled")?,
        },
        Command::Report => {
            let api_key = ctx.config.resolve_api_key();
            if api_key.is_none() {
                tracing::warn!(
                    var = %ctx.config.report.api_key_env,
                    "no API key in environment"
                );
            }
            let client = GeminiClient::new(ctx.config.gemini_config(api_key))
                .context("building report client")?;
            let requester = ReportRequester::new(client).with_metadata(ctx.config.metadata.clone());

            let text = requester
                .request_report(dashboard.records(), &dashboard.summary())
                .await?;
            let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();

            if ctx.json {
                let value = json!({ "generatedAt": generated_at, "report": text });
                writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
            } else {
                let meta = &ctx.config.metadata;
                writeln!(out, "{} | {}", meta.hospital, generated_at)?;
                writeln!(out, "{} ({})", meta.author, meta.role)?;
                writeln!(out)?;
                writeln!(out, "{text}")?;
            }
        }
    }

    Ok(())
}

fn report_edit<S: StorageSlot, W: Write>(
    out: &mut W,
    message: &str,
    dashboard: &Dashboard<S>,
) -> std::io::Result<()> {
    let s = dashboard.summary();
    writeln!(
        out,
        "{message}: {} positions, {} vacant ({}%)",
        s.total_positions, s.total_vacant, s.vacancy_rate
    )
}
