use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use serde_json::Value;

use redline_audit::{validate_stream, AuditEntry, InMemoryAuditLog, ValidationReport};
use redline_session::{EditorSession, SessionConfig};
use redline_store::InMemoryRecordStore;
use redline_types::{FieldName, Proposal, Record};

use crate::cli::{Cli, Command, OutputFormat};
use crate::script::{to_field_edit, ScriptEvent, SessionScript};

type ReplaySession = EditorSession<InMemoryRecordStore, InMemoryAuditLog>;

pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Replay(args) => {
            let session = replay_script(&args.script)?;
            print_record(session.record(), &cli.format)
        }
        Command::History(args) => {
            let session = replay_script(&args.script)?;
            let mut history = session.history()?;
            if let Some(limit) = args.limit {
                history.truncate(limit);
            }
            print_history(&history, &cli.format)
        }
        Command::Verify(args) => {
            let session = replay_script(&args.script)?;
            let report = validate_stream(session.audit().writer(), session.id())?;
            print_report(&report, &cli.format)
        }
    }
}

fn replay_script(path: &Path) -> Result<ReplaySession> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading session script {}", path.display()))?;
    let script: SessionScript = serde_json::from_str(&text)
        .with_context(|| format!("parsing session script {}", path.display()))?;
    execute(script)
}

/// Drive a fresh in-memory session through the scripted event stream, in
/// order, the way a host event loop would.
fn execute(script: SessionScript) -> Result<ReplaySession> {
    let config = script.config.unwrap_or_else(SessionConfig::default);
    let mut session = EditorSession::open(
        Record::new(redline_types::RecordId::new()),
        &config,
        InMemoryRecordStore::new(),
        InMemoryAuditLog::new(),
    );

    for event in script.events {
        apply_event(&mut session, event)?;
    }
    Ok(session)
}

fn apply_event(session: &mut ReplaySession, event: ScriptEvent) -> Result<()> {
    match event {
        ScriptEvent::Focus { field } => session.focus(field),
        ScriptEvent::Blur { field } => session.blur(field),
        ScriptEvent::Edit { field, value } => {
            session.edit(to_field_edit(field, &value)?);
        }
        ScriptEvent::Propose { fields } => {
            session.apply_proposal(&Proposal::from_value(&fields));
        }
        ScriptEvent::Commit { actor } => {
            let actor = redline_types::ActorId::new(&actor)?;
            session.commit(&actor)?;
        }
        ScriptEvent::Finalize { signature } => {
            session.finalize(&signature)?;
        }
    }
    Ok(())
}

fn print_record(record: &Record, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Text => {
            println!(
                "{} {}  {}",
                "record".bold(),
                record.id,
                record.status.to_string().cyan()
            );
            for field in FieldName::CONTENT {
                // Pad before coloring; ANSI escapes confuse width formatting.
                println!(
                    "  {}  {}",
                    format!("{:>14}", field).bold(),
                    render(&record.field_value(field))
                );
            }
        }
    }
    Ok(())
}

fn print_history(history: &[AuditEntry], format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(history)?);
        }
        OutputFormat::Text => {
            if history.is_empty() {
                println!("no audit entries");
                return Ok(());
            }
            for entry in history {
                println!(
                    "{} {}  {}  {}",
                    "#".bold(),
                    entry.seq,
                    entry.timestamp.format("%Y-%m-%d %H:%M:%S%.3f"),
                    entry.actor.to_string().cyan()
                );
                for (field, change) in entry.changes.iter() {
                    println!(
                        "  {}  {} {} {}",
                        format!("{:>14}", field).bold(),
                        render(&change.old).red(),
                        "->".dimmed(),
                        render(&change.new).green()
                    );
                }
            }
        }
    }
    Ok(())
}

fn print_report(report: &ValidationReport, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Text => {
            if report.is_valid() {
                println!(
                    "{}: {} entries, stream intact",
                    "ok".green().bold(),
                    report.entry_count
                );
            } else {
                println!(
                    "{}: {} violations in {} entries",
                    "invalid".red().bold(),
                    report.violations.len(),
                    report.entry_count
                );
                for violation in &report.violations {
                    println!("  seq {}: {}", violation.seq, violation.description);
                }
            }
        }
    }
    Ok(())
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(text) if text.is_empty() => "\"\"".to_string(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
