use anyhow::Context;
use clap::{Parser, Subcommand};
use qr_payload::tools::{init_logging, read_scan_file, summarize, symbology_table};
use qr_payload::{Interpretation, Interpreter, Payload, PayloadKind, ScanResult, classify};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "Classify and parse decoded QR payloads")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the payload kind of a decoded text
    Classify {
        #[arg(long)]
        text: String,
        #[arg(long, default_value = "QR_CODE")]
        format: String,
    },
    /// Show kind, display string, fields and actions of a decoded text
    Inspect {
        #[arg(long)]
        text: String,
        #[arg(long, default_value = "QR_CODE")]
        format: String,
        #[arg(long)]
        json: bool,
    },
    /// Interpret every FORMAT<TAB>TEXT line of a file
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// List known symbology tags and their display names
    Formats,
}

#[derive(Serialize)]
struct Report<'a> {
    label: &'static str,
    #[serde(flatten)]
    interpretation: &'a Interpretation,
    actions: Vec<qr_payload::Action>,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Classify { text, format } => {
            let scan = ScanResult::new(text, &format);
            println!("{:?}", classify(&scan.text, &scan.format));
            Ok(())
        }
        Command::Inspect { text, format, json } => inspect_cmd(ScanResult::new(text, &format), json),
        Command::Batch { input, json } => batch_cmd(&input, json),
        Command::Formats => {
            for (tag, name) in symbology_table() {
                println!("{:<14} {}", tag, name);
            }
            Ok(())
        }
    }
}

fn inspect_cmd(scan: ScanResult, json: bool) -> anyhow::Result<()> {
    let interpreter = Interpreter::new();
    let interpretation = interpreter.interpret(&scan);
    let report = Report {
        label: interpretation.kind.label(),
        interpretation: &interpretation,
        actions: interpreter.actions(&interpretation),
    };

    if json {
        let out = serde_json::to_string_pretty(&report).context("serializing report")?;
        println!("{out}");
        return Ok(());
    }

    println!("Format:  {} ({})", scan.format.display_name(), scan.format);
    println!("Kind:    {:?} [{}]", interpretation.kind, report.label);
    println!("Display: {}", interpretation.display);
    print_fields(&interpretation.payload);
    for action in &report.actions {
        println!("Action:  {}", serde_json::to_string(action)?);
    }
    Ok(())
}

fn print_fields(payload: &Payload) {
    let fields: Vec<(&str, String)> = match payload {
        Payload::None => Vec::new(),
        Payload::Sms(sms) => vec![("number", sms.number.clone()), ("body", sms.body.clone())],
        Payload::Tel(number) => vec![("number", number.clone())],
        Payload::Mail(mail) => ["address", "subject", "body"]
            .into_iter()
            .zip(mail.fields().map(str::to_string))
            .collect(),
        Payload::Geo(geo) => geo
            .components()
            .iter()
            .map(|c| ("component", c.clone()))
            .collect(),
        Payload::Wifi(wifi) => ["security", "ssid", "password"]
            .into_iter()
            .zip(wifi.fields().map(str::to_string))
            .collect(),
        Payload::Contact(contact) => contact
            .populated()
            .into_iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect(),
    };
    for (name, value) in fields {
        println!("  {:<15} {}", name, value);
    }
}

fn batch_cmd(input: &Path, json: bool) -> anyhow::Result<()> {
    let scans = read_scan_file(input)?;
    if scans.is_empty() {
        println!("No scans found in {}", input.display());
        return Ok(());
    }

    let interpreter = Interpreter::new();
    let start = Instant::now();
    let results = interpreter.interpret_batch(&scans);
    let elapsed = start.elapsed();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        println!("  [{}] {:?} -> {}", i + 1, result.kind, result.display);
    }

    let summary = summarize(&results);
    println!("\n=====================================");
    for kind in PayloadKind::ALL {
        let count = summary.counts.get(&kind).copied().unwrap_or(0);
        if count > 0 {
            println!(
                "{:<12} {:>5} ({:.1}%)",
                kind.label(),
                count,
                summary.ratio(kind) * 100.0
            );
        }
    }
    println!("Total: {} scans in {:.2?}", summary.total, elapsed);
    println!("=====================================");
    Ok(())
}
