mod bootstrap;

use std::{
    borrow::Cow,
    env, fs,
    path::{Path, PathBuf},
    process,
};

use bootstrap::{AppConfig, init_logging};
use splitbill_application::{BillSession, SessionStore, SummaryRenderer};
use splitbill_domain::SettlementContext;
use splitbill_i18n as i18n;
use splitbill_infrastructure::{JsonFileStore, PngSummaryRenderer, svg_to_png};
use splitbill_presentation::{
    SettlementPresenter, email_drafts, format_snapshot_error, summary_lines,
};

type CliResult<T> = Result<T, Cow<'static, str>>;

const USAGE: &str = "Usage: splitbill <summary|emails|export|tables|reset> <session.json> [output]";
const DEFAULT_TABLES_PATH: &str = "split_bill_tables.png";

enum Command {
    Summary,
    Emails,
    Export(Option<PathBuf>),
    Tables(Option<PathBuf>),
    Reset,
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (command, session_path) = parse_args(&args)?;
    let config = AppConfig::from_env().map_err(|err| err.to_string())?;

    let store = JsonFileStore::new(session_path);

    match command {
        Command::Reset => {
            reset_session(&store, config.settlement_context())?;
            println!("Session cleared: {}", store.path().display());
            Ok(())
        }
        Command::Summary => print_summary(&load_session(&store, &config)?),
        Command::Emails => print_emails(&load_session(&store, &config)?),
        Command::Export(output) => {
            let session = load_session(&store, &config)?;
            let output = output.unwrap_or(config.export_path);
            let lines = summary_lines(&session, &session.all_totals());
            let png = PngSummaryRenderer
                .render(&lines)
                .map_err(|err| err.to_string())?;
            write_output(&output, &png)
        }
        Command::Tables(output) => {
            let session = load_session(&store, &config)?;
            let output = output.unwrap_or_else(|| PathBuf::from(DEFAULT_TABLES_PATH));
            let view = SettlementPresenter::render(&session);
            let svg = view
                .combined_svg()
                .ok_or("Failed to combine settlement tables")?;
            let png = svg_to_png(&svg).map_err(|err| err.to_string())?;
            write_output(&output, &png)
        }
    }
}

fn load_session(store: &JsonFileStore, config: &AppConfig) -> CliResult<BillSession> {
    let snapshot = store.load().map_err(|err| err.to_string())?;
    let session = BillSession::from_snapshot(&snapshot, config.settlement_context())
        .map_err(|err| format_snapshot_error(&err))?;
    tracing::info!(path = %store.path().display(), "Session loaded");
    Ok(session)
}

/// Overwrites the stored session with an empty one without reading it first.
fn reset_session(store: &impl SessionStore, context: SettlementContext) -> CliResult<()> {
    store
        .save(&BillSession::with_context(context).snapshot())
        .map_err(|err| err.to_string().into())
}

fn parse_args(args: &[String]) -> CliResult<(Command, PathBuf)> {
    let [command, path, rest @ ..] = args else {
        return Err(USAGE.into());
    };
    let output = match rest {
        [] => None,
        [output] => Some(PathBuf::from(output)),
        _ => return Err(USAGE.into()),
    };

    let command = match (command.as_str(), output) {
        ("summary", None) => Command::Summary,
        ("emails", None) => Command::Emails,
        ("reset", None) => Command::Reset,
        ("export", output) => Command::Export(output),
        ("tables", output) => Command::Tables(output),
        _ => return Err(USAGE.into()),
    };

    Ok((command, PathBuf::from(path)))
}

fn print_summary(session: &BillSession) -> CliResult<()> {
    let totals = session.all_totals();
    if totals.is_empty() {
        println!("{}", i18n::NO_ASSIGNMENTS);
        return Ok(());
    }

    for line in summary_lines(session, &totals) {
        println!("{line}");
    }
    Ok(())
}

fn print_emails(session: &BillSession) -> CliResult<()> {
    let drafts = email_drafts(session);
    if drafts.is_empty() {
        println!("{}", i18n::NO_ASSIGNMENTS);
        return Ok(());
    }

    for draft in drafts {
        println!("To: {}", draft.recipient);
        println!("Subject: {}", draft.subject);
        println!();
        println!("{}", draft.body);
        println!();
        println!("{}", draft.mailto_link());
        println!("----");
    }
    Ok(())
}

fn write_output(path: &Path, bytes: &[u8]) -> CliResult<()> {
    fs::write(path, bytes)
        .map_err(|err| format!("Failed to write '{}': {err}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[rstest]
    #[case::summary(&["summary", "bill.json"])]
    #[case::emails(&["emails", "bill.json"])]
    #[case::reset(&["reset", "bill.json"])]
    #[case::export_default(&["export", "bill.json"])]
    #[case::export_to_file(&["export", "bill.json", "out.png"])]
    #[case::tables_to_file(&["tables", "bill.json", "tables.png"])]
    fn accepts_known_commands(#[case] values: &[&str]) {
        let (_, path) = parse_args(&args(values)).expect("valid arguments");
        assert_eq!(path, PathBuf::from("bill.json"));
    }

    #[rstest]
    #[case::missing_path(&["summary"])]
    #[case::unknown_command(&["split", "bill.json"])]
    #[case::summary_with_output(&["summary", "bill.json", "out.png"])]
    #[case::too_many(&["export", "bill.json", "a.png", "b.png"])]
    fn rejects_bad_arguments(#[case] values: &[&str]) {
        assert!(parse_args(&args(values)).is_err());
    }

    #[rstest]
    #[case::corrupt_json("{ not json")]
    #[case::over_allocated(
        r#"{"items": {"Pizza": {"qty": 1, "total_price": 10}},
            "people": {"Ann": {}, "Bo": {}},
            "shares": {"Ann": {"Pizza": 1}, "Bo": {"Pizza": 1}}}"#
    )]
    fn reset_clears_unreadable_session(#[case] contents: &str) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("bill.json");
        fs::write(&path, contents).expect("seed file");
        let store = JsonFileStore::new(&path);

        reset_session(&store, SettlementContext::cents_default()).expect("reset");

        let snapshot = store.load().expect("readable after reset");
        assert_eq!(snapshot, BillSession::new().snapshot());
    }

    #[test]
    fn export_keeps_output_path() {
        let (command, _) = parse_args(&args(&["export", "bill.json", "out.png"])).expect("valid");
        assert!(matches!(command, Command::Export(Some(path)) if path == PathBuf::from("out.png")));
    }
}
