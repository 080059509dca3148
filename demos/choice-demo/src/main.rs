//! Choice list demo
//!
//! Walks the demo catalogue (Options and Choices, three of each) through
//! every demo rule, once with finishing validated and once without, replaying
//! the same taps each time and printing what a presenter would show.
//!
//! Pass a TOML session file as the first argument to replay the taps against
//! that session instead:
//!
//! ```text
//! RUST_LOG=choiceforge_core=debug cargo run -p choice-demo -- session.toml
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use choiceforge::prelude::*;
use choiceforge::TracingSessionListener;
use choiceforge_test::{DemoCatalogue, DEMO_RULES};
use tracing::error;
use tracing_subscriber::EnvFilter;

const TAPS: [&str; 6] = ["OA", "OB", "CA", "OB", "CC", "CB"];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match std::env::args().nth(1) {
        Some(path) => match run_file(&path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                error!(event = "demo_failed", path = %path, error = %err);
                ExitCode::FAILURE
            }
        },
        None => {
            run_catalogue();
            ExitCode::SUCCESS
        }
    }
}

fn run_catalogue() {
    let catalogue = DemoCatalogue::new();

    for requires_selection in [false, true] {
        println!(
            "\n== Selection {}Required ==",
            if requires_selection { "" } else { "Not " }
        );

        for rule in DEMO_RULES {
            let mut session = SelectionSession::new(rule)
                .with_title("choose an option")
                .with_key(rule.to_string())
                .with_requires_selection(requires_selection)
                .with_listener(Arc::new(TracingSessionListener::with_label("demo")));
            session.configure_layout(rule, catalogue.layout());

            match replay(&mut session, &TAPS) {
                Ok((titles, outcome)) => {
                    print_outcome(&format!("Selection: {rule}"), &titles, &outcome)
                }
                Err(err) => error!(event = "replay_failed", rule = %rule, error = %err),
            }
        }
    }
}

fn run_file(path: &str) -> choiceforge::Result<()> {
    let config = SessionConfig::load(path)?;
    let mut session = SelectionSession::from_config(&config)?
        .with_listener(Arc::new(TracingSessionListener::with_label(path)));

    let taps: Vec<String> = TAPS.iter().map(|k| k.to_string()).collect();
    let (titles, outcome) = replay(&mut session, &taps)?;
    print_outcome(&format!("Selection: {}", session.rule()), &titles, &outcome);
    Ok(())
}

/// Taps every key in order, then asks to finish.
///
/// Returns the titles of the final selection alongside the finish outcome.
fn replay<K>(
    session: &mut SelectionSession<K>,
    taps: &[K],
) -> choiceforge::Result<(Vec<String>, FinishOutcome)>
where
    K: Clone + Eq + std::hash::Hash + std::fmt::Debug,
{
    for key in taps {
        if let Err(err) = session.toggle(key) {
            error!(event = "toggle_failed", key = ?key, error = %err);
            return Err(err);
        }
    }

    let titles = session
        .selected()
        .iter()
        .filter_map(|key| session.layout().title_for(key))
        .map(str::to_string)
        .collect();

    match session.request_finish() {
        Ok(outcome) => Ok((titles, outcome)),
        Err(err) => {
            error!(event = "finish_failed", session = ?session.key(), error = %err);
            Err(err)
        }
    }
}

fn print_outcome(label: &str, titles: &[String], outcome: &FinishOutcome) {
    let selection = if titles.is_empty() {
        "No Selection".to_string()
    } else {
        titles.join(", ")
    };

    match outcome {
        FinishOutcome::Approved => println!("{label:<40} {selection}"),
        FinishOutcome::Rejected(alert) => {
            println!("{label:<40} {selection}");
            println!(
                "{:<40} [{}] {} ({})",
                "",
                alert.title.as_deref().unwrap_or(""),
                alert.message,
                alert.dismiss_label
            );
        }
    }
}
