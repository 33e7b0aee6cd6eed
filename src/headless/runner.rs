//! Headless mode runner - one fetch cycle, then JSON on stdout

use std::io::{self, Write};

use cdash_api::DataSource;
use cdash_app::actions::execute_task;
use cdash_app::handler::update;
use cdash_app::{AppState, Message, Route, UpdateAction};
use cdash_core::prelude::*;

use super::page_report;

/// Open `route` and wait for its first fetch cycle to finish
///
/// Runs the same update path as the TUI, with the fetch awaited inline
/// instead of spawned.
pub async fn load_page<S>(state: &mut AppState, route: Route, source: &S)
where
    S: DataSource + Sync,
{
    let mut next = Some(Message::Navigate(route));
    while let Some(message) = next {
        let result = update(state, message);
        next = result.message;

        if let Some(UpdateAction::SpawnTask(task)) = result.action {
            let loaded = execute_task(task, source).await;
            update(state, loaded);
        }
    }
}

/// Load `route`, print the page as JSON and report whether it loaded
pub async fn run_headless<S>(mut state: AppState, source: &S, route: Route) -> Result<bool>
where
    S: DataSource + Sync,
{
    info!("Client Dashboard starting in HEADLESS mode ({})", route);

    load_page(&mut state, route, source).await;

    let report = page_report(&state);
    let json = serde_json::to_string_pretty(&report)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()?;

    if report.is_failed() {
        warn!("Headless load failed");
    }
    Ok(!report.is_failed())
}
