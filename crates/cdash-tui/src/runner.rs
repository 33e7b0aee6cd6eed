//! Main TUI runner - entry point and event loop

use cdash_api::ApiClient;
use cdash_app::process::process_message;
use cdash_app::signals;
use cdash_app::{AppState, Message, Route};
use cdash_core::prelude::*;
use cdash_core::Locale;
use tokio::sync::mpsc;

use crate::{event, render, terminal};

/// Run the dashboard in the terminal until the user quits
///
/// `initial` is opened right away; its first fetch starts before the first
/// frame is drawn.
pub async fn run(mut state: AppState, client: ApiClient, initial: Route) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();

    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Sends Message::Quit on SIGINT/SIGTERM
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    if let Err(e) = msg_tx.send(Message::Navigate(initial)).await {
        signal_task.abort();
        ratatui::restore();
        return Err(Error::channel_send(e.to_string()));
    }

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, client);

    signal_task.abort();
    ratatui::restore();
    info!("Client Dashboard exiting");

    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    mut client: ApiClient,
) -> Result<()> {
    let mut client_locale: Option<Locale> = None;

    while !state.should_quit() {
        // Transport failures are reported in the active language
        if client_locale != Some(state.locale()) {
            client.set_network_error_message(state.i18n.t("common.error.network"));
            client_locale = Some(state.locale());
        }

        // Fetch results and signals
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &client);
        }

        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &client);
        }
    }

    Ok(())
}
