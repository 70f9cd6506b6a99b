use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use log::LevelFilter;
use reel_core::{update, AppState, Msg};
use reel_logging::{reel_info, reel_warn};

use super::config;
use super::effects::EffectRunner;
use super::ui;
use super::ui::constants::{PROMPT, QUIT_COMMAND};

/// Everything the main loop reacts to.
pub enum Inbox {
    Core(Msg),
    Quit,
}

pub fn run_app() -> anyhow::Result<()> {
    let config = config::load_from_env().context("loading configuration")?;
    reel_logging::initialize(config.log_destination, LevelFilter::Info);
    reel_info!("starting against {}", config.fetch.base_url);

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbox>();
    let runner =
        EffectRunner::new(config.fetch, inbox_tx.clone()).context("starting request engine")?;
    spawn_input_reader(inbox_tx).context("starting input reader")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{PROMPT}")?;

    let mut state = AppState::new();
    dispatch(&mut state, Msg::Activated, &runner, &mut out)?;
    while let Ok(event) = inbox_rx.recv() {
        match event {
            Inbox::Core(msg) => dispatch(&mut state, msg, &runner, &mut out)?,
            Inbox::Quit => break,
        }
    }

    runner.shutdown();
    reel_info!("bye");
    Ok(())
}

fn dispatch(
    state: &mut AppState,
    msg: Msg,
    runner: &EffectRunner,
    out: &mut impl Write,
) -> io::Result<()> {
    let (next, effects) = update(std::mem::take(state), msg);
    *state = next;
    runner.enqueue(effects);

    if state.consume_dirty() {
        for line in ui::render::render(&state.view()) {
            writeln!(out, "{line}")?;
        }
        out.flush()?;
    }
    Ok(())
}

/// Each stdin line replaces the whole query; EOF or `:q` quits.
fn spawn_input_reader(inbox: mpsc::Sender<Inbox>) -> io::Result<()> {
    thread::Builder::new()
        .name("reel-input".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        reel_warn!("failed to read input: {}", err);
                        break;
                    }
                };
                let event = classify_line(line);
                if matches!(event, Inbox::Quit) {
                    break;
                }
                if inbox.send(event).is_err() {
                    return;
                }
            }
            let _ = inbox.send(Inbox::Quit);
        })
        .map(|_| ())
}

/// Only the exact line `:q` quits; anything else, padded variants included, is a query.
fn classify_line(line: String) -> Inbox {
    if line == QUIT_COMMAND {
        Inbox::Quit
    } else {
        Inbox::Core(Msg::QueryChanged(line))
    }
}

#[cfg(test)]
mod tests {
    use reel_core::Msg;

    use super::{classify_line, Inbox};

    #[test]
    fn exact_quit_command_quits() {
        assert!(matches!(classify_line(":q".to_string()), Inbox::Quit));
    }

    #[test]
    fn padded_quit_command_is_searched_verbatim() {
        match classify_line(" :q ".to_string()) {
            Inbox::Core(Msg::QueryChanged(query)) => assert_eq!(query, " :q "),
            _ => panic!("padded :q must be a query"),
        }
    }

    #[test]
    fn blank_line_restores_popular_listing() {
        match classify_line(String::new()) {
            Inbox::Core(Msg::QueryChanged(query)) => assert!(query.is_empty()),
            _ => panic!("blank line must be a query"),
        }
    }
}
