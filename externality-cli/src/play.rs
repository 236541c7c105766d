//! Interactive terminal game loop.

use std::io::{self, BufRead, Write};

use externality_core::{production_from_fraction, GameState};

use crate::render;

const HELP: &str = "Commands: <0-100> or <0-100%> set production, s submit, h history, r restart (after the last round), q quit";

/// One line of player input.
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Production(i64),
    /// Share of capacity, like a slider position.
    Percent(f64),
    Submit,
    History,
    Restart,
    Quit,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "s" | "submit" => Input::Submit,
        "h" | "history" => Input::History,
        "r" | "restart" => Input::Restart,
        "q" | "quit" | "exit" => Input::Quit,
        other => {
            if let Some(Ok(percent)) = other.strip_suffix('%').map(|p| p.trim().parse::<f64>()) {
                return Input::Percent(percent);
            }
            match other.parse::<i64>() {
                Ok(value) => Input::Production(value),
                Err(_) => Input::Unknown(trimmed.to_string()),
            }
        }
    }
}

fn final_screen(state: &GameState) -> String {
    format!(
        "{}\n{}\n{}Type r to play again or q to quit.\n",
        render::game_over(state),
        render::history_chart(state.round_history()),
        render::history_table(state.round_history())
    )
}

/// Run the game until the player quits or input ends.
pub fn run<R: BufRead, W: Write>(state: &mut GameState, input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "Market failure: the externality challenge")?;
    writeln!(
        out,
        "Chase profit, but mind what your production does to everyone else."
    )?;
    writeln!(out, "{HELP}")?;
    write!(out, "{}", render::status(state))?;

    for line in input.lines() {
        let line = line?;
        match parse_input(&line) {
            Input::Quit => break,
            Input::Production(raw) => {
                if state.is_finished() {
                    writeln!(out, "The game is over. Type r to play again.")?;
                } else {
                    let clamped = state.set_production(raw);
                    if i64::from(clamped) != raw {
                        log::debug!("clamped production {raw} to {clamped}");
                    }
                    write!(out, "{}", render::metric_cards(state))?;
                }
            }
            Input::Percent(percent) => {
                if state.is_finished() {
                    writeln!(out, "The game is over. Type r to play again.")?;
                } else {
                    let max = state.config().max_production;
                    let quantity = production_from_fraction(percent / 100.0, max);
                    state.set_production(i64::from(quantity));
                    write!(out, "{}", render::metric_cards(state))?;
                }
            }
            Input::Submit => match state.submit() {
                Ok(record) => {
                    write!(out, "{}", render::settled(&record))?;
                    if state.is_finished() {
                        write!(out, "{}", final_screen(state))?;
                    } else {
                        write!(out, "{}", render::status(state))?;
                    }
                }
                Err(err) => writeln!(out, "{err}. Type r to play again.")?,
            },
            Input::History => {
                write!(out, "{}", render::history_chart(state.round_history()))?;
                write!(out, "{}", render::history_table(state.round_history()))?;
            }
            Input::Restart => {
                if state.is_finished() {
                    state.restart();
                    write!(out, "{}", render::status(state))?;
                } else {
                    writeln!(out, "Finish the current game before restarting.")?;
                }
            }
            Input::Unknown(text) => {
                if !text.is_empty() {
                    writeln!(out, "Unrecognized input '{text}'.")?;
                }
                writeln!(out, "{HELP}")?;
            }
        }
        out.flush()?;
    }

    Ok(())
}
