use lib_boardgame::{AgentError, GameAgent, GameMove, GameState};
use lib_printer::out;
use std::cell::RefCell;
use std::fmt::Display;
use std::io::{self, BufRead, BufReader};
use std::marker::PhantomData;
use std::str::FromStr;
use tracing::warn;

/// Asks the person at the keyboard for each move.
///
/// Malformed or illegal input is explained and asked for again.
/// Entering "q" or "quit" (or closing the input) gives back `AgentError::Quit`;
/// a failed read gives back `AgentError::Input`.
pub struct HumanAgent<TState: GameState> {
    prompt: String,
    input: RefCell<Box<dyn BufRead>>,
    _phantom: PhantomData<TState>,
}

/// What one line of input turned out to be.
#[derive(Debug, PartialEq)]
enum Input<M> {
    Quit,
    Move(M),
    Invalid(String),
}

fn interpret<M>(line: &str) -> Input<M>
where
    M: FromStr,
    M::Err: Display,
{
    let line = line.trim();

    if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
        return Input::Quit;
    }

    match M::from_str(line) {
        Ok(m) => Input::Move(m),
        Err(e) => Input::Invalid(e.to_string()),
    }
}

impl<TState> HumanAgent<TState>
where
    TState: GameState,
    TState::Move: FromStr,
    <TState::Move as FromStr>::Err: Display,
{
    /// Reads moves from stdin.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self::with_input(prompt, BufReader::new(io::stdin()))
    }

    /// Reads moves, one per line, from `input`.
    pub fn with_input(prompt: impl Into<String>, input: impl BufRead + 'static) -> Self {
        Self {
            prompt: prompt.into(),
            input: RefCell::new(Box::new(input)),
            _phantom: Default::default(),
        }
    }

    fn prompt_input(&self) -> Result<Input<TState::Move>, AgentError> {
        out!("{}", self.prompt);

        let mut line = String::new();

        match self.input.borrow_mut().read_line(&mut line) {
            Ok(0) => Ok(Input::Quit),
            Ok(_) => Ok(interpret(&line)),
            Err(e) => {
                warn!(error = %e, "couldn't read user input");
                Err(AgentError::Input {
                    reason: e.to_string(),
                })
            }
        }
    }
}

impl<TState> GameAgent<TState> for HumanAgent<TState>
where
    TState: GameState,
    TState::Move: FromStr,
    <TState::Move as FromStr>::Err: Display,
{
    fn pick_move(
        &self,
        state: &TState,
        legal_moves: &[TState::Move],
    ) -> Result<TState::Move, AgentError> {
        if legal_moves.len() == 1 && legal_moves[0].is_forced_pass() {
            return Ok(legal_moves[0]);
        }

        loop {
            let user_input = match self.prompt_input()? {
                Input::Quit => return Err(AgentError::Quit),
                Input::Invalid(reason) => {
                    out!("Invalid input ({}). Try again.", reason);
                    continue;
                }
                Input::Move(m) => m,
            };

            match state.validate_move(user_input) {
                Ok(()) => return Ok(user_input),
                Err(e) => out!("The provided move was not valid: {}. Try again.", e),
            }
        }
    }
}
