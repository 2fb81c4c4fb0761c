use derive_more::{Display, Error, From};

/// Why a move was rejected by a game state.
/// Rejections are ordinary values: the caller decides whether to re-prompt.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    #[display("position (row {row}, col {col}) is outside the board")]
    OutOfBounds { row: usize, col: usize },

    #[display("position (row {row}, col {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    /// Reversi only: the placement would not capture anything.
    #[display("a piece at (row {row}, col {col}) would not capture anything")]
    NoCaptureAvailable { row: usize, col: usize },

    /// A pass was attempted while the player still had a legal move.
    #[display("passing is not allowed while a legal move exists")]
    IllegalPass,

    #[display("the game is already over")]
    GameOver,
}

/// Failure to read a move out of user-entered text.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ParseMoveError {
    #[display("didn't recognize input as a move: {input:?}")]
    Malformed { input: String },

    #[display("move is outside the board: {input:?}")]
    OutOfRange { input: String },
}

/// Why an agent gave back no move.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum AgentError {
    /// The player asked to stop. Not a failure; callers usually wind down quietly.
    #[display("the player quit")]
    Quit,

    #[display("there are no legal moves to choose from")]
    NoLegalMoves,

    #[display("couldn't read the player's input: {reason}")]
    Input { reason: String },
}

/// Why a game stopped before reaching a result.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum PlayError {
    #[display("agent gave no move: {_0}")]
    Agent(AgentError),

    #[display("agent picked an illegal move: {_0}")]
    IllegalMove(MoveError),
}
