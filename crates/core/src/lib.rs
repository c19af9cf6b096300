pub mod config;
pub mod game;
pub mod report;
pub mod session_file;
pub mod state;
pub mod types;

pub use config::{ConfigError, GameConfig, TrapPolicy};
pub use game::{Game, PhaseEnd};
pub use report::{MemoryReporter, OutcomeReporter, ReportError};
pub use session_file::SessionFile;
pub use state::{Enemy, GameState, Grid, InvariantViolation};
pub use types::*;
