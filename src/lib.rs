// Library surface for headless/integration tests and reuse.
// The binary only adds terminal setup and argument parsing on top.
pub mod app;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod runtime;
pub mod session;
pub mod typing_policy;
pub mod typing_session;
pub mod ui;
pub mod view;
pub mod words;

pub use error::WordSourceError;
pub use session::{SessionConfig, SessionPhase, SessionResults, SessionState};
pub use typing_session::{TypingSession, WordJudgement};
pub use words::{WordList, WordSource};
