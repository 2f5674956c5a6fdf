//! Line-oriented front end for the stockroom inventory.
//!
//! Reads one command per line, runs it against an `InventoryDirectory`,
//! prints the result and keeps a raw transcript of every command line.

pub mod command;
pub mod config;
pub mod dispatcher;
pub mod render;
pub mod session;
pub mod transcript;

pub use command::{Command, parse_line};
pub use config::Config;
pub use dispatcher::{CommandDispatcher, DispatchError, Operation, Reply};
pub use render::OutputFormat;
pub use session::{Session, SessionError, SessionSummary};
pub use transcript::Transcript;
