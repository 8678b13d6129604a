//! Application state and command dispatch.
//!
//! The [`AppController`] owns all mutable state and reduces [`Command`]s
//! into new state plus [`Effect`] intents for the rendering collaborator.
//! The selection/highlight machine lives in [`selection`]; it guarantees at
//! most one highlighted entity at any time.

mod command;
mod controller;
mod effect;
mod selection;

pub use command::{Command, InputMode};
pub use controller::{AppController, DatasetState, LookupError};
pub use effect::Effect;
pub use selection::{SelectionMachine, SelectionState};
