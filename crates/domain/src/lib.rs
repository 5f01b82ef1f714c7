#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod config;
mod error;
mod exercise;
pub mod ladder;
mod name;
mod preview;
mod reps;
mod service;
mod summary;
mod template;
mod workout;

pub use config::*;
pub use error::*;
pub use exercise::*;
pub use ladder::{Ladder, LadderError, LadderStrategy, RoundEntry};
pub use name::*;
pub use preview::*;
pub use reps::*;
pub use service::*;
pub use summary::*;
pub use template::*;
pub use workout::*;
