#![deny(missing_debug_implementations)]
//! This crate fetches the match history of a club from the EA NHL pro clubs API and prints the
//! response as JSON.
//!
//! The command line program takes one argument, the club identifier:
//!
//! ```text
//! $ chel-matches 23708
//! [{"matchId": "...", "timestamp": 1700000000, ...}]
//! ```
//!
//! On failure it writes `{"error": "<message>"}` to stderr and exits with status 1.
//!
//! The same steps are available as a library:
//!
//! ```no_run
//! use chel_matches::{ClubId, Fetcher, Settings};
//!
//! fn main() -> chel_matches::Result {
//!     let club = ClubId::new("23708")?;
//!     let matches = Fetcher::new(Settings::default()).fetch(&club)?;
//!     chel_matches::write_json(std::io::stdout(), &matches)?;
//!     Ok(())
//! }
//! ```

#[macro_use]
extern crate log;

pub mod cli;
mod club;
pub mod config;
mod error;
mod fetcher;
pub mod output;

pub use crate::club::ClubId;
pub use crate::config::{MatchType, Settings};
pub use crate::error::{Error, ErrorKind, Result};
pub use crate::fetcher::Fetcher;
pub use crate::output::{write_error, write_json, ErrorReport};
