//! Puzzle input acquisition
//!
//! Inputs are personal to each account, so they are downloaded once with the
//! account's session cookie and kept in a local cache directory afterwards.
//!
//! - [`InputCache`]: one file per puzzle, `{dir}/{year}_day{dd}.txt`
//! - [`InputClient`]: blocking rustls client for `/{year}/day/{day}/input`
//! - [`InputProvider`]: cache first, fetch and persist on a miss
//!
//! # Example
//!
//! ```no_run
//! use advent_input::{InputCache, InputClient, InputProvider};
//! use zeroize::Zeroizing;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = InputProvider::new(
//!     InputCache::new("/tmp/advent2022"),
//!     InputClient::new()?,
//!     std::env::var("AOC_SESSION").ok().map(Zeroizing::new),
//! );
//! let input = provider.resolve(2022, 12)?;
//! println!("{} lines", input.lines().count());
//! # Ok(())
//! # }
//! ```

mod cache;
mod client;
mod error;
mod provider;

pub use cache::InputCache;
pub use client::{InputClient, InputClientBuilder};
pub use error::InputError;
pub use provider::InputProvider;
