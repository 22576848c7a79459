//! Concrete `Source` implementations.
//!
//! - `EnvSource`: process environment variables, optionally prefixed.
//! - `MapSource`: an in-memory map, optionally prefixed.
//! - `DotenvSource`: the key/value pairs of a `.env` file.

mod dotenv;
mod env;
mod map;

pub use dotenv::DotenvSource;
pub use env::EnvSource;
pub use map::MapSource;
