//! Caesar (additive shift) cipher over the Latin alphabet.
//!
//! [`transform`] is the whole cipher: it shifts `A-Z` and `a-z` by any
//! integer amount, keeps case, and leaves every other character in place.
//! The remaining modules are the command-line front end around it.

pub mod algos;
pub mod config;
pub mod constants;
pub mod error;
pub mod repl;
pub mod session;
pub mod structs;
pub mod traits;
pub mod utils;

pub use algos::caesar::{caesar_cipher, transform};
pub use config::Config;
pub use error::{Error, Result};
pub use session::{Command, Session};
pub use structs::{Caesar, Direction};
pub use traits::{Decryptor, Encryptor};
