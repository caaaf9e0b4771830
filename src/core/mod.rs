//! Host-independent code generation.
//!
//! - `identifier`: raw host names to C# identifiers
//! - `emit`: rendering a constants class
//! - `generate`: the collect, build, write and refresh sequence for one file
//! - `error`: error types shared by the above

pub mod emit;
pub mod error;
pub mod generate;
pub mod identifier;

pub use emit::{ConstantEntry, GeneratedFile, emit};
pub use error::{CollectError, GenerateError, GenerateResult};
pub use generate::{
    Mode, Outcome, OutcomeKind, Target, build_file, generate, generate_all, write_atomic,
};
pub use identifier::{Identifier, is_valid_identifier, sanitize};
