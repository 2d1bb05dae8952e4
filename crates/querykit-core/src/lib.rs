// Public fallible APIs in this crate share one concrete error contract (`QueryError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod columns;
pub mod encode;
pub mod error;
pub mod merge;
pub mod op;
pub mod resolve;
pub mod serialize;
pub mod state;
pub mod tag;
pub mod text;
pub mod value;

pub use error::{ErrorPayload, QueryError, Result};
pub use merge::merge;
pub use op::{OpMode, Operation, Resolved};
pub use resolve::{EmptyResolver, JsonResolver, Resolution, Resolver};
pub use serialize::{Leading, serialize};
pub use state::QueryState;
pub use tag::QueryTag;
pub use value::QueryValue;
