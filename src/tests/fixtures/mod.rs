// Shared test fixtures. Compiled only for unit tests.

pub mod entries;
pub mod timesheets;
