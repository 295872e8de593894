// Composition root for the timesheet validation service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory adapters and seed them.
// - Wire adapters into the validation handler and expose it over HTTP.

pub mod config;
pub mod http;
pub mod seed;
pub mod state;
