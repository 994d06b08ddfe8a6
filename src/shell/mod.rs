// Composition root for the voters service.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory voter store.
// - Wire it into the HTTP and GraphQL adapters.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
