// Composition root for the scheduling context.
//
// - Read config from environment.
// - Instantiate the in-memory adapters.
// - Wire them into the use case handlers and expose HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
