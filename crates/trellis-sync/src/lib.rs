pub mod gateway;
pub mod persister;
pub mod stream;

pub use gateway::BoardGateway;
pub use persister::{commit_drag, OutcomePersister};
pub use stream::{BoardStreamEvent, EventStreamClient, StreamConfig, StreamTransport};
