//! Transport abstraction carrying commands to and from the host.
//!
//! Two implementations ship with the crate: [`NullChannel`], which resolves
//! everything trivially and keeps broker logic testable without a live host,
//! and [`WebChannel`], which scopes messages to a host execution context and
//! delegates delivery to a [`Transport`].

mod errors;
mod null;
mod types;
mod web;

pub use errors::ChannelError;
pub use null::NullChannel;
pub use types::{Channel, HostContext, Transport, WireMessage};
pub use web::WebChannel;
