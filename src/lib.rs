mod card;
mod error;
mod event;
mod loader;
mod node;

pub mod format;
pub mod page;
pub mod server;
pub mod theme;

pub use card::render_card;
pub use error::{Error, Result};
pub use event::{Envelope, Event, State};
pub use loader::{Loader, DEFAULT_UPSTREAM};
pub use node::{create_node, Attributes, Node};
