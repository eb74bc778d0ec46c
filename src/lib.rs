//! parley — an in-process group-messaging mediator.
//!
//! Participants exchange text through shared rooms. A [`Space`] owns the
//! rooms and the participant table and routes every message between
//! them; each participant carries a [`DeliveryState`] deciding whether
//! an incoming message is processed, stored for later, or dropped, and
//! every room keeps an append-only history walkable with a
//! [`HistoryCursor`]. Everything observable lands in the space's
//! [`Event`] journal.
//!
//! Single-threaded and synchronous: every call runs to completion, and
//! ordering between sends is simply the call order of the surrounding
//! program.

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod history;
pub mod logging;
pub mod participant;
pub mod room;
pub mod space;
pub mod state;
pub mod types;

pub use action::{Action, ActionKind, ActionQueue};
pub use config::SpaceConfig;
pub use error::ParleyError;
pub use event::Event;
pub use history::HistoryCursor;
pub use participant::Participant;
pub use room::Room;
pub use space::Space;
pub use state::{DeliveryState, Reception};
pub use types::{ParticipantId, RoomId};
