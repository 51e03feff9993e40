//! # Tetra Supply - Bounded Piece-Supply Bookkeeping
//!
//! Models the piece supply of a falling-block game: a fixed-capacity
//! circular queue of upcoming pieces plus a fixed-capacity stack of reserved
//! pieces, with the transitions that move pieces between them.
//!
//! Two invariants drive the design:
//! 1. **Constant supply**: in supply mode, every removal is followed by a
//!    generated refill, so the queue length never leaves its capacity
//! 2. **Unique ids**: piece ids are strictly increasing and never reused for
//!    the lifetime of one controller
//!
//! ## Example
//!
//! ```
//! use tetra_supply::{Command, Effect, SupplyConfig, SupplyController};
//!
//! let mut supply = SupplyController::new(SupplyConfig::default());
//! assert_eq!(supply.queue().len(), 5);
//!
//! // Play the front piece; a fresh one refills the queue.
//! let effect = supply.dispatch(Command::Play).unwrap();
//! if let Effect::Played { piece, refill } = effect {
//!     assert_eq!(piece.id(), 0);
//!     assert_eq!(refill.id(), 5);
//! }
//! assert_eq!(supply.queue().len(), 5);
//! ```
//!
//! The menu driver in `demos/menu.rs` shows the full terminal loop; the
//! library itself does no I/O beyond `log` records.

mod command;
mod controller;
mod errors;
mod generator;
mod iter;
mod piece;
mod queue;
mod stack;

#[cfg(test)]
mod tests;

pub use command::{Command, Effect};
pub use controller::{Snapshot, SupplyConfig, SupplyController, SupplyMode, SupplyStats};
pub use errors::{ControllerError, QueueError, StackError};
pub use generator::PieceGenerator;
pub use iter::{QueueIter, StackIter};
pub use piece::{Piece, PieceKind};
pub use queue::PieceQueue;
pub use stack::ReserveStack;
