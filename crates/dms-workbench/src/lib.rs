//! Authoring workbench core.
//!
//! For a selected source document this crate keeps two parallel information
//! variants of a data module (verbatim `00`, simplified `01`) editable side
//! by side, each as a pair of buffers: plain text and its generated
//! structured XML. The central invariant is that after every edit exactly
//! one side of a pair was authoritative and the other is a pure derivation
//! through the codec, so the two representations can never silently diverge.
//!
//! All state is owned by [`Workbench`], created when the workbench opens and
//! dropped when it closes. Everything is single-threaded and event-driven;
//! saves go through the [`PersistenceGateway`] trait fire-and-forget.

mod context;
mod gateway;
mod progress;
mod resolver;
mod session;

pub use context::Workbench;
pub use gateway::{GatewayError, PersistenceGateway};
pub use progress::ProcessingProgress;
pub use resolver::{ModuleSet, VariantPair};
pub use session::{EditSession, Transition, VariantSessions};
