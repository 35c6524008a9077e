//! Event sources for the fragplot engine.
//!
//! [`ToyStringSource`] is a self-contained stand-in for an external
//! fragmentation generator; [`ScriptedSource`] replays fixed sequences in
//! tests. Real generators plug in through [`frag_core::EventSource`].

pub mod scripted;
pub mod toy;

pub use scripted::ScriptedSource;
pub use toy::ToyStringSource;
