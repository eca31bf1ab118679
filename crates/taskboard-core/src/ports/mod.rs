//! Ports - 抽象化レイヤー
//!
//! The traits here are the seams between the core and its collaborators:
//! time (`Clock`), notification transport (`EventSink`), and the simulated
//! remote surface (`ProjectApi`). Implementations are swapped in tests
//! (`FixedClock`, `NoopEventSink`) without touching the core.

pub mod api;
pub mod clock;
pub mod event_sink;

pub use self::api::ProjectApi;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::event_sink::{EventSink, NoopEventSink};
