#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]

pub mod action;
pub mod bunny;
pub mod clock;
pub mod error;
pub mod stats;

pub use action::{Action, ActionKind, FeedKind, PlayKind};
pub use bunny::{Bunny, DecayRates};
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Error, Result};
pub use stats::{Stats, Status, clamp};
