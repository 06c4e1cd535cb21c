pub mod core;

pub use crate::core::buildcore::QueueSystem;
pub use crate::core::error::{Error, Result};
pub use crate::core::event::{Event, EventOp};
pub use crate::core::iter::{Entries, IntoIter, Iter, Keys};
pub use crate::core::log::{LogEntry, Logger, State};
pub use crate::core::queue::{Queue, SafeQueue};
