pub mod buildcore;
pub mod error;
pub mod event;
pub mod iter;
pub mod log;
pub mod queue;
