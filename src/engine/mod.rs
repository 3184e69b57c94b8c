//! Engine Module - Rotation machinery
//!
//! Three layers, innermost first:
//!
//! - `core` - The locked state machine: pages, pause flag, epoch fence
//! - `ticker` - The cadence thread that fires `auto_tick` into the core
//! - `carousel` - The owner-thread handle tying core, ticker and the
//!   page signal together

pub mod carousel;
pub mod core;
pub mod ticker;

pub use carousel::{Carousel, CarouselOptions, DEFAULT_AUTO_ADVANCE, OffsetModel};
pub use core::EngineCore;
pub use ticker::Ticker;
