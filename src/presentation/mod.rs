//! Home page presentation state: the highlights carousel and
//! reveal-on-scroll sections.

pub mod carousel;
pub mod reveal;

pub use carousel::{AutoAdvance, Carousel, DEFAULT_INTERVAL};
pub use reveal::{RevealLatch, DEFAULT_THRESHOLD};
