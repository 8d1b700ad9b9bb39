//! Hotel catalog models
//!
//! - [`hotel`]: generated hotel records (`HotelData` and its parts)
//! - [`view`]: the search-result view model (`HotelType`)

pub mod hotel;
pub mod view;

pub use hotel::*;
pub use view::*;
