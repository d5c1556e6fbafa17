#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # crr
//!
//! A library for keeping a conference room reservation schedule.
//!
//! Reservations book one room over a half-open time interval. The store
//! refuses any reservation that overlaps another one for the same room,
//! answers availability and lookup queries, and persists its contents in a
//! fixed-width binary file.
//!
//! ## Core Types
//!
//! - [`Reservation`]: a validated booking
//! - [`RoomRegistry`]: the set of bookable rooms
//! - [`Store`]: the reservation collection, its queries, and persistence
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use crr::{Reservation, RoomRegistry, Store};
//!
//! let registry = RoomRegistry::from_names(["Lounge", "Library"]).unwrap();
//! let mut store = Store::new();
//!
//! let party = Reservation::builder(
//!     "Lounge",
//!     Utc.with_ymd_and_hms(2024, 3, 1, 18, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 3, 1, 22, 0, 0).unwrap(),
//! )
//! .description("Birthday party")
//! .build()
//! .unwrap();
//! assert!(store.add(party).unwrap().is_none());
//!
//! let at = Utc.with_ymd_and_hms(2024, 3, 1, 19, 0, 0).unwrap();
//! let free = store.available_rooms_at(at, &registry).unwrap();
//! assert_eq!(free.names(&registry), vec!["Library"]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod ordering;
pub mod query;
pub mod registry;
pub mod reservation;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use ordering::SortOrder;
pub use query::AvailableRooms;
pub use registry::RoomRegistry;
pub use reservation::{Reservation, ReservationBuilder, ValidationError};
pub use store::Store;
