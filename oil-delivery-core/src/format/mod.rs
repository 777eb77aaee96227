//! This module defines a json format of instance and solution files.
//!
//! Instance:
//! ```json
//! { "periodCount": 4, "gasStations": [{ "id": 0, "demandValues": [{ "demand": 10, "value": 5 }] }],
//!   "vehicles": [{ "id": 0, "cabins": [{ "id": 0, "volume": 10 }] }] }
//! ```
//!
//! Solution file starts with a single-line submission header followed by the solution itself:
//! ```json
//! { "author": "...", "algorithm": "...", "instance": "...", "duration": 1.5, "thread": 4, ... }
//! { "deliveries": [{ "vehicleDeliveries": [
//!     { "id": 0, "cabinDeliveries": [{ "id": 0, "stationId": 0, "quantity": 10 }] }
//! ] }] }
//! ```

mod instance;
pub use self::instance::*;

mod solution;
pub use self::solution::*;
