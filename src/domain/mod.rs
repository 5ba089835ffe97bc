// Domain layer: entities, value types and the capability traits they implement.
// No I/O here.

pub mod estate;
pub mod mail;
pub mod ports;
