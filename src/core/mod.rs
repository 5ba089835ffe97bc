pub mod cadastre;
pub mod mailbox;
pub mod taxes;

pub use crate::domain::estate::{Appartment, Building, BuildingId, BuildingKind, Person, PersonId};
pub use crate::domain::mail::{DeliveryMode, Format, Mail, MailKind, MAX_PARCEL_VOLUME};
pub use crate::domain::ports::{Frankable, Surface};
pub use crate::utils::error::Result;
