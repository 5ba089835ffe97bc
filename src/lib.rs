pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::reports::{MailboxReport, TaxReport};
pub use config::toml_config::TownConfig;
pub use crate::core::{
    cadastre::Cadastre,
    mailbox::Mailbox,
    taxes::{
        compute_taxes, compute_taxes_for_building, TaxesCalculator, GARDEN_AREA_TAX_RATE,
        LIVING_AREA_TAX_RATE,
    },
};
pub use domain::estate::{Appartment, Building, BuildingId, BuildingKind, Person, PersonId};
pub use domain::mail::{DeliveryMode, Format, Mail, MailKind, MAX_PARCEL_VOLUME};
pub use domain::ports::{Frankable, Surface};
pub use utils::error::{Result, TownError};
