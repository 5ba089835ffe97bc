use crate::domain::ports::Frankable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum volume for a valid parcel, in liters.
pub const MAX_PARCEL_VOLUME: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    Normal,
    Express,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Normal => "normal",
            DeliveryMode::Express => "express",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Format {
    A3,
    A4,
    A5,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::A3 => "A3",
            Format::A4 => "A4",
            Format::A5 => "A5",
        }
    }

    /// Base franking price of a letter in this format.
    pub fn base_price(&self) -> f64 {
        match self {
            Format::A5 => 1.50,
            Format::A4 => 2.50,
            Format::A3 => 3.50,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MailKind {
    Letter { format: Format },
    /// Volume in liters.
    Parcel { volume: u32 },
    Advertisement,
}

impl MailKind {
    pub fn label(&self) -> &'static str {
        match self {
            MailKind::Letter { .. } => "Lettre",
            MailKind::Parcel { .. } => "Colis",
            MailKind::Advertisement => "Publicité",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mail {
    weight_g: u32,
    delivery_mode: DeliveryMode,
    delivery_address: String,
    kind: MailKind,
}

impl Mail {
    pub fn new(
        weight_g: u32,
        delivery_mode: DeliveryMode,
        delivery_address: impl Into<String>,
        kind: MailKind,
    ) -> Self {
        Self {
            weight_g,
            delivery_mode,
            delivery_address: delivery_address.into(),
            kind,
        }
    }

    pub fn letter(
        weight_g: u32,
        delivery_mode: DeliveryMode,
        delivery_address: impl Into<String>,
        format: Format,
    ) -> Self {
        Self::new(weight_g, delivery_mode, delivery_address, MailKind::Letter { format })
    }

    pub fn parcel(
        weight_g: u32,
        delivery_mode: DeliveryMode,
        delivery_address: impl Into<String>,
        volume: u32,
    ) -> Self {
        Self::new(weight_g, delivery_mode, delivery_address, MailKind::Parcel { volume })
    }

    pub fn advertisement(
        weight_g: u32,
        delivery_mode: DeliveryMode,
        delivery_address: impl Into<String>,
    ) -> Self {
        Self::new(weight_g, delivery_mode, delivery_address, MailKind::Advertisement)
    }

    /// Weight in grams.
    pub fn weight_g(&self) -> u32 {
        self.weight_g
    }

    /// Weight in kilograms.
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight_g) / 1000.0
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn kind(&self) -> &MailKind {
        &self.kind
    }

    fn has_address(&self) -> bool {
        !self.delivery_address.is_empty()
    }

    fn kind_allows(&self) -> bool {
        match self.kind {
            MailKind::Parcel { volume } => volume <= MAX_PARCEL_VOLUME,
            MailKind::Letter { .. } | MailKind::Advertisement => true,
        }
    }

    fn general_info(&self) -> String {
        format!(
            "{} g, {}, pour '{}'",
            self.weight_g, self.delivery_mode, self.delivery_address
        )
    }

    fn invalid_suffix(&self) -> &'static str {
        if self.is_valid() {
            ""
        } else {
            " (invalide)"
        }
    }
}

impl Frankable for Mail {
    fn frank_normal(&self) -> f64 {
        match self.kind {
            MailKind::Letter { format } => format.base_price() + self.weight_kg(),
            MailKind::Parcel { volume } => 0.25 * f64::from(volume) + self.weight_kg(),
            MailKind::Advertisement => 5.0 * self.weight_kg(),
        }
    }

    fn delivery_mode(&self) -> DeliveryMode {
        self.delivery_mode
    }

    fn is_valid(&self) -> bool {
        self.has_address() && self.kind_allows()
    }
}

impl fmt::Display for Mail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.kind.label(), self.general_info())?;
        match self.kind {
            MailKind::Letter { format } => write!(f, ", {}", format)?,
            MailKind::Parcel { volume } => write!(f, ", {} l", volume)?,
            MailKind::Advertisement => {}
        }
        write!(f, "{}", self.invalid_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {} but got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_weight_conversion() {
        let mail = Mail::advertisement(1250, DeliveryMode::Normal, "dest");
        assert_eq!(mail.weight_g(), 1250);
        assert_close(mail.weight_kg(), 1.25);
    }

    #[test]
    fn test_express_doubles_every_kind() {
        let kinds = [
            MailKind::Letter { format: Format::A3 },
            MailKind::Parcel { volume: 12 },
            MailKind::Advertisement,
        ];
        for kind in kinds {
            let normal = Mail::new(730, DeliveryMode::Normal, "dest", kind);
            let express = Mail::new(730, DeliveryMode::Express, "dest", kind);
            assert_close(normal.frank(), normal.frank_normal());
            assert_close(express.frank(), 2.0 * express.frank_normal());
            assert_close(express.frank(), 2.0 * normal.frank());
        }
    }

    #[test]
    fn test_letter_base_prices() {
        assert_close(Mail::letter(0, DeliveryMode::Normal, "x", Format::A5).frank(), 1.50);
        assert_close(Mail::letter(0, DeliveryMode::Normal, "x", Format::A4).frank(), 2.50);
        assert_close(Mail::letter(0, DeliveryMode::Normal, "x", Format::A3).frank(), 3.50);
    }

    #[test]
    fn test_parcel_volume_limit_is_inclusive() {
        assert!(Mail::parcel(100, DeliveryMode::Normal, "dest", MAX_PARCEL_VOLUME).is_valid());
        assert!(!Mail::parcel(100, DeliveryMode::Normal, "dest", MAX_PARCEL_VOLUME + 1).is_valid());
        // the volume rule never lifts the address rule
        assert!(!Mail::parcel(100, DeliveryMode::Normal, "", 1).is_valid());
    }

    #[test]
    fn test_display_strings() {
        assert_eq!(
            Mail::letter(180, DeliveryMode::Normal, "dest", Format::A5).to_string(),
            "Lettre : 180 g, normal, pour 'dest', A5"
        );
        assert_eq!(
            Mail::parcel(15000, DeliveryMode::Express, "dest", 200).to_string(),
            "Colis : 15000 g, express, pour 'dest', 200 l (invalide)"
        );
        assert_eq!(
            Mail::advertisement(240, DeliveryMode::Express, "").to_string(),
            "Publicité : 240 g, express, pour '' (invalide)"
        );
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        let json = serde_json::to_string(&DeliveryMode::Express).unwrap();
        assert_eq!(json, "\"express\"");
    }
}
