use crate::core::cadastre::Cadastre;
use crate::domain::estate::PersonId;
use crate::domain::ports::Surface;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative_rate, Validate};
use serde::{Deserialize, Serialize};

pub const LIVING_AREA_TAX_RATE: f64 = 5.6;
pub const GARDEN_AREA_TAX_RATE: f64 = 1.5;

// Taxes are a policy of the taxing authority, not something a building or a
// person knows about, so they live outside the domain entities.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxesCalculator {
    pub living_area_rate: f64,
    pub garden_area_rate: f64,
}

impl Default for TaxesCalculator {
    fn default() -> Self {
        Self {
            living_area_rate: LIVING_AREA_TAX_RATE,
            garden_area_rate: GARDEN_AREA_TAX_RATE,
        }
    }
}

impl TaxesCalculator {
    pub fn new(living_area_rate: f64, garden_area_rate: f64) -> Self {
        Self {
            living_area_rate,
            garden_area_rate,
        }
    }

    /// Taxes applicable to one building.
    pub fn for_building<B: Surface + ?Sized>(&self, building: &B) -> f64 {
        let living_area_taxes = self.living_area_rate * building.living_area() as f64;
        let garden_taxes = self.garden_area_rate * building.garden_area() as f64;
        living_area_taxes + garden_taxes
    }

    /// Taxes applicable to every building `person` currently owns.
    pub fn for_person(&self, cadastre: &Cadastre, person: PersonId) -> Result<f64> {
        Ok(cadastre
            .owned_buildings(person)?
            .into_iter()
            .map(|building| self.for_building(building))
            .sum())
    }
}

impl Validate for TaxesCalculator {
    fn validate(&self) -> Result<()> {
        validate_non_negative_rate("taxes.living_area_rate", self.living_area_rate)?;
        validate_non_negative_rate("taxes.garden_area_rate", self.garden_area_rate)?;
        Ok(())
    }
}

pub fn compute_taxes_for_building<B: Surface + ?Sized>(building: &B) -> f64 {
    TaxesCalculator::default().for_building(building)
}

pub fn compute_taxes(cadastre: &Cadastre, person: PersonId) -> Result<f64> {
    TaxesCalculator::default().for_person(cadastre, person)
}
