use crate::core::cadastre::Cadastre;
use crate::core::mailbox::Mailbox;
use crate::core::taxes::TaxesCalculator;
use crate::domain::estate::{Building, BuildingId, PersonId};
use crate::domain::ports::Surface;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Serialize)]
pub struct BuildingTaxLine {
    pub building: BuildingId,
    pub kind: &'static str,
    pub living_area: u64,
    pub garden_area: u64,
    pub taxes: f64,
}

impl BuildingTaxLine {
    pub fn new(calculator: &TaxesCalculator, building: &Building) -> Self {
        Self {
            building: building.id(),
            kind: building.kind().as_str(),
            living_area: building.living_area(),
            garden_area: building.garden_area(),
            taxes: calculator.for_building(building),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxReport {
    pub owner: String,
    pub buildings: Vec<BuildingTaxLine>,
    pub total: f64,
}

impl TaxReport {
    pub fn for_person(
        cadastre: &Cadastre,
        calculator: &TaxesCalculator,
        person: PersonId,
    ) -> Result<Self> {
        let owner = cadastre.person(person)?.full_name().to_string();
        let buildings: Vec<BuildingTaxLine> = cadastre
            .owned_buildings(person)?
            .into_iter()
            .map(|building| BuildingTaxLine::new(calculator, building))
            .collect();
        let total = calculator.for_person(cadastre, person)?;

        Ok(Self {
            owner,
            buildings,
            total,
        })
    }
}

impl fmt::Display for TaxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {:.2}", self.owner, self.total)?;
        for line in &self.buildings {
            writeln!(
                f,
                "  {} {} ({} m² living, {} m² garden): {:.2}",
                line.kind, line.building, line.living_area, line.garden_area, line.taxes
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MailboxReport {
    pub lines: Vec<String>,
    pub total_franking: f64,
    pub invalid_mails: usize,
}

impl MailboxReport {
    pub fn from_mailbox(mailbox: &Mailbox) -> Self {
        Self {
            lines: mailbox.display(),
            total_franking: mailbox.frank(),
            invalid_mails: mailbox.invalid_mails(),
        }
    }
}

impl fmt::Display for MailboxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line)?;
        }
        writeln!(f, "Total franking: {:.2}", self.total_franking)?;
        writeln!(f, "Invalid mails: {}", self.invalid_mails)
    }
}

pub fn to_json<T: Serialize>(report: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::estate::Appartment;
    use crate::domain::mail::{DeliveryMode, Format, Mail};

    #[test]
    fn test_tax_report() {
        let mut cadastre = Cadastre::new();
        let alice = cadastre.add_person("Alice");
        cadastre.add_house(alice, 50, 10).unwrap();
        cadastre
            .add_appartment_building(alice, &[Appartment::new(30), Appartment::new(60)])
            .unwrap();

        let report = TaxReport::for_person(&cadastre, &TaxesCalculator::default(), alice).unwrap();
        assert_eq!(report.owner, "Alice");
        assert_eq!(report.buildings.len(), 2);
        assert_eq!(report.buildings[1].kind, "appartment_building");
        assert_eq!(report.buildings[1].living_area, 90);
        assert!((report.total - 799.0).abs() < 1e-9);

        let text = report.to_string();
        assert!(text.starts_with("Alice: 799.00\n"));
        assert!(text.contains("house building#0 (50 m² living, 10 m² garden): 295.00"));
    }

    #[test]
    fn test_mailbox_report_json() {
        let mut mailbox = Mailbox::new();
        mailbox.add_mail(Mail::letter(180, DeliveryMode::Normal, "dest", Format::A5));
        mailbox.add_mail(Mail::parcel(15000, DeliveryMode::Express, "dest", 200));

        let report = MailboxReport::from_mailbox(&mailbox);
        let json: serde_json::Value = serde_json::from_str(&to_json(&report).unwrap()).unwrap();

        assert_eq!(json["invalid_mails"], 1);
        assert_eq!(json["lines"][0], "Lettre : 180 g, normal, pour 'dest', A5");
        assert!((json["total_franking"].as_f64().unwrap() - 1.68).abs() < 1e-9);
    }

    #[test]
    fn test_mailbox_report_text() {
        let mut mailbox = Mailbox::new();
        mailbox.add_mail(Mail::advertisement(200, DeliveryMode::Normal, "dest"));
        mailbox.add_mail(Mail::advertisement(240, DeliveryMode::Express, ""));

        assert_eq!(
            MailboxReport::from_mailbox(&mailbox).to_string(),
            "Publicité : 200 g, normal, pour 'dest'\n\
             Publicité : 240 g, express, pour '' (invalide)\n\
             Total franking: 1.00\n\
             Invalid mails: 1\n"
        );
    }
}
