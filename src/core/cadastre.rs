use crate::domain::estate::{Appartment, Building, BuildingId, BuildingKind, Person, PersonId};
use crate::domain::ports::Surface;
use crate::utils::error::{Result, TownError};

/// Registry of persons and buildings.
///
/// Every building is listed by exactly one person, its current owner.
/// `transfer` is the only operation that moves a building between two
/// owned-buildings lists.
#[derive(Debug, Default, Clone)]
pub struct Cadastre {
    persons: Vec<Person>,
    buildings: Vec<Building>,
}

impl Cadastre {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_person(&mut self, full_name: impl Into<String>) -> PersonId {
        let id = PersonId(self.persons.len());
        let person = Person::new(id, full_name);
        tracing::debug!("Registered {} ({})", person.full_name(), id);
        self.persons.push(person);
        id
    }

    pub fn add_house(
        &mut self,
        initial_owner: PersonId,
        living_area: u32,
        garden_area: u32,
    ) -> Result<BuildingId> {
        self.add_building(
            initial_owner,
            BuildingKind::House {
                living_area,
                garden_area,
            },
        )
    }

    /// The appartments are copied: later changes to the caller's slice
    /// do not affect the building.
    pub fn add_appartment_building(
        &mut self,
        initial_owner: PersonId,
        appartments: &[Appartment],
    ) -> Result<BuildingId> {
        self.add_building(
            initial_owner,
            BuildingKind::AppartmentBuilding {
                appartments: appartments.to_vec(),
            },
        )
    }

    fn add_building(&mut self, initial_owner: PersonId, kind: BuildingKind) -> Result<BuildingId> {
        let id = BuildingId(self.buildings.len());
        let owner = self.person_mut(initial_owner)?;
        owner.acquire(id);

        let building = Building::new(id, initial_owner, kind);
        tracing::debug!(
            "Registered {} {} for {} ({} m² living, {} m² garden)",
            building.kind().as_str(),
            id,
            initial_owner,
            building.living_area(),
            building.garden_area()
        );
        self.buildings.push(building);
        Ok(id)
    }

    pub fn person(&self, id: PersonId) -> Result<&Person> {
        self.persons
            .get(id.0)
            .ok_or(TownError::PersonNotFound { id: id.0 })
    }

    pub fn building(&self, id: BuildingId) -> Result<&Building> {
        self.buildings
            .get(id.0)
            .ok_or(TownError::BuildingNotFound { id: id.0 })
    }

    pub fn owner_of(&self, building: BuildingId) -> Result<&Person> {
        let owner = self.building(building)?.owner();
        self.person(owner)
    }

    /// Buildings currently owned by `person`, in purchase order.
    ///
    /// A listed id with no registered building is reported as
    /// `OwnershipInvariant`, like in `transfer`.
    pub fn owned_buildings(&self, person: PersonId) -> Result<Vec<&Building>> {
        let owner = self.person(person)?;
        owner
            .owned_buildings()
            .iter()
            .map(|id| {
                self.buildings
                    .get(id.0)
                    .ok_or(TownError::OwnershipInvariant {
                        building: id.0,
                        owner: person.0,
                    })
            })
            .collect()
    }

    pub fn persons(&self) -> impl Iterator<Item = &Person> {
        self.persons.iter()
    }

    pub fn buildings(&self) -> impl Iterator<Item = &Building> {
        self.buildings.iter()
    }

    /// Hands `building` over to `new_owner`.
    ///
    /// Both handles are checked before anything is mutated. Transferring a
    /// building to its current owner moves it to the end of the owner's list.
    pub fn transfer(&mut self, building: BuildingId, new_owner: PersonId) -> Result<()> {
        let old_owner = self.building(building)?.owner();
        self.person(new_owner)?;

        if !self.person_mut(old_owner)?.release(building) {
            return Err(TownError::OwnershipInvariant {
                building: building.0,
                owner: old_owner.0,
            });
        }
        self.person_mut(new_owner)?.acquire(building);
        self.building_mut(building)?.set_owner(new_owner);

        tracing::debug!("Transferred {} from {} to {}", building, old_owner, new_owner);
        Ok(())
    }

    fn person_mut(&mut self, id: PersonId) -> Result<&mut Person> {
        self.persons
            .get_mut(id.0)
            .ok_or(TownError::PersonNotFound { id: id.0 })
    }

    fn building_mut(&mut self, id: BuildingId) -> Result<&mut Building> {
        self.buildings
            .get_mut(id.0)
            .ok_or(TownError::BuildingNotFound { id: id.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_building_is_listed_by_its_owner() {
        let mut cadastre = Cadastre::new();
        let alice = cadastre.add_person("Alice");
        let house = cadastre.add_house(alice, 50, 10).unwrap();

        assert_eq!(cadastre.building(house).unwrap().owner(), alice);
        assert_eq!(cadastre.person(alice).unwrap().owned_buildings(), &[house]);
        assert_eq!(cadastre.owner_of(house).unwrap().full_name(), "Alice");
    }

    #[test]
    fn test_unknown_owner_registers_nothing() {
        let mut cadastre = Cadastre::new();
        let result = cadastre.add_house(PersonId(4), 50, 10);

        assert!(matches!(result, Err(TownError::PersonNotFound { id: 4 })));
        assert_eq!(cadastre.buildings().count(), 0);
    }

    #[test]
    fn test_transfer_to_unknown_person_keeps_ownership() {
        let mut cadastre = Cadastre::new();
        let alice = cadastre.add_person("Alice");
        let house = cadastre.add_house(alice, 50, 10).unwrap();

        let result = cadastre.transfer(house, PersonId(9));
        assert!(matches!(result, Err(TownError::PersonNotFound { id: 9 })));
        assert_eq!(cadastre.building(house).unwrap().owner(), alice);
        assert!(cadastre.person(alice).unwrap().owns(house));
    }

    #[test]
    fn test_transfer_detects_broken_registry() {
        let mut cadastre = Cadastre::new();
        let alice = cadastre.add_person("Alice");
        let bob = cadastre.add_person("Bob");
        let house = cadastre.add_house(alice, 50, 10).unwrap();

        // corrupt the registry behind the cadastre's back
        cadastre.persons[alice.0].release(house);

        let result = cadastre.transfer(house, bob);
        assert!(matches!(
            result,
            Err(TownError::OwnershipInvariant { building: 0, owner: 0 })
        ));
        assert!(cadastre.person(bob).unwrap().owned_buildings().is_empty());
    }

    #[test]
    fn test_owned_buildings_reports_dangling_id() {
        let mut cadastre = Cadastre::new();
        let alice = cadastre.add_person("Alice");
        cadastre.add_house(alice, 50, 10).unwrap();

        // corrupt the registry behind the cadastre's back
        cadastre.persons[alice.0].acquire(BuildingId(42));

        let result = cadastre.owned_buildings(alice);
        assert!(matches!(
            result,
            Err(TownError::OwnershipInvariant { building: 42, owner: 0 })
        ));
    }

    #[test]
    fn test_transfer_to_current_owner_moves_to_end() {
        let mut cadastre = Cadastre::new();
        let alice = cadastre.add_person("Alice");
        let first = cadastre.add_house(alice, 50, 10).unwrap();
        let second = cadastre.add_house(alice, 70, 0).unwrap();

        cadastre.transfer(first, alice).unwrap();
        assert_eq!(
            cadastre.person(alice).unwrap().owned_buildings(),
            &[second, first]
        );
    }
}
