use crate::domain::ports::Surface;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PersonId(pub(crate) usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BuildingId(pub(crate) usize);

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "person#{}", self.0)
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "building#{}", self.0)
    }
}

// 不記錄房間數或陽台面積：課稅用不到
#[derive(Debug, Clone)]
pub struct Person {
    id: PersonId,
    full_name: String,
    owned_buildings: Vec<BuildingId>,
}

impl Person {
    pub(crate) fn new(id: PersonId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            owned_buildings: Vec::new(),
        }
    }

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Buildings owned by this person, in purchase order.
    pub fn owned_buildings(&self) -> &[BuildingId] {
        &self.owned_buildings
    }

    pub fn owns(&self, building: BuildingId) -> bool {
        self.owned_buildings.contains(&building)
    }

    pub(crate) fn acquire(&mut self, building: BuildingId) {
        self.owned_buildings.push(building);
    }

    /// Returns `false` when the building was not listed.
    pub(crate) fn release(&mut self, building: BuildingId) -> bool {
        match self.owned_buildings.iter().position(|b| *b == building) {
            Some(pos) => {
                self.owned_buildings.remove(pos);
                true
            }
            None => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appartment {
    /// Living area in m².
    pub living_area: u32,
}

impl Appartment {
    pub fn new(living_area: u32) -> Self {
        Self { living_area }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildingKind {
    House { living_area: u32, garden_area: u32 },
    AppartmentBuilding { appartments: Vec<Appartment> },
}

impl BuildingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildingKind::House { .. } => "house",
            BuildingKind::AppartmentBuilding { .. } => "appartment_building",
        }
    }
}

impl Surface for BuildingKind {
    fn living_area(&self) -> u64 {
        match self {
            BuildingKind::House { living_area, .. } => u64::from(*living_area),
            BuildingKind::AppartmentBuilding { appartments } => appartments
                .iter()
                .map(|a| u64::from(a.living_area))
                .sum::<u64>(),
        }
    }

    fn garden_area(&self) -> u64 {
        match self {
            BuildingKind::House { garden_area, .. } => u64::from(*garden_area),
            // no gardens for appartment buildings in this town
            BuildingKind::AppartmentBuilding { .. } => 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Building {
    id: BuildingId,
    owner: PersonId,
    kind: BuildingKind,
}

impl Building {
    pub(crate) fn new(id: BuildingId, owner: PersonId, kind: BuildingKind) -> Self {
        Self { id, owner, kind }
    }

    pub fn id(&self) -> BuildingId {
        self.id
    }

    pub fn owner(&self) -> PersonId {
        self.owner
    }

    pub fn kind(&self) -> &BuildingKind {
        &self.kind
    }

    /// Appartments of an appartment building, empty for a house.
    pub fn appartments(&self) -> &[Appartment] {
        match &self.kind {
            BuildingKind::AppartmentBuilding { appartments } => appartments.as_slice(),
            BuildingKind::House { .. } => &[],
        }
    }

    pub(crate) fn set_owner(&mut self, owner: PersonId) {
        self.owner = owner;
    }
}

impl Surface for Building {
    fn living_area(&self) -> u64 {
        self.kind.living_area()
    }

    fn garden_area(&self) -> u64 {
        self.kind.garden_area()
    }
}
