//! Encounters (game levels and league levels) and their roster slots

use super::pokemon::Ivs;

pub type EncounterId = u64;
pub type SlotId = u32;

/// The two progression tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EncounterKind {
    Game,
    League,
}

impl EncounterKind {
    pub fn from_league_flag(league: bool) -> Self {
        if league {
            EncounterKind::League
        } else {
            EncounterKind::Game
        }
    }

    pub fn is_league(&self) -> bool {
        matches!(self, EncounterKind::League)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EncounterKind::Game => "game",
            EncounterKind::League => "league",
        }
    }
}

impl std::fmt::Display for EncounterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a first clear unlocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unlock {
    Accessory(u32),
    Badge(u32),
}

impl Unlock {
    /// Wire label, e.g. "accessory:3" or "badge:8"
    pub fn label(&self) -> String {
        match self {
            Unlock::Accessory(id) => format!("accessory:{}", id),
            Unlock::Badge(id) => format!("badge:{}", id),
        }
    }
}

/// One AI creature in an encounter roster
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterSlot {
    pub id: SlotId,

    /// Switch-in sequence (1 first)
    pub order: u32,

    /// Pokedex id
    pub species: u16,

    pub ivs: Ivs,
    pub ps: u32,
    pub max_ps: u32,
    pub dead: bool,
}

impl EncounterSlot {
    /// A slot at full PS
    pub fn new(id: SlotId, order: u32, species: u16, ivs: Ivs, max_ps: u32) -> Self {
        Self {
            id,
            order,
            species,
            ivs,
            ps: max_ps,
            max_ps,
            dead: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    /// Apply damage. Returns true if this hit knocked the slot out.
    pub fn take_damage(&mut self, damage: u32) -> bool {
        if self.dead {
            return false;
        }
        self.ps = self.ps.saturating_sub(damage);
        if self.ps == 0 {
            self.dead = true;
        }
        self.dead
    }

    pub fn restore(&mut self) {
        self.ps = self.max_ps;
        self.dead = false;
    }
}

/// A game level or league level
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encounter {
    pub id: EncounterId,
    pub kind: EncounterKind,

    /// Level number (1-31 for games, 1-5 for the league)
    pub number: u32,

    /// League leader name
    pub leader: Option<String>,

    pub reward: u32,
    pub unlock: Option<Unlock>,
    pub blocked: bool,
    pub passed: bool,
    pub active: bool,

    /// Roster, kept sorted by `order`
    pub slots: Vec<EncounterSlot>,
}

impl Encounter {
    pub fn new(id: EncounterId, kind: EncounterKind, number: u32) -> Self {
        Self {
            id,
            kind,
            number,
            leader: None,
            reward: 0,
            unlock: None,
            blocked: false,
            passed: false,
            active: false,
            slots: Vec::new(),
        }
    }

    pub fn slot(&self, id: SlotId) -> Option<&EncounterSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    pub fn slot_mut(&mut self, id: SlotId) -> Option<&mut EncounterSlot> {
        self.slots.iter_mut().find(|s| s.id == id)
    }

    /// The next living slot in switch-in order
    pub fn current_enemy(&self) -> Option<&EncounterSlot> {
        self.slots.iter().find(|s| s.is_alive())
    }

    pub fn all_defeated(&self) -> bool {
        self.slots.iter().all(|s| s.dead)
    }

    pub fn has_species(&self, species: u16) -> bool {
        self.slots.iter().any(|s| s.species == species)
    }

    /// Restore every slot to full PS
    pub fn reset_slots(&mut self) {
        for slot in &mut self.slots {
            slot.restore();
        }
    }

    pub fn sort_slots(&mut self) {
        self.slots.sort_by_key(|s| s.order);
    }
}
