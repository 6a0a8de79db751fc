//! League roster and league level generation

use dojo_battle::{
    Encounter, EncounterKind, EncounterSlot, Ivs, RandomSource, SpeciesCatalog, Unlock, MAX_IV,
};
use serde::{Deserialize, Serialize};

use crate::error::GenerationError;

/// IV given to the one weakened stat of a league creature
pub const LEAGUE_WEAK_IV: u32 = 16;

/// Power used for league PS, regardless of the species tier
pub const LEAGUE_POWER: u32 = 10;

/// One fixed league opponent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueLeader {
    pub number: u32,
    pub name: String,
    /// Pokedex ids in switch-in order
    pub species: Vec<u16>,
    pub reward: u32,
    #[serde(default)]
    pub unlock: Option<Unlock>,
    /// Blocked until every other leader is beaten
    #[serde(default)]
    pub champion: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueRoster {
    pub leaders: Vec<LeagueLeader>,
}

impl LeagueRoster {
    /// Lorelei, Bruno, Agatha, Lance and the champion
    pub fn standard() -> Self {
        let leaders = STANDARD_LEAGUE
            .iter()
            .enumerate()
            .map(|(i, &(name, species, reward, champion))| LeagueLeader {
                number: i as u32 + 1,
                name: name.to_string(),
                species: species.to_vec(),
                reward,
                unlock: champion.then_some(Unlock::Badge(CHAMPION_BADGE)),
                champion,
            })
            .collect();
        Self { leaders }
    }

    pub fn from_json(body: &str) -> Result<Self, GenerationError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn champion(&self) -> Option<&LeagueLeader> {
        self.leaders.iter().find(|l| l.champion)
    }
}

const CHAMPION_BADGE: u32 = 8;

#[rustfmt::skip]
static STANDARD_LEAGUE: &[(&str, &[u16], u32, bool)] = &[
    ("Lorelei", &[87, 91, 131], 1_000, false),
    ("Bruno",   &[95, 107, 68], 1_200, false),
    ("Agatha",  &[94, 93, 24],  1_400, false),
    ("Lance",   &[130, 142, 149], 1_600, false),
    ("Blue",    &[18, 65, 6],   5_000, true),
];

/// Generate one encounter per league leader.
///
/// Every slot gets 31 in two stats and 16 in a uniformly chosen third.
/// Champions start blocked.
pub fn generate_league(
    roster: &LeagueRoster,
    catalog: &SpeciesCatalog,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Encounter>, GenerationError> {
    let mut league = Vec::with_capacity(roster.leaders.len());

    for leader in &roster.leaders {
        let mut encounter = Encounter::new(0, EncounterKind::League, leader.number);
        encounter.leader = Some(leader.name.clone());
        encounter.reward = leader.reward;
        encounter.unlock = leader.unlock;
        encounter.blocked = leader.champion;

        for (i, &pokedex_id) in leader.species.iter().enumerate() {
            let species = catalog
                .get(pokedex_id)
                .ok_or(GenerationError::UnknownSpecies(pokedex_id))?;
            let order = i as u32 + 1;

            let mut ivs = Ivs::new(MAX_IV, MAX_IV, MAX_IV);
            if let Some(stat) = ivs.stat_mut(rng.index(3)) {
                *stat = LEAGUE_WEAK_IV;
            }
            let max_ps = LEAGUE_POWER.max(species.power.value()) * 30 + ivs.ps * 2;
            encounter
                .slots
                .push(EncounterSlot::new(order, order, pokedex_id, ivs, max_ps));
        }
        league.push(encounter);
    }

    tracing::info!(leaders = league.len(), "league generated");
    Ok(league)
}
