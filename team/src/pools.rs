//! Per-tier species pools

use std::collections::HashMap;

use dojo_battle::{PowerTier, RandomSource, SpeciesCatalog};

use crate::error::GenerationError;

/// Species ids grouped by power tier, computed once per generation run
#[derive(Debug, Clone, Default)]
pub struct TierPools {
    pools: HashMap<PowerTier, Vec<u16>>,
}

impl TierPools {
    pub fn from_catalog(catalog: &SpeciesCatalog) -> Self {
        let pools = PowerTier::ALL
            .iter()
            .map(|&tier| (tier, catalog.ids_in_tier(tier)))
            .collect();
        Self { pools }
    }

    pub fn pool(&self, tier: PowerTier) -> &[u16] {
        self.pools.get(&tier).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Draw `count` distinct species of a tier from a freshly shuffled copy
    /// of its pool.
    pub fn draw(
        &self,
        tier: PowerTier,
        count: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<u16>, GenerationError> {
        let pool = self.pool(tier);
        if count > pool.len() {
            return Err(GenerationError::PoolExhausted {
                tier,
                requested: count,
                available: pool.len(),
            });
        }

        let mut shuffled = pool.to_vec();
        shuffle(&mut shuffled, rng);
        shuffled.truncate(count);
        Ok(shuffled)
    }
}

/// Fisher-Yates
fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.index(i + 1);
        items.swap(i, j);
    }
}
