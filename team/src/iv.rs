//! Random IV distribution

use dojo_battle::{Ivs, RandomSource, MAX_IV};

/// Spread `total` points over the three IVs.
///
/// Each point goes to a uniformly chosen stat; a point that lands on a stat
/// already at 31 is lost.
pub fn distribute_iv(total: u32, rng: &mut dyn RandomSource) -> Ivs {
    let mut ivs = Ivs::default();
    for _ in 0..total {
        if let Some(stat) = ivs.stat_mut(rng.index(3)) {
            if *stat < MAX_IV {
                *stat += 1;
            }
        }
    }
    ivs
}
