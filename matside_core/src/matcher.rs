//! Two-round greedy matcher.
//!
//! Round one walks the weight-sorted pool with two cursors and pairs
//! adjacent athletes from different schools. Round two gives every athlete
//! left over a second chance against whoever is still available, ignoring
//! school. The result is greedy, not optimal: some pairable athletes may
//! stay unmatched.

use crate::{Athlete, Match, Pool, Round, SafetyRule};

/// Matches made in one round plus the athletes it could not place
#[derive(Clone, Debug, Default)]
pub struct RoundOutcome {
    pub matches: Vec<Match>,
    pub unmatched: Vec<Athlete>,
}

/// Final result of pairing a roster
#[derive(Clone, Debug, Default)]
pub struct Pairings {
    /// Round one matches followed by round two matches
    pub matches: Vec<Match>,
    /// Athletes with no partner after both rounds, in weight order
    pub unmatched: Vec<Athlete>,
}

impl Pairings {
    /// Athletes accounted for, paired or not
    pub fn athlete_count(&self) -> usize {
        self.matches.len() * 2 + self.unmatched.len()
    }

    pub fn matches_in(&self, round: Round) -> impl Iterator<Item = &Match> + '_ {
        self.matches.iter().filter(move |m| m.round == round)
    }
}

/// Run both rounds over a roster
pub fn pair_roster(athletes: Vec<Athlete>, rule: &SafetyRule) -> Pairings {
    let mut pool = Pool::new(athletes);
    tracing::info!("Pairing {} athletes", pool.total());

    let first = first_round(&mut pool, rule);
    tracing::info!(
        "Round 1: {} matches, {} athletes left",
        first.matches.len(),
        first.unmatched.len()
    );

    let second = second_round(&mut pool, &first.unmatched, rule);
    tracing::info!(
        "Round 2: {} matches, {} athletes without a match",
        second.matches.len(),
        second.unmatched.len()
    );

    let mut matches = first.matches;
    matches.extend(second.matches);

    Pairings {
        matches,
        unmatched: second.unmatched,
    }
}

/// Round one: adjacent-weight pairing across schools
///
/// `lo` is the lightest athlete still looking for a partner and `hi` the
/// candidate, both counted over available athletes only. A successful
/// pairing consumes both and leaves the cursors where they are, so the
/// next candidate is whichever athlete now sits at position `hi`. If a
/// pairing leaves `hi` past the available athletes, the round is over.
/// `lo` is abandoned once `hi` runs past the full roster size or a
/// candidate is already too heavy, since everyone after it is heavier
/// still.
pub fn first_round(pool: &mut Pool, rule: &SafetyRule) -> RoundOutcome {
    let mut matches = Vec::new();
    let mut lo = 0;
    let mut hi = 1;

    while lo < hi && hi < pool.len() {
        let (a_slot, b_slot) = match (pool.slot_at(lo), pool.slot_at(hi)) {
            (Some(a), Some(b)) => (a, b),
            _ => break,
        };

        let a = pool.get(a_slot);
        let b = pool.get(b_slot);
        let pairable = rule.is_safe_match(a, b) && !a.same_school(b);
        let past_cutoff = !rule.is_safe_match(b, a);

        if pairable {
            tracing::debug!("Round 1 match: {} vs {}", a, b);
            matches.push(Match::new(a.clone(), b.clone(), Round::First));
            pool.consume(b_slot);
            pool.consume(a_slot);
        } else {
            hi += 1;
        }

        if hi >= pool.total() || past_cutoff {
            lo += 1;
            hi = lo + 1;
        }
    }

    RoundOutcome {
        matches,
        unmatched: pool.live().cloned().collect(),
    }
}

/// Round two: fallback pairing for round one leftovers
///
/// `pool` is the same working pool round one consumed from, threaded
/// through every iteration; `unmatched` is only read. Each leftover takes
/// the first available safe partner in weight order, regardless of school,
/// so earlier leftovers get first pick. A leftover already taken as
/// someone else's partner in this round is skipped.
pub fn second_round(pool: &mut Pool, unmatched: &[Athlete], rule: &SafetyRule) -> RoundOutcome {
    let mut outcome = RoundOutcome::default();

    for athlete in unmatched {
        let own_slot = pool.slot_of(athlete.id());
        if let Some(slot) = own_slot {
            if pool.is_consumed(slot) {
                tracing::debug!("{} already paired this round", athlete);
                continue;
            }
        }

        let partner_slot = pool
            .live_slots()
            .find(|&slot| Some(slot) != own_slot && rule.is_safe_match(athlete, pool.get(slot)));

        match partner_slot {
            Some(slot) => {
                let partner = pool.get(slot).clone();
                tracing::debug!("Round 2 match: {} vs {}", athlete, partner);
                pool.consume(slot);
                if let Some(own) = own_slot {
                    pool.consume(own);
                }
                outcome
                    .matches
                    .push(Match::new(athlete.clone(), partner, Round::Second));
            }
            None => {
                tracing::debug!("No safe partner for {}", athlete);
                outcome.unmatched.push(athlete.clone());
            }
        }
    }

    outcome
}
