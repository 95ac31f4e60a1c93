use crate::domain::model::{Assignment, Couple, Pairing, Participant};
use crate::domain::ports::RandomSource;
use crate::utils::error::{Result, SantaError};
use std::collections::HashSet;

/// One attempt at a complete draw. Holds the couple registry plus the two
/// shrinking candidate pools; consumed by [`run`](Self::run) so no state from
/// an aborted attempt can leak into the next one.
pub struct AssignmentEngine {
    couples: Vec<Couple>,
    givers_left: Vec<Participant>,
    recipients_left: Vec<Participant>,
    pairings: Vec<Pairing>,
}

impl AssignmentEngine {
    /// Flattens the couples (registry order, then within-couple order) into
    /// the initial giver and recipient pools. The registry is taken as-is;
    /// disjointness is the caller's responsibility.
    pub fn new(couples: Vec<Couple>) -> Self {
        let mut givers_left = Vec::with_capacity(couples.len() * 2);
        for couple in &couples {
            givers_left.push(couple.0.clone());
            givers_left.push(couple.1.clone());
        }
        let recipients_left = givers_left.clone();
        let pairings = Vec::with_capacity(recipients_left.len());

        Self {
            couples,
            givers_left,
            recipients_left,
            pairings,
        }
    }

    fn couple_of(&self, person: &str) -> Option<&Couple> {
        self.couples.iter().find(|c| c.contains(person))
    }

    /// Draws random recipients for `giver` until one qualifies (not the giver,
    /// not the giver's partner), removing it from the pool. Each pool index is
    /// examined at most once, so the call makes at most one try per remaining
    /// recipient before failing.
    fn search_recipient<R: RandomSource + ?Sized>(
        &mut self,
        rng: &mut R,
        giver: &str,
    ) -> Result<Participant> {
        let own_couple = self.couple_of(giver).cloned();
        let pool_size = self.recipients_left.len();
        let mut tried: HashSet<usize> = HashSet::new();

        while tried.len() < pool_size {
            let mut index = rng.pick_index(pool_size);
            while tried.contains(&index) {
                index = rng.pick_index(pool_size);
            }
            tried.insert(index);

            let candidate = &self.recipients_left[index];
            let blocked = candidate == giver
                || own_couple
                    .as_ref()
                    .map_or(false, |couple| couple.contains(candidate));
            if !blocked {
                return Ok(self.recipients_left.remove(index));
            }
        }

        Err(SantaError::NoRecipientAvailable {
            giver: giver.to_string(),
        })
    }

    /// Pairs every remaining giver with a recipient, or fails on the first
    /// giver whose whole pool is blocked. No backtracking: a failure aborts
    /// the attempt and the caller starts over with a fresh engine.
    pub fn run<R: RandomSource + ?Sized>(mut self, rng: &mut R) -> Result<Assignment> {
        while let Some(giver) = self.givers_left.pop() {
            let recipient = self.search_recipient(rng, &giver)?;
            self.pairings.push(Pairing { giver, recipient });
        }
        Ok(Assignment {
            pairings: self.pairings,
        })
    }
}
