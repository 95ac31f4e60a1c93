use crate::core::engine::AssignmentEngine;
use crate::domain::model::{Assignment, Couple};
use crate::domain::ports::{Pipeline, RandomSource};
use crate::utils::error::{Result, SantaError};

/// Runs fresh attempts until one completes. Dead-ended attempts are an
/// expected outcome of the greedy random search and are only logged at
/// debug level; each retry starts from a brand-new engine.
///
/// With `max_attempts` unset the loop is unbounded, so an input with no
/// valid assignment (a single couple, say) never returns.
pub fn run_draw<R: RandomSource + ?Sized>(
    couples: &[Couple],
    rng: &mut R,
    max_attempts: Option<u64>,
) -> Result<Assignment> {
    let mut attempt: u64 = 0;
    loop {
        attempt += 1;
        match AssignmentEngine::new(couples.to_vec()).run(rng) {
            Ok(assignment) => {
                tracing::debug!("Attempt {} produced a complete assignment", attempt);
                return Ok(assignment);
            }
            Err(err) if err.is_retryable() => {
                tracing::debug!("Attempt {} dead-ended: {}", attempt, err);
                if let Some(cap) = max_attempts {
                    if attempt >= cap {
                        return Err(SantaError::AttemptsExhausted { attempts: attempt });
                    }
                }
            }
            Err(err) => return Err(err),
        }
    }
}

/// Orchestrates the three pipeline stages with progress logging.
pub struct DrawRunner<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DrawRunner<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&mut self) -> Result<Assignment> {
        tracing::info!("Loading couples...");
        let couples = self.pipeline.extract()?;
        tracing::info!("Loaded {} couples", couples.len());

        tracing::info!("Drawing secret santas...");
        let assignment = self.pipeline.draw(couples)?;
        tracing::info!("Matched {} secret santas", assignment.len());

        self.pipeline.emit(&assignment)?;

        Ok(assignment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::SeededRng;
    use crate::domain::model::Couple;
    use std::collections::HashSet;

    #[test]
    fn test_run_draw_eventually_succeeds_for_three_couples() {
        let couples = vec![
            Couple::new("A", "B"),
            Couple::new("C", "D"),
            Couple::new("E", "F"),
        ];
        let mut rng = SeededRng::new(42);
        let assignment = run_draw(&couples, &mut rng, Some(1000)).unwrap();

        assert_eq!(assignment.len(), 6);
        let givers: HashSet<&str> = assignment.iter().map(|p| p.giver.as_str()).collect();
        let recipients: HashSet<&str> = assignment.iter().map(|p| p.recipient.as_str()).collect();
        assert_eq!(givers.len(), 6);
        assert_eq!(recipients.len(), 6);
    }

    #[test]
    fn test_run_draw_gives_up_at_the_attempt_cap() {
        // A single couple has no valid assignment; the cap must turn the
        // otherwise endless retry loop into an error.
        let couples = vec![Couple::new("A", "B")];
        let mut rng = SeededRng::new(3);
        let err = run_draw(&couples, &mut rng, Some(25)).unwrap_err();
        match err {
            SantaError::AttemptsExhausted { attempts } => assert_eq!(attempts, 25),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_attempts_are_independent() {
        // Failures must not poison later attempts: run a batch of draws on
        // the same registry and check each result independently satisfies
        // the full-coverage property.
        let couples = vec![Couple::new("A", "B"), Couple::new("C", "D")];
        let mut rng = SeededRng::new(9);
        for _ in 0..20 {
            let assignment = run_draw(&couples, &mut rng, Some(1000)).unwrap();
            assert_eq!(assignment.len(), 4);
            for pairing in &assignment {
                assert_ne!(pairing.giver, pairing.recipient);
            }
        }
    }
}
