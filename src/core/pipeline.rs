use crate::core::draw::run_draw;
use crate::core::{Assignment, ConfigProvider, Couple, Pipeline, RandomSource, Storage};
use crate::utils::error::{Result, SantaError};
use crate::utils::validation::validate_couples;
use std::path::Path;

/// Standard wiring: couples come from a JSON file behind the storage port,
/// the draw runs on the injected randomness source, and the result is logged
/// and optionally written back out as JSON or CSV.
pub struct SantaPipeline<S: Storage, C: ConfigProvider, R: RandomSource> {
    storage: S,
    config: C,
    rng: R,
}

impl<S: Storage, C: ConfigProvider, R: RandomSource> SantaPipeline<S, C, R> {
    pub fn new(storage: S, config: C, rng: R) -> Self {
        Self {
            storage,
            config,
            rng,
        }
    }

    fn render_csv(&self, assignment: &Assignment) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["giver", "recipient"])?;
        for pairing in assignment {
            writer.write_record([&pairing.giver, &pairing.recipient])?;
        }
        writer
            .into_inner()
            .map_err(|e| SantaError::CsvError(e.into_error().into()))
    }
}

impl<S: Storage, C: ConfigProvider, R: RandomSource> Pipeline for SantaPipeline<S, C, R> {
    fn extract(&self) -> Result<Vec<Couple>> {
        tracing::debug!("Reading couples from: {}", self.config.pairs_file());
        let raw = self.storage.read_file(self.config.pairs_file())?;
        let couples: Vec<Couple> = serde_json::from_slice(&raw)?;

        validate_couples(&couples)?;
        if couples.len() < 2 {
            // Accepted input, but no valid assignment can exist; without an
            // attempt cap the draw stage will retry forever.
            tracing::warn!(
                "Only {} couple(s) in {}; the draw may never finish",
                couples.len(),
                self.config.pairs_file()
            );
        }

        Ok(couples)
    }

    fn draw(&mut self, couples: Vec<Couple>) -> Result<Assignment> {
        run_draw(&couples, &mut self.rng, self.config.max_attempts())
    }

    fn emit(&self, assignment: &Assignment) -> Result<()> {
        for pairing in assignment {
            tracing::info!("{} is secret santa of {}", pairing.giver, pairing.recipient);
        }

        if let Some(path) = self.config.output_path() {
            let is_csv = Path::new(path)
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));
            let data = if is_csv {
                self.render_csv(assignment)?
            } else {
                serde_json::to_vec_pretty(assignment)?
            };
            self.storage.write_file(path, &data)?;
            tracing::info!("Result saved to: {}", path);
        }

        Ok(())
    }
}
