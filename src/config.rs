use crate::error::MiningError;

// Minimum support an itemset needs to count as frequent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MinSupport {
    Fraction(f64),
    Count(u32),
}

impl MinSupport {
    pub fn validate(&self) -> Result<(), MiningError> {
        match *self {
            MinSupport::Fraction(f) if !(0.0..=1.0).contains(&f) => {
                Err(MiningError::InvalidConfiguration(format!(
                    "minimum support {} must be in range [0,1]",
                    f
                )))
            }
            _ => Ok(()),
        }
    }

    // Resolves to the absolute count an itemset must reach. Fractions are
    // truncated, and the result is never below 1.
    pub fn min_count(&self, num_transactions: usize) -> u32 {
        let count = match *self {
            MinSupport::Fraction(f) => (f * num_transactions as f64) as u32,
            MinSupport::Count(count) => count,
        };
        count.max(1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    // Only applied when presenting rules; mining itself ignores it.
    pub min_confidence: f64,
}

impl MiningConfig {
    pub fn new(min_support: MinSupport, min_confidence: f64) -> Result<MiningConfig, MiningError> {
        let config = MiningConfig {
            min_support,
            min_confidence,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), MiningError> {
        self.min_support.validate()?;
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(MiningError::InvalidConfiguration(format!(
                "minimum confidence {} must be in range [0,1]",
                self.min_confidence
            )));
        }
        Ok(())
    }
}
