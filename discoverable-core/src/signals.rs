//! Visibility signal measurement.
//!
//! Scoring and weighting live in [`crate::visibility`]; the measurement
//! itself sits behind [`SignalSource`] so the simulated sampler can be
//! swapped for real crawling and content analysis without touching the
//! scoring pipeline.

use rand::Rng;

use crate::domain::VisibilityFactors;

/// Abstraction over visibility signal measurement for testability.
#[cfg_attr(test, mockall::automock)]
pub trait SignalSource {
    /// Measure the six visibility signals for a domain.
    fn measure(&self, domain: &str) -> VisibilityFactors;
}

/// Inclusive sampling range per factor.
#[derive(Debug, Clone, Copy)]
struct SignalRanges {
    content_quality: (u8, u8),
    structured_data: (u8, u8),
    citation_potential: (u8, u8),
    authority_signals: (u8, u8),
    freshness: (u8, u8),
    topical_relevance: (u8, u8),
}

/// Ranges matching the calibration of the simulated measurement model.
const SIMULATED_RANGES: SignalRanges = SignalRanges {
    content_quality: (70, 100),
    structured_data: (60, 100),
    citation_potential: (65, 95),
    authority_signals: (55, 90),
    freshness: (70, 100),
    topical_relevance: (75, 100),
};

/// Default signal source that samples each factor uniformly from a fixed
/// range. The domain is accepted but does not bias the draws; this stands
/// in for real content and authority analysis.
#[derive(Debug, Default, Clone)]
pub struct SimulatedSignals;

impl SimulatedSignals {
    /// Create a new simulated signal source.
    pub fn new() -> Self {
        Self
    }
}

impl SignalSource for SimulatedSignals {
    fn measure(&self, _domain: &str) -> VisibilityFactors {
        let mut rng = rand::thread_rng();
        let ranges = SIMULATED_RANGES;
        VisibilityFactors {
            content_quality: sample(&mut rng, ranges.content_quality),
            structured_data: sample(&mut rng, ranges.structured_data),
            citation_potential: sample(&mut rng, ranges.citation_potential),
            authority_signals: sample(&mut rng, ranges.authority_signals),
            freshness: sample(&mut rng, ranges.freshness),
            topical_relevance: sample(&mut rng, ranges.topical_relevance),
        }
    }
}

fn sample<R: Rng>(rng: &mut R, (min, max): (u8, u8)) -> u8 {
    rng.gen_range(min..=max)
}
