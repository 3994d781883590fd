//! AI platform visibility assessment.
//!
//! Every platform score is a weighted fold over the measured signals; the
//! weights, presence thresholds and recommendation rules are plain
//! configuration data so recalibration never touches the scoring code.

use std::collections::BTreeMap;

use crate::domain::{Platform, PlatformScore, Presence, VisibilityFactors, VisibilityReport};
use crate::signals::SignalSource;

/// Weight vector applied to the signals for one platform.
///
/// Weights sum to 1.0; topical relevance feeds recommendations but is not
/// weighted into platform scores.
#[derive(Debug, Clone, Copy)]
struct PlatformWeights {
    content: f64,
    structured: f64,
    citation: f64,
    authority: f64,
    freshness: f64,
}

const PLATFORM_WEIGHTS: [(Platform, PlatformWeights); 4] = [
    (
        Platform::Chatgpt,
        PlatformWeights {
            content: 0.3,
            structured: 0.2,
            citation: 0.25,
            authority: 0.15,
            freshness: 0.1,
        },
    ),
    (
        Platform::Claude,
        PlatformWeights {
            content: 0.35,
            structured: 0.15,
            citation: 0.2,
            authority: 0.2,
            freshness: 0.1,
        },
    ),
    (
        Platform::Gemini,
        PlatformWeights {
            content: 0.25,
            structured: 0.25,
            citation: 0.2,
            authority: 0.2,
            freshness: 0.1,
        },
    ),
    (
        Platform::Perplexity,
        PlatformWeights {
            content: 0.2,
            structured: 0.15,
            citation: 0.25,
            authority: 0.25,
            freshness: 0.15,
        },
    ),
];

/// Signal thresholds that earn a qualitative note on a platform score.
const FACTOR_NOTES: [(fn(&VisibilityFactors) -> u8, u8, &str); 4] = [
    (|f| f.content_quality, 80, "High-quality content detected"),
    (|f| f.structured_data, 70, "Good structured data implementation"),
    (|f| f.citation_potential, 75, "Strong citation potential"),
    (|f| f.authority_signals, 70, "Good authority signals"),
];

/// Maximum number of recommendations returned per report.
const MAX_RECOMMENDATIONS: usize = 5;

/// Assess a domain's visibility across all AI platforms.
///
/// Total over any domain string; signal measurement is delegated to the
/// supplied [`SignalSource`].
pub fn check_visibility(domain: &str, signals: &dyn SignalSource) -> VisibilityReport {
    let factors = signals.measure(domain);
    assess(factors)
}

/// Score measured signals into a full visibility report.
pub fn assess(factors: VisibilityFactors) -> VisibilityReport {
    let mut platforms = BTreeMap::new();
    for (platform, weights) in PLATFORM_WEIGHTS {
        platforms.insert(platform, assess_platform(&factors, weights));
    }

    let overall = mean_score(&platforms);
    let recommendations = build_recommendations(&factors, &platforms);

    VisibilityReport {
        overall,
        platforms,
        factors,
        recommendations,
    }
}

/// Derive the presence bucket for a score.
pub fn presence_for(score: u8) -> Presence {
    if score >= 80 {
        Presence::Strong
    } else if score >= 60 {
        Presence::Moderate
    } else if score >= 40 {
        Presence::Weak
    } else {
        Presence::None
    }
}

/// Presentation color token for a presence bucket.
pub fn presence_color(presence: Presence) -> &'static str {
    match presence {
        Presence::Strong => "green",
        Presence::Moderate => "yellow",
        Presence::Weak => "orange",
        Presence::None => "red",
    }
}

/// Presentation icon for a presence bucket.
pub fn presence_icon(presence: Presence) -> &'static str {
    match presence {
        Presence::Strong => "✓✓",
        Presence::Moderate => "✓",
        Presence::Weak => "!",
        Presence::None => "✗",
    }
}

fn assess_platform(factors: &VisibilityFactors, weights: PlatformWeights) -> PlatformScore {
    let weighted = f64::from(factors.content_quality) * weights.content
        + f64::from(factors.structured_data) * weights.structured
        + f64::from(factors.citation_potential) * weights.citation
        + f64::from(factors.authority_signals) * weights.authority
        + f64::from(factors.freshness) * weights.freshness;
    let score = weighted.round().clamp(0.0, 100.0) as u8;

    let notes = FACTOR_NOTES
        .iter()
        .filter(|(signal, threshold, _)| signal(factors) >= *threshold)
        .map(|(_, _, note)| note.to_string())
        .collect();

    PlatformScore {
        score,
        presence: presence_for(score),
        factors: notes,
    }
}

fn mean_score(platforms: &BTreeMap<Platform, PlatformScore>) -> u8 {
    let total: u32 = platforms.values().map(|entry| u32::from(entry.score)).sum();
    (f64::from(total) / platforms.len() as f64).round() as u8
}

fn build_recommendations(
    factors: &VisibilityFactors,
    platforms: &BTreeMap<Platform, PlatformScore>,
) -> Vec<String> {
    let platform_score = |platform: Platform| {
        platforms
            .get(&platform)
            .map(|entry| entry.score)
            .unwrap_or_default()
    };

    // Evaluated in rule order; the first five hits win.
    let rules = [
        (
            factors.structured_data < 70,
            "Implement comprehensive schema markup to help AI understand your content",
        ),
        (
            factors.content_quality < 80,
            "Create more in-depth, authoritative content that AI systems prefer to cite",
        ),
        (
            factors.citation_potential < 70,
            "Add statistics, research data, and unique insights to increase citation potential",
        ),
        (
            factors.authority_signals < 70,
            "Build domain authority through quality backlinks and brand mentions",
        ),
        (
            factors.freshness < 80,
            "Update content regularly to maintain relevance in AI responses",
        ),
        (
            platform_score(Platform::Chatgpt) < 70,
            "Optimize for ChatGPT by focusing on conversational, Q&A-style content",
        ),
        (
            platform_score(Platform::Perplexity) < 70,
            "Improve Perplexity visibility with clear, factual content and proper citations",
        ),
    ];

    rules
        .into_iter()
        .filter(|(triggered, _)| *triggered)
        .map(|(_, message)| message.to_string())
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signals::SimulatedSignals;

    fn strong_factors() -> VisibilityFactors {
        VisibilityFactors {
            content_quality: 92,
            structured_data: 80,
            citation_potential: 85,
            authority_signals: 80,
            freshness: 90,
            topical_relevance: 95,
        }
    }

    fn weak_factors() -> VisibilityFactors {
        VisibilityFactors {
            content_quality: 40,
            structured_data: 30,
            citation_potential: 35,
            authority_signals: 25,
            freshness: 45,
            topical_relevance: 50,
        }
    }

    #[test]
    fn assess_covers_all_platforms() {
        let report = assess(strong_factors());
        assert_eq!(report.platforms.len(), 4);
        for platform in Platform::ALL {
            assert!(report.platforms.contains_key(&platform));
        }
    }

    #[test]
    fn platform_scores_are_weighted_sums() {
        let report = assess(strong_factors());
        // chatgpt: 92*.3 + 80*.2 + 85*.25 + 80*.15 + 90*.1 = 85.85 -> 86
        assert_eq!(report.platforms[&Platform::Chatgpt].score, 86);
        // claude: 92*.35 + 80*.15 + 85*.2 + 80*.2 + 90*.1 = 86.2 -> 86
        assert_eq!(report.platforms[&Platform::Claude].score, 86);
        // gemini: 92*.25 + 80*.25 + 85*.2 + 80*.2 + 90*.1 = 85.0 -> 85
        assert_eq!(report.platforms[&Platform::Gemini].score, 85);
        // perplexity: 92*.2 + 80*.15 + 85*.25 + 80*.25 + 90*.15 = 85.15 -> 85
        assert_eq!(report.platforms[&Platform::Perplexity].score, 85);
    }

    #[test]
    fn overall_is_rounded_mean_of_platform_scores() {
        let report = assess(strong_factors());
        let total: u32 = report
            .platforms
            .values()
            .map(|entry| u32::from(entry.score))
            .sum();
        let expected = (f64::from(total) / 4.0).round() as u8;
        assert_eq!(report.overall, expected);
    }

    #[test]
    fn presence_thresholds_are_exact() {
        assert_eq!(presence_for(80), Presence::Strong);
        assert_eq!(presence_for(79), Presence::Moderate);
        assert_eq!(presence_for(60), Presence::Moderate);
        assert_eq!(presence_for(59), Presence::Weak);
        assert_eq!(presence_for(40), Presence::Weak);
        assert_eq!(presence_for(39), Presence::None);
    }

    #[test]
    fn strong_factors_earn_all_notes() {
        let report = assess(strong_factors());
        let notes = &report.platforms[&Platform::Chatgpt].factors;
        assert_eq!(
            notes,
            &vec![
                "High-quality content detected".to_string(),
                "Good structured data implementation".to_string(),
                "Strong citation potential".to_string(),
                "Good authority signals".to_string(),
            ]
        );
    }

    #[test]
    fn strong_factors_produce_no_recommendations() {
        let report = assess(strong_factors());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn weak_factors_cap_recommendations_at_five() {
        let report = assess(weak_factors());
        assert_eq!(report.recommendations.len(), 5);
        assert_eq!(
            report.recommendations[0],
            "Implement comprehensive schema markup to help AI understand your content"
        );
        // All seven rules trigger; only the first five survive the cap.
        assert!(
            !report
                .recommendations
                .iter()
                .any(|rec| rec.contains("ChatGPT"))
        );
    }

    #[test]
    fn recommendation_rules_fire_in_order() {
        let mut factors = strong_factors();
        factors.freshness = 60;
        factors.structured_data = 65;
        let report = assess(factors);
        assert_eq!(
            report.recommendations,
            vec![
                "Implement comprehensive schema markup to help AI understand your content"
                    .to_string(),
                "Update content regularly to maintain relevance in AI responses".to_string(),
            ]
        );
    }

    #[test]
    fn simulated_reports_always_satisfy_structural_invariants() {
        let source = SimulatedSignals::new();
        for _ in 0..100 {
            let report = check_visibility("example.com", &source);
            assert!(report.overall <= 100);
            assert!(report.recommendations.len() <= MAX_RECOMMENDATIONS);
            for entry in report.platforms.values() {
                assert!(entry.score <= 100);
                assert_eq!(entry.presence, presence_for(entry.score));
            }
        }
    }

    #[test]
    fn presence_presentation_tokens_are_stable() {
        assert_eq!(presence_color(Presence::Strong), "green");
        assert_eq!(presence_color(Presence::Moderate), "yellow");
        assert_eq!(presence_color(Presence::Weak), "orange");
        assert_eq!(presence_color(Presence::None), "red");
        assert_eq!(presence_icon(Presence::Strong), "✓✓");
        assert_eq!(presence_icon(Presence::Moderate), "✓");
        assert_eq!(presence_icon(Presence::Weak), "!");
        assert_eq!(presence_icon(Presence::None), "✗");
    }
}
