//! Repurposing verdict from the raw scorer output.
//!
//! score > 0.8        → strong candidate
//! 0.5 < score ≤ 0.8  → promising
//! anything else      → low priority (covers negatives and NaN)

use theranova_common::AnalyzeResponse;

pub const STRONG_CANDIDATE: &str = "Strong candidate for repurposing.";
pub const PROMISING: &str = "Promising – further validation required.";
pub const LOW_PRIORITY: &str = "Low repurposing priority at this stage.";

pub const STRONG_THRESHOLD: f64 = 0.8;
pub const PROMISING_THRESHOLD: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Strong,
    Promising,
    Low,
}

impl Verdict {
    pub fn from_score(score: f64) -> Self {
        // NaN fails both comparisons and lands in Low.
        if score > STRONG_THRESHOLD {
            Verdict::Strong
        } else if score > PROMISING_THRESHOLD {
            Verdict::Promising
        } else {
            Verdict::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Strong => STRONG_CANDIDATE,
            Verdict::Promising => PROMISING,
            Verdict::Low => LOW_PRIORITY,
        }
    }
}

/// Map a repurposing score to its verdict text.
pub fn classify(score: f64) -> &'static str {
    Verdict::from_score(score).as_str()
}

/// Overwrite whatever verdict the scorer sent with the locally derived one.
pub fn apply_verdict(response: &mut AnalyzeResponse) -> Verdict {
    let verdict = Verdict::from_score(response.repurpose_score);
    response.overall_verdict = verdict.as_str().to_string();
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_exclusive() {
        assert_eq!(classify(0.8), PROMISING);
        assert_eq!(classify(0.800_000_1), STRONG_CANDIDATE);
        assert_eq!(classify(0.5), LOW_PRIORITY);
        assert_eq!(classify(0.500_000_1), PROMISING);
    }

    #[test]
    fn test_typical_scores() {
        assert_eq!(classify(0.93), STRONG_CANDIDATE);
        assert_eq!(classify(1.0), STRONG_CANDIDATE);
        assert_eq!(classify(0.65), PROMISING);
        assert_eq!(classify(0.2), LOW_PRIORITY);
        assert_eq!(classify(0.0), LOW_PRIORITY);
    }

    #[test]
    fn test_out_of_range_inputs_fall_through() {
        assert_eq!(classify(-0.3), LOW_PRIORITY);
        assert_eq!(classify(f64::NAN), LOW_PRIORITY);
        assert_eq!(classify(f64::NEG_INFINITY), LOW_PRIORITY);
        assert_eq!(classify(f64::INFINITY), STRONG_CANDIDATE);
        assert_eq!(classify(7.5), STRONG_CANDIDATE);
    }

    #[test]
    fn test_classification_matches_threshold_predicates() {
        // Sweep [-1.0, 2.0] in steps of 0.001.
        for i in -1000..=2000 {
            let s = i as f64 / 1000.0;
            let verdict = classify(s);
            assert_eq!(verdict == STRONG_CANDIDATE, s > 0.8, "score {}", s);
            assert_eq!(verdict == PROMISING, s > 0.5 && s <= 0.8, "score {}", s);
            if s <= 0.5 {
                assert_eq!(verdict, LOW_PRIORITY, "score {}", s);
            }
        }
    }

    #[test]
    fn test_apply_verdict_overwrites_remote_text() {
        let mut resp = AnalyzeResponse {
            molecule: "Aspirin".to_string(),
            disease: "Cancer".to_string(),
            repurpose_score: 0.9,
            overall_verdict: "Low potential - deprioritize".to_string(),
            ..Default::default()
        };
        let verdict = apply_verdict(&mut resp);
        assert_eq!(verdict, Verdict::Strong);
        assert_eq!(resp.overall_verdict, STRONG_CANDIDATE);
    }
}
