//! Target-hours recommendation strategies.
//!
//! A recommendation maps a history and a topic to a suggested daily target.
//! The trait keeps strategies swappable: the aggregation core never depends
//! on how a suggestion is produced, so a fitted model can replace the
//! average-based default without touching anything else.

use crate::format::round2;
use crate::types::StudySession;

/// A swappable source of target-hours suggestions.
pub trait TargetStrategy {
    /// Human-readable strategy name for logging and display.
    fn name(&self) -> &'static str;

    /// Suggest a daily target for `topic`, or `None` when the history
    /// carries no usable signal.
    fn recommend(&self, history: &[StudySession], topic: &str) -> Option<f64>;
}

/// Default strategy: the topic's own average session length, falling back
/// to the overall average when the topic has too few qualifying sessions.
#[derive(Debug, Clone)]
pub struct TopicAverage {
    /// Minimum qualifying sessions before a topic's own average is trusted
    pub min_topic_samples: usize,
}

impl Default for TopicAverage {
    fn default() -> Self {
        Self {
            min_topic_samples: 3,
        }
    }
}

impl TopicAverage {
    pub fn new(min_topic_samples: usize) -> Self {
        Self { min_topic_samples }
    }

    fn mean_hours<'a>(sessions: impl Iterator<Item = &'a StudySession>) -> Option<f64> {
        let mut sum = 0.0;
        let mut count = 0usize;
        for s in sessions {
            sum += s.hours;
            count += 1;
        }
        if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        }
    }
}

impl TargetStrategy for TopicAverage {
    fn name(&self) -> &'static str {
        "topic-average"
    }

    fn recommend(&self, history: &[StudySession], topic: &str) -> Option<f64> {
        let topic = topic.trim();
        let qualifying: Vec<&StudySession> =
            history.iter().filter(|s| s.qualifies()).collect();

        let topic_sessions: Vec<&StudySession> = qualifying
            .iter()
            .copied()
            .filter(|s| s.topic_key() == Some(topic))
            .collect();

        let mean = if topic_sessions.len() >= self.min_topic_samples {
            Self::mean_hours(topic_sessions.into_iter())
        } else {
            tracing::debug!(
                topic,
                samples = topic_sessions.len(),
                threshold = self.min_topic_samples,
                "Too few topic samples, falling back to overall average"
            );
            Self::mean_hours(qualifying.into_iter())
        }?;

        Some(round2(mean))
    }
}
