// src/engine/gaps.rs

use crate::{
    config::DEFAULT_MASTERY_THRESHOLD,
    engine::scoring::{ScoreSheet, percentage},
    models::{assessment::TopicBreakdown, course::Topic, knowledge_gap::NewKnowledgeGap},
};

/// The mastery threshold applied per topic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MasteryPolicy {
    pub mastery_threshold: f64,
}

impl MasteryPolicy {
    pub fn new(mastery_threshold: f64) -> Self {
        Self { mastery_threshold }
    }

    /// Strictly below: a topic sitting exactly on the threshold is mastered.
    pub fn is_gap(&self, topic_percentage: f64) -> bool {
        topic_percentage < self.mastery_threshold
    }
}

impl Default for MasteryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MASTERY_THRESHOLD)
    }
}

/// Builds one entry per course topic that received at least one graded answer,
/// in the order the catalog lists the topics.
///
/// Answers graded against topics outside `topics` still count toward the overall
/// score but never show up here.
pub fn topic_breakdown(topics: &[Topic], sheet: &ScoreSheet) -> Vec<TopicBreakdown> {
    topics
        .iter()
        .filter_map(|topic| {
            let results = sheet.by_topic.get(&topic.id)?;
            if results.is_empty() {
                return None;
            }

            let correct = results.iter().filter(|&&r| r).count();
            let total = results.len();

            Some(TopicBreakdown {
                topic_id: topic.id,
                topic_name: topic.name.clone(),
                correct,
                total,
                percentage: percentage(correct, total),
            })
        })
        .collect()
}

/// One new gap for every breakdown entry below the threshold.
pub fn detect_gaps(
    student_id: i64,
    breakdown: &[TopicBreakdown],
    policy: &MasteryPolicy,
) -> Vec<NewKnowledgeGap> {
    breakdown
        .iter()
        .filter(|entry| policy.is_gap(entry.percentage))
        .map(|entry| NewKnowledgeGap {
            student_id,
            topic_id: entry.topic_id,
            weakness_score: entry.percentage,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn topic(id: i64, name: &str) -> Topic {
        Topic {
            id,
            course_id: 1,
            name: name.to_string(),
        }
    }

    fn sheet(by_topic: Vec<(i64, Vec<bool>)>) -> ScoreSheet {
        let by_topic: HashMap<i64, Vec<bool>> = by_topic.into_iter().collect();
        let answered = by_topic.values().map(Vec::len).sum();
        let correct = by_topic.values().flatten().filter(|&&r| r).count();
        ScoreSheet {
            correct,
            answered,
            by_topic,
        }
    }

    #[test]
    fn test_breakdown_follows_catalog_order_and_skips_unanswered() {
        let topics = vec![topic(3, "Graphs"), topic(1, "Arrays"), topic(2, "SQL")];
        let sheet = sheet(vec![(1, vec![true, false]), (2, vec![true, true])]);

        let breakdown = topic_breakdown(&topics, &sheet);
        let ids: Vec<i64> = breakdown.iter().map(|b| b.topic_id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(breakdown[0].topic_name, "Arrays");
        assert_eq!(breakdown[0].correct, 1);
        assert_eq!(breakdown[0].total, 2);
        assert_eq!(breakdown[0].percentage, 50.0);
        assert_eq!(breakdown[1].percentage, 100.0);
    }

    #[test]
    fn test_breakdown_ignores_topics_outside_course() {
        let topics = vec![topic(1, "Arrays")];
        let sheet = sheet(vec![(1, vec![true]), (42, vec![false])]);

        let breakdown = topic_breakdown(&topics, &sheet);
        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].topic_id, 1);
    }

    #[test]
    fn test_threshold_is_strict() {
        let policy = MasteryPolicy::default();
        assert!(policy.is_gap(59.999));
        assert!(!policy.is_gap(60.0));
        assert!(!policy.is_gap(100.0));
    }

    #[test]
    fn test_detect_gaps_uses_policy() {
        let topics = vec![topic(1, "Arrays"), topic(2, "SQL")];
        // 3/5 = 60% and 4/5 = 80%
        let sheet = sheet(vec![
            (1, vec![true, true, true, false, false]),
            (2, vec![true, true, true, true, false]),
        ]);
        let breakdown = topic_breakdown(&topics, &sheet);

        let default_gaps = detect_gaps(7, &breakdown, &MasteryPolicy::default());
        assert!(default_gaps.is_empty());

        let strict_gaps = detect_gaps(7, &breakdown, &MasteryPolicy::new(85.0));
        assert_eq!(strict_gaps.len(), 2);
        assert_eq!(
            strict_gaps[0],
            NewKnowledgeGap {
                student_id: 7,
                topic_id: 1,
                weakness_score: 60.0,
            }
        );
        assert_eq!(strict_gaps[1].weakness_score, 80.0);
    }
}
