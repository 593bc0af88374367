use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

pub const UNTITLED_NOTE: &str = "Untitled Note";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    /// Day the note is filed under. Grouping truncates it to midnight in the
    /// reader's local zone; see `Clock::local_day`.
    pub date: DateTime<FixedOffset>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_notes: usize,
    pub unique_days: usize,
    pub current_streak: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneKind {
    Total,
    Streak,
    Days,
}

impl MilestoneKind {
    /// The statistic this kind of milestone tracks.
    pub fn measure(self, stats: &Statistics) -> usize {
        match self {
            MilestoneKind::Total => stats.total_notes,
            MilestoneKind::Streak => stats.current_streak,
            MilestoneKind::Days => stats.unique_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub requirement: usize,
    #[serde(rename = "type")]
    pub kind: MilestoneKind,
    pub achieved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achieved_date: Option<DateTime<Utc>>,
}

impl Milestone {
    pub fn is_reached(&self, stats: &Statistics) -> bool {
        self.kind.measure(stats) >= self.requirement
    }

    /// Share of the requirement covered by `stats`, capped at 100.
    pub fn progress_percent(&self, stats: &Statistics) -> f64 {
        if self.requirement == 0 {
            return 100.0;
        }
        let ratio = self.kind.measure(stats) as f64 / self.requirement as f64;
        (ratio * 100.0).min(100.0)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalReport {
    pub statistics: Statistics,
    pub achieved_count: usize,
    pub milestone_count: usize,
    pub recent_achievements: Vec<Milestone>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(kind: MilestoneKind, requirement: usize) -> Milestone {
        Milestone {
            id: "sample".to_string(),
            title: "Sample".to_string(),
            description: String::new(),
            icon: String::new(),
            requirement,
            kind,
            achieved: false,
            achieved_date: None,
        }
    }

    #[test]
    fn kind_selects_matching_statistic() {
        let stats = Statistics {
            total_notes: 9,
            unique_days: 4,
            current_streak: 2,
        };
        assert_eq!(MilestoneKind::Total.measure(&stats), 9);
        assert_eq!(MilestoneKind::Days.measure(&stats), 4);
        assert_eq!(MilestoneKind::Streak.measure(&stats), 2);
    }

    #[test]
    fn progress_is_capped() {
        let stats = Statistics {
            total_notes: 30,
            unique_days: 1,
            current_streak: 1,
        };
        assert_eq!(milestone(MilestoneKind::Total, 10).progress_percent(&stats), 100.0);
        assert_eq!(milestone(MilestoneKind::Days, 4).progress_percent(&stats), 25.0);
    }

    #[test]
    fn milestone_serializes_with_browser_field_names() {
        let value = serde_json::to_value(milestone(MilestoneKind::Streak, 7)).unwrap();
        assert_eq!(value["type"], "streak");
        assert_eq!(value["requirement"], 7);
        assert!(value.get("achievedDate").is_none());
    }

    #[test]
    fn note_parses_browser_snapshot_entry() {
        let raw = r#"{
            "id": "note-1700000000000-abc123def",
            "title": "Groceries",
            "content": "milk",
            "date": "2024-03-09T23:30:00.000Z",
            "createdAt": "2024-03-09T23:30:00.000Z",
            "updatedAt": "2024-03-10T08:00:00.000Z"
        }"#;
        let note: Note = serde_json::from_str(raw).unwrap();
        assert_eq!(note.date.offset().local_minus_utc(), 0);
        assert!(note.updated_at > note.created_at);
    }
}
