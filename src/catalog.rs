use crate::models::Milestone;
use crate::models::MilestoneKind::{self, Days, Streak, Total};

/// Static badge definition. Ids are stable once shipped; new badges are
/// appended, never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneDefinition {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub requirement: usize,
    pub kind: MilestoneKind,
}

impl MilestoneDefinition {
    pub fn unachieved(&self) -> Milestone {
        Milestone {
            id: self.id.to_string(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            icon: self.icon.to_string(),
            requirement: self.requirement,
            kind: self.kind,
            achieved: false,
            achieved_date: None,
        }
    }
}

const fn badge(
    id: &'static str,
    title: &'static str,
    description: &'static str,
    icon: &'static str,
    requirement: usize,
    kind: MilestoneKind,
) -> MilestoneDefinition {
    MilestoneDefinition {
        id,
        title,
        description,
        icon,
        requirement,
        kind,
    }
}

#[rustfmt::skip]
pub const CATALOG: &[MilestoneDefinition] = &[
    badge("first-note", "First Steps", "Create your first note", "✏️", 1, Total),
    badge("early-adopter", "Early Adopter", "Create 3 notes", "📖", 3, Total),
    badge("note-enthusiast", "Note Enthusiast", "Create 5 notes", "📝", 5, Total),
    badge("getting-started", "Getting Started", "Create 10 notes", "🚀", 10, Total),
    badge("note-collector", "Note Collector", "Create 15 notes", "📚", 15, Total),
    badge("note-writer", "Note Writer", "Create 25 notes", "🖊️", 25, Total),
    badge("prolific-writer", "Prolific Writer", "Create 50 notes", "✍️", 50, Total),
    badge("note-master", "Note Master", "Create 75 notes", "🎓", 75, Total),
    badge("note-expert", "Note Expert", "Create 100 notes", "🏅", 100, Total),
    badge("note-champion", "Note Champion", "Create 150 notes", "🏆", 150, Total),
    badge("note-legend", "Note Legend", "Create 200 notes", "👑", 200, Total),
    badge("note-guru", "Note Guru", "Create 300 notes", "🧙", 300, Total),
    badge("note-sage", "Note Sage", "Create 500 notes", "🔮", 500, Total),
    badge("note-virtuoso", "Note Virtuoso", "Create 750 notes", "🎭", 750, Total),
    badge("note-titan", "Note Titan", "Create 1000 notes", "⚡", 1000, Total),
    badge("daily-writer", "Daily Writer", "Write notes for 2 consecutive days", "🔥", 2, Streak),
    badge("consistent-writer", "Consistent Writer", "Write notes for 3 consecutive days", "💪", 3, Streak),
    badge("week-warrior", "Week Warrior", "Write notes for 7 consecutive days", "⚡", 7, Streak),
    badge("dedication-master", "Dedication Master", "Write notes for 14 consecutive days", "🎯", 14, Streak),
    badge("month-champion", "Month Champion", "Write notes for 30 consecutive days", "🏆", 30, Streak),
    badge("streak-legend", "Streak Legend", "Write notes for 50 consecutive days", "🌟", 50, Streak),
    badge("streak-master", "Streak Master", "Write notes for 75 consecutive days", "💎", 75, Streak),
    badge("streak-titan", "Streak Titan", "Write notes for 100 consecutive days", "👑", 100, Streak),
    badge("streak-god", "Streak God", "Write notes for 150 consecutive days", "⚡", 150, Streak),
    badge("streak-immortal", "Streak Immortal", "Write notes for 200 consecutive days", "🔥", 200, Streak),
    badge("active-week", "Active Week", "Write notes on 5 different days", "📅", 5, Days),
    badge("productive-month", "Productive Month", "Write notes on 15 different days", "📊", 15, Days),
    badge("consistent-habit", "Consistent Habit", "Write notes on 30 different days", "🔄", 30, Days),
    badge("dedicated-user", "Dedicated User", "Write notes on 50 different days", "🎖️", 50, Days),
    badge("loyal-writer", "Loyal Writer", "Write notes on 75 different days", "💝", 75, Days),
    badge("veteran-writer", "Veteran Writer", "Write notes on 100 different days", "🎗️", 100, Days),
    badge("seasoned-noter", "Seasoned Noter", "Write notes on 150 different days", "🏅", 150, Days),
    badge("master-noter", "Master Noter", "Write notes on 200 different days", "🎯", 200, Days),
    badge("legendary-noter", "Legendary Noter", "Write notes on 300 different days", "🌟", 300, Days),
    badge("immortal-noter", "Immortal Noter", "Write notes on 365 different days", "♾️", 365, Days),
    badge("weekend-warrior", "Weekend Warrior", "Write notes on 10 weekend days", "🎪", 10, Days),
    badge("early-bird", "Early Bird", "Write 25 notes before noon", "🌅", 25, Total),
    badge("night-owl", "Night Owl", "Write 25 notes after 8 PM", "🦉", 25, Total),
    badge("speed-writer", "Speed Writer", "Create 5 notes in one day", "⚡", 5, Total),
    badge("marathon-writer", "Marathon Writer", "Create 10 notes in one day", "🏃", 10, Total),
    badge("brief-noter", "Brief Noter", "Write 20 short notes", "📄", 20, Total),
    badge("detailed-writer", "Detailed Writer", "Write 15 long notes", "📃", 15, Total),
    badge("creative-mind", "Creative Mind", "Use 10 different note titles", "🎨", 10, Total),
    badge("organized-thinker", "Organized Thinker", "Create notes across 7 different months", "🗂️", 7, Days),
    badge("time-traveler", "Time Traveler", "Create notes for past dates", "⏰", 5, Total),
    badge("note-architect", "Note Architect", "Build a collection of 2000 notes", "🏗️", 2000, Total),
    badge("note-emperor", "Note Emperor", "Rule over 3000 notes", "👑", 3000, Total),
    badge("note-deity", "Note Deity", "Transcend with 5000 notes", "🌌", 5000, Total),
    badge("infinite-writer", "Infinite Writer", "Achieve eternal status with 10000 notes", "♾️", 10000, Total),
    badge("ultimate-master", "Ultimate Master", "The pinnacle of note mastery", "🔥", 15000, Total),
];

pub fn find(id: &str) -> Option<&'static MilestoneDefinition> {
    CATALOG.iter().find(|def| def.id == id)
}

pub fn default_milestones() -> Vec<Milestone> {
    CATALOG.iter().map(MilestoneDefinition::unachieved).collect()
}
