use crate::clock::Clock;
use crate::config::Config;
use crate::errors::Result;
use crate::milestones::MilestoneTracker;
use crate::models::{JournalReport, Milestone, Note, Statistics};
use crate::notes::NoteStore;
use crate::stats::build_stats;
use crate::storage::KeyValueStore;
use chrono::{DateTime, FixedOffset, NaiveDate};
use std::collections::BTreeSet;
use tracing::debug;

/// Notes plus the milestone engine. Every note mutation recomputes the
/// statistics and then reconciles achievements, in that order.
pub struct Journal<S, C> {
    notes: NoteStore<S>,
    milestones: MilestoneTracker<S>,
    clock: C,
    stats: Statistics,
}

impl<S, C> Journal<S, C>
where
    S: KeyValueStore + Clone,
    C: Clock,
{
    pub fn open(store: S, clock: C, config: &Config) -> Self {
        let notes = NoteStore::load(store.clone(), config.notes_key.as_str());
        let milestones = MilestoneTracker::load(store, config.milestones_key.as_str());
        let mut journal = Self {
            notes,
            milestones,
            clock,
            stats: Statistics::default(),
        };
        journal.refresh();
        journal
    }

    pub fn create_note(&mut self, date: DateTime<FixedOffset>) -> Note {
        let note = self.notes.create(date, self.clock.now());
        self.refresh();
        note
    }

    pub fn update_note(&mut self, id: &str, content: &str, title: &str) -> Result<Note> {
        let note = self.notes.update(id, content, title, self.clock.now())?;
        self.refresh();
        Ok(note)
    }

    pub fn delete_note(&mut self, id: &str) -> Result<Note> {
        let note = self.notes.delete(id)?;
        self.refresh();
        Ok(note)
    }

    /// Recompute statistics, then reconcile achievements against them.
    /// Returns the ids achieved by this pass.
    pub fn refresh(&mut self) -> Vec<String> {
        self.stats = build_stats(&self.clock, self.notes.list());
        debug!(
            "stats: {} notes, {} days, streak {}",
            self.stats.total_notes, self.stats.unique_days, self.stats.current_streak
        );
        self.milestones.reconcile(&self.stats, self.clock.now())
    }

    pub fn notes(&self) -> &[Note] {
        self.notes.list()
    }

    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    pub fn search(&self, query: &str) -> Vec<&Note> {
        self.notes.search(query)
    }

    pub fn notes_for_date(&self, day: NaiveDate) -> Vec<&Note> {
        self.notes.notes_for_date(&self.clock, day)
    }

    pub fn notes_today(&self) -> Vec<&Note> {
        self.notes.notes_for_date(&self.clock, self.clock.today())
    }

    pub fn days_with_notes(&self) -> BTreeSet<NaiveDate> {
        self.notes.days_with_notes(&self.clock)
    }

    pub fn statistics(&self) -> Statistics {
        self.stats
    }

    pub fn milestones(&self) -> &[Milestone] {
        self.milestones.milestones()
    }

    pub fn achieved_count(&self) -> usize {
        self.milestones.achieved_count()
    }

    pub fn recent_achievements(&self) -> Vec<&Milestone> {
        self.milestones.recent_achievements()
    }

    pub fn progress_percent(&self, milestone: &Milestone) -> f64 {
        milestone.progress_percent(&self.stats)
    }

    pub fn report(&self) -> JournalReport {
        JournalReport {
            statistics: self.stats,
            achieved_count: self.achieved_count(),
            milestone_count: self.milestones().len(),
            recent_achievements: self.recent_achievements().into_iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::{MILESTONES_KEY, NOTES_KEY};
    use crate::errors::JournalError;
    use crate::storage::MemoryStore;
    use chrono::{Duration, TimeZone, Utc};
    use std::cell::Cell;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
    }

    fn filed(day: NaiveDate) -> DateTime<FixedOffset> {
        day.and_hms_opt(0, 0, 0).unwrap().and_utc().fixed_offset()
    }

    fn open(store: &MemoryStore) -> Journal<MemoryStore, FixedClock> {
        Journal::open(store.clone(), FixedClock::at_day(today()), &Config::default())
    }

    /// Clock whose instant can be moved forward between steps.
    struct SteppingClock {
        now: Cell<DateTime<Utc>>,
    }

    impl Clock for SteppingClock {
        fn now(&self) -> DateTime<Utc> {
            self.now.get()
        }

        fn today(&self) -> NaiveDate {
            self.now.get().date_naive()
        }

        fn local_day(&self, at: &DateTime<FixedOffset>) -> NaiveDate {
            at.with_timezone(&Utc).date_naive()
        }
    }

    #[test]
    fn opening_empty_store_writes_nothing() {
        let store = MemoryStore::new();
        let journal = open(&store);

        assert_eq!(journal.statistics(), Statistics::default());
        assert_eq!(journal.achieved_count(), 0);
        assert_eq!(store.writes(MILESTONES_KEY), 0);
        assert_eq!(store.writes(NOTES_KEY), 0);
    }

    #[test]
    fn first_note_triggers_first_milestone() {
        let store = MemoryStore::new();
        let mut journal = open(&store);
        journal.create_note(filed(today()));

        let stats = journal.statistics();
        assert_eq!((stats.total_notes, stats.unique_days, stats.current_streak), (1, 1, 1));
        let first = journal.milestones().iter().find(|m| m.id == "first-note").unwrap();
        assert!(first.achieved);
        assert!(first.achieved_date.is_some());
        assert_eq!(store.writes(MILESTONES_KEY), 1);
    }

    #[test]
    fn edits_without_new_achievements_do_not_rewrite_milestones() {
        let store = MemoryStore::new();
        let mut journal = open(&store);
        let note = journal.create_note(filed(today()));
        journal.update_note(&note.id, "hello", "Day one").unwrap();
        journal.update_note(&note.id, "hello again", "Day one").unwrap();

        assert_eq!(store.writes(MILESTONES_KEY), 1);
        assert_eq!(store.writes(NOTES_KEY), 3);
    }

    #[test]
    fn deleting_notes_never_revokes_badges() {
        let store = MemoryStore::new();
        let mut journal = open(&store);
        let ids: Vec<String> = (0..3)
            .map(|n| journal.create_note(filed(today() - Duration::days(n))).id)
            .collect();
        assert_eq!(journal.statistics().current_streak, 3);

        for id in &ids {
            journal.delete_note(id).unwrap();
        }
        assert_eq!(journal.statistics(), Statistics::default());
        let achieved: Vec<&str> = journal
            .milestones()
            .iter()
            .filter(|m| m.achieved)
            .map(|m| m.id.as_str())
            .collect();
        assert!(achieved.contains(&"consistent-writer"));
        assert!(achieved.contains(&"early-adopter"));
    }

    #[test]
    fn reopening_restores_notes_and_achievements() {
        let store = MemoryStore::new();
        {
            let mut journal = open(&store);
            journal.create_note(filed(today()));
            journal.create_note(filed(today() - Duration::days(1)));
        }

        let journal = open(&store);
        assert_eq!(journal.notes().len(), 2);
        assert_eq!(journal.statistics().current_streak, 2);
        assert_eq!(journal.achieved_count(), 2);
        assert_eq!(store.writes(MILESTONES_KEY), 2);
    }

    #[test]
    fn open_reconciles_notes_already_on_disk() {
        let notes = r#"[{"id": "note-a", "title": "a", "content": "",
            "date": "2026-03-10T00:00:00Z",
            "createdAt": "2026-03-10T07:00:00Z", "updatedAt": "2026-03-10T07:00:00Z"}]"#;
        let store = MemoryStore::new().with_value(NOTES_KEY, notes);
        let journal = open(&store);

        assert_eq!(journal.achieved_count(), 1);
        assert_eq!(store.writes(MILESTONES_KEY), 1);
        assert_eq!(journal.notes_today().len(), 1);
    }

    #[test]
    fn unknown_note_is_reported() {
        let mut journal = open(&MemoryStore::new());
        assert!(matches!(
            journal.delete_note("nope"),
            Err(JournalError::NoteNotFound { id }) if id == "nope"
        ));
    }

    #[test]
    fn report_lists_recent_achievements() {
        let start = Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap();
        let clock = SteppingClock {
            now: Cell::new(start),
        };
        let store = MemoryStore::new();
        let mut journal = Journal::open(store.clone(), &clock, &Config::default());

        journal.create_note(filed(today()));
        clock.now.set(start + Duration::hours(1));
        journal.create_note(filed(today()));
        journal.create_note(filed(today()));

        let report = journal.report();
        assert_eq!(report.statistics.total_notes, 3);
        assert_eq!(report.achieved_count, 2);
        assert_eq!(report.milestone_count, journal.milestones().len());
        assert_eq!(report.recent_achievements[0].id, "early-adopter");
        assert_eq!(report.recent_achievements[1].id, "first-note");

        let progress = journal
            .milestones()
            .iter()
            .find(|m| m.id == "note-enthusiast")
            .map(|m| journal.progress_percent(m))
            .unwrap();
        assert!((progress - 60.0).abs() < 1e-9);
    }

    #[test]
    fn lookups_use_local_days() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 10, 1, 0, 0).unwrap();
        let clock = FixedClock::new(now).in_offset(tokyo);
        let mut journal = Journal::open(MemoryStore::new(), clock, &Config::default());

        // Local midnight on Mar 10 and 23:30 on Mar 9, both written in UTC.
        let midnight = DateTime::parse_from_rfc3339("2026-03-09T15:00:00.000Z").unwrap();
        let late = DateTime::parse_from_rfc3339("2026-03-09T14:30:00.000Z").unwrap();
        let first = journal.create_note(midnight);
        journal.create_note(late);
        journal.update_note(&first.id, "sakura", "Hanami plans").unwrap();

        assert_eq!(journal.notes_today().len(), 1);
        assert_eq!(journal.notes_for_date(today())[0].id, first.id);
        let days: Vec<NaiveDate> = journal.days_with_notes().into_iter().collect();
        assert_eq!(days, vec![today() - Duration::days(1), today()]);
        assert_eq!(journal.statistics().unique_days, 2);

        assert_eq!(journal.note(&first.id).unwrap().title, "Hanami plans");
        assert!(journal.note("missing").is_none());
        assert_eq!(journal.search("HANAMI").len(), 1);
        assert_eq!(journal.search("").len(), 2);
    }
}
