use crate::clock::Clock;
use crate::errors::{JournalError, Result};
use crate::models::{Note, UNTITLED_NOTE};
use crate::stats::distinct_days;
use crate::storage::{KeyValueStore, load_snapshot, persist_snapshot};
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use std::collections::BTreeSet;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Owns the note collection, newest first, and rewrites the whole snapshot
/// after every mutation.
pub struct NoteStore<S> {
    store: S,
    key: String,
    notes: Vec<Note>,
}

impl<S: KeyValueStore> NoteStore<S> {
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let notes: Vec<Note> = load_snapshot(&store, &key).unwrap_or_default();
        info!("loaded {} notes", notes.len());
        Self { store, key, notes }
    }

    pub fn create(&mut self, date: DateTime<FixedOffset>, now: DateTime<Utc>) -> Note {
        let note = Note {
            id: format!("note-{}", Uuid::new_v4().simple()),
            title: UNTITLED_NOTE.to_string(),
            content: String::new(),
            date,
            created_at: now,
            updated_at: now,
        };
        self.notes.insert(0, note.clone());
        self.persist();
        debug!("created note {} for {}", note.id, note.date);
        note
    }

    pub fn update(
        &mut self,
        id: &str,
        content: &str,
        title: &str,
        now: DateTime<Utc>,
    ) -> Result<Note> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or_else(|| JournalError::NoteNotFound { id: id.to_string() })?;

        note.content = content.to_string();
        note.title = if title.is_empty() {
            UNTITLED_NOTE.to_string()
        } else {
            title.to_string()
        };
        note.updated_at = now;
        let updated = note.clone();

        self.persist();
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str) -> Result<Note> {
        let index = self
            .notes
            .iter()
            .position(|note| note.id == id)
            .ok_or_else(|| JournalError::NoteNotFound { id: id.to_string() })?;
        let removed = self.notes.remove(index);
        self.persist();
        debug!("deleted note {}", removed.id);
        Ok(removed)
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Case-insensitive substring match on title or content. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<&Note> {
        if query.trim().is_empty() {
            return self.notes.iter().collect();
        }
        let needle = query.to_lowercase();
        self.notes
            .iter()
            .filter(|note| {
                note.title.to_lowercase().contains(&needle)
                    || note.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Notes whose `date` falls on `day` in the clock's local zone.
    pub fn notes_for_date(&self, clock: &impl Clock, day: NaiveDate) -> Vec<&Note> {
        self.notes
            .iter()
            .filter(|note| clock.local_day(&note.date) == day)
            .collect()
    }

    pub fn days_with_notes(&self, clock: &impl Clock) -> BTreeSet<NaiveDate> {
        distinct_days(clock, &self.notes)
    }

    fn persist(&self) {
        if let Err(err) = persist_snapshot(&self.store, &self.key, &self.notes) {
            error!("failed to persist notes: {err}");
        }
    }
}
