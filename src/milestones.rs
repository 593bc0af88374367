use crate::catalog::{self, CATALOG};
use crate::models::{Milestone, Statistics};
use crate::storage::{KeyValueStore, load_snapshot, persist_snapshot};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

const RECENT_LIMIT: usize = 3;

/// Achievement state as found in a persisted snapshot. Static fields in the
/// snapshot are ignored; the catalog owns them.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredAchievement {
    id: String,
    #[serde(default)]
    achieved: bool,
    #[serde(default)]
    achieved_date: Option<DateTime<Utc>>,
}

pub struct MilestoneTracker<S> {
    store: S,
    key: String,
    milestones: Vec<Milestone>,
}

impl<S: KeyValueStore> MilestoneTracker<S> {
    /// Builds the working table from the catalog and whatever the store
    /// holds under `key`.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let milestones = match load_snapshot::<Vec<StoredAchievement>, _>(&store, &key) {
            Some(stored) => merge_with_catalog(stored),
            None => catalog::default_milestones(),
        };
        debug!(
            "loaded {} milestones, {} achieved",
            milestones.len(),
            milestones.iter().filter(|m| m.achieved).count()
        );

        Self {
            store,
            key,
            milestones,
        }
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn get(&self, id: &str) -> Option<&Milestone> {
        self.milestones.iter().find(|m| m.id == id)
    }

    pub fn achieved_count(&self) -> usize {
        self.milestones.iter().filter(|m| m.achieved).count()
    }

    /// Up to three achieved milestones, most recently achieved first.
    pub fn recent_achievements(&self) -> Vec<&Milestone> {
        let mut achieved: Vec<&Milestone> = self
            .milestones
            .iter()
            .filter(|m| m.achieved && m.achieved_date.is_some())
            .collect();
        achieved.sort_by(|a, b| b.achieved_date.cmp(&a.achieved_date));
        achieved.truncate(RECENT_LIMIT);
        achieved
    }

    /// Marks every unachieved milestone that `stats` satisfies, stamping it
    /// with `now`. The table is written only when something transitioned.
    /// Returns the ids that transitioned in this pass.
    pub fn reconcile(&mut self, stats: &Statistics, now: DateTime<Utc>) -> Vec<String> {
        let mut newly_achieved = Vec::new();
        for milestone in self.milestones.iter_mut().filter(|m| !m.achieved) {
            if milestone.is_reached(stats) {
                milestone.achieved = true;
                milestone.achieved_date = Some(now);
                info!("milestone achieved: {} ({})", milestone.id, milestone.title);
                newly_achieved.push(milestone.id.clone());
            }
        }

        if !newly_achieved.is_empty() {
            self.persist();
        }
        newly_achieved
    }

    fn persist(&self) {
        if let Err(err) = persist_snapshot(&self.store, &self.key, &self.milestones) {
            error!("failed to persist milestones: {err}");
        }
    }
}

fn merge_with_catalog(stored: Vec<StoredAchievement>) -> Vec<Milestone> {
    let mut by_id: HashMap<String, StoredAchievement> = HashMap::with_capacity(stored.len());
    for entry in stored {
        if catalog::find(&entry.id).is_none() {
            warn!("dropping unknown milestone id from snapshot: {}", entry.id);
            continue;
        }
        by_id.insert(entry.id.clone(), entry);
    }

    CATALOG
        .iter()
        .map(|def| {
            let mut milestone = def.unachieved();
            if let Some(entry) = by_id.remove(def.id) {
                milestone.achieved = entry.achieved;
                milestone.achieved_date = entry.achieved_date.filter(|_| entry.achieved);
            }
            milestone
        })
        .collect()
}
