//! Favorites, downloads and progress held for the signed-in user

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use super::{Catalog, Course};
use crate::error::{Error, Result};

/// Courses saved as favorites when a session starts
pub const DEFAULT_FAVORITES: [u32; 2] = [1, 3];

/// Per-session course flags. Lives only as long as the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Library {
    favorites: BTreeSet<u32>,
    downloads: BTreeSet<u32>,
    progress: BTreeMap<u32, u8>,
}

impl Library {
    pub fn new() -> Self {
        Self {
            favorites: DEFAULT_FAVORITES.into_iter().collect(),
            downloads: BTreeSet::new(),
            progress: BTreeMap::new(),
        }
    }

    pub fn empty() -> Self {
        Self {
            favorites: BTreeSet::new(),
            downloads: BTreeSet::new(),
            progress: BTreeMap::new(),
        }
    }

    pub fn is_favorite(&self, course_id: u32) -> bool {
        self.favorites.contains(&course_id)
    }

    /// Flip the favorite flag. Returns the new value.
    pub fn toggle_favorite(&mut self, catalog: &Catalog, course_id: u32) -> Result<bool> {
        ensure_known(catalog, course_id)?;
        let now_favorite = toggle(&mut self.favorites, course_id);
        tracing::debug!("Course {} favorite: {}", course_id, now_favorite);
        Ok(now_favorite)
    }

    /// Drop a course from favorites. Removing a non-favorite does nothing.
    pub fn remove_favorite(&mut self, course_id: u32) -> bool {
        self.favorites.remove(&course_id)
    }

    /// Favorite courses in catalog order, skipping ids the catalog lacks
    pub fn favorites<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Course> {
        catalog
            .courses()
            .iter()
            .filter(|c| self.favorites.contains(&c.id))
            .collect()
    }

    pub fn is_downloaded(&self, course_id: u32) -> bool {
        self.downloads.contains(&course_id)
    }

    /// Flip the download flag. Returns the new value.
    pub fn toggle_download(&mut self, catalog: &Catalog, course_id: u32) -> Result<bool> {
        ensure_known(catalog, course_id)?;
        Ok(toggle(&mut self.downloads, course_id))
    }

    /// Completion percentage, 0 when never started
    pub fn progress(&self, course_id: u32) -> u8 {
        self.progress.get(&course_id).copied().unwrap_or(0)
    }

    /// Record progress, clamped to 100
    pub fn set_progress(&mut self, catalog: &Catalog, course_id: u32, percent: u8) -> Result<u8> {
        ensure_known(catalog, course_id)?;
        let percent = percent.min(100);
        self.progress.insert(course_id, percent);
        Ok(percent)
    }

    pub fn completed(&self) -> usize {
        self.progress.values().filter(|p| **p == 100).count()
    }

    pub fn in_progress(&self) -> usize {
        self.progress.values().filter(|p| (1..100).contains(*p)).count()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}

fn ensure_known(catalog: &Catalog, course_id: u32) -> Result<()> {
    if catalog.contains(course_id) {
        Ok(())
    } else {
        Err(Error::CourseNotFound(course_id))
    }
}

fn toggle(set: &mut BTreeSet<u32>, id: u32) -> bool {
    if set.remove(&id) {
        false
    } else {
        set.insert(id);
        true
    }
}
