/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::types::Project;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// In-memory project table, keyed and listed by project name. Every access
/// goes through the one lock.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Mutex<BTreeMap<String, Project>>,
}

impl ProjectStore {
    /// A store holding the two projects every fresh mock starts with.
    pub fn with_seed() -> Self {
        let store = Self::default();

        store.insert(Project {
            name: "nixpkgs".to_string(),
            displayname: "Nixpkgs".to_string(),
            enabled: true,
        });
        store.insert(Project {
            name: "hydra".to_string(),
            displayname: "Hydra".to_string(),
            enabled: true,
        });

        store
    }

    pub fn list(&self) -> Vec<Project> {
        self.projects.lock().unwrap().values().cloned().collect()
    }

    pub fn get(&self, name: &str) -> Option<Project> {
        self.projects.lock().unwrap().get(name).cloned()
    }

    /// Creates or overwrites the entry under `project.name` and returns the
    /// stored record.
    pub fn insert(&self, project: Project) -> Project {
        self.projects
            .lock()
            .unwrap()
            .insert(project.name.clone(), project.clone());

        project
    }

    /// Removes the entry if present, reporting whether one existed.
    pub fn remove(&self, name: &str) -> bool {
        self.projects.lock().unwrap().remove(name).is_some()
    }
}
