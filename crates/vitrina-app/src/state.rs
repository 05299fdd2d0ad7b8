// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use crate::{ApiStatus, Category, Project};

/// State owned by the status controller. `projects` is only meaningful while
/// `status == Success`; it may hold stale rows during `InProgress` or after
/// `Failure`, and the renderer gates on `status` before showing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    pub category: Category,
    pub status: ApiStatus,
    pub projects: Vec<Project>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            category: Category::All,
            status: ApiStatus::Initial,
            projects: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryCommand {
    SelectCategory(Category),
    Retry,
    LoadSucceeded(Vec<Project>),
    LoadFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    CategoryChanged(Category),
    StatusChanged(ApiStatus),
    ProjectsLoaded(usize),
}

impl GalleryState {
    /// Whether a dispatched command requires the caller to issue a fetch for
    /// the current category.
    pub fn wants_fetch(&self) -> bool {
        self.status == ApiStatus::InProgress
    }

    pub fn dispatch(&mut self, command: GalleryCommand) -> Vec<GalleryEvent> {
        match command {
            GalleryCommand::SelectCategory(category) => {
                self.category = category;
                self.status = ApiStatus::InProgress;
                vec![
                    GalleryEvent::CategoryChanged(self.category),
                    GalleryEvent::StatusChanged(self.status),
                ]
            }
            GalleryCommand::Retry => {
                self.status = ApiStatus::InProgress;
                vec![GalleryEvent::StatusChanged(self.status)]
            }
            GalleryCommand::LoadSucceeded(projects) => {
                // One atomic update: rows and status land together.
                self.projects = projects;
                self.status = ApiStatus::Success;
                vec![
                    GalleryEvent::ProjectsLoaded(self.projects.len()),
                    GalleryEvent::StatusChanged(self.status),
                ]
            }
            GalleryCommand::LoadFailed => {
                self.status = ApiStatus::Failure;
                vec![GalleryEvent::StatusChanged(self.status)]
            }
        }
    }
}
