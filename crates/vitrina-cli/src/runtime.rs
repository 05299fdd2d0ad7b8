// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::Result;
use std::sync::mpsc::Sender;
use std::thread;
use vitrina_api::Client;
use vitrina_app::{Category, Project};
use vitrina_tui::{FetchEvent, GalleryRuntime, InternalEvent};

/// Live runtime: fetches from the remote API on a background thread so the
/// loading view keeps animating while the request is in flight.
pub struct HttpRuntime {
    client: Client,
}

impl HttpRuntime {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl GalleryRuntime for HttpRuntime {
    fn fetch_projects(&mut self, category: Category) -> Result<Vec<Project>> {
        self.client.fetch_projects(category)
    }

    fn spawn_fetch(
        &mut self,
        request_id: u64,
        category: Category,
        tx: Sender<InternalEvent>,
    ) -> Result<()> {
        let client = self.client.clone();
        thread::spawn(move || {
            let event = match client.fetch_projects(category) {
                Ok(projects) => InternalEvent::Fetch(FetchEvent::Completed {
                    request_id,
                    projects,
                }),
                Err(error) => InternalEvent::Fetch(FetchEvent::Failed {
                    request_id,
                    error: error.to_string(),
                }),
            };
            // Receiver gone means the UI loop already exited.
            let _ = tx.send(event);
        });
        Ok(())
    }
}

/// Seeded in-process source for `--demo`; no network involved.
#[derive(Debug, Default)]
pub struct DemoRuntime;

impl GalleryRuntime for DemoRuntime {
    fn fetch_projects(&mut self, category: Category) -> Result<Vec<Project>> {
        Ok(vitrina_testkit::demo_projects(category))
    }
}
