// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Deterministic project fixtures for the `--demo` mode and the test
//! suites. The same category always yields the same rows.

use vitrina_app::{Category, Project};

const STATIC_PROJECTS: [&str; 4] = [
    "Music Page",
    "Tourism Website",
    "Advanced Technologies",
    "Happy Meals",
];

const RESPONSIVE_PROJECTS: [&str; 4] = [
    "Food Munch",
    "Portfolio",
    "Design Studio",
    "Yoga Landing Page",
];

const DYNAMIC_PROJECTS: [&str; 4] = [
    "Random Joke Generator",
    "Currency Converter",
    "Speed Typing Test",
    "Color Picker",
];

const REACT_PROJECTS: [&str; 4] = [
    "Emoji Game",
    "Wikipedia Search",
    "Nxt Trendz",
    "Jobby App",
];

fn category_names(category: Category) -> &'static [&'static str] {
    match category {
        Category::All => &[],
        Category::Static => &STATIC_PROJECTS,
        Category::Responsive => &RESPONSIVE_PROJECTS,
        Category::Dynamic => &DYNAMIC_PROJECTS,
        Category::React => &REACT_PROJECTS,
    }
}

fn slug(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '-' })
        .collect()
}

fn projects_for(category: Category, id_offset: usize) -> Vec<Project> {
    category_names(category)
        .iter()
        .enumerate()
        .map(|(index, name)| Project {
            id: (id_offset + index + 1).to_string(),
            name: (*name).to_owned(),
            image_url: format!("https://assets.ccbp.in/frontend/react-js/projects-showcase/{}-img.png", slug(name)),
        })
        .collect()
}

/// Demo rows for one category. `All` is the concatenation of the four
/// concrete categories, with globally unique ids.
pub fn demo_projects(category: Category) -> Vec<Project> {
    let mut rows = Vec::new();
    let mut offset = 0;
    for concrete in [
        Category::Static,
        Category::Responsive,
        Category::Dynamic,
        Category::React,
    ] {
        let batch = projects_for(concrete, offset);
        offset += batch.len();
        if category == concrete {
            return batch;
        }
        rows.extend(batch);
    }
    rows
}
