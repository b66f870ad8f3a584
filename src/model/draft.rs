// File: ./src/model/draft.rs
//! Turns a [`ParsedTaskInput`] into what task creation consumes.
//!
//! The parser only knows the raw `@name`. Here it is looked up, by exact
//! case-insensitive name, in the caller's projects first and then its areas.

use crate::model::item::ParsedTaskInput;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: String,
    pub name: String,
}

impl NamedRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Projects and areas a location token may refer to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub projects: Vec<NamedRef>,
    pub areas: Vec<NamedRef>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationRef<'a> {
    Project(&'a NamedRef),
    Area(&'a NamedRef),
}

impl Catalog {
    pub fn resolve_location(&self, token: &str) -> Option<LocationRef<'_>> {
        let lower = token.to_lowercase();
        if let Some(p) = self.projects.iter().find(|p| p.name.to_lowercase() == lower) {
            return Some(LocationRef::Project(p));
        }
        self.areas
            .iter()
            .find(|a| a.name.to_lowercase() == lower)
            .map(LocationRef::Area)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    pub project_id: Option<String>,
    pub tags: Vec<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub area_id: Option<String>,
    pub url: Option<String>,
}

impl TaskDraft {
    pub fn from_parsed(
        parsed: ParsedTaskInput,
        catalog: &Catalog,
        aliases: &HashMap<String, Vec<String>>,
    ) -> Self {
        let mut draft = Self {
            title: parsed.clean_title,
            tags: expand_tag_aliases(&parsed.tags, aliases),
            scheduled_date: parsed.scheduled_date,
            deadline: parsed.deadline,
            url: parsed.url,
            ..Default::default()
        };

        if let Some(token) = parsed.location_token.as_deref() {
            match catalog.resolve_location(token) {
                Some(LocationRef::Project(p)) => draft.project_id = Some(p.id.clone()),
                Some(LocationRef::Area(a)) => draft.area_id = Some(a.id.clone()),
                None => log::debug!("Location '@{}' matches no project or area", token),
            }
        }
        draft
    }
}

/// Adds every tag reachable through `aliases` (keys and values without the
/// leading `#`). Cycles are visited once. The result is lowercased, sorted and
/// deduplicated.
pub fn expand_tag_aliases(tags: &[String], aliases: &HashMap<String, Vec<String>>) -> Vec<String> {
    let mut visited = HashSet::new();
    let mut out: Vec<String> = Vec::new();
    let mut stack: Vec<String> = tags.iter().map(|t| normalize_tag(t)).collect();

    while let Some(tag) = stack.pop() {
        if tag.is_empty() || !visited.insert(tag.clone()) {
            continue;
        }
        if let Some(children) = aliases.get(&tag) {
            stack.extend(children.iter().map(|c| normalize_tag(c)));
        }
        out.push(tag);
    }
    out.sort();
    out.dedup();
    out
}

fn normalize_tag(raw: &str) -> String {
    raw.trim().trim_start_matches('#').to_lowercase()
}
