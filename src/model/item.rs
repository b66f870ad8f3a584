// File: ./src/model/item.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Structured result of reading one line of smart input.
///
/// `location_token` is the raw `@name` reference. Mapping it onto a project or
/// an area is left to the caller (see [`crate::model::draft`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTaskInput {
    pub clean_title: String,
    /// Lowercased, deduplicated, sorted.
    pub tags: Vec<String>,
    pub location_token: Option<String>,
    pub scheduled_date: Option<NaiveDate>,
    pub deadline: Option<NaiveDate>,
    pub url: Option<String>,
}

impl ParsedTaskInput {
    /// True when nothing besides the title was extracted.
    pub fn is_plain(&self) -> bool {
        self.tags.is_empty()
            && self.location_token.is_none()
            && self.scheduled_date.is_none()
            && self.deadline.is_none()
            && self.url.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SuggestionIcon {
    Sun,
    Calendar,
    Week,
    Clear,
    Someday,
}

/// One row of the date palette.
///
/// `date == None` means "clear the date" unless `is_someday` is set, in which
/// case it means "defer indefinitely".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSuggestion {
    pub id: String,
    pub label: String,
    pub date: Option<NaiveDate>,
    pub description: String,
    pub icon: SuggestionIcon,
    pub is_someday: bool,
}

impl DateSuggestion {
    pub fn is_clear(&self) -> bool {
        self.date.is_none() && !self.is_someday
    }
}
