// File: ./src/model/mod.rs
pub mod calendar;
pub mod draft;
pub mod item;
pub mod parser;
pub mod resolver;
pub mod suggest;

pub use calendar::next_occurrence;
pub use draft::{Catalog, NamedRef, TaskDraft};
pub use item::{DateSuggestion, ParsedTaskInput, SuggestionIcon};
pub use parser::{SyntaxToken, SyntaxType, highlight_smart_input, parse_task_input};
pub use resolver::{PhraseKind, Resolution, resolve_date_phrase};
pub use suggest::suggest_dates;
