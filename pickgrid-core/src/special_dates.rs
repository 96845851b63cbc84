//! Registry of annotated calendar dates and their enabled state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DATE_TEXT_COLOR, DISABLED_DATE_COLOR, ENABLED_DATE_COLOR};
use crate::date_key::DateKey;
use crate::error::{PickgridError, PickgridResult};

/// Annotation attached to a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialDateEntry {
    pub message: String,
    #[serde(default)]
    pub disabled: bool,
}

impl SpecialDateEntry {
    pub fn new(message: impl Into<String>, disabled: bool) -> Self {
        SpecialDateEntry {
            message: message.into(),
            disabled,
        }
    }
}

/// Background event the calendar grid paints on a special date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDecoration {
    pub date_key: DateKey,
    pub label: String,
    pub background_color: &'static str,
    pub text_color: &'static str,
}

/// Special dates for one session.
///
/// Entries come from a seed set at construction. Toggling flips an
/// existing entry; there is no way to add or remove entries afterwards.
#[derive(Debug, Clone, Default)]
pub struct SpecialDatesRegistry {
    entries: BTreeMap<DateKey, SpecialDateEntry>,
}

impl SpecialDatesRegistry {
    pub fn from_entries(entries: impl IntoIterator<Item = (DateKey, SpecialDateEntry)>) -> Self {
        SpecialDatesRegistry {
            entries: entries.into_iter().collect(),
        }
    }

    /// The built-in seed set.
    pub fn seeded() -> Self {
        Self::from_entries(default_seed())
    }

    pub fn lookup(&self, date: &DateKey) -> Option<&SpecialDateEntry> {
        self.entries.get(date)
    }

    /// Flip `disabled` on the entry for `date` and return the updated entry.
    pub fn toggle_disabled(&mut self, date: &DateKey) -> PickgridResult<SpecialDateEntry> {
        let entry = self
            .entries
            .get_mut(date)
            .ok_or(PickgridError::UnknownDate(*date))?;

        entry.disabled = !entry.disabled;
        log::debug!("toggled {date}: disabled={}", entry.disabled);

        Ok(entry.clone())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&DateKey, &SpecialDateEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn decorations(&self) -> Vec<CalendarDecoration> {
        self.entries
            .iter()
            .map(|(date_key, entry)| CalendarDecoration {
                date_key: *date_key,
                label: entry.message.clone(),
                background_color: if entry.disabled {
                    DISABLED_DATE_COLOR
                } else {
                    ENABLED_DATE_COLOR
                },
                text_color: DATE_TEXT_COLOR,
            })
            .collect()
    }
}

fn default_seed() -> Vec<(DateKey, SpecialDateEntry)> {
    [
        ((2025, 3, 10), "Holiday: Festival Day", true),
        ((2025, 4, 15), "Project Deadline", false),
        ((2025, 5, 1), "Labor Day", true),
    ]
    .into_iter()
    .filter_map(|((y, m, d), message, disabled)| {
        let date = chrono::NaiveDate::from_ymd_opt(y, m, d)?;
        Some((DateKey::new(date), SpecialDateEntry::new(message, disabled)))
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> DateKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_seeded_registry() {
        let registry = SpecialDatesRegistry::seeded();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.entries().filter(|(_, e)| e.disabled).count(), 2);

        let festival = registry.lookup(&key("2025-03-10")).unwrap();
        assert_eq!(festival.message, "Holiday: Festival Day");
        assert!(festival.disabled);

        assert!(!registry.lookup(&key("2025-04-15")).unwrap().disabled);
        assert!(registry.lookup(&key("2025-04-16")).is_none());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut registry = SpecialDatesRegistry::seeded();
        let date = key("2025-05-01");

        let toggled = registry.toggle_disabled(&date).unwrap();
        assert!(!toggled.disabled);
        assert_eq!(toggled.message, "Labor Day");

        let restored = registry.toggle_disabled(&date).unwrap();
        assert!(restored.disabled);
        assert_eq!(registry.lookup(&date), Some(&restored));
    }

    #[test]
    fn test_toggle_only_touches_one_entry() {
        let mut registry = SpecialDatesRegistry::seeded();
        registry.toggle_disabled(&key("2025-04-15")).unwrap();

        assert!(registry.lookup(&key("2025-04-15")).unwrap().disabled);
        assert!(registry.lookup(&key("2025-03-10")).unwrap().disabled);
        assert!(registry.lookup(&key("2025-05-01")).unwrap().disabled);
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_toggle_unknown_date_fails_without_inserting() {
        let mut registry = SpecialDatesRegistry::seeded();
        let date = key("2025-07-04");

        assert_eq!(
            registry.toggle_disabled(&date),
            Err(PickgridError::UnknownDate(date))
        );
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_decorations_follow_disabled_state() {
        let mut registry = SpecialDatesRegistry::seeded();
        registry.toggle_disabled(&key("2025-03-10")).unwrap();

        let decorations = registry.decorations();
        let festival = decorations
            .iter()
            .find(|d| d.date_key == key("2025-03-10"))
            .unwrap();
        assert_eq!(festival.background_color, ENABLED_DATE_COLOR);
        assert_eq!(festival.label, "Holiday: Festival Day");

        let labor = decorations
            .iter()
            .find(|d| d.date_key == key("2025-05-01"))
            .unwrap();
        assert_eq!(labor.background_color, DISABLED_DATE_COLOR);
        assert_eq!(labor.text_color, DATE_TEXT_COLOR);
    }
}
