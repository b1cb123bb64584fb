//! Copy-on-write editor for the profile's ordered record lists.
//!
//! Every operation takes the current list by reference and returns the next
//! snapshot. Unknown ids leave the list unchanged.

use crate::models::profile::{CertificationEntry, EducationEntry, ExperienceEntry, RecordId};

/// A record living in one of the profile's editable lists.
pub trait ListRecord: Clone {
    /// Editable text fields, by wire name.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> RecordId;

    fn assign_id(&mut self, id: RecordId);

    /// Sets a text field. Returns `false` (record untouched) when the
    /// variant has no field of that name.
    fn set_field(&mut self, field: &str, value: String) -> bool;

    fn has_field(field: &str) -> bool {
        Self::FIELDS.contains(&field)
    }
}

/// Smallest id above every live id, so it never collides with the list.
pub fn next_id<R: ListRecord>(list: &[R]) -> RecordId {
    list.iter().map(|record| record.id()).max().map_or(1, |max| max + 1)
}

/// Appends the record built by `factory`, stamped with a fresh id.
/// Returns the new list and the id that was assigned.
pub fn add<R, F>(list: &[R], factory: F) -> (Vec<R>, RecordId)
where
    R: ListRecord,
    F: FnOnce() -> R,
{
    let id = next_id(list);
    let mut record = factory();
    record.assign_id(id);

    let mut next = Vec::with_capacity(list.len() + 1);
    next.extend_from_slice(list);
    next.push(record);
    (next, id)
}

pub fn update<R: ListRecord>(list: &[R], id: RecordId, field: &str, value: &str) -> Vec<R> {
    list.iter()
        .map(|record| {
            let mut record = record.clone();
            if record.id() == id {
                record.set_field(field, value.to_string());
            }
            record
        })
        .collect()
}

pub fn remove<R: ListRecord>(list: &[R], id: RecordId) -> Vec<R> {
    list.iter().filter(|record| record.id() != id).cloned().collect()
}

impl ListRecord for ExperienceEntry {
    const FIELDS: &'static [&'static str] = &["company", "position", "duration", "description"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "company" => self.company = value,
            "position" => self.position = value,
            "duration" => self.duration = value,
            "description" => self.description = value,
            _ => return false,
        }
        true
    }
}

impl ListRecord for EducationEntry {
    const FIELDS: &'static [&'static str] = &["institution", "degree", "year"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "institution" => self.institution = value,
            "degree" => self.degree = value,
            "year" => self.year = value,
            _ => return false,
        }
        true
    }
}

impl ListRecord for CertificationEntry {
    const FIELDS: &'static [&'static str] = &["name", "issuer", "year"];

    fn id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn set_field(&mut self, field: &str, value: String) -> bool {
        match field {
            "name" => self.name = value,
            "issuer" => self.issuer = value,
            "year" => self.year = value,
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn experience(id: RecordId, company: &str) -> ExperienceEntry {
        ExperienceEntry {
            id,
            company: company.to_string(),
            position: "Editor".to_string(),
            duration: "2022 - Present".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let empty: Vec<ExperienceEntry> = Vec::new();
        let (list, id) = add(&empty, ExperienceEntry::default);
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].id, id);
        assert!(remove(&list, id).is_empty());
    }

    #[test]
    fn test_add_twice_gives_distinct_ids() {
        let empty: Vec<EducationEntry> = Vec::new();
        let (once, first) = add(&empty, EducationEntry::default);
        let (twice, second) = add(&once, EducationEntry::default);
        assert_ne!(first, second);
        assert_eq!(twice.len(), 2);
        assert_eq!(twice[0].institution, twice[1].institution);
    }

    #[test]
    fn test_add_appends_at_end_and_keeps_source() {
        let list = vec![experience(1, "A"), experience(2, "B")];
        let (next, id) = add(&list, || experience(0, "C"));
        assert_eq!(id, 3);
        assert_eq!(next.iter().map(|e| e.company.as_str()).collect::<Vec<_>>(), ["A", "B", "C"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_ignores_factory_id() {
        let list = vec![experience(7, "A")];
        let (next, id) = add(&list, || experience(7, "dup"));
        assert_eq!(id, 8);
        assert_eq!(next[1].id, 8);
    }

    #[test]
    fn test_next_id_skips_past_gaps() {
        let list = vec![experience(5, "A"), experience(2, "B")];
        assert_eq!(next_id(&list), 6);
        assert_eq!(next_id::<ExperienceEntry>(&[]), 1);
    }

    #[test]
    fn test_update_changes_only_target() {
        let list = vec![experience(1, "A"), experience(2, "B")];
        let next = update(&list, 2, "company", "Studio X");
        assert_eq!(next[0], list[0]);
        assert_eq!(next[1].company, "Studio X");
        assert_eq!(next[1].position, list[1].position);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let list = vec![experience(1, "A")];
        assert_eq!(update(&list, 99, "company", "X"), list);
    }

    #[test]
    fn test_update_unknown_field_is_noop() {
        let list = vec![experience(1, "A")];
        assert_eq!(update(&list, 1, "salary", "X"), list);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let list = vec![experience(1, "A"), experience(2, "B")];
        assert_eq!(remove(&list, 3), list);
    }

    #[test]
    fn test_remove_keeps_order() {
        let list = vec![experience(1, "A"), experience(2, "B"), experience(3, "C")];
        let next = remove(&list, 2);
        assert_eq!(next.iter().map(|e| e.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn test_certification_fields() {
        let (list, id) = add(&Vec::<CertificationEntry>::new(), CertificationEntry::default);
        let list = update(&list, id, "issuer", "Coursera");
        let list = update(&list, id, "year", "2024");
        assert_eq!(list[0].issuer, "Coursera");
        assert_eq!(list[0].year, "2024");
        assert!(CertificationEntry::has_field("name"));
        assert!(!CertificationEntry::has_field("institution"));
    }
}
