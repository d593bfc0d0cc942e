//! Fail-fast integrity checks on solver input.
//!
//! A failure here is a contract violation by the data-producing
//! collaborator, caught before any search state exists. Slot conflicts
//! are not errors; they are the mechanism driving backtracking.

use thiserror::Error;

use crate::models::{class_type_abbr, is_known_abbr, CourseMap, Whitelist};

/// Contract violations in solver input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A clock time that is not a valid HHMM value.
    #[error("malformed time: {0:?}")]
    InvalidTime(String),
    /// A slot whose end precedes its start. Midnight-wrapping ranges
    /// are unsupported, not inferred.
    #[error("{course} {class_type} {class_no}: slot ends before it starts ({start}-{end})")]
    InvalidRange {
        course: String,
        class_type: String,
        class_no: String,
        start: String,
        end: String,
    },
    /// A class-type name outside the catalog's naming convention.
    #[error("course {course}: unknown class type {class_type:?}")]
    UnknownClassType { course: String, class_type: String },
    /// A whitelist entry naming an abbreviation outside the vocabulary.
    #[error("whitelist for {course}: unknown class-type abbreviation {abbr:?}")]
    UnknownAbbreviation { course: String, abbr: String },
}

/// Validate solver input before any search work.
///
/// Checks every slot's time ordering, every class-type name against the
/// abbreviation vocabulary, and every whitelist abbreviation. A
/// whitelist entry naming a class-type the course does not offer is not
/// an error; it is simply inert.
pub fn validate(courses: &CourseMap, whitelist: &Whitelist) -> Result<(), ValidationError> {
    for (course, class_types) in courses {
        for (class_type, options) in class_types {
            if class_type_abbr(class_type).is_none() {
                return Err(ValidationError::UnknownClassType {
                    course: course.clone(),
                    class_type: class_type.clone(),
                });
            }
            for (class_no, slots) in options {
                for slot in slots {
                    if slot.end < slot.start {
                        return Err(ValidationError::InvalidRange {
                            course: course.clone(),
                            class_type: class_type.clone(),
                            class_no: class_no.clone(),
                            start: slot.start.to_string(),
                            end: slot.end.to_string(),
                        });
                    }
                }
            }
        }
    }

    for (course, abbrs) in whitelist {
        for abbr in abbrs {
            if !is_known_abbr(abbr) {
                return Err(ValidationError::UnknownAbbreviation {
                    course: course.clone(),
                    abbr: abbr.clone(),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SlotTime, TimeSlot};
    use chrono::Weekday;
    use std::collections::BTreeMap;

    fn slot(start: u16, end: u16) -> TimeSlot {
        TimeSlot {
            day: Weekday::Mon,
            start: SlotTime::new(start).unwrap(),
            end: SlotTime::new(end).unwrap(),
            lesson_type: "Lecture".to_string(),
            class_no: "L1".to_string(),
        }
    }

    fn one_course(class_type: &str, slots: Vec<TimeSlot>) -> CourseMap {
        let mut options = BTreeMap::new();
        options.insert("L1".to_string(), slots);
        let mut class_types = BTreeMap::new();
        class_types.insert(class_type.to_string(), options);
        let mut courses = BTreeMap::new();
        courses.insert("CS3241".to_string(), class_types);
        courses
    }

    #[test]
    fn test_valid_input_passes() {
        let courses = one_course("Lecture", vec![slot(800, 1000)]);
        assert_eq!(validate(&courses, &BTreeMap::new()), Ok(()));
    }

    #[test]
    fn test_rejects_wrapped_range() {
        let courses = one_course("Lecture", vec![slot(1300, 1200)]);
        assert!(matches!(
            validate(&courses, &BTreeMap::new()),
            Err(ValidationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_zero_duration_range_is_valid() {
        let courses = one_course("Lecture", vec![slot(1200, 1200)]);
        assert_eq!(validate(&courses, &BTreeMap::new()), Ok(()));
    }

    #[test]
    fn test_rejects_unknown_class_type() {
        let courses = one_course("Pop Quiz", vec![slot(800, 1000)]);
        assert!(matches!(
            validate(&courses, &BTreeMap::new()),
            Err(ValidationError::UnknownClassType { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_whitelist_abbreviation() {
        let courses = one_course("Lecture", vec![slot(800, 1000)]);
        let mut whitelist = BTreeMap::new();
        whitelist.insert("CS3241".to_string(), vec!["LECTURE".to_string()]);
        assert_eq!(
            validate(&courses, &whitelist),
            Err(ValidationError::UnknownAbbreviation {
                course: "CS3241".to_string(),
                abbr: "LECTURE".to_string(),
            })
        );
    }

    #[test]
    fn test_inert_whitelist_entry_is_fine() {
        // TUT is a known abbreviation even though the course offers no
        // tutorial; the entry simply never matches.
        let courses = one_course("Lecture", vec![slot(800, 1000)]);
        let mut whitelist = BTreeMap::new();
        whitelist.insert("CS3241".to_string(), vec!["TUT".to_string()]);
        assert_eq!(validate(&courses, &whitelist), Ok(()));
    }
}
