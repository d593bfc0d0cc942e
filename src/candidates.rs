//! Candidate construction and MRV ordering.
//!
//! Flattens the nested course map into one searchable unit per
//! (course, class-type) pair, applies the whitelist relaxation, and
//! orders the units so the backtracker visits the most constrained
//! ones first.

use crate::models::{class_type_abbr, CourseMap, TimeSlot, Whitelist};
use crate::validation::ValidationError;

/// One selectable class offering within a candidate.
#[derive(Clone, Debug)]
pub struct ClassOption {
    /// Class number identifying this offering (e.g. "L1", "T05").
    pub class_no: String,
    /// Slots the backtracker allocates on the grid. Zero-duration
    /// placeholders when the class-type is whitelisted.
    pub search_slots: Vec<TimeSlot>,
    /// The true weekly slots, always reported in results.
    pub true_slots: Vec<TimeSlot>,
}

/// One (course, class-type) pair requiring exactly one selected option.
///
/// Read-only after construction; the whitelist relaxation is applied
/// here, not during search.
#[derive(Clone, Debug)]
pub struct Candidate {
    pub course_code: String,
    pub class_type: String,
    /// Number of mutually-exclusive options; drives the MRV ordering.
    pub choices: usize,
    /// Options in discovery order.
    pub options: Vec<ClassOption>,
}

/// Flatten `courses` into a candidate list sorted ascending by option
/// count (minimum remaining values first).
///
/// For whitelisted class-types every search slot is collapsed to zero
/// duration, so allocation always succeeds for them: clash-freedom is
/// deliberately waived there, while `true_slots` preserve the real
/// times for the result. Ties in the sort keep discovery order.
pub fn build_candidates(
    courses: &CourseMap,
    whitelist: &Whitelist,
) -> Result<Vec<Candidate>, ValidationError> {
    let mut candidates = Vec::new();

    for (course_code, class_types) in courses {
        let waived = whitelist.get(course_code);
        for (class_type, class_options) in class_types {
            let abbr = class_type_abbr(class_type).ok_or_else(|| {
                ValidationError::UnknownClassType {
                    course: course_code.clone(),
                    class_type: class_type.clone(),
                }
            })?;
            let relaxed = waived.is_some_and(|abbrs| abbrs.iter().any(|a| a == abbr));

            let options: Vec<ClassOption> = class_options
                .iter()
                .map(|(class_no, slots)| ClassOption {
                    class_no: class_no.clone(),
                    search_slots: if relaxed {
                        slots.iter().map(TimeSlot::zeroed).collect()
                    } else {
                        slots.clone()
                    },
                    true_slots: slots.clone(),
                })
                .collect();

            candidates.push(Candidate {
                course_code: course_code.clone(),
                class_type: class_type.clone(),
                choices: options.len(),
                options,
            });
        }
    }

    // Stable sort: fewest options first, ties in discovery order.
    candidates.sort_by_key(|c| c.choices);
    Ok(candidates)
}
