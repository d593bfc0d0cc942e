//! Core data types for the timetable solver.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// A clock time in HHMM form (e.g. `0800`, `1630`).
///
/// Construction validates the hour and minute, so downstream block
/// arithmetic never sees a malformed time. Serialized as a zero-padded
/// 4-digit string, matching the catalog wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime(u16);

impl SlotTime {
    /// Create from an HHMM integer (e.g. `1630` for 4:30pm).
    pub fn new(hhmm: u16) -> Result<Self, ValidationError> {
        if hhmm / 100 > 23 || hhmm % 100 > 59 {
            return Err(ValidationError::InvalidTime(format!("{:04}", hhmm)));
        }
        Ok(Self(hhmm))
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(self) -> u16 {
        self.0 / 100
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(self) -> u16 {
        self.0 % 100
    }
}

impl FromStr for SlotTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidTime(s.to_string()));
        }
        let hhmm: u16 = s
            .parse()
            .map_err(|_| ValidationError::InvalidTime(s.to_string()))?;
        Self::new(hhmm)
    }
}

impl TryFrom<String> for SlotTime {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SlotTime> for String {
    fn from(t: SlotTime) -> Self {
        t.to_string()
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// One fixed weekly occurrence of a class.
///
/// Immutable once ingested. Field names on the wire match the catalog
/// JSON (`startTime`, `lessonType`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    #[serde(with = "weekday_name")]
    pub day: Weekday,
    #[serde(rename = "startTime")]
    pub start: SlotTime,
    #[serde(rename = "endTime")]
    pub end: SlotTime,
    #[serde(rename = "lessonType")]
    pub lesson_type: String,
    #[serde(rename = "classNo")]
    pub class_no: String,
}

impl TimeSlot {
    /// Copy of this slot with its duration collapsed to zero
    /// (`end == start`). Used for the whitelist relaxation.
    pub fn zeroed(&self) -> Self {
        Self {
            end: self.start,
            ..self.clone()
        }
    }
}

/// Serde shim mapping `chrono::Weekday` to the catalog's full English
/// day names ("Monday" .. "Sunday").
pub(crate) mod weekday_name {
    use chrono::Weekday;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn full_name(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    pub fn serialize<S: Serializer>(day: &Weekday, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_str(full_name(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Weekday, D::Error> {
        let s = String::deserialize(de)?;
        s.parse()
            .map_err(|_| de::Error::custom(format!("unknown day name: {}", s)))
    }
}

/// Solver input: course code -> class type -> class number -> weekly slots.
///
/// `BTreeMap` keys give a deterministic discovery order (lexicographic),
/// which is the MRV tie-break order and the option iteration order.
pub type CourseMap = BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<TimeSlot>>>>;

/// Relaxation list: course code -> class-type abbreviations whose clash
/// constraints are waived for that course.
pub type Whitelist = BTreeMap<String, Vec<String>>;

/// One selected class in a feasible schedule, carrying the true
/// (unrelaxed) weekly slots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(rename = "courseCode")]
    pub course_code: String,
    #[serde(rename = "classNo")]
    pub class_no: String,
    pub timeslots: Vec<TimeSlot>,
}

/// Abbreviation for a catalog class-type name, per the catalog's fixed
/// naming convention. `None` for names outside the vocabulary.
pub fn class_type_abbr(class_type: &str) -> Option<&'static str> {
    let abbr = match class_type {
        "Design Lecture" => "DLEC",
        "Laboratory" => "LAB",
        "Lecture" => "LEC",
        "Packaged Lecture" => "PLEC",
        "Packaged Tutorial" => "PTUT",
        "Recitation" => "REC",
        "Sectional Teaching" => "SEC",
        "Seminar-Style Module Class" => "SEM",
        "Tutorial" => "TUT",
        "Tutorial Type 2" => "TUT2",
        "Tutorial Type 3" => "TUT3",
        "Workshop" => "WS",
        _ => return None,
    };
    Some(abbr)
}

/// Whether `abbr` belongs to the fixed class-type abbreviation vocabulary.
pub fn is_known_abbr(abbr: &str) -> bool {
    matches!(
        abbr,
        "DLEC"
            | "LAB"
            | "LEC"
            | "PLEC"
            | "PTUT"
            | "REC"
            | "SEC"
            | "SEM"
            | "TUT"
            | "TUT2"
            | "TUT3"
            | "WS"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_time_parse_and_format() {
        let t: SlotTime = "0815".parse().unwrap();
        assert_eq!(t.hour(), 8);
        assert_eq!(t.minute(), 15);
        assert_eq!(t.to_string(), "0815");

        let midnight: SlotTime = "0000".parse().unwrap();
        assert_eq!(midnight.to_string(), "0000");
    }

    #[test]
    fn test_slot_time_rejects_malformed() {
        for bad in ["2400", "0860", "800", "08150", "8am.", "", "ab00"] {
            assert!(
                bad.parse::<SlotTime>().is_err(),
                "expected {:?} to be rejected",
                bad
            );
        }
        assert!(SlotTime::new(2515).is_err());
    }

    #[test]
    fn test_timeslot_json_round_trip() {
        let json = r#"{
            "day": "Monday",
            "startTime": "0800",
            "endTime": "1000",
            "lessonType": "Lecture",
            "classNo": "L1"
        }"#;
        let slot: TimeSlot = serde_json::from_str(json).unwrap();
        assert_eq!(slot.day, Weekday::Mon);
        assert_eq!(slot.start, SlotTime::new(800).unwrap());
        assert_eq!(slot.end, SlotTime::new(1000).unwrap());
        assert_eq!(slot.lesson_type, "Lecture");
        assert_eq!(slot.class_no, "L1");

        let back = serde_json::to_value(&slot).unwrap();
        assert_eq!(back["day"], "Monday");
        assert_eq!(back["startTime"], "0800");
    }

    #[test]
    fn test_timeslot_rejects_unknown_day() {
        let json = r#"{
            "day": "Notaday",
            "startTime": "0800",
            "endTime": "1000",
            "lessonType": "Lecture",
            "classNo": "L1"
        }"#;
        assert!(serde_json::from_str::<TimeSlot>(json).is_err());
    }

    #[test]
    fn test_zeroed_keeps_metadata() {
        let slot = TimeSlot {
            day: Weekday::Tue,
            start: SlotTime::new(1400).unwrap(),
            end: SlotTime::new(1600).unwrap(),
            lesson_type: "Tutorial".to_string(),
            class_no: "T05".to_string(),
        };
        let zeroed = slot.zeroed();
        assert_eq!(zeroed.start, zeroed.end);
        assert_eq!(zeroed.start, slot.start);
        assert_eq!(zeroed.class_no, "T05");
        assert_eq!(zeroed.lesson_type, "Tutorial");
    }

    #[test]
    fn test_class_type_abbr() {
        assert_eq!(class_type_abbr("Lecture"), Some("LEC"));
        assert_eq!(class_type_abbr("Sectional Teaching"), Some("SEC"));
        assert_eq!(class_type_abbr("Pop Quiz"), None);
    }

    #[test]
    fn test_known_abbrs() {
        for abbr in ["LEC", "TUT", "REC", "LAB", "SEM", "WS", "TUT3"] {
            assert!(is_known_abbr(abbr));
        }
        assert!(!is_known_abbr("LECTURE"));
        assert!(!is_known_abbr("lec"));
    }
}
