use std::fmt;

use serde::{Deserialize, Serialize};

use super::ScheduleEntry;

/// A school day. Only Monday through Friday exist; the wire and storage
/// representation is the ISO weekday number (1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
        }
    }
}

impl TryFrom<u8> for Weekday {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Weekday::Monday),
            2 => Ok(Weekday::Tuesday),
            3 => Ok(Weekday::Wednesday),
            4 => Ok(Weekday::Thursday),
            5 => Ok(Weekday::Friday),
            other => Err(format!("day_of_week must be between 1 and 5, got {other}")),
        }
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.number()
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the fixed lesson periods of the school day, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeSlot {
    P0730,
    P0820,
    MorningBreak,
    P0930,
    P1020,
    P1110,
    P1330,
    P1420,
    AfternoonBreak,
    P1530,
    P1620,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 11] = [
        TimeSlot::P0730,
        TimeSlot::P0820,
        TimeSlot::MorningBreak,
        TimeSlot::P0930,
        TimeSlot::P1020,
        TimeSlot::P1110,
        TimeSlot::P1330,
        TimeSlot::P1420,
        TimeSlot::AfternoonBreak,
        TimeSlot::P1530,
        TimeSlot::P1620,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TimeSlot::P0730 => "07:30 - 08:20",
            TimeSlot::P0820 => "08:20 - 09:10",
            TimeSlot::MorningBreak => "09:10 - 09:30",
            TimeSlot::P0930 => "09:30 - 10:20",
            TimeSlot::P1020 => "10:20 - 11:10",
            TimeSlot::P1110 => "11:10 - 12:00",
            TimeSlot::P1330 => "13:30 - 14:20",
            TimeSlot::P1420 => "14:20 - 15:10",
            TimeSlot::AfternoonBreak => "15:10 - 15:30",
            TimeSlot::P1530 => "15:30 - 16:20",
            TimeSlot::P1620 => "16:20 - 17:10",
        }
    }

    #[must_use]
    pub const fn is_break(self) -> bool {
        matches!(self, TimeSlot::MorningBreak | TimeSlot::AfternoonBreak)
    }

    /// Slots shown on the weekly grid. Breaks can still be assigned, they
    /// just don't get a row of their own.
    pub fn teaching_slots() -> impl Iterator<Item = TimeSlot> {
        Self::ALL.into_iter().filter(|slot| !slot.is_break())
    }

    pub fn parse(s: &str) -> Option<TimeSlot> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == s)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TimeSlot::parse(&value).ok_or_else(|| format!("unknown time slot: {value}"))
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.as_str().to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DaySchedule {
    pub day_of_week: Weekday,
    pub label: &'static str,
    pub entries: Vec<ScheduleEntry>,
}

/// A week of schedule entries bucketed by day, Monday first.
#[derive(Debug, Clone, Serialize)]
pub struct WeekGrid {
    pub slots: Vec<TimeSlot>,
    pub days: Vec<DaySchedule>,
}

impl WeekGrid {
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.days.iter().map(|d| d.entries.len()).sum()
    }

    #[must_use]
    pub fn day(&self, day: Weekday) -> &DaySchedule {
        // days always holds all five weekdays in order
        &self.days[usize::from(day.number() - 1)]
    }
}

/// Buckets entries by weekday. Every entry ends up in exactly one bucket and
/// each bucket is ordered by time slot.
#[must_use]
pub fn group_by_day(entries: Vec<ScheduleEntry>) -> WeekGrid {
    let mut days: Vec<DaySchedule> = Weekday::ALL
        .into_iter()
        .map(|day| DaySchedule {
            day_of_week: day,
            label: day.label(),
            entries: Vec::new(),
        })
        .collect();

    for entry in entries {
        days[usize::from(entry.day_of_week.number() - 1)]
            .entries
            .push(entry);
    }

    for day in &mut days {
        day.entries.sort_by_key(|e| e.time_slot);
    }

    WeekGrid {
        slots: TimeSlot::teaching_slots().collect(),
        days,
    }
}
