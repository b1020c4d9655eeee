use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two tracked riders. The set is fixed; records always carry both.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Person {
    Jorge,
    William,
}

impl Person {
    pub const ALL: [Person; 2] = [Person::Jorge, Person::William];

    pub fn name(&self) -> &'static str {
        match self {
            Person::Jorge => "Jorge",
            Person::William => "William",
        }
    }

    pub fn parse(s: &str) -> Option<Person> {
        match s.to_lowercase().as_str() {
            "jorge" | "j" => Some(Person::Jorge),
            "william" | "w" => Some(Person::William),
            _ => None,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One direction of the round trip.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    #[serde(rename = "ida")]
    Outbound,
    #[serde(rename = "regresso")]
    Return,
}

impl Leg {
    pub const ALL: [Leg; 2] = [Leg::Outbound, Leg::Return];

    pub fn label(&self) -> &'static str {
        match self {
            Leg::Outbound => "ida",
            Leg::Return => "regresso",
        }
    }

    pub fn parse(s: &str) -> Option<Leg> {
        match s.to_lowercase().as_str() {
            "ida" | "i" | "outbound" | "out" => Some(Leg::Outbound),
            "regresso" | "reg" | "r" | "return" | "ret" => Some(Leg::Return),
            _ => None,
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripState {
    #[serde(rename = "ida")]
    pub outbound_done: bool,
    #[serde(rename = "regresso")]
    pub return_done: bool,
}

impl TripState {
    pub fn get(&self, leg: Leg) -> bool {
        match leg {
            Leg::Outbound => self.outbound_done,
            Leg::Return => self.return_done,
        }
    }

    pub fn set(&mut self, leg: Leg, done: bool) {
        match leg {
            Leg::Outbound => self.outbound_done = done,
            Leg::Return => self.return_done = done,
        }
    }

    pub fn legs_done(&self) -> u32 {
        self.outbound_done as u32 + self.return_done as u32
    }

    pub fn any(&self) -> bool {
        self.outbound_done || self.return_done
    }

    pub fn status(&self) -> DayStatus {
        match (self.outbound_done, self.return_done) {
            (true, true) => DayStatus::Full,
            (true, false) => DayStatus::OutboundOnly,
            (false, true) => DayStatus::ReturnOnly,
            (false, false) => DayStatus::None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DayRecord {
    pub jorge: TripState,
    pub william: TripState,
}

impl DayRecord {
    pub fn person(&self, person: Person) -> &TripState {
        match person {
            Person::Jorge => &self.jorge,
            Person::William => &self.william,
        }
    }

    pub fn person_mut(&mut self, person: Person) -> &mut TripState {
        match person {
            Person::Jorge => &mut self.jorge,
            Person::William => &mut self.william,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.jorge.any() && !self.william.any()
    }
}

/// Whole-day status used by the full-day model. Replaces both legs at once.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DayStatus {
    Full,
    OutboundOnly,
    ReturnOnly,
    None,
}

impl DayStatus {
    pub const ALL: [DayStatus; 4] = [
        DayStatus::Full,
        DayStatus::OutboundOnly,
        DayStatus::ReturnOnly,
        DayStatus::None,
    ];

    pub fn trip_state(&self) -> TripState {
        TripState {
            outbound_done: matches!(self, DayStatus::Full | DayStatus::OutboundOnly),
            return_done: matches!(self, DayStatus::Full | DayStatus::ReturnOnly),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayStatus::Full => "completo",
            DayStatus::OutboundOnly => "só ida",
            DayStatus::ReturnOnly => "só regresso",
            DayStatus::None => "nenhum",
        }
    }

    pub fn parse(s: &str) -> Option<DayStatus> {
        match s.to_lowercase().as_str() {
            "full" | "completo" | "both" => Some(DayStatus::Full),
            "ida" | "outbound" | "outbound-only" => Some(DayStatus::OutboundOnly),
            "regresso" | "return" | "return-only" => Some(DayStatus::ReturnOnly),
            "none" | "nenhum" | "off" => Some(DayStatus::None),
            _ => None,
        }
    }

    /// Cycles in the order the calendar UI offers them.
    pub fn next(&self) -> DayStatus {
        match self {
            DayStatus::None => DayStatus::Full,
            DayStatus::Full => DayStatus::OutboundOnly,
            DayStatus::OutboundOnly => DayStatus::ReturnOnly,
            DayStatus::ReturnOnly => DayStatus::None,
        }
    }
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
