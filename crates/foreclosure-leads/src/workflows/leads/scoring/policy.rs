use serde::{Deserialize, Serialize};

/// Letter tier summarising a clamped lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LeadGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LeadGrade {
    pub const ALL: [LeadGrade; 5] = [
        LeadGrade::A,
        LeadGrade::B,
        LeadGrade::C,
        LeadGrade::D,
        LeadGrade::F,
    ];

    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => LeadGrade::A,
            65..=79 => LeadGrade::B,
            50..=64 => LeadGrade::C,
            35..=49 => LeadGrade::D,
            _ => LeadGrade::F,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LeadGrade::A => "A",
            LeadGrade::B => "B",
            LeadGrade::C => "C",
            LeadGrade::D => "D",
            LeadGrade::F => "F",
        }
    }
}

pub(crate) fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, 100) as u8
}
