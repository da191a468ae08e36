//! Request categories and their submission guidance.

use serde::{Deserialize, Serialize};

use super::status::{ParseEnumError, normalise};

/// Kind of service a request asks for.
///
/// Serialized as the display label, e.g. `"Attendance Correction"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestCategory {
    #[serde(rename = "Attendance Correction")]
    Attendance,
    #[serde(rename = "Auditorium Booking")]
    Auditorium,
    #[serde(rename = "Event Permission")]
    Event,
    #[serde(rename = "General Doubts")]
    Doubts,
    #[serde(rename = "Miscellaneous")]
    Misc,
}

impl RequestCategory {
    /// All categories in the order the submission form lists them.
    pub const ALL: [Self; 5] = [
        Self::Attendance,
        Self::Auditorium,
        Self::Event,
        Self::Doubts,
        Self::Misc,
    ];

    /// Display label, identical to the serialized form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attendance => "Attendance Correction",
            Self::Auditorium => "Auditorium Booking",
            Self::Event => "Event Permission",
            Self::Doubts => "General Doubts",
            Self::Misc => "Miscellaneous",
        }
    }

    /// Short keyword accepted on the command line.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Attendance => "attendance",
            Self::Auditorium => "auditorium",
            Self::Event => "event",
            Self::Doubts => "doubts",
            Self::Misc => "misc",
        }
    }

    /// Queue number prefix: the first letter of the label, uppercased.
    ///
    /// Attendance and Auditorium share `A`.
    #[must_use]
    pub fn queue_prefix(self) -> char {
        self.label()
            .chars()
            .next()
            .map_or('X', |c| c.to_ascii_uppercase())
    }

    /// Common problems to check before raising a request in this category.
    #[must_use]
    pub const fn guidance(self) -> &'static [&'static str; 3] {
        match self {
            Self::Attendance => &[
                "Attendance is updated on iCloud ERP every 24 hours. Please wait 24h before raising a request.",
                "Medical certificates must be submitted to the Dean's office within 3 days of return.",
                "For 'On Duty' (OD) leave, ensure your faculty coordinator has signed the approval slip.",
            ],
            Self::Auditorium => &[
                "Bookings must be made at least 7 days in advance.",
                "Audio/Visual equipment support requires a separate request to the IT Cell.",
                "Event approval letter from the Faculty Coordinator is mandatory for booking.",
            ],
            Self::Event => &[
                "Police permission copy is required for outdoor events with over 100 participants.",
                "Guest list (External) must be submitted 48 hours prior for main gate entry clearance.",
                "No loud music is allowed in academic blocks during class hours (9 AM - 5 PM).",
            ],
            Self::Doubts => &[
                "Check the Student Handbook 2024 for standard academic regulations.",
                "Exam schedule queries should be directed to the Controller of Examination (COE) office.",
                "For scholarship queries, visit the Registrar Office, Block A, Ground Floor.",
            ],
            Self::Misc => &[
                "For ID card replacement, pay the fee at the accounts section first and attach the receipt.",
                "Wi-Fi credentials can be reset at the Server Room (B-Block, Room 202).",
                "Lost and Found items are collected at the Security Office, Main Gate.",
            ],
        }
    }
}

impl std::fmt::Display for RequestCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

impl std::str::FromStr for RequestCategory {
    type Err = ParseEnumError;

    /// Accepts either the slug (`attendance`) or the label
    /// (`Attendance Correction`), case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalise(s);
        Self::ALL
            .into_iter()
            .find(|c| normalise(c.slug()) == wanted || normalise(c.label()) == wanted)
            .ok_or_else(|| ParseEnumError::new("category", s))
    }
}
