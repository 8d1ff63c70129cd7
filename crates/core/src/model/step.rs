use std::fmt;

/// Number of segments shown by the progress indicator.
pub const STEP_COUNT: u8 = 5;

/// One named stage of the guided questionnaire.
///
/// The gateway decides which step comes next; the client only needs the
/// identifier to label progress. Identifiers the client does not know yet are
/// kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StepId {
    Symptom,
    Duration,
    Severity,
    AdditionalSymptoms,
    MedicalHistory,
    Other(String),
}

/// Icon shown next to a step label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    Activity,
    Clock,
    Alert,
    Brain,
    Heart,
    Check,
}

impl StepIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            StepIcon::Activity => "🩺",
            StepIcon::Clock => "⏱",
            StepIcon::Alert => "⚠",
            StepIcon::Brain => "🧠",
            StepIcon::Heart => "❤",
            StepIcon::Check => "✔",
        }
    }
}

/// Display metadata for the progress indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDisplay {
    pub number: u8,
    pub total: u8,
    pub progress_percent: u8,
    pub icon: StepIcon,
    pub color: &'static str,
}

pub const NEUTRAL_COLOR: &str = "#6b7280";

impl StepId {
    /// Parse a wire identifier. Never fails; unknown names become `Other`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "symptom" => StepId::Symptom,
            "duration" => StepId::Duration,
            "severity" => StepId::Severity,
            "additional_symptoms" => StepId::AdditionalSymptoms,
            "medical_history" => StepId::MedicalHistory,
            other => StepId::Other(other.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            StepId::Symptom => "symptom",
            StepId::Duration => "duration",
            StepId::Severity => "severity",
            StepId::AdditionalSymptoms => "additional_symptoms",
            StepId::MedicalHistory => "medical_history",
            StepId::Other(raw) => raw,
        }
    }

    /// Total mapping from step to progress metadata.
    ///
    /// Everything past `additional_symptoms`, including unknown identifiers,
    /// shows as the final segment. Unknown identifiers also get the neutral
    /// icon and colour.
    #[must_use]
    pub fn display(&self) -> StepDisplay {
        let (number, icon, color) = match self {
            StepId::Symptom => (1, StepIcon::Activity, "#3b82f6"),
            StepId::Duration => (2, StepIcon::Clock, "#10b981"),
            StepId::Severity => (3, StepIcon::Alert, "#f59e0b"),
            StepId::AdditionalSymptoms => (4, StepIcon::Brain, "#8b5cf6"),
            StepId::MedicalHistory => (STEP_COUNT, StepIcon::Heart, "#ef4444"),
            StepId::Other(_) => (STEP_COUNT, StepIcon::Check, NEUTRAL_COLOR),
        };
        StepDisplay {
            number,
            total: STEP_COUNT,
            progress_percent: progress_percent(number),
            icon,
            color,
        }
    }
}

fn progress_percent(number: u8) -> u8 {
    let segment = 100 / STEP_COUNT;
    if number >= STEP_COUNT {
        100
    } else {
        number * segment
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for StepId {
    fn from(value: &str) -> Self {
        StepId::parse(value)
    }
}
