use crate::model::step::NEUTRAL_COLOR;

/// Severity classification reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    VerySevere,
    Other(String),
}

impl Severity {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "mild" => Severity::Mild,
            "moderate" => Severity::Moderate,
            "severe" => Severity::Severe,
            "very_severe" => Severity::VerySevere,
            _ => Severity::Other(raw.trim().to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::VerySevere => "very_severe",
            Severity::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn badge_label(&self) -> String {
        badge_label(self.as_str())
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Severity::Mild => "#10b981",
            Severity::Moderate => "#f59e0b",
            Severity::Severe => "#ef4444",
            Severity::VerySevere => "#dc2626",
            Severity::Other(_) => NEUTRAL_COLOR,
        }
    }
}

/// Overall urgency classification reported by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Urgency {
    Low,
    Medium,
    High,
    Other(String),
}

impl Urgency {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Urgency::Low,
            "medium" => Urgency::Medium,
            "high" => Urgency::High,
            _ => Urgency::Other(raw.trim().to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Other(raw) => raw,
        }
    }

    #[must_use]
    pub fn badge_label(&self) -> String {
        badge_label(self.as_str())
    }

    #[must_use]
    pub fn color(&self) -> &'static str {
        match self {
            Urgency::Low => "#10b981",
            Urgency::Medium => "#f59e0b",
            Urgency::High => "#ef4444",
            Urgency::Other(_) => NEUTRAL_COLOR,
        }
    }
}

fn badge_label(raw: &str) -> String {
    raw.replace('_', " ").to_uppercase()
}

/// One predicted condition with the gateway's confidence score in `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub condition: String,
    pub confidence: f64,
}

impl Prediction {
    #[must_use]
    pub fn new(condition: impl Into<String>, confidence: f64) -> Self {
        Self {
            condition: condition.into(),
            confidence,
        }
    }

    /// Confidence as a whole percentage, clamped to `0..=100`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn match_percent(&self) -> u8 {
        if !self.confidence.is_finite() {
            return 0;
        }
        (self.confidence * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// Final structured result of a completed session. Immutable once received.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    primary_symptom: String,
    duration: String,
    severity: Severity,
    additional_symptoms: Vec<String>,
    predictions: Vec<Prediction>,
    urgency: Urgency,
}

impl Summary {
    #[must_use]
    pub fn new(
        primary_symptom: impl Into<String>,
        duration: impl Into<String>,
        severity: Severity,
        additional_symptoms: Vec<String>,
        predictions: Vec<Prediction>,
        urgency: Urgency,
    ) -> Self {
        Self {
            primary_symptom: primary_symptom.into(),
            duration: duration.into(),
            severity,
            additional_symptoms,
            predictions,
            urgency,
        }
    }

    #[must_use]
    pub fn primary_symptom(&self) -> &str {
        &self.primary_symptom
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }

    #[must_use]
    pub fn severity(&self) -> &Severity {
        &self.severity
    }

    #[must_use]
    pub fn additional_symptoms(&self) -> &[String] {
        &self.additional_symptoms
    }

    /// Predictions in the order the gateway ranked them.
    #[must_use]
    pub fn predictions(&self) -> &[Prediction] {
        &self.predictions
    }

    #[must_use]
    pub fn urgency(&self) -> &Urgency {
        &self.urgency
    }
}
