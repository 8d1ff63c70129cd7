use symptom_core::machine::{AssessmentState, PendingRequest, Phase};
use symptom_core::model::{Question, Summary};

/// Everything the guided assessment screen needs, derived from the machine
/// state alone.
#[derive(Clone, Debug, PartialEq)]
pub enum AssessmentScreenVm {
    Start(StartVm),
    Question(QuestionVm),
    Summary(SummaryVm),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StartVm {
    pub starting: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub step_number: u8,
    pub step_total: u8,
    pub progress_percent: u8,
    pub icon: &'static str,
    pub color: &'static str,
    pub text: String,
    pub examples: Vec<String>,
    pub busy: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeVm {
    pub label: String,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionVm {
    pub condition: String,
    pub match_percent: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryVm {
    pub urgency: BadgeVm,
    pub severity: BadgeVm,
    pub primary_symptom: String,
    pub duration: String,
    pub additional_symptoms: Option<String>,
    pub predictions: Vec<PredictionVm>,
    pub busy: bool,
}

#[must_use]
pub fn map_assessment_screen(state: &AssessmentState) -> AssessmentScreenVm {
    match state.phase() {
        Phase::Idle => AssessmentScreenVm::Start(StartVm {
            starting: matches!(
                state.pending().map(|call| &call.request),
                Some(PendingRequest::Start)
            ),
            error: state.error().map(str::to_owned),
        }),
        Phase::AwaitingAnswer { question, .. } => AssessmentScreenVm::Question(map_question(
            question,
            state.is_busy(),
            state.error(),
        )),
        Phase::Complete { summary, .. } => {
            AssessmentScreenVm::Summary(map_summary(summary, state.is_busy()))
        }
    }
}

fn map_question(question: &Question, busy: bool, error: Option<&str>) -> QuestionVm {
    let display = question.step().display();
    QuestionVm {
        step_number: display.number,
        step_total: display.total,
        progress_percent: display.progress_percent,
        icon: display.icon.glyph(),
        color: display.color,
        text: question.text().to_owned(),
        examples: question.examples().to_vec(),
        busy,
        error: error.map(str::to_owned),
    }
}

fn map_summary(summary: &Summary, busy: bool) -> SummaryVm {
    let additional = summary.additional_symptoms();
    SummaryVm {
        urgency: BadgeVm {
            label: summary.urgency().badge_label(),
            color: summary.urgency().color(),
        },
        severity: BadgeVm {
            label: summary.severity().badge_label(),
            color: summary.severity().color(),
        },
        primary_symptom: summary.primary_symptom().to_owned(),
        duration: summary.duration().to_owned(),
        additional_symptoms: (!additional.is_empty()).then(|| additional.join(", ")),
        predictions: summary
            .predictions()
            .iter()
            .map(|p| PredictionVm {
                condition: p.condition.clone(),
                match_percent: p.match_percent(),
            })
            .collect(),
        busy,
    }
}
