use super::super::domain::{ActivityComfort, Formality, Occasion};

/// Desired formality and activity comfort for an occasion. Empty means no preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OccasionProfile {
    pub formality: Option<Formality>,
    pub activity: Option<ActivityComfort>,
}

impl OccasionProfile {
    pub const NONE: Self = Self {
        formality: None,
        activity: None,
    };

    const fn wants(formality: Formality, activity: ActivityComfort) -> Self {
        Self {
            formality: Some(formality),
            activity: Some(activity),
        }
    }
}

const CASUAL_OUTING: OccasionProfile =
    OccasionProfile::wants(Formality::Casual, ActivityComfort::Outdoor);
const WORK_OFFICE: OccasionProfile =
    OccasionProfile::wants(Formality::Business, ActivityComfort::Indoor);
const FORMAL_EVENT: OccasionProfile =
    OccasionProfile::wants(Formality::Formal, ActivityComfort::Indoor);
const WORKOUT: OccasionProfile =
    OccasionProfile::wants(Formality::Workout, ActivityComfort::Workout);

pub fn occasion_profile(occasion: &Occasion) -> OccasionProfile {
    match occasion {
        Occasion::CasualOuting => CASUAL_OUTING,
        Occasion::WorkOffice => WORK_OFFICE,
        Occasion::FormalEvent => FORMAL_EVENT,
        Occasion::Workout => WORKOUT,
        Occasion::Unrecognized(_) => OccasionProfile::NONE,
    }
}
