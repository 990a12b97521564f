//! Turns an analysis response into what the results section shows.
use docfinder_api_types::{AnalysisResponse, Doctor};

pub const DEFAULT_RATING: &str = "4.0";
pub const DEFAULT_EXPERIENCE: &str = "10+ years";
pub const PHONE_UNAVAILABLE: &str = "Not available";
pub const NO_DOCTORS_FOUND: &str =
    "No doctors found matching your criteria. Try expanding your search area.";

#[derive(Clone, Debug, PartialEq)]
pub struct ResultsView {
    pub specialization: String,
    pub analysis: String,
    pub doctors: DoctorsView,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DoctorsView {
    /// Nothing matched, show this notice instead of cards.
    Empty(&'static str),
    Cards(Vec<DoctorCard>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct DoctorCard {
    pub name: String,
    pub specialization: String,
    /// `"hospital, district"`
    pub location: String,
    pub rating: String,
    pub experience: String,
    pub languages: Vec<String>,
    pub actions: [CardAction; 3],
}

/// The buttons at the bottom of a card. They're display only for now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    Book,
    Call { phone: String },
    ViewProfile,
}

impl CardAction {
    pub fn label(&self) -> String {
        match self {
            CardAction::Book => "Book Appointment".to_string(),
            CardAction::Call { phone } => format!("Call: {phone}"),
            CardAction::ViewProfile => "View Profile".to_string(),
        }
    }

    pub fn is_primary(&self) -> bool {
        matches!(self, CardAction::Book)
    }
}

fn or_default(value: Option<&str>, default: &str) -> String {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(default)
        .to_string()
}

impl From<&Doctor> for DoctorCard {
    fn from(doctor: &Doctor) -> Self {
        DoctorCard {
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            location: format!("{}, {}", doctor.hospital, doctor.district),
            rating: or_default(doctor.rating.as_deref(), DEFAULT_RATING),
            experience: or_default(doctor.experience.as_deref(), DEFAULT_EXPERIENCE),
            languages: doctor.language_list(),
            actions: [
                CardAction::Book,
                CardAction::Call {
                    phone: or_default(doctor.phone.as_deref(), PHONE_UNAVAILABLE),
                },
                CardAction::ViewProfile,
            ],
        }
    }
}

pub fn results_view(response: &AnalysisResponse) -> ResultsView {
    let doctors = if response.doctors.is_empty() {
        DoctorsView::Empty(NO_DOCTORS_FOUND)
    } else {
        DoctorsView::Cards(response.doctors.iter().map(DoctorCard::from).collect())
    };
    ResultsView {
        specialization: response.specialization.clone(),
        analysis: response.analysis.clone(),
        doctors,
    }
}
