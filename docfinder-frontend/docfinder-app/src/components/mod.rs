pub mod doctor_results;
pub mod loading;
pub mod search_panel;
pub mod toast;
