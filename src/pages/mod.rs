//! Pages
//!
//! Top-level page components for each route.

pub mod auth;
pub mod dashboard;
pub mod doctor_access;
pub mod home;
pub mod medications;
pub mod settings;
pub mod vitals;

pub use auth::AuthPage;
pub use dashboard::Dashboard;
pub use doctor_access::DoctorAccess;
pub use home::Home;
pub use medications::Medications;
pub use settings::Settings;
pub use vitals::LogVitals;
