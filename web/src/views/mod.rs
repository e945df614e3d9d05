mod dashboard;
pub use dashboard::Dashboard;

mod registrations;
pub use registrations::Registrations;
