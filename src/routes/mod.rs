pub mod assignments;

pub mod courses;

pub mod dashboard;

pub mod lecturers;

pub mod queries;

pub mod reports;

pub mod students;

pub mod submissions;

pub mod system;

pub mod transcript;

pub use assignments::configure_assignments_routes;
pub use courses::configure_courses_routes;
pub use dashboard::configure_dashboard_routes;
pub use lecturers::configure_lecturers_routes;
pub use queries::configure_queries_routes;
pub use reports::configure_reports_routes;
pub use students::configure_students_routes;
pub use submissions::configure_submissions_routes;
pub use system::configure_system_routes;
pub use transcript::configure_transcript_routes;
