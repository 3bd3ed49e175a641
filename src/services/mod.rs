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

pub use assignments::AssignmentService;
pub use courses::CourseService;
pub use dashboard::DashboardService;
pub use lecturers::LecturerService;
pub use queries::QueryService;
pub use reports::ReportService;
pub use students::StudentService;
pub use submissions::SubmissionService;
pub use system::SystemService;
pub use transcript::TranscriptService;
