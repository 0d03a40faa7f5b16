//! # SchoolHub Models
//!
//! Database records, request DTOs and response bodies for the SchoolHub API.
//!
//! - [`adms`]: administrator records and DTOs
//! - [`teachers`]: teacher records, school links and DTOs
//! - [`students`]: student records, teacher links and DTOs
//! - [`schools`]: school records and DTOs
//! - [`principal`]: the [`Principal`] trait shared by every role that can log in
//! - [`responses`]: generic message and error bodies
//!
//! Records that carry a password hash never serialize it.
//!
//! # Example
//!
//! ```ignore
//! use schoolhub_models::{Adm, AdmDto, Principal};
//!
//! let adms: Vec<Adm> = sqlx::query_as("SELECT * FROM adms").fetch_all(&db).await?;
//! assert_eq!(Adm::LABEL, "Adm");
//! ```

pub mod adms;
pub mod principal;
pub mod responses;
pub mod schools;
pub mod students;
pub mod teachers;

// Re-export commonly used types at crate root
pub use adms::{Adm, AdmDto, AdmLoginResponse};
pub use principal::Principal;
pub use responses::{ErrorResponse, MessageResponse};
pub use schools::{School, SchoolDto};
pub use students::{Student, StudentDetails, StudentDto, StudentLoginResponse};
pub use teachers::{
    CreateTeacherResponse, Teacher, TeacherDetails, TeacherDto, TeacherLoginResponse,
};
