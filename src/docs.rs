use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use schoolhub_models::{
    Adm, AdmDto, AdmLoginResponse, CreateTeacherResponse, ErrorResponse, MessageResponse, School,
    SchoolDto, Student, StudentDetails, StudentDto, StudentLoginResponse, Teacher, TeacherDetails,
    TeacherDto, TeacherLoginResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::adms::controller::create_adm,
        crate::modules::adms::controller::update_adm,
        crate::modules::adms::controller::delete_adm,
        crate::modules::adms::controller::list_adms,
        crate::modules::adms::controller::login_adm,
        crate::modules::teachers::controller::create_teacher,
        crate::modules::teachers::controller::update_teacher,
        crate::modules::teachers::controller::delete_teacher,
        crate::modules::teachers::controller::list_teachers,
        crate::modules::teachers::controller::login_teacher,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
        crate::modules::students::controller::list_students,
        crate::modules::students::controller::login_student,
        crate::modules::schools::controller::create_school,
        crate::modules::schools::controller::update_school,
        crate::modules::schools::controller::delete_school,
        crate::modules::schools::controller::list_schools,
    ),
    components(
        schemas(
            Adm,
            AdmDto,
            AdmLoginResponse,
            Teacher,
            TeacherDetails,
            TeacherDto,
            TeacherLoginResponse,
            CreateTeacherResponse,
            Student,
            StudentDetails,
            StudentDto,
            StudentLoginResponse,
            School,
            SchoolDto,
            MessageResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Administrators", description = "Administrator management and login"),
        (name = "Teachers", description = "Teacher management and login"),
        (name = "Students", description = "Student management and login"),
        (name = "Schools", description = "School management, mutations restricted to administrators")
    ),
    info(
        title = "SchoolHub API",
        version = "0.1.0",
        description = "School, administrator, teacher and student management with CPF-based login.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}
