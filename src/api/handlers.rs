// JSON endpoint handlers
//
// Each handler is a pure function of the current wall clock and the
// constants in `types`; nothing is read from the request and nothing is
// stored between requests.

use chrono::Local;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

use super::response::json_response;
use super::types::{
    CourseInfo, HealthStatus, ToolCatalog, APP_DESCRIPTION, APP_VERSION, COURSE_NAME,
    DEVOPS_TOOLS, INSTRUCTOR, STUDENT_NAME,
};
use crate::config::HttpConfig;

/// GET /api/info
pub fn course_info(http: &HttpConfig) -> Response<Full<Bytes>> {
    let info = CourseInfo {
        materia: COURSE_NAME,
        profesor: INSTRUCTOR,
        alumno: STUDENT_NAME,
        fecha: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        version: APP_VERSION,
        descripcion: APP_DESCRIPTION,
    };

    json_response(StatusCode::OK, &info, http)
}

/// GET /api/health
pub fn health(http: &HttpConfig) -> Response<Full<Bytes>> {
    let status = HealthStatus {
        status: "healthy",
        timestamp: Local::now().to_rfc3339(),
        uptime: "running",
    };

    json_response(StatusCode::OK, &status, http)
}

/// GET /api/devops-tools
pub fn devops_tools(http: &HttpConfig) -> Response<Full<Bytes>> {
    let catalog = ToolCatalog {
        tools: &DEVOPS_TOOLS,
    };

    json_response(StatusCode::OK, &catalog, http)
}
