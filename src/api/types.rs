// API payload types
// Response shapes for the JSON endpoints, plus the process-wide literals
// they are built from. Serialized key order follows struct field order.

use serde::Serialize;

/// Course subject name
pub const COURSE_NAME: &str = "Herramientas de Automatización en DevOps";
/// Instructor placeholder, as published
pub const INSTRUCTOR: &str = "Dr. [Nombre del Profesor]";
/// Student name; also required verbatim on the landing page
pub const STUDENT_NAME: &str = "Emmanuel Rodríguez Valdés";
/// Application version reported by /api/info
pub const APP_VERSION: &str = "1.0.0";
/// Application description reported by /api/info
pub const APP_DESCRIPTION: &str = "Aplicación web para demostrar automatización DevOps";

/// Course metadata returned by `/api/info`
///
/// Built fresh per request; `fecha` carries the request wall-clock time.
#[derive(Debug, Serialize)]
pub struct CourseInfo {
    pub materia: &'static str,
    pub profesor: &'static str,
    pub alumno: &'static str,
    pub fecha: String,
    pub version: &'static str,
    pub descripcion: &'static str,
}

/// Health status returned by `/api/health`
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub uptime: &'static str,
}

/// One tool in the DevOps tool catalog
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ToolEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

/// Catalog wrapper returned by `/api/devops-tools`
#[derive(Debug, Serialize)]
pub struct ToolCatalog {
    pub tools: &'static [ToolEntry],
}

/// The five catalog entries, in publication order. Never mutated.
pub const DEVOPS_TOOLS: [ToolEntry; 5] = [
    ToolEntry {
        name: "Docker",
        description: "Plataforma de contenedores para desarrollo y despliegue",
        category: "Contenerización",
    },
    ToolEntry {
        name: "GitHub Actions",
        description: "Automatización de CI/CD integrada con GitHub",
        category: "CI/CD",
    },
    ToolEntry {
        name: "Terraform",
        description: "Infraestructura como código para provisionamiento",
        category: "IaC",
    },
    ToolEntry {
        name: "Ansible",
        description: "Automatización de configuración y gestión",
        category: "Configuración",
    },
    ToolEntry {
        name: "Jenkins",
        description: "Servidor de automatización para CI/CD",
        category: "CI/CD",
    },
];
