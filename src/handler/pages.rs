// Landing page
// Static HTML rendered from the same constants the API serves, so the
// page and /api/info cannot disagree about the literals.

use crate::api::types::{APP_VERSION, COURSE_NAME, DEVOPS_TOOLS, STUDENT_NAME};

/// Render the landing page HTML
pub fn render_index() -> String {
    let tool_items: String = DEVOPS_TOOLS
        .iter()
        .map(|t| {
            format!(
                "        <li><strong>{}</strong> ({}) — {}</li>\n",
                t.name, t.category, t.description
            )
        })
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{COURSE_NAME}</title>
    <style>
        body {{
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Arial, sans-serif;
            line-height: 1.6;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f5f5f5;
            color: #333;
        }}
        h1, h2 {{
            color: #667eea;
            border-bottom: 2px solid #667eea;
            padding-bottom: 5px;
        }}
        code {{
            background: #e8e8e8;
            padding: 2px 6px;
            border-radius: 3px;
            font-family: "Courier New", monospace;
        }}
        .meta {{ color: #666; }}
    </style>
</head>
<body>
    <h1>{COURSE_NAME}</h1>
    <p class="meta">Alumno: {STUDENT_NAME} · Versión {APP_VERSION}</p>
    <p>Aplicación web de demostración para la automatización DevOps.</p>

    <h2>Endpoints</h2>
    <ul>
        <li><code>GET /api/info</code> — información del curso</li>
        <li><code>GET /api/health</code> — estado del servicio</li>
        <li><code>GET /api/devops-tools</code> — catálogo de herramientas</li>
    </ul>

    <h2>Herramientas</h2>
    <ul>
{tool_items}    </ul>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_contains_student_name() {
        let html = render_index();
        assert!(html.contains("Emmanuel Rodríguez Valdés"));
        assert!(html.contains("Herramientas de Automatización en DevOps"));
    }

    #[test]
    fn test_index_lists_all_tools() {
        let html = render_index();
        for tool in &DEVOPS_TOOLS {
            assert!(html.contains(tool.name), "missing {}", tool.name);
        }
    }
}
