// Functional contract tests for the four routes, driven over real HTTP.

mod common;

use common::spawn_server;

#[tokio::test]
async fn test_index_page() {
    let base = spawn_server().await;
    let resp = reqwest::get(format!("{base}/")).await.unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.contains("text/html"));

    let body = resp.text().await.unwrap();
    assert!(body.contains("Emmanuel Rodríguez Valdés"));
}

#[tokio::test]
async fn test_api_info() {
    let base = spawn_server().await;
    let resp = reqwest::get(format!("{base}/api/info")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["alumno"], "Emmanuel Rodríguez Valdés");
    assert_eq!(data["materia"], "Herramientas de Automatización en DevOps");
    assert_eq!(data["version"], "1.0.0");
    assert!(data["fecha"].is_string());
    assert!(data["descripcion"].is_string());
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;
    let resp = reqwest::get(format!("{base}/api/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(data["status"], "healthy");
    assert_eq!(data["uptime"], "running");
    assert!(data["timestamp"].is_string());
}

#[tokio::test]
async fn test_devops_tools() {
    let base = spawn_server().await;
    let resp = reqwest::get(format!("{base}/api/devops-tools")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let data: serde_json::Value = resp.json().await.unwrap();
    let tools = data["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 5);

    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        ["Docker", "GitHub Actions", "Terraform", "Ansible", "Jenkins"]
    );

    for tool in tools {
        assert!(tool["description"].is_string());
        assert!(tool["category"].is_string());
    }
}

#[tokio::test]
async fn test_devops_tools_is_byte_identical_across_requests() {
    let base = spawn_server().await;
    let url = format!("{base}/api/devops-tools");

    let first = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    let second = reqwest::get(&url).await.unwrap().bytes().await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_unknown_path_returns_404() {
    let base = spawn_server().await;
    let resp = reqwest::get(format!("{base}/nonexistent-endpoint"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_json_content_type_on_api_routes() {
    let base = spawn_server().await;
    for path in ["/api/info", "/api/health", "/api/devops-tools"] {
        let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
        let content_type = resp.headers()["content-type"].to_str().unwrap();
        assert!(content_type.contains("application/json"), "{path}");
    }
}

#[tokio::test]
async fn test_head_on_index_has_empty_body() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();
    let resp = client.head(format!("{base}/")).send().await.unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.contains("text/html"));
    assert!(resp.text().await.unwrap().is_empty());
}
