use super::state::ApiState;

use axum::Json;
use axum::extract::State;
use axum::response::Html;
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct HealthResponse {
    status: &'static str,
    users: usize,
    api_configured: bool,
}

pub(super) async fn health(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        users: state.chat.user_count().await,
        api_configured: state.chat.is_configured(),
    })
}

/// Human-readable status page served at `/`.
pub(super) async fn status_page(State(state): State<Arc<ApiState>>) -> Html<String> {
    let users = state.chat.user_count().await;
    Html(render_status_page(
        state.port,
        state.chat.is_configured(),
        users,
        state.started_at.elapsed().as_secs(),
    ))
}

fn render_status_page(port: u16, api_configured: bool, users: usize, uptime_seconds: u64) -> String {
    let (api_class, api_label) = if api_configured {
        ("api-ok", "✅ Настроены")
    } else {
        ("api-error", "❌ Не настроены")
    };

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Бэкенд ИИ-стилиста</title>
    <meta charset="UTF-8">
    <style>
        body {{ font-family: Arial; padding: 40px; text-align: center; }}
        h1 {{ color: #b21ddc; }}
        .card {{
            background: white;
            border-radius: 15px;
            padding: 30px;
            box-shadow: 0 5px 20px rgba(0,0,0,0.1);
            display: inline-block;
            margin: 20px;
        }}
        .status {{ color: green; font-weight: bold; }}
        .reset-btn {{
            background: #b21ddc;
            color: white;
            border: none;
            padding: 10px 20px;
            border-radius: 10px;
            cursor: pointer;
            margin: 10px;
        }}
        .api-status {{ padding: 5px 10px; border-radius: 5px; font-weight: bold; }}
        .api-ok {{ background: #d4edda; color: #155724; }}
        .api-error {{ background: #f8d7da; color: #721c24; }}
    </style>
</head>
<body>
    <div class="card">
        <h1>🎨 Бэкенд ИИ-стилиста</h1>
        <p class="status">✅ Сервер работает</p>
        <p>Порт: {port}</p>
        <p>API ключи: <span class="api-status {api_class}">{api_label}</span></p>
        <p>Пользователей: {users}</p>
        <p>Аптайм: {uptime_seconds} с</p>
        <div style="margin: 20px;">
            <button class="reset-btn" onclick="resetHistory()">Сбросить историю</button>
        </div>
        <div>
            <a href="/api/health">Проверка здоровья</a>
        </div>
    </div>
    <script>
        function resetHistory() {{
            fetch('/api/reset', {{ method: 'POST' }})
                .then(() => alert('История сброшена!'))
                .catch(() => alert('Ошибка'));
        }}
    </script>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_page_reflects_configuration() {
        let page = render_status_page(3000, false, 2, 5);
        assert!(page.contains("Порт: 3000"));
        assert!(page.contains("api-error"));
        assert!(page.contains("Пользователей: 2"));

        let page = render_status_page(8080, true, 0, 5);
        assert!(page.contains("api-ok"));
        assert!(page.contains("✅ Настроены"));
    }

    #[test]
    fn health_serializes_camel_case() {
        let json = serde_json::to_value(HealthResponse {
            status: "ok",
            users: 3,
            api_configured: true,
        })
        .unwrap();

        assert_eq!(
            json,
            serde_json::json!({"status": "ok", "users": 3, "apiConfigured": true})
        );
    }
}
