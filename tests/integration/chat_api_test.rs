//! Chat API integration tests driven through the real router

mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{TestApp, MOCK_REPLY};

/// Helper: build a request, optionally with a JSON body
fn request(method: Method, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);

    if let Some(b) = body {
        builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&b).unwrap()))
            .unwrap()
    } else {
        builder.body(Body::empty()).unwrap()
    }
}

/// Helper: parse response body as JSON Value
async fn parse_body(response: axum::http::Response<Body>) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

mod test_users {
    use super::*;

    #[tokio::test]
    async fn test_get_my_user_returns_primary_user() {
        let app = TestApp::new().await.unwrap();

        let req = request(Method::GET, "/users/me", None);
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body["id"], 1);
        assert_eq!(body["name"], "Alice");
    }

    #[tokio::test]
    async fn test_get_my_user_empty_store_returns_404() {
        let app = TestApp::empty().await.unwrap();

        let req = request(Method::GET, "/users/me", None);
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = parse_body(resp).await;
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}

mod test_start_chat {
    use super::*;

    #[tokio::test]
    async fn test_start_chat_returns_201() {
        let app = TestApp::new().await.unwrap();

        let req = request(Method::POST, "/chats/", Some(json!({"user_id": 1})));
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = parse_body(resp).await;
        assert_eq!(body["chat_id"], 1);
        assert_eq!(body["user_id"], 1);
        assert!(body["created_at"].is_string(), "timestamps are strings");
    }

    #[tokio::test]
    async fn test_start_chat_unknown_user_returns_404() {
        let app = TestApp::new().await.unwrap();

        let req = request(Method::POST, "/chats/", Some(json!({"user_id": 999})));
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(app.count_chats().await, 0);
    }

    #[tokio::test]
    async fn test_start_chat_zero_user_id_returns_400() {
        let app = TestApp::new().await.unwrap();

        let req = request(Method::POST, "/chats/", Some(json!({"user_id": 0})));
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_start_chat_missing_body_field_returns_400() {
        let app = TestApp::new().await.unwrap();

        let req = request(Method::POST, "/chats/", Some(json!({})));
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}

mod test_send_message {
    use super::*;

    async fn seeded_chat(app: &TestApp) -> i64 {
        app.service.start_chat(1).await.unwrap().chat_id
    }

    #[tokio::test]
    async fn test_send_message_returns_message_pair() {
        let app = TestApp::new().await.unwrap();
        let chat_id = seeded_chat(&app).await;

        let req = request(
            Method::POST,
            "/messages/",
            Some(json!({"chat_id": chat_id, "sender": "USER", "text": "Hi"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body = parse_body(resp).await;
        assert_eq!(body["user_message"]["message_id"], 1);
        assert_eq!(body["user_message"]["sender"], "USER");
        assert_eq!(body["user_message"]["text"], "Hi");
        assert_eq!(body["user_message"]["chat_id"], chat_id);
        assert_eq!(body["bot_message"]["message_id"], 2);
        assert_eq!(body["bot_message"]["sender"], "BOT");
        assert_eq!(body["bot_message"]["text"], MOCK_REPLY);
        assert!(body["user_message"]["timestamp"].is_string());
        assert!(body["bot_message"]["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_send_message_unknown_chat_returns_404_no_rows() {
        let app = TestApp::new().await.unwrap();

        let req = request(
            Method::POST,
            "/messages/",
            Some(json!({"chat_id": 999, "sender": "USER", "text": "Hi"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(app.count_messages().await, 0);
    }

    #[tokio::test]
    async fn test_send_message_unknown_sender_tag_returns_400() {
        let app = TestApp::new().await.unwrap();
        let chat_id = seeded_chat(&app).await;

        // Sender is a closed enumeration; arbitrary tags are rejected
        let req = request(
            Method::POST,
            "/messages/",
            Some(json!({"chat_id": chat_id, "sender": "ROBOT", "text": "Hi"})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app.count_messages().await, 0);
    }

    #[tokio::test]
    async fn test_send_message_empty_text_returns_400() {
        let app = TestApp::new().await.unwrap();
        let chat_id = seeded_chat(&app).await;

        let req = request(
            Method::POST,
            "/messages/",
            Some(json!({"chat_id": chat_id, "sender": "USER", "text": ""})),
        );
        let resp = app.test_router().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(app.count_messages().await, 0);
    }
}

mod test_list_messages {
    use super::*;

    #[tokio::test]
    async fn test_list_messages_returns_pairs_in_order() {
        let app = TestApp::new().await.unwrap();
        let chat = app.service.start_chat(1).await.unwrap();
        app.service
            .send_message(chat.chat_id, parrot_chat::Sender::User, "Hi")
            .await
            .unwrap();

        let uri = format!("/chats/{}/messages/", chat.chat_id);
        let resp = app
            .test_router()
            .oneshot(request(Method::GET, &uri, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        let messages = body.as_array().unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["sender"], "USER");
        assert_eq!(messages[1]["sender"], "BOT");
        assert_eq!(messages[0]["message_id"], 1);
        assert_eq!(messages[1]["message_id"], 2);
    }

    #[tokio::test]
    async fn test_list_messages_empty_chat_returns_empty_array() {
        let app = TestApp::new().await.unwrap();
        let chat = app.service.start_chat(1).await.unwrap();

        let uri = format!("/chats/{}/messages/", chat.chat_id);
        let resp = app
            .test_router()
            .oneshot(request(Method::GET, &uri, None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_list_messages_unknown_chat_returns_404() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .test_router()
            .oneshot(request(Method::GET, "/chats/999/messages/", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}

mod test_list_chats {
    use super::*;

    #[tokio::test]
    async fn test_list_chats_empty_returns_empty_array() {
        let app = TestApp::new().await.unwrap();

        let resp = app
            .test_router()
            .oneshot(request(Method::GET, "/users/1/chats/", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_list_chats_returns_chats_in_creation_order() {
        let app = TestApp::new().await.unwrap();
        let first = app.service.start_chat(1).await.unwrap();
        let second = app.service.start_chat(1).await.unwrap();

        let resp = app
            .test_router()
            .oneshot(request(Method::GET, "/users/1/chats/", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let body = parse_body(resp).await;
        let chats = body.as_array().unwrap();
        assert_eq!(chats.len(), 2);
        assert_eq!(chats[0]["chat_id"], first.chat_id);
        assert_eq!(chats[1]["chat_id"], second.chat_id);
    }
}

mod test_full_scenario {
    use super::*;

    /// Seed Alice, start a chat, exchange one message pair, then read
    /// everything back in order.
    #[tokio::test]
    async fn test_alice_conversation_roundtrip() {
        let app = TestApp::new().await.unwrap();
        let router = app.test_router();

        let resp = router
            .clone()
            .oneshot(request(Method::GET, "/users/me", None))
            .await
            .unwrap();
        let user = parse_body(resp).await;
        assert_eq!(user, json!({"id": 1, "name": "Alice"}));

        let resp = router
            .clone()
            .oneshot(request(
                Method::POST,
                "/chats/",
                Some(json!({"user_id": 1})),
            ))
            .await
            .unwrap();
        let chat = parse_body(resp).await;
        assert_eq!(chat["chat_id"], 1);
        assert_eq!(chat["user_id"], 1);

        let resp = router
            .clone()
            .oneshot(request(
                Method::POST,
                "/messages/",
                Some(json!({"chat_id": 1, "sender": "USER", "text": "Hi"})),
            ))
            .await
            .unwrap();
        let exchange = parse_body(resp).await;
        assert_eq!(exchange["user_message"]["message_id"], 1);
        assert_eq!(exchange["user_message"]["text"], "Hi");
        assert_eq!(exchange["bot_message"]["message_id"], 2);
        assert_eq!(exchange["bot_message"]["sender"], "BOT");

        let resp = router
            .clone()
            .oneshot(request(Method::GET, "/chats/1/messages/", None))
            .await
            .unwrap();
        let history = parse_body(resp).await;
        let messages = history.as_array().unwrap();
        assert_eq!(messages[0]["message_id"], 1);
        assert_eq!(messages[1]["message_id"], 2);

        let resp = router
            .clone()
            .oneshot(request(Method::GET, "/users/1/chats/", None))
            .await
            .unwrap();
        let chats = parse_body(resp).await;
        assert_eq!(chats.as_array().unwrap().len(), 1);
        assert_eq!(chats[0]["chat_id"], 1);
    }
}

mod test_composed_app {
    use super::*;
    use parrot_common::{db, Config};
    use parrot_replies::canned::DEFAULT_REPLIES;

    fn test_config() -> Config {
        Config {
            database_url: String::new(), // pool is passed explicitly
            seed_user_name: "Alice".to_string(),
            cors_allowed_origin: "http://localhost:3000".to_string(),
            legacy_history_404: false,
            rust_log: "parrot=debug".to_string(),
            port: 0,
        }
    }

    #[tokio::test]
    async fn test_create_app_serves_health_and_seeds_user() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("app.db").display());
        let pool = db::connect(&url).await.unwrap();

        let app = parrot_app::create_app(&test_config(), pool)
            .await
            .unwrap();

        let resp = app
            .clone()
            .oneshot(request(Method::GET, "/health", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = app
            .clone()
            .oneshot(request(Method::GET, "/users/me", None))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let user = parse_body(resp).await;
        assert_eq!(user["name"], "Alice");
    }

    #[tokio::test]
    async fn test_create_app_bot_reply_drawn_from_canned_set() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("app.db").display());
        let pool = db::connect(&url).await.unwrap();

        let app = parrot_app::create_app(&test_config(), pool)
            .await
            .unwrap();

        app.clone()
            .oneshot(request(
                Method::POST,
                "/chats/",
                Some(json!({"user_id": 1})),
            ))
            .await
            .unwrap();

        let resp = app
            .clone()
            .oneshot(request(
                Method::POST,
                "/messages/",
                Some(json!({"chat_id": 1, "sender": "USER", "text": "Hi"})),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);

        let exchange = parse_body(resp).await;
        let reply = exchange["bot_message"]["text"].as_str().unwrap();
        assert!(
            DEFAULT_REPLIES.contains(&reply),
            "unexpected canned reply: {reply}"
        );
    }
}
