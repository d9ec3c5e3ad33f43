/// End-to-end tests against the real router bound to an ephemeral port.
/// Exercises the full store contract through the same client the views use.
use rust_propostas_api::api_client::ApiClient;
use rust_propostas_api::handlers::{self, AppState};
use rust_propostas_api::models::NovaProposta;
use rust_propostas_api::policy::AllowAll;
use rust_propostas_api::store::PropostaStore;
use serde_json::json;
use std::sync::Arc;

/// Spawns the store service on an ephemeral port. Returns a client pointing
/// at it plus the base URL for raw requests.
async fn spawn_service() -> (ApiClient, String) {
    let state = Arc::new(AppState::new(PropostaStore::new(), Arc::new(AllowAll)));
    let app = handlers::router(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let base = format!("http://{}", addr);
    (ApiClient::new(base.clone()), base)
}

#[tokio::test]
async fn n_appends_return_n_records_in_submission_order() {
    let (client, _base) = spawn_service().await;

    for i in 0..5 {
        let ack = client
            .criar_proposta(&NovaProposta {
                nome: format!("Cliente {}", i),
                valor: json!(100 + i),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(ack.sucesso);
    }

    let propostas = client.listar_propostas().await.unwrap();
    assert_eq!(propostas.len(), 5);
    for (i, p) in propostas.iter().enumerate() {
        assert_eq!(p.nome, format!("Cliente {}", i));
    }
}

#[tokio::test]
async fn server_assigns_timestamp_and_ignores_caller_data() {
    let (client, base) = spawn_service().await;
    let antes = chrono::Utc::now();

    // The raw POST body carries a "data" field; the store must replace it.
    let raw = reqwest::Client::new();
    raw.post(format!("{}/propostas", base))
        .json(&json!({ "nome": "Maria", "data": "1999-01-01T00:00:00Z" }))
        .send()
        .await
        .unwrap();

    let propostas = client.listar_propostas().await.unwrap();
    assert_eq!(propostas.len(), 1);
    assert!(propostas[0].data >= antes);
}

#[tokio::test]
async fn malformed_input_is_accepted_and_stored_verbatim() {
    let (client, base) = spawn_service().await;

    let ack = client
        .criar_proposta(&NovaProposta {
            valor: json!("abc"),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(ack.sucesso);

    // Entirely empty body is accepted too.
    let raw = reqwest::Client::new();
    let response = raw
        .post(format!("{}/propostas", base))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let propostas = client.listar_propostas().await.unwrap();
    assert_eq!(propostas.len(), 2);
    assert_eq!(propostas[0].valor, json!("abc"));
    assert_eq!(propostas[1].nome, "");
    assert!(propostas[1].valor.is_null());
}

#[tokio::test]
async fn partner_append_increases_count_by_one_and_allows_duplicates() {
    let (client, _base) = spawn_service().await;

    assert_eq!(client.listar_parceiros().await.unwrap().len(), 0);

    client.cadastrar_parceiro("Evolve").await.unwrap();
    let parceiros = client.listar_parceiros().await.unwrap();
    assert_eq!(parceiros.len(), 1);
    assert_eq!(parceiros[0].nome, "Evolve");

    client.cadastrar_parceiro("Evolve").await.unwrap();
    assert_eq!(client.listar_parceiros().await.unwrap().len(), 2);
}

#[tokio::test]
async fn empty_partner_name_is_accepted() {
    let (client, base) = spawn_service().await;

    let raw = reqwest::Client::new();
    let response = raw
        .post(format!("{}/parceiros", base))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let parceiros = client.listar_parceiros().await.unwrap();
    assert_eq!(parceiros.len(), 1);
    assert_eq!(parceiros[0].nome, "");
}

#[tokio::test]
async fn separate_service_instances_share_nothing() {
    // Equivalent of the restart-resets property: a fresh process starts from
    // an empty store.
    let (primeiro, _) = spawn_service().await;
    primeiro
        .criar_proposta(&NovaProposta::default())
        .await
        .unwrap();
    assert_eq!(primeiro.listar_propostas().await.unwrap().len(), 1);

    let (segundo, _) = spawn_service().await;
    assert_eq!(segundo.listar_propostas().await.unwrap().len(), 0);
    assert_eq!(segundo.listar_parceiros().await.unwrap().len(), 0);
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let (_client, base) = spawn_service().await;

    let raw = reqwest::Client::new();
    let response = raw.get(format!("{}/health", base)).send().await.unwrap();
    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn concurrent_submissions_are_all_retained() {
    let (client, _base) = spawn_service().await;

    let mut handles = vec![];
    for i in 0..20 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            client
                .criar_proposta(&NovaProposta {
                    nome: format!("Cliente {}", i),
                    ..Default::default()
                })
                .await
        }));
    }
    for handle in handles {
        assert!(handle.await.unwrap().is_ok());
    }

    assert_eq!(client.listar_propostas().await.unwrap().len(), 20);
}
