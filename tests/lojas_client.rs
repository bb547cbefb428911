//! Integration tests for the lojas backend client using wiremock.
//!
//! These tests mock the backend's HTTP responses and drive the client and the
//! controller end to end without a running backend.

use lojas_view::{
    AssociationForm, BackendConfig, BannerConfig, LojasClient, MemorySurface, Region,
    StoreBackend, StoreForm, TransportError, ViewError, ViewSyncController,
};
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> LojasClient {
    LojasClient::new(BackendConfig {
        base_url: server.uri(),
        request_timeout_ms: 2000,
    })
    .unwrap()
}

#[tokio::test]
async fn test_list_stores_parses_backend_rows() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/lojas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lojas": [
                {"id": 1, "nome": "Centro", "descricao": "Matriz", "endereco": "Rua A", "contato": "1111"},
                {"id": 2, "nome": "Norte", "descricao": null, "endereco": "Rua B", "contato": "2222"}
            ]
        })))
        .mount(&server)
        .await;

    let stores = client_for(&server).list_stores().await.unwrap();

    assert_eq!(stores.lojas.len(), 2);
    assert_eq!(stores.lojas[0].nome, "Centro");
    assert_eq!(stores.lojas[1].descricao, "");
}

#[tokio::test]
async fn test_create_store_sends_urlencoded_form() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/lojas"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("nome=Loja+%26+Cia"))
        .and(body_string_contains("contato=11+5555"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Loja cadastrada com sucesso",
            "loja_id": 3,
            "lojas": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .create_store(&StoreForm::new("Loja & Cia", "Nova", "Rua C", "11 5555"))
        .await
        .unwrap();

    assert_eq!(reply.message.as_deref(), Some("Loja cadastrada com sucesso"));
}

#[tokio::test]
async fn test_associate_sends_zero_defaults() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/produtos_lojas"))
        .and(body_string_contains("loja_id=1"))
        .and(body_string_contains("produto_id=7"))
        .and(body_string_contains("quantidade_estoque=0"))
        .and(body_string_contains("preco_loja=0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": "Produto 7 associado à loja 1 com sucesso"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .associate_product(&AssociationForm::new("1", "7"))
        .await
        .unwrap();

    assert!(reply.message.is_some());
}

#[tokio::test]
async fn test_server_error_body_is_decoded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/lojas"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"error": "Erro ao cadastrar loja"})),
        )
        .mount(&server)
        .await;

    let reply = client_for(&server)
        .create_store(&StoreForm::new("Centro", "", "", ""))
        .await
        .unwrap();

    let err = reply.into_outcome("fallback").unwrap_err();
    assert!(matches!(err, ViewError::Server(ref text) if text == "Erro ao cadastrar loja"));
}

#[tokio::test]
async fn test_non_json_body_is_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboard/abc"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<h1>Not Found</h1>"))
        .mount(&server)
        .await;

    let result = client_for(&server).dashboard("abc").await;

    assert!(matches!(result, Err(TransportError::Decode(_))));
}

#[tokio::test]
async fn test_dashboard_with_decimal_strings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/dashboard/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "loja": {"id": 42, "nome": "Centro", "descricao": "Matriz", "endereco": "Rua A", "contato": "1111"},
            "estoque": [
                {"produto_nome": "Caneta", "categoria_nome": "Papelaria", "quantidade_estoque": 10, "preco_loja": "2.5"}
            ],
            "vendas": [
                {"produto_nome": "Caneta", "quantidade": 2, "valor_total": "5.00", "data_venda": "Tue, 15 Oct 2024 10:30:00 GMT"}
            ]
        })))
        .mount(&server)
        .await;

    let dashboard = client_for(&server).dashboard("42").await.unwrap();

    let loja = dashboard.loja.unwrap();
    assert_eq!(loja.id, 42);
    assert_eq!(dashboard.estoque[0].preco_loja, Some(2.5));
    assert_eq!(dashboard.vendas[0].valor_total, Some(5.0));
}

#[tokio::test]
async fn test_history_filter_uses_query_param() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/historico"))
        .and(query_param("loja_id", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "historico": [],
            "total_vendas": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let history = client_for(&server).history(Some("3")).await.unwrap();

    assert!(history.historico.is_empty());
    assert_eq!(history.total_vendas, 0);
}

#[tokio::test]
async fn test_status_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "database": "disconnected",
            "timestamp": "2024-10-15T10:30:00"
        })))
        .mount(&server)
        .await;

    let status = client_for(&server).status().await.unwrap();

    assert_eq!(status.status, "ok");
    assert_eq!(status.database, "disconnected");
}

#[tokio::test]
async fn test_controller_renders_backend_history() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/historico"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "historico": [
                {"loja_nome": "Centro", "produto_nome": "Caneta", "quantidade": 2,
                 "valor_total": "5.00", "data_formatada": "15/10/2024 10:30"}
            ],
            "total_vendas": 1
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/lojas"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"lojas": []})))
        .mount(&server)
        .await;

    let page = Arc::new(MemorySurface::new());
    let controller = ViewSyncController::new(
        Arc::new(client_for(&server)),
        page.clone(),
        BannerConfig::default(),
    );

    controller.initial_load().await.unwrap();

    let history = page.html(Region::History);
    assert!(history.contains("📊 Histórico de Vendas (1 vendas)"));
    assert!(history.contains("Quantidade: 2 | Valor: R$ 5.00"));
    assert_eq!(page.html(Region::StoreList), "<p>Nenhuma loja cadastrada ainda</p>");
}
