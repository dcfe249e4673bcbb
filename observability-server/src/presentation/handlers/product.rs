use crate::application::product_service::ProductService;
use crate::data::product_repository::ProductRepository;
use crate::domain::error::DomainError;
use crate::presentation::utils::request_id;
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

/// Registers `GET /products` for a service backed by `R`.
pub fn configure<R: ProductRepository + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.route("/products", web::get().to(list_products::<R>));
}

async fn list_products<R: ProductRepository + 'static>(
    req: HttpRequest,
    service: web::Data<ProductService<R>>,
) -> Result<HttpResponse, DomainError> {
    let products = service.list_products().await?;

    info!(
        request_id = %request_id(&req),
        count = products.len(),
        "products retrieved"
    );

    Ok(HttpResponse::Ok().json(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::product_repository::memory::InMemoryProductRepository;
    use crate::domain::product::Product;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn service_with(
        repo: InMemoryProductRepository,
    ) -> web::Data<ProductService<InMemoryProductRepository>> {
        web::Data::new(ProductService::new(Arc::new(repo)))
    }

    #[actix_web::test]
    async fn lists_seeded_product() {
        let repo = InMemoryProductRepository::with_rows(vec![Product {
            id: 1,
            name: "Test".into(),
            price: 9.99,
        }]);
        let app = test::init_service(
            App::new()
                .app_data(service_with(repo))
                .configure(configure::<InMemoryProductRepository>),
        )
        .await;

        let req = test::TestRequest::get().uri("/products").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([{"id": 1, "name": "Test", "price": 9.99}]));
    }

    #[actix_web::test]
    async fn empty_store_yields_empty_array() {
        let app = test::init_service(
            App::new()
                .app_data(service_with(InMemoryProductRepository::with_rows(vec![])))
                .configure(configure::<InMemoryProductRepository>),
        )
        .await;

        let req = test::TestRequest::get().uri("/products").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn repeated_calls_return_same_rows() {
        let repo = InMemoryProductRepository::with_rows(vec![
            Product {
                id: 3,
                name: "Lamp".into(),
                price: 25.0,
            },
            Product {
                id: 1,
                name: "Desk".into(),
                price: 180.5,
            },
        ]);
        let app = test::init_service(
            App::new()
                .app_data(service_with(repo))
                .configure(configure::<InMemoryProductRepository>),
        )
        .await;

        let first: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/products").to_request(),
        )
        .await;
        let second: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri("/products").to_request(),
        )
        .await;

        assert_eq!(first.as_array().map(Vec::len), Some(2));
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn store_failure_is_server_error() {
        let app = test::init_service(
            App::new()
                .app_data(service_with(InMemoryProductRepository::unreachable()))
                .configure(configure::<InMemoryProductRepository>),
        )
        .await;

        let req = test::TestRequest::get().uri("/products").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().starts_with("internal error"));
    }
}
