use crate::career::adapter::incoming::web::requests::parse_career_id;
use crate::career::adapter::incoming::web::responses::{DeleteCareerResponse, CAREER_NOT_FOUND};
use crate::career::application::results::CareerResult;
use crate::shared::api::{ApiError, ApiResponse};
use crate::AppState;
use actix_web::{delete, web, HttpResponse};
use tracing::{error, info, warn};

#[utoipa::path(
    delete,
    path = "/careers/{id}/",
    tag = "careers",
    params(("id" = i32, Path, description = "Career id")),
    responses(
        (status = 204, description = "Career deleted"),
        (status = 404, description = "No career with this id", body = ApiError),
        (status = 500, description = "Storage unavailable", body = ApiError)
    )
)]
#[delete("/careers/{id}/")]
pub async fn delete_career_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let raw_id = path.into_inner();

    let Some(career_id) = parse_career_id(&raw_id) else {
        warn!(career_id = %raw_id, "Delete requested for malformed career id");
        return ApiResponse::not_found(CAREER_NOT_FOUND);
    };

    let result = data.delete_career_use_case.execute(career_id).await;

    match &result {
        CareerResult::Success(_) => info!(career_id, "Career deleted"),
        CareerResult::NotFound => warn!(career_id, "Career to delete not found"),
        CareerResult::Error(reason) => {
            error!(
                career_id,
                result = result.name(),
                error = %reason,
                "Failed to delete career"
            )
        }
    }

    DeleteCareerResponse::new(result).into_http_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::StubDeleteCareerUseCase;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_delete_career_success_is_204_without_body() {
        let stub = StubDeleteCareerUseCase::returning(CareerResult::Success(()));
        let received = stub.received.clone();
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_delete_career(stub).build())
                .service(delete_career_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri("/careers/7/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 204);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
        assert_eq!(*received.lock().await, vec![7]);
    }

    #[actix_web::test]
    async fn test_delete_career_not_found() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(delete_career_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri("/careers/42/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "error_message": "Career not found" }));
    }

    #[actix_web::test]
    async fn test_delete_career_rejects_non_positive_ids_without_lookup() {
        let stub = StubDeleteCareerUseCase::returning(CareerResult::Success(()));
        let received = stub.received.clone();
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_delete_career(stub).build())
                .service(delete_career_handler),
        )
        .await;

        for uri in ["/careers/0/", "/careers/-3/", "/careers/seven/"] {
            let req = test::TestRequest::delete().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 404, "{uri}");
        }
        assert!(received.lock().await.is_empty());
    }

    #[actix_web::test]
    async fn test_delete_career_storage_error_is_500() {
        let stub = StubDeleteCareerUseCase::returning(CareerResult::Error("gone".to_string()));
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_delete_career(stub).build())
                .service(delete_career_handler),
        )
        .await;

        let req = test::TestRequest::delete().uri("/careers/1/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({ "error_message": "Please, contact the server maintainers." })
        );
    }
}
