use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{MethodRouter, delete, get},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, PathParam, QueryParams, ValidatedJson,
    errors::responses::{
        BadRequestPathResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, IncludeDeletedQuery, Item};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_item,
        list_items,
        list_deleted_items,
        count_items,
        get_item,
        soft_delete_item,
        hard_delete_item,
    ),
    components(
        schemas(Item, CreateItem),
        responses(
            BadRequestValidationResponse,
            BadRequestPathResponse,
            NotFoundResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Item management with soft and hard delete")
    )
)]
pub struct ApiDoc;

type SharedService<R> = State<Arc<ItemService<R>>>;

/// Create the items router, mounted at the root under `/items`.
///
/// Every path answers with and without a trailing slash.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    let routes: [(&str, MethodRouter<Arc<ItemService<R>>>); 5] = [
        ("/items", get(list_items::<R>).post(create_item::<R>)),
        ("/items/deleted", get(list_deleted_items::<R>)),
        ("/items/count", get(count_items::<R>)),
        ("/items/{id}", get(get_item::<R>).delete(soft_delete_item::<R>)),
        ("/items/{id}/hard", delete(hard_delete_item::<R>)),
    ];

    routes
        .into_iter()
        .fold(Router::new(), |router, (path, method_router)| {
            router
                .route(path, method_router.clone())
                .route(&format!("{path}/"), method_router)
        })
        .with_state(shared_service)
}

fn audit<T>(action: &str, id: Option<i32>, headers: &HeaderMap, result: &ItemResult<T>) {
    let outcome = match result {
        Ok(_) => AuditOutcome::Success,
        Err(_) => AuditOutcome::Failure,
    };
    let mut event = AuditEvent::new(action, outcome).with_request_headers(headers);
    if let Some(id) = id {
        event = event.with_resource(format!("item:{id}"));
    }
    if let Err(e) = result {
        event = event.with_details(json!({ "error": e.to_string() }));
    }
    event.log();
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items/",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): SharedService<R>,
    headers: HeaderMap,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let result = service.create_item(input).await;
    audit(
        "item.create",
        result.as_ref().ok().map(|item| item.id),
        &headers,
        &result,
    );

    Ok((StatusCode::CREATED, Json(result?)))
}

/// List items, skipping soft-deleted ones unless asked
#[utoipa::path(
    get,
    path = "/items/",
    tag = "Items",
    params(IncludeDeletedQuery),
    responses(
        (status = 200, description = "Items in ascending id order", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): SharedService<R>,
    QueryParams(query): QueryParams<IncludeDeletedQuery>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items(query.include_deleted).await?;
    Ok(Json(items))
}

/// List soft-deleted items
#[utoipa::path(
    get,
    path = "/items/deleted/",
    tag = "Items",
    responses(
        (status = 200, description = "Soft-deleted items", body = Vec<Item>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_deleted_items<R: ItemRepository>(
    State(service): SharedService<R>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_deleted_items().await?;
    Ok(Json(items))
}

/// Count items
#[utoipa::path(
    get,
    path = "/items/count/",
    tag = "Items",
    params(IncludeDeletedQuery),
    responses(
        (status = 200, description = "Number of matching items", body = u64),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn count_items<R: ItemRepository>(
    State(service): SharedService<R>,
    QueryParams(query): QueryParams<IncludeDeletedQuery>,
) -> ItemResult<Json<u64>> {
    let count = service.count_items(query.include_deleted).await?;
    Ok(Json(count))
}

/// Get an item by ID, including soft-deleted ones
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): SharedService<R>,
    PathParam(id): PathParam<i32>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Soft-delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item flagged as deleted", body = Item),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn soft_delete_item<R: ItemRepository>(
    State(service): SharedService<R>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> ItemResult<Json<Item>> {
    let result = service.soft_delete_item(id).await;
    audit("item.soft_delete", Some(id), &headers, &result);

    Ok(Json(result?))
}

/// Permanently delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}/hard",
    tag = "Items",
    params(
        ("id" = i32, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item removed"),
        (status = 400, response = BadRequestPathResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn hard_delete_item<R: ItemRepository>(
    State(service): SharedService<R>,
    headers: HeaderMap,
    PathParam(id): PathParam<i32>,
) -> ItemResult<impl IntoResponse> {
    let result = service.hard_delete_item(id).await;
    audit("item.hard_delete", Some(id), &headers, &result);

    result?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_item_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<_> = doc.paths.paths.keys().cloned().collect();

        for expected in [
            "/items/",
            "/items/{id}",
            "/items/{id}/hard",
            "/items/deleted/",
            "/items/count/",
        ] {
            assert!(paths.iter().any(|p| p == expected), "missing {expected}");
        }
    }
}
