//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::users;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "REST API for items with soft and hard delete, backed by PostgreSQL",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(users::list_users),
    components(responses(axum_helpers::errors::responses::NotImplementedResponse)),
    tags(
        (name = "Users", description = "Reserved; not implemented")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation: service-level paths plus the items domain
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_items::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combined_doc_has_items_and_users() {
        let doc = ApiDoc::openapi();

        assert_eq!(doc.info.title, "Items API");
        assert!(doc.paths.paths.contains_key("/items/"));
        assert!(doc.paths.paths.contains_key("/items/{id}/hard"));
        assert!(doc.paths.paths.contains_key("/users/"));
    }
}
