use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "iBuildz API",
        version = "0.1.0",
        description = r#"
# iBuildz Marketplace API

Backend for a bilingual (English/Telugu) home-construction services
marketplace serving the L.B. Nagar and B.N. Reddy localities: service
providers, their service and furniture catalogs, bookings, furniture
orders, reviews and interior cost estimates.

## Authentication

This build runs in demo mode. Authenticated endpoints read two headers:

```
x-demo-authenticated: true
x-demo-user-type: user | merchant | admin
```

Requests without `x-demo-authenticated: true` receive `401` with
`{"message": "Unauthorized"}`.

## Localization

Text columns come in pairs: `name` / `nameTe`, `title` / `titleTe`,
`description` / `descriptionTe`. The Telugu variant is optional and
clients fall back to English when it is absent.

## Errors

Failures use a consistent error envelope:

```json
{
  "error": "Not Found",
  "message": "Service provider 42 not found"
}
```
        "#,
        contact(
            name = "iBuildz Support",
            email = "support@ibuildz.in"
        ),
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development")
    ),
    tags(
        (name = "auth", description = "Demo session endpoints"),
        (name = "categories", description = "Service category catalog"),
        (name = "providers", description = "Service provider directory"),
        (name = "services", description = "Service listings"),
        (name = "furniture", description = "Furniture product catalog"),
        (name = "bookings", description = "Service bookings"),
        (name = "orders", description = "Furniture orders"),
        (name = "reviews", description = "Reviews and rating aggregates"),
        (name = "estimates", description = "Interior cost estimates"),
        (name = "search", description = "Catalog search"),
        (name = "payments", description = "Demo payment intents"),
        (name = "health", description = "Service health")
    ),
    paths(
        crate::handlers::auth::current_user,

        crate::handlers::categories::list_categories,
        crate::handlers::categories::create_category,

        crate::handlers::providers::list_providers,
        crate::handlers::providers::get_provider,
        crate::handlers::providers::create_provider,
        crate::handlers::providers::update_provider,

        crate::handlers::services::list_services,
        crate::handlers::services::get_service,
        crate::handlers::services::create_service,
        crate::handlers::services::update_service,

        crate::handlers::furniture::list_products,
        crate::handlers::furniture::get_product,
        crate::handlers::furniture::create_product,
        crate::handlers::furniture::update_product,

        crate::handlers::bookings::list_bookings,
        crate::handlers::bookings::get_booking,
        crate::handlers::bookings::create_booking,
        crate::handlers::bookings::update_booking,

        crate::handlers::orders::list_orders,
        crate::handlers::orders::get_order,
        crate::handlers::orders::create_order,
        crate::handlers::orders::update_order,

        crate::handlers::reviews::list_reviews,
        crate::handlers::reviews::create_review,

        crate::handlers::estimates::list_estimates,
        crate::handlers::estimates::create_estimate,

        crate::handlers::search::search_services,
        crate::handlers::search::search_furniture,

        crate::handlers::payments::create_payment_intent,
    ),
    components(
        schemas(
            crate::entities::user::Model,
            crate::entities::user::UserRole,
            crate::entities::service_category::Model,
            crate::entities::service_provider::Model,
            crate::entities::service::Model,
            crate::entities::service::PriceUnit,
            crate::entities::furniture_product::Model,
            crate::entities::booking::Model,
            crate::entities::booking::BookingStatus,
            crate::entities::furniture_order::Model,
            crate::entities::furniture_order::FurnitureOrderStatus,
            crate::entities::furniture_order::PaymentStatus,
            crate::entities::furniture_order::PaymentMethod,
            crate::entities::furniture_order_item::Model,
            crate::entities::review::Model,
            crate::entities::cost_estimate::Model,

            crate::services::categories::CreateCategoryInput,
            crate::services::providers::CreateProviderInput,
            crate::services::providers::UpdateProviderInput,
            crate::services::catalog::CreateServiceInput,
            crate::services::catalog::UpdateServiceInput,
            crate::services::furniture::CreateProductInput,
            crate::services::furniture::UpdateProductInput,
            crate::services::bookings::CreateBookingInput,
            crate::services::bookings::UpdateBookingInput,
            crate::services::orders::OrderItemInput,
            crate::services::orders::CreateOrderInput,
            crate::services::orders::UpdateOrderInput,
            crate::services::orders::OrderWithItems,
            crate::services::reviews::CreateReviewInput,
            crate::services::estimating::CreateEstimateInput,
            crate::services::estimating::CostBreakdown,

            crate::handlers::payments::CreatePaymentIntentInput,
            crate::handlers::payments::PaymentIntentResponse,

            crate::errors::ErrorResponse
        )
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_the_public_surface() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("iBuildz API"));
        assert!(json.contains("/api/service-providers"));
        assert!(json.contains("/api/cost-estimates"));
        assert!(json.contains("/api/create-payment-intent"));
    }
}
