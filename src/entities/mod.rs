pub mod booking;
pub mod cost_estimate;
pub mod furniture_order;
pub mod furniture_order_item;
pub mod furniture_product;
pub mod review;
pub mod service;
pub mod service_category;
pub mod service_provider;
pub mod user;
