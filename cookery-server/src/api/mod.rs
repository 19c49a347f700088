//! HTTP API handlers for cookery-server

pub mod chefs;
pub mod cors;
pub mod engagement;
pub mod extract;
pub mod health;
pub mod master_classes;
pub mod profile;
pub mod recipes;
pub mod recommendations;
pub mod shopping_list;
pub mod site;
pub mod stats;
pub mod users;

pub use chefs::{create_chef, list_chefs};
pub use cors::cors;
pub use engagement::{enroll, subscribe};
pub use health::health_routes;
pub use master_classes::{create_master_class, list_master_classes};
pub use profile::{user_history, user_subscriptions};
pub use recipes::{create_recipe, list_recipes, search_recipes};
pub use recommendations::recommendations;
pub use shopping_list::shopping_list;
pub use site::{index_route, static_files};
pub use stats::stats;
pub use users::{create_user, list_users};
