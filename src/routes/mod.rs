pub mod common;
pub mod inspect;
pub mod resources;

pub use common::{common_routes, common_routes_with_ready};
pub use inspect::route_listing_routes;
pub use resources::resource_routes;
