pub mod ping_response;
pub mod ping_route;
