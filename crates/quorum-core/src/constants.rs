/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const BOOKINGS_ROUTE_COMPONENT: &str = "bookings";
pub const BOOKINGS_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", BOOKINGS_ROUTE_COMPONENT);

pub const RESOURCES_ROUTE_COMPONENT: &str = "resources";
pub const RESOURCES_ROUTE_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", RESOURCES_ROUTE_COMPONENT);

/// Headers carrying the acting user supplied by the identity collaborator.
pub const ACTING_ROLE_HEADER: &str = "x-acting-role";
pub const ACTING_EMAIL_HEADER: &str = "x-acting-email";
