pub mod nearby_restaurants;
pub mod radius_policy;
pub mod restaurant_filter;
