use crate::messages::internal_messages::GetAllRestaurants;
use crate::repository::RestaurantRepository;
use actix::prelude::*;
use colored::Color;
use common::errors::QueryError;
use common::logger::Logger;
use common::types::restaurant::RestaurantRecord;

/// The `Storage` actor owns the backing repository and serves the full
/// restaurant collection to whoever asks.
///
/// # Responsibilities
/// - Performs a fresh read of the repository for every request.
/// - Passes repository failures through unchanged.
pub struct Storage {
    /// Where the records actually live.
    pub repository: Box<dyn RestaurantRepository>,
    /// Logger for storage events.
    pub logger: Logger,
}

impl Storage {
    pub fn new(repository: Box<dyn RestaurantRepository>) -> Self {
        Self {
            repository,
            logger: Logger::new("Storage", Color::White),
        }
    }
}

impl Actor for Storage {
    type Context = Context<Self>;
}

/// Returns every stored restaurant, in repository order.
impl Handler<GetAllRestaurants> for Storage {
    type Result = Result<Vec<RestaurantRecord>, QueryError>;

    fn handle(&mut self, _msg: GetAllRestaurants, _ctx: &mut Self::Context) -> Self::Result {
        match self.repository.find_all() {
            Ok(records) => {
                self.logger
                    .info(format!("Retrieved {} restaurants from repository.", records.len()));
                Ok(records)
            }
            Err(e) => {
                self.logger.error(format!("Error reading restaurants: {}", e));
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemoryRepository;

    struct BrokenRepository;

    impl RestaurantRepository for BrokenRepository {
        fn find_all(&self) -> Result<Vec<RestaurantRecord>, QueryError> {
            Err(QueryError::Storage("connection refused".to_string()))
        }
    }

    fn record(restaurant_id: &str) -> RestaurantRecord {
        RestaurantRecord {
            id: None,
            restaurant_id: restaurant_id.to_string(),
            name: "Meghana Foods".to_string(),
            city: "Koramangala".to_string(),
            image_url: "www.google.com".to_string(),
            latitude: 12.93,
            longitude: 77.62,
            opens_at: "11:00".to_string(),
            closes_at: "23:00".to_string(),
            attributes: vec![],
        }
    }

    #[actix_rt::test]
    async fn returns_all_records_in_order() {
        let repository = InMemoryRepository::new(vec![record("2"), record("1"), record("3")]);
        let storage = Storage::new(Box::new(repository)).start();

        let records = storage.send(GetAllRestaurants).await.unwrap().unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.restaurant_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1", "3"]);
    }

    #[actix_rt::test]
    async fn repository_failure_is_passed_through() {
        let storage = Storage::new(Box::new(BrokenRepository)).start();

        let result = storage.send(GetAllRestaurants).await.unwrap();
        assert_eq!(
            result,
            Err(QueryError::Storage("connection refused".to_string()))
        );
    }
}
