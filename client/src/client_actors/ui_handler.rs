use colored::*;
use common::types::exchanges::ErrorResponse;
use common::types::restaurant::Restaurant;

/// One line per restaurant, in the order the server sent them.
pub fn render_restaurants(restaurants: &[Restaurant]) -> String {
    if restaurants.is_empty() {
        return "No restaurants open nearby right now.".yellow().to_string();
    }

    restaurants
        .iter()
        .map(|restaurant| {
            format!(
                "{} {} ({}) {}-{} [{}]",
                format!("#{}", restaurant.restaurant_id).bold(),
                restaurant.name.green(),
                restaurant.city,
                restaurant.opens_at,
                restaurant.closes_at,
                restaurant.attributes.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_error(error: &ErrorResponse) -> String {
    format!("{} {}", format!("[{}]", error.status).bright_red().bold(), error.message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restaurant(restaurant_id: &str) -> Restaurant {
        Restaurant {
            restaurant_id: restaurant_id.to_string(),
            name: "A2B".to_string(),
            city: "Hsr Layout".to_string(),
            image_url: "www.google.com".to_string(),
            latitude: 20.027,
            longitude: 30.0,
            opens_at: "18:00".to_string(),
            closes_at: "23:00".to_string(),
            attributes: vec!["Tamil".to_string(), "South Indian".to_string()],
        }
    }

    #[test]
    fn one_line_per_restaurant_in_order() {
        colored::control::set_override(false);
        let rendered = render_restaurants(&[restaurant("10"), restaurant("11")]);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "#10 A2B (Hsr Layout) 18:00-23:00 [Tamil, South Indian]",
                "#11 A2B (Hsr Layout) 18:00-23:00 [Tamil, South Indian]",
            ]
        );
    }

    #[test]
    fn empty_result_is_explained() {
        colored::control::set_override(false);
        assert_eq!(render_restaurants(&[]), "No restaurants open nearby right now.");
    }
}
