use super::restaurant::{Dish, Restaurant};
use super::types::SeedRevision;

/// The built-in restaurants, numbered from the revision's first id.
pub fn seed_restaurants(revision: SeedRevision) -> Vec<Restaurant> {
    let first = revision.first_id();

    vec![
        Restaurant::new(first, "WoodsHill ")
            .with_description("American cuisine, farm to table, with fresh produce every day")
            .with_dishes(vec![
                Dish::new("Swordfish grill", 27.0),
                Dish::new("Roasted Broccily ", 11.0),
            ]),
        Restaurant::new(first + 1, "Fiorellas")
            .with_description("Italian-American home cooked food with fresh pasta and sauces")
            .with_dishes(vec![
                Dish::new("Flatbread", 14.0),
                Dish::new("Carbonara", 18.0),
                Dish::new("Spaghetti", 19.0),
            ]),
        Restaurant::new(first + 2, "Karma")
            .with_description("Malaysian-Chinese-Japanese fusion, with great bar and bartenders")
            .with_dishes(vec![
                Dish::new("Dragon Roll", 12.0),
                Dish::new("Pancake roll ", 11.0),
                Dish::new("Cod cakes", 13.0),
            ]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_based_ids() {
        let ids: Vec<i32> = seed_restaurants(SeedRevision::OneBased)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_revisions_differ_only_in_ids() {
        let one = seed_restaurants(SeedRevision::OneBased);
        let zero = seed_restaurants(SeedRevision::ZeroBased);
        assert_eq!(zero[0].id, 0);
        for (a, b) in one.iter().zip(zero.iter()) {
            assert_eq!(a.id, b.id + 1);
            assert_eq!(a.name, b.name);
            assert_eq!(a.dishes, b.dishes);
        }
    }
}
