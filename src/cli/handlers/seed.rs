use anyhow::Result;
use colored::Colorize;

use crate::model::Restaurant;

use super::CommandContext;

pub fn handle_seed(ctx: &CommandContext, json: bool) -> Result<()> {
    let repo = ctx.repository()?;

    if json {
        println!("{}", serde_json::to_string_pretty(repo.list())?);
    } else {
        print_restaurant_list(repo.list());
    }
    Ok(())
}

fn print_restaurant_list(restaurants: &[Restaurant]) {
    if restaurants.is_empty() {
        println!("No restaurants found.");
        return;
    }

    for r in restaurants {
        println!("{} {}", r.id.to_string().cyan(), r.name.trim().bold());
        if !r.description.is_empty() {
            println!("  {}", r.description.dimmed());
        }
        for dish in &r.dishes {
            println!("  - {} {}", dish.name.trim(), format!("{:.2}", dish.price).green());
        }
    }
}
