use anyhow::Result;

use crate::graphql::build_schema;
use crate::storage::RestaurantRepository;

use super::CommandContext;

/// Print the SDL. The store is left empty so a bad seed cannot block it.
pub fn handle_schema(_ctx: &CommandContext) -> Result<()> {
    let schema = build_schema(RestaurantRepository::default());
    print!("{}", schema.sdl());
    Ok(())
}
