pub mod card;
pub mod feedback;
pub mod header;
pub mod results;
pub mod welcome;
