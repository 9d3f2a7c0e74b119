pub mod enrich;
pub mod listing;
pub mod marketplace;
pub mod moonrank;
pub mod numeric;
pub mod output;
pub mod parser;
pub mod picks;
pub mod pipeline;
pub mod rarity;
pub mod record;
pub mod score;
