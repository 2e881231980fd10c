pub mod pokedex;
pub mod record;

pub use pokedex::*;
pub use record::*;
