mod builders;

pub use builders::{tokens_for, MapView};
