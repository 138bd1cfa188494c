pub mod casting;
pub mod category;
pub mod drink;
pub mod question;
pub use casting::{Actor, Movie};
pub use category::{Category, CategoryId, ExternalCategoryId};
pub use drink::{Drink, Ingredient};
pub use question::Question;
