pub mod adoption;
pub mod health;
pub mod partner;
pub mod pets;
pub mod placeholder;
pub mod users;
