pub mod customer;
pub mod health;
pub mod notification;
pub mod order;
pub mod place;
