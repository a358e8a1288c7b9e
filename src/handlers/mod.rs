pub mod analysis;
pub mod checkin;
pub mod entries;
pub mod forecast;
pub mod health;
pub mod status;
pub mod users;
