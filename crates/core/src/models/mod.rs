pub mod bank;
pub mod book;
pub mod dashboard;
pub mod investment;
pub mod investment_type;
