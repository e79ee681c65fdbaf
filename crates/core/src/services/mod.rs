pub mod dashboard_service;
pub mod investment_service;
