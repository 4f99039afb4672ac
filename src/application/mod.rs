pub mod controller;

pub use controller::DashboardController;
