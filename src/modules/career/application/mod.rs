pub mod ports;
pub mod results;
pub mod services;
