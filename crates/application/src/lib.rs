//! rootwalk application layer: ports, use cases and presentation shaping.
pub mod ports;
pub mod services;
pub mod use_cases;
