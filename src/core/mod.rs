pub mod animation;
pub mod ballistics;
pub mod config;
pub mod error;
pub mod plot;
pub mod readout;
pub mod simulation;
pub mod trajectory;
pub mod window;
