pub mod batch;
pub mod config;
pub mod controller;
pub mod path;
pub mod sampler;
