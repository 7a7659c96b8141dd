pub mod octopus;
pub mod rate_source;
