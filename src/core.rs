pub mod analysis;
pub mod card;
pub mod cheapest;
pub mod duration;
pub mod extremes;
pub mod merger;
pub mod point;
pub mod rolling;
pub mod selector;
pub mod settings;
pub mod timeline;
pub mod window;
