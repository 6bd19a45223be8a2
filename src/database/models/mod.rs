// Database models
//
// - settings.rs: rows of the key-value settings table

mod settings;

pub use settings::Setting;
