pub mod evaluate;
pub mod inputs;
pub mod output;
pub mod presets;
pub mod pulse;
pub mod sweep;
pub mod version;
