pub mod logger;
pub mod settings;
pub mod simulation;
pub mod trails;
