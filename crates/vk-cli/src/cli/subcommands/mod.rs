mod local;

pub use local::LocalCommands;
