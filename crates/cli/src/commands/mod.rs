//! CLI Commands

pub mod agents;
pub mod generate;
pub mod history;
pub mod init;

pub use agents::AgentsCommand;
pub use generate::GenerateCommand;
pub use history::HistoryCommand;
pub use init::InitCommand;
