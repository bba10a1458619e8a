//! Chat repository adapters.

mod json_file;
mod memory;
mod snapshot;

pub use json_file::JsonFileChatRepository;
pub use memory::InMemoryChatRepository;
