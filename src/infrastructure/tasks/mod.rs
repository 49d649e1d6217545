mod protocol;

pub use protocol::protocol_task;
