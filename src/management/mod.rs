mod auth;
mod carryover;
mod counter;

pub use auth::TokenManager;
pub use carryover::CarryOverManager;
pub use carryover::decode_records;
pub use carryover::encode_records;
pub use counter::RunCounterManager;
pub use counter::RunParity;
pub use counter::decode_counter;
pub use counter::encode_counter;
