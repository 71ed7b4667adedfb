pub mod natural;
pub mod ping_pong;
pub mod queue_merge;
pub mod top_down;
