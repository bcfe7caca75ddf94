pub mod queue;
pub mod scheduler;
pub mod worker;
