mod task;

pub use task::{Dates, Priority, Task};
