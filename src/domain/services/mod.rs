pub mod marking;
pub mod stats;
