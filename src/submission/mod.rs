pub mod output;
pub mod pipeline;
