mod reading;
mod sampler;

pub use reading::*;
pub use sampler::*;
