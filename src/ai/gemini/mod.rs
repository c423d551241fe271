pub mod client;
pub mod poses;
pub mod style;
pub mod types;

pub use poses::GeminiPoseClient;
pub use style::GeminiStyleClient;
