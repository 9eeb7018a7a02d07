pub mod make;
pub use make::*;

pub mod exchange;
pub use exchange::*;

pub mod refund;
pub use refund::*;
