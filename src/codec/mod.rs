pub mod codec;
pub use codec::*;

pub mod states;
pub use states::*;

pub mod storage;
pub use storage::*;
