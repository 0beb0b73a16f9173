mod codec;
mod types;

pub use codec::SignedValueCodec;
pub use types::SignedValue;
