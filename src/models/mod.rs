pub mod asset;
pub mod balance;

pub use asset::AssetDescriptor;
