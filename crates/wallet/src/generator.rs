//! Address fabrication

use rand::Rng;

use merlin_core::{constants::ADDRESS_BYTES, Address};

/// Source of addresses handed out on connect
pub trait AddressGenerator: Send + Sync {
    fn generate(&self) -> Address;
}

/// Uniformly random 20-byte address rendered as lowercase hex
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomAddressGenerator;

impl AddressGenerator for RandomAddressGenerator {
    fn generate(&self) -> Address {
        let mut bytes = [0u8; ADDRESS_BYTES];
        rand::thread_rng().fill(&mut bytes);
        Address::from_bytes(&bytes)
    }
}

/// Always returns the same address
#[derive(Debug, Clone)]
pub struct StaticAddress(pub Address);

impl AddressGenerator for StaticAddress {
    fn generate(&self) -> Address {
        self.0.clone()
    }
}
