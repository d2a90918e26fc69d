// src/ports/store.rs

//! Key-value storage port.

/// Capability interface for persistent key-value storage.
///
/// Declared as part of the port set but not consumed by the orchestration
/// core; reserved for surrounding components (calibration data, trim
/// settings). Value length is carried by the slice.
pub trait Store {
    /// Stores `value` under `key`. Returns `true` on success.
    fn put(&mut self, key: &str, value: &[u8]) -> bool;

    /// Reads the value under `key` into `out`. Returns `true` if the key
    /// existed and the value fit.
    fn get(&mut self, key: &str, out: &mut [u8]) -> bool;
}
