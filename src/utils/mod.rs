pub mod u8_keys;
