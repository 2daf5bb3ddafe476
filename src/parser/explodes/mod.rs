mod vless;

pub use vless::explode_vless;
