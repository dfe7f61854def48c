use crate::error::{HeatfieldError, HeatfieldResult};

/// Fully opaque in the half-range alpha convention.
pub const ALPHA_OPAQUE: u8 = 0;
/// Fully transparent in the half-range alpha convention.
pub const ALPHA_TRANSPARENT: u8 = 127;

/// Default gradient keyframes, low intensity to high.
pub const BLUE: &str = "0000FF";
pub const GREEN: &str = "00FF00";
pub const YELLOW: &str = "FFFF00";
pub const RED: &str = "FF0000";
pub const WHITE: &str = "FFFFFF";

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// An RGB colour with half-range transparency: `alpha` 0 = opaque,
/// 127 = fully transparent. The gradient math and the compositor's
/// attenuation factor are defined in this domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

/// Parse a 6-hex-digit colour string such as `"FF8800"`.
pub fn hex_to_rgb(hex: &str) -> HeatfieldResult<Rgb> {
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(HeatfieldError::invalid_config(format!(
            "'{hex}' is not a 6-digit hex colour"
        )));
    }

    let channel = |s: &str| {
        u8::from_str_radix(s, 16).map_err(|_| {
            HeatfieldError::invalid_config(format!("'{hex}' is not a 6-digit hex colour"))
        })
    };

    Ok(Rgb {
        red: channel(&hex[0..2])?,
        green: channel(&hex[2..4])?,
        blue: channel(&hex[4..6])?,
    })
}
