use log::Level;

pub const OWNER_NAME: &str = "Md Aman";
pub const OWNER_ROLE: &str = "Full Stack Developer & DevOps Engineer";

pub const WHATSAPP_NUMBER: &str = "917858925358";
pub const WHATSAPP_ENDPOINT: &str = "https://wa.me";

pub const RESUME_PATH: &str = "Md Aman Resume.pdf";
pub const PROFILE_IMAGE_PATH: &str = "WhatsApp Image 2025-03-05 at 16.23.04_5d7ee6cf.jpg";

/// Scroll distance after which the nav bar gets its solid background.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Added to the scroll position before matching it against section bounds.
pub const SECTION_LOOKAHEAD: f64 = 100.0;
/// Scroll range over which the hero parallax is applied.
pub const PARALLAX_RANGE: f64 = 300.0;
/// A block is revealed once its top edge is above this share of the viewport.
pub const REVEAL_VIEWPORT_RATIO: f64 = 0.9;

/// Directory trunk copies static assets into.
pub const ASSET_BASE: &str = "/static";

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info
}

pub fn asset_url(path: &str) -> String {
    format!("{}/{}", ASSET_BASE, path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_with_single_slash() {
        let url = asset_url("/Md Aman Resume.pdf");
        assert!(url.ends_with("/Md Aman Resume.pdf"));
        assert!(!url.contains("//"));
        assert_eq!(asset_url(RESUME_PATH), asset_url(&format!("/{}", RESUME_PATH)));
    }
}
