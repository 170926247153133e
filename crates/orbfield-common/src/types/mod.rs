mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_serialization() {
        let s = Size::new(300.0, 120.0);
        let json = serde_json::to_string(&s).unwrap();
        let deserialized: Size = serde_json::from_str(&json).unwrap();
        assert_eq!(s, deserialized);
    }

    #[test]
    fn size_clamped_min_handles_bad_input() {
        let s = Size::new(-10.0, f64::NAN).clamped_min(28.0);
        assert_eq!(s, Size::new(28.0, 28.0));

        let s = Size::new(64.0, 0.0).clamped_min(28.0);
        assert_eq!(s, Size::new(64.0, 28.0));
    }

    #[test]
    fn size_is_drawable() {
        assert!(Size::new(1.0, 1.0).is_drawable());
        assert!(!Size::new(0.0, 10.0).is_drawable());
        assert!(!Size::new(10.0, f64::INFINITY).is_drawable());
    }

    #[test]
    fn instance_id_display() {
        assert_eq!(InstanceId(7).to_string(), "orb-7");
    }

    #[test]
    fn size_tier_serde_lowercase() {
        let json = serde_json::to_string(&SizeTier::Favicon).unwrap();
        assert_eq!(json, "\"favicon\"");
        let tier: SizeTier = serde_json::from_str("\"hero\"").unwrap();
        assert_eq!(tier, SizeTier::Hero);
        assert_eq!(SizeTier::Logo.to_string(), "logo");
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#0066ff").unwrap();
        assert_eq!(c, Color::from_rgba(0, 0x66, 0xff, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#ff880080").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 128));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn color_lerp_endpoints_and_midpoint() {
        let a = Color::from_rgba(0x00, 0x66, 0xff, 255);
        let b = Color::from_rgba(0x00, 0xd4, 0xaa, 255);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 2.0), b);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid.g, 0x9d);
    }

    #[test]
    fn color_scaled_saturates() {
        let c = Color::from_rgba(200, 100, 0, 128).scaled(2.0);
        assert_eq!(c, Color::from_rgba(255, 200, 0, 128));
    }

    #[test]
    fn color_to_css() {
        assert_eq!(Color::from_rgba(0, 102, 255, 255).to_hex(), "#0066ff");
        assert_eq!(Color::from_rgba(0, 102, 255, 255).to_css_rgb(), "rgb(0,102,255)");
    }
}
