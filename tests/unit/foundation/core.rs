use super::*;

#[test]
fn parse_accepts_short_and_alpha_forms() {
    assert_eq!(Rgba8::parse("#0058D0").unwrap(), Rgba8::rgb(0x00, 0x58, 0xd0));
    assert_eq!(
        Rgba8::parse("ffffff80").unwrap(),
        Rgba8::rgba(255, 255, 255, 0x80)
    );
    assert_eq!(Rgba8::parse("Transparent").unwrap(), Rgba8::TRANSPARENT);
    assert!(Rgba8::parse("#12345").is_err());
    assert!(Rgba8::parse("#zzzzzz").is_err());
}

#[test]
fn display_matches_parse() {
    for s in ["#171717", "#007aff80", "#00000000"] {
        let c = Rgba8::parse(s).unwrap();
        assert_eq!(c.to_string(), s);
    }
}

#[test]
fn serde_uses_hex_strings() {
    let c = Rgba8::from_u24(0x10b981);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#10b981\"");
    let back: Rgba8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
