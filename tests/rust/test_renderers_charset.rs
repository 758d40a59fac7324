use super::*;

#[test]
fn test_default_is_ascii() {
    assert_eq!(CharSet::default(), CharSet::Ascii);
}

#[test]
fn test_ascii_chars() {
    assert_eq!(CharSet::Ascii.filled(), '*');
    assert_eq!(CharSet::Ascii.empty(), ' ');
}

#[test]
fn test_unicode_chars() {
    assert_eq!(CharSet::Unicode.filled(), '█');
    assert_eq!(CharSet::Unicode.empty(), ' ');
}

#[test]
fn test_from_str() {
    assert_eq!("ascii".parse::<CharSet>(), Ok(CharSet::Ascii));
    assert_eq!("Unicode".parse::<CharSet>(), Ok(CharSet::Unicode));
    assert!("braille".parse::<CharSet>().is_err());
}
