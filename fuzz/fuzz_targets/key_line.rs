use honggfuzz::fuzz;
use validtab::{classify_line, LineKind};

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if let Ok(LineKind::Entry(kl)) = classify_line(data) {
                assert!(!kl.key.is_empty());
                assert!(kl.key.bytes().all(validtab::is_key_char));
                if let Some(locale) = kl.locale {
                    assert!(locale.bytes().all(validtab::is_locale_char));
                }
            }
        });
    }
}
