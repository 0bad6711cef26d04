//! Integration tests for the individual validator checks.

use vetted_config::core::Validator;

fn validator() -> Validator {
    Validator::new()
}

#[test]
fn test_custom_check() {
    let mut v = validator();
    v.check(true, "");
    assert!(!v.has_errors());
    v.check(false, "");
    assert!(v.has_errors());
}

#[test]
fn test_alphanumeric() {
    let mut v = validator();
    v.is_alphanumeric("phayt6uXpHdN6vszzXNEXkqZyydSYgMQ7JAV5psDew", "");
    assert!(!v.has_errors());
    v.is_alphanumeric("N^44P2qx6uP629dHXED6JuU6@g!@5PT#Y#w@2mEpca", "");
    assert!(v.has_errors());
}

#[test]
fn test_base64() {
    let mut v = validator();
    for encoded in [
        "VFZNSWNFMlExSjNlOUJLUVBwaklhZ3BaTlpRMWVlMkJUMEhLeFBUQURTZ2xPQlJDcjJwUk5VMFJJeTY0dkJMS3FNREhwc2xKVUYyN2xseVBiZkRPaXdIQjNWQ0NEWTVueURRcU96TzFwZGdCeHFzQzVONHZOeENQ",
        "bDUxc0ZvTkVxVTU4d2xqcmlMUWRnbkZNaFVBcmVUSjBYeUY4SHZFdXJXR2dSWDUyazJBZTJYU3o1OEJSZmpOTmJtZWhwWDFpWUVwbUdGN25rR0REUlhPcm5OV1pLT1c3b0tFQkFZbzd5S3QyUmx3UEI2YVkwTTE0dw==",
        "YUdkMktyb2cyRVRsSlVsbHVRdGRYS0p2Y2tNVHRCT29zVXdveGVJbFY3bktaMHltTU5RNG5BNFo2NXFKR0RTVkM5WHVTc0l4S21OOTZaNVREN0JVYnRQQjVwQzFWeTVDWFJIcW43ZnhCMHRITjVaQ1JLRlgybzNZUg==",
    ] {
        v.is_base64(encoded, "");
    }
    assert!(!v.has_errors());
    v.is_base64("molasalertedoldrecensionscrowswanssewvasty", "");
    assert!(v.has_errors());
}

#[test]
fn test_lowercase() {
    let mut v = validator();
    v.is_lowercase("lowercase string", "");
    assert!(!v.has_errors());
    v.is_lowercase("Capitalcase String", "")
        .is_lowercase("UPPERCASE STRING", "")
        .is_lowercase("ߠߟߞߛߘ", "")
        .is_lowercase("إذا لم يأتيك الجبل ، يجب أن تذهب إلى الجبل", "");
    assert_eq!(v.error_number(), 4);
}

#[test]
fn test_uppercase() {
    let mut v = validator();
    v.is_uppercase("PARROTED COMPLETING GAGS COPPED BOYAR", "");
    assert!(!v.has_errors());
    v.is_uppercase("Parroted Completing Gags Copped Boyar", "")
        .is_uppercase("parroted completing gags copped boyar", "")
        .is_uppercase("ߠߟߞߛߘ", "")
        .is_uppercase("إذا لم يأتيك الجبل ، يجب أن تذهب إلى الجبل", "");
    assert_eq!(v.error_number(), 4);
}

#[test]
fn test_credit_card() {
    let mut v = validator();
    v.is_credit_card("4194033457664927", "");
    assert!(!v.has_errors());
    v.is_credit_card("4194055457347927", "");
    assert!(v.has_errors());
}

#[test]
fn test_domain() {
    let mut v = validator();
    v.is_domain("example.com", "");
    assert!(!v.has_errors());
    v.is_domain("example.$%#sd", "");
    assert!(v.has_errors());
}

#[test]
fn test_email() {
    let mut v = validator();
    v.is_email("kyle.deckow@gmail.com", "");
    assert!(!v.has_errors());
    v.is_email("kyle.deckow@", "");
    assert!(v.has_errors());
}

#[test]
fn test_guid() {
    let mut v = validator();
    v.is_guid("414f6a3f-b70c-4bca-b457-de56db223c7c", "");
    assert!(!v.has_errors());
    v.is_guid("414f6a3f-b70c-4bca-b457-de56nb223c7z", "");
    assert!(v.has_errors());
}

#[test]
fn test_hostname() {
    let mut v = validator();
    v.is_hostname("example.com", "");
    assert!(!v.has_errors());
    v.is_hostname("example.$&%", "");
    assert!(v.has_errors());
}

#[test]
fn test_ip() {
    let mut v = validator();
    v.is_ip("54.120.224.153", "")
        .is_ip("daa6:c765:1421:7e01:2343:f9e7:bd47:3c82", "");
    assert!(!v.has_errors());
    v.is_ip("54.120.224.653", "")
        .is_ip("daa6:c765:1421:7j01:2343:f9e7:bd47:3c82", "");
    assert_eq!(v.error_number(), 2);
}

#[test]
fn test_std_date() {
    let mut v = validator();
    v.is_std_date("2021-07-13T14:40:00Z", "");
    assert!(!v.has_errors());
    v.is_std_date("2021-12-45T14:40:00Z", "");
    assert!(v.has_errors());
}

#[test]
fn test_duration() {
    let mut v = validator();
    v.is_duration("2h3m", "");
    assert!(!v.has_errors());
    v.is_duration("3z6m", "");
    assert!(v.has_errors());
}

#[test]
fn test_size() {
    let mut v = validator();
    v.is_size("XwU1K^fmLdSTsx97ryW3mAnccSqd6W", 30, "");
    assert!(!v.has_errors());
    v.is_size("S3T9Enw%t6fvSfnG^sk^!3BdAGfRzd", 20, "");
    assert!(v.has_errors());
}

#[test]
fn test_empty_and_not_empty() {
    let mut v = validator();
    v.is_empty("", "").is_not_empty("S3T9Enw%t6fvSfnG^sk^!3BdAGfRzd", "");
    assert!(!v.has_errors());
    v.is_empty("S3T9Enw%t6fvSfnG^sk^!3BdAGfRzd", "empty")
        .is_not_empty("", "not empty");
    assert_eq!(v.messages(), ["empty", "not empty"]);
}

#[test]
fn test_between_lengths() {
    let mut v = validator();
    v.is_between("XwU1K^fmLdSTsx97ryW3mAnccSqd6W", 20, 30, "");
    assert!(!v.has_errors());
    v.is_between("pF3WMdkpvdLvg2@VyCJ8%qcrU4hr6WauM", 20, 30, "");
    assert!(v.has_errors());
}

#[test]
fn test_url() {
    let mut v = validator();
    v.is_url(
        "https://domain.example.com:453/api/users/articles?from=2343&size=20#example",
        "",
    );
    assert!(!v.has_errors());
    v.is_url(
        "://domain.example.com:453/api/users/articles?from=2343&size=20#example",
        "",
    );
    assert!(v.has_errors());
}

#[test]
fn test_numeric_comparisons() {
    let mut v = validator();
    v.is_greater_than(32, 30, "")
        .is_less_than(23, 30, "")
        .is_between_numbers(23, 20, 30, "")
        .is_positive(23, "")
        .is_negative(-23, "");
    assert!(!v.has_errors());

    v.is_greater_than(23, 30, "gt")
        .is_greater_than(30, 30, "gt equal")
        .is_less_than(32, 30, "lt")
        .is_between_numbers(32, 20, 30, "between")
        .is_positive(-23, "positive")
        .is_positive(0, "positive zero")
        .is_negative(23, "negative");
    assert_eq!(
        v.messages(),
        [
            "gt",
            "gt equal",
            "lt",
            "between",
            "positive",
            "positive zero",
            "negative"
        ]
    );
}

#[test]
fn test_port() {
    let mut v = validator();
    v.is_port(65534, "").is_port(1, "").is_port(65535, "");
    assert!(!v.has_errors());
    v.is_port(65537, "").is_port(0, "").is_port(65536, "");
    assert_eq!(v.error_number(), 3);
}
