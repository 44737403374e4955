//! Parameterized classifier tests using test-case

use rfc_clean::core::models::LineClass;
use rfc_clean::core::services::LineClassifier;
use test_case::test_case;

fn classify(line: &str) -> LineClass {
    LineClassifier::new().unwrap().classify(line)
}

// =============================================================================
// Header Tests
// =============================================================================

#[test_case("   Expires March 2024                                    [Page 3]" ; "month and year")]
#[test_case("Doe                       Expires April 5, 2024                 [Page 12]" ; "author and full date")]
#[test_case("Expires 2024 99 [Page 100]" ; "numeric word")]
#[test_case("x Expires Jan 1 [Page 0]" ; "minimal spacing")]
fn header_is_discarded(line: &str) {
    assert_eq!(classify(line), LineClass::Discard);
}

#[test_case("   Expires March 2024        [Page ]" ; "page without digits")]
#[test_case("   Expires March 2024        [Page 3] " ; "trailing space after marker")]
#[test_case("   Expires March 2024" ; "no page marker")]
#[test_case("   expires March 2024        [Page 3]" ; "lowercase expires")]
#[test_case("   March 2024                [Page 3]" ; "no expires")]
fn header_lookalike_is_kept(line: &str) {
    assert_eq!(classify(line), LineClass::Keep);
}

// =============================================================================
// Footer Tests
// =============================================================================

#[test_case("Internet-Draft           Green AI Metrics          October 2023" ; "title and date")]
#[test_case("Internet-Draft2023" ; "no gap")]
#[test_case("Internet-Draft    draft-ietf-foo-bar-03    12345" ; "last four of longer number")]
fn footer_is_discarded(line: &str) {
    assert_eq!(classify(line), LineClass::Discard);
}

#[test_case("  Internet-Draft     Green AI     October 2023" ; "indented")]
#[test_case("Internet-Draft     Green AI     October 23" ; "two digit year")]
#[test_case("Internet-Draft     Green AI     October 2023." ; "trailing punctuation")]
#[test_case("INTERNET-DRAFT     Green AI     October 2023" ; "uppercase")]
fn footer_lookalike_is_kept(line: &str) {
    assert_eq!(classify(line), LineClass::Keep);
}

// =============================================================================
// Body Text
// =============================================================================

#[test_case("This document defines metrics for sustainable AI." ; "sentence")]
#[test_case("" ; "empty line")]
#[test_case("1.  Introduction" ; "section heading")]
#[test_case("   [Page 3]" ; "bare page marker")]
fn body_is_kept(line: &str) {
    assert_eq!(classify(line), LineClass::Keep);
}
