use super::*;

#[test]
fn format_accuracy_keeps_two_decimals_at_most() {
    assert_eq!(format_accuracy(75.0), "75%");
    assert_eq!(format_accuracy(87.5), "87.5%");
    assert_eq!(format_accuracy(66.666_666), "66.67%");
}

#[test]
fn format_accuracy_handles_zero() {
    assert_eq!(format_accuracy(0.0), "0%");
}
