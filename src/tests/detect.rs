use crate::detect::structurally_changed;

#[test]
fn test_identical_sequences_are_unchanged() {
    assert!(!structurally_changed(&[1, 2, 3], &[1, 2, 3]));
    assert!(!structurally_changed(&[], &[]));
}

#[test]
fn test_length_difference_is_a_change() {
    assert!(structurally_changed(&[1, 2, 3], &[1, 2, 3, 4]));
    assert!(structurally_changed(&[1, 2, 3], &[1, 2]));
    assert!(structurally_changed(&[], &[1]));
}

#[test]
fn test_reordering_is_a_change() {
    assert!(structurally_changed(&[1, 2, 3], &[1, 3, 2]));
}

#[test]
fn test_replacement_is_a_change() {
    assert!(structurally_changed(&[1, 2, 3], &[1, 9, 3]));
}
