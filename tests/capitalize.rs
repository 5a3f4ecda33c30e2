use passforge::capitalize_words;

#[test]
fn capitalizes_sentences() {
    assert_eq!(capitalize_words("the quick brown fox"), "The Quick Brown Fox");
    assert_eq!(capitalize_words("ALREADY SHOUTING"), "Already Shouting");
}

#[test]
fn only_whitespace_is_preserved() {
    assert_eq!(capitalize_words("   "), "   ");
    assert_eq!(capitalize_words("\n"), "\n");
}

#[test]
fn single_letters() {
    assert_eq!(capitalize_words("a b c"), "A B C");
}
