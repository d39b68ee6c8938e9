use super::*;

fn word(id: i64, kanji: &str, romaji: &str, french: &str, correct: u32, wrong: u32) -> Word {
    Word {
        id,
        kanji: kanji.to_owned(),
        romaji: romaji.to_owned(),
        french: french.to_owned(),
        correct_count: correct,
        wrong_count: wrong,
    }
}

fn ids(words: &[Word]) -> Vec<i64> {
    words.iter().map(|w| w.id).collect()
}

// =============================================================
// SortState
// =============================================================

#[test]
fn sort_state_defaults_to_kanji_ascending() {
    let sort = SortState::default();
    assert_eq!(sort.key, WordSortKey::Kanji);
    assert_eq!(sort.direction, SortDirection::Asc);
}

#[test]
fn toggling_same_key_twice_returns_to_ascending() {
    let mut sort = SortState::default();
    sort.toggle(WordSortKey::Romaji);
    assert_eq!(sort.direction, SortDirection::Asc);

    sort.toggle(WordSortKey::Romaji);
    assert_eq!(sort.direction, SortDirection::Desc);

    sort.toggle(WordSortKey::Romaji);
    assert_eq!(sort.key, WordSortKey::Romaji);
    assert_eq!(sort.direction, SortDirection::Asc);
}

#[test]
fn switching_key_resets_to_ascending() {
    let mut sort = SortState { key: WordSortKey::Kanji, direction: SortDirection::Desc };
    sort.toggle(WordSortKey::WrongCount);
    assert_eq!(sort, SortState { key: WordSortKey::WrongCount, direction: SortDirection::Asc });
}

#[test]
fn indicator_marks_only_active_column() {
    let sort = SortState { key: WordSortKey::French, direction: SortDirection::Desc };
    assert_eq!(sort.indicator(WordSortKey::French), "▼");
    assert_eq!(sort.indicator(WordSortKey::Kanji), "");
}

// =============================================================
// sort_words
// =============================================================

#[test]
fn sort_words_by_romaji_ascending_and_descending() {
    let words = vec![
        word(1, "飲む", "nomu", "boire", 0, 0),
        word(2, "食べる", "taberu", "manger", 0, 0),
        word(3, "行く", "iku", "aller", 0, 0),
    ];
    let mut sort = SortState { key: WordSortKey::Romaji, direction: SortDirection::Asc };
    assert_eq!(ids(&sort_words(&words, sort)), vec![3, 1, 2]);

    sort.direction = SortDirection::Desc;
    assert_eq!(ids(&sort_words(&words, sort)), vec![2, 1, 3]);
}

#[test]
fn sort_words_by_counts_breaks_ties_by_id() {
    let words = vec![
        word(4, "a", "a", "a", 2, 5),
        word(2, "b", "b", "b", 2, 1),
        word(7, "c", "c", "c", 0, 3),
    ];
    let sort = SortState { key: WordSortKey::CorrectCount, direction: SortDirection::Asc };
    assert_eq!(ids(&sort_words(&words, sort)), vec![7, 2, 4]);

    let sort = SortState { key: WordSortKey::WrongCount, direction: SortDirection::Desc };
    assert_eq!(ids(&sort_words(&words, sort)), vec![4, 7, 2]);
}

#[test]
fn sort_words_french_ignores_case() {
    let words = vec![word(1, "x", "x", "Zèbre", 0, 0), word(2, "y", "y", "arbre", 0, 0)];
    let sort = SortState { key: WordSortKey::French, direction: SortDirection::Asc };
    assert_eq!(ids(&sort_words(&words, sort)), vec![2, 1]);
}

#[test]
fn sort_key_labels_are_distinct() {
    for (i, a) in WordSortKey::ALL.iter().enumerate() {
        for (j, b) in WordSortKey::ALL.iter().enumerate() {
            if i != j {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
