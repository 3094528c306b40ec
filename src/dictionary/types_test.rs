use super::*;

#[test]
fn test_dictionary_serializes_camel_case() {
    let dictionary = Dictionary {
        id: 3,
        name: "Spanish".to_string(),
        words: vec![WordPair::new("hola", "hello")],
        created_at: "2024-01-01T00:00:00+00:00".to_string(),
    };

    let json = serde_json::to_value(&dictionary).unwrap();

    assert_eq!(json["id"], 3);
    assert_eq!(json["createdAt"], "2024-01-01T00:00:00+00:00");
    assert_eq!(json["words"][0]["word"], "hola");
    assert_eq!(json["words"][0]["translation"], "hello");
}

#[test]
fn test_record_without_words_deserializes_empty() {
    let json = r#"{"id":1,"name":"French"}"#;
    let dictionary: Dictionary = serde_json::from_str(json).unwrap();

    assert!(dictionary.words.is_empty());
    assert!(dictionary.created_at.is_empty());
}

#[test]
fn test_find_word_returns_first_match() {
    let dictionary = Dictionary {
        id: 1,
        name: "d".to_string(),
        words: vec![
            WordPair::new("bank", "shore"),
            WordPair::new("bank", "money house"),
        ],
        created_at: String::new(),
    };

    assert_eq!(dictionary.find_word("bank"), Some(&WordPair::new("bank", "shore")));
    assert!(dictionary.find_word("river").is_none());
    assert!(dictionary.contains_pair("bank", "money house"));
    assert!(!dictionary.contains_pair("bank", "river"));
}

#[test]
fn test_duplicate_policy_default_is_allow() {
    assert_eq!(DuplicatePolicy::default(), DuplicatePolicy::Allow);
}
