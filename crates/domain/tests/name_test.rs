use dnswire_domain::{CodecError, Name, Question, RecordClass, RecordType, MAX_LABEL_LEN};

mod helpers;
use helpers::name;

#[test]
fn test_parse_and_display() {
    let parsed = name("www.google.com");

    assert_eq!(parsed.label_count(), 3);
    assert_eq!(parsed.labels()[0], b"www".to_vec());
    assert_eq!(parsed.to_string(), "www.google.com");
}

#[test]
fn test_trailing_dot_is_optional() {
    assert_eq!(name("google.com."), name("google.com"));
}

#[test]
fn test_root_forms() {
    assert!(name("").is_root());
    assert!(name(".").is_root());
    assert_eq!(Name::root().to_string(), ".");
}

#[test]
fn test_empty_interior_label_is_rejected() {
    assert!(matches!(
        "a..b".parse::<Name>(),
        Err(CodecError::EmptyLabel(_))
    ));
    assert!(matches!(
        Name::from_labels([b"a".to_vec(), Vec::new()]),
        Err(CodecError::EmptyLabel(_))
    ));
}

#[test]
fn test_label_length_limit() {
    let ok = "x".repeat(MAX_LABEL_LEN);
    assert!(ok.parse::<Name>().is_ok());

    let too_long = "x".repeat(MAX_LABEL_LEN + 1);
    assert_eq!(
        too_long.parse::<Name>(),
        Err(CodecError::LabelTooLong(MAX_LABEL_LEN + 1))
    );
}

#[test]
fn test_push_label_keeps_name_unchanged_on_error() {
    let mut n = name("example.com");
    let before = n.clone();

    assert!(n.push_label(vec![b'z'; 64]).is_err());
    assert_eq!(n, before);
}

#[test]
fn test_labels_are_case_preserving_bytes() {
    assert_ne!(name("Example.COM"), name("example.com"));
    assert_eq!(name("Example.COM").to_string(), "Example.COM");
}

fn question_toml(labels: &[Vec<u8>]) -> String {
    let labels: Vec<String> = labels
        .iter()
        .map(|label| {
            let bytes: Vec<String> = label.iter().map(|b| b.to_string()).collect();
            format!("[{}]", bytes.join(", "))
        })
        .collect();
    format!(
        "name = [{}]\nrecord_type = \"A\"\nrecord_class = \"IN\"\n",
        labels.join(", ")
    )
}

#[test]
fn test_deserialization_goes_through_label_checks() {
    let labels = [b"example".to_vec(), b"com".to_vec()];
    let ok: Question = toml::from_str(&question_toml(&labels)).unwrap();
    assert_eq!(ok.name, name("example.com"));

    let overlong = question_toml(&[vec![b'a'; MAX_LABEL_LEN + 1]]);
    assert!(toml::from_str::<Question>(&overlong).is_err());

    let empty = question_toml(&[b"a".to_vec(), Vec::new()]);
    assert!(toml::from_str::<Question>(&empty).is_err());
}

#[test]
fn test_serde_round_trip() {
    let question = Question::new(name("a.b"), RecordType::MX, RecordClass::IN);
    let text = toml::to_string(&question).unwrap();

    assert_eq!(toml::from_str::<Question>(&text).unwrap(), question);
}
