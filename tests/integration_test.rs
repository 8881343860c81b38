// Integration tests for cardvec
use cardvec::{run_import, Error, LabelSchema, PipelineConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const SMALL_CORPUS: &str = r#"{"data": {
    "SET1": {"cards": [
        {"name": "Bolt", "identifiers": {"mcmMetaId": "1"}, "colors": ["R"],
         "convertedManaCost": "1", "power": "x", "manaCost": "{R}",
         "types": ["Instant"], "originalText": "deal 3 damage to any target"},
        {"name": "Bears", "identifiers": {"mcmMetaId": "2"}, "colors": ["G"],
         "convertedManaCost": 2, "power": "2", "toughness": "2",
         "types": ["Creature"], "subtypes": ["Bear"],
         "originalText": "deal combat damage"},
        {"name": "Bolt reprint", "identifiers": {"mcmMetaId": "1"}}
    ]},
    "SET2": {"cards": [
        {"name": "Angel", "identifiers": {"mcmMetaId": "3"}, "colors": ["W"],
         "convertedManaCost": 5, "types": ["Creature"], "subtypes": ["Angel"],
         "supertypes": ["Legendary"], "power": "4", "toughness": "4",
         "text": "Flying, vigilance"},
        {"name": "No id at all"}
    ]}
}}"#;

const CONFIG_ARCHETYPES: &str = "Aggro,Control,Midrange";

fn config(workers: usize) -> PipelineConfig {
    PipelineConfig::new(workers, LabelSchema::parse(CONFIG_ARCHETYPES))
}

#[test]
fn test_dedup_keeps_first_occurrence() {
    let file = source_file(SMALL_CORPUS);
    let report = run_import(file.path(), &config(2)).unwrap();

    let names: Vec<&str> = report.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Bolt", "Bears", "Angel"]);
    assert_eq!(report.duplicates, 1);
    assert_eq!(report.skipped, 1);
}

#[test]
fn test_coercion_fallback_example() {
    let file = source_file(
        r#"{"data": {"S": {"cards": [
            {"name": "Bolt", "identifiers": {"mcmMetaId": "1"}, "colors": ["R"],
             "convertedManaCost": "1", "power": "x"}
        ]}}}"#,
    );
    let report = run_import(file.path(), &config(1)).unwrap();

    assert_eq!(report.cards.len(), 1);
    let card = &report.cards[0];
    assert_eq!(card.power, 0);
    assert_eq!(card.converted_mana_cost, 1);
    assert_eq!(report.vocabulary.colors, ["R"]);
    assert_eq!(card.input.as_ref().unwrap().get("input_color_R"), Some(1.0));
}

#[test]
fn test_vocabulary_deterministic_across_worker_counts() {
    let file = source_file(SMALL_CORPUS);
    let reference = run_import(file.path(), &config(1)).unwrap();
    for workers in [2, 8] {
        let report = run_import(file.path(), &config(workers)).unwrap();
        assert_eq!(
            report.vocabulary, reference.vocabulary,
            "vocabulary differs at {workers} workers"
        );
        for (got, want) in report.cards.iter().zip(&reference.cards) {
            assert_eq!(got.input, want.input);
            assert_eq!(got.output, want.output);
        }
    }
}

#[test]
fn test_repeated_import_is_idempotent() {
    let file = source_file(SMALL_CORPUS);
    let first = run_import(file.path(), &config(4)).unwrap();
    let second = run_import(file.path(), &config(4)).unwrap();
    assert_eq!(first.cards, second.cards);
}

#[test]
fn test_length_invariant_on_every_entity() {
    let file = source_file(SMALL_CORPUS);
    let report = run_import(file.path(), &config(8)).unwrap();
    for card in &report.cards {
        let input = card.input.as_ref().unwrap();
        let output = card.output.as_ref().unwrap();
        assert_eq!(input.labels().len(), input.values().len());
        assert_eq!(output.labels().len(), output.values().len());
    }
}

#[test]
fn test_output_vector_matches_archetype_config() {
    let file = source_file(SMALL_CORPUS);
    let report = run_import(file.path(), &config(3)).unwrap();
    for card in &report.cards {
        let output = card.output.as_ref().unwrap();
        assert_eq!(output.dim(), 3);
        assert!(output.values().iter().all(|&v| v == 0.0));
        assert_eq!(
            output.labels(),
            [
                "output_archetype_Aggro",
                "output_archetype_Control",
                "output_archetype_Midrange"
            ]
        );
    }
}

#[test]
fn test_frequent_word_features_present() {
    let file = source_file(SMALL_CORPUS);
    let report = run_import(file.path(), &config(2)).unwrap();

    // "deal" and "damage" occur in two different texts.
    assert!(report.vocabulary.frequent_words.contains(&"deal".to_string()));
    assert!(report.vocabulary.frequent_words.contains(&"damage".to_string()));

    let bolt = &report.cards[0];
    assert_eq!(bolt.input.as_ref().unwrap().get("input_word_deal"), Some(1.0));
    // Angel's text contains neither.
    let angel = &report.cards[2];
    assert_eq!(angel.input.as_ref().unwrap().get("input_word_deal"), Some(0.0));
}

#[test]
fn test_empty_source_file_is_fatal() {
    let file = source_file("");
    let err = run_import(file.path(), &config(1)).unwrap_err();
    assert!(matches!(err, Error::EmptySource(_)));
}

#[test]
fn test_unparsable_source_is_fatal() {
    let file = source_file("{\"data\": oops");
    let err = run_import(file.path(), &config(1)).unwrap_err();
    assert!(matches!(err, Error::Json { .. }));
}

#[test]
fn test_empty_corpus_yields_empty_result() {
    let file = source_file(r#"{"data": {"S": {"cards": []}}}"#);
    let report = run_import(file.path(), &config(8)).unwrap();
    assert!(report.cards.is_empty());
    assert!(report.vocabulary.is_empty());
}

#[test]
fn test_single_record_any_worker_count() {
    let file = source_file(
        r#"{"data": {"S": {"cards": [
            {"name": "Solo", "identifiers": {"mcmMetaId": "7"}, "colors": ["U"]}
        ]}}}"#,
    );
    for workers in [1, 2, 8] {
        let report = run_import(file.path(), &config(workers)).unwrap();
        assert_eq!(report.cards.len(), 1);
        assert!(report.cards[0].has_vectors());
    }
}

#[test]
fn test_entities_serialize_for_persistence() {
    let file = source_file(SMALL_CORPUS);
    let report = run_import(file.path(), &config(2)).unwrap();
    let json = serde_json::to_string(&report.cards).unwrap();
    assert!(json.contains("\"input\""));
    assert!(json.contains("output_archetype_Aggro"));
}
