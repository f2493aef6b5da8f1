//! End-to-end segmentation tests with the embedded Russian profile.

use fraza_api::{Config, TextSegmenter, TokenKind, TokenKindDto};

fn segmenter() -> TextSegmenter {
    TextSegmenter::new().unwrap()
}

fn sentence_texts(text: &str) -> Vec<String> {
    segmenter()
        .segment(text)
        .iter()
        .map(|s| s.text.to_string())
        .collect()
}

#[test]
fn test_decimal_number_stays_whole() {
    let tokens = segmenter().tokenize("Цена 3.14 рублей.");
    let number = tokens.iter().find(|t| t.kind == TokenKind::Number).unwrap();
    assert_eq!(number.text, "3.14");
    assert_eq!(sentence_texts("Цена 3.14 рублей.").len(), 1);
}

#[test]
fn test_street_abbreviation_blocks() {
    assert_eq!(
        sentence_texts("Он живёт на ул. Ленина."),
        vec!["Он живёт на ул. Ленина."]
    );
}

#[test]
fn test_initials_block() {
    let s = segmenter();
    let text = "А. С. Пушкин родился в Москве.";
    let tokens = s.tokenize(text);
    assert_eq!(tokens[0].text, "А.");
    assert_eq!(tokens[0].kind, TokenKind::Initial);
    assert_eq!(tokens[1].text, "С.");
    assert_eq!(tokens[1].kind, TokenKind::Initial);

    let sentences = s.segment(text);
    assert_eq!(sentences.len(), 1);
}

#[test]
fn test_genuine_boundary_offsets() {
    let text = "Это первое предложение. Это второе.";
    let sentences = segmenter().segment(text);
    assert_eq!(sentences.len(), 2);
    assert_eq!(sentences[0].text, "Это первое предложение.");
    assert_eq!(&text[sentences[1].start..sentences[1].stop], "Это второе.");
}

#[test]
fn test_quote_suppression() {
    assert_eq!(
        sentence_texts("Он сказал: «Это конец. Или нет». Посмотрим."),
        vec!["Он сказал: «Это конец. Или нет».", "Посмотрим."]
    );
}

#[test]
fn test_address_then_new_sentence() {
    assert_eq!(
        sentence_texts("Москва, ул. Тверская, д. 1. XXI век."),
        vec!["Москва, ул. Тверская, д. 1.", "XXI век."]
    );
}

#[test]
fn test_professor_abbreviation() {
    assert_eq!(
        sentence_texts("Лекцию читал проф. Иванов из МГУ. Было интересно."),
        vec!["Лекцию читал проф. Иванов из МГУ.", "Было интересно."]
    );
}

#[test]
fn test_exclamation_and_question() {
    assert_eq!(
        sentence_texts("Привет! Как дела? Всё хорошо."),
        vec!["Привет!", "Как дела?", "Всё хорошо."]
    );
}

#[test]
fn test_year_abbreviation_joins() {
    // The trailing period belongs to the abbreviation token, so the year
    // construction never opens a boundary even before a capital.
    assert_eq!(sentence_texts("Он родился в 1799 г. в Москве.").len(), 1);
    assert_eq!(
        sentence_texts("Встреча в 10 ч. 30 мин. Не опаздывайте.").len(),
        1
    );
}

#[test]
fn test_unit_letter_keeps_ordinary_period() {
    // "C" in "25.5°C." is a unit, not a name initial; the period ends
    // the sentence even though the next word is capitalized.
    let s = segmenter();
    let text = "Температура составила 25.5°C. Это важный результат.";
    let tokens = s.tokenize(text);
    assert!(tokens.iter().all(|t| t.kind != TokenKind::Initial));
    assert_eq!(
        s.segment(text)
            .iter()
            .map(|sent| sent.text)
            .collect::<Vec<_>>(),
        vec![
            "Температура составила 25.5°C.",
            "Это важный результат."
        ]
    );
}

#[test]
fn test_multiline_paragraphs() {
    let text = "Первое предложение.\n\nВторое предложение после пустой строки.";
    assert_eq!(sentence_texts(text).len(), 2);
}

#[test]
fn test_ellipsis_boundary() {
    assert_eq!(
        sentence_texts("Он ушёл… Настала тишина."),
        vec!["Он ушёл…", "Настала тишина."]
    );
    assert_eq!(sentence_texts("Он ушёл… и вернулся.").len(), 1);
}

#[test]
fn test_direct_speech_flag() {
    let sentences = segmenter().segment("— Привет, — сказал он.");
    assert_eq!(sentences.len(), 1);
    assert!(sentences[0].direct_speech);
}

#[test]
fn test_etc_abbreviation() {
    assert_eq!(
        sentence_texts("Купил хлеб, молоко и т.д. на рынке."),
        vec!["Купил хлеб, молоко и т.д. на рынке."]
    );
}

#[test]
fn test_token_pass_reuse() {
    let s = segmenter();
    let text = "Первое. Второе! Третье?";
    let tokens = s.tokenize(text);
    let direct = s.segment(text);
    let reused = s.segment_tokens(text, &tokens);
    assert_eq!(direct, reused);
    assert_eq!(reused.len(), 3);
}

#[test]
fn test_disable_lowercase_continuation() {
    let text = "Он замолчал. и вышел.";
    assert_eq!(sentence_texts(text).len(), 1);

    let config = Config::builder()
        .lowercase_continuation(false)
        .build()
        .unwrap();
    let split = TextSegmenter::with_config(config).unwrap().segment(text);
    assert_eq!(split.len(), 2);
}

#[test]
fn test_process_output() {
    let output = segmenter().process("Он жил в г. Москва. Потом уехал.");
    assert_eq!(output.metadata.sentence_count, 2);
    assert_eq!(output.metadata.token_count, output.tokens.len());
    assert!(output.tokens.iter().any(|t| t.kind == TokenKindDto::Abbr));

    // Sentences index back into the token list
    for sentence in &output.sentences {
        let (first, last) = sentence.token_range;
        assert!(first < last);
        assert!(last <= output.tokens.len());
        assert_eq!(output.tokens[first].start, sentence.start);
    }
}

#[test]
fn test_quality_assessment() {
    let report = segmenter().assess("Это первое предложение. Это второе предложение.");
    assert_eq!(report.sentence_count, 2);
    assert_eq!(report.score, 1.0);
}

#[cfg(feature = "json")]
#[test]
fn test_output_json_roundtrip() {
    let output = segmenter().process("Привет! Как дела?");
    let json = serde_json::to_string_pretty(&output).unwrap();
    let back: fraza_api::Output = serde_json::from_str(&json).unwrap();
    assert_eq!(output, back);
}
