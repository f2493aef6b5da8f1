//! Basic usage of the segmentation API

use fraza_api::{sentenize, Config, TextSegmenter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: convenience function with the embedded Russian profile
    println!("=== Convenience function ===");
    let text = "А. С. Пушкин родился в 1799 г. в Москве. Он великий поэт.";
    for (i, sentence) in sentenize(text)?.iter().enumerate() {
        println!("  {}: [{}..{}] {}", i + 1, sentence.start, sentence.stop, sentence.text);
    }

    // Method 2: reuse one segmenter for many texts
    println!("\n=== Segmenter instance ===");
    let segmenter = TextSegmenter::new()?;
    let tokens = segmenter.tokenize("Цена 3.14 рублей за кг. Дорого!");
    println!("  {} tokens", tokens.len());
    for token in &tokens {
        println!("    {:?} {:?}", token.kind, token.text);
    }

    // Method 3: custom configuration
    println!("\n=== Custom configuration ===");
    let config = Config::builder()
        .abbreviations(["тел", "эт"])
        .lowercase_continuation(true)
        .build()?;
    let segmenter = TextSegmenter::with_config(config)?;

    let output = segmenter.process("Офис: ул. Тверская, д. 1, эт. 5. Звоните!");
    println!("  {} sentences, {} tokens", output.metadata.sentence_count, output.metadata.token_count);

    let report = segmenter.assess("Это хороший текст. Сегментация надёжная.");
    println!("  quality score: {:.2}", report.score);

    Ok(())
}
