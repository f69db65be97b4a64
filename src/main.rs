use std::sync::Arc;

use cowspeed::{create_herd, load_pasture_config, Cow, Interference, Pasture, PastureConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let config = match args.windows(2).find(|w| w[0] == "--config").map(|w| w[1].clone()) {
        Some(path) => load_pasture_config(&path)?,
        None => PastureConfig::default(),
    };

    println!("=== Welcome to the cowspeed demo ===\n");

    println!("=== WARNING: releasing cows into the wild! ===");
    let interference = Arc::new(Interference::new(config.interference.clone()));
    interference.release("ChaosCow");

    println!("\n=== Basic operations (now with random cow interference!) ===");
    let bessie = Cow::with_config("Bessie", config.cow.clone());
    bessie.moo();

    let sum = bessie.slow_add(5, 3).await?;
    println!("slow addition result: {sum}");

    let greeting = bessie.slow_concat(&["Hello", " ", "World", "!"]).await?;
    println!("slow concatenation result: {greeting}");

    let lowered = bessie.chew("HELLO", |s| s.to_lowercase()).await?;
    println!("slow lowercase result: {lowered}");

    let answer = bessie.graze(|| 42).await?;
    println!("slow grazing produced: {answer}");

    bessie.ruminate(|| println!("(the operation ran, eventually)")).await?;

    println!("\n=== Collection operations ===");
    let pasture = Pasture {
        cow: Cow::with_config("UtilityCow", config.cow.clone()),
        interference: Some(interference.clone()),
    };

    let numbers = vec![5, 2, 8, 1, 9];
    println!("original: {numbers:?}");
    let doubled = pasture.slow_map(numbers, |x| x * 2).await?;
    println!("doubled: {doubled:?}");

    let words = vec!["cow", "bull", "calf", "ox", "cattle"];
    println!("original words: {words:?}");
    let short_words = pasture.slow_filter(words.clone(), |word| word.len() <= 3).await?;
    println!("short words: {short_words:?}");

    let count = pasture.slow_count(&words).await?;
    println!("slow count of words: {count}");

    println!("\n=== Herd operations ===");
    for cow in create_herd(3) {
        cow.moo();
    }

    println!("\n=== Attempting to contain the chaos ===");
    if interference.attempt_contain() {
        println!("the pasture is quiet again");
    } else {
        println!("the cows are still out there somewhere");
    }

    println!("\n=== Demo complete ===");
    Ok(())
}
