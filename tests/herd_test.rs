use std::sync::Arc;
use std::time::Duration;

use cowspeed::{create_herd, Cow, Interference, InterferenceConfig, Pasture};

#[tokio::test(start_paused = true)]
async fn slow_map_doubles_in_order() {
    let pasture = Pasture::new();
    let result = pasture.slow_map(vec![1, 2, 3], |x| x * 2).await.unwrap();
    assert_eq!(result, vec![2, 4, 6]);
}

#[tokio::test(start_paused = true)]
async fn slow_map_preserves_length() {
    let pasture = Pasture::new();
    let input = vec!["a", "b", "c", "d", "e"];
    let result = pasture.slow_map(input.clone(), str::to_uppercase).await.unwrap();
    assert_eq!(result.len(), input.len());
}

#[tokio::test(start_paused = true)]
async fn slow_filter_keeps_matching_in_order() {
    let pasture = Pasture::new();
    let input = vec!["cat", "cow", "dog", "ox"];
    let result = pasture
        .slow_filter(input, |word| word.len() < 3)
        .await
        .unwrap();
    assert_eq!(result, vec!["ox"]);
}

#[tokio::test(start_paused = true)]
async fn slow_count_counts_everything() {
    let pasture = Pasture::new();
    let items = ["a", "b", "c", "d"];
    let count = pasture.slow_count(&items).await.unwrap();
    assert_eq!(count, 4);
}

#[tokio::test(start_paused = true)]
async fn interrupt_mid_count_returns_partial() {
    let pasture = Arc::new(Pasture::new());
    let interrupt = pasture.cow.interrupt_handle();

    let task = {
        let pasture = pasture.clone();
        tokio::spawn(async move {
            let items = ["a", "b", "c", "d"];
            pasture.slow_count(&items).await
        })
    };

    // Past the 500ms base delay and into the counting loop.
    tokio::time::sleep(Duration::from_millis(525)).await;
    interrupt.trigger();

    let count = task.await.unwrap().unwrap();
    assert!(count >= 1 && count < 4);
    assert!(!pasture.cow.is_chewing());
}

#[tokio::test(start_paused = true)]
async fn idle_interference_changes_nothing() {
    let interference = Arc::new(Interference::new(InterferenceConfig::default()));
    let pasture = Pasture {
        cow: Cow::new("UtilityCow"),
        interference: Some(interference),
    };
    let result = pasture.slow_map(vec![1, 2], |x| x + 1).await.unwrap();
    assert_eq!(result, vec![2, 3]);
}

#[tokio::test]
async fn create_herd_names_cows() {
    let herd = create_herd(3);
    assert_eq!(herd.len(), 3);
    assert_eq!(herd[0].name(), "Cow1");
    assert_eq!(herd[1].name(), "Cow2");
    assert_eq!(herd[2].name(), "Cow3");
}

#[tokio::test(start_paused = true)]
async fn herd_cows_are_independently_usable() {
    let herd = create_herd(2);
    assert_eq!(herd[0].slow_add(1, 2).await.unwrap(), 3);
    assert_eq!(herd[1].slow_add(3, 4).await.unwrap(), 7);
    assert!(!herd[0].is_chewing());
    assert!(!herd[1].is_chewing());
}
