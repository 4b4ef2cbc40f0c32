//! Playback ordering and preemption, on a paused clock.

mod common;

use common::{fixtures, RecordingSpeech};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use vocab_core::types::WordPair;
use vocab_study::audio::{AudioQueue, PlaybackOutcome, PlaybackState};
use vocab_study::config::{AudioTiming, Voices};

fn queue(speech: &Arc<RecordingSpeech>) -> AudioQueue {
    AudioQueue::new(speech.clone(), Voices::default(), AudioTiming::default())
}

fn spawn_list(queue: &AudioQueue, pairs: Vec<WordPair>) -> tokio::task::JoinHandle<PlaybackOutcome> {
    let queue = queue.clone();
    tokio::spawn(async move { queue.play_list(pairs).await })
}

#[tokio::test(start_paused = true)]
async fn test_list_plays_every_pair_in_order() {
    let speech = RecordingSpeech::new(Duration::from_millis(100));
    let queue = queue(&speech);
    let pairs = fixtures::pairs(2);

    assert_eq!(queue.play_list(pairs.clone()).await, PlaybackOutcome::Completed);

    let expected: Vec<String> = pairs.iter().flat_map(fixtures::spoken_pair).collect();
    assert_eq!(speech.spoken(), expected);
    assert_eq!(queue.state(), PlaybackState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_new_playback_preempts_running_list() {
    let speech = RecordingSpeech::new(Duration::from_millis(100));
    let queue = queue(&speech);
    let list = spawn_list(&queue, fixtures::pairs(3));

    // The list starts after its 50ms grace and is mid-utterance at 120ms.
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert_eq!(queue.state(), PlaybackState::Playing);

    let single = WordPair::new("the cat", "de kat");
    assert_eq!(queue.play_pair(single.clone()).await, PlaybackOutcome::Completed);
    assert_eq!(list.await.unwrap(), PlaybackOutcome::Cancelled);

    let mut expected = vec!["word 0".to_string()];
    expected.extend(fixtures::spoken_pair(&single));
    assert_eq!(speech.spoken(), expected);
    assert_eq!(queue.state(), PlaybackState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_request_superseded_during_grace_never_speaks() {
    let speech = RecordingSpeech::new(Duration::from_millis(100));
    let queue = queue(&speech);
    let list = spawn_list(&queue, fixtures::pairs(2));

    tokio::time::sleep(Duration::from_millis(10)).await;
    let single = WordPair::new("the cat", "de kat");
    queue.play_pair(single.clone()).await;

    assert_eq!(list.await.unwrap(), PlaybackOutcome::Cancelled);
    assert_eq!(speech.spoken(), fixtures::spoken_pair(&single).to_vec());
}

#[tokio::test(start_paused = true)]
async fn test_stop_cancels_remaining_utterances() {
    let speech = RecordingSpeech::new(Duration::from_millis(100));
    let queue = queue(&speech);
    let list = spawn_list(&queue, fixtures::pairs(2));

    tokio::time::sleep(Duration::from_millis(120)).await;
    queue.stop();
    queue.stop();

    assert_eq!(list.await.unwrap(), PlaybackOutcome::Cancelled);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(speech.spoken(), vec!["word 0".to_string()]);
    assert_eq!(queue.state(), PlaybackState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_stop_when_idle_is_harmless() {
    let speech = RecordingSpeech::new(Duration::from_millis(100));
    let queue = queue(&speech);

    queue.stop();
    assert_eq!(queue.state(), PlaybackState::Idle);
    assert_eq!(speech.stops(), 1);
    assert!(speech.spoken().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_speech_failure_is_skipped() {
    let speech = RecordingSpeech::failing_on(Duration::from_millis(100), "means");
    let queue = queue(&speech);
    let pair = WordPair::new("the cat", "de kat");

    assert_eq!(queue.play_pair(pair.clone()).await, PlaybackOutcome::Completed);
    assert_eq!(speech.spoken(), fixtures::spoken_pair(&pair).to_vec());
}

#[tokio::test(start_paused = true)]
async fn test_empty_list_does_not_preempt() {
    let speech = RecordingSpeech::new(Duration::from_millis(100));
    let queue = queue(&speech);
    let pair = WordPair::new("the cat", "de kat");
    let single = {
        let queue = queue.clone();
        let pair = pair.clone();
        tokio::spawn(async move { queue.play_pair(pair).await })
    };

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert_eq!(queue.play_list(Vec::new()).await, PlaybackOutcome::Completed);

    assert_eq!(single.await.unwrap(), PlaybackOutcome::Completed);
    assert_eq!(speech.spoken(), fixtures::spoken_pair(&pair).to_vec());
}

#[tokio::test(start_paused = true)]
async fn test_variants_are_joined_for_speech() {
    let speech = RecordingSpeech::new(Duration::from_millis(100));
    let queue = queue(&speech);

    queue
        .play_pair(WordPair::new("to walk/to stroll", "lopen / wandelen"))
        .await;
    assert_eq!(
        speech.spoken(),
        vec!["to walk or to stroll", "means", "lopen, wandelen"]
    );
}
