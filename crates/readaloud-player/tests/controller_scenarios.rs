//! End-to-end controller scenarios driven through fake ports.

mod common;

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use tokio::sync::mpsc;

use common::{
    FakeMediaSession, ManualLocalAudio, MemoryAudioStore, ScriptedSynth, fast_config,
    wait_for_status, wait_for_stopped,
};
use readaloud_core::{
    AudioStore, MediaSessionAction, MediaSessionPort, PlayerEvent, SentenceStatus, TransportState,
};
use readaloud_player::{DefaultSegmenter, PlaybackController, PlayerConfig, PlayerPorts};

fn build(
    synth: Arc<ScriptedSynth>,
    local: Arc<ManualLocalAudio>,
    session: Option<Arc<FakeMediaSession>>,
    config: PlayerConfig,
) -> (
    PlaybackController,
    mpsc::UnboundedReceiver<PlayerEvent>,
    Arc<MemoryAudioStore>,
) {
    let audio_store = Arc::new(MemoryAudioStore::default());
    let ports = PlayerPorts {
        synthesizer: synth,
        segmenter: Arc::new(DefaultSegmenter::new()),
        audio_store: Arc::clone(&audio_store) as Arc<dyn AudioStore>,
        local_audio: local,
        media_session: session.map(|s| s as Arc<dyn MediaSessionPort>),
    };
    let (controller, events) = PlaybackController::new(ports, config);
    (controller, events, audio_store)
}

fn drain(events: &mut mpsc::UnboundedReceiver<PlayerEvent>) -> Vec<PlayerEvent> {
    let mut collected = Vec::new();
    while let Ok(event) = events.try_recv() {
        collected.push(event);
    }
    collected
}

/// Small settle time used before firing a manual finish so the previous
/// advance's debounce window has passed.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(60)).await;
}

#[tokio::test]
async fn scenario_a_plays_sentences_in_order_with_lookahead() {
    let synth = Arc::new(ScriptedSynth::new(Duration::from_millis(20)));
    let local = Arc::new(ManualLocalAudio::default());
    let (controller, _events, _store) =
        build(Arc::clone(&synth), Arc::clone(&local), None, fast_config());

    let count = controller.load("A. B. C.").await.unwrap();
    assert_eq!(count, 3);
    assert_eq!(
        controller.snapshot().count_with_status(SentenceStatus::Pending),
        3
    );

    controller.play().await.unwrap();
    wait_for_status(&controller, 0, SentenceStatus::Playing).await;

    // The lookahead window (3) clamps to the queue and warms everything.
    wait_for_status(&controller, 1, SentenceStatus::Ready).await;
    wait_for_status(&controller, 2, SentenceStatus::Ready).await;
    for index in 0..3 {
        assert_eq!(synth.calls_for(index), 1, "sentence {index} synthesized once");
    }

    settle().await;
    local.finish_current();
    wait_for_status(&controller, 0, SentenceStatus::Played).await;
    wait_for_status(&controller, 1, SentenceStatus::Playing).await;
    assert_eq!(controller.snapshot().current_index, Some(1));

    // Finish the remaining sentences; the queue ends in Stopped.
    settle().await;
    local.finish_current();
    wait_for_status(&controller, 2, SentenceStatus::Playing).await;
    settle().await;
    local.finish_current();
    wait_for_stopped(&controller).await;

    let snap = controller.snapshot();
    assert_eq!(snap.current_index, None);
    assert_eq!(snap.transport(), TransportState::Stopped);
    assert_eq!(snap.count_with_status(SentenceStatus::Playing), 0);
}

#[tokio::test]
async fn scenario_b_skip_back_restarts_and_ignores_stale_finish() {
    let synth = Arc::new(ScriptedSynth::new(Duration::from_millis(10)));
    let local = Arc::new(ManualLocalAudio::default());
    let (controller, _events, _store) =
        build(synth, Arc::clone(&local), None, fast_config());

    controller.load("A. B. C.").await.unwrap();
    controller.play().await.unwrap();
    wait_for_status(&controller, 0, SentenceStatus::Playing).await;

    settle().await;
    local.finish_current();
    wait_for_status(&controller, 1, SentenceStatus::Playing).await;

    // Steal sentence 1's completion callback so it can fire late, after
    // the skip has invalidated its epoch.
    let stale_finish = local.take_pending().expect("sentence 1 is playing");

    controller.skip_to(0).await;

    // Sentence 1 had cached audio, so the skip reset it to Ready.
    assert_eq!(
        controller.snapshot().sentences[1].status,
        SentenceStatus::Ready
    );

    wait_for_status(&controller, 0, SentenceStatus::Playing).await;
    assert_eq!(controller.snapshot().current_index, Some(0));

    // The old play's completion arrives late and must be ignored.
    stale_finish();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let snap = controller.snapshot();
    assert_eq!(snap.current_index, Some(0));
    assert_eq!(snap.sentences[0].status, SentenceStatus::Playing);
    assert_eq!(snap.sentences[1].status, SentenceStatus::Ready);
}

#[tokio::test]
async fn scenario_c_failed_sentence_is_skipped_without_backend_dispatch() {
    let synth = Arc::new(ScriptedSynth::failing(Duration::from_millis(10), [1]));
    let local = Arc::new(ManualLocalAudio::default());
    let (controller, _events, _store) =
        build(synth, Arc::clone(&local), None, fast_config());

    controller.load("A. B. C.").await.unwrap();
    controller.play().await.unwrap();
    wait_for_status(&controller, 0, SentenceStatus::Playing).await;
    wait_for_status(&controller, 1, SentenceStatus::Error).await;

    settle().await;
    local.finish_current();

    // The controller advances straight from 0 to 2.
    wait_for_status(&controller, 2, SentenceStatus::Playing).await;
    let snap = controller.snapshot();
    assert_eq!(snap.current_index, Some(2));
    assert_eq!(snap.sentences[1].status, SentenceStatus::Error);
    assert!(snap.sentences[1].error.is_some());

    // Only sentences 0 and 2 ever reached the local backend.
    assert_eq!(local.play_count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn scenario_d_poll_double_report_advances_once() {
    let synth = Arc::new(ScriptedSynth::new(Duration::from_millis(10)));
    let local = Arc::new(ManualLocalAudio::default());
    let (session, _actions) = FakeMediaSession::new();
    let config = PlayerConfig {
        poll_interval: Duration::from_millis(20),
        advance_debounce: Duration::from_millis(300),
        ..fast_config()
    };
    let (controller, mut events, _store) = build(
        synth,
        Arc::clone(&local),
        Some(Arc::clone(&session)),
        config,
    );

    controller.load("A. B. C.").await.unwrap();
    controller.play().await.unwrap();
    wait_for_status(&controller, 0, SentenceStatus::Playing).await;
    assert_eq!(session.played_urls.lock().unwrap().len(), 1);

    // Let the watcher observe playback running, then cut it. Every poll
    // tick from here on reports the same finish.
    session.set_playing(true);
    tokio::time::sleep(Duration::from_millis(80)).await;
    session.set_playing(false);

    wait_for_status(&controller, 0, SentenceStatus::Played).await;
    wait_for_status(&controller, 1, SentenceStatus::Playing).await;

    // Well inside the 300 ms debounce window: the duplicate reports for
    // sentence 0 must not have advanced the queue a second time.
    tokio::time::sleep(Duration::from_millis(150)).await;
    let snap = controller.snapshot();
    assert_eq!(snap.current_index, Some(1));
    assert_eq!(snap.sentences[1].status, SentenceStatus::Playing);
    assert_eq!(snap.sentences[2].status, SentenceStatus::Ready);

    let played_events = drain(&mut events)
        .into_iter()
        .filter(|e| {
            matches!(
                e,
                PlayerEvent::SentenceChanged {
                    index: 0,
                    status: SentenceStatus::Played
                }
            )
        })
        .count();
    assert_eq!(played_events, 1, "exactly one advance for sentence 0");
}

#[tokio::test]
async fn scenario_e_resume_does_not_redispatch() {
    let synth = Arc::new(ScriptedSynth::new(Duration::from_millis(10)));
    let local = Arc::new(ManualLocalAudio::default());
    let (controller, _events, _store) =
        build(Arc::clone(&synth), Arc::clone(&local), None, fast_config());

    controller.load("A. B. C.").await.unwrap();
    controller.play().await.unwrap();
    wait_for_status(&controller, 0, SentenceStatus::Playing).await;
    let calls_before = synth.call_count();

    controller.pause().await;
    assert_eq!(controller.transport(), TransportState::Paused);
    assert_eq!(local.pause_count.load(Ordering::SeqCst), 1);

    controller.play().await.unwrap();
    assert_eq!(controller.transport(), TransportState::Playing);

    // Resume in place: backend resumed, nothing re-dispatched.
    assert_eq!(local.resume_count.load(Ordering::SeqCst), 1);
    assert_eq!(local.play_count.load(Ordering::SeqCst), 1);
    assert_eq!(synth.call_count(), calls_before);

    let snap = controller.snapshot();
    assert_eq!(snap.current_index, Some(0));
    assert_eq!(snap.sentences[0].status, SentenceStatus::Playing);
}

#[tokio::test]
async fn media_play_failure_falls_back_to_local_audio() {
    let synth = Arc::new(ScriptedSynth::new(Duration::from_millis(10)));
    let local = Arc::new(ManualLocalAudio::default());
    let (session, _actions) = FakeMediaSession::new();
    session.fail_play.store(true, Ordering::SeqCst);
    let (controller, _events, _store) = build(
        synth,
        Arc::clone(&local),
        Some(Arc::clone(&session)),
        fast_config(),
    );

    controller.load("A. B.").await.unwrap();
    controller.play().await.unwrap();
    wait_for_status(&controller, 0, SentenceStatus::Playing).await;

    // Media session refused; the buffered audio played locally instead.
    assert_eq!(local.play_count.load(Ordering::SeqCst), 1);
    let snap = controller.snapshot();
    assert!(snap.sentences[0].duration_secs.is_some(), "audio kept");
}

#[tokio::test]
async fn persistence_failure_makes_sentence_poll_ineligible() {
    let synth = Arc::new(ScriptedSynth::new(Duration::from_millis(10)));
    let local = Arc::new(ManualLocalAudio::default());
    let (session, _actions) = FakeMediaSession::new();
    let (controller, _events, store) = build(
        synth,
        Arc::clone(&local),
        Some(Arc::clone(&session)),
        fast_config(),
    );
    store.fail.store(true, Ordering::SeqCst);

    controller.load("A. B.").await.unwrap();
    controller.play().await.unwrap();
    wait_for_status(&controller, 0, SentenceStatus::Playing).await;

    // No persisted URL, so the media session was never attempted.
    assert!(session.played_urls.lock().unwrap().is_empty());
    assert_eq!(local.play_count.load(Ordering::SeqCst), 1);
    assert!(!controller.snapshot().sentences[0].has_media_url);
}

#[tokio::test]
async fn hardware_actions_map_to_transport_operations() {
    let synth = Arc::new(ScriptedSynth::new(Duration::from_millis(10)));
    let local = Arc::new(ManualLocalAudio::default());
    let (session, actions) = FakeMediaSession::new();
    let (controller, _events, _store) = build(
        synth,
        Arc::clone(&local),
        Some(Arc::clone(&session)),
        fast_config(),
    );

    controller.load("A. B. C.").await.unwrap();
    controller.play().await.unwrap();
    wait_for_status(&controller, 0, SentenceStatus::Playing).await;

    actions.send(MediaSessionAction::Pause).unwrap();
    for _ in 0..100 {
        if controller.transport() == TransportState::Paused {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(controller.transport(), TransportState::Paused);

    actions.send(MediaSessionAction::Play).unwrap();
    for _ in 0..100 {
        if controller.transport() == TransportState::Playing {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(controller.transport(), TransportState::Playing);

    actions.send(MediaSessionAction::Next).unwrap();
    wait_for_status(&controller, 1, SentenceStatus::Playing).await;
    assert_eq!(controller.snapshot().current_index, Some(1));

    actions.send(MediaSessionAction::Stop).unwrap();
    wait_for_stopped(&controller).await;
    assert_eq!(controller.snapshot().current_index, None);
}
