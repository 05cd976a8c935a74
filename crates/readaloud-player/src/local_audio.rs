//! Local decode-and-play backend — audio output via `rodio`.
//!
//! `rodio::OutputStream` is `!Send` on some platforms. Rather than using
//! `unsafe impl Send/Sync`, the stream and sink are confined to a single
//! dedicated OS thread and every operation is routed through a command
//! channel; the public [`RodioAudioBackend`] is the `Send + Sync` proxy
//! the controller holds behind the [`LocalAudioPort`] trait object.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use rodio::source::Source;
use rodio::{Decoder, OutputStream, Sink};

use readaloud_core::{DecodedAudio, LocalAudioError, LocalAudioPort, PlaybackDoneCallback};

// ── Commands ───────────────────────────────────────────────────────

enum AudioCommand {
    /// Start playing PCM samples; `on_finished` fires on natural drain.
    Play {
        samples: Vec<f32>,
        sample_rate: u32,
        on_finished: PlaybackDoneCallback,
        reply: mpsc::Sender<Result<(), LocalAudioError>>,
    },

    /// Pause the current sink, keeping position.
    Pause,

    /// Resume a paused sink.
    Resume,

    /// Stop playback immediately; the pending completion callback is
    /// discarded.
    Stop,

    /// Shut down the audio thread, releasing the output stream.
    Shutdown,
}

// ── Backend ────────────────────────────────────────────────────────

/// `rodio`-backed implementation of [`LocalAudioPort`].
pub struct RodioAudioBackend {
    cmd_tx: mpsc::Sender<AudioCommand>,
    thread: Option<thread::JoinHandle<()>>,
}

impl RodioAudioBackend {
    /// Spawn the audio thread and open the default output device.
    pub fn new() -> Result<Self, LocalAudioError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<AudioCommand>();
        let (init_tx, init_rx) = mpsc::channel::<Result<(), LocalAudioError>>();

        let thread = thread::Builder::new()
            .name("readaloud-audio".into())
            .spawn(move || run_audio_thread(&cmd_rx, &init_tx))
            .map_err(|e| {
                LocalAudioError::OutputStreamError(format!("failed to spawn audio thread: {e}"))
            })?;

        // Wait for the audio thread to finish initialisation.
        init_rx
            .recv()
            .map_err(|_| LocalAudioError::OutputStreamError("audio thread died".to_string()))??;

        Ok(Self {
            cmd_tx,
            thread: Some(thread),
        })
    }
}

impl LocalAudioPort for RodioAudioBackend {
    fn decode(&self, wav_bytes: &[u8]) -> Result<DecodedAudio, LocalAudioError> {
        decode_wav(wav_bytes)
    }

    fn play(
        &self,
        audio: DecodedAudio,
        on_finished: PlaybackDoneCallback,
    ) -> Result<(), LocalAudioError> {
        let (reply_tx, reply_rx) = mpsc::channel();
        self.cmd_tx
            .send(AudioCommand::Play {
                samples: audio.samples,
                sample_rate: audio.sample_rate,
                on_finished,
                reply: reply_tx,
            })
            .map_err(|_| LocalAudioError::OutputStreamError("audio thread died".to_string()))?;
        reply_rx
            .recv()
            .map_err(|_| LocalAudioError::OutputStreamError("audio thread died".to_string()))?
    }

    fn pause(&self) {
        let _ = self.cmd_tx.send(AudioCommand::Pause);
    }

    fn resume(&self) {
        let _ = self.cmd_tx.send(AudioCommand::Resume);
    }

    fn stop(&self) {
        let _ = self.cmd_tx.send(AudioCommand::Stop);
    }
}

impl Drop for RodioAudioBackend {
    fn drop(&mut self) {
        // Best-effort shutdown — the thread may already be dead.
        let _ = self.cmd_tx.send(AudioCommand::Shutdown);
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

// ── Audio thread ───────────────────────────────────────────────────

/// Body of the dedicated audio thread. Owns the output stream and the
/// current sink for their entire lifetime — they never cross thread
/// boundaries.
fn run_audio_thread(
    cmd_rx: &mpsc::Receiver<AudioCommand>,
    init_tx: &mpsc::Sender<Result<(), LocalAudioError>>,
) {
    let (stream, stream_handle) = match OutputStream::try_default() {
        Ok(pair) => pair,
        Err(e) => {
            let _ = init_tx.send(Err(LocalAudioError::OutputStreamError(e.to_string())));
            return;
        }
    };
    // Keep the stream alive for the whole thread lifetime.
    let _stream = stream;

    if init_tx.send(Ok(())).is_err() {
        return;
    }

    let mut sink: Option<Arc<Sink>> = None;
    // Set while a sentence is playing; cleared by Stop so the completion
    // watcher knows whether the drain was natural.
    let mut playing_flag: Option<Arc<AtomicBool>> = None;

    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            AudioCommand::Play {
                samples,
                sample_rate,
                on_finished,
                reply,
            } => {
                // Cut short any previous sentence.
                stop_current(&mut sink, &mut playing_flag);

                let new_sink = match Sink::try_new(&stream_handle) {
                    Ok(s) => Arc::new(s),
                    Err(e) => {
                        let _ = reply.send(Err(LocalAudioError::OutputStreamError(e.to_string())));
                        continue;
                    }
                };

                let source = rodio::buffer::SamplesBuffer::new(1, sample_rate, samples);
                new_sink.append(source);

                let flag = Arc::new(AtomicBool::new(true));
                spawn_completion_watcher(Arc::clone(&new_sink), Arc::clone(&flag), on_finished);

                sink = Some(new_sink);
                playing_flag = Some(flag);
                let _ = reply.send(Ok(()));
            }

            AudioCommand::Pause => {
                if let Some(ref s) = sink {
                    s.pause();
                }
            }

            AudioCommand::Resume => {
                if let Some(ref s) = sink {
                    s.play();
                }
            }

            AudioCommand::Stop => {
                stop_current(&mut sink, &mut playing_flag);
            }

            AudioCommand::Shutdown => break,
        }
    }

    stop_current(&mut sink, &mut playing_flag);
    tracing::debug!("Audio thread shutting down");
}

/// Stop the active sink and mark the playback as cut short so the
/// completion watcher suppresses its callback.
fn stop_current(sink: &mut Option<Arc<Sink>>, playing_flag: &mut Option<Arc<AtomicBool>>) {
    if let Some(flag) = playing_flag.take() {
        flag.store(false, Ordering::SeqCst);
    }
    if let Some(s) = sink.take() {
        s.stop();
    }
}

/// Spawn a thread that blocks until the sink drains or is stopped. On
/// natural completion the callback fires exactly once; a stop beforehand
/// suppresses it.
fn spawn_completion_watcher(
    sink: Arc<Sink>,
    playing_flag: Arc<AtomicBool>,
    on_finished: PlaybackDoneCallback,
) {
    thread::spawn(move || {
        // `sleep_until_end()` returns when the queue drains or `stop()`
        // drops the internal sources.
        sink.sleep_until_end();

        if !playing_flag.swap(false, Ordering::SeqCst) {
            // Stopped externally — the controller already moved on.
            return;
        }

        tracing::debug!("Local playback finished naturally");
        on_finished();
    });
}

// ── Decoding ───────────────────────────────────────────────────────

/// Decode encoded WAV bytes to mono PCM f32.
fn decode_wav(wav_bytes: &[u8]) -> Result<DecodedAudio, LocalAudioError> {
    let decoder = Decoder::new(Cursor::new(wav_bytes.to_vec()))
        .map_err(|e| LocalAudioError::DecodeFailed(e.to_string()))?;

    let sample_rate = decoder.sample_rate();
    let channels = usize::from(decoder.channels());
    let interleaved: Vec<f32> = decoder.convert_samples().collect();

    // Synthesis output is mono; downmix if it is not.
    #[allow(clippy::cast_precision_loss)] // frame width is 1–8 channels
    let samples: Vec<f32> = if channels <= 1 {
        interleaved
    } else {
        interleaved
            .chunks(channels)
            .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
            .collect()
    };

    if sample_rate == 0 || samples.is_empty() {
        return Err(LocalAudioError::DecodeFailed(
            "decoded audio is empty".to_string(),
        ));
    }

    #[allow(clippy::cast_precision_loss)] // sample counts fit f64 exactly
    let duration = Duration::from_secs_f64(samples.len() as f64 / f64::from(sample_rate));

    Ok(DecodedAudio {
        samples,
        sample_rate,
        duration,
    })
}
