//! Plays a paragraph through the full queue coordinator, with a tone
//! generator standing in for a real synthesis engine.
//!
//! ```sh
//! cargo run --example speak_demo -- "Hello there. This is a demo."
//! ```

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use readaloud_core::{SpeechSynthesizer, SynthesisAudio, SynthesisError, SynthesisRequest};
use readaloud_player::{
    DefaultSegmenter, FileAudioCache, PlaybackController, PlayerConfig, PlayerPorts,
    RodioAudioBackend,
};

const SAMPLE_RATE: u32 = 24_000;

/// Stand-in synthesis engine: one sine tone per sentence, pitched by
/// queue position, with duration scaled to the text length.
struct ToneSynth;

#[async_trait::async_trait]
impl SpeechSynthesizer for ToneSynth {
    async fn synthesize(
        &self,
        request: &SynthesisRequest,
    ) -> Result<SynthesisAudio, SynthesisError> {
        let seconds = (request.text.len() as f32 * 0.03).clamp(0.4, 2.0);
        let frequency = 330.0 + request.sentence_index as f32 * 55.0;
        let total = (seconds * SAMPLE_RATE as f32) as usize;

        let samples: Vec<i16> = (0..total)
            .map(|n| {
                let t = n as f32 / SAMPLE_RATE as f32;
                let fade = (1.0 - n as f32 / total as f32).min(t * 20.0).min(1.0);
                let value = (t * frequency * std::f32::consts::TAU).sin() * 0.2 * fade;
                (value * f32::from(i16::MAX)) as i16
            })
            .collect();

        Ok(SynthesisAudio {
            wav_bytes: encode_wav(&samples, SAMPLE_RATE),
            duration: Duration::from_secs_f32(seconds),
        })
    }
}

/// Encode 16-bit mono PCM as a WAV file.
fn encode_wav(samples: &[i16], sample_rate: u32) -> Vec<u8> {
    let data_len = (samples.len() * 2) as u32;
    let mut bytes = Vec::with_capacity(44 + data_len as usize);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
    bytes.extend_from_slice(b"WAVEfmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // PCM
    bytes.extend_from_slice(&1u16.to_le_bytes()); // mono
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&data_len.to_le_bytes());
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let text = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    let text = if text.is_empty() {
        "This is the readaloud demo. Each sentence becomes a tone. \
         Skipping and pausing work the same way they do with real speech."
            .to_string()
    } else {
        text
    };

    let ports = PlayerPorts {
        synthesizer: Arc::new(ToneSynth),
        segmenter: Arc::new(DefaultSegmenter::new()),
        audio_store: Arc::new(FileAudioCache::new(
            std::env::temp_dir().join("readaloud-demo"),
        )),
        local_audio: Arc::new(RodioAudioBackend::new()?),
        media_session: None,
    };

    let (controller, mut events) = PlaybackController::new(ports, PlayerConfig::default());

    let count = controller.load(&text).await?;
    println!("Loaded {count} sentences; playing...");
    controller.play().await?;

    while let Some(event) = events.recv().await {
        println!("{event:?}");
        if matches!(event, readaloud_core::PlayerEvent::PlaybackFinished) {
            break;
        }
    }

    Ok(())
}
