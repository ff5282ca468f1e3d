//! `AudioPlayer` interface: playback directives and the playback context.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::interfaces::{content_id, duration_from_millis, millis_from_duration};
use crate::protocol::kind::MessageKind;
use crate::protocol::lenient;
use crate::protocol::message::keys;
use crate::protocol::typed::{Payload, Variant};

/// How `ClearQueue` treats the current queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClearBehavior {
    /// Clear the queue but keep the current stream playing.
    ClearEnqueued,
    /// Clear the queue and stop the current stream.
    ClearAll,
    #[default]
    #[serde(other)]
    Unknown,
}

/// How `Play` merges its stream into the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayBehavior {
    ReplaceAll,
    Enqueue,
    ReplaceEnqueued,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Player state reported in `PlaybackState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlayerActivity {
    Idle,
    Paused,
    Playing,
    BufferUnderrun,
    Finished,
    Stopped,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Audio item carried by `Play`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioItem {
    #[serde(default, deserialize_with = "lenient::field")]
    pub audio_item_id: String,
    #[serde(default, deserialize_with = "lenient::object")]
    pub stream: Stream,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    #[serde(default, deserialize_with = "lenient::field")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient::field")]
    pub stream_format: String,
    #[serde(default, deserialize_with = "lenient::field")]
    pub offset_in_milliseconds: f64,
    #[serde(default, deserialize_with = "lenient::field")]
    pub expiry_time: String,
    #[serde(default, deserialize_with = "lenient::object")]
    pub progress_report: ProgressReport,
    #[serde(default, deserialize_with = "lenient::field")]
    pub token: String,
    #[serde(default, deserialize_with = "lenient::field")]
    pub expected_previous_token: String,
}

impl Stream {
    /// Position to start playback from.
    pub fn offset(&self) -> Duration {
        duration_from_millis(self.offset_in_milliseconds)
    }

    /// Content id when the stream is attached to the response (`cid:` URL).
    pub fn content_id(&self) -> &str {
        content_id(&self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    #[serde(default, deserialize_with = "lenient::field")]
    pub progress_report_delay_in_milliseconds: f64,
    #[serde(default, deserialize_with = "lenient::field")]
    pub progress_report_interval_in_milliseconds: f64,
}

impl ProgressReport {
    pub fn delay(&self) -> Duration {
        duration_from_millis(self.progress_report_delay_in_milliseconds)
    }

    pub fn interval(&self) -> Duration {
        duration_from_millis(self.progress_report_interval_in_milliseconds)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearQueuePayload {
    #[serde(default, deserialize_with = "lenient::field")]
    pub clear_behavior: ClearBehavior,
}

impl Payload for ClearQueuePayload {
    const KIND: MessageKind = MessageKind::ClearQueue;
}

/// The `ClearQueue` directive.
pub type ClearQueue = Variant<ClearQueuePayload>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayPayload {
    #[serde(default, deserialize_with = "lenient::object")]
    pub audio_item: AudioItem,
    #[serde(default, deserialize_with = "lenient::field")]
    pub play_behavior: PlayBehavior,
}

impl Payload for PlayPayload {
    const KIND: MessageKind = MessageKind::Play;
}

/// The `Play` directive.
pub type Play = Variant<PlayPayload>;

impl Play {
    /// `dialogRequestId` header, or `""` when the directive was not a reply.
    pub fn dialog_request_id(&self) -> &str {
        self.message().header_value(keys::DIALOG_REQUEST_ID)
    }

    pub fn message_id(&self) -> &str {
        self.message().header_value(keys::MESSAGE_ID)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackStatePayload {
    #[serde(default, deserialize_with = "lenient::field")]
    pub token: String,
    #[serde(default, deserialize_with = "lenient::field")]
    pub offset_in_milliseconds: f64,
    #[serde(default, deserialize_with = "lenient::field")]
    pub player_activity: PlayerActivity,
}

impl Payload for PlaybackStatePayload {
    const KIND: MessageKind = MessageKind::PlaybackState;
}

/// The `PlaybackState` context.
pub type PlaybackState = Variant<PlaybackStatePayload>;

impl PlaybackState {
    /// Build the context reported while a stream is loaded.
    ///
    /// The offset is carried as fractional milliseconds, so durations finer
    /// than `f64` can represent do not survive a round trip through `offset`.
    pub fn new(token: impl Into<String>, offset: Duration, activity: PlayerActivity) -> Self {
        Self::new_context(PlaybackStatePayload {
            token: token.into(),
            offset_in_milliseconds: millis_from_duration(offset),
            player_activity: activity,
        })
    }

    pub fn offset(&self) -> Duration {
        duration_from_millis(self.payload.offset_in_milliseconds)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StopPayload {}

impl Payload for StopPayload {
    const KIND: MessageKind = MessageKind::Stop;
}

/// The `Stop` directive.
pub type Stop = Variant<StopPayload>;
